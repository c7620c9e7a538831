//! Snapshot returned by the Model's `Status` request.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Cached headline for one site, `None` when nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SiteStatus {
    pub latest: Option<String>,
}

/// Site → status, in configured site order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    sites: Vec<(String, SiteStatus)>,
}

impl StatusSnapshot {
    pub fn get(&self, site: &str) -> Option<&SiteStatus> {
        self.sites
            .iter()
            .find(|(name, _)| name == site)
            .map(|(_, status)| status)
    }

    /// Cached value for `site`; `None` if the site is unknown or nothing is cached.
    pub fn latest(&self, site: &str) -> Option<&str> {
        self.get(site).and_then(|status| status.latest.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteStatus)> {
        self.sites
            .iter()
            .map(|(site, status)| (site.as_str(), status))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl FromIterator<(String, SiteStatus)> for StatusSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, SiteStatus)>>(iter: I) -> Self {
        Self {
            sites: iter.into_iter().collect(),
        }
    }
}

impl Serialize for StatusSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sites.len()))?;
        for (site, status) in &self.sites {
            map.serialize_entry(site, status)?;
        }
        map.end()
    }
}
