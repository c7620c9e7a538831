//! Site list loaded once at startup.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One configured news source.
///
/// Extra fields in the JSON object are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub site: String,
    pub url: String,
}

impl SiteConfig {
    pub fn new(site: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            url: url.into(),
        }
    }
}

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate site: {0}")]
    DuplicateSite(String),

    #[error("site entry {index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },
}

/// Reads and validates the site list at `path`.
pub fn load_sites(path: &Path) -> Result<Vec<SiteConfig>, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sites(&json)
}

/// Parses a JSON array of `{"site": .., "url": ..}` objects, keeping file order.
pub fn parse_sites(json: &str) -> Result<Vec<SiteConfig>, ConfigError> {
    let sites: Vec<SiteConfig> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for (index, config) in sites.iter().enumerate() {
        if config.site.is_empty() {
            return Err(ConfigError::EmptyField {
                index,
                field: "site",
            });
        }
        if config.url.is_empty() {
            return Err(ConfigError::EmptyField { index, field: "url" });
        }
        if !seen.insert(config.site.as_str()) {
            return Err(ConfigError::DuplicateSite(config.site.clone()));
        }
    }

    Ok(sites)
}
