use super::entry::{Cached, Entry};
use super::{ModelError, ModelMessage, ModelReply};
use crate::domain::{SiteConfig, SiteStatus, StatusSnapshot};
use crate::fetcher_actor::{self, FetcherMessage};
use crate::http_client::HttpFetch;
use crate::responder_actor::{Reply, Responder};
use actor_framework::{Actor, ActorRef, Context};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Default time a headline stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Failure body for requests the service can no longer answer.
pub const STOPPING: &str = "service stopping\n";
const UNAVAILABLE: &str = "no news is bad news\n";

/// The cache: one [`Entry`] per configured site.
///
/// # Coalescing
///
/// However many requests arrive for a stale site, at most one query is out at
/// its Fetcher. Requesters queue on the entry and are all answered, in order,
/// when that query comes back.
pub struct Model {
    entries: HashMap<String, Entry>,
    /// Configured site order, used for status snapshots.
    order: Vec<String>,
    ttl: Duration,
    http: Arc<dyn HttpFetch>,
}

impl Model {
    pub fn new(sites: &[SiteConfig], ttl: Duration, http: Arc<dyn HttpFetch>) -> Self {
        Self {
            entries: sites
                .iter()
                .map(|config| (config.site.clone(), Entry::new(config)))
                .collect(),
            order: sites.iter().map(|config| config.site.clone()).collect(),
            ttl,
            http,
        }
    }

    fn latest_news(
        &mut self,
        site: String,
        sender: ActorRef<Responder>,
        ctx: &Context<Self>,
    ) {
        let Some(entry) = self.entries.get_mut(&site) else {
            warn!(%site, "Unknown site requested");
            sender.tell(Reply::Failure(format!("unknown site {site}\n")));
            return;
        };

        if let Some(news) = entry.fresh(Instant::now()) {
            debug!(%site, "Using cached data");
            sender.tell(Reply::Success(format!("{news}\n")));
            return;
        }

        let fetcher = match &entry.fetcher {
            Some(fetcher) => fetcher.clone(),
            None => {
                let fetcher =
                    fetcher_actor::spawn(&entry.site, &entry.url, Arc::clone(&self.http));
                entry.fetcher = Some(fetcher.clone());
                fetcher
            }
        };

        if !entry.pending {
            debug!(%site, "Querying fetcher");
            entry.pending = true;
            fetcher.tell(FetcherMessage::Query {
                reply_to: ctx.myself().clone(),
            });
        }

        entry.waiting.push(sender);
    }

    fn news_update(&mut self, site: String, news: String) -> Result<(), ModelError> {
        let expires = Instant::now() + self.ttl;
        let entry = self.entry_mut(&site)?;

        entry.cached = Some(Cached {
            news: news.clone(),
            expires,
        });
        entry.pending = false;

        // Answered in arrival order
        let waiting = entry.take_waiting();
        info!(%site, %news, waiting = waiting.len(), "News updated");
        for sender in waiting {
            sender.tell(Reply::Success(format!("{news}\n")));
        }
        Ok(())
    }

    fn news_unavailable(&mut self, site: String) -> Result<(), ModelError> {
        let entry = self.entry_mut(&site)?;

        entry.cached = None;
        entry.pending = false;

        let waiting = entry.take_waiting();
        warn!(%site, waiting = waiting.len(), "News unavailable");
        for sender in waiting {
            sender.tell(Reply::Failure(UNAVAILABLE.to_string()));
        }
        Ok(())
    }

    fn status(&self) -> StatusSnapshot {
        self.order
            .iter()
            .filter_map(|site| self.entries.get(site))
            .map(|entry| {
                (
                    entry.site.clone(),
                    SiteStatus {
                        latest: entry.latest().map(str::to_owned),
                    },
                )
            })
            .collect()
    }

    fn reset(&mut self) {
        for entry in self.entries.values_mut() {
            entry.cached = None;
        }
        info!(sites = self.entries.len(), "Cache reset");
    }

    fn entry_mut(&mut self, site: &str) -> Result<&mut Entry, ModelError> {
        self.entries
            .get_mut(site)
            .ok_or_else(|| ModelError::UnknownSite(site.to_string()))
    }
}

#[async_trait]
impl Actor for Model {
    type Message = ModelMessage;
    type Reply = ModelReply;
    type Error = ModelError;

    async fn handle(
        &mut self,
        msg: ModelMessage,
        ctx: &Context<Self>,
    ) -> Result<ModelReply, ModelError> {
        match msg {
            ModelMessage::LatestNews { site, sender } => self.latest_news(site, sender, ctx),
            ModelMessage::NewsUpdate { site, news } => self.news_update(site, news)?,
            ModelMessage::NewsUnavailable { site } => self.news_unavailable(site)?,
            ModelMessage::Status => return Ok(ModelReply::Status(self.status())),
            ModelMessage::Reset => self.reset(),
        }
        Ok(ModelReply::Done)
    }

    /// Stops every Fetcher, then fails whoever is still waiting on one.
    async fn on_stop(&mut self, _ctx: &Context<Self>) {
        let mut fetchers = 0;
        for entry in self.entries.values_mut() {
            if let Some(fetcher) = entry.fetcher.take() {
                fetcher.stop().await;
                fetchers += 1;
            }
        }

        let mut failed = 0;
        for entry in self.entries.values_mut() {
            entry.pending = false;
            for sender in entry.take_waiting() {
                sender.tell(Reply::Failure(STOPPING.to_string()));
                failed += 1;
            }
        }

        info!(fetchers, failed, "Model stopped");
    }
}
