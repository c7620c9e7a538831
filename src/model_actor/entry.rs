use crate::domain::SiteConfig;
use crate::fetcher_actor::Fetcher;
use crate::responder_actor::Responder;
use actor_framework::ActorRef;
use tokio::time::Instant;

/// A cached headline and the instant it stops being fresh.
#[derive(Debug, Clone)]
pub struct Cached {
    pub news: String,
    pub expires: Instant,
}

/// Per-site state held by the Model.
pub struct Entry {
    pub site: String,
    pub url: String,
    pub cached: Option<Cached>,
    /// A query is out at the Fetcher.
    pub pending: bool,
    /// Responders waiting for that query, in arrival order.
    pub waiting: Vec<ActorRef<Responder>>,
    /// Spawned on the first cache miss.
    pub fetcher: Option<ActorRef<Fetcher>>,
}

impl Entry {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            site: config.site.clone(),
            url: config.url.clone(),
            cached: None,
            pending: false,
            waiting: Vec::new(),
            fetcher: None,
        }
    }

    /// Cached headline if it has not expired at `now`.
    pub fn fresh(&self, now: Instant) -> Option<&str> {
        self.cached
            .as_ref()
            .filter(|cached| now < cached.expires)
            .map(|cached| cached.news.as_str())
    }

    /// Cached headline regardless of expiry.
    pub fn latest(&self) -> Option<&str> {
        self.cached.as_ref().map(|cached| cached.news.as_str())
    }

    /// Empties the waiting list, oldest request first.
    pub fn take_waiting(&mut self) -> Vec<ActorRef<Responder>> {
        std::mem::take(&mut self.waiting)
    }
}
