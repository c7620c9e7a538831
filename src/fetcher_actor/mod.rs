//! Fetcher actor: one per site, performs the outbound fetch.

pub mod entity;
pub mod error;
pub mod feed;

pub use entity::*;
pub use error::*;

use crate::http_client::HttpFetch;
use actor_framework::ActorRef;
use std::sync::Arc;

/// Starts a Fetcher for `site`.
pub fn spawn(site: &str, url: &str, http: Arc<dyn HttpFetch>) -> ActorRef<Fetcher> {
    actor_framework::spawn(Fetcher::new(site, url, http))
}
