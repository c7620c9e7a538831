//! Model actor: the site cache, with request coalescing.

pub mod entity;
pub mod entry;
pub mod error;
pub mod messages;

pub use entity::*;
pub use error::*;
pub use messages::*;

use crate::clients::ModelClient;
use crate::domain::SiteConfig;
use crate::http_client::HttpFetch;
use actor_framework::ActorCell;
use std::sync::Arc;
use std::time::Duration;

/// Creates a new Model actor and its client. The caller runs the cell.
pub fn new(
    sites: &[SiteConfig],
    ttl: Duration,
    http: Arc<dyn HttpFetch>,
) -> (ActorCell<Model>, ModelClient) {
    let (cell, model) = ActorCell::new(Model::new(sites, ttl, http));
    (cell, ModelClient::new(model))
}
