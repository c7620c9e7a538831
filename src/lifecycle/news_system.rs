use crate::clients::ModelClient;
use crate::domain::SiteConfig;
use crate::http_client::HttpFetch;
use actor_framework::ActorClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// The running news service.
///
/// # Example
///
/// ```ignore
/// let system = NewsSystem::new(&sites, Duration::from_secs(300), http);
///
/// let snapshot = system.model.status().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct NewsSystem {
    /// Client for interacting with the Model actor
    pub model: ModelClient,

    /// Task handle of the Model actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl NewsSystem {
    /// Spawns the Model actor. Must be called from within a Tokio runtime.
    pub fn new(sites: &[SiteConfig], ttl: Duration, http: Arc<dyn HttpFetch>) -> Self {
        let (model_cell, model) = crate::model_actor::new(sites, ttl, http);
        let handle = tokio::spawn(model_cell.run());

        info!(sites = sites.len(), ttl_secs = ttl.as_secs(), "News system started");
        Self { model, handle }
    }

    /// Stops the Model (and with it every Fetcher) and waits for its task.
    ///
    /// Safe to call after the Model was already stopped through the HTTP surface.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        self.model.stop().await;

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
