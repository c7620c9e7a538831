use actor_framework::tracing::setup_tracing_with;
use clap::Parser;
use newsfeed::config::Cli;
use newsfeed::domain::load_sites;
use newsfeed::http_client::ReqwestFetch;
use newsfeed::lifecycle::NewsSystem;
use newsfeed::server::{self, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    setup_tracing_with(cli.log_directive());

    let sites = load_sites(&cli.sites).map_err(|e| {
        error!(error = %e, "Configuration failed");
        e.to_string()
    })?;
    let http = ReqwestFetch::new(cli.fetch_timeout()).map_err(|e| e.to_string())?;

    let system = NewsSystem::new(&sites, cli.ttl(), Arc::new(http));

    let listener = TcpListener::bind(cli.listen).await.map_err(|e| {
        error!(addr = %cli.listen, error = %e, "Bind failed");
        e.to_string()
    })?;

    let served = server::serve(listener, AppState::new(system.model.clone())).await;
    if let Err(e) = &served {
        error!(error = %e, "Server failed");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    served.map_err(|e| e.to_string())
}
