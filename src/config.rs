//! Command-line configuration.

use crate::model_actor::DEFAULT_TTL;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Coalescing news cache served over HTTP
#[derive(Parser, Debug)]
#[command(name = "newsfeed")]
#[command(about = "Caches the latest headline of each configured news feed")]
#[command(version)]
pub struct Cli {
    /// Address the HTTP listener binds to
    #[arg(short, long, default_value = "127.0.0.1:4711")]
    pub listen: SocketAddr,

    /// JSON file with the list of sites
    #[arg(short, long, default_value = "sites.json")]
    pub sites: PathBuf,

    /// How long a fetched headline stays fresh, in seconds
    #[arg(long, default_value_t = DEFAULT_TTL.as_secs())]
    pub ttl_secs: u64,

    /// Give up on an outbound fetch after this many seconds (no limit by default)
    #[arg(long)]
    pub fetch_timeout_secs: Option<u64>,

    /// Enable verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
