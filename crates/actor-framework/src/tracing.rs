//! # Observability & Tracing
//!
//! Structured logging for every actor built on this framework.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: start, exit reason, number of cancelled messages (`info`)
//! - **Dispatch**: every message in (`--> dispatch`) and every reply out (`<-- dispatch`) (`debug`)
//! - **Failures**: handler errors and panics with the actor's name and id (`error`)
//!
//! Actors are identified by a short `Name#id` field, e.g. `actor=Model#1`.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Every message through every mailbox
//! RUST_LOG=debug cargo run
//!
//! # Framework internals only
//! RUST_LOG=actor_framework=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes tracing with `RUST_LOG`, falling back to `info`.
pub fn setup_tracing() {
    setup_tracing_with("info");
}

/// Initializes tracing with `RUST_LOG`, falling back to `default_directive`
/// when the variable is unset or invalid.
pub fn setup_tracing_with(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - the actor field identifies the source
        .compact()
        .init();
}
