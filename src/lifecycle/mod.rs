//! # System Lifecycle & Orchestration
//!
//! Builds the actor system from explicit configuration and tears it down in
//! order. There are no globals: whoever owns the [`NewsSystem`] owns the actors.
//!
//! ## Startup
//!
//! 1. **Model** - spawned here with the site list, TTL and HTTP client
//! 2. **Fetchers** - spawned lazily by the Model, one per site, on the first cache miss
//! 3. **Responders** - spawned per HTTP request by the server
//!
//! ## Graceful Shutdown
//!
//! Stopping the Model stops every Fetcher from its `on_stop` hook, then fails
//! any request still waiting on one, so no HTTP handler is left hanging.
//! [`NewsSystem::shutdown`] then awaits the Model's task and reports a panic as
//! an error.

pub mod news_system;

pub use news_system::*;
