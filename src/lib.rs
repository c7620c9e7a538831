//! # Newsfeed
//!
//! A small HTTP service that caches the latest headline of each configured news
//! feed, built from a handful of cooperating actors.
//!
//! ## 🚀 Core Concepts
//!
//! ### Request Coalescing
//! However many clients ask for the same stale site at once, the site is fetched
//! once. The [`Model`](model_actor::Model) keeps every requester waiting on the
//! site's entry and answers them all when the single fetch comes back.
//!
//! ### One Actor per Concern
//! - **Model** ([`model_actor`]): owns the cache, decides when to fetch.
//! - **Fetcher** ([`fetcher_actor`]): one per site, performs the outbound request
//!   and always answers with exactly one outcome message.
//! - **Responder** ([`responder_actor`]): one per HTTP request, completes it and exits.
//!
//! No actor ever blocks on another: the Model *tells* a Fetcher to query and the
//! Fetcher *tells* the result back, so a hung feed only stalls its own site.
//!
//! ## 🗺️ Module Tour
//!
//! - [`lifecycle`]: builds the system from explicit configuration and shuts it down.
//! - [`clients`]: typed wrapper around the Model's `ActorRef`.
//! - [`server`]: the axum routes.
//! - [`http_client`]: outbound HTTP behind a trait, with a reqwest implementation.
//! - [`config`] / [`domain`]: command line, site list, status snapshot.
//!
//! ### Running
//!
//! ```bash
//! RUST_LOG=debug cargo run -- --sites sites.json --ttl-secs 60
//! curl localhost:4711/news/bbc
//! ```

pub mod clients;
pub mod config;
pub mod domain;
pub mod fetcher_actor;
pub mod http_client;
pub mod lifecycle;
pub mod model_actor;
pub mod responder_actor;
pub mod server;
