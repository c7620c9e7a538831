//! Typed clients wrapping `ActorRef`s, so callers never build messages by hand.

pub mod model_client;

pub use model_client::ModelClient;
