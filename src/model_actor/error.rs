//! Error types for the Model actor.

use thiserror::Error;

/// Errors that can occur during model operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// The site is not in the configured site list.
    #[error("unknown site {0}")]
    UnknownSite(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
