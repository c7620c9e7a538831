//! # Framework Errors
//!
//! This module defines the error type shared by every actor and every handle.
//! Handler errors stay typed per actor (`Actor::Error`); the framework only boxes
//! them on their way back to an `ask` caller.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The target's mailbox was already closed when the request was sent.
    #[error("Actor stopped")]
    ActorStopped,
    /// The request was queued but never dispatched (the actor shut down first).
    #[error("Message cancelled")]
    Cancelled,
    /// The handler returned an error.
    #[error("Handler error: {0}")]
    Handler(Box<dyn std::error::Error + Send + Sync>),
    /// The handler panicked while processing the message.
    #[error("Handler panicked: {0}")]
    Panicked(String),
}

impl FrameworkError {
    /// True for the two outcomes that mean "the actor never got to it".
    pub fn is_undelivered(&self) -> bool {
        matches!(self, FrameworkError::ActorStopped | FrameworkError::Cancelled)
    }
}
