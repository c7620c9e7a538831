//! # Messages
//!
//! An actor message is a tagged command value (`Actor::Message`) wrapped in an
//! [`Envelope`]. The envelope carries a reply-channel only for request/response
//! sends; fire-and-forget sends leave it empty.

use crate::actor::Actor;
use crate::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply-channel used by `ask`.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A message on its way to an actor's dispatch loop.
pub struct Envelope<A: Actor> {
    pub message: A::Message,
    pub respond_to: Option<Response<A::Reply>>,
}

impl<A: Actor> Envelope<A> {
    /// Fire-and-forget envelope.
    pub fn tell(message: A::Message) -> Self {
        Self {
            message,
            respond_to: None,
        }
    }

    /// Request/response envelope.
    pub fn ask(message: A::Message, respond_to: Response<A::Reply>) -> Self {
        Self {
            message,
            respond_to: Some(respond_to),
        }
    }

    /// Resolves the reply-channel (if any) with `Cancelled`.
    pub fn cancel(self) -> bool {
        match self.respond_to {
            Some(respond_to) => {
                let _ = respond_to.send(Err(FrameworkError::Cancelled));
                true
            }
            None => false,
        }
    }
}

/// What actually travels through the mailbox.
///
/// `Poison` is the graceful-stop marker: it queues behind everything already
/// sent, so the loop dispatches those messages first and then exits.
pub enum Letter<A: Actor> {
    Message(Envelope<A>),
    Poison,
}

// Manual impls: deriving would demand `A: Debug` rather than `A::Message: Debug`.
impl<A: Actor> fmt::Debug for Envelope<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("message", &self.message)
            .field("ask", &self.respond_to.is_some())
            .finish()
    }
}

impl<A: Actor> fmt::Debug for Letter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Letter::Message(envelope) => envelope.fmt(f),
            Letter::Poison => f.write_str("Poison"),
        }
    }
}
