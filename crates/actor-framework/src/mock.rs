//! # Mock Framework & Testing Guide
//!
//! Actors usually talk to other actors. To test one actor in isolation, hand it a
//! *mock reference* instead of a real collaborator: an [`ActorRef`] whose
//! mailbox is owned by the test instead of a dispatch loop.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock reference | Real Actor |
//! |---------|----------------|------------|
//! | **Speed** | Instant (no task spawned) | Fast (one tokio task) |
//! | **Determinism** | Test decides when and how to answer | Subject to scheduler |
//! | **Inspection** | Every message is visible | Only through replies |
//! | **Use Case** | Asserting *what* an actor sends | Testing the actor itself or the full system |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::{create_mock_ref, expect_tell};
//! use actor_framework::{Actor, Context};
//! use async_trait::async_trait;
//!
//! struct Printer;
//!
//! #[async_trait]
//! impl Actor for Printer {
//!     type Message = String;
//!     type Reply = ();
//!     type Error = std::convert::Infallible;
//!     async fn handle(&mut self, _: String, _: &Context<Self>) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (printer, mut mailbox) = create_mock_ref::<Printer>();
//!
//!     // The code under test only sees an ActorRef<Printer>.
//!     printer.tell("hello".to_string());
//!
//!     assert_eq!(expect_tell(&mut mailbox).await.as_deref(), Some("hello"));
//! }
//! ```

use crate::actor::Actor;
use crate::client::ActorRef;
use crate::mailbox::{self, Mailbox};
use crate::message::{Letter, Response};
use tokio::sync::watch;

/// Test-owned end of a mock reference.
pub struct MockMailbox<A: Actor> {
    mailbox: Mailbox<Letter<A>>,
    finished: watch::Sender<bool>,
}

impl<A: Actor> MockMailbox<A> {
    /// Next message with its reply-channel (if it was an `ask`).
    ///
    /// Returns `None` once the reference has been stopped and everything
    /// sent before has been received.
    pub async fn recv(&mut self) -> Option<(A::Message, Option<Response<A::Reply>>)> {
        match self.mailbox.pop().await? {
            Letter::Message(envelope) => Some((envelope.message, envelope.respond_to)),
            Letter::Poison => {
                self.finish();
                None
            }
        }
    }

    /// Messages already queued, without waiting.
    pub fn queued(&mut self) -> Vec<A::Message> {
        self.mailbox
            .drain_now()
            .into_iter()
            .filter_map(|letter| match letter {
                Letter::Message(envelope) => Some(envelope.message),
                Letter::Poison => None,
            })
            .collect()
    }

    /// Releases everyone awaiting `finished()` on the mock reference.
    pub fn finish(&self) {
        self.finished.send_replace(true);
    }
}

/// Creates an [`ActorRef`] backed by a mailbox the test reads directly.
///
/// # Testing Strategy
/// The actor under test gets a reference it can `tell`/`ask` exactly like a
/// real one; the test pulls those messages out with [`expect_tell`] /
/// [`expect_ask`] and answers (or doesn't) as the scenario requires.
pub fn create_mock_ref<A: Actor>() -> (ActorRef<A>, MockMailbox<A>) {
    let (sender, mailbox) = mailbox::channel();
    let (finished, finished_rx) = watch::channel(false);
    (
        ActorRef::new(sender, finished_rx),
        MockMailbox { mailbox, finished },
    )
}

/// Helper to verify that the next message is a fire-and-forget send.
pub async fn expect_tell<A: Actor>(mailbox: &mut MockMailbox<A>) -> Option<A::Message> {
    match mailbox.recv().await {
        Some((message, None)) => Some(message),
        _ => None,
    }
}

/// Helper to verify that the next message is a request/response send.
pub async fn expect_ask<A: Actor>(
    mailbox: &mut MockMailbox<A>,
) -> Option<(A::Message, Response<A::Reply>)> {
    match mailbox.recv().await {
        Some((message, Some(respond_to))) => Some((message, respond_to)),
        _ => None,
    }
}
