//! # Actor Trait
//!
//! The `Actor` trait is the contract every actor implements to be driven by an
//! [`ActorCell`](crate::ActorCell). It names the actor's command type, its reply
//! type and its error type, and provides the message handler plus a shutdown hook.
//!
//! # Messages as Values
//! There is no reflection here: an actor's operations are the variants of its
//! `Message` enum, and the dispatch loop simply hands each value to
//! [`Actor::handle`], which matches on the tag.
//!
//! # Replies
//! A request/response send receives whatever `handle` returns. Actors with several
//! request/response operations use an enum for `Reply` (one variant per
//! operation) and let their typed client unwrap the expected variant.

use crate::client::ActorRef;
use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any actor must implement to be run by the framework.
///
/// # Concurrency
/// `handle` takes `&mut self`: one invocation at a time, never interleaved with
/// another message to the same actor. State needs no locks.
#[async_trait]
pub trait Actor: Sized + Send + 'static {
    /// Tagged command value; one variant per operation.
    type Message: Send + Debug + 'static;

    /// Value delivered to `ask` callers.
    /// Use `()` for actors that are only ever told.
    type Reply: Send + Debug + 'static;

    /// The error type for this actor.
    /// Use `std::convert::Infallible` for actors that never fail.
    type Error: std::error::Error + Send + Sync + 'static;

    /// One-shot actors exit after processing exactly one message.
    const ONESHOT: bool = false;

    /// Handle one message.
    async fn handle(
        &mut self,
        message: Self::Message,
        ctx: &Context<Self>,
    ) -> Result<Self::Reply, Self::Error>;

    /// Called once after the dispatch loop exits and the mailbox is drained,
    /// before anyone awaiting `finished()` is released.
    /// Use this hook to stop child actors.
    async fn on_stop(&mut self, _ctx: &Context<Self>) {}
}

/// Runtime context handed to every handler invocation.
pub struct Context<A: Actor> {
    myself: ActorRef<A>,
}

impl<A: Actor> Context<A> {
    pub(crate) fn new(myself: ActorRef<A>) -> Self {
        Self { myself }
    }

    /// The running actor's own handle, e.g. to pass along as a reply target.
    ///
    /// Do not `stop().await` it from inside a handler: the loop cannot finish
    /// while it is waiting on itself.
    pub fn myself(&self) -> &ActorRef<A> {
        &self.myself
    }
}
