//! # Actor Cell
//!
//! This module defines the `ActorCell`, the server half of an actor. It owns the
//! actor's state and the consuming end of its mailbox and runs the dispatch loop,
//! processing messages sequentially so the state needs no locks.

use crate::actor::{Actor, Context};
use crate::client::ActorRef;
use crate::error::FrameworkError;
use crate::mailbox::{self, Mailbox};
use crate::message::{Envelope, Letter};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Why a dispatch loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Reached the poison letter of a graceful stop.
    Poisoned,
    /// `cancel()` was requested.
    Cancelled,
    /// A one-shot actor processed its message.
    OneShot,
}

/// The server half of an actor.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ActorCell::new(actor)` returns the cell and its [`ActorRef`].
/// 2.  **Run**: spawn `cell.run()` on the Tokio runtime.
/// 3.  **Use**: send through the `ActorRef`, which can be cloned freely.
///
/// [`spawn`](crate::spawn) does steps 1 and 2 in one call.
///
/// ```rust
/// use actor_framework::{Actor, ActorCell, Context};
/// use async_trait::async_trait;
///
/// struct Counter(u32);
///
/// #[async_trait]
/// impl Actor for Counter {
///     type Message = u32;
///     type Reply = u32;
///     type Error = std::convert::Infallible;
///
///     async fn handle(&mut self, n: u32, _: &Context<Self>) -> Result<u32, Self::Error> {
///         self.0 += n;
///         Ok(self.0)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (cell, counter) = ActorCell::new(Counter(0));
///     let handle = tokio::spawn(cell.run());
///
///     counter.tell(2);
///     assert_eq!(counter.ask(3).await.unwrap(), 5);
///
///     counter.stop().await;
///     handle.await.unwrap();
/// }
/// ```
pub struct ActorCell<A: Actor> {
    actor: A,
    mailbox: Mailbox<Letter<A>>,
    ctx: Context<A>,
    finished: watch::Sender<bool>,
}

impl<A: Actor> ActorCell<A> {
    /// Creates the cell and the handle addressing it. Nothing runs until
    /// [`run`](Self::run) is polled.
    pub fn new(actor: A) -> (Self, ActorRef<A>) {
        let (sender, mailbox) = mailbox::channel();
        let (finished, finished_rx) = watch::channel(false);
        let myself = ActorRef::new(sender, finished_rx);
        let cell = Self {
            actor,
            mailbox,
            ctx: Context::new(myself.clone()),
            finished,
        };
        (cell, myself)
    }

    /// Runs the dispatch loop until the actor is stopped, then shuts it down:
    /// close the mailbox, cancel whatever is still queued, run `on_stop`, and
    /// release every `finished()` waiter.
    pub async fn run(mut self) {
        let myself = self.ctx.myself().clone();
        info!(actor = %myself, "Actor started");

        let reason = self.dispatch_loop(&myself).await;

        myself.close_mailbox();
        let drained = self.drain(&myself);
        self.actor.on_stop(&self.ctx).await;
        self.finished.send_replace(true);

        info!(actor = %myself, ?reason, drained, "Actor finished");
    }

    async fn dispatch_loop(&mut self, myself: &ActorRef<A>) -> ExitReason {
        while !myself.is_cancelled() {
            let letter = tokio::select! {
                biased;
                _ = myself.cancel_requested() => continue,
                letter = self.mailbox.pop() => letter,
            };

            let envelope = match letter {
                Some(Letter::Message(envelope)) => envelope,
                Some(Letter::Poison) => return ExitReason::Poisoned,
                // Only cancel() drops the sender while the loop runs
                None => return ExitReason::Cancelled,
            };

            self.dispatch(myself, envelope).await;

            if A::ONESHOT {
                return ExitReason::OneShot;
            }
        }
        ExitReason::Cancelled
    }

    async fn dispatch(&mut self, myself: &ActorRef<A>, envelope: Envelope<A>) {
        let Envelope {
            message,
            respond_to,
        } = envelope;
        debug!(actor = %myself, ?message, "--> dispatch");

        let outcome = AssertUnwindSafe(self.actor.handle(message, &self.ctx))
            .catch_unwind()
            .await;

        let result = match outcome {
            Ok(Ok(reply)) => {
                debug!(actor = %myself, ?reply, "<-- dispatch");
                Ok(reply)
            }
            Ok(Err(e)) => {
                error!(actor = %myself, error = %e, "Handler failed");
                Err(FrameworkError::Handler(Box::new(e)))
            }
            Err(panic) => {
                let reason = panic_reason(panic.as_ref());
                error!(actor = %myself, %reason, "Handler panicked");
                Err(FrameworkError::Panicked(reason))
            }
        };

        if let Some(respond_to) = respond_to {
            let _ = respond_to.send(result);
        }
    }

    /// Cancels every letter still queued. Returns how many messages were dropped.
    fn drain(&mut self, myself: &ActorRef<A>) -> usize {
        let mut drained = 0;
        for letter in self.mailbox.drain_now() {
            if let Letter::Message(envelope) = letter {
                debug!(actor = %myself, message = ?envelope.message, "Cancelling undelivered message");
                envelope.cancel();
                drained += 1;
            }
        }
        drained
    }
}

fn panic_reason(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
