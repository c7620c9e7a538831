//! # Actor Framework
//!
//! This crate provides the building blocks for type-safe, concurrent actor systems
//! on top of Tokio: a mailbox, a dispatch loop, a cloneable handle, and the
//! lifecycle around them (graceful stop, cancelling stop, waiting for exit).
//!
//! ## Why Actors?
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model) - Foundational concurrency pattern by Carl Hewitt
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Behaviour Layer** ([`Actor`]) - Your state and how each message changes it
//! 2. **Runtime Layer** ([`ActorCell`]) - Mailbox draining, dispatch, shutdown
//! 3. **Interface Layer** ([`ActorRef`], [`ActorClient`]) - Type-safe communication
//!
//! You write the message handler **once**; the framework handles the async
//! message passing, reply routing, failure containment and shutdown.
//!
//! ## Core Abstractions
//!
//! ### [`Actor`] - The Behaviour
//!
//! ```rust
//! use actor_framework::{Actor, Context};
//! use async_trait::async_trait;
//!
//! // 1. Define the state and its messages
//! struct Inventory {
//!     stock: u32,
//! }
//!
//! #[derive(Debug)]
//! enum InventoryMessage {
//!     Restock(u32),
//!     Take(u32),
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("only {0} left")]
//! struct OutOfStock(u32);
//!
//! #[async_trait]
//! impl Actor for Inventory {
//!     type Message = InventoryMessage;
//!     type Reply = u32;
//!     type Error = OutOfStock;
//!
//!     async fn handle(&mut self, msg: InventoryMessage, _ctx: &Context<Self>) -> Result<u32, OutOfStock> {
//!         match msg {
//!             InventoryMessage::Restock(n) => self.stock += n,
//!             InventoryMessage::Take(n) if n > self.stock => return Err(OutOfStock(self.stock)),
//!             InventoryMessage::Take(n) => self.stock -= n,
//!         }
//!         Ok(self.stock)
//!     }
//! }
//!
//! // 2. Use the Actor
//! #[tokio::main]
//! async fn main() {
//!     let inventory = actor_framework::spawn(Inventory { stock: 0 });
//!
//!     inventory.tell(InventoryMessage::Restock(5));
//!     assert_eq!(inventory.ask(InventoryMessage::Take(2)).await.unwrap(), 3);
//!
//!     // A failing handler only fails that one request
//!     assert!(inventory.ask(InventoryMessage::Take(10)).await.is_err());
//!     assert_eq!(inventory.ask(InventoryMessage::Take(1)).await.unwrap(), 2);
//!
//!     inventory.stop().await;
//! }
//! ```
//!
//! ## Sends
//!
//! | Operation | Waits? | Stopped target |
//! |-----------|--------|----------------|
//! | [`ActorRef::tell`] | never | silently dropped |
//! | [`ActorRef::try_tell`] | never | `Err(ActorStopped)` |
//! | [`ActorRef::ask`] | until the handler ran | `Err(ActorStopped)` |
//!
//! ## Stopping
//!
//! - [`ActorRef::stop`]: graceful. Messages sent before the stop are still dispatched.
//! - [`ActorRef::cancel`]: the actor exits after its current message; every queued
//!   `ask` resolves with [`FrameworkError::Cancelled`].
//!
//! Either way the mailbox closes at once, [`Actor::on_stop`] runs, and only then
//! are [`ActorRef::finished`] waiters released.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//! - A handler error or panic is reported to the caller and the loop keeps going
//!
//! ## Testing
//!
//! The [`mock`] module hands out an [`ActorRef`] whose mailbox is read by the test
//! itself, so an actor can be tested without spawning its collaborators.

pub mod actor;
pub mod cell;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod mailbox;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{Actor, Context};
pub use cell::{ActorCell, ExitReason};
pub use client::{ActorId, ActorRef};
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Envelope, Letter, Response};

/// Starts `actor` on its own Tokio task and returns its handle.
pub fn spawn<A: Actor>(actor: A) -> ActorRef<A> {
    let (cell, myself) = ActorCell::new(actor);
    tokio::spawn(cell.run());
    myself
}
