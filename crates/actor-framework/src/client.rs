//! # Actor Handle
//!
//! [`ActorRef`] is the client half of an actor: a cheap, cloneable handle that
//! pushes messages into the actor's mailbox and controls its lifecycle.

use crate::actor::Actor;
use crate::error::FrameworkError;
use crate::mailbox::MailboxSender;
use crate::message::{Envelope, Letter};
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::futures::Notified;
use tokio::sync::{oneshot, watch, Notify};

static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique actor identifier, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u64);

impl ActorId {
    fn next() -> Self {
        Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State shared by every clone of one actor's handle.
struct Shared<A: Actor> {
    id: ActorId,
    name: &'static str,
    /// Cleared on stop; `None` turns every later send into a no-op.
    mailbox: Mutex<Option<MailboxSender<Letter<A>>>>,
    cancelled: AtomicBool,
    wake: Notify,
    finished: watch::Receiver<bool>,
}

/// A type-safe handle for sending messages to a running actor.
///
/// * **Cloneable**: every clone addresses the same mailbox.
/// * **Fire-and-forget**: [`tell`](Self::tell) never waits and never reports.
/// * **Request/response**: [`ask`](Self::ask) waits for the handler's outcome.
/// * **Lifecycle**: [`stop`](Self::stop), [`cancel`](Self::cancel) and
///   [`finished`](Self::finished) can be called from any clone.
pub struct ActorRef<A: Actor> {
    shared: Arc<Shared<A>>,
}

impl<A: Actor> Clone for ActorRef<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A: Actor> ActorRef<A> {
    pub(crate) fn new(sender: MailboxSender<Letter<A>>, finished: watch::Receiver<bool>) -> Self {
        // Extract just the type name (e.g. "Model" instead of "newsfeed::model_actor::Model")
        let name = std::any::type_name::<A>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        Self {
            shared: Arc::new(Shared {
                id: ActorId::next(),
                name,
                mailbox: Mutex::new(Some(sender)),
                cancelled: AtomicBool::new(false),
                wake: Notify::new(),
                finished,
            }),
        }
    }

    pub fn id(&self) -> ActorId {
        self.shared.id
    }

    /// Short type name of the actor, used in logs.
    pub fn name(&self) -> &'static str {
        self.shared.name
    }

    /// Fire-and-forget send.
    ///
    /// Silently does nothing if the actor has already been stopped.
    pub fn tell(&self, message: A::Message) {
        let _ = self.try_tell(message);
    }

    /// Fire-and-forget send that reports a stopped target.
    pub fn try_tell(&self, message: A::Message) -> Result<(), FrameworkError> {
        self.push(Letter::Message(Envelope::tell(message)))
    }

    /// Request/response send: waits until the actor has processed `message`.
    ///
    /// # Errors
    /// * [`FrameworkError::ActorStopped`] if the actor was already stopped.
    /// * [`FrameworkError::Cancelled`] if the actor shut down before dispatching it.
    /// * [`FrameworkError::Handler`] / [`FrameworkError::Panicked`] if the handler failed.
    pub async fn ask(&self, message: A::Message) -> Result<A::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.push(Letter::Message(Envelope::ask(message, respond_to)))?;
        response.await.map_err(|_| FrameworkError::Cancelled)?
    }

    /// Graceful stop: everything already queued is still dispatched, then the
    /// actor exits. Waits until it has finished.
    pub async fn stop(&self) {
        {
            let mut mailbox = self.lock_mailbox();
            if let Some(sender) = mailbox.take() {
                sender.push(Letter::Poison);
            }
        }
        self.finished().await;
    }

    /// Cancelling stop: the actor exits after the message it is currently
    /// processing (immediately if idle); queued requests resolve as cancelled.
    /// Waits until it has finished.
    pub async fn cancel(&self) {
        {
            let mut mailbox = self.lock_mailbox();
            if let Some(sender) = mailbox.take() {
                self.shared.cancelled.store(true, Ordering::SeqCst);
                drop(sender);
                self.shared.wake.notify_one();
            }
        }
        self.finished().await;
    }

    /// Waits until the actor's loop has fully exited.
    pub async fn finished(&self) {
        let mut finished = self.shared.finished.clone();
        // An Err means the loop is gone without signalling, which is finished too.
        let _ = finished.wait_for(|done| *done).await;
    }

    /// True once the mailbox has been closed to new messages.
    pub fn is_stopped(&self) -> bool {
        self.lock_mailbox().is_none()
    }

    /// True once the dispatch loop has exited and released its waiters.
    pub fn is_finished(&self) -> bool {
        *self.shared.finished.borrow()
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::SeqCst)
    }

    pub(crate) fn cancel_requested(&self) -> Notified<'_> {
        self.shared.wake.notified()
    }

    /// Clears the mailbox reference without enqueueing anything.
    pub(crate) fn close_mailbox(&self) {
        self.lock_mailbox().take();
    }

    fn push(&self, letter: Letter<A>) -> Result<(), FrameworkError> {
        match self.lock_mailbox().as_ref() {
            Some(sender) => {
                sender.push(letter);
                Ok(())
            }
            None => Err(FrameworkError::ActorStopped),
        }
    }

    fn lock_mailbox(&self) -> MutexGuard<'_, Option<MailboxSender<Letter<A>>>> {
        self.shared
            .mailbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<A: Actor> fmt::Display for ActorRef<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.shared.name, self.shared.id)
    }
}

impl<A: Actor> fmt::Debug for ActorRef<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorRef({self})")
    }
}
