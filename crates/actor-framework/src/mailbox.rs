//! # Mailbox
//!
//! Unbounded, strictly FIFO queue with a single consumer (the owning actor's
//! dispatch loop). Any number of [`MailboxSender`] clones may push; only the
//! [`Mailbox`] pops.

use tokio::sync::mpsc;

/// Creates a connected sender/receiver pair.
pub fn channel<T>() -> (MailboxSender<T>, Mailbox<T>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (MailboxSender { sender }, Mailbox { receiver })
}

/// Producer half of a mailbox.
pub struct MailboxSender<T> {
    sender: mpsc::UnboundedSender<T>,
}

impl<T> Clone for MailboxSender<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T> MailboxSender<T> {
    /// Appends `item` to the tail.
    ///
    /// Never blocks and never fails: once the consumer is gone the item is
    /// dropped, which resolves any reply-channel it carries as cancelled.
    pub fn push(&self, item: T) {
        let _ = self.sender.send(item);
    }

    /// True once the consuming [`Mailbox`] has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Consumer half of a mailbox.
pub struct Mailbox<T> {
    receiver: mpsc::UnboundedReceiver<T>,
}

impl<T> Mailbox<T> {
    /// Waits for the next item in FIFO order.
    ///
    /// Returns `None` once every sender has been dropped and the queue is empty.
    pub async fn pop(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Returns every item queued right now, without waiting.
    ///
    /// Used during shutdown to reject pending messages.
    pub fn drain_now(&mut self) -> Vec<T> {
        let mut drained = Vec::new();
        while let Ok(item) = self.receiver.try_recv() {
            drained.push(item);
        }
        drained
    }
}
