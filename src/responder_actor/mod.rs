//! Responder actor: completes one pending HTTP reply.
//!
//! The HTTP handler hands a Responder to the Model as the reply target, then
//! waits for it to finish. A Responder processes exactly one message.

use actor_framework::{Actor, ActorRef, Context};
use async_trait::async_trait;
use std::convert::Infallible;
use tokio::sync::oneshot;

/// What the HTTP handler turns into a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 200 with this body.
    Success(String),
    /// 500 with this body.
    Failure(String),
}

pub struct Responder {
    reply: Option<oneshot::Sender<Reply>>,
}

#[async_trait]
impl Actor for Responder {
    type Message = Reply;
    type Reply = ();
    type Error = Infallible;
    const ONESHOT: bool = true;

    async fn handle(&mut self, reply: Reply, _ctx: &Context<Self>) -> Result<(), Infallible> {
        if let Some(tx) = self.reply.take() {
            // The HTTP side may have given up already
            let _ = tx.send(reply);
        }
        Ok(())
    }
}

/// Starts a Responder. The receiver yields its one reply; it errors if the
/// Responder was stopped without one.
pub fn spawn() -> (ActorRef<Responder>, oneshot::Receiver<Reply>) {
    let (tx, rx) = oneshot::channel();
    let responder = actor_framework::spawn(Responder { reply: Some(tx) });
    (responder, rx)
}
