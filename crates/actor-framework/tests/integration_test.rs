use actor_framework::{Actor, ActorCell, Context, FrameworkError};
use async_trait::async_trait;
use futures::poll;
use std::sync::Arc;
use tokio::sync::{oneshot, Semaphore};

// --- Test Actor ---

#[derive(Default)]
struct Recorder {
    seen: Vec<u32>,
    stopped: Option<oneshot::Sender<Vec<u32>>>,
}

#[derive(Debug)]
enum RecorderMessage {
    Record(u32),
    Get,
    /// Blocks the handler until the test releases a permit.
    Gate {
        release: Arc<Semaphore>,
        entered: Option<oneshot::Sender<()>>,
    },
    Fail,
    Panic,
}

#[derive(Debug, thiserror::Error)]
#[error("recorder refused")]
struct RecorderError;

#[async_trait]
impl Actor for Recorder {
    type Message = RecorderMessage;
    type Reply = Vec<u32>;
    type Error = RecorderError;

    async fn handle(
        &mut self,
        msg: RecorderMessage,
        _ctx: &Context<Self>,
    ) -> Result<Vec<u32>, RecorderError> {
        match msg {
            RecorderMessage::Record(n) => self.seen.push(n),
            RecorderMessage::Get => {}
            RecorderMessage::Gate { release, entered } => {
                if let Some(entered) = entered {
                    let _ = entered.send(());
                }
                let _permit = release.acquire().await;
            }
            RecorderMessage::Fail => return Err(RecorderError),
            RecorderMessage::Panic => panic!("recorder exploded"),
        }
        Ok(self.seen.clone())
    }

    async fn on_stop(&mut self, _ctx: &Context<Self>) {
        if let Some(tx) = self.stopped.take() {
            let _ = tx.send(self.seen.clone());
        }
    }
}

struct OneShot;

#[async_trait]
impl Actor for OneShot {
    type Message = u32;
    type Reply = u32;
    type Error = std::convert::Infallible;
    const ONESHOT: bool = true;

    async fn handle(&mut self, n: u32, _ctx: &Context<Self>) -> Result<u32, Self::Error> {
        Ok(n * 2)
    }
}

// --- Integration Tests ---

#[tokio::test]
async fn test_messages_from_one_sender_are_handled_in_order() {
    let recorder = actor_framework::spawn(Recorder::default());

    for n in 0..100 {
        recorder.tell(RecorderMessage::Record(n));
    }
    let seen = recorder.ask(RecorderMessage::Get).await.unwrap();

    assert_eq!(seen, (0..100).collect::<Vec<_>>());
    recorder.stop().await;
}

#[tokio::test]
async fn test_handler_error_fails_only_that_request() {
    let recorder = actor_framework::spawn(Recorder::default());

    recorder.tell(RecorderMessage::Record(1));
    let err = recorder.ask(RecorderMessage::Fail).await.unwrap_err();
    assert!(matches!(err, FrameworkError::Handler(_)));
    assert_eq!(err.to_string(), "Handler error: recorder refused");

    recorder.tell(RecorderMessage::Record(2));
    assert_eq!(recorder.ask(RecorderMessage::Get).await.unwrap(), vec![1, 2]);
    recorder.stop().await;
}

#[tokio::test]
async fn test_handler_panic_is_contained() {
    let recorder = actor_framework::spawn(Recorder::default());

    let err = recorder.ask(RecorderMessage::Panic).await.unwrap_err();
    match err {
        FrameworkError::Panicked(reason) => assert_eq!(reason, "recorder exploded"),
        other => panic!("Expected Panicked, got {other:?}"),
    }

    // A fire-and-forget panic is swallowed the same way
    recorder.tell(RecorderMessage::Panic);
    recorder.tell(RecorderMessage::Record(7));
    assert_eq!(recorder.ask(RecorderMessage::Get).await.unwrap(), vec![7]);
    recorder.stop().await;
}

#[tokio::test]
async fn test_graceful_stop_dispatches_queued_messages() {
    let gate = Arc::new(Semaphore::new(0));
    let (stopped_tx, stopped_rx) = oneshot::channel();
    let recorder = actor_framework::spawn(Recorder {
        seen: Vec::new(),
        stopped: Some(stopped_tx),
    });

    recorder.tell(RecorderMessage::Gate {
        release: gate.clone(),
        entered: None,
    });
    recorder.tell(RecorderMessage::Record(1));
    let mut queued_ask = Box::pin(recorder.ask(RecorderMessage::Record(2)));
    assert!(poll!(&mut queued_ask).is_pending());

    let mut stopping = Box::pin(recorder.stop());
    assert!(poll!(&mut stopping).is_pending());

    // Mailbox is closed as soon as stop is requested
    assert!(recorder.is_stopped());
    assert!(matches!(
        recorder.ask(RecorderMessage::Get).await,
        Err(FrameworkError::ActorStopped)
    ));

    gate.add_permits(1);
    stopping.await;

    assert_eq!(queued_ask.await.unwrap(), vec![1, 2]);
    assert_eq!(stopped_rx.await.unwrap(), vec![1, 2]);
    assert!(recorder.is_finished());
}

#[tokio::test]
async fn test_cancel_resolves_queued_requests_as_cancelled() {
    let gate = Arc::new(Semaphore::new(0));
    let (entered_tx, entered_rx) = oneshot::channel();
    let recorder = actor_framework::spawn(Recorder::default());

    let mut in_flight = Box::pin(recorder.ask(RecorderMessage::Gate {
        release: gate.clone(),
        entered: Some(entered_tx),
    }));
    assert!(poll!(&mut in_flight).is_pending());
    entered_rx.await.unwrap();

    let mut queued: Vec<_> = (0..5)
        .map(|n| Box::pin(recorder.ask(RecorderMessage::Record(n))))
        .collect();
    for ask in queued.iter_mut() {
        assert!(poll!(ask).is_pending());
    }

    let mut cancelling = Box::pin(recorder.cancel());
    assert!(poll!(&mut cancelling).is_pending());
    gate.add_permits(1);
    cancelling.await;

    // The message being processed completes normally
    assert_eq!(in_flight.await.unwrap(), Vec::<u32>::new());
    for ask in queued {
        assert!(matches!(ask.await, Err(FrameworkError::Cancelled)));
    }
}

#[tokio::test]
async fn test_cancel_on_idle_actor_exits_immediately() {
    let recorder = actor_framework::spawn(Recorder::default());
    recorder.tell(RecorderMessage::Record(1));
    assert_eq!(recorder.ask(RecorderMessage::Get).await.unwrap(), vec![1]);

    recorder.cancel().await;

    assert!(recorder.is_finished());
    assert!(matches!(
        recorder.try_tell(RecorderMessage::Record(2)),
        Err(FrameworkError::ActorStopped)
    ));
}

#[tokio::test]
async fn test_tell_to_stopped_actor_is_silent() {
    let recorder = actor_framework::spawn(Recorder::default());
    recorder.stop().await;

    recorder.tell(RecorderMessage::Record(1));
    assert!(matches!(
        recorder.ask(RecorderMessage::Get).await,
        Err(FrameworkError::ActorStopped)
    ));

    // Stopping twice is harmless
    recorder.stop().await;
    recorder.cancel().await;
}

#[tokio::test]
async fn test_every_finished_waiter_is_released() {
    let recorder = actor_framework::spawn(Recorder::default());

    let waiters: Vec<_> = (0..3)
        .map(|_| {
            let recorder = recorder.clone();
            tokio::spawn(async move { recorder.finished().await })
        })
        .collect();
    tokio::task::yield_now().await;

    recorder.stop().await;
    for waiter in waiters {
        waiter.await.unwrap();
    }

    // Waiting after the fact returns at once
    recorder.finished().await;
}

#[tokio::test]
async fn test_oneshot_actor_exits_after_first_message() {
    let (cell, doubler) = ActorCell::new(OneShot);
    let handle = tokio::spawn(cell.run());

    assert_eq!(doubler.ask(21).await.unwrap(), 42);
    handle.await.unwrap();

    assert!(doubler.is_finished());
    let late = doubler.ask(1).await.unwrap_err();
    assert!(late.is_undelivered());
}

#[tokio::test]
async fn test_handles_identify_their_actor() {
    let a = actor_framework::spawn(Recorder::default());
    let b = actor_framework::spawn(Recorder::default());

    assert_ne!(a.id(), b.id());
    assert_eq!(a.name(), "Recorder");
    assert_eq!(a.clone().id(), a.id());
    assert_eq!(a.to_string(), format!("Recorder#{}", a.id()));

    a.stop().await;
    b.stop().await;
}
