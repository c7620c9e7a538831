//! # Model Client
//!
//! Provides a high‑level API for interacting with the `Model` actor.
use crate::domain::StatusSnapshot;
use crate::model_actor::{Model, ModelError, ModelMessage, ModelReply};
use crate::responder_actor::Responder;
use actor_framework::{ActorClient, ActorRef, FrameworkError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Model actor.
#[derive(Clone)]
pub struct ModelClient {
    inner: ActorRef<Model>,
}

impl ModelClient {
    pub fn new(inner: ActorRef<Model>) -> Self {
        Self { inner }
    }

    /// Asks the Model to answer `sender` with the latest headline for `site`.
    ///
    /// Fire-and-forget: the answer goes to `sender`, not back to the caller.
    /// Fails only if the Model has stopped, in which case `sender` hears nothing.
    #[instrument(skip(self, sender))]
    pub fn latest_news(&self, site: &str, sender: ActorRef<Responder>) -> Result<(), ModelError> {
        debug!(%sender, "Sending latest_news");
        self.inner
            .try_tell(ModelMessage::LatestNews {
                site: site.to_string(),
                sender,
            })
            .map_err(Self::map_error)
    }

    /// Snapshot of the cached headline of every site.
    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<StatusSnapshot, ModelError> {
        match self.inner.ask(ModelMessage::Status).await {
            Ok(ModelReply::Status(snapshot)) => Ok(snapshot),
            Ok(_) => unreachable!("Status must return a Status reply"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Clears every cached headline.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), ModelError> {
        self.inner
            .ask(ModelMessage::Reset)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }

    pub fn is_stopped(&self) -> bool {
        self.inner.is_stopped()
    }
}

#[async_trait]
impl ActorClient<Model> for ModelClient {
    type Error = ModelError;

    fn inner(&self) -> &ActorRef<Model> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ModelError::ActorCommunicationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SiteStatus;
    use actor_framework::mock::{create_mock_ref, expect_ask, expect_tell};

    #[tokio::test]
    async fn test_latest_news_is_a_tell() {
        let (model, mut mailbox) = create_mock_ref::<Model>();
        let (responder, _responder_mailbox) = create_mock_ref::<Responder>();
        let client = ModelClient::new(model);

        client.latest_news("bbc", responder.clone()).unwrap();

        match expect_tell(&mut mailbox).await {
            Some(ModelMessage::LatestNews { site, sender }) => {
                assert_eq!(site, "bbc");
                assert_eq!(sender.id(), responder.id());
            }
            other => panic!("Expected LatestNews, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_unwraps_snapshot() {
        let (model, mut mailbox) = create_mock_ref::<Model>();
        let client = ModelClient::new(model);

        let status_task = tokio::spawn(async move { client.status().await });

        let (message, responder) = expect_ask(&mut mailbox)
            .await
            .expect("Expected Status request");
        assert!(matches!(message, ModelMessage::Status));

        let snapshot: StatusSnapshot = [(
            "bbc".to_string(),
            SiteStatus {
                latest: Some("Headline".into()),
            },
        )]
        .into_iter()
        .collect();
        responder.send(Ok(ModelReply::Status(snapshot.clone()))).unwrap();

        assert_eq!(status_task.await.unwrap().unwrap(), snapshot);
    }

    #[tokio::test]
    async fn test_stopped_model_is_a_communication_error() {
        let (model, mut mailbox) = create_mock_ref::<Model>();
        let (responder, _responder_mailbox) = create_mock_ref::<Responder>();
        let client = ModelClient::new(model);

        let stopping = tokio::spawn({
            let client = client.clone();
            async move { client.stop().await }
        });
        assert!(mailbox.recv().await.is_none());
        stopping.await.unwrap();

        assert!(client.is_stopped());
        assert!(matches!(
            client.latest_news("bbc", responder),
            Err(ModelError::ActorCommunicationError(_))
        ));
        assert_eq!(
            client.reset().await,
            Err(ModelError::ActorCommunicationError("Actor stopped".into()))
        );
    }
}
