use super::feed::parse_headline;
use super::FetchError;
use crate::http_client::HttpFetch;
use crate::model_actor::{Model, ModelMessage};
use actor_framework::{Actor, ActorRef, Context};
use async_trait::async_trait;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, error};

/// Queries one site's feed on behalf of the Model.
///
/// A Fetcher handles one query at a time, so a slow or hung request only ever
/// blocks its own site.
pub struct Fetcher {
    site: String,
    url: String,
    http: Arc<dyn HttpFetch>,
}

#[derive(Debug)]
pub enum FetcherMessage {
    /// Fetch now; answer `reply_to` with exactly one of
    /// `NewsUpdate` / `NewsUnavailable`.
    Query { reply_to: ActorRef<Model> },
}

impl Fetcher {
    pub fn new(site: impl Into<String>, url: impl Into<String>, http: Arc<dyn HttpFetch>) -> Self {
        Self {
            site: site.into(),
            url: url.into(),
            http,
        }
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self.http.get(&self.url).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }
        parse_headline(&response.body)
    }
}

#[async_trait]
impl Actor for Fetcher {
    type Message = FetcherMessage;
    type Reply = ();
    type Error = Infallible;

    async fn handle(
        &mut self,
        msg: FetcherMessage,
        _ctx: &Context<Self>,
    ) -> Result<(), Infallible> {
        match msg {
            FetcherMessage::Query { reply_to } => {
                let outcome = match self.fetch().await {
                    Ok(news) => {
                        debug!(site = %self.site, %news, "Fetched headline");
                        ModelMessage::NewsUpdate {
                            site: self.site.clone(),
                            news,
                        }
                    }
                    Err(e) => {
                        error!(site = %self.site, url = %self.url, error = %e, "Error getting news");
                        ModelMessage::NewsUnavailable {
                            site: self.site.clone(),
                        }
                    }
                };
                reply_to.tell(outcome);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::HttpResponse;
    use actor_framework::mock::{create_mock_ref, expect_tell};
    use std::sync::Mutex;

    /// Answers every GET with the same canned result.
    struct Canned(Mutex<Option<Result<HttpResponse, FetchError>>>);

    impl Canned {
        fn new(result: Result<HttpResponse, FetchError>) -> Arc<dyn HttpFetch> {
            Arc::new(Self(Mutex::new(Some(result))))
        }
    }

    #[async_trait]
    impl HttpFetch for Canned {
        async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
            self.0
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(FetchError::Request("no more responses".into())))
        }
    }

    const FEED: &str = "<rss><channel><item><title>Big news</title></item></channel></rss>";

    async fn query(http: Arc<dyn HttpFetch>) -> ModelMessage {
        let (model, mut mailbox) = create_mock_ref::<Model>();
        let fetcher = actor_framework::spawn(Fetcher::new("bbc", "http://bbc/rss", http));

        fetcher.tell(FetcherMessage::Query { reply_to: model });
        let outcome = expect_tell(&mut mailbox)
            .await
            .expect("Expected an outcome message");
        fetcher.stop().await;
        outcome
    }

    #[tokio::test]
    async fn test_success_sends_news_update() {
        let outcome = query(Canned::new(Ok(HttpResponse::new(200, FEED)))).await;
        match outcome {
            ModelMessage::NewsUpdate { site, news } => {
                assert_eq!(site, "bbc");
                assert_eq!(news, "Big news");
            }
            other => panic!("Expected NewsUpdate, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_every_failure_sends_news_unavailable() {
        let failures = [
            Err(FetchError::Request("connection refused".into())),
            Ok(HttpResponse::new(500, FEED)),
            Ok(HttpResponse::new(200, "<rss><item>")),
            Ok(HttpResponse::new(200, "<rss><channel/></rss>")),
        ];

        for failure in failures {
            let outcome = query(Canned::new(failure)).await;
            assert!(
                matches!(&outcome, ModelMessage::NewsUnavailable { site } if site == "bbc"),
                "Expected NewsUnavailable, got {outcome:?}"
            );
        }
    }
}
