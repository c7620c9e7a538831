//! # ActorClient Trait
//!
//! Provides a common interface for actor-specific clients, adding default
//! lifecycle methods built on top of a generic [`ActorRef`].
use crate::{Actor, ActorRef, FrameworkError};
use async_trait::async_trait;

/// Trait for actor-specific clients to inherit the standard lifecycle operations.
///
/// Domain clients wrap an `ActorRef<A>` to expose typed methods (and to unwrap
/// multi-variant replies); this trait gives them `stop`/`finished` for free.
///
/// # Example
///
/// ```rust
/// use actor_framework::{Actor, ActorClient, ActorRef, Context, FrameworkError};
/// use async_trait::async_trait;
///
/// struct Echo;
///
/// #[async_trait]
/// impl Actor for Echo {
///     type Message = String;
///     type Reply = String;
///     type Error = std::convert::Infallible;
///
///     async fn handle(&mut self, msg: String, _: &Context<Self>) -> Result<String, Self::Error> {
///         Ok(msg)
///     }
/// }
///
/// #[derive(Debug)]
/// struct EchoError(String);
///
/// struct EchoClient {
///     inner: ActorRef<Echo>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Echo> for EchoClient {
///     type Error = EchoError;
///
///     fn inner(&self) -> &ActorRef<Echo> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         EchoError(e.to_string())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let client = EchoClient { inner: actor_framework::spawn(Echo) };
///     let echoed = client.inner().ask("hi".into()).await.map_err(EchoClient::map_error);
///     assert_eq!(echoed.unwrap(), "hi");
///
///     // stop() is provided by the trait
///     client.stop().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<A: Actor>: Send + Sync {
    /// The actor-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ActorRef.
    fn inner(&self) -> &ActorRef<A>;

    /// Map framework errors to the specific actor error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Gracefully stop the actor and wait until it has finished.
    #[tracing::instrument(skip(self))]
    async fn stop(&self) {
        tracing::debug!(actor = %self.inner(), "Stopping");
        self.inner().stop().await
    }

    /// Wait until the actor has finished.
    async fn finished(&self) {
        self.inner().finished().await
    }
}
