use crate::domain::StatusSnapshot;
use crate::responder_actor::Responder;
use actor_framework::ActorRef;

#[derive(Debug)]
pub enum ModelMessage {
    /// Answer `sender` with the site's headline, fetching it first if needed.
    LatestNews {
        site: String,
        sender: ActorRef<Responder>,
    },
    /// A Fetcher got a headline.
    NewsUpdate { site: String, news: String },
    /// A Fetcher failed.
    NewsUnavailable { site: String },
    /// Request/response: snapshot of every cached value.
    Status,
    /// Request/response: forget every cached value.
    Reset,
}

#[derive(Debug)]
pub enum ModelReply {
    Done,
    Status(StatusSnapshot),
}
