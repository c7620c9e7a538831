//! Error types for the Fetcher actor.

use thiserror::Error;

/// Everything that can go wrong between issuing a `GET` and holding a headline.
///
/// None of these leave the Fetcher: each one is logged and reported to the
/// Model as `NewsUnavailable`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network failure, timeout or unreadable body.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The site answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body is not well-formed XML.
    #[error("malformed feed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Well-formed, but no `item` with a non-empty `title`.
    #[error("feed has no headline")]
    MissingHeadline,
}
