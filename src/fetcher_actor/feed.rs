//! Headline extraction from RSS / RDF feeds.

use super::FetchError;
use roxmltree::{Document, ParsingOptions};

/// Returns the text of the first `title` inside the first `item`, untrimmed.
///
/// Elements are matched by local name, so RSS 2.0 and RDF (RSS 1.0) feeds both
/// work. DTDs are accepted since RSS 0.91 feeds carry one.
pub fn parse_headline(xml: &str) -> Result<String, FetchError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)?;

    let item = doc
        .descendants()
        .find(|node| node.has_tag_name("item"))
        .ok_or(FetchError::MissingHeadline)?;
    let title = item
        .descendants()
        .find(|node| node.has_tag_name("title"))
        .ok_or(FetchError::MissingHeadline)?;

    title
        .text()
        .map(str::to_owned)
        .ok_or(FetchError::MissingHeadline)
}
