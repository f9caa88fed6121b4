//! Error types for the two fallible seams of the pipeline.
//!
//! Feed retrieval and article fetching fail independently and are handled
//! differently by the collector: a [`FeedError`] degrades a whole source to
//! zero entries, while a [`FetchError`] is swallowed at the article boundary
//! and becomes an empty body text. Neither aborts the batch.

use thiserror::Error;

/// Failure while retrieving or decoding an RSS search feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed feed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A feed `<item>` omitted a field the pipeline requires. Surfaced as a
    /// typed fault instead of silently defaulting the field.
    #[error("feed item {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// Failure while downloading or extracting one article.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("article request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("article fetch returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid article URL: {0}")]
    Url(#[from] url::ParseError),

    /// Neither readability nor the paragraph fallback found any text.
    #[error("page yielded no extractable body")]
    EmptyBody,
}
