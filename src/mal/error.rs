//! Error taxonomy for the upstream boundary.

use thiserror::Error;

/// Failure while fetching or decoding the upstream list document.
///
/// The variants exist for logs and tests; the HTTP surface collapses
/// all of them into the same empty-list response.
#[derive(Debug, Error)]
pub enum MalError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid upstream URL: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed upstream document: {0}")]
    MalformedDocument(String),

    #[error("upstream reported an error: {0}")]
    Upstream(String),
}
