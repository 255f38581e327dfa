use thiserror::Error;

/// Failures talking to the upstream content source.
///
/// `NotFound` is deliberately separate from the transient variants: a page
/// that does not exist is an answer, not an outage, and the route layer
/// maps the two differently (404 versus fallback data).
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned status {status}")]
    Status { status: u16 },
    #[error("upstream object not found")]
    NotFound,
    #[error("failed to decode upstream response: {0}")]
    Decode(String),
    #[error("invalid upstream configuration: {0}")]
    Configuration(String),
}
