//! Failures of the photo API fetches.

use thiserror::Error;

/// Why a fetch did not produce a value.
///
/// Every variant is terminal: nothing is retried and no state is attached
/// beyond a description of the cause.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The request could not be sent, or the response could not be read.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered without a body.
    #[error("empty response body")]
    EmptyBody,
    /// The body does not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ureq::Error> for NetworkError {
    fn from(err: ureq::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<std::io::Error> for NetworkError {
    fn from(err: std::io::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
