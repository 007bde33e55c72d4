use std::time::Duration;

use reqwest::StatusCode;

/// Failures talking to the inference backend.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InferenceError {
    #[display("invalid inference base URL '{url}': {source}")]
    InvalidBaseUrl { url: String, source: url::ParseError },

    #[display("failed to build HTTP client: {source}")]
    ClientBuild { source: reqwest::Error },

    #[display("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[display("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[display("{url} responded with {status}")]
    Status { url: String, status: StatusCode },

    #[display("malformed response from {url}: {source}")]
    MalformedBody {
        url: String,
        source: serde_json::Error,
    },
}

impl InferenceError {
    /// Whether the backend could not be reached at all (as opposed to answering badly).
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Transport { .. })
    }
}
