//! Jenkins API client error types.

use reqwest::StatusCode;

/// Jenkins API client errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Server rejected the configured credentials.
    #[error("Cannot authenticate: server returned {0}")]
    Unauthorized(StatusCode),

    /// Endpoint answered with a status the client cannot use.
    #[error("{endpoint} returned {status}")]
    UnexpectedStatus {
        endpoint: String,
        status: StatusCode,
    },

    /// Job exists but has never been built.
    #[error("job {0} has no builds")]
    NoBuilds(String),

    /// JSON deserialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Request could not be sent or its body could not be read.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
