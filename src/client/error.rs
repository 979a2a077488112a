//! Sensor API client errors

use thiserror::Error;

/// Errors that can occur when talking to the sensor API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Sensor API unavailable")]
    Unavailable,

    #[cfg(feature = "native")]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    /// The body parsed but is missing fields the dashboard needs, or did not parse at all
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Malformed(err.to_string())
    }
}
