//! Error types for the anomaly-detection gateway.
//!
//! Every failure a plugin call can produce is categorized here, so callers
//! can distinguish configuration problems from request-building problems,
//! network failures, and responses that arrived with the wrong status code.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type covering every gateway failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Profile or endpoint configuration errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Request construction errors (URL, headers, payload encoding)
    #[error("request construction error")]
    Request(#[from] RequestError),

    /// Network-level errors, including cancellation and timeouts
    #[error("transport error")]
    Transport(#[from] TransportError),

    /// Response arrived, but its status differed from the declared expectation
    #[error("unexpected status {status} (expected {expected}): {body}")]
    UnexpectedStatus {
        expected: u16,
        status: u16,
        body: String,
    },

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Creates an unexpected-status error from the expected and actual codes.
    pub fn unexpected_status(
        expected: reqwest::StatusCode,
        status: reqwest::StatusCode,
        body: impl Into<String>,
    ) -> Self {
        Self::UnexpectedStatus {
            expected: expected.as_u16(),
            status: status.as_u16(),
            body: body.into(),
        }
    }

    /// Returns the actual response status for unexpected-status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Profile and endpoint configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),

    /// Profile has no endpoint configured
    #[error("profile has no endpoint configured")]
    MissingEndpoint,

    /// Endpoint is present but not a usable base address
    #[error("invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }

    /// Creates a new invalid endpoint error.
    pub fn invalid_endpoint(endpoint: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.into(),
            message: err.to_string(),
        }
    }
}

/// Request construction errors, surfaced before any network I/O happens.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Request payload could not be JSON-encoded
    #[error("failed to encode request payload: {0}")]
    PayloadEncoding(#[from] serde_json::Error),

    /// A header value was not representable
    #[error("invalid value for header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    /// The HTTP client rejected the assembled request
    #[error("failed to build request: {0}")]
    Build(#[from] reqwest::Error),
}

impl RequestError {
    /// Creates a new invalid header error.
    pub fn invalid_header(name: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: err.to_string(),
        }
    }
}

/// Network-level errors.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The call was cancelled or exceeded its deadline
    #[error("request timed out or was cancelled: {0}")]
    Timeout(String),

    /// The request never completed a round trip
    #[error("failed to send request: {0}")]
    Send(reqwest::Error),

    /// The response arrived but its body could not be read
    #[error("failed to read response body: {0}")]
    Body(reqwest::Error),
}

impl TransportError {
    /// Classifies a send-side reqwest error, separating deadline expiry
    /// from other network failures.
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Send(err)
        }
    }
}
