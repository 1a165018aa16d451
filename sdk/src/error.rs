use {
    reqwest::StatusCode,
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

/// Coarse classification of [ExchangeError]s.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeErrorKind {
    /// Network-related error
    Network,
    /// Connection error
    Connection,
    /// Timeout error
    Timeout,
    /// Error parsing response
    Parse,
    /// Missing, expired or invalid token, or wrong credentials
    Auth,
    /// Resource not found
    NotFound,
    /// Server error
    Server,
    /// Any other non-success status
    Api,
    /// Invalid client configuration or a request that could not be built
    Validation,
}

impl ExchangeErrorKind {
    /// Map a non-success HTTP status to an error kind.
    pub fn from_status_code(status: StatusCode) -> Self {
        match status.as_u16() {
            401 | 403 => ExchangeErrorKind::Auth,
            404 => ExchangeErrorKind::NotFound,
            500..=599 => ExchangeErrorKind::Server,
            _ => ExchangeErrorKind::Api,
        }
    }
}

/// Error type for exchange operations.
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Exchange API status error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Response parsing error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("Authentication returned an empty token")]
    EmptyToken,
}

impl ExchangeError {
    pub fn kind(&self) -> ExchangeErrorKind {
        match self {
            ExchangeError::Network(e) if e.is_builder() => ExchangeErrorKind::Validation,
            ExchangeError::Network(e) if e.is_timeout() => ExchangeErrorKind::Timeout,
            ExchangeError::Network(e) if e.is_connect() => ExchangeErrorKind::Connection,
            ExchangeError::Network(e) if e.is_decode() => ExchangeErrorKind::Parse,
            ExchangeError::Network(_) => ExchangeErrorKind::Network,
            ExchangeError::Status { status, .. } => ExchangeErrorKind::from_status_code(*status),
            ExchangeError::Decode(_) => ExchangeErrorKind::Parse,
            ExchangeError::InvalidBaseUrl(_) | ExchangeError::EmptyToken => {
                ExchangeErrorKind::Validation
            }
        }
    }

    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ExchangeError::Status { status, .. } => Some(*status),
            ExchangeError::Network(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_auth(&self) -> bool {
        self.kind() == ExchangeErrorKind::Auth
    }
}
