use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BinsError {
    #[error("uprn argument is required")]
    MissingUprn,

    #[error("uprn must be a valid number: {0}")]
    InvalidUprn(#[from] ParseIntError),

    #[error("failed to fetch bin collection data: {0}")]
    Fetch(#[from] TransportError),

    #[error("API request failed with status {0}")]
    UpstreamStatus(u16),

    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BinsError {
    /// Caller mistakes, as opposed to upstream or network failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, BinsError::MissingUprn | BinsError::InvalidUprn(_))
    }
}

/// Failure to get any HTTP response out of the transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, BinsError>;
