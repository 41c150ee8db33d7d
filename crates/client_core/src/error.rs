use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhoneBookError {
    #[error("invalid api base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("{operation}: request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{operation}: unexpected status {status}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
    },
    #[error("contact '{query}' not found")]
    NotFound { query: String },
    #[error("{operation}: failed to decode response body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl PhoneBookError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PhoneBookError::NotFound { .. })
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PhoneBookError::UnexpectedStatus { status, .. } => Some(*status),
            PhoneBookError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            _ => None,
        }
    }
}

pub type Result<T, E = PhoneBookError> = std::result::Result<T, E>;
