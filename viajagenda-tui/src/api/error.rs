use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ActivityId;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("failed to call {call}")]
    Transport {
        call: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{call} returned {status}")]
    Status { call: String, status: StatusCode },
    #[error("failed to parse {call} response")]
    Decode {
        call: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("activity {0} not found")]
    NotFound(ActivityId),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        match self {
            ApiError::NotFound(_) => true,
            ApiError::Status { status, .. } => *status == StatusCode::NOT_FOUND,
            _ => false,
        }
    }
}
