//! Failures of a product search call.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SearchApiError {
    /// The request was superseded or torn down. Never shown to the user.
    #[error("search request cancelled")]
    Cancelled,
    #[error("Search API error: {status}")]
    Http { status: u16 },
    #[error("search request failed: {message}")]
    Network { message: String },
    #[error("search response could not be decoded: {message}")]
    Decode { message: String },
}

impl SearchApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchApiError::Cancelled)
    }

    /// HTTP status to report for this failure when it crosses a server boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            SearchApiError::Http { status } => *status,
            SearchApiError::Cancelled | SearchApiError::Network { .. } | SearchApiError::Decode { .. } => 500,
        }
    }
}
