//! Error taxonomy for the HTTP adapter.
//!
//! Three failure classes drive three different UI reactions: `Unauthorized`
//! clears the session and redirects to login, `Rejected` surfaces the
//! backend's detail message inline, and `Network` degrades to a loading/empty
//! state without retrying.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// A failed API operation. Nothing here is fatal; every variant maps to a
/// user-recoverable state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401 — the token is missing, invalid, or expired.
    #[error("not authorized")]
    Unauthorized,
    /// Any other non-success status, with the backend's detail when present.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    /// Transport failure or an undecodable body.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Map a non-success response to the right variant, pulling the
    /// human-readable message out of the backend's `{"detail": ...}` body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::Rejected {
            status,
            detail: extract_detail(status, body),
        }
    }
}

/// Pull the `detail` string out of a rejection body, falling back to a
/// status-based message when the body is empty or not the expected shape.
fn extract_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .unwrap_or_else(|_| format!("request failed: {status}"))
}
