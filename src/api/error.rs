/// Error types for the inventory API
use std::io;
use thiserror::Error;

/// Errors that can occur while fetching teleservices
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The inventory answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// The body is not a JSON array of teleservice records
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// A record deserialized but breaks a record invariant
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        index: usize,
        reason: String,
    },

    /// Writing verbose progress failed
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}
