//! Error types for ledgerchart-core
//!
//! The engine is total over well-formed input. The errors below cover the
//! malformed inputs that would otherwise corrupt forward-fill ordering.

use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Date does not parse as a calendar date
    InvalidDate,
    /// Range start is after range end
    InvalidRange,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidDate => write!(f, "INVALID_DATE"),
            ErrorCode::InvalidRange => write!(f, "INVALID_RANGE"),
        }
    }
}

/// Main error type for ledgerchart-core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid date: '{value}' is not a YYYY-MM-DD calendar date")]
    InvalidDate { value: String },

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },
}

impl CoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidDate { .. } => ErrorCode::InvalidDate,
            CoreError::InvalidRange { .. } => ErrorCode::InvalidRange,
        }
    }

    /// Whether the caller can fix this by changing the request alone.
    /// A bad date comes from the transaction data and needs the ledger fixed.
    pub fn is_request_error(&self) -> bool {
        matches!(self, CoreError::InvalidRange { .. })
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
