//! Error types for transaction encoding and signing

use thiserror::Error;

/// Status code reported alongside a successful result.
pub const STATUS_OK: i32 = 0;

/// Status code for malformed or unrecognized caller input.
pub const STATUS_INVALID_INPUT: i32 = 1;

/// Status code for a failed witness signature.
pub const STATUS_SIGN_FAILED: i32 = 2;

#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Decoding failed: {0}")]
    Decoding(String),

    #[error("Checksum mismatch: {0}")]
    ChecksumMismatch(String),

    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

impl TransactionError {
    /// Numeric status code for callers that report results as (value, code)
    /// pairs. Success is [`STATUS_OK`]; every error maps onto exactly one
    /// non-zero code.
    pub fn status_code(&self) -> i32 {
        match self {
            TransactionError::Decoding(_)
            | TransactionError::ChecksumMismatch(_)
            | TransactionError::UnknownAsset(_) => STATUS_INVALID_INPUT,
            TransactionError::Signing(_) => STATUS_SIGN_FAILED,
        }
    }
}

pub type Result<T> = std::result::Result<T, TransactionError>;
