//! # Error Types
//!
//! Errors for parsing shared identifiers.

use thiserror::Error;

/// Errors that can occur when parsing a [`crate::Pubkey`] from text or bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PubkeyError {
    /// Input is not valid base58.
    #[error("Invalid base58 pubkey: {0}")]
    InvalidBase58(String),

    /// Decoded byte length is not 32.
    #[error("Invalid pubkey length: expected {expected}, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}
