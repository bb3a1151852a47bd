//! # Codec Errors

use thiserror::Error;

/// Errors raised while decoding a byte buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ended before a field was complete.
    #[error("Truncated data: need {needed} bytes at offset {offset}, buffer has {available}")]
    TruncatedData {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A boolean byte was neither 0 nor 1.
    #[error("Invalid bool byte {value:#04x} at offset {offset}")]
    InvalidBool { offset: usize, value: u8 },

    /// An option tag was neither 0 nor 1.
    #[error("Invalid option tag {value} at offset {offset}")]
    InvalidOptionTag { offset: usize, value: u8 },

    /// String bytes were not valid UTF-8.
    #[error("Invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// An enumerated byte was outside the known variants.
    #[error("Invalid {kind} discriminant {value} at offset {offset}")]
    InvalidEnumTag {
        kind: &'static str,
        offset: usize,
        value: u8,
    },
}

impl DecodeError {
    /// Whether the error comes from running out of input.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::TruncatedData { .. })
    }
}

/// Errors raised while encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A string or sequence is longer than a `u32` length prefix can express.
    #[error("Length {length} exceeds u32 prefix")]
    LengthOverflow { length: usize },
}
