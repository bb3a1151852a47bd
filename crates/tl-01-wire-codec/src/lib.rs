//! # TL-01 Wire Codec
//!
//! Encode/decode primitives for the ledger program's account and instruction
//! byte layouts.
//!
//! ## Wire Rules
//!
//! | Shape | Encoding |
//! |-------|----------|
//! | `u8/u16/u32/u64`, `i8/i16/i32/i64` | fixed width, little-endian |
//! | `bool` | one byte, `0` or `1`; anything else is an error |
//! | `String` | `len: u32 LE` then UTF-8 bytes, no terminator |
//! | `Vec<T>` | `count: u32 LE` then `count` encoded elements |
//! | `Option<T>` | tag byte `0` (absent) or `1` then payload; other tags are errors |
//! | `Pubkey` / `[u8; N]` | raw bytes, no prefix |
//!
//! ## Contract
//!
//! For every supported value `v`:
//! `decode(encode(v) ++ anything, 0) == (v, len(encode(v)))`.
//!
//! Decoding never reads past the buffer; running out of bytes is
//! [`DecodeError::TruncatedData`].

pub mod errors;
pub mod reader;
pub mod traits;
pub mod writer;

pub use errors::{DecodeError, EncodeError};
pub use reader::ByteReader;
pub use traits::{Decode, Encode};
pub use writer::ByteWriter;
