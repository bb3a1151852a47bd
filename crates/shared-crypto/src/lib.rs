//! # Shared Crypto - Hashing and Curve Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Program addresses, 8-byte discriminators |
//! | `curve` | ed25519 point decompression | Off-curve check for derived addresses |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod curve;
pub mod hashing;

// Re-exports
pub use curve::is_on_curve;
pub use hashing::{discriminator, sha256, sha256_many, Hash, Sha256Hasher};
