//! # Curve Point Validation
//!
//! Program-derived addresses must not be valid ed25519 public keys, so that
//! no private key can ever sign for them.

use ed25519_dalek::VerifyingKey;

/// Returns `true` when `bytes` decompress to a point on the ed25519 curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    VerifyingKey::from_bytes(bytes).is_ok()
}
