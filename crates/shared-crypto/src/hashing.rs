//! # SHA-256 Hashing
//!
//! One-shot and streaming SHA-256, plus the 8-byte discriminator scheme used
//! by the ledger program to tag accounts and instructions.

use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Stateful SHA-256 hasher.
pub struct Sha256Hasher {
    inner: Sha256,
}

impl Sha256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Hash {
        self.inner.finalize().into()
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash the concatenation of multiple inputs.
pub fn sha256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Sha256Hasher::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize()
}

/// First 8 bytes of `sha256("<namespace>:<name>")`.
///
/// Accounts use namespace `account` with the type name (`account:Task`),
/// instructions use `global` with the snake-case handler name
/// (`global:create_task`).
pub fn discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let hash = sha256_many(&[namespace.as_bytes(), b":", name.as_bytes()]);
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash[..8]);
    out
}
