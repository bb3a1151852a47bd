//! # Core Entities
//!
//! ## Clusters
//!
//! - **Identity**: `Pubkey`, `SYSTEM_PROGRAM_ID`
//! - **Store Snapshots**: `RawAccount`
//! - **Outbound Calls**: `AccountMeta`, `Instruction`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::errors::PubkeyError;

// =============================================================================
// IDENTITY
// =============================================================================

/// Length of an account address in bytes.
pub const PUBKEY_BYTES: usize = 32;

/// Seconds since the Unix epoch, as stored by the ledger clock.
pub type UnixTimestamp = i64;

/// Smallest currency unit.
pub type Lamports = u64;

/// A 32-byte account address or owner identifier.
///
/// Text form is base58, which is also the serde representation.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, SerializeDisplay, DeserializeFromStr,
)]
pub struct Pubkey([u8; PUBKEY_BYTES]);

/// The native system program. Referenced by every instruction that allocates
/// an account.
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new([0u8; PUBKEY_BYTES]);

impl Pubkey {
    pub const fn new(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; PUBKEY_BYTES] {
        &self.0
    }

    /// Build from a slice, failing unless it is exactly 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, PubkeyError> {
        let array: [u8; PUBKEY_BYTES] =
            bytes.try_into().map_err(|_| PubkeyError::WrongLength {
                expected: PUBKEY_BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PUBKEY_BYTES]> for Pubkey {
    fn from(bytes: [u8; PUBKEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}

impl FromStr for Pubkey {
    type Err = PubkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| PubkeyError::InvalidBase58(e.to_string()))?;
        Self::try_from_slice(&bytes)
    }
}

// =============================================================================
// STORE SNAPSHOTS
// =============================================================================

/// One `(address, bytes)` pair as returned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAccount {
    pub address: Pubkey,
    #[serde(with = "base58_bytes")]
    pub data: Vec<u8>,
}

impl RawAccount {
    pub fn new(address: Pubkey, data: Vec<u8>) -> Self {
        Self { address, data }
    }
}

mod base58_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&bs58::encode(data).into_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        bs58::decode(text)
            .into_vec()
            .map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// OUTBOUND CALLS
// =============================================================================

/// An account referenced by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    /// A writable account.
    pub fn writable(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    /// A read-only account.
    pub fn readonly(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

/// A fully shaped call into the remote program, ready to be signed and
/// submitted by an external wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

impl Instruction {
    /// The signer accounts, in declaration order.
    pub fn signers(&self) -> impl Iterator<Item = &Pubkey> {
        self.accounts
            .iter()
            .filter(|meta| meta.is_signer)
            .map(|meta| &meta.pubkey)
    }
}
