//! # Shared Types Crate
//!
//! Identifiers and envelopes shared across the task-ledger crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Pubkey`, `RawAccount` and `Instruction` are
//!   defined once here; every other crate speaks these types.
//! - **Opaque Store**: the ledger is only ever seen as `(address, bytes)`
//!   pairs in and `Instruction` values out.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
