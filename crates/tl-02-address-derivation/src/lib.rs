//! # TL-02 Address Derivation
//!
//! Maps `(seeds, program_id)` to the storage address the ledger program
//! itself computes for the same seeds, plus the bump byte that made the
//! candidate acceptable.
//!
//! ## Derivation
//!
//! ```text
//! candidate(bump) = sha256(seed_0 ‖ … ‖ seed_n ‖ [bump] ‖ program_id ‖ "ProgramDerivedAddress")
//! bump            = first of 255, 254, …, 0 whose candidate passes AddressValidity
//! ```
//!
//! The validity predicate is a port ([`AddressValidity`]); production code
//! uses [`OffCurve`], which rejects candidates that are valid ed25519 points.
//!
//! ## Seed Compositions
//!
//! | Record | Seeds |
//! |--------|-------|
//! | Namespace | `"platform"` |
//! | Actor | `"agent"`, owner |
//! | Work item | `"task"`, ordinal (u64 LE) |
//! | Escrow | `"escrow"`, ordinal (u64 LE) |
//! | Submission | `"submission"`, work item address, actor |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): hashing loop, seed packing, errors
//! - **Ports Layer** (`ports/`): the validity predicate
//! - **Adapters Layer** (`adapters/`): ed25519 off-curve predicate

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::OffCurve;
pub use domain::{
    create_program_address, find_program_address, seeds, AddressDeriver, DerivationError,
    ProgramAddress, SeedComposition, MAX_SEEDS, MAX_SEED_LEN, PDA_MARKER,
};
pub use ports::AddressValidity;
