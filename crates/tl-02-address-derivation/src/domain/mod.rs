//! # Domain Layer
//!
//! Pure derivation logic. No I/O.

pub mod deriver;
pub mod errors;
pub mod pda;
pub mod seeds;

pub use deriver::AddressDeriver;
pub use errors::DerivationError;
pub use pda::{
    create_program_address, find_program_address, ProgramAddress, MAX_SEEDS, MAX_SEED_LEN,
    PDA_MARKER,
};
pub use seeds::SeedComposition;
