//! Program-derived address hashing and bump search.

use shared_crypto::Sha256Hasher;
use shared_types::Pubkey;

use super::errors::DerivationError;
use crate::ports::AddressValidity;

/// Maximum number of seeds, bump included.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Domain-separation suffix appended after the program id.
pub const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// A derived address and the bump that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramAddress {
    pub address: Pubkey,
    pub bump: u8,
}

fn check_seeds(seeds: &[&[u8]], max_count: usize) -> Result<(), DerivationError> {
    if seeds.len() > max_count {
        return Err(DerivationError::TooManySeeds {
            count: seeds.len(),
            max: max_count,
        });
    }
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(DerivationError::SeedTooLong {
            index,
            length: seed.len(),
            max: MAX_SEED_LEN,
        });
    }
    Ok(())
}

fn hash_candidate(seeds: &[&[u8]], bump: Option<u8>, program_id: &Pubkey) -> [u8; 32] {
    let mut hasher = Sha256Hasher::new();
    for seed in seeds {
        hasher.update(seed);
    }
    if let Some(bump) = bump {
        hasher.update(&[bump]);
    }
    hasher.update(program_id.as_bytes()).update(PDA_MARKER);
    hasher.finalize()
}

/// Hash `seeds` (the caller includes any bump) into a candidate and check it.
pub fn create_program_address<V: AddressValidity + ?Sized>(
    seeds: &[&[u8]],
    program_id: &Pubkey,
    validity: &V,
) -> Result<Pubkey, DerivationError> {
    check_seeds(seeds, MAX_SEEDS)?;
    let candidate = hash_candidate(seeds, None, program_id);
    if validity.accepts(&candidate) {
        Ok(Pubkey::new(candidate))
    } else {
        Err(DerivationError::InvalidCandidate)
    }
}

/// Search bumps 255 down to 0 and return the first accepted candidate.
pub fn find_program_address<V: AddressValidity + ?Sized>(
    seeds: &[&[u8]],
    program_id: &Pubkey,
    validity: &V,
) -> Result<ProgramAddress, DerivationError> {
    check_seeds(seeds, MAX_SEEDS - 1)?;
    for bump in (0..=u8::MAX).rev() {
        let candidate = hash_candidate(seeds, Some(bump), program_id);
        if validity.accepts(&candidate) {
            return Ok(ProgramAddress {
                address: Pubkey::new(candidate),
                bump,
            });
        }
    }
    tracing::warn!(program_id = %program_id, seeds = seeds.len(), "bump search exhausted");
    Err(DerivationError::DerivationExhausted { attempts: 256 })
}
