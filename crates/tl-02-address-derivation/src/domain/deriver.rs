//! Program-bound deriver exposing one method per seed composition.

use shared_types::Pubkey;

use super::errors::DerivationError;
use super::pda::{find_program_address, ProgramAddress};
use super::seeds::SeedComposition;
use crate::adapters::OffCurve;
use crate::ports::AddressValidity;

/// Derives addresses owned by one program.
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone)]
pub struct AddressDeriver<V = OffCurve> {
    program_id: Pubkey,
    validity: V,
}

impl AddressDeriver<OffCurve> {
    /// Deriver using the ledger runtime's off-curve rule.
    pub fn new(program_id: Pubkey) -> Self {
        Self::with_validity(program_id, OffCurve)
    }
}

impl<V: AddressValidity> AddressDeriver<V> {
    pub fn with_validity(program_id: Pubkey, validity: V) -> Self {
        Self {
            program_id,
            validity,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn derive(&self, composition: &SeedComposition) -> Result<ProgramAddress, DerivationError> {
        let owned = composition.seed_bytes();
        let seeds: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();
        find_program_address(&seeds, &self.program_id, &self.validity)
    }

    pub fn namespace(&self) -> Result<ProgramAddress, DerivationError> {
        self.derive(&SeedComposition::Namespace)
    }

    pub fn actor(&self, owner: &Pubkey) -> Result<ProgramAddress, DerivationError> {
        self.derive(&SeedComposition::Actor { owner: *owner })
    }

    pub fn work_item(&self, ordinal: u64) -> Result<ProgramAddress, DerivationError> {
        self.derive(&SeedComposition::WorkItem { ordinal })
    }

    pub fn escrow(&self, ordinal: u64) -> Result<ProgramAddress, DerivationError> {
        self.derive(&SeedComposition::Escrow { ordinal })
    }

    pub fn submission(
        &self,
        work_item: &Pubkey,
        actor: &Pubkey,
    ) -> Result<ProgramAddress, DerivationError> {
        self.derive(&SeedComposition::Submission {
            work_item: *work_item,
            actor: *actor,
        })
    }
}
