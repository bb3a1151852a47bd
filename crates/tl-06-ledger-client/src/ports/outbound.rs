//! Outbound Ports (Driven Ports)
//!
//! What the client needs from the remote ledger.

use async_trait::async_trait;
use shared_types::{Instruction, Pubkey, RawAccount};
use std::sync::Arc;

use crate::errors::StoreError;

/// Transaction signature returned by a submitter, in its text form.
pub type Signature = String;

/// Read access to account bytes.
#[async_trait]
pub trait AccountReader: Send + Sync {
    /// Bytes stored at `address`, or `None` when no account exists.
    async fn get_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, StoreError>;

    /// Every account owned by `program_id`.
    async fn get_program_accounts(&self, program_id: &Pubkey)
        -> Result<Vec<RawAccount>, StoreError>;
}

/// Signs and sends an instruction. Signing is the submitter's concern.
#[async_trait]
pub trait InstructionSubmitter: Send + Sync {
    async fn submit(&self, instruction: Instruction) -> Result<Signature, StoreError>;
}

#[async_trait]
impl<T: AccountReader + ?Sized> AccountReader for Arc<T> {
    async fn get_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_account(address).await
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> Result<Vec<RawAccount>, StoreError> {
        (**self).get_program_accounts(program_id).await
    }
}

#[async_trait]
impl<T: InstructionSubmitter + ?Sized> InstructionSubmitter for Arc<T> {
    async fn submit(&self, instruction: Instruction) -> Result<Signature, StoreError> {
        (**self).submit(instruction).await
    }
}
