use crate::errors::StoreError;
use crate::ports::{AccountReader, InstructionSubmitter, Signature};
use async_trait::async_trait;
use shared_types::{Instruction, Pubkey, RawAccount};
use std::collections::{BTreeMap, VecDeque};
use std::sync::RwLock;

/// In-memory implementation of both ports for testing.
///
/// Submitted instructions are recorded, not executed. Failures can be queued
/// to exercise the client's error paths.
pub struct InMemoryLedger {
    accounts: RwLock<BTreeMap<Pubkey, StoredAccount>>,
    submitted: RwLock<Vec<Instruction>>,
    failures: RwLock<VecDeque<StoreError>>,
}

struct StoredAccount {
    owner: Pubkey,
    data: Vec<u8>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(BTreeMap::new()),
            submitted: RwLock::new(Vec::new()),
            failures: RwLock::new(VecDeque::new()),
        }
    }

    /// Store `data` at `address`, owned by `owner`.
    pub fn put_account(
        &self,
        owner: Pubkey,
        address: Pubkey,
        data: Vec<u8>,
    ) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        accounts.insert(address, StoredAccount { owner, data });
        Ok(())
    }

    pub fn remove_account(&self, address: &Pubkey) -> Result<bool, StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(accounts.remove(address).is_some())
    }

    /// Make the next `submit` fail with `error`. Queued failures are used in
    /// order.
    pub fn queue_failure(&self, error: StoreError) -> Result<(), StoreError> {
        let mut failures = self
            .failures
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        failures.push_back(error);
        Ok(())
    }

    /// Instructions accepted so far, oldest first.
    pub fn submitted(&self) -> Result<Vec<Instruction>, StoreError> {
        let submitted = self
            .submitted
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(submitted.clone())
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountReader for InMemoryLedger {
    async fn get_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(accounts.get(address).map(|a| a.data.clone()))
    }

    async fn get_program_accounts(
        &self,
        program_id: &Pubkey,
    ) -> Result<Vec<RawAccount>, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::LockPoisoned)?;
        Ok(accounts
            .iter()
            .filter(|(_, a)| a.owner == *program_id)
            .map(|(address, a)| RawAccount::new(*address, a.data.clone()))
            .collect())
    }
}

#[async_trait]
impl InstructionSubmitter for InMemoryLedger {
    async fn submit(&self, instruction: Instruction) -> Result<Signature, StoreError> {
        let queued = self
            .failures
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .pop_front();
        if let Some(error) = queued {
            return Err(error);
        }

        let mut submitted = self
            .submitted
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        let index = submitted.len() as u64;
        let digest = shared_crypto::sha256_many(&[
            instruction.program_id.as_bytes(),
            &instruction.data,
            &index.to_le_bytes(),
        ]);
        submitted.push(instruction);
        Ok(bs58::encode(digest).into_string())
    }
}
