use thiserror::Error;
use tl_03_record_schemas::SchemaError;
use tl_04_instruction_builder::BuildError;
use tl_05_account_scan::ScanError;

/// Failures reported by the ports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The instruction was built against a namespace counter that has since
    /// moved.
    #[error("Namespace counter is stale")]
    StaleCounter,

    #[error("Instruction rejected: {0}")]
    Rejected(String),

    #[error("Lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Address derivation failed: {0}")]
    Derivation(#[from] tl_02_address_derivation::DerivationError),

    #[error("Namespace is not initialized")]
    NamespaceNotFound,

    #[error("Work item {ordinal} not found")]
    WorkItemNotFound { ordinal: u64 },

    #[error("Work item {ordinal} has no assigned actor")]
    NoAssignedActor { ordinal: u64 },

    #[error("Fee of {fee_bps} bps cannot be applied to {reward}")]
    FeeOverflow { reward: u64, fee_bps: u16 },

    #[error("Namespace counter kept moving; gave up after {attempts} attempts")]
    StaleCounterExhausted { attempts: u32 },
}
