//! # TL-04 Instruction Builder
//!
//! Shapes calls into the ledger program: the instruction data
//! (`tag ++ encoded arguments`) and the ordered account list with signer and
//! writable flags.
//!
//! ## Operations
//!
//! | Operation | Arguments | Layouts |
//! |-----------|-----------|---------|
//! | initialize | fee_bps: u16 | both |
//! | register-actor | name, bio, skills, hourly_rate: u64 | both |
//! | update-actor | all optional: name, bio, skills, hourly_rate, active | assignment |
//! | create-work-item | title, description, requirements, category, reward: u64, deadline_hours: u64 | both |
//! | claim-work-item | none | assignment |
//! | submit-work | url, notes | assignment |
//! | approve-work | rating: u8 | assignment |
//! | reject-work | reason | assignment |
//! | cancel-work-item | none | both |
//! | submit-application | url, notes | competition |
//! | select-winner | rating: u8 | competition |
//!
//! Requesting an operation the deployment's layout does not offer is
//! [`BuildError::UnknownOperation`]. Arguments are checked against the
//! program's own limits before anything is encoded.
//!
//! ## Ordinals
//!
//! create-work-item derives the work item and escrow addresses from the
//! ordinal the caller read from `NamespaceStats`. The builder does not read
//! state itself; the caller must pass the counter it observed.

pub mod domain;
pub mod service;

pub use domain::{
    ApproveWorkArgs, BuildError, CreateWorkItemArgs, InitializeArgs, InstructionRequest,
    Operation, RegisterActorArgs, RejectWorkArgs, SelectWinnerArgs, SubmitApplicationArgs,
    SubmitWorkArgs, UpdateActorArgs,
};
pub use domain::limits;
pub use service::{encode_data, InstructionBuilder};
