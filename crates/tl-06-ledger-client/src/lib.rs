//! # TL-06 Ledger Client
//!
//! The calling layer: fetches account bytes through an [`AccountReader`],
//! interprets them with the schema and scan crates, and sends instructions
//! through an [`InstructionSubmitter`].
//!
//! ## Hexagonal Architecture
//!
//! - **Ports** (`ports/`): the two capabilities the client needs from the
//!   outside world. Both are passed into [`LedgerClient::new`]; there is no
//!   ambient connection or wallet.
//! - **Adapters** (`adapters/`): [`InMemoryLedger`], implementing both ports
//!   over a map, for tests and local tooling.
//! - **Service** (`service.rs`): [`LedgerClient`].
//!
//! ## Counter Races
//!
//! Creating a work item derives its address from the namespace counter. If
//! another requester creates one first, the submitter reports
//! [`StoreError::StaleCounter`]; the client re-reads the counter and retries
//! up to [`DeploymentConfig::max_create_attempts`] times.

pub mod adapters;
pub mod config;
pub mod errors;
pub mod ports;
pub mod service;

pub use adapters::InMemoryLedger;
pub use config::{
    ConfigError, DeploymentConfig, ASSIGNMENT_PROGRAM_ID, COMPETITION_PROGRAM_ID,
    DEFAULT_MAX_CREATE_ATTEMPTS,
};
pub use errors::{ClientError, StoreError};
pub use ports::{AccountReader, InstructionSubmitter, Signature};
pub use service::{CreatedWorkItem, LedgerClient};
