//! # TL-05 Account Scan
//!
//! Turns a snapshot of `(address, bytes)` pairs into typed collections.
//!
//! ## Classification
//!
//! Each account is attributed to a record kind by its tag, then decoded with
//! that kind's schema (work items under the deployment's layout):
//!
//! | Outcome | Disposition |
//! |---------|-------------|
//! | decoded | kept in the report |
//! | unknown tag or empty | skipped, logged at `debug` |
//! | malformed | skipped, logged at `warn` |
//! | truncated | logged at `error`; skipped under [`ScanPolicy::Lenient`], aborts under [`ScanPolicy::Strict`] |
//!
//! The scanner holds no state between calls; scanning the same snapshot
//! twice yields the same report.
//!
//! ## Lookups
//!
//! [`probe`] and [`probe_work_item`] interpret the data at one address,
//! returning `Ok(None)` for a missing account or one of another kind.

pub mod domain;
pub mod service;

pub use domain::*;
pub use service::AccountScanner;
