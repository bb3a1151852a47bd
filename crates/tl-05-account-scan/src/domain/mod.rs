//! # Domain Layer
//!
//! Report types, filters and single-address probes.

pub mod errors;
pub mod filters;
pub mod lookup;
pub mod report;

pub use errors::ScanError;
pub use lookup::{probe, probe_work_item};
pub use report::{Decoded, ScanPolicy, ScanReport, SkipReason, SkippedAccount};
