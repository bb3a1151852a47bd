//! # Task-Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Record and account builders shared with benches
//! └── integration/      # Cross-crate scenarios
//!     ├── scenarios.rs  # Create, decode, rating and mixed-scan flows
//!     ├── golden.rs     # Tags and derived addresses of both deployments
//!     ├── truncation.rs # Every prefix of every record kind
//!     └── client_flow.rs# LedgerClient over the in-memory ledger
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tl-tests
//!
//! # By category
//! cargo test -p tl-tests integration::golden::
//!
//! # Benchmarks
//! cargo bench -p tl-tests
//! ```

pub mod fixtures;
