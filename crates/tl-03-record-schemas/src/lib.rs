//! # TL-03 Record Schemas
//!
//! Typed views of the four account kinds the ledger program stores.
//!
//! ## Layouts
//!
//! Every account starts with an 8-byte tag identifying its kind. Fields
//! follow in declaration order using the TL-01 wire rules.
//!
//! | Record | Tag preimage | Fields after tag |
//! |--------|--------------|------------------|
//! | [`NamespaceStats`] | `account:Platform` | authority, fee_bps, work_item_count, completed_count, volume, bump |
//! | [`ActorProfile`] | `account:AgentProfile` | owner, name, bio, skills, hourly_rate, completed, failed, earned, rating_sum, rating_count, registered_at, active, bump |
//! | [`AssignmentWorkItem`] | `account:Task` | common prefix, assigned_actor, claimed_at, submitted_at, completed_at, submission_url, submission_notes, rejection_reason, rating, bump, escrow_bump |
//! | [`CompetitionWorkItem`] | `account:Task` | common prefix, submission_count, winning_submission, completed_at |
//! | [`Submission`] | `account:Submission` | work_item_id, actor, url, notes, submitted_at, status |
//!
//! The work item common prefix is: id, requester, title, description,
//! requirements, category, reward, created_at, deadline, status.
//!
//! ## Error Classes
//!
//! - [`SchemaError::WrongKind`]: empty data or a different tag. Expected when
//!   probing; callers treat it as "not this record".
//! - [`SchemaError::TruncatedData`]: the tag matched but the data ran out.
//! - [`SchemaError::Malformed`]: the tag matched but a field broke a
//!   structural rule.
//!
//! Both work item layouts share one tag. The layout is chosen by deployment
//! configuration ([`WorkItemLayout`]), never by trying both.

pub mod domain;

pub use domain::*;
