//! # Domain Layer
//!
//! Record layouts, tags and status machines.

pub mod actor;
pub mod errors;
pub mod namespace;
pub mod record;
pub mod status;
pub mod submission;
pub mod tags;
pub mod work_item;

pub use actor::ActorProfile;
pub use errors::SchemaError;
pub use namespace::{FeeSplit, NamespaceStats, BPS_DENOMINATOR};
pub use record::Record;
pub use status::{SubmissionStatus, WorkItemLayout, WorkItemStatus};
pub use submission::Submission;
pub use tags::{RecordKind, TAG_LEN};
pub use work_item::{AssignmentWorkItem, CompetitionWorkItem, WorkItem, WorkItemHeader};
