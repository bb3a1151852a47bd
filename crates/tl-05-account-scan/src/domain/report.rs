use serde::{Deserialize, Serialize};
use shared_types::Pubkey;
use tl_03_record_schemas::{
    ActorProfile, NamespaceStats, RecordKind, SchemaError, Submission, WorkItem,
};

use super::filters;

/// What to do when a record of a known kind is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Log, skip, keep scanning.
    #[default]
    Lenient,
    /// Abort the scan with [`ScanError::Truncated`](super::ScanError::Truncated).
    Strict,
}

/// A record together with the address it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded<T> {
    pub address: Pubkey,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Decoded<T> {
    pub fn new(address: Pubkey, record: T) -> Self {
        Self { address, record }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No data, or a tag that is not one of the ledger's record kinds.
    UnknownKind,
    Truncated(SchemaError),
    Malformed(SchemaError),
}

/// An account left out of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAccount {
    pub address: Pubkey,
    pub kind: Option<RecordKind>,
    pub reason: SkipReason,
}

/// Typed view of one snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanReport {
    pub namespaces: Vec<Decoded<NamespaceStats>>,
    pub work_items: Vec<Decoded<WorkItem>>,
    pub actors: Vec<Decoded<ActorProfile>>,
    pub submissions: Vec<Decoded<Submission>>,
    pub skipped: Vec<SkippedAccount>,
}

impl ScanReport {
    /// Number of accounts decoded into a record.
    pub fn decoded_count(&self) -> usize {
        self.namespaces.len() + self.work_items.len() + self.actors.len() + self.submissions.len()
    }

    /// Skipped accounts whose tag matched a record kind but whose data was
    /// unusable.
    pub fn rejected(&self) -> impl Iterator<Item = &SkippedAccount> {
        self.skipped
            .iter()
            .filter(|s| !matches!(s.reason, SkipReason::UnknownKind))
    }

    pub fn submissions_for(&self, work_item_id: u64) -> Vec<&Decoded<Submission>> {
        filters::submissions_for(&self.submissions, work_item_id)
    }

    pub fn work_items_by_requester(&self, requester: &Pubkey) -> Vec<&Decoded<WorkItem>> {
        filters::work_items_by_requester(&self.work_items, requester)
    }

    pub fn open_work_items(&self) -> Vec<&Decoded<WorkItem>> {
        filters::open_work_items(&self.work_items)
    }

    pub fn actor_by_owner(&self, owner: &Pubkey) -> Option<&Decoded<ActorProfile>> {
        filters::actor_by_owner(&self.actors, owner)
    }

    pub fn active_actors(&self) -> Vec<&Decoded<ActorProfile>> {
        filters::active_actors(&self.actors)
    }
}
