//! Account discriminators.
//!
//! Each tag is the first 8 bytes of `sha256("account:<TypeName>")`. The
//! values are pinned here and recomputed from their preimages in the tests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the leading kind tag on every account.
pub const TAG_LEN: usize = 8;

pub const NAMESPACE_STATS_TAG: [u8; TAG_LEN] = [77, 92, 204, 58, 187, 98, 91, 12];
pub const ACTOR_PROFILE_TAG: [u8; TAG_LEN] = [60, 227, 42, 24, 0, 87, 86, 205];
pub const WORK_ITEM_TAG: [u8; TAG_LEN] = [79, 34, 229, 55, 88, 90, 55, 84];
pub const SUBMISSION_TAG: [u8; TAG_LEN] = [58, 194, 159, 158, 75, 102, 178, 197];

/// The account kinds the ledger program stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    NamespaceStats,
    ActorProfile,
    WorkItem,
    Submission,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::NamespaceStats,
        RecordKind::ActorProfile,
        RecordKind::WorkItem,
        RecordKind::Submission,
    ];

    pub const fn tag(self) -> [u8; TAG_LEN] {
        match self {
            Self::NamespaceStats => NAMESPACE_STATS_TAG,
            Self::ActorProfile => ACTOR_PROFILE_TAG,
            Self::WorkItem => WORK_ITEM_TAG,
            Self::Submission => SUBMISSION_TAG,
        }
    }

    /// Type name the remote program declares; the tag preimage is
    /// `account:<type_name>`.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::NamespaceStats => "Platform",
            Self::ActorProfile => "AgentProfile",
            Self::WorkItem => "Task",
            Self::Submission => "Submission",
        }
    }

    /// Kind whose tag equals the first 8 bytes of `data`.
    pub fn from_data(data: &[u8]) -> Option<Self> {
        let prefix = data.get(..TAG_LEN)?;
        Self::ALL.into_iter().find(|kind| kind.tag() == prefix)
    }

    /// Like [`from_data`](Self::from_data), but a buffer shorter than a tag
    /// is attributed to the kind whose tag it begins. No two tags share a
    /// first byte, so the attribution is unambiguous.
    pub fn identify(data: &[u8]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        if data.len() >= TAG_LEN {
            return Self::from_data(data);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().starts_with(data))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NamespaceStats => "NamespaceStats",
            Self::ActorProfile => "ActorProfile",
            Self::WorkItem => "WorkItem",
            Self::Submission => "Submission",
        };
        f.write_str(name)
    }
}
