//! Status bytes and the work item state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tl_01_wire_codec::{ByteReader, DecodeError};

/// Which work item layout, and which lifecycle, a deployment runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkItemLayout {
    /// One actor claims the item, submits, and is approved or rejected.
    #[default]
    Assignment,
    /// Many actors apply; the requester selects a winning submission.
    Competition,
}

impl WorkItemLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Competition => "competition",
        }
    }
}

impl fmt::Display for WorkItemLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkItemLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assignment" => Ok(Self::Assignment),
            "competition" => Ok(Self::Competition),
            other => Err(format!(
                "unknown work item layout '{other}', expected 'assignment' or 'competition'"
            )),
        }
    }
}

/// Lifecycle status of a work item, stored as one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkItemStatus {
    Open = 0,
    InProgress = 1,
    PendingReview = 2,
    Completed = 3,
    Rejected = 4,
    Cancelled = 5,
    Disputed = 6,
}

impl WorkItemStatus {
    pub fn from_byte(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Open,
            1 => Self::InProgress,
            2 => Self::PendingReview,
            3 => Self::Completed,
            4 => Self::Rejected,
            5 => Self::Cancelled,
            6 => Self::Disputed,
            _ => return None,
        })
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        let offset = reader.position();
        let value = reader.read_u8()?;
        Self::from_byte(value).ok_or(DecodeError::InvalidEnumTag {
            kind: "WorkItemStatus",
            offset,
            value,
        })
    }

    /// Completed and Cancelled admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether the remote program moves a work item from `self` to `next`
    /// under `layout`.
    pub fn can_transition_to(self, next: Self, layout: WorkItemLayout) -> bool {
        use WorkItemStatus::*;
        match layout {
            WorkItemLayout::Assignment => matches!(
                (self, next),
                (Open, InProgress)
                    | (InProgress, PendingReview)
                    | (PendingReview, Completed)
                    | (PendingReview, Rejected)
                    | (PendingReview, Disputed)
                    | (Open, Cancelled)
                    | (Rejected, Cancelled)
                    | (Rejected, Open)
            ),
            WorkItemLayout::Competition => {
                matches!((self, next), (Open, Completed) | (Open, Cancelled))
            }
        }
    }
}

impl fmt::Display for WorkItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::PendingReview => "pending_review",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
            Self::Disputed => "disputed",
        };
        f.write_str(name)
    }
}

/// Status of a competition submission, stored as one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending = 0,
    Selected = 1,
    NotSelected = 2,
}

impl SubmissionStatus {
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Pending),
            1 => Some(Self::Selected),
            2 => Some(Self::NotSelected),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn read(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        let offset = reader.position();
        let value = reader.read_u8()?;
        Self::from_byte(value).ok_or(DecodeError::InvalidEnumTag {
            kind: "SubmissionStatus",
            offset,
            value,
        })
    }
}
