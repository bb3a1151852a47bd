//! Work items in their two deployment layouts.
//!
//! Both layouts share the tag and the [`WorkItemHeader`] prefix. What
//! follows the header depends on the deployment, so decoding always takes a
//! [`WorkItemLayout`].

use super::errors::SchemaError;
use super::record::Record;
use super::status::{WorkItemLayout, WorkItemStatus};
use super::tags::RecordKind;
use serde::{Deserialize, Serialize};
use shared_types::{Lamports, Pubkey, UnixTimestamp};
use tl_01_wire_codec::{ByteReader, ByteWriter, DecodeError, EncodeError};

/// Fields common to both layouts, in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemHeader {
    pub id: u64,
    pub requester: Pubkey,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub category: String,
    pub reward: Lamports,
    pub created_at: UnixTimestamp,
    pub deadline: UnixTimestamp,
    pub status: WorkItemStatus,
}

impl WorkItemHeader {
    fn read(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: reader.read_u64()?,
            requester: reader.read_pubkey()?,
            title: reader.read_string()?,
            description: reader.read_string()?,
            requirements: reader.read_string()?,
            category: reader.read_string()?,
            reward: reader.read_u64()?,
            created_at: reader.read_i64()?,
            deadline: reader.read_i64()?,
            status: WorkItemStatus::read(reader)?,
        })
    }

    fn write(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer
            .write_u64(self.id)
            .write_pubkey(&self.requester)
            .write_str(&self.title)?
            .write_str(&self.description)?
            .write_str(&self.requirements)?
            .write_str(&self.category)?
            .write_u64(self.reward)
            .write_i64(self.created_at)
            .write_i64(self.deadline)
            .write_u8(self.status.as_byte());
        Ok(())
    }
}

/// Claim, submit, review.
///
/// Optional fields are filled as the item moves through its lifecycle and
/// are never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentWorkItem {
    #[serde(flatten)]
    pub header: WorkItemHeader,
    pub assigned_actor: Option<Pubkey>,
    pub claimed_at: Option<UnixTimestamp>,
    pub submitted_at: Option<UnixTimestamp>,
    pub completed_at: Option<UnixTimestamp>,
    pub submission_url: Option<String>,
    pub submission_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub rating: Option<u8>,
    pub bump: u8,
    pub escrow_bump: u8,
}

impl Record for AssignmentWorkItem {
    const KIND: RecordKind = RecordKind::WorkItem;

    fn read_fields(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header: WorkItemHeader::read(reader)?,
            assigned_actor: reader.read_option(ByteReader::read_pubkey)?,
            claimed_at: reader.read_option(ByteReader::read_i64)?,
            submitted_at: reader.read_option(ByteReader::read_i64)?,
            completed_at: reader.read_option(ByteReader::read_i64)?,
            submission_url: reader.read_option(ByteReader::read_string)?,
            submission_notes: reader.read_option(ByteReader::read_string)?,
            rejection_reason: reader.read_option(ByteReader::read_string)?,
            rating: reader.read_option(ByteReader::read_u8)?,
            bump: reader.read_u8()?,
            escrow_bump: reader.read_u8()?,
        })
    }

    fn write_fields(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        self.header.write(writer)?;
        writer
            .write_option(self.assigned_actor.as_ref(), |w, k| {
                w.write_pubkey(k);
                Ok(())
            })?
            .write_option(self.claimed_at.as_ref(), write_i64)?
            .write_option(self.submitted_at.as_ref(), write_i64)?
            .write_option(self.completed_at.as_ref(), write_i64)?
            .write_option(self.submission_url.as_deref(), write_str)?
            .write_option(self.submission_notes.as_deref(), write_str)?
            .write_option(self.rejection_reason.as_deref(), write_str)?
            .write_option(self.rating.as_ref(), |w, r| {
                w.write_u8(*r);
                Ok(())
            })?
            .write_u8(self.bump)
            .write_u8(self.escrow_bump);
        Ok(())
    }
}

/// Open call for submissions; the requester picks a winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionWorkItem {
    #[serde(flatten)]
    pub header: WorkItemHeader,
    pub submission_count: u64,
    pub winning_submission: Option<Pubkey>,
    pub completed_at: Option<UnixTimestamp>,
}

impl Record for CompetitionWorkItem {
    const KIND: RecordKind = RecordKind::WorkItem;

    fn read_fields(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            header: WorkItemHeader::read(reader)?,
            submission_count: reader.read_u64()?,
            winning_submission: reader.read_option(ByteReader::read_pubkey)?,
            completed_at: reader.read_option(ByteReader::read_i64)?,
        })
    }

    fn write_fields(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        self.header.write(writer)?;
        writer
            .write_u64(self.submission_count)
            .write_option(self.winning_submission.as_ref(), |w, k| {
                w.write_pubkey(k);
                Ok(())
            })?
            .write_option(self.completed_at.as_ref(), write_i64)?;
        Ok(())
    }
}

fn write_i64(writer: &mut ByteWriter, value: &i64) -> Result<(), EncodeError> {
    writer.write_i64(*value);
    Ok(())
}

fn write_str(writer: &mut ByteWriter, value: &str) -> Result<(), EncodeError> {
    writer.write_str(value).map(|_| ())
}

/// A work item decoded under the deployment's layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum WorkItem {
    Assignment(AssignmentWorkItem),
    Competition(CompetitionWorkItem),
}

impl WorkItem {
    pub fn decode(data: &[u8], layout: WorkItemLayout) -> Result<Self, SchemaError> {
        match layout {
            WorkItemLayout::Assignment => AssignmentWorkItem::decode(data).map(Self::Assignment),
            WorkItemLayout::Competition => CompetitionWorkItem::decode(data).map(Self::Competition),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            Self::Assignment(item) => item.encode(),
            Self::Competition(item) => item.encode(),
        }
    }

    pub fn layout(&self) -> WorkItemLayout {
        match self {
            Self::Assignment(_) => WorkItemLayout::Assignment,
            Self::Competition(_) => WorkItemLayout::Competition,
        }
    }

    pub fn header(&self) -> &WorkItemHeader {
        match self {
            Self::Assignment(item) => &item.header,
            Self::Competition(item) => &item.header,
        }
    }

    pub fn id(&self) -> u64 {
        self.header().id
    }

    pub fn requester(&self) -> &Pubkey {
        &self.header().requester
    }

    pub fn status(&self) -> WorkItemStatus {
        self.header().status
    }

    pub fn completed_at(&self) -> Option<UnixTimestamp> {
        match self {
            Self::Assignment(item) => item.completed_at,
            Self::Competition(item) => item.completed_at,
        }
    }

    pub fn as_assignment(&self) -> Option<&AssignmentWorkItem> {
        match self {
            Self::Assignment(item) => Some(item),
            Self::Competition(_) => None,
        }
    }

    pub fn as_competition(&self) -> Option<&CompetitionWorkItem> {
        match self {
            Self::Competition(item) => Some(item),
            Self::Assignment(_) => None,
        }
    }
}
