//! Competition submissions, one per (work item, actor).

use super::record::Record;
use super::status::SubmissionStatus;
use super::tags::RecordKind;
use serde::{Deserialize, Serialize};
use shared_types::{Pubkey, UnixTimestamp};
use tl_01_wire_codec::{ByteReader, ByteWriter, DecodeError, EncodeError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub work_item_id: u64,
    pub actor: Pubkey,
    pub url: String,
    pub notes: String,
    pub submitted_at: UnixTimestamp,
    pub status: SubmissionStatus,
}

impl Record for Submission {
    const KIND: RecordKind = RecordKind::Submission;

    fn read_fields(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            work_item_id: reader.read_u64()?,
            actor: reader.read_pubkey()?,
            url: reader.read_string()?,
            notes: reader.read_string()?,
            submitted_at: reader.read_i64()?,
            status: SubmissionStatus::read(reader)?,
        })
    }

    fn write_fields(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer
            .write_u64(self.work_item_id)
            .write_pubkey(&self.actor)
            .write_str(&self.url)?
            .write_str(&self.notes)?
            .write_i64(self.submitted_at)
            .write_u8(self.status.as_byte());
        Ok(())
    }
}
