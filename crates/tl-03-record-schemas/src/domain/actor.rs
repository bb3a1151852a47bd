//! Actor profiles, keyed by owner.

use super::record::Record;
use super::tags::RecordKind;
use serde::{Deserialize, Serialize};
use shared_types::{Lamports, Pubkey, UnixTimestamp};
use tl_01_wire_codec::{ByteReader, ByteWriter, DecodeError, EncodeError};

/// Stored at the actor address derived from `owner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub owner: Pubkey,
    pub name: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub hourly_rate: Lamports,
    pub completed: u64,
    pub failed: u64,
    pub earned: Lamports,
    pub rating_sum: u64,
    pub rating_count: u64,
    pub registered_at: UnixTimestamp,
    pub active: bool,
    pub bump: u8,
}

impl ActorProfile {
    /// Mean rating, or `None` before the first rating.
    pub fn average_rating(&self) -> Option<f64> {
        (self.rating_count > 0).then(|| self.rating_sum as f64 / self.rating_count as f64)
    }

    /// Completed share of finished work as a percentage, or `None` before any
    /// work has finished.
    pub fn success_rate(&self) -> Option<f64> {
        let finished = self.completed.saturating_add(self.failed);
        (finished > 0).then(|| self.completed as f64 * 100.0 / finished as f64)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}

impl Record for ActorProfile {
    const KIND: RecordKind = RecordKind::ActorProfile;

    fn read_fields(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            owner: reader.read_pubkey()?,
            name: reader.read_string()?,
            bio: reader.read_string()?,
            skills: reader.read_seq(ByteReader::read_string)?,
            hourly_rate: reader.read_u64()?,
            completed: reader.read_u64()?,
            failed: reader.read_u64()?,
            earned: reader.read_u64()?,
            rating_sum: reader.read_u64()?,
            rating_count: reader.read_u64()?,
            registered_at: reader.read_i64()?,
            active: reader.read_bool()?,
            bump: reader.read_u8()?,
        })
    }

    fn write_fields(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer
            .write_pubkey(&self.owner)
            .write_str(&self.name)?
            .write_str(&self.bio)?
            .write_seq(&self.skills, |w, s| w.write_str(s).map(|_| ()))?
            .write_u64(self.hourly_rate)
            .write_u64(self.completed)
            .write_u64(self.failed)
            .write_u64(self.earned)
            .write_u64(self.rating_sum)
            .write_u64(self.rating_count)
            .write_i64(self.registered_at)
            .write_bool(self.active)
            .write_u8(self.bump);
        Ok(())
    }
}
