//! The global namespace record: fee rate and counters.

use super::record::Record;
use super::tags::RecordKind;
use serde::{Deserialize, Serialize};
use shared_types::{Lamports, Pubkey};
use tl_01_wire_codec::{ByteReader, ByteWriter, DecodeError, EncodeError};

/// Basis points in one whole.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Stored at the namespace address.
///
/// `work_item_count` only grows and is the ordinal the next created work
/// item receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceStats {
    pub authority: Pubkey,
    pub fee_bps: u16,
    pub work_item_count: u64,
    pub completed_count: u64,
    pub volume: Lamports,
    pub bump: u8,
}

/// How a reward is divided between the platform and the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    pub platform_fee: Lamports,
    pub actor_payout: Lamports,
}

impl NamespaceStats {
    /// Ordinal the next created work item will be stored under.
    pub fn next_ordinal(&self) -> u64 {
        self.work_item_count
    }

    /// `platform_fee = reward * fee_bps / 10000`, the rest to the actor.
    ///
    /// `None` when the fee rate exceeds 100%.
    pub fn fee_split(&self, reward: Lamports) -> Option<FeeSplit> {
        let fee = u128::from(reward) * u128::from(self.fee_bps) / u128::from(BPS_DENOMINATOR);
        let platform_fee = Lamports::try_from(fee).ok()?;
        let actor_payout = reward.checked_sub(platform_fee)?;
        Some(FeeSplit {
            platform_fee,
            actor_payout,
        })
    }
}

impl Record for NamespaceStats {
    const KIND: RecordKind = RecordKind::NamespaceStats;

    fn read_fields(reader: &mut ByteReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            authority: reader.read_pubkey()?,
            fee_bps: reader.read_u16()?,
            work_item_count: reader.read_u64()?,
            completed_count: reader.read_u64()?,
            volume: reader.read_u64()?,
            bump: reader.read_u8()?,
        })
    }

    fn write_fields(&self, writer: &mut ByteWriter) -> Result<(), EncodeError> {
        writer
            .write_pubkey(&self.authority)
            .write_u16(self.fee_bps)
            .write_u64(self.work_item_count)
            .write_u64(self.completed_count)
            .write_u64(self.volume)
            .write_u8(self.bump);
        Ok(())
    }
}
