//! Seed literals and the standard seed compositions.

use shared_types::Pubkey;
use tl_01_wire_codec::ByteWriter;

/// Namespace (global platform) record.
pub const NAMESPACE: &[u8] = b"platform";
/// Actor profile, followed by the owner key.
pub const ACTOR: &[u8] = b"agent";
/// Work item, followed by the ordinal.
pub const WORK_ITEM: &[u8] = b"task";
/// Escrow holding a work item's reward, followed by the ordinal.
pub const ESCROW: &[u8] = b"escrow";
/// Submission, followed by the work item address and the actor key.
pub const SUBMISSION: &[u8] = b"submission";

/// One of the seed layouts the ledger program uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedComposition {
    Namespace,
    Actor { owner: Pubkey },
    WorkItem { ordinal: u64 },
    Escrow { ordinal: u64 },
    Submission { work_item: Pubkey, actor: Pubkey },
}

impl SeedComposition {
    /// The seed byte strings, in order, without the bump.
    pub fn seed_bytes(&self) -> Vec<Vec<u8>> {
        match self {
            Self::Namespace => vec![NAMESPACE.to_vec()],
            Self::Actor { owner } => vec![ACTOR.to_vec(), owner.as_bytes().to_vec()],
            Self::WorkItem { ordinal } => vec![WORK_ITEM.to_vec(), ordinal_seed(*ordinal)],
            Self::Escrow { ordinal } => vec![ESCROW.to_vec(), ordinal_seed(*ordinal)],
            Self::Submission { work_item, actor } => vec![
                SUBMISSION.to_vec(),
                work_item.as_bytes().to_vec(),
                actor.as_bytes().to_vec(),
            ],
        }
    }
}

/// Ordinals are packed as 8-byte little-endian, the same as a `u64` field.
fn ordinal_seed(ordinal: u64) -> Vec<u8> {
    let mut writer = ByteWriter::with_capacity(8);
    writer.write_u64(ordinal);
    writer.into_bytes()
}
