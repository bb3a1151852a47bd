//! One request per operation, carrying its arguments and the keys the
//! account list needs.

use super::args::*;
use super::errors::BuildError;
use super::operation::Operation;
use shared_types::Pubkey;

/// Work items are addressed by ordinal; actors by owner key. Treasury and
/// actor wallets are plain accounts supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionRequest {
    InitializeNamespace {
        authority: Pubkey,
        args: InitializeArgs,
    },
    RegisterActor {
        owner: Pubkey,
        args: RegisterActorArgs,
    },
    UpdateActor {
        owner: Pubkey,
        args: UpdateActorArgs,
    },
    /// `ordinal` must be the `work_item_count` of the namespace snapshot the
    /// caller just read.
    CreateWorkItem {
        requester: Pubkey,
        ordinal: u64,
        args: CreateWorkItemArgs,
    },
    ClaimWorkItem {
        ordinal: u64,
        actor_owner: Pubkey,
    },
    SubmitWork {
        ordinal: u64,
        actor_owner: Pubkey,
        args: SubmitWorkArgs,
    },
    ApproveWork {
        ordinal: u64,
        actor_owner: Pubkey,
        approver: Pubkey,
        treasury: Pubkey,
        args: ApproveWorkArgs,
    },
    RejectWork {
        ordinal: u64,
        rejector: Pubkey,
        args: RejectWorkArgs,
    },
    CancelWorkItem {
        ordinal: u64,
        requester: Pubkey,
    },
    SubmitApplication {
        ordinal: u64,
        actor_owner: Pubkey,
        args: SubmitApplicationArgs,
    },
    SelectWinner {
        ordinal: u64,
        winner: Pubkey,
        requester: Pubkey,
        treasury: Pubkey,
        args: SelectWinnerArgs,
    },
}

impl InstructionRequest {
    pub fn operation(&self) -> Operation {
        match self {
            Self::InitializeNamespace { .. } => Operation::InitializeNamespace,
            Self::RegisterActor { .. } => Operation::RegisterActor,
            Self::UpdateActor { .. } => Operation::UpdateActor,
            Self::CreateWorkItem { .. } => Operation::CreateWorkItem,
            Self::ClaimWorkItem { .. } => Operation::ClaimWorkItem,
            Self::SubmitWork { .. } => Operation::SubmitWork,
            Self::ApproveWork { .. } => Operation::ApproveWork,
            Self::RejectWork { .. } => Operation::RejectWork,
            Self::CancelWorkItem { .. } => Operation::CancelWorkItem,
            Self::SubmitApplication { .. } => Operation::SubmitApplication,
            Self::SelectWinner { .. } => Operation::SelectWinner,
        }
    }

    /// Work item the request targets, if any.
    pub fn ordinal(&self) -> Option<u64> {
        match self {
            Self::CreateWorkItem { ordinal, .. }
            | Self::ClaimWorkItem { ordinal, .. }
            | Self::SubmitWork { ordinal, .. }
            | Self::ApproveWork { ordinal, .. }
            | Self::RejectWork { ordinal, .. }
            | Self::CancelWorkItem { ordinal, .. }
            | Self::SubmitApplication { ordinal, .. }
            | Self::SelectWinner { ordinal, .. } => Some(*ordinal),
            Self::InitializeNamespace { .. }
            | Self::RegisterActor { .. }
            | Self::UpdateActor { .. } => None,
        }
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        match self {
            Self::InitializeNamespace { args, .. } => args.validate(),
            Self::RegisterActor { args, .. } => args.validate(),
            Self::UpdateActor { args, .. } => args.validate(),
            Self::CreateWorkItem { args, .. } => args.validate(),
            Self::SubmitWork { args, .. } | Self::SubmitApplication { args, .. } => args.validate(),
            Self::ApproveWork { args, .. } | Self::SelectWinner { args, .. } => args.validate(),
            Self::RejectWork { args, .. } => args.validate(),
            Self::ClaimWorkItem { .. } | Self::CancelWorkItem { .. } => Ok(()),
        }
    }
}
