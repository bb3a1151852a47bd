//! Instruction discriminators.
//!
//! Each tag is the first 8 bytes of `sha256("global:<instruction_name>")`.
//! The table is pinned here and recomputed in the tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tl_03_record_schemas::{WorkItemLayout, TAG_LEN};

use super::errors::BuildError;

/// Operations the ledger program exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    InitializeNamespace,
    RegisterActor,
    UpdateActor,
    CreateWorkItem,
    ClaimWorkItem,
    SubmitWork,
    ApproveWork,
    RejectWork,
    CancelWorkItem,
    SubmitApplication,
    SelectWinner,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::InitializeNamespace,
        Operation::RegisterActor,
        Operation::UpdateActor,
        Operation::CreateWorkItem,
        Operation::ClaimWorkItem,
        Operation::SubmitWork,
        Operation::ApproveWork,
        Operation::RejectWork,
        Operation::CancelWorkItem,
        Operation::SubmitApplication,
        Operation::SelectWinner,
    ];

    pub const fn tag(self) -> [u8; TAG_LEN] {
        match self {
            Self::InitializeNamespace => [175, 175, 109, 31, 13, 152, 155, 237],
            Self::RegisterActor => [135, 157, 66, 195, 2, 113, 175, 30],
            Self::UpdateActor => [85, 2, 178, 9, 119, 139, 102, 164],
            Self::CreateWorkItem => [194, 80, 6, 180, 232, 127, 48, 171],
            Self::ClaimWorkItem => [49, 222, 219, 238, 155, 68, 221, 136],
            Self::SubmitWork => [158, 80, 101, 51, 114, 130, 101, 253],
            Self::ApproveWork => [181, 118, 45, 143, 204, 88, 237, 109],
            Self::RejectWork => [129, 238, 59, 133, 63, 148, 130, 54],
            Self::CancelWorkItem => [69, 228, 134, 187, 134, 105, 238, 48],
            Self::SubmitApplication => [27, 71, 89, 170, 144, 203, 50, 8],
            Self::SelectWinner => [119, 66, 44, 236, 79, 158, 82, 51],
        }
    }

    /// Instruction name the remote program declares; the tag preimage is
    /// `global:<instruction_name>`.
    pub const fn instruction_name(self) -> &'static str {
        match self {
            Self::InitializeNamespace => "initialize",
            Self::RegisterActor => "register_agent",
            Self::UpdateActor => "update_agent",
            Self::CreateWorkItem => "create_task",
            Self::ClaimWorkItem => "claim_task",
            Self::SubmitWork => "submit_work",
            Self::ApproveWork => "approve_work",
            Self::RejectWork => "reject_work",
            Self::CancelWorkItem => "cancel_task",
            Self::SubmitApplication => "submit_application",
            Self::SelectWinner => "select_winner",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InitializeNamespace => "initialize-namespace",
            Self::RegisterActor => "register-actor",
            Self::UpdateActor => "update-actor",
            Self::CreateWorkItem => "create-work-item",
            Self::ClaimWorkItem => "claim-work-item",
            Self::SubmitWork => "submit-work",
            Self::ApproveWork => "approve-work",
            Self::RejectWork => "reject-work",
            Self::CancelWorkItem => "cancel-work-item",
            Self::SubmitApplication => "submit-application",
            Self::SelectWinner => "select-winner",
        }
    }

    /// Operation whose tag begins `data`.
    pub fn from_data(data: &[u8]) -> Option<Self> {
        let prefix = data.get(..TAG_LEN)?;
        Self::ALL.into_iter().find(|op| op.tag() == prefix)
    }

    pub fn available_in(self, layout: WorkItemLayout) -> bool {
        match self {
            Self::InitializeNamespace
            | Self::RegisterActor
            | Self::CreateWorkItem
            | Self::CancelWorkItem => true,
            Self::UpdateActor
            | Self::ClaimWorkItem
            | Self::SubmitWork
            | Self::ApproveWork
            | Self::RejectWork => layout == WorkItemLayout::Assignment,
            Self::SubmitApplication | Self::SelectWinner => layout == WorkItemLayout::Competition,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = BuildError;

    /// Accepts the kebab-case name or the remote instruction name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s || op.instruction_name() == s)
            .ok_or_else(|| BuildError::UnknownOperationName(s.to_string()))
    }
}
