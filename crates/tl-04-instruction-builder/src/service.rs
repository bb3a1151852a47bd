//! # Instruction Builder Service
//!
//! Turns an [`InstructionRequest`] into a ready-to-sign [`Instruction`]:
//! layout check, argument limits, account derivation, then encoding.

use crate::domain::{BuildError, InstructionRequest, Operation};
use shared_types::{AccountMeta, Instruction, Pubkey, SYSTEM_PROGRAM_ID};
use tl_01_wire_codec::{ByteWriter, Encode};
use tl_02_address_derivation::AddressDeriver;
use tl_03_record_schemas::{WorkItem, WorkItemLayout, WorkItemStatus};

/// Builds instructions for one deployment of the ledger program.
#[derive(Debug, Clone)]
pub struct InstructionBuilder {
    deriver: AddressDeriver,
    layout: WorkItemLayout,
}

impl InstructionBuilder {
    pub fn new(program_id: Pubkey, layout: WorkItemLayout) -> Self {
        Self {
            deriver: AddressDeriver::new(program_id),
            layout,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        self.deriver.program_id()
    }

    pub fn layout(&self) -> WorkItemLayout {
        self.layout
    }

    pub fn deriver(&self) -> &AddressDeriver {
        &self.deriver
    }

    /// Build the instruction for `request`.
    ///
    /// Fails without encoding anything when the layout does not offer the
    /// operation or an argument breaks a limit.
    pub fn build(&self, request: &InstructionRequest) -> Result<Instruction, BuildError> {
        let operation = request.operation();
        if !operation.available_in(self.layout) {
            return Err(BuildError::UnknownOperation {
                operation,
                layout: self.layout,
            });
        }
        request.validate()?;

        let accounts = self.accounts(request)?;
        let data = encode_data(request)?;
        tracing::debug!(
            operation = %operation,
            accounts = accounts.len(),
            data_len = data.len(),
            "[tl-04] Built instruction"
        );
        Ok(Instruction {
            program_id: *self.program_id(),
            accounts,
            data,
        })
    }

    /// Refuse `operation` when the snapshot `item` shows the remote program
    /// would reject it.
    pub fn check_status(&self, operation: Operation, item: &WorkItem) -> Result<(), BuildError> {
        let status = item.status();
        let allowed = match operation {
            Operation::ClaimWorkItem => {
                status.can_transition_to(WorkItemStatus::InProgress, self.layout)
            }
            Operation::SubmitWork => {
                status.can_transition_to(WorkItemStatus::PendingReview, self.layout)
            }
            Operation::ApproveWork | Operation::SelectWinner => {
                status.can_transition_to(WorkItemStatus::Completed, self.layout)
            }
            Operation::RejectWork => {
                status.can_transition_to(WorkItemStatus::Rejected, self.layout)
            }
            Operation::CancelWorkItem => {
                status.can_transition_to(WorkItemStatus::Cancelled, self.layout)
            }
            Operation::SubmitApplication => status == WorkItemStatus::Open,
            Operation::InitializeNamespace
            | Operation::RegisterActor
            | Operation::UpdateActor
            | Operation::CreateWorkItem => true,
        };
        if allowed {
            Ok(())
        } else {
            Err(BuildError::InvalidStatus {
                id: item.id(),
                status,
                operation,
            })
        }
    }

    fn accounts(&self, request: &InstructionRequest) -> Result<Vec<AccountMeta>, BuildError> {
        use shared_types::AccountMeta as M;
        let d = &self.deriver;

        let accounts = match request {
            InstructionRequest::InitializeNamespace { authority, .. } => vec![
                M::writable(d.namespace()?.address, false),
                M::writable(*authority, true),
                M::readonly(SYSTEM_PROGRAM_ID, false),
            ],
            InstructionRequest::RegisterActor { owner, .. } => vec![
                M::writable(d.actor(owner)?.address, false),
                M::writable(*owner, true),
                M::readonly(SYSTEM_PROGRAM_ID, false),
            ],
            InstructionRequest::UpdateActor { owner, .. } => vec![
                M::writable(d.actor(owner)?.address, false),
                M::readonly(*owner, true),
            ],
            InstructionRequest::CreateWorkItem {
                requester, ordinal, ..
            } => vec![
                M::writable(d.work_item(*ordinal)?.address, false),
                M::writable(d.namespace()?.address, false),
                M::writable(d.escrow(*ordinal)?.address, false),
                M::writable(*requester, true),
                M::readonly(SYSTEM_PROGRAM_ID, false),
            ],
            InstructionRequest::ClaimWorkItem {
                ordinal,
                actor_owner,
            } => vec![
                M::writable(d.work_item(*ordinal)?.address, false),
                M::readonly(d.actor(actor_owner)?.address, false),
                M::readonly(*actor_owner, true),
            ],
            InstructionRequest::SubmitWork {
                ordinal,
                actor_owner,
                ..
            } => vec![
                M::writable(d.work_item(*ordinal)?.address, false),
                M::readonly(*actor_owner, true),
            ],
            InstructionRequest::ApproveWork {
                ordinal,
                actor_owner,
                approver,
                treasury,
                ..
            } => vec![
                M::writable(d.work_item(*ordinal)?.address, false),
                M::writable(d.actor(actor_owner)?.address, false),
                M::writable(*actor_owner, false),
                M::writable(d.escrow(*ordinal)?.address, false),
                M::writable(d.namespace()?.address, false),
                M::writable(*treasury, false),
                M::readonly(*approver, true),
            ],
            InstructionRequest::RejectWork {
                ordinal, rejector, ..
            } => vec![
                M::writable(d.work_item(*ordinal)?.address, false),
                M::readonly(*rejector, true),
            ],
            InstructionRequest::CancelWorkItem { ordinal, requester } => vec![
                M::writable(d.work_item(*ordinal)?.address, false),
                M::writable(d.escrow(*ordinal)?.address, false),
                M::writable(*requester, true),
            ],
            InstructionRequest::SubmitApplication {
                ordinal,
                actor_owner,
                ..
            } => {
                let work_item = d.work_item(*ordinal)?.address;
                vec![
                    M::writable(d.submission(&work_item, actor_owner)?.address, false),
                    M::writable(work_item, false),
                    M::readonly(d.actor(actor_owner)?.address, false),
                    M::writable(*actor_owner, true),
                    M::readonly(SYSTEM_PROGRAM_ID, false),
                ]
            }
            InstructionRequest::SelectWinner {
                ordinal,
                winner,
                requester,
                treasury,
                ..
            } => {
                let work_item = d.work_item(*ordinal)?.address;
                vec![
                    M::writable(work_item, false),
                    M::writable(d.submission(&work_item, winner)?.address, false),
                    M::writable(d.actor(winner)?.address, false),
                    M::writable(*winner, false),
                    M::writable(d.escrow(*ordinal)?.address, false),
                    M::writable(d.namespace()?.address, false),
                    M::writable(*treasury, false),
                    M::writable(*requester, true),
                    M::readonly(SYSTEM_PROGRAM_ID, false),
                ]
            }
        };
        Ok(accounts)
    }
}

/// `tag ++ encoded arguments`.
pub fn encode_data(request: &InstructionRequest) -> Result<Vec<u8>, BuildError> {
    let mut writer = ByteWriter::with_capacity(64);
    writer.write_raw(&request.operation().tag());
    match request {
        InstructionRequest::InitializeNamespace { args, .. } => args.encode(&mut writer)?,
        InstructionRequest::RegisterActor { args, .. } => args.encode(&mut writer)?,
        InstructionRequest::UpdateActor { args, .. } => args.encode(&mut writer)?,
        InstructionRequest::CreateWorkItem { args, .. } => args.encode(&mut writer)?,
        InstructionRequest::SubmitWork { args, .. }
        | InstructionRequest::SubmitApplication { args, .. } => args.encode(&mut writer)?,
        InstructionRequest::ApproveWork { args, .. }
        | InstructionRequest::SelectWinner { args, .. } => args.encode(&mut writer)?,
        InstructionRequest::RejectWork { args, .. } => args.encode(&mut writer)?,
        InstructionRequest::ClaimWorkItem { .. } | InstructionRequest::CancelWorkItem { .. } => {}
    }
    Ok(writer.into_bytes())
}
