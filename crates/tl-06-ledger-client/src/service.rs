//! # Ledger Client Service
//!
//! Reads go through the [`AccountReader`] port and are interpreted with the
//! schema crate; writes are built by the instruction builder and handed to
//! the [`InstructionSubmitter`] port.

use crate::config::DeploymentConfig;
use crate::errors::{ClientError, StoreError};
use crate::ports::{AccountReader, InstructionSubmitter, Signature};
use shared_types::{Lamports, Pubkey};
use tl_02_address_derivation::AddressDeriver;
use tl_03_record_schemas::{ActorProfile, FeeSplit, NamespaceStats, Submission, WorkItem};
use tl_04_instruction_builder::{
    ApproveWorkArgs, CreateWorkItemArgs, InitializeArgs, InstructionBuilder, InstructionRequest,
    Operation, RegisterActorArgs, RejectWorkArgs, SelectWinnerArgs, SubmitApplicationArgs,
    SubmitWorkArgs, UpdateActorArgs,
};
use tl_05_account_scan::{
    filters, probe, probe_work_item, AccountScanner, Decoded, ScanReport,
};

/// Outcome of a successful create-work-item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedWorkItem {
    pub ordinal: u64,
    pub address: Pubkey,
    pub escrow: Pubkey,
    pub signature: Signature,
    /// Submissions made, including the successful one.
    pub attempts: u32,
}

/// Client for one deployment of the ledger program.
pub struct LedgerClient<R: AccountReader, S: InstructionSubmitter> {
    reader: R,
    submitter: S,
    config: DeploymentConfig,
    builder: InstructionBuilder,
    scanner: AccountScanner,
}

impl<R: AccountReader, S: InstructionSubmitter> LedgerClient<R, S> {
    pub fn new(reader: R, submitter: S, config: DeploymentConfig) -> Self {
        let builder = InstructionBuilder::new(config.program_id, config.layout);
        let scanner = AccountScanner::new(config.layout);
        Self {
            reader,
            submitter,
            config,
            builder,
            scanner,
        }
    }

    /// Replace the default lenient scanner.
    pub fn with_scanner(mut self, scanner: AccountScanner) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn config(&self) -> &DeploymentConfig {
        &self.config
    }

    pub fn builder(&self) -> &InstructionBuilder {
        &self.builder
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    fn deriver(&self) -> &AddressDeriver {
        self.builder.deriver()
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub async fn namespace_stats(&self) -> Result<Option<NamespaceStats>, ClientError> {
        let address = self.deriver().namespace()?.address;
        let data = self.reader.get_account(&address).await?;
        Ok(probe::<NamespaceStats>(data.as_deref())?)
    }

    pub async fn actor(&self, owner: &Pubkey) -> Result<Option<ActorProfile>, ClientError> {
        let address = self.deriver().actor(owner)?.address;
        let data = self.reader.get_account(&address).await?;
        Ok(probe::<ActorProfile>(data.as_deref())?)
    }

    pub async fn work_item(&self, ordinal: u64) -> Result<Option<WorkItem>, ClientError> {
        let address = self.deriver().work_item(ordinal)?.address;
        let data = self.reader.get_account(&address).await?;
        Ok(probe_work_item(data.as_deref(), self.config.layout)?)
    }

    pub async fn submission(
        &self,
        ordinal: u64,
        actor: &Pubkey,
    ) -> Result<Option<Submission>, ClientError> {
        let work_item = self.deriver().work_item(ordinal)?.address;
        let address = self.deriver().submission(&work_item, actor)?.address;
        let data = self.reader.get_account(&address).await?;
        Ok(probe::<Submission>(data.as_deref())?)
    }

    /// Decode every account the program owns.
    pub async fn scan(&self) -> Result<ScanReport, ClientError> {
        let accounts = self
            .reader
            .get_program_accounts(&self.config.program_id)
            .await?;
        Ok(self.scanner.scan(&accounts)?)
    }

    /// All work items, newest first.
    pub async fn list_work_items(&self) -> Result<Vec<Decoded<WorkItem>>, ClientError> {
        let mut items = self.scan().await?.work_items;
        filters::sort_work_items_newest_first(&mut items);
        Ok(items)
    }

    /// All actors, most completed work first.
    pub async fn list_actors(&self) -> Result<Vec<Decoded<ActorProfile>>, ClientError> {
        let mut actors = self.scan().await?.actors;
        filters::sort_actors_by_completed(&mut actors);
        Ok(actors)
    }

    /// Submissions for work item `work_item_id`, newest first.
    pub async fn list_submissions(
        &self,
        work_item_id: u64,
    ) -> Result<Vec<Decoded<Submission>>, ClientError> {
        let report = self.scan().await?;
        let mut submissions: Vec<_> = filters::submissions_for(&report.submissions, work_item_id)
            .into_iter()
            .cloned()
            .collect();
        filters::sort_submissions_newest_first(&mut submissions);
        Ok(submissions)
    }

    /// Split of `reward` under the current fee rate.
    pub async fn fee_preview(&self, reward: Lamports) -> Result<FeeSplit, ClientError> {
        let stats = self
            .namespace_stats()
            .await?
            .ok_or(ClientError::NamespaceNotFound)?;
        stats.fee_split(reward).ok_or(ClientError::FeeOverflow {
            reward,
            fee_bps: stats.fee_bps,
        })
    }

    // =========================================================================
    // WRITES
    // =========================================================================

    pub async fn initialize(&self, authority: Pubkey, fee_bps: u16) -> Result<Signature, ClientError> {
        self.send(InstructionRequest::InitializeNamespace {
            authority,
            args: InitializeArgs { fee_bps },
        })
        .await
    }

    pub async fn register_actor(
        &self,
        owner: Pubkey,
        args: RegisterActorArgs,
    ) -> Result<Signature, ClientError> {
        self.send(InstructionRequest::RegisterActor { owner, args })
            .await
    }

    pub async fn update_actor(
        &self,
        owner: Pubkey,
        args: UpdateActorArgs,
    ) -> Result<Signature, ClientError> {
        self.send(InstructionRequest::UpdateActor { owner, args })
            .await
    }

    /// Create a work item at the namespace's next ordinal.
    ///
    /// The counter is re-read before every attempt so the derived work item
    /// and escrow addresses always match the snapshot the instruction was
    /// built from.
    pub async fn create_work_item(
        &self,
        requester: Pubkey,
        args: CreateWorkItemArgs,
    ) -> Result<CreatedWorkItem, ClientError> {
        let max_attempts = self.config.max_create_attempts.max(1);

        for attempt in 1..=max_attempts {
            let stats = self
                .namespace_stats()
                .await?
                .ok_or(ClientError::NamespaceNotFound)?;
            let ordinal = stats.next_ordinal();
            let instruction = self.builder.build(&InstructionRequest::CreateWorkItem {
                requester,
                ordinal,
                args: args.clone(),
            })?;

            match self.submitter.submit(instruction).await {
                Ok(signature) => {
                    tracing::info!(ordinal, attempt, "[tl-06] Created work item");
                    return Ok(CreatedWorkItem {
                        ordinal,
                        address: self.deriver().work_item(ordinal)?.address,
                        escrow: self.deriver().escrow(ordinal)?.address,
                        signature,
                        attempts: attempt,
                    });
                }
                Err(StoreError::StaleCounter) => {
                    tracing::warn!(
                        ordinal,
                        attempt,
                        max_attempts,
                        "[tl-06] Namespace counter moved; retrying create"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ClientError::StaleCounterExhausted {
            attempts: max_attempts,
        })
    }

    pub async fn claim_work_item(
        &self,
        ordinal: u64,
        actor_owner: Pubkey,
    ) -> Result<Signature, ClientError> {
        self.require_status(ordinal, Operation::ClaimWorkItem).await?;
        self.send(InstructionRequest::ClaimWorkItem {
            ordinal,
            actor_owner,
        })
        .await
    }

    pub async fn submit_work(
        &self,
        ordinal: u64,
        actor_owner: Pubkey,
        args: SubmitWorkArgs,
    ) -> Result<Signature, ClientError> {
        self.require_status(ordinal, Operation::SubmitWork).await?;
        self.send(InstructionRequest::SubmitWork {
            ordinal,
            actor_owner,
            args,
        })
        .await
    }

    /// Approve the assigned actor's work. The actor and treasury are read
    /// from the current snapshots.
    pub async fn approve_work(
        &self,
        ordinal: u64,
        approver: Pubkey,
        rating: u8,
    ) -> Result<Signature, ClientError> {
        let item = self.require_status(ordinal, Operation::ApproveWork).await?;
        let actor_owner = item
            .as_assignment()
            .and_then(|a| a.assigned_actor)
            .ok_or(ClientError::NoAssignedActor { ordinal })?;
        let treasury = self.treasury().await?;
        self.send(InstructionRequest::ApproveWork {
            ordinal,
            actor_owner,
            approver,
            treasury,
            args: ApproveWorkArgs { rating },
        })
        .await
    }

    pub async fn reject_work(
        &self,
        ordinal: u64,
        rejector: Pubkey,
        reason: String,
    ) -> Result<Signature, ClientError> {
        self.require_status(ordinal, Operation::RejectWork).await?;
        self.send(InstructionRequest::RejectWork {
            ordinal,
            rejector,
            args: RejectWorkArgs { reason },
        })
        .await
    }

    pub async fn cancel_work_item(
        &self,
        ordinal: u64,
        requester: Pubkey,
    ) -> Result<Signature, ClientError> {
        self.require_status(ordinal, Operation::CancelWorkItem).await?;
        self.send(InstructionRequest::CancelWorkItem { ordinal, requester })
            .await
    }

    pub async fn submit_application(
        &self,
        ordinal: u64,
        actor_owner: Pubkey,
        args: SubmitApplicationArgs,
    ) -> Result<Signature, ClientError> {
        self.require_status(ordinal, Operation::SubmitApplication).await?;
        self.send(InstructionRequest::SubmitApplication {
            ordinal,
            actor_owner,
            args,
        })
        .await
    }

    pub async fn select_winner(
        &self,
        ordinal: u64,
        winner: Pubkey,
        requester: Pubkey,
        rating: u8,
    ) -> Result<Signature, ClientError> {
        self.require_status(ordinal, Operation::SelectWinner).await?;
        let treasury = self.treasury().await?;
        self.send(InstructionRequest::SelectWinner {
            ordinal,
            winner,
            requester,
            treasury,
            args: SelectWinnerArgs { rating },
        })
        .await
    }

    async fn send(&self, request: InstructionRequest) -> Result<Signature, ClientError> {
        let operation = request.operation();
        let instruction = self.builder.build(&request)?;
        let signature = self.submitter.submit(instruction).await?;
        tracing::info!(operation = %operation, signature = %signature, "[tl-06] Submitted instruction");
        Ok(signature)
    }

    /// Load work item `ordinal` and check the snapshot admits `operation`.
    async fn require_status(
        &self,
        ordinal: u64,
        operation: Operation,
    ) -> Result<WorkItem, ClientError> {
        if !operation.available_in(self.config.layout) {
            return Err(tl_04_instruction_builder::BuildError::UnknownOperation {
                operation,
                layout: self.config.layout,
            }
            .into());
        }
        let item = self
            .work_item(ordinal)
            .await?
            .ok_or(ClientError::WorkItemNotFound { ordinal })?;
        self.builder.check_status(operation, &item)?;
        Ok(item)
    }

    async fn treasury(&self) -> Result<Pubkey, ClientError> {
        if let Some(treasury) = self.config.treasury {
            return Ok(treasury);
        }
        let stats = self
            .namespace_stats()
            .await?
            .ok_or(ClientError::NamespaceNotFound)?;
        Ok(stats.authority)
    }
}
