//! # Account Scan Service
//!
//! Classifies each account by tag and decodes it with the matching schema.

use crate::domain::{Decoded, ScanError, ScanPolicy, ScanReport, SkipReason, SkippedAccount};
use shared_types::RawAccount;
use tl_03_record_schemas::{
    ActorProfile, NamespaceStats, Record, RecordKind, SchemaError, Submission, WorkItem,
    WorkItemLayout,
};

/// Stateless scanner for one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountScanner {
    layout: WorkItemLayout,
    policy: ScanPolicy,
}

enum Classified {
    Namespace(NamespaceStats),
    WorkItem(WorkItem),
    Actor(ActorProfile),
    Submission(Submission),
}

impl AccountScanner {
    pub fn new(layout: WorkItemLayout) -> Self {
        Self {
            layout,
            policy: ScanPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn layout(&self) -> WorkItemLayout {
        self.layout
    }

    pub fn policy(&self) -> ScanPolicy {
        self.policy
    }

    /// Decode every account in `accounts`.
    ///
    /// Only a truncated record under [`ScanPolicy::Strict`] fails the scan;
    /// every other problem is confined to its own account.
    pub fn scan(&self, accounts: &[RawAccount]) -> Result<ScanReport, ScanError> {
        let mut report = ScanReport::default();

        for account in accounts {
            let address = account.address;
            let Some(kind) = RecordKind::identify(&account.data) else {
                tracing::debug!(address = %address, len = account.data.len(), "[tl-05] Skipping account with unknown tag");
                report.skipped.push(SkippedAccount {
                    address,
                    kind: None,
                    reason: SkipReason::UnknownKind,
                });
                continue;
            };

            match self.decode(kind, &account.data) {
                Ok(Classified::Namespace(r)) => report.namespaces.push(Decoded::new(address, r)),
                Ok(Classified::WorkItem(r)) => report.work_items.push(Decoded::new(address, r)),
                Ok(Classified::Actor(r)) => report.actors.push(Decoded::new(address, r)),
                Ok(Classified::Submission(r)) => report.submissions.push(Decoded::new(address, r)),
                Err(e) if e.is_truncation() => {
                    tracing::error!(
                        address = %address,
                        kind = %kind,
                        layout = %self.layout,
                        error = %e,
                        "[tl-05] Truncated record; deployment layout may not match"
                    );
                    if self.policy == ScanPolicy::Strict {
                        return Err(ScanError::Truncated {
                            address,
                            kind,
                            source: e,
                        });
                    }
                    report.skipped.push(SkippedAccount {
                        address,
                        kind: Some(kind),
                        reason: SkipReason::Truncated(e),
                    });
                }
                Err(e) if e.is_wrong_kind() => {
                    report.skipped.push(SkippedAccount {
                        address,
                        kind: None,
                        reason: SkipReason::UnknownKind,
                    });
                }
                Err(e) => {
                    tracing::warn!(address = %address, kind = %kind, error = %e, "[tl-05] Skipping malformed record");
                    report.skipped.push(SkippedAccount {
                        address,
                        kind: Some(kind),
                        reason: SkipReason::Malformed(e),
                    });
                }
            }
        }

        tracing::debug!(
            accounts = accounts.len(),
            decoded = report.decoded_count(),
            skipped = report.skipped.len(),
            "[tl-05] Scan complete"
        );
        Ok(report)
    }

    fn decode(&self, kind: RecordKind, data: &[u8]) -> Result<Classified, SchemaError> {
        Ok(match kind {
            RecordKind::NamespaceStats => Classified::Namespace(NamespaceStats::decode(data)?),
            RecordKind::WorkItem => Classified::WorkItem(WorkItem::decode(data, self.layout)?),
            RecordKind::ActorProfile => Classified::Actor(ActorProfile::decode(data)?),
            RecordKind::Submission => Classified::Submission(Submission::decode(data)?),
        })
    }
}
