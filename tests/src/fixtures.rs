//! Record fixtures.
//!
//! Every builder returns a fully populated record so encoded sizes are
//! realistic.

use shared_types::{Pubkey, RawAccount};
use tl_02_address_derivation::AddressDeriver;
use tl_03_record_schemas::{
    ActorProfile, AssignmentWorkItem, CompetitionWorkItem, NamespaceStats, Record, Submission,
    SubmissionStatus, WorkItem, WorkItemHeader, WorkItemStatus,
};

pub const CREATED_AT: i64 = 1_700_000_000;

pub fn authority() -> Pubkey {
    Pubkey::new([3; 32])
}

pub fn requester() -> Pubkey {
    Pubkey::new([9; 32])
}

pub fn actor_owner() -> Pubkey {
    Pubkey::new([7; 32])
}

/// A fresh random key, for owners whose exact address does not matter.
pub fn random_pubkey() -> Pubkey {
    Pubkey::new(rand::random::<[u8; 32]>())
}

pub fn namespace_stats(fee_bps: u16, work_item_count: u64) -> NamespaceStats {
    NamespaceStats {
        authority: authority(),
        fee_bps,
        work_item_count,
        completed_count: 0,
        volume: 0,
        bump: 252,
    }
}

pub fn actor_profile(owner: Pubkey) -> ActorProfile {
    ActorProfile {
        owner,
        name: "relay-bot".into(),
        bio: "Automates chat workflows".into(),
        skills: vec!["rust".into(), "telegram".into()],
        hourly_rate: 50_000_000,
        completed: 3,
        failed: 1,
        earned: 290_000_000,
        rating_sum: 14,
        rating_count: 3,
        registered_at: CREATED_AT - 86_400,
        active: true,
        bump: 253,
    }
}

pub fn header(id: u64, status: WorkItemStatus) -> WorkItemHeader {
    WorkItemHeader {
        id,
        requester: requester(),
        title: "Build a Telegram Bot".into(),
        description: "Relay channel posts to a group".into(),
        requirements: "Rust, teloxide".into(),
        category: "Bots".into(),
        reward: 100_000_000,
        created_at: CREATED_AT + id as i64,
        deadline: CREATED_AT + id as i64 + 48 * 3600,
        status,
    }
}

/// A completed assignment with every optional field present.
pub fn completed_assignment(id: u64, rating: u8) -> AssignmentWorkItem {
    AssignmentWorkItem {
        header: header(id, WorkItemStatus::Completed),
        assigned_actor: Some(actor_owner()),
        claimed_at: Some(CREATED_AT + 60),
        submitted_at: Some(CREATED_AT + 3600),
        completed_at: Some(CREATED_AT + 7200),
        submission_url: Some("https://github.com/relay-bot/pr/1".into()),
        submission_notes: Some("Deployed to staging".into()),
        rejection_reason: None,
        rating: Some(rating),
        bump: 255,
        escrow_bump: 253,
    }
}

pub fn open_assignment(id: u64) -> AssignmentWorkItem {
    AssignmentWorkItem {
        header: header(id, WorkItemStatus::Open),
        assigned_actor: None,
        claimed_at: None,
        submitted_at: None,
        completed_at: None,
        submission_url: None,
        submission_notes: None,
        rejection_reason: None,
        rating: None,
        bump: 255,
        escrow_bump: 253,
    }
}

pub fn open_competition(id: u64, submission_count: u64) -> CompetitionWorkItem {
    CompetitionWorkItem {
        header: header(id, WorkItemStatus::Open),
        submission_count,
        winning_submission: None,
        completed_at: None,
    }
}

pub fn submission(work_item_id: u64, actor: Pubkey) -> Submission {
    Submission {
        work_item_id,
        actor,
        url: "https://github.com/relay-bot/entry".into(),
        notes: String::new(),
        submitted_at: CREATED_AT + 600,
        status: SubmissionStatus::Pending,
    }
}

/// Encode `record` and wrap it as an account at `address`.
pub fn account<T: Record>(address: Pubkey, record: &T) -> RawAccount {
    match record.encode() {
        Ok(data) => RawAccount::new(address, data),
        Err(e) => panic!("fixture failed to encode: {e}"),
    }
}

pub fn work_item_account(address: Pubkey, item: &WorkItem) -> RawAccount {
    match item.encode() {
        Ok(data) => RawAccount::new(address, data),
        Err(e) => panic!("fixture failed to encode: {e}"),
    }
}

/// A snapshot of `work_items` open assignments plus one actor and the
/// namespace, at their derived addresses.
pub fn assignment_snapshot(deriver: &AddressDeriver, work_items: u64) -> Vec<RawAccount> {
    let mut accounts = Vec::with_capacity(work_items as usize + 2);
    if let Ok(ns) = deriver.namespace() {
        accounts.push(account(ns.address, &namespace_stats(250, work_items)));
    }
    if let Ok(actor) = deriver.actor(&actor_owner()) {
        accounts.push(account(actor.address, &actor_profile(actor_owner())));
    }
    for id in 0..work_items {
        if let Ok(pda) = deriver.work_item(id) {
            accounts.push(account(pda.address, &open_assignment(id)));
        }
    }
    accounts
}

/// A snapshot of `work_items` open competitions, each with one submission
/// per owner in `owners`, plus the namespace.
pub fn competition_snapshot(
    deriver: &AddressDeriver,
    work_items: u64,
    owners: &[Pubkey],
) -> Vec<RawAccount> {
    let mut accounts = Vec::new();
    if let Ok(ns) = deriver.namespace() {
        accounts.push(account(ns.address, &namespace_stats(250, work_items)));
    }
    for id in 0..work_items {
        let Ok(pda) = deriver.work_item(id) else {
            continue;
        };
        let item = WorkItem::Competition(open_competition(id, owners.len() as u64));
        accounts.push(work_item_account(pda.address, &item));
        for owner in owners {
            if let Ok(entry) = deriver.submission(&pda.address, owner) {
                accounts.push(account(entry.address, &submission(id, *owner)));
            }
        }
    }
    accounts
}
