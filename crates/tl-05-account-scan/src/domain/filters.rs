//! Pure selections and orderings over decoded collections.

use super::report::Decoded;
use shared_types::Pubkey;
use tl_03_record_schemas::{ActorProfile, Submission, WorkItem, WorkItemStatus};

pub fn submissions_for(
    submissions: &[Decoded<Submission>],
    work_item_id: u64,
) -> Vec<&Decoded<Submission>> {
    submissions
        .iter()
        .filter(|s| s.record.work_item_id == work_item_id)
        .collect()
}

pub fn work_items_by_requester<'a>(
    work_items: &'a [Decoded<WorkItem>],
    requester: &Pubkey,
) -> Vec<&'a Decoded<WorkItem>> {
    work_items
        .iter()
        .filter(|w| w.record.requester() == requester)
        .collect()
}

pub fn open_work_items(work_items: &[Decoded<WorkItem>]) -> Vec<&Decoded<WorkItem>> {
    work_items
        .iter()
        .filter(|w| w.record.status() == WorkItemStatus::Open)
        .collect()
}

pub fn actor_by_owner<'a>(
    actors: &'a [Decoded<ActorProfile>],
    owner: &Pubkey,
) -> Option<&'a Decoded<ActorProfile>> {
    actors.iter().find(|a| &a.record.owner == owner)
}

pub fn active_actors(actors: &[Decoded<ActorProfile>]) -> Vec<&Decoded<ActorProfile>> {
    actors.iter().filter(|a| a.record.active).collect()
}

/// Newest first by creation time; ties broken by id so the order is total.
pub fn sort_work_items_newest_first(work_items: &mut [Decoded<WorkItem>]) {
    work_items.sort_by(|a, b| {
        let (a, b) = (a.record.header(), b.record.header());
        b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
    });
}

/// Most completed work first; ties broken by owner.
pub fn sort_actors_by_completed(actors: &mut [Decoded<ActorProfile>]) {
    actors.sort_by(|a, b| {
        b.record
            .completed
            .cmp(&a.record.completed)
            .then(a.record.owner.cmp(&b.record.owner))
    });
}

pub fn sort_submissions_newest_first(submissions: &mut [Decoded<Submission>]) {
    submissions.sort_by(|a, b| {
        b.record
            .submitted_at
            .cmp(&a.record.submitted_at)
            .then(a.record.actor.cmp(&b.record.actor))
    });
}
