//! # Truncation Safety
//!
//! Every strict prefix of a valid record must decode to a truncation error,
//! except the empty prefix, which carries no tag at all.

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use tl_03_record_schemas::{
        ActorProfile, NamespaceStats, Record, SchemaError, Submission, WorkItem, WorkItemLayout,
    };

    fn assert_every_prefix<F>(bytes: &[u8], decode: F)
    where
        F: Fn(&[u8]) -> Result<(), SchemaError>,
    {
        assert!(decode(bytes).is_ok());
        assert!(decode(&[]).unwrap_err().is_wrong_kind());
        for len in 1..bytes.len() {
            let err = decode(&bytes[..len]).unwrap_err();
            assert!(err.is_truncation(), "prefix {len}: {err}");
        }
    }

    fn record_prefixes<T: Record>(record: &T) {
        let bytes = record.encode().unwrap();
        assert_every_prefix(&bytes, |data| T::decode(data).map(|_| ()));
    }

    #[test]
    fn test_namespace_stats_prefixes() {
        record_prefixes(&fixtures::namespace_stats(250, 12));
    }

    #[test]
    fn test_actor_profile_prefixes() {
        record_prefixes(&fixtures::actor_profile(fixtures::actor_owner()));
    }

    #[test]
    fn test_submission_prefixes() {
        record_prefixes(&fixtures::submission(3, fixtures::actor_owner()));
    }

    #[test]
    fn test_work_item_prefixes_for_both_layouts() {
        let items = [
            (WorkItem::Assignment(fixtures::completed_assignment(0, 5)), WorkItemLayout::Assignment),
            (WorkItem::Assignment(fixtures::open_assignment(1)), WorkItemLayout::Assignment),
            (WorkItem::Competition(fixtures::open_competition(2, 4)), WorkItemLayout::Competition),
        ];
        for (item, layout) in items {
            let bytes = item.encode().unwrap();
            assert_every_prefix(&bytes, |data| WorkItem::decode(data, layout).map(|_| ()));
        }
    }

    #[test]
    fn test_foreign_tag_is_wrong_kind() {
        let actor = fixtures::actor_profile(fixtures::actor_owner()).encode().unwrap();
        let err = NamespaceStats::decode(&actor).unwrap_err();
        assert!(err.is_wrong_kind());

        let stats = fixtures::namespace_stats(0, 0).encode().unwrap();
        assert!(ActorProfile::decode(&stats).unwrap_err().is_wrong_kind());
        assert!(Submission::decode(&stats).unwrap_err().is_wrong_kind());
        assert!(WorkItem::decode(&stats, WorkItemLayout::Competition)
            .unwrap_err()
            .is_wrong_kind());

        // Same leading byte as the work item tag, then diverges.
        let err = WorkItem::decode(&[79, 34, 0], WorkItemLayout::Assignment).unwrap_err();
        assert!(err.is_wrong_kind());
    }
}
