//! # End-to-End Scenarios
//!
//! 1. Create-work-item arguments encode byte-for-byte.
//! 2. Namespace stats decode and consecutive ordinals derive distinct addresses.
//! 3. A completed work item's rating survives decoding; a corrupted option
//!    tag is reported as malformed.
//! 4. A mixed snapshot is classified with the truncated account reported.

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use shared_types::{Pubkey, RawAccount};
    use tl_01_wire_codec::DecodeError;
    use tl_02_address_derivation::AddressDeriver;
    use tl_03_record_schemas::{
        tags, NamespaceStats, Record, RecordKind, SchemaError, WorkItem, WorkItemLayout,
    };
    use tl_04_instruction_builder::{
        CreateWorkItemArgs, InstructionBuilder, InstructionRequest, Operation,
    };
    use tl_05_account_scan::{AccountScanner, ScanPolicy, SkipReason};
    use tl_06_ledger_client::DeploymentConfig;

    fn len_prefixed(s: &str) -> Vec<u8> {
        let mut out = (s.len() as u32).to_le_bytes().to_vec();
        out.extend_from_slice(s.as_bytes());
        out
    }

    #[test]
    fn test_create_work_item_data_is_byte_exact() {
        ledger_telemetry::init_for_tests();
        let config = DeploymentConfig::assignment();
        let builder = InstructionBuilder::new(config.program_id, config.layout);
        let args = CreateWorkItemArgs {
            title: "Build a Telegram Bot".into(),
            description: "Relay channel posts to a group".into(),
            requirements: "Rust, teloxide".into(),
            category: "Bots".into(),
            reward: 100_000_000,
            deadline_hours: 48,
        };

        let instruction = builder
            .build(&InstructionRequest::CreateWorkItem {
                requester: fixtures::requester(),
                ordinal: 0,
                args: args.clone(),
            })
            .unwrap();

        let mut expected = Operation::CreateWorkItem.tag().to_vec();
        assert_eq!(hex::encode(&expected), "c25006b4e87f30ab");
        expected.extend(len_prefixed(&args.title));
        expected.extend(len_prefixed(&args.description));
        expected.extend(len_prefixed(&args.requirements));
        expected.extend(len_prefixed(&args.category));
        expected.extend(100_000_000u64.to_le_bytes());
        expected.extend(48u64.to_le_bytes());

        assert_eq!(instruction.data, expected);
        assert_eq!(instruction.program_id, config.program_id);
    }

    #[test]
    fn test_namespace_stats_and_distinct_ordinals() {
        let stats = fixtures::namespace_stats(250, 0);
        let bytes = stats.encode().unwrap();
        assert_eq!(&bytes[..8], &tags::NAMESPACE_STATS_TAG);

        let decoded = NamespaceStats::decode(&bytes).unwrap();
        assert_eq!(decoded.fee_bps, 250);
        assert_eq!(decoded.work_item_count, 0);
        assert_eq!(decoded.next_ordinal(), 0);

        for config in [DeploymentConfig::assignment(), DeploymentConfig::competition()] {
            let deriver = AddressDeriver::new(config.program_id);
            let first = deriver.work_item(0).unwrap();
            let second = deriver.work_item(1).unwrap();
            assert_ne!(first.address, second.address);
        }
    }

    #[test]
    fn test_completed_rating_and_corrupted_option_tag() {
        let item = WorkItem::Assignment(fixtures::completed_assignment(0, 5));
        let mut bytes = item.encode().unwrap();

        let decoded = WorkItem::decode(&bytes, WorkItemLayout::Assignment).unwrap();
        assert_eq!(decoded.status().as_byte(), 3);
        assert_eq!(decoded.as_assignment().and_then(|a| a.rating), Some(5));
        assert_eq!(decoded, item);

        // rating tag, rating, bump, escrow_bump
        let rating_tag = bytes.len() - 4;
        assert_eq!(bytes[rating_tag], 1);
        bytes[rating_tag] = 2;

        let err = WorkItem::decode(&bytes, WorkItemLayout::Assignment).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Malformed {
                kind: RecordKind::WorkItem,
                source: DecodeError::InvalidOptionTag {
                    offset: rating_tag,
                    value: 2,
                },
            }
        );
        assert!(!err.is_truncation());
    }

    #[test]
    fn test_mixed_snapshot_scan() {
        ledger_telemetry::init_for_tests();
        let deriver = AddressDeriver::new(DeploymentConfig::assignment().program_id);
        let address = |ordinal: u64| deriver.work_item(ordinal).unwrap().address;

        let truncated = {
            let account = fixtures::account(address(2), &fixtures::open_assignment(2));
            RawAccount::new(account.address, account.data[..40].to_vec())
        };
        let unrelated = RawAccount::new(
            Pubkey::new([0xEE; 32]),
            [vec![1, 2, 3, 4, 5, 6, 7, 8], vec![0; 32]].concat(),
        );
        let actor = deriver.actor(&fixtures::actor_owner()).unwrap().address;
        let accounts = vec![
            fixtures::account(address(0), &fixtures::open_assignment(0)),
            fixtures::account(address(1), &fixtures::completed_assignment(1, 4)),
            fixtures::account(actor, &fixtures::actor_profile(fixtures::actor_owner())),
            truncated.clone(),
            unrelated.clone(),
        ];

        let report = AccountScanner::new(WorkItemLayout::Assignment)
            .scan(&accounts)
            .unwrap();
        assert_eq!(report.work_items.len(), 2);
        assert_eq!(report.actors.len(), 1);
        assert!(report.namespaces.is_empty());
        assert!(report.submissions.is_empty());
        assert_eq!(report.decoded_count(), 3);

        let rejected: Vec<_> = report.rejected().collect();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].address, truncated.address);
        assert_eq!(rejected[0].kind, Some(RecordKind::WorkItem));
        assert!(matches!(rejected[0].reason, SkipReason::Truncated(_)));

        assert!(report
            .skipped
            .iter()
            .any(|s| s.address == unrelated.address && s.reason == SkipReason::UnknownKind));

        let strict = AccountScanner::new(WorkItemLayout::Assignment).with_policy(ScanPolicy::Strict);
        assert!(strict.scan(&accounts).is_err());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let deriver = AddressDeriver::new(DeploymentConfig::assignment().program_id);
        let accounts = fixtures::assignment_snapshot(&deriver, 6);
        let scanner = AccountScanner::new(WorkItemLayout::Assignment);

        let first = scanner.scan(&accounts).unwrap();
        let second = scanner.scan(&accounts).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.work_items.len(), 6);
        assert_eq!(first.namespaces.len(), 1);
    }

    #[test]
    fn test_competition_scan_is_idempotent() {
        let deriver = AddressDeriver::new(DeploymentConfig::competition().program_id);
        let owners: Vec<Pubkey> = (0..3).map(|_| fixtures::random_pubkey()).collect();
        let mut accounts = fixtures::competition_snapshot(&deriver, 4, &owners);
        let cut = {
            let last = accounts[accounts.len() - 1].clone();
            RawAccount::new(Pubkey::new([0xAB; 32]), last.data[..20].to_vec())
        };
        accounts.push(cut);
        accounts.push(RawAccount::new(Pubkey::new([0xCD; 32]), vec![0; 12]));
        let scanner = AccountScanner::new(WorkItemLayout::Competition);

        let first = scanner.scan(&accounts).unwrap();
        let second = scanner.scan(&accounts).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.skipped, second.skipped);

        assert_eq!(first.namespaces.len(), 1);
        assert_eq!(first.work_items.len(), 4);
        assert!(first
            .work_items
            .iter()
            .all(|w| w.record.as_competition().map(|c| c.submission_count) == Some(3)));
        assert_eq!(first.submissions.len(), 12);
        assert_eq!(first.submissions_for(2).len(), 3);

        assert_eq!(first.skipped.len(), 2);
        assert!(matches!(first.skipped[0].reason, SkipReason::Truncated(_)));
        assert_eq!(first.skipped[0].kind, Some(RecordKind::Submission));
        assert_eq!(first.skipped[1].reason, SkipReason::UnknownKind);
    }

    #[test]
    fn test_wrong_layout_is_not_silently_accepted() {
        let bytes = fixtures::open_competition(0, 2).encode().unwrap();
        let err = WorkItem::decode(&bytes, WorkItemLayout::Assignment).unwrap_err();
        assert!(!err.is_wrong_kind());
    }

    #[test]
    fn test_decoded_records_serialize_with_base58_keys() {
        let record = fixtures::actor_profile(fixtures::actor_owner());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["owner"], fixtures::actor_owner().to_string());
        assert_eq!(json["skills"][1], "telegram");
    }
}
