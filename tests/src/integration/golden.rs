//! # Golden Vectors
//!
//! Fixed tags and addresses of the two live deployments. A change here means
//! the client no longer talks to the deployed programs.

#[cfg(test)]
mod tests {
    use shared_crypto::discriminator;
    use shared_types::Pubkey;
    use std::collections::HashSet;
    use tl_03_record_schemas::{RecordKind, WorkItemLayout};
    use tl_04_instruction_builder::{
        ApproveWorkArgs, InstructionBuilder, InstructionRequest, Operation, SubmitApplicationArgs,
    };
    use tl_06_ledger_client::{DeploymentConfig, ASSIGNMENT_PROGRAM_ID, COMPETITION_PROGRAM_ID};

    fn key(s: &str) -> Pubkey {
        s.parse().unwrap()
    }

    #[test]
    fn test_tags_match_their_names() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.tag(), discriminator("account", kind.type_name()));
        }
        for op in Operation::ALL {
            assert_eq!(op.tag(), discriminator("global", op.instruction_name()));
        }
    }

    #[test]
    fn test_tags_are_unique() {
        let mut seen = HashSet::new();
        for tag in RecordKind::ALL.iter().map(|k| k.tag()) {
            assert!(seen.insert(tag));
        }
        for tag in Operation::ALL.iter().map(|o| o.tag()) {
            assert!(seen.insert(tag));
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn test_known_record_tags() {
        assert_eq!(hex::encode(RecordKind::NamespaceStats.tag()), "4d5ccc3abb625b0c");
        assert_eq!(hex::encode(RecordKind::WorkItem.tag()), "4f22e537585a3754");
        assert_eq!(
            RecordKind::ActorProfile.tag(),
            [60, 227, 42, 24, 0, 87, 86, 205]
        );
        assert_eq!(
            RecordKind::Submission.tag(),
            [58, 194, 159, 158, 75, 102, 178, 197]
        );
    }

    #[test]
    fn test_presets_point_at_live_programs() {
        let assignment = DeploymentConfig::assignment();
        assert_eq!(assignment.program_id, key(ASSIGNMENT_PROGRAM_ID));
        assert_eq!(assignment.layout, WorkItemLayout::Assignment);

        let competition = DeploymentConfig::competition();
        assert_eq!(competition.program_id, key(COMPETITION_PROGRAM_ID));
        assert_eq!(competition.layout, WorkItemLayout::Competition);
    }

    #[test]
    fn test_approve_accounts_on_assignment_deployment() {
        let builder = InstructionBuilder::new(key(ASSIGNMENT_PROGRAM_ID), WorkItemLayout::Assignment);
        let owner = Pubkey::new([7; 32]);
        let treasury = Pubkey::new([3; 32]);
        let approver = Pubkey::new([9; 32]);

        let ix = builder
            .build(&InstructionRequest::ApproveWork {
                ordinal: 0,
                actor_owner: owner,
                approver,
                treasury,
                args: ApproveWorkArgs { rating: 5 },
            })
            .unwrap();

        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                key("F4KNPaBiRTg6nzuvjz7wtwA1cJmihngJYW2fN1M3iDLQ"),
                key("8Hw7bvBEcjXTnQLSwgmHkYYtXzujBGt9ts3taD7tZn5a"),
                owner,
                key("4TuvCCPzsaQddwfVnU9r53f4MZbWn9A4v6JJbSc5Sx7b"),
                key("C3bwVnywjt472zTxcfvUULDXX1XGndtTuXj3HPKa7XRz"),
                treasury,
                approver,
            ]
        );
        assert_eq!(ix.signers().copied().collect::<Vec<_>>(), vec![approver]);
    }

    #[test]
    fn test_application_accounts_on_competition_deployment() {
        let builder =
            InstructionBuilder::new(key(COMPETITION_PROGRAM_ID), WorkItemLayout::Competition);
        let owner = Pubkey::new([7; 32]);

        let ix = builder
            .build(&InstructionRequest::SubmitApplication {
                ordinal: 0,
                actor_owner: owner,
                args: SubmitApplicationArgs {
                    url: "https://example.com/entry".into(),
                    notes: String::new(),
                },
            })
            .unwrap();

        assert_eq!(
            ix.accounts[0].pubkey,
            key("3pfR9xLzKRb627zvdDgiSj1chrsax8dLBweSPPoJqkt7")
        );
        assert_eq!(
            ix.accounts[1].pubkey,
            key("4FoKZ4BZTKNAA3NvDmhgtPqy14vyRzANcxHEkHPktF9k")
        );
        assert_eq!(
            ix.accounts[2].pubkey,
            key("4zCW5Btp9gWQuT8dNb75CW1ZfcRf3z6fTYvRUfFrGHWe")
        );
        assert_eq!(&ix.data[..8], &[27, 71, 89, 170, 144, 203, 50, 8]);
    }
}
