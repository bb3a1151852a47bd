//! # Ledger Client Flow
//!
//! Drives [`LedgerClient`] against the in-memory ledger, writing back the
//! accounts the remote program would have written after each submission.

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use shared_types::Pubkey;
    use std::sync::Arc;
    use tl_03_record_schemas::{Record, SubmissionStatus, WorkItemStatus};
    use tl_04_instruction_builder::{
        BuildError, CreateWorkItemArgs, Operation, RegisterActorArgs, SubmitWorkArgs,
    };
    use tl_06_ledger_client::{
        ClientError, DeploymentConfig, InMemoryLedger, LedgerClient, StoreError,
    };

    type Client = LedgerClient<Arc<InMemoryLedger>, Arc<InMemoryLedger>>;

    fn setup(config: DeploymentConfig) -> (Client, Arc<InMemoryLedger>) {
        ledger_telemetry::init_for_tests();
        let ledger = Arc::new(InMemoryLedger::new());
        (LedgerClient::new(ledger.clone(), ledger.clone(), config), ledger)
    }

    fn write<T: Record>(client: &Client, ledger: &InMemoryLedger, address: Pubkey, record: &T) {
        ledger
            .put_account(client.config().program_id, address, record.encode().unwrap())
            .unwrap();
    }

    fn create_args(title: &str) -> CreateWorkItemArgs {
        CreateWorkItemArgs {
            title: title.into(),
            description: "Relay channel posts to a group".into(),
            requirements: "Rust".into(),
            category: "Bots".into(),
            reward: 100_000_000,
            deadline_hours: 48,
        }
    }

    #[tokio::test]
    async fn test_assignment_lifecycle() {
        let (client, ledger) = setup(DeploymentConfig::assignment());
        let deriver = client.builder().deriver().clone();

        client.initialize(fixtures::authority(), 250).await.unwrap();
        let namespace = deriver.namespace().unwrap().address;
        write(&client, &ledger, namespace, &fixtures::namespace_stats(250, 0));

        client
            .register_actor(
                fixtures::actor_owner(),
                RegisterActorArgs {
                    name: "relay-bot".into(),
                    bio: "Automates chat workflows".into(),
                    skills: vec!["rust".into()],
                    hourly_rate: 50_000_000,
                },
            )
            .await
            .unwrap();
        let actor = deriver.actor(&fixtures::actor_owner()).unwrap().address;
        write(&client, &ledger, actor, &fixtures::actor_profile(fixtures::actor_owner()));

        for expected in 0..2u64 {
            let created = client
                .create_work_item(fixtures::requester(), create_args("Build a Telegram Bot"))
                .await
                .unwrap();
            assert_eq!(created.ordinal, expected);
            write(&client, &ledger, created.address, &fixtures::open_assignment(expected));
            write(
                &client,
                &ledger,
                namespace,
                &fixtures::namespace_stats(250, expected + 1),
            );
        }

        let listed = client.list_work_items().await.unwrap();
        assert_eq!(
            listed.iter().map(|w| w.record.id()).collect::<Vec<_>>(),
            vec![1, 0]
        );
        assert_eq!(client.list_actors().await.unwrap().len(), 1);

        client.claim_work_item(1, fixtures::actor_owner()).await.unwrap();

        let err = client.approve_work(1, fixtures::requester(), 5).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Build(BuildError::InvalidStatus {
                id: 1,
                status: WorkItemStatus::Open,
                operation: Operation::ApproveWork,
            })
        ));

        let mut in_progress = fixtures::open_assignment(1);
        in_progress.header.status = WorkItemStatus::InProgress;
        in_progress.assigned_actor = Some(fixtures::actor_owner());
        let address = deriver.work_item(1).unwrap().address;
        write(&client, &ledger, address, &in_progress);

        client
            .submit_work(
                1,
                fixtures::actor_owner(),
                SubmitWorkArgs {
                    url: "https://github.com/relay-bot/pr/1".into(),
                    notes: String::new(),
                },
            )
            .await
            .unwrap();

        let ops: Vec<_> = ledger
            .submitted()
            .unwrap()
            .iter()
            .filter_map(|ix| Operation::from_data(&ix.data))
            .collect();
        assert_eq!(
            ops,
            vec![
                Operation::InitializeNamespace,
                Operation::RegisterActor,
                Operation::CreateWorkItem,
                Operation::CreateWorkItem,
                Operation::ClaimWorkItem,
                Operation::SubmitWork,
            ]
        );
    }

    #[tokio::test]
    async fn test_create_recovers_from_a_concurrent_create() {
        let (client, ledger) = setup(DeploymentConfig::competition());
        let namespace = client.builder().deriver().namespace().unwrap().address;
        write(&client, &ledger, namespace, &fixtures::namespace_stats(250, 5));

        ledger.queue_failure(StoreError::StaleCounter).unwrap();
        let created = client
            .create_work_item(fixtures::requester(), create_args("Logo contest"))
            .await
            .unwrap();
        assert_eq!(created.attempts, 2);
        assert_eq!(created.ordinal, 5);
    }

    #[tokio::test]
    async fn test_unavailable_store_surfaces() {
        let (client, ledger) = setup(DeploymentConfig::assignment());
        ledger
            .queue_failure(StoreError::Unavailable("connection reset".into()))
            .unwrap();
        let err = client
            .initialize(fixtures::authority(), 250)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Store(StoreError::Unavailable(_))));
        assert!(ledger.submitted().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submission_lookup_on_competition() {
        let (client, ledger) = setup(DeploymentConfig::competition());
        let deriver = client.builder().deriver().clone();
        let work_item = deriver.work_item(0).unwrap().address;
        write(&client, &ledger, work_item, &fixtures::open_competition(0, 1));
        let address = deriver
            .submission(&work_item, &fixtures::actor_owner())
            .unwrap()
            .address;
        write(
            &client,
            &ledger,
            address,
            &fixtures::submission(0, fixtures::actor_owner()),
        );

        let found = client
            .submission(0, &fixtures::actor_owner())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.work_item_id, 0);
        assert!(client
            .submission(0, &fixtures::requester())
            .await
            .unwrap()
            .is_none());
        assert_eq!(client.list_submissions(0).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_only_one_submission_is_selected() {
        let (client, ledger) = setup(DeploymentConfig::competition());
        let deriver = client.builder().deriver().clone();
        let namespace = deriver.namespace().unwrap().address;
        write(&client, &ledger, namespace, &fixtures::namespace_stats(250, 1));

        let entrants: Vec<Pubkey> = (0..3).map(|_| fixtures::random_pubkey()).collect();
        let work_item = deriver.work_item(0).unwrap().address;
        write(&client, &ledger, work_item, &fixtures::open_competition(0, 3));
        for owner in &entrants {
            let address = deriver.submission(&work_item, owner).unwrap().address;
            write(&client, &ledger, address, &fixtures::submission(0, *owner));
        }

        let winner = entrants[1];
        client
            .select_winner(0, winner, fixtures::requester(), 5)
            .await
            .unwrap();

        // Apply what the program writes on selection.
        let mut contest = fixtures::open_competition(0, 3);
        contest.header.status = WorkItemStatus::Completed;
        contest.winning_submission = Some(winner);
        contest.completed_at = Some(fixtures::CREATED_AT + 9000);
        write(&client, &ledger, work_item, &contest);
        let mut selected = fixtures::submission(0, winner);
        selected.status = SubmissionStatus::Selected;
        let address = deriver.submission(&work_item, &winner).unwrap().address;
        write(&client, &ledger, address, &selected);

        let submissions = client.list_submissions(0).await.unwrap();
        assert_eq!(submissions.len(), 3);
        let chosen: Vec<_> = submissions
            .iter()
            .filter(|s| s.record.status == SubmissionStatus::Selected)
            .collect();
        assert_eq!(chosen.len(), 1);
        assert_eq!(chosen[0].record.actor, winner);

        let err = client
            .select_winner(0, entrants[0], fixtures::requester(), 4)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Build(BuildError::InvalidStatus {
                id: 0,
                status: WorkItemStatus::Completed,
                operation: Operation::SelectWinner,
            })
        ));

        let selections = ledger
            .submitted()
            .unwrap()
            .iter()
            .filter(|ix| Operation::from_data(&ix.data) == Some(Operation::SelectWinner))
            .count();
        assert_eq!(selections, 1);
        let unchanged = client.submission(0, &entrants[0]).await.unwrap().unwrap();
        assert_ne!(unchanged.status, SubmissionStatus::Selected);
    }
}
