//! # Task-Ledger Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | tl-02 Address Derivation | Work item and submission addresses |
//! | tl-03 Record Schemas | Decode of each record kind |
//! | tl-05 Account Scan | Full snapshot classification |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use tl_02_address_derivation::AddressDeriver;
use tl_03_record_schemas::{ActorProfile, Record, WorkItem, WorkItemLayout};
use tl_05_account_scan::AccountScanner;
use tl_06_ledger_client::DeploymentConfig;
use tl_tests::fixtures;

fn bench_address_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tl-02-address-derivation");
    let deriver = AddressDeriver::new(DeploymentConfig::assignment().program_id);

    group.bench_function("work_item", |b| {
        let mut ordinal = 0u64;
        b.iter(|| {
            ordinal = ordinal.wrapping_add(1);
            black_box(deriver.work_item(black_box(ordinal)))
        })
    });

    let work_item = match deriver.work_item(0) {
        Ok(pda) => pda.address,
        Err(e) => panic!("derivation failed: {e}"),
    };
    let owner = fixtures::random_pubkey();
    group.bench_function("submission", |b| {
        b.iter(|| black_box(deriver.submission(&work_item, &owner)))
    });

    group.finish();
}

fn bench_record_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("tl-03-record-schemas");

    let item = WorkItem::Assignment(fixtures::completed_assignment(0, 5));
    let item_bytes = item.encode().unwrap_or_default();
    group.throughput(Throughput::Bytes(item_bytes.len() as u64));
    group.bench_function("decode_work_item", |b| {
        b.iter(|| black_box(WorkItem::decode(black_box(&item_bytes), WorkItemLayout::Assignment)))
    });

    let actor_bytes = fixtures::actor_profile(fixtures::actor_owner())
        .encode()
        .unwrap_or_default();
    group.throughput(Throughput::Bytes(actor_bytes.len() as u64));
    group.bench_function("decode_actor_profile", |b| {
        b.iter(|| black_box(ActorProfile::decode(black_box(&actor_bytes))))
    });

    group.finish();
}

fn bench_account_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("tl-05-account-scan");
    group.measurement_time(Duration::from_secs(10));

    let deriver = AddressDeriver::new(DeploymentConfig::assignment().program_id);
    let scanner = AccountScanner::new(WorkItemLayout::Assignment);

    for size in [10u64, 100, 1_000] {
        let accounts = fixtures::assignment_snapshot(&deriver, size);
        group.throughput(Throughput::Elements(accounts.len() as u64));
        group.bench_with_input(BenchmarkId::new("scan", size), &accounts, |b, accounts| {
            b.iter(|| black_box(scanner.scan(black_box(accounts))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_address_derivation,
    bench_record_decode,
    bench_account_scan
);
criterion_main!(benches);
