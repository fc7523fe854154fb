//! # Missing-Person Registry Benchmarks
//!
//! | Subsystem | Operation | Expectation |
//! |-----------|-----------|-------------|
//! | mpr-02 Case Registry | `filter_by_division` | O(1), borrowed bucket |
//! | mpr-02 Case Registry | `rank_divisions` | O(1) in case count (8 buckets) |
//! | ledger-runtime | commit one transaction | flat in history size |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ledger_runtime::adapters::IdentityView;
use ledger_runtime::genesis::GenesisBuilder;
use ledger_runtime::{Command, GenesisConfig, LedgerConfig, LedgerRuntime, LedgerState};
use mpr_01_identity_registry::IdentityRegistry;
use mpr_02_case_registry::{CaseRegistry, NewCase};
use rand::Rng;
use shared_types::{Address, CallContext, Division, Role};
use std::time::Duration;

const OWNER: Address = Address::new([0xA0; 20]);
const REPORTER: Address = Address::new([0xB0; 20]);

fn identities() -> IdentityRegistry {
    let mut registry = IdentityRegistry::new(OWNER);
    registry
        .register(REPORTER, "NID-B0", "Bench Reporter", Role::Reporter)
        .expect("fresh registry");
    registry
}

fn random_case(rng: &mut impl Rng) -> NewCase {
    let division = Division::ALL[rng.gen_range(0..Division::COUNT)];
    NewCase::new(
        "Bench Case",
        rng.gen_range(1..=120),
        rng.gen_range(50..=250),
        "benchmark",
        division,
        "000",
    )
}

fn populated(identity: &IdentityRegistry, count: usize) -> CaseRegistry {
    let mut rng = rand::thread_rng();
    let mut cases = CaseRegistry::new();
    let ctx = CallContext::new(REPORTER, 0);
    for _ in 0..count {
        cases
            .add_case(&IdentityView(identity), &ctx, random_case(&mut rng))
            .expect("valid case");
    }
    cases
}

// ============================================================================
// MPR-02: Case Registry Benchmarks
// ============================================================================

fn bench_case_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("mpr-02-case-registry");
    group.measurement_time(Duration::from_secs(5));
    let identity = identities();

    for size in [100usize, 1_000, 10_000] {
        let cases = populated(&identity, size);

        group.bench_with_input(BenchmarkId::new("rank_divisions", size), &cases, |b, cases| {
            b.iter(|| black_box(cases.rank_divisions(black_box(false))))
        });

        group.bench_with_input(
            BenchmarkId::new("filter_by_division", size),
            &cases,
            |b, cases| b.iter(|| black_box(cases.filter_by_division(Division::Dhaka).len())),
        );
    }

    group.throughput(Throughput::Elements(1));
    group.bench_function("add_case", |b| {
        let mut rng = rand::thread_rng();
        let mut cases = CaseRegistry::new();
        let ctx = CallContext::new(REPORTER, 0);
        b.iter(|| {
            black_box(
                cases
                    .add_case(&IdentityView(&identity), &ctx, random_case(&mut rng))
                    .expect("valid case"),
            )
        })
    });

    group.finish();
}

// ============================================================================
// LEDGER RUNTIME: Commit Throughput
// ============================================================================

fn bench_ledger_commits(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger-runtime");
    group.measurement_time(Duration::from_secs(10));
    group.throughput(Throughput::Elements(1));

    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let config = LedgerConfig {
        genesis: GenesisConfig::devnet(OWNER),
        ..Default::default()
    };
    let runtime = rt.block_on(async { LedgerRuntime::start(config).expect("valid config") });
    let handle = runtime.handle();
    rt.block_on(async {
        handle
            .register(REPORTER, "NID-B0", "Bench Reporter", Role::Reporter)
            .await
            .expect("registration")
    });

    group.bench_function("commit_add_case", |b| {
        b.to_async(&rt).iter(|| {
            let handle = handle.clone();
            async move {
                let draft = random_case(&mut rand::thread_rng());
                black_box(handle.add_case(REPORTER, draft).await.expect("commit"))
            }
        })
    });

    group.bench_function("snapshot_query", |b| {
        b.iter(|| black_box(handle.rank_divisions(true)))
    });

    group.finish();
    rt.block_on(runtime.shutdown());
}

// ============================================================================
// LEDGER RUNTIME: Draft Cost vs History
// ============================================================================

fn ledger_with_history(cases: usize) -> LedgerState {
    let mut state = GenesisBuilder::new(GenesisConfig::devnet(OWNER))
        .build(0)
        .expect("genesis");
    let register = Command::Register {
        national_id: "NID-B0".into(),
        name: "Bench Reporter".into(),
        role: Role::Reporter,
    };
    state
        .execute(&CallContext::new(REPORTER, 0), &register)
        .expect("registration");

    let mut rng = rand::thread_rng();
    for _ in 0..cases {
        state
            .execute(&CallContext::new(REPORTER, 0), &Command::AddCase(random_case(&mut rng)))
            .expect("valid case");
    }
    state
}

fn bench_draft_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger-runtime-history");
    group.measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(1));

    for history in [1_000usize, 10_000, 50_000] {
        let committed = ledger_with_history(history);
        group.bench_with_input(
            BenchmarkId::new("draft_and_add_case", history),
            &committed,
            |b, committed| {
                let mut rng = rand::thread_rng();
                b.iter(|| {
                    let mut draft = committed.clone();
                    let command = Command::AddCase(random_case(&mut rng));
                    black_box(
                        draft
                            .execute(&CallContext::new(REPORTER, 1), &command)
                            .expect("commit"),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_case_registry,
    bench_ledger_commits,
    bench_draft_commit
);

criterion_main!(benches);
