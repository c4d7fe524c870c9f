//! Criterion micro-benchmarks for the fixed-vs-open vector pipeline.
//!
//! One invocation of either bench body runs the full inner loop of
//! `ops_per_invocation` compute calls; the group throughput declaration
//! turns Criterion's per-invocation timing into a per-call figure. The
//! accumulated sum goes through `black_box` so the pipeline cannot be
//! eliminated as dead code.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use fixity_bench::{sum_fixed, sum_open, BenchRegime};
use fixity_core::ScalarInputs;

fn bench_cross_pipeline(c: &mut Criterion) {
    let regime = BenchRegime::default();

    let mut group = c.benchmark_group("cross_pipeline");
    group.warm_up_time(regime.warmup_total());
    group.measurement_time(regime.measurement_total());
    group.sample_size(regime.measurement_iterations as usize);
    group.throughput(Throughput::Elements(u64::from(regime.ops_per_invocation)));

    // Inputs are rebuilt by the setup stage before each measured batch,
    // outside the timed region.
    group.bench_function("compute_with_fixed", |b| {
        b.iter_batched(
            ScalarInputs::reference,
            |inputs| black_box(sum_fixed(&inputs, regime.ops_per_invocation)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("compute_with_open", |b| {
        b.iter_batched(
            ScalarInputs::reference,
            |inputs| black_box(sum_open(&inputs, regime.ops_per_invocation)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_cross_pipeline);
criterion_main!(benches);
