/*!
 * Scheduling Policy Benchmarks
 *
 * Compare simulation cost of each policy over generated workloads
 */

use cpu_sched_sim::{compute_statistics, Algorithm, Dispatcher, ProcessSpec};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic mixed workload: staggered arrivals, bursts 1..=12, priorities 0..4
fn generate_workload(count: usize) -> Vec<ProcessSpec> {
    let rows: Vec<_> = (0..count as i64)
        .map(|i| (i * 3 % 17 + i / 2, (i * 7 % 12) + 1, Some((i % 5) as i32)))
        .collect();
    ProcessSpec::sequential(&rows)
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_simulation");
    let dispatcher = Dispatcher::default();

    for size in [16usize, 128, 512] {
        let specs = generate_workload(size);
        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), size),
                &specs,
                |b, specs| {
                    b.iter(|| dispatcher.run(black_box(algorithm), black_box(specs)).ok());
                },
            );
        }
    }

    group.finish();
}

fn bench_compare_all(c: &mut Criterion) {
    let dispatcher = Dispatcher::default();
    let specs = generate_workload(128);

    c.bench_function("compare_all_128", |b| {
        b.iter(|| dispatcher.compare(black_box(&specs)).ok());
    });
}

fn bench_statistics(c: &mut Criterion) {
    let dispatcher = Dispatcher::default();
    let Ok(schedule) = dispatcher.run(Algorithm::Srtf, &generate_workload(512)) else {
        return;
    };

    c.bench_function("statistics_512", |b| {
        b.iter(|| compute_statistics(black_box(&schedule.results)).ok());
    });
}

criterion_group!(benches, bench_policies, bench_compare_all, bench_statistics);
criterion_main!(benches);
