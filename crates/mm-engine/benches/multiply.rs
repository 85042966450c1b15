use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mm_engine::{build, multiply_with, EngineConfig, MatrixKind, Mode};

const SIZES: [usize; 4] = [64, 128, 256, 512];

/// Square RAND x RAND products for every mode, one group per size.
fn bench_modes(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EngineConfig::default();

    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);

    for &n in &SIZES {
        let a = build(MatrixKind::Random, n, n, config.max_random).unwrap();
        let b = build(MatrixKind::Random, n, n, config.max_random).unwrap();
        group.throughput(Throughput::Elements((2 * n * n * n) as u64));

        for mode in Mode::ALL {
            group.bench_with_input(BenchmarkId::new(mode.name(), n), &n, |bench, _| {
                bench.iter(|| multiply_with(black_box(&a), black_box(&b), mode, &config).unwrap())
            });
        }
    }
    group.finish();
}

/// Parallel strategy across worker counts at a fixed size.
fn bench_thread_counts(c: &mut Criterion) {
    let n = 256;
    let a = build(MatrixKind::Sequential, n, n, 0.0).unwrap();
    let b = build(MatrixKind::Sequential, n, n, 0.0).unwrap();

    let mut group = c.benchmark_group("parallel_threads");
    group.sample_size(10);
    for threads in [1, 2, 4, 8] {
        let config = EngineConfig::new().with_threads(threads);
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |bench, _| {
            bench.iter(|| multiply_with(black_box(&a), black_box(&b), Mode::Parallel, &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_modes, bench_thread_counts);
criterion_main!(benches);
