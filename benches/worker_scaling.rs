//! ワーカー数とアルゴリズムごとのスループット比較ベンチマーク
//!
//! 既定バッチを使ってプール全体の処理時間を測定

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use prime_pool::{
    batch::DEFAULT_BATCH,
    engine::create_quiet_processing_engine,
    primality::{create_checker, CheckAlgorithm, PrimalityChecker},
};
use std::time::Duration;
use tokio::runtime::Runtime;

/// 単発判定のベンチマーク
fn benchmark_single_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Check");

    for algorithm in [CheckAlgorithm::TrialDivision, CheckAlgorithm::MillerRabin] {
        let checker = create_checker(algorithm);
        group.bench_function(algorithm.to_string(), |b| {
            b.iter(|| {
                let n = std::hint::black_box(299_593_572_317_531);
                std::hint::black_box(checker.is_prime(n))
            })
        });
    }

    group.finish();
}

/// ワーカー数によるスケーリングのベンチマーク
fn benchmark_worker_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Worker Scaling");
    group.measurement_time(Duration::from_secs(15));
    group.sample_size(10);

    let runtime = Runtime::new().expect("failed to build tokio runtime");

    for algorithm in [CheckAlgorithm::TrialDivision, CheckAlgorithm::MillerRabin] {
        for workers in [1usize, 2, 4, 8] {
            let engine = create_quiet_processing_engine(algorithm, workers);
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), workers),
                &workers,
                |b, _| {
                    b.to_async(&runtime).iter(|| async {
                        let summary = engine.run(DEFAULT_BATCH.to_vec()).await;
                        std::hint::black_box(summary)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_check, benchmark_worker_scaling);
criterion_main!(benches);
