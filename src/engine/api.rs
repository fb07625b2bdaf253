// 高レベル公開API
// ProcessingEngine を簡単に使用できるようにするための便利な関数

use super::ProcessingEngine;
use crate::{
    core::ResultReporter,
    primality::{create_checker, CheckAlgorithm, PrimalityChecker},
    services::{DefaultPoolConfig, NoOpResultReporter},
};

/// ProcessingEngine作成のヘルパー関数
///
/// ワーカー数を省略するとCPU数ぶんのワーカーを使う
pub fn create_processing_engine<R>(
    algorithm: CheckAlgorithm,
    workers: Option<usize>,
    trace_channels: bool,
    reporter: R,
) -> ProcessingEngine<Box<dyn PrimalityChecker>, DefaultPoolConfig, R>
where
    R: ResultReporter,
{
    let mut config = DefaultPoolConfig::default().with_channel_tracing(trace_channels);
    if let Some(workers) = workers {
        config = config.with_workers(workers);
    }

    ProcessingEngine::new(create_checker(algorithm), config, reporter)
}

/// ProcessingEngine作成のヘルパー関数（静音版）
///
/// ベンチマークやバックグラウンド処理用
pub fn create_quiet_processing_engine(
    algorithm: CheckAlgorithm,
    workers: usize,
) -> ProcessingEngine<Box<dyn PrimalityChecker>, DefaultPoolConfig, NoOpResultReporter> {
    create_processing_engine(algorithm, Some(workers), false, NoOpResultReporter::new())
}
