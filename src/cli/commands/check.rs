use crate::batch::resolve_batch;
use crate::cli::args::OutputFormat;
use crate::core::{PoolConfig, ProcessingError, ResultReporter, RunSummary, WorkItem};
use crate::engine::create_processing_engine;
use crate::primality::{CheckAlgorithm, PrimalityChecker};
use crate::services::{ConsoleResultReporter, JsonLinesResultReporter};
use anyhow::{Context, Result};

/// 設定を直せば再実行できる失敗の終了コード（clap の使用法エラーと同じ）
pub const EXIT_USAGE: u8 = 2;
/// 実行中の失敗の終了コード
pub const EXIT_FAILURE: u8 = 1;

/// 出力形式に応じた報告先を作成
pub fn create_reporter(format: OutputFormat) -> Box<dyn ResultReporter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleResultReporter::new()),
        OutputFormat::Json => Box::new(JsonLinesResultReporter::new()),
    }
}

/// check コマンドを実行
///
/// 数値が指定されなければ組み込みバッチを使う
pub async fn execute_check(
    numbers: Vec<WorkItem>,
    workers: Option<usize>,
    algorithm: CheckAlgorithm,
    format: OutputFormat,
    trace_channels: bool,
) -> Result<RunSummary> {
    execute_check_with_reporter(
        numbers,
        workers,
        algorithm,
        trace_channels,
        create_reporter(format),
    )
    .await
}

/// 報告先を指定して check コマンドを実行
pub async fn execute_check_with_reporter<R>(
    numbers: Vec<WorkItem>,
    workers: Option<usize>,
    algorithm: CheckAlgorithm,
    trace_channels: bool,
    reporter: R,
) -> Result<RunSummary>
where
    R: ResultReporter,
{
    let engine = create_processing_engine(algorithm, workers, trace_channels, reporter);
    engine.run(resolve_batch(numbers)).await.with_context(|| {
        format!(
            "{} ({} workers) による判定に失敗しました",
            engine.checker().algorithm_name(),
            engine.config().worker_count()
        )
    })
}

/// コマンド失敗時の終了コードを決める
///
/// 原因が回復可能な ProcessingError なら EXIT_USAGE、それ以外は EXIT_FAILURE
pub fn failure_exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<ProcessingError>() {
        Some(cause) if cause.is_recoverable() => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}
