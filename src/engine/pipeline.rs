// Pipeline - JobSource / Worker / Collector のオーケストレーション

use super::channel::{job_channel, result_channel};
use super::collector::collect_results;
use super::producer::{start_jobs, WorkerBindings};
use crate::core::{
    PoolConfig, ProcessingError, ProcessingResult, ResultReporter, RunSummary, WorkItem,
};
use crate::primality::PrimalityChecker;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// 1回の実行を管理するパイプライン
pub struct ProcessingPipeline<K: ?Sized> {
    checker: Arc<K>,
}

impl<K> ProcessingPipeline<K>
where
    K: PrimalityChecker + ?Sized + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(checker: Arc<K>) -> Self {
        Self { checker }
    }

    /// バッチを全ワーカーで処理し、サマリーを返す
    ///
    /// ジョブ投入 → ワーカー起動 → 完了通知がワーカー数に達するまで収集 →
    /// 全ワーカーの終了を待機、の順で進む。
    pub async fn execute<C, R>(
        &self,
        batch: Vec<WorkItem>,
        config: &C,
        reporter: &R,
    ) -> ProcessingResult<RunSummary>
    where
        C: PoolConfig + ?Sized,
        R: ResultReporter + ?Sized,
    {
        let worker_count = config.worker_count();
        if worker_count == 0 {
            return Err(ProcessingError::configuration(
                "ワーカー数は1以上である必要があります",
            ));
        }

        let started_at = Utc::now();
        let start_time = Instant::now();
        let total_jobs = batch.len();

        info!(
            total_jobs,
            workers = worker_count,
            algorithm = self.checker.algorithm_name(),
            "starting run"
        );
        reporter.report_started(total_jobs, worker_count).await;

        let (job_tx, job_rx) = job_channel();
        let (result_tx, mut result_rx) = result_channel();

        // 結果送信側はワーカーだけが持つ。全ワーカーが消えればチャンネルが閉じる
        let trace = config.trace_channel_ops();
        let handles = start_jobs(
            &batch,
            worker_count,
            Arc::clone(&self.checker),
            &job_tx,
            WorkerBindings {
                jobs: job_rx,
                results: result_tx,
                trace,
            },
        )?;

        let collected = collect_results(&mut result_rx, worker_count, reporter, trace).await;

        // 全ワーカーの終了を待機（異常終了があればその原因を優先して返す）
        let mut processed = 0;
        for handle in handles {
            let stats = handle.await.map_err(ProcessingError::task)??;
            debug!(
                worker = stats.worker_id,
                processed = stats.processed,
                "worker joined"
            );
            processed += stats.processed;
        }
        let tally = collected?;
        debug_assert_eq!(processed, tally.checked);

        let summary = RunSummary {
            started_at,
            total_jobs,
            workers: worker_count,
            checked: tally.checked,
            primes: tally.primes,
            elapsed: start_time.elapsed(),
        };

        info!(
            checked = summary.checked,
            primes = summary.primes,
            elapsed = summary.elapsed.as_secs_f64(),
            "run finished"
        );
        reporter.report_completed(&summary).await;

        Ok(summary)
    }
}
