// Consumer - 並列ワーカー機能

use super::channel::{JobReceiver, ResultSender};
use crate::core::{Job, ProcessingError, ProcessingResult, WorkerEvent, WorkerState, WorkerStats};
use crate::primality::{check_timed, PrimalityChecker};
use std::sync::Arc;
use tracing::debug;

/// 単一ワーカー
///
/// Stop を受け取るまでジョブを取り出し、判定結果を結果チャンネルへ送る。
/// Stop を受け取ったら完了通知を1回だけ送って終了する。
pub fn spawn_worker<K>(
    worker_id: usize,
    checker: Arc<K>,
    jobs: JobReceiver,
    results: ResultSender,
    trace: bool,
) -> tokio::task::JoinHandle<ProcessingResult<WorkerStats>>
where
    K: PrimalityChecker + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut state = WorkerState::Running;
        let mut processed = 0;

        while state == WorkerState::Running {
            match jobs.pull().await {
                Some(Job::Work(n)) => {
                    if trace {
                        debug!(worker = worker_id, n, "consume from 'jobs'");
                    }

                    // CPU負荷の高い判定はブロッキングプールで実行
                    let checker = Arc::clone(&checker);
                    let result = tokio::task::spawn_blocking(move || check_timed(checker.as_ref(), n))
                        .await
                        .map_err(ProcessingError::task)?;

                    if trace {
                        debug!(
                            worker = worker_id,
                            input = result.input,
                            is_prime = result.is_prime,
                            elapsed = result.elapsed.as_secs_f64(),
                            "put into 'results'"
                        );
                    }
                    results.push(WorkerEvent::Computed(result))?;
                    processed += 1;
                }
                // 送信側が閉じた場合もこれ以上ジョブは来ない
                Some(Job::Stop) | None => state = WorkerState::Done,
            }
        }

        if trace {
            debug!(worker = worker_id, processed, "put into 'results': worker done");
        }
        results.push(WorkerEvent::WorkerDone { worker_id })?;

        Ok(WorkerStats {
            worker_id,
            processed,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::channel::{job_channel, result_channel};
    use crate::primality::{MockPrimalityChecker, TrialDivisionChecker};

    struct PanickingChecker;

    impl PrimalityChecker for PanickingChecker {
        fn is_prime(&self, _n: i64) -> bool {
            panic!("checker crashed")
        }

        fn algorithm_name(&self) -> &'static str {
            "panicking"
        }
    }

    #[tokio::test]
    async fn test_worker_processes_jobs_then_reports_done() {
        let (job_tx, job_rx) = job_channel();
        let (result_tx, mut result_rx) = result_channel();

        job_tx.push(Job::Work(7)).unwrap();
        job_tx.push(Job::Work(8)).unwrap();
        job_tx.push(Job::Stop).unwrap();

        let handle = spawn_worker(
            0,
            Arc::new(TrialDivisionChecker::new()),
            job_rx,
            result_tx,
            false,
        );
        let stats = handle.await.unwrap().unwrap();
        assert_eq!(stats, WorkerStats { worker_id: 0, processed: 2 });

        match result_rx.pull().await.unwrap() {
            WorkerEvent::Computed(result) => {
                assert_eq!(result.input, 7);
                assert!(result.is_prime);
            }
            other => panic!("Expected computed result, got {other:?}"),
        }
        match result_rx.pull().await.unwrap() {
            WorkerEvent::Computed(result) => {
                assert_eq!(result.input, 8);
                assert!(!result.is_prime);
            }
            other => panic!("Expected computed result, got {other:?}"),
        }
        assert_eq!(
            result_rx.pull().await,
            Some(WorkerEvent::WorkerDone { worker_id: 0 })
        );
    }

    #[tokio::test]
    async fn test_worker_stops_on_first_stop() {
        let (job_tx, job_rx) = job_channel();
        let (result_tx, mut result_rx) = result_channel();

        job_tx.push(Job::Stop).unwrap();
        job_tx.push(Job::Work(11)).unwrap();

        let handle = spawn_worker(
            3,
            Arc::new(TrialDivisionChecker::new()),
            job_rx.clone(),
            result_tx,
            true,
        );
        let stats = handle.await.unwrap().unwrap();
        assert_eq!(stats.processed, 0);

        assert_eq!(
            result_rx.pull().await,
            Some(WorkerEvent::WorkerDone { worker_id: 3 })
        );
        // Stop 以降のジョブには手を付けない
        assert_eq!(job_rx.pull().await, Some(Job::Work(11)));
    }

    #[tokio::test]
    async fn test_worker_treats_zero_as_real_work() {
        let (job_tx, job_rx) = job_channel();
        let (result_tx, mut result_rx) = result_channel();

        job_tx.push(Job::Work(0)).unwrap();
        job_tx.push(Job::Stop).unwrap();

        let handle = spawn_worker(
            0,
            Arc::new(TrialDivisionChecker::new()),
            job_rx,
            result_tx,
            false,
        );
        assert_eq!(handle.await.unwrap().unwrap().processed, 1);

        match result_rx.pull().await.unwrap() {
            WorkerEvent::Computed(result) => {
                assert_eq!(result.input, 0);
                assert!(!result.is_prime);
            }
            other => panic!("Expected computed result, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_worker_finishes_when_job_channel_closes() {
        let (job_tx, job_rx) = job_channel();
        let (result_tx, mut result_rx) = result_channel();
        drop(job_tx);

        let handle = spawn_worker(
            1,
            Arc::new(TrialDivisionChecker::new()),
            job_rx,
            result_tx,
            false,
        );
        handle.await.unwrap().unwrap();

        assert_eq!(
            result_rx.pull().await,
            Some(WorkerEvent::WorkerDone { worker_id: 1 })
        );
    }

    #[tokio::test]
    async fn test_worker_checks_each_job_exactly_once() {
        let mut checker = MockPrimalityChecker::new();
        checker
            .expect_is_prime()
            .times(3)
            .returning(|n| n % 2 == 1);

        let (job_tx, job_rx) = job_channel();
        let (result_tx, _result_rx) = result_channel();
        for n in [1, 2, 3] {
            job_tx.push(Job::Work(n)).unwrap();
        }
        job_tx.push(Job::Stop).unwrap();

        let handle = spawn_worker(0, Arc::new(checker), job_rx, result_tx, true);
        assert_eq!(handle.await.unwrap().unwrap().processed, 3);
    }

    #[tokio::test]
    async fn test_worker_reports_crashed_check() {
        let checker = PanickingChecker;

        let (job_tx, job_rx) = job_channel();
        let (result_tx, mut result_rx) = result_channel();
        job_tx.push(Job::Work(5)).unwrap();
        job_tx.push(Job::Stop).unwrap();

        let handle = spawn_worker(0, Arc::new(checker), job_rx, result_tx, false);
        let error = handle.await.unwrap().unwrap_err();
        assert!(matches!(error, ProcessingError::TaskError { .. }));

        // 完了通知は送られず、送信側が破棄されてチャンネルが閉じる
        assert_eq!(result_rx.pull().await, None);
    }

    #[tokio::test]
    async fn test_worker_fails_when_results_receiver_dropped() {
        let (job_tx, job_rx) = job_channel();
        let (result_tx, result_rx) = result_channel();
        drop(result_rx);

        job_tx.push(Job::Work(13)).unwrap();
        job_tx.push(Job::Stop).unwrap();

        let handle = spawn_worker(
            0,
            Arc::new(TrialDivisionChecker::new()),
            job_rx,
            result_tx,
            false,
        );
        let error = handle.await.unwrap().unwrap_err();
        assert!(matches!(error, ProcessingError::ChannelError { .. }));
    }
}
