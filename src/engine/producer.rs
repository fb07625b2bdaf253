// Producer - ジョブ配信機能

use super::channel::{JobReceiver, JobSender, ResultSender};
use super::consumer::spawn_worker;
use crate::core::{Job, ProcessingResult, WorkItem, WorkerStats};
use crate::primality::PrimalityChecker;
use std::sync::Arc;
use tracing::debug;

/// ワーカーの起動に必要なチャンネル一式
pub struct WorkerBindings {
    pub jobs: JobReceiver,
    pub results: ResultSender,
    pub trace: bool,
}

/// バッチを全て投入し、ワーカーを起動してワーカー数ぶんの Stop を投入する
///
/// ジョブチャンネルには常に M + N 件が積まれる。ワーカーは投入中から
/// 取り出しを始めてよく、各ワーカーはちょうど1つの Stop を消費する。
pub fn start_jobs<K>(
    batch: &[WorkItem],
    worker_count: usize,
    checker: Arc<K>,
    job_tx: &JobSender,
    bindings: WorkerBindings,
) -> ProcessingResult<Vec<tokio::task::JoinHandle<ProcessingResult<WorkerStats>>>>
where
    K: PrimalityChecker + ?Sized + 'static,
{
    for &n in batch {
        if bindings.trace {
            debug!(n, "put into 'jobs'");
        }
        job_tx.push(Job::Work(n))?;
    }

    let mut handles = Vec::with_capacity(worker_count);
    for worker_id in 0..worker_count {
        let handle = spawn_worker(
            worker_id,
            Arc::clone(&checker),
            bindings.jobs.clone(),
            bindings.results.clone(),
            bindings.trace,
        );
        handles.push(handle);

        if bindings.trace {
            debug!(worker = worker_id, "put into 'jobs': stop");
        }
        job_tx.push(Job::Stop)?;
    }

    Ok(handles)
}
