// Collector - 結果収集と集計機能

use super::channel::ResultReceiver;
use crate::core::{CollectionTally, ProcessingError, ProcessingResult, ResultReporter, WorkerEvent};
use tracing::debug;

/// 全ワーカーの完了通知が揃うまで結果を受信し続ける
///
/// 空のチャンネルではポーリングせず待機する。完了通知の数がワーカー数に
/// 達した時点でのみ終了し、実結果の件数を含む集計を返す。
/// `trace` はジョブ側と同じく、チャンネル操作ごとのログを有効にする。
pub async fn collect_results<R>(
    results: &mut ResultReceiver,
    worker_count: usize,
    reporter: &R,
    trace: bool,
) -> ProcessingResult<CollectionTally>
where
    R: ResultReporter + ?Sized,
{
    let mut tally = CollectionTally::default();

    while tally.workers_done < worker_count {
        match results.pull().await {
            Some(WorkerEvent::WorkerDone { worker_id }) => {
                tally.workers_done += 1;
                if trace {
                    debug!(
                        worker = worker_id,
                        done = tally.workers_done,
                        total = worker_count,
                        "consume from 'results': worker done"
                    );
                }
            }
            Some(WorkerEvent::Computed(result)) => {
                if trace {
                    debug!(
                        input = result.input,
                        is_prime = result.is_prime,
                        "consume from 'results'"
                    );
                }
                tally.checked += 1;
                if result.is_prime {
                    tally.primes += 1;
                }
                reporter.report_result(&result).await;
            }
            None => {
                // 完了通知を送らずに全送信側が消えた（ワーカー異常終了）
                return Err(ProcessingError::channel(format!(
                    "完了通知が揃う前に結果チャンネルが閉じました ({}/{worker_count})",
                    tally.workers_done
                )));
            }
        }
    }

    Ok(tally)
}
