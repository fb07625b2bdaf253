// ワーカープールのトレイト定義
// 設定と結果報告の抽象化インターフェース

use super::types::{CheckResult, RunSummary};
use async_trait::async_trait;
use mockall::automock;

/// ワーカープールの設定を抽象化するトレイト
#[automock]
pub trait PoolConfig: Send + Sync {
    /// 起動するワーカー数を取得
    fn worker_count(&self) -> usize;

    /// チャンネル操作ごとのトレースログを出すかどうか
    fn trace_channel_ops(&self) -> bool;
}

// PoolConfig for Box<dyn PoolConfig>
impl PoolConfig for Box<dyn PoolConfig> {
    fn worker_count(&self) -> usize {
        self.as_ref().worker_count()
    }

    fn trace_channel_ops(&self) -> bool {
        self.as_ref().trace_channel_ops()
    }
}

/// 判定結果の報告先を抽象化するトレイト
#[automock]
#[async_trait]
pub trait ResultReporter: Send + Sync {
    /// 実行開始時の報告
    async fn report_started(&self, total_jobs: usize, workers: usize);

    /// 結果1件ごとの報告（到着順）
    async fn report_result(&self, result: &CheckResult);

    /// 実行完了時の報告
    async fn report_completed(&self, summary: &RunSummary);
}

// ResultReporter for Box<dyn ResultReporter>
#[async_trait]
impl ResultReporter for Box<dyn ResultReporter> {
    async fn report_started(&self, total_jobs: usize, workers: usize) {
        self.as_ref().report_started(total_jobs, workers).await
    }

    async fn report_result(&self, result: &CheckResult) {
        self.as_ref().report_result(result).await
    }

    async fn report_completed(&self, summary: &RunSummary) {
        self.as_ref().report_completed(summary).await
    }
}
