// ワーカープールのデータ型定義

use chrono::{DateTime, Utc};
use std::time::Duration;

/// 判定対象の整数
pub type WorkItem = i64;

/// ジョブチャンネルに流れるメッセージ
///
/// 番兵値を使わず、停止指示を専用のバリアントで表現する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Work(WorkItem),
    Stop,
}

/// 1件の判定結果
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckResult {
    pub input: WorkItem,
    pub is_prime: bool,
    #[serde(rename = "elapsed_secs", with = "duration_secs")]
    pub elapsed: Duration,
}

impl CheckResult {
    pub fn new(input: WorkItem, is_prime: bool, elapsed: Duration) -> Self {
        Self {
            input,
            is_prime,
            elapsed,
        }
    }
}

/// 結果チャンネルに流れるメッセージ
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    Computed(CheckResult),
    WorkerDone { worker_id: usize },
}

/// ワーカーの状態（Running -> Done の一方向のみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Running,
    Done,
}

/// 終了したワーカーの統計
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerStats {
    pub worker_id: usize,
    pub processed: usize,
}

/// コレクターの集計結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionTally {
    pub checked: usize,
    pub workers_done: usize,
    pub primes: usize,
}

/// 実行全体のサマリー
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub total_jobs: usize,
    pub workers: usize,
    pub checked: usize,
    pub primes: usize,
    #[serde(rename = "elapsed_secs", with = "duration_secs")]
    pub elapsed: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
