// Channel - ジョブ/結果チャンネルの抽象化
// どちらも無制限キューなので送信はブロックせず、受信のみ待機する

use crate::core::{Job, ProcessingError, ProcessingResult, WorkerEvent};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// ジョブ送信側（JobSource が保持）
#[derive(Debug, Clone)]
pub struct JobSender {
    tx: mpsc::UnboundedSender<Job>,
}

impl JobSender {
    /// ジョブを投入（ブロックしない）
    pub fn push(&self, job: Job) -> ProcessingResult<()> {
        self.tx
            .send(job)
            .map_err(|_| ProcessingError::channel("ジョブチャンネルの受信側が閉じています"))
    }
}

/// ジョブ受信側（全ワーカーで共有）
///
/// 受信側を Mutex で包み、複数ワーカーが同じキューから先着順に取り出す
#[derive(Debug, Clone)]
pub struct JobReceiver {
    rx: Arc<Mutex<mpsc::UnboundedReceiver<Job>>>,
}

impl JobReceiver {
    /// 次のジョブが来るまで待機
    ///
    /// 送信側が全て破棄され、キューが空の場合のみ None
    pub async fn pull(&self) -> Option<Job> {
        let mut rx = self.rx.lock().await;
        rx.recv().await
    }
}

/// 結果送信側（各ワーカーが複製を保持）
#[derive(Debug, Clone)]
pub struct ResultSender {
    tx: mpsc::UnboundedSender<WorkerEvent>,
}

impl ResultSender {
    /// 結果を投入（ブロックしない）
    pub fn push(&self, event: WorkerEvent) -> ProcessingResult<()> {
        self.tx
            .send(event)
            .map_err(|_| ProcessingError::channel("結果チャンネルの受信側が閉じています"))
    }
}

/// 結果受信側（コレクター専用）
#[derive(Debug)]
pub struct ResultReceiver {
    rx: mpsc::UnboundedReceiver<WorkerEvent>,
}

impl ResultReceiver {
    /// 次の結果が来るまで待機
    pub async fn pull(&mut self) -> Option<WorkerEvent> {
        self.rx.recv().await
    }
}

/// ジョブチャンネルを作成
pub fn job_channel() -> (JobSender, JobReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        JobSender { tx },
        JobReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

/// 結果チャンネルを作成
pub fn result_channel() -> (ResultSender, ResultReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ResultSender { tx }, ResultReceiver { rx })
}
