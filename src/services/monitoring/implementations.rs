// 結果報告の具象実装

use crate::core::{CheckResult, ResultReporter, RunSummary};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// 結果1件分の表示行（例: `             2  P  0.000001s`）
pub fn format_result_line(result: &CheckResult) -> String {
    let label = if result.is_prime { 'P' } else { ' ' };
    format!(
        "{:16}  {label} {:9.6}s",
        result.input,
        result.elapsed.as_secs_f64()
    )
}

/// 実行全体の表示行（例: `20 checks in 3.14s`）
pub fn format_summary_line(summary: &RunSummary) -> String {
    format!(
        "{} checks in {:.2}s",
        summary.checked,
        summary.elapsed.as_secs_f64()
    )
}

/// コンソール出力による結果報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleResultReporter;

impl ConsoleResultReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultReporter for ConsoleResultReporter {
    async fn report_started(&self, total_jobs: usize, workers: usize) {
        println!("Checking {total_jobs} numbers with {workers} workers:");
    }

    async fn report_result(&self, result: &CheckResult) {
        println!("{}", format_result_line(result));
    }

    async fn report_completed(&self, summary: &RunSummary) {
        println!("{}", format_summary_line(summary));
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonEvent<'a> {
    Started { total_jobs: usize, workers: usize },
    Result(&'a CheckResult),
    Completed(&'a RunSummary),
}

/// 1行1イベントのJSON出力による結果報告実装
#[derive(Debug, Default, Clone)]
pub struct JsonLinesResultReporter;

impl JsonLinesResultReporter {
    pub fn new() -> Self {
        Self
    }

    fn emit(&self, event: &JsonEvent<'_>) {
        match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!(error = %e, "JSONへの変換に失敗しました"),
        }
    }
}

#[async_trait]
impl ResultReporter for JsonLinesResultReporter {
    async fn report_started(&self, total_jobs: usize, workers: usize) {
        self.emit(&JsonEvent::Started {
            total_jobs,
            workers,
        });
    }

    async fn report_result(&self, result: &CheckResult) {
        self.emit(&JsonEvent::Result(result));
    }

    async fn report_completed(&self, summary: &RunSummary) {
        self.emit(&JsonEvent::Completed(summary));
    }
}

/// 何もしない結果報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpResultReporter;

impl NoOpResultReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultReporter for NoOpResultReporter {
    async fn report_started(&self, _total_jobs: usize, _workers: usize) {
        // 何もしない
    }

    async fn report_result(&self, _result: &CheckResult) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &RunSummary) {
        // 何もしない
    }
}

/// メモリ上に結果を保持する報告実装
///
/// クローンは同じ記録を共有する
#[derive(Debug, Default, Clone)]
pub struct MemoryResultReporter {
    started: Arc<Mutex<Option<(usize, usize)>>>,
    results: Arc<Mutex<Vec<CheckResult>>>,
    summary: Arc<Mutex<Option<RunSummary>>>,
}

impl MemoryResultReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 開始時に報告された (ジョブ数, ワーカー数)
    pub fn started(&self) -> Option<(usize, usize)> {
        *self.started.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// 到着順の結果一覧
    pub fn results(&self) -> Vec<CheckResult> {
        self.results
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn summary(&self) -> Option<RunSummary> {
        self.summary
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl ResultReporter for MemoryResultReporter {
    async fn report_started(&self, total_jobs: usize, workers: usize) {
        *self.started.lock().unwrap_or_else(|e| e.into_inner()) = Some((total_jobs, workers));
    }

    async fn report_result(&self, result: &CheckResult) {
        self.results
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(*result);
    }

    async fn report_completed(&self, summary: &RunSummary) {
        *self.summary.lock().unwrap_or_else(|e| e.into_inner()) = Some(summary.clone());
    }
}
