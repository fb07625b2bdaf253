// テストユーティリティ
// 統合テスト間で共有するチェッカー実装とヘルパー
#![allow(dead_code)]

pub mod checkers;

// 公開API
pub use checkers::*;

use prime_pool::services::MemoryResultReporter;

/// 報告された入力値を昇順で取得
pub fn reported_inputs(reporter: &MemoryResultReporter) -> Vec<i64> {
    let mut inputs: Vec<i64> = reporter.results().iter().map(|r| r.input).collect();
    inputs.sort();
    inputs
}
