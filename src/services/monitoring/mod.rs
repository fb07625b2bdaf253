// 結果報告機能
// 判定結果の逐次表示、開始・完了の通知

pub mod implementations;

// 公開API
pub use implementations::{
    format_result_line, format_summary_line, ConsoleResultReporter, JsonLinesResultReporter,
    MemoryResultReporter, NoOpResultReporter,
};
