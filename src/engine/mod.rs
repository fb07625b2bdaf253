// エンジン層 - ジョブ配信・ワーカー・結果収集のオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod channel;
pub mod collector;
pub mod consumer;
mod pipeline;
pub mod processing_engine;
pub mod producer;

// 公開API - 主要エンジンクラス
pub use api::{create_processing_engine, create_quiet_processing_engine};
pub use channel::{job_channel, result_channel};
pub use collector::collect_results;
pub use consumer::spawn_worker;
pub use pipeline::ProcessingPipeline;
pub use processing_engine::ProcessingEngine;
pub use producer::start_jobs;
