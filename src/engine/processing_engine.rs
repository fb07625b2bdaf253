// ProcessingEngine - 依存性注入によるワーカープールエンジン
// チェッカー・設定・報告先をコンストラクタで注入する

use super::pipeline::ProcessingPipeline;
use crate::{
    core::{PoolConfig, ProcessingResult, ResultReporter, RunSummary, WorkItem},
    primality::PrimalityChecker,
};
use std::sync::Arc;

/// 依存性注入によるワーカープールエンジン
///
/// ワーカー間で共有されるチェッカーは初期から Arc で管理する。
pub struct ProcessingEngine<K, C, R> {
    checker: Arc<K>,
    config: Arc<C>,
    reporter: Arc<R>,
}

impl<K, C, R> ProcessingEngine<K, C, R>
where
    K: PrimalityChecker + 'static,
    C: PoolConfig,
    R: ResultReporter,
{
    /// 新しいエンジンを作成
    pub fn new(checker: K, config: C, reporter: R) -> Self {
        Self {
            checker: Arc::new(checker),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
        }
    }

    /// バッチを判定してサマリーを返す
    pub async fn run(&self, batch: Vec<WorkItem>) -> ProcessingResult<RunSummary> {
        let pipeline = ProcessingPipeline::new(Arc::clone(&self.checker));
        pipeline
            .execute(batch, self.config.as_ref(), self.reporter.as_ref())
            .await
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// チェッカーへの参照を取得
    pub fn checker(&self) -> &K {
        &self.checker
    }
}
