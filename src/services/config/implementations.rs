// 設定管理の具象実装

use crate::core::PoolConfig;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPoolConfig {
    workers: usize,
    trace_channel_ops: bool,
}

impl DefaultPoolConfig {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            workers: cpu_count.max(1),
            trace_channel_ops: false,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_channel_tracing(mut self, enable: bool) -> Self {
        self.trace_channel_ops = enable;
        self
    }
}

impl Default for DefaultPoolConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl PoolConfig for DefaultPoolConfig {
    fn worker_count(&self) -> usize {
        self.workers
    }

    fn trace_channel_ops(&self) -> bool {
        self.trace_channel_ops
    }
}
