// テスト用のチェッカー実装

use prime_pool::primality::{PrimalityChecker, TrialDivisionChecker};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::ThreadId;
use std::time::Duration;

/// 呼び出し回数と処理スレッドを記録するチェッカー
///
/// クローンは同じ記録を共有する
#[derive(Clone, Default)]
pub struct RecordingChecker {
    calls: Arc<AtomicUsize>,
    per_input: Arc<Mutex<HashMap<i64, usize>>>,
    threads: Arc<Mutex<Vec<ThreadId>>>,
    delay: Option<Duration>,
}

impl RecordingChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 判定ごとに指定時間スリープする（並列性の確認用）
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 入力値ごとの呼び出し回数
    pub fn calls_for(&self, n: i64) -> usize {
        self.per_input
            .lock()
            .unwrap()
            .get(&n)
            .copied()
            .unwrap_or(0)
    }

    pub fn distinct_threads(&self) -> usize {
        let threads = self.threads.lock().unwrap();
        threads.iter().collect::<HashSet<_>>().len()
    }
}

impl PrimalityChecker for RecordingChecker {
    fn is_prime(&self, n: i64) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.per_input.lock().unwrap().entry(n).or_insert(0) += 1;
        self.threads
            .lock()
            .unwrap()
            .push(std::thread::current().id());
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        TrialDivisionChecker::new().is_prime(n)
    }

    fn algorithm_name(&self) -> &'static str {
        "recording"
    }
}

/// 特定の入力でパニックするチェッカー（ワーカー異常終了の再現用）
#[derive(Clone, Copy)]
pub struct CrashingChecker {
    pub crash_on: i64,
}

impl PrimalityChecker for CrashingChecker {
    fn is_prime(&self, n: i64) -> bool {
        if n == self.crash_on {
            panic!("checker crashed on {n}");
        }
        TrialDivisionChecker::new().is_prime(n)
    }

    fn algorithm_name(&self) -> &'static str {
        "crashing"
    }
}
