use crate::core::{CheckResult, WorkItem};
use mockall::automock;
use std::fmt;
use std::time::Instant;

pub mod miller_rabin;
pub mod trial_division;

pub use miller_rabin::MillerRabinChecker;
pub use trial_division::TrialDivisionChecker;

/// 判定アルゴリズムの種類
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckAlgorithm {
    /// 奇数による試し割り（基準実装）
    #[default]
    TrialDivision,
    /// 64bit範囲で決定的なミラー・ラビン判定
    MillerRabin,
}

impl fmt::Display for CheckAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrialDivision => write!(f, "trial-division"),
            Self::MillerRabin => write!(f, "miller-rabin"),
        }
    }
}

/// 素数判定バックエンドのトレイト
///
/// 実装は純粋関数であること。同じ入力には常に同じ結果を返す。
#[automock]
pub trait PrimalityChecker: Send + Sync {
    /// nが素数かどうかを判定（i64全域で定義される）
    fn is_prime(&self, n: WorkItem) -> bool;

    /// アルゴリズムの名前を取得
    fn algorithm_name(&self) -> &'static str;
}

// PrimalityChecker for Box<dyn PrimalityChecker>
impl PrimalityChecker for Box<dyn PrimalityChecker> {
    fn is_prime(&self, n: WorkItem) -> bool {
        self.as_ref().is_prime(n)
    }

    fn algorithm_name(&self) -> &'static str {
        self.as_ref().algorithm_name()
    }
}

/// 判定を1回だけ実行し、判定部分のみの経過時間を付けて返す
pub fn check_timed<K>(checker: &K, n: WorkItem) -> CheckResult
where
    K: PrimalityChecker + ?Sized,
{
    let started = Instant::now();
    let is_prime = checker.is_prime(n);
    CheckResult::new(n, is_prime, started.elapsed())
}

/// アルゴリズム種別からチェッカーを作成
pub fn create_checker(algorithm: CheckAlgorithm) -> Box<dyn PrimalityChecker> {
    match algorithm {
        CheckAlgorithm::TrialDivision => Box::new(TrialDivisionChecker::new()),
        CheckAlgorithm::MillerRabin => Box::new(MillerRabinChecker::new()),
    }
}
