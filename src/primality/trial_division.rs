// 試し割りによる素数判定

use super::PrimalityChecker;
use crate::core::WorkItem;

/// 奇数による試し割りチェッカー
#[derive(Debug, Default, Clone, Copy)]
pub struct TrialDivisionChecker;

impl TrialDivisionChecker {
    pub fn new() -> Self {
        Self
    }
}

impl PrimalityChecker for TrialDivisionChecker {
    fn is_prime(&self, n: WorkItem) -> bool {
        if n < 2 {
            return false;
        }
        if n == 2 {
            return true;
        }
        if n % 2 == 0 {
            return false;
        }

        // d <= n / d は d*d <= n と同値（オーバーフローしない）
        let mut divisor = 3;
        while divisor <= n / divisor {
            if n % divisor == 0 {
                return false;
            }
            divisor += 2;
        }
        true
    }

    fn algorithm_name(&self) -> &'static str {
        "trial-division"
    }
}
