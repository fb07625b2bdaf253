// ミラー・ラビン法による素数判定
// 最初の12個の素数を底にすると 2^64 未満で決定的になる

use super::PrimalityChecker;
use crate::core::WorkItem;

const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// 64bit範囲で決定的なミラー・ラビン判定
#[derive(Debug, Default, Clone, Copy)]
pub struct MillerRabinChecker;

impl MillerRabinChecker {
    pub fn new() -> Self {
        Self
    }
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

impl PrimalityChecker for MillerRabinChecker {
    fn is_prime(&self, n: WorkItem) -> bool {
        if n < 2 {
            return false;
        }
        let n = n as u64;
        for p in WITNESSES {
            if n % p == 0 {
                return n == p;
            }
        }

        // n - 1 = d * 2^s
        let s = (n - 1).trailing_zeros();
        let d = (n - 1) >> s;

        'witness: for a in WITNESSES {
            let mut x = pow_mod(a, d, n);
            if x == 1 || x == n - 1 {
                continue;
            }
            for _ in 1..s {
                x = mul_mod(x, x, n);
                if x == n - 1 {
                    continue 'witness;
                }
            }
            return false;
        }
        true
    }

    fn algorithm_name(&self) -> &'static str {
        "miller-rabin"
    }
}
