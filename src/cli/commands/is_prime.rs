use crate::core::{CheckResult, WorkItem};
use crate::primality::{check_timed, create_checker, CheckAlgorithm};
use crate::services::monitoring::format_result_line;

/// is-prime コマンドを実行（ワーカープールを使わず1件だけ判定）
pub fn execute_is_prime(number: WorkItem, algorithm: CheckAlgorithm) -> CheckResult {
    let checker = create_checker(algorithm);
    let result = check_timed(checker.as_ref(), number);
    println!("{}", format_result_line(&result));
    result
}
