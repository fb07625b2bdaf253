// 組み込みの判定対象バッチ

use crate::core::WorkItem;

/// 引数で数値が指定されなかった場合に判定するバッチ
pub const DEFAULT_BATCH: [WorkItem; 20] = [
    2,
    3_333_333_333_333_333,
    4_444_444_444_444_444,
    5_555_555_555_555_555,
    6_666_666_666_666_666,
    142_702_110_479_723,
    7_777_777_777_777_777,
    299_593_572_317_531,
    9_999_999_999_999_999,
    3_333_333_333_333_301,
    3_333_335_652_092_209,
    4_444_444_488_888_889,
    4_444_444_444_444_423,
    5_555_553_133_149_889,
    5_555_555_555_555_503,
    6_666_666_666_666_719,
    6_666_667_141_414_921,
    7_777_777_536_340_681,
    7_777_777_777_777_753,
    9_999_999_999_999_917,
];

/// 指定がなければ組み込みバッチを使う
pub fn resolve_batch(numbers: Vec<WorkItem>) -> Vec<WorkItem> {
    if numbers.is_empty() {
        DEFAULT_BATCH.to_vec()
    } else {
        numbers
    }
}
