//! 挿入ソート（"Linear Sort"）

use super::{NoopObserver, SortObserver};
use crate::stats::OperationCounters;

/// 挿入ソート
///
/// 比較はシフトが起きたときだけ数える（ループ条件が偽になった比較は数えない）。
/// 交換はシフト1回ごとに1、`key` の最終配置で必ず1（位置が変わらなくても）数える。
pub fn insertion_sort(data: &mut [i32]) -> OperationCounters {
    insertion_sort_observed(data, &mut NoopObserver)
}

pub fn insertion_sort_observed<O: SortObserver + ?Sized>(
    data: &mut [i32],
    observer: &mut O,
) -> OperationCounters {
    let mut counters = OperationCounters::new();

    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            counters.record_comparison();
            data[j] = data[j - 1];
            j -= 1;
            counters.record_interchange();
            observer.on_interchange(data, &counters);
        }
        data[j] = key;
        counters.record_interchange();
        observer.on_interchange(data, &counters);
    }

    counters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_traced_small_input() {
        let mut v = vec![5, 3, 8, 4, 2];
        let c = insertion_sort(&mut v);
        assert_eq!(v, vec![2, 3, 4, 5, 8]);
        // シフト7回（= 転倒数）、配置4回
        assert_eq!(c.comparisons, 7);
        assert_eq!(c.interchanges, 11);
    }

    #[test]
    fn sorted_input_only_places() {
        let mut v: Vec<i32> = (0..10).collect();
        let c = insertion_sort(&mut v);
        assert_eq!(c.comparisons, 0);
        assert_eq!(c.interchanges, 9);
    }

    #[test]
    fn equal_keys_are_not_shifted() {
        let mut v = vec![2, 2, 2];
        let c = insertion_sort(&mut v);
        assert_eq!(c, OperationCounters { comparisons: 0, interchanges: 2 });
    }
}
