//! バブルソート

use super::{NoopObserver, SortObserver};
use crate::stats::OperationCounters;

/// バブルソート（1パスで交換が無ければ打ち切り）
pub fn bubble_sort(data: &mut [i32]) -> OperationCounters {
    bubble_sort_observed(data, &mut NoopObserver)
}

pub fn bubble_sort_observed<O: SortObserver + ?Sized>(
    data: &mut [i32],
    observer: &mut O,
) -> OperationCounters {
    let mut counters = OperationCounters::new();
    let n = data.len();

    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            counters.record_comparison();
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
                counters.record_interchange();
                observer.on_interchange(data, &counters);
            }
        }
        if !swapped {
            break;
        }
    }

    counters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_traced_small_input() {
        let mut v = vec![5, 3, 8, 4, 2];
        let c = bubble_sort(&mut v);
        assert_eq!(v, vec![2, 3, 4, 5, 8]);
        assert_eq!(c.comparisons, 4 + 3 + 2 + 1);
        assert_eq!(c.interchanges, 7);
    }

    #[test]
    fn sorted_input_takes_one_pass() {
        let mut v: Vec<i32> = (0..50).collect();
        let c = bubble_sort(&mut v);
        assert_eq!(c.comparisons, 49);
        assert_eq!(c.interchanges, 0);
    }

    #[test]
    fn stops_after_first_clean_pass() {
        // 1パス目で整列済みになり、2パス目（3比較）で打ち切る
        let mut v = vec![2, 1, 3, 4, 5];
        let c = bubble_sort(&mut v);
        assert_eq!(v, vec![1, 2, 3, 4, 5]);
        assert_eq!(c.comparisons, 4 + 3);
        assert_eq!(c.interchanges, 1);
    }
}
