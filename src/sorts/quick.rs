//! クイックソート（Lomuto 分割、各部分範囲の末尾をピボットにする）
//!
//! 再帰の深さは分割の深さそのまま。整列済み入力では N 段になる。

use super::{NoopObserver, SortObserver};
use crate::stats::OperationCounters;

pub fn quick_sort(data: &mut [i32]) -> OperationCounters {
    quick_sort_observed(data, &mut NoopObserver)
}

pub fn quick_sort_observed<O: SortObserver + ?Sized>(
    data: &mut [i32],
    observer: &mut O,
) -> OperationCounters {
    let mut counters = OperationCounters::new();
    if data.len() > 1 {
        let high = data.len() - 1;
        sort_range(data, 0, high, &mut counters, observer);
    }
    counters
}

/// `[low, high]`（両端含む）を整列する。カウンタは呼び出し木全体で共有。
fn sort_range<O: SortObserver + ?Sized>(
    data: &mut [i32],
    low: usize,
    high: usize,
    counters: &mut OperationCounters,
    observer: &mut O,
) {
    if low >= high {
        return;
    }
    let p = partition(data, low, high, counters, observer);
    if p > low {
        sort_range(data, low, p - 1, counters, observer);
    }
    sort_range(data, p + 1, high, counters, observer);
}

/// ピボット `data[high]` の最終位置を返す
fn partition<O: SortObserver + ?Sized>(
    data: &mut [i32],
    low: usize,
    high: usize,
    counters: &mut OperationCounters,
    observer: &mut O,
) -> usize {
    let pivot = data[high];
    // boundary より左はピボット以下
    let mut boundary = low;
    for j in low..high {
        counters.record_comparison();
        if data[j] <= pivot {
            data.swap(boundary, j);
            boundary += 1;
            counters.record_interchange();
            observer.on_interchange(data, counters);
        }
    }
    data.swap(boundary, high);
    counters.record_interchange();
    observer.on_interchange(data, counters);
    boundary
}
