//! 計測付きソートアルゴリズム（挿入ソート・バブルソート・クイックソート）
//!
//! 各ソートは `&mut [i32]` をその場で昇順に並べ替え、`OperationCounters` を返す。
//! `*_observed` 版は交換のたびに [`SortObserver`] を呼び出すので、
//! 可視化ワーカーはここから途中経過の配列を受け取る。

pub mod bubble;
pub mod insertion;
pub mod quick;

pub use bubble::{bubble_sort, bubble_sort_observed};
pub use insertion::{insertion_sort, insertion_sort_observed};
pub use quick::{quick_sort, quick_sort_observed};

use crate::stats::OperationCounters;
use std::fmt;

/// 交換（interchange）ごとに呼ばれるフック
pub trait SortObserver {
    /// `data` は交換直後の配列全体、`counters` はその時点までの累計
    fn on_interchange(&mut self, data: &[i32], counters: &OperationCounters);
}

/// 何もしないオブザーバ（ベンチマーク用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SortObserver for NoopObserver {
    #[inline]
    fn on_interchange(&mut self, _data: &[i32], _counters: &OperationCounters) {}
}

impl<F> SortObserver for F
where
    F: FnMut(&[i32], &OperationCounters),
{
    fn on_interchange(&mut self, data: &[i32], counters: &OperationCounters) {
        self(data, counters)
    }
}

/// 選択可能なソートアルゴリズム
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Insertion,
    Bubble,
    Quick,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Insertion => write!(f, "Linear Sort"),
            Algorithm::Bubble => write!(f, "Bubble Sort"),
            Algorithm::Quick => write!(f, "Quick Sort"),
        }
    }
}

impl Algorithm {
    pub fn all() -> [Algorithm; 3] {
        [Algorithm::Insertion, Algorithm::Bubble, Algorithm::Quick]
    }

    pub fn next(self) -> Algorithm {
        match self {
            Algorithm::Insertion => Algorithm::Bubble,
            Algorithm::Bubble => Algorithm::Quick,
            Algorithm::Quick => Algorithm::Insertion,
        }
    }

    pub fn prev(self) -> Algorithm {
        match self {
            Algorithm::Insertion => Algorithm::Quick,
            Algorithm::Bubble => Algorithm::Insertion,
            Algorithm::Quick => Algorithm::Bubble,
        }
    }

    /// コンソールレポートで使う見出し
    pub fn benchmark_label(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Linear (Insertion) Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// オブザーバなしでソート
    pub fn sort(self, data: &mut [i32]) -> OperationCounters {
        self.sort_observed(data, &mut NoopObserver)
    }

    /// 交換ごとに `observer` を呼びながらソート
    pub fn sort_observed<O: SortObserver + ?Sized>(
        self,
        data: &mut [i32],
        observer: &mut O,
    ) -> OperationCounters {
        match self {
            Algorithm::Insertion => insertion_sort_observed(data, observer),
            Algorithm::Bubble => bubble_sort_observed(data, observer),
            Algorithm::Quick => quick_sort_observed(data, observer),
        }
    }
}
