//! 入力配列の生成（ランダム・昇順・降順）

use rand::{Rng, thread_rng};
use std::fmt;

/// `[0, bound)` の一様乱数で長さ `size` の配列を作る
///
/// `bound <= 0` は検査しない（`rand` 側で panic する）。
pub fn random_array(size: usize, bound: i32) -> Vec<i32> {
    random_array_with(&mut thread_rng(), size, bound)
}

/// 乱数生成器を指定する版（テストでシードを固定するため）
pub fn random_array_with<R: Rng>(rng: &mut R, size: usize, bound: i32) -> Vec<i32> {
    (0..size).map(|_| rng.gen_range(0..bound)).collect()
}

/// `0, 1, ..., size-1`
pub fn sorted_array(size: usize) -> Vec<i32> {
    (0..size).map(|i| i as i32).collect()
}

/// `size, size-1, ..., 1`（0 ではなく 1 で終わる）
pub fn inversely_sorted_array(size: usize) -> Vec<i32> {
    (0..size).map(|i| (size - i) as i32).collect()
}

/// ベンチマーク対象の配列の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    Random,
    Sorted,
    InverselySorted,
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayKind::Random => write!(f, "Random Array"),
            ArrayKind::Sorted => write!(f, "Sorted Array"),
            ArrayKind::InverselySorted => write!(f, "Inversely Sorted Array"),
        }
    }
}

impl ArrayKind {
    pub fn all() -> [ArrayKind; 3] {
        [ArrayKind::Random, ArrayKind::Sorted, ArrayKind::InverselySorted]
    }

    /// `random_bound` は `Random` のときだけ使う
    pub fn generate(self, size: usize, random_bound: i32) -> Vec<i32> {
        match self {
            ArrayKind::Random => random_array(size, random_bound),
            ArrayKind::Sorted => sorted_array(size),
            ArrayKind::InverselySorted => inversely_sorted_array(size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn descending_ends_at_one() {
        assert_eq!(inversely_sorted_array(4), vec![4, 3, 2, 1]);
        assert!(inversely_sorted_array(0).is_empty());
    }

    #[test]
    fn ascending_starts_at_zero() {
        assert_eq!(sorted_array(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let v = random_array_with(&mut rng, 1_000, 10);
        assert_eq!(v.len(), 1_000);
        assert!(v.iter().all(|x| (0..10).contains(x)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = random_array_with(&mut StdRng::seed_from_u64(42), 32, 100);
        let b = random_array_with(&mut StdRng::seed_from_u64(42), 32, 100);
        assert_eq!(a, b);
    }
}
