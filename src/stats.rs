//! 比較回数・交換回数のカウンタ

use std::fmt;

/// ソート1回分の操作カウンタ
///
/// ソート開始時にゼロで作られ、ソート中は増加のみ。完了時に値としてコピーして返す。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationCounters {
    /// 要素同士の比較回数（アルゴリズムごとの数え方に従う）
    pub comparisons: u64,
    /// 要素の移動回数（swap / shift / 配置）
    pub interchanges: u64,
}

impl OperationCounters {
    /// ゼロから始まるカウンタを作成
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub fn record_interchange(&mut self) {
        self.interchanges += 1;
    }
}

impl fmt::Display for OperationCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons={} interchanges={}",
            self.comparisons, self.interchanges
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_only_grows() {
        let mut c = OperationCounters::new();
        assert_eq!(c, OperationCounters { comparisons: 0, interchanges: 0 });
        c.record_comparison();
        c.record_comparison();
        c.record_interchange();
        assert_eq!(c.comparisons, 2);
        assert_eq!(c.interchanges, 1);
        assert_eq!(c.to_string(), "comparisons=2 interchanges=1");
    }
}
