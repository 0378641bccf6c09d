//! ベンチマークハーネス: 配列の種類 × アルゴリズムを順に計測してレポートを書く

use crate::config::BenchmarkConfig;
use crate::generate::ArrayKind;
use crate::sorts::Algorithm;
use crate::stats::OperationCounters;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// 1回のソートの計測結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub array_kind: ArrayKind,
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub counters: OperationCounters,
}

impl BenchmarkResult {
    /// 経過時間（ミリ秒、小数）
    pub fn runtime_ms(&self) -> f64 {
        duration_ms(self.elapsed)
    }
}

/// ナノ秒を 1e6 で割ったミリ秒
pub fn duration_ms(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1e6
}

/// `input` のコピーを `algorithm` でソートし、時間とカウンタを返す
pub fn time_sort(algorithm: Algorithm, input: &[i32]) -> (Duration, OperationCounters) {
    let mut data = input.to_vec();
    let start = Instant::now();
    let counters = algorithm.sort(&mut data);
    let elapsed = start.elapsed();

    if !data.is_sorted() {
        warn!(target: "benchmark", %algorithm, len = data.len(), "result_not_sorted");
    }
    (elapsed, counters)
}

/// 同じ入力を3アルゴリズムそれぞれのコピーで計測
pub fn compare_algorithms(array_kind: ArrayKind, input: &[i32]) -> Vec<BenchmarkResult> {
    Algorithm::all()
        .into_iter()
        .map(|algorithm| {
            let (elapsed, counters) = time_sort(algorithm, input);
            debug!(
                target: "benchmark",
                %array_kind, %algorithm, ?elapsed, %counters,
                "sort_measured"
            );
            BenchmarkResult { array_kind, algorithm, elapsed, counters }
        })
        .collect()
}

/// 全ての配列種類について比較を実行
pub fn run_benchmark(config: &BenchmarkConfig) -> Vec<BenchmarkResult> {
    info!(
        target: "benchmark",
        array_size = config.array_size,
        random_bound = config.random_bound,
        "benchmark_start"
    );
    let mut results = Vec::with_capacity(9);
    for kind in ArrayKind::all() {
        let input = kind.generate(config.array_size, config.random_bound);
        results.extend(compare_algorithms(kind, &input));
    }
    info!(target: "benchmark", runs = results.len(), "benchmark_done");
    results
}

/// 結果をコンソール形式で書き出す
///
/// 結果は配列種類ごとに連続して並んでいる前提（`run_benchmark` の出力順）。
pub fn write_report<W: Write>(out: &mut W, results: &[BenchmarkResult]) -> io::Result<()> {
    writeln!(out, "Comparing sorting algorithms on different types of arrays...")?;
    writeln!(out)?;

    let mut current: Option<ArrayKind> = None;
    for r in results {
        if current != Some(r.array_kind) {
            if current.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "Array Type: {}", r.array_kind)?;
            current = Some(r.array_kind);
        }
        writeln!(out, "{}:", r.algorithm.benchmark_label())?;
        writeln!(out, "Runtime: {} ms", r.runtime_ms())?;
        writeln!(out, "Comparisons: {}", r.counters.comparisons)?;
        writeln!(out, "Interchanges: {}", r.counters.interchanges)?;
        writeln!(out)?;
    }
    if current.is_some() {
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_sort_leaves_input_untouched() {
        let input = vec![3, 2, 1];
        let (_, c) = time_sort(Algorithm::Bubble, &input);
        assert_eq!(input, vec![3, 2, 1]);
        assert_eq!(c, OperationCounters { comparisons: 3, interchanges: 3 });
    }

    #[test]
    fn runtime_ms_is_fractional() {
        let r = BenchmarkResult {
            array_kind: ArrayKind::Sorted,
            algorithm: Algorithm::Quick,
            elapsed: Duration::from_micros(1_500),
            counters: OperationCounters::new(),
        };
        assert!((r.runtime_ms() - 1.5).abs() < 1e-9);
    }
}
