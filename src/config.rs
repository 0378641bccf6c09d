//! アプリケーション設定と定数
//!
//! 外部設定ファイルは持たない。値はすべてコンパイル時の既定値。

/// コンソールベンチマークの配列長
pub const BENCHMARK_ARRAY_SIZE: usize = 10_000;

/// ランダム配列の上限（この値は含まない）
pub const BENCHMARK_RANDOM_BOUND: i32 = 10_000;

/// ベンチマーク設定
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// 各配列の要素数
    pub array_size: usize,
    /// ランダム配列の値域 `[0, random_bound)`
    pub random_bound: i32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            array_size: BENCHMARK_ARRAY_SIZE,
            random_bound: BENCHMARK_RANDOM_BOUND,
        }
    }
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 可視化設定
#[derive(Debug, Clone)]
pub struct VisualizerConfig {
    /// 棒グラフの本数
    pub array_size: usize,
    /// 値域 `[0, max_value)`。棒の高さの上限にも使う
    pub max_value: i32,
    /// 交換1回ごとの待ち時間（ミリ秒）
    pub step_delay_ms: u64,
    /// イベントポーリング間隔（ミリ秒）
    pub poll_interval_ms: u64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            // NOTE: Keep in sync with tests (tests/config_tests.rs).
            array_size: 100,
            max_value: 100,
            step_delay_ms: 10,
            poll_interval_ms: 50,
        }
    }
}

impl VisualizerConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
