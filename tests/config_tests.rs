use sorting_comparison::config::{
    BENCHMARK_ARRAY_SIZE, BENCHMARK_RANDOM_BOUND, BenchmarkConfig, VisualizerConfig,
};
mod common;

#[test]
fn benchmark_defaults() {
    common::init();
    let c = BenchmarkConfig::new();
    assert_eq!(c.array_size, 10_000);
    assert_eq!(c.random_bound, 10_000);
    assert_eq!(c.array_size, BENCHMARK_ARRAY_SIZE);
    assert_eq!(c.random_bound, BENCHMARK_RANDOM_BOUND);
}

#[test]
fn visualizer_defaults() {
    common::init();
    let c = VisualizerConfig::new();
    assert_eq!(c.array_size, 100);
    assert_eq!(c.max_value, 100);
    assert_eq!(c.step_delay_ms, 10);
    assert_eq!(c.poll_interval_ms, 50);
}
