use color_eyre::Result;
use color_eyre::eyre::eyre;
use sorting_comparison::{BenchmarkConfig, benchmark, logging};
use std::io::{self, Write};
use std::thread;

/// 整列済み入力でのクイックソートは要素数と同じ深さまで再帰するため、
/// 既定より大きいスタックのスレッドで計測する
const BENCHMARK_STACK_SIZE: usize = 256 * 1024 * 1024;

fn main() -> Result<()> {
    color_eyre::install()?;

    // ログは標準出力と混ざらないようファイルへ。ガードは main の終わりまで保持
    let _guard = logging::init_file_logging("benchmark.log")?;

    let config = BenchmarkConfig::new();
    let results = thread::Builder::new()
        .name("benchmark".into())
        .stack_size(BENCHMARK_STACK_SIZE)
        .spawn(move || benchmark::run_benchmark(&config))?
        .join()
        .map_err(|_| eyre!("benchmark thread panicked"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    benchmark::write_report(&mut out, &results)?;
    out.flush()?;
    Ok(())
}
