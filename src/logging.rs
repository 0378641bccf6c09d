//! ログ初期化
//!
//! 標準出力は使わず、`logs/` 以下の日次ローテーションファイルにだけ出力する。
//! TUI の描画やコンソールレポートと衝突させないため。

use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// ログディレクトリ
pub const LOG_DIR: &str = "logs";

/// `logs/<file_name>` へ出力する subscriber を登録する
///
/// 戻り値のガードは drop するとバッファ中のログが失われるため、
/// `main` の終わりまで保持すること。
pub fn init_file_logging(file_name: &str) -> Result<WorkerGuard> {
    let file_appender = rolling::daily(LOG_DIR, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // ファイルにANSIカラー不要
        .with_target(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}
