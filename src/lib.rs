// 同階層のファイルをモジュールとしてインポート
pub mod app;
pub mod benchmark;
pub mod config;
pub mod event;
pub mod generate;
pub mod logging;
pub mod sorts;
pub mod stats;
pub mod ui;
pub mod worker;

pub use app::App;
pub use config::{BenchmarkConfig, VisualizerConfig};
pub use generate::ArrayKind;
pub use sorts::Algorithm;
pub use stats::OperationCounters;

use color_eyre::Result;
use crossterm::event::{self as crossterm_event, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

/// 可視化アプリのメインループを実行
///
/// 描画はこのスレッドだけが行う。ワーカーの結果は `check_worker` で取り込む。
pub fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    let poll_interval = Duration::from_millis(app.config.poll_interval_ms);

    loop {
        // ワーカーからの最新スナップショットを反映
        app.check_worker();

        terminal.draw(|f| ui::render(f, &app))?;

        if crossterm_event::poll(poll_interval)? {
            match crossterm_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if event::handle_key(&mut app, key)? {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // 次ループで再描画されるので特別な処理なし
                }
                _ => {}
            }
        }
    }
    Ok(())
}
