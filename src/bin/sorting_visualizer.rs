use color_eyre::Result;
use sorting_comparison::{App, logging};

fn main() -> Result<()> {
    color_eyre::install()?;

    // ログ: 標準出力は使わず、ファイルへのみ出力してratatuiと衝突しないようにする
    let _guard = logging::init_file_logging("visualizer.log")?;

    let app = App::new();
    tracing::info!(target: "app", len = app.source.len(), "visualizer_start");

    let terminal = ratatui::init();
    let res = sorting_comparison::run(terminal, app);
    ratatui::restore();
    res
}
