//! イベント処理モジュール

use crate::app::App;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// キーイベントを処理
///
/// # Returns
/// - `Ok(true)` - アプリケーションを終了
/// - `Ok(false)` - 処理を継続
/// - `Err(_)` - ワーカースレッドを起動できなかった
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc if app.dropdown_open => app.dropdown_open = false,
        KeyCode::Esc | KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
        KeyCode::Tab | KeyCode::Char('d') => app.toggle_dropdown(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter if app.dropdown_open => app.dropdown_open = false,
        KeyCode::Enter | KeyCode::Char('s') => {
            app.dropdown_open = false;
            app.start_sort()?;
        }
        KeyCode::Char('r') => app.regenerate(),
        _ => {}
    }
    Ok(false)
}
