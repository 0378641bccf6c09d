//! UI描画モジュール

use crate::app::App;
use crate::benchmark::duration_ms;
use crate::sorts::Algorithm;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, Paragraph};

/// メインUI描画関数
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // ヘッダ
            Constraint::Min(5),    // 棒グラフ
            Constraint::Length(3), // 操作パネル
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_chart(f, app, chunks[1]);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // アルゴリズム選択
            Constraint::Length(14), // 開始ボタン
            Constraint::Min(20),    // 実行時間
            Constraint::Min(18),    // 比較回数
            Constraint::Min(18),    // 交換回数
        ])
        .split(chunks[2]);

    render_algorithm_box(f, app, controls[0]);
    render_start_button(f, app, controls[1]);
    render_labels(f, app, &controls[2..]);

    if app.dropdown_open {
        render_dropdown(f, app, controls[0]);
    }
}

/// ヘッダー/ガイド部分を描画
fn render_header(f: &mut Frame, area: Rect) {
    let guide = Line::from(vec![
        "Sorting Algorithm Visualizer".bold(),
        "  Tab: algorithm / Enter or s: start / r: new array / Esc or q: quit".into(),
    ]);
    let widget = Paragraph::new(guide).block(Block::default().borders(Borders::ALL).title("Guide"));
    f.render_widget(widget, area);
}

/// 配列を棒グラフとして描画
fn render_chart(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Array ({} values)", app.display.len()));
    let inner = block.inner(area);

    let bars: Vec<Bar> = bar_columns(&app.display, inner.width as usize)
        .into_iter()
        .map(|v| Bar::default().value(v).text_value(String::new()))
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Cyan))
        .max(app.config.max_value.max(1) as u64)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

/// 表示幅に収まるよう列を等間隔に間引いて棒の高さを返す
///
/// 負の値は高さ 0 として扱う。
pub fn bar_columns(data: &[i32], width: usize) -> Vec<u64> {
    let to_height = |v: &i32| (*v).max(0) as u64;
    if width == 0 {
        return Vec::new();
    }
    if data.len() <= width {
        return data.iter().map(to_height).collect();
    }
    (0..width).map(|col| to_height(&data[col * data.len() / width])).collect()
}

/// 選択中のアルゴリズム（ドロップダウンの閉じた状態）
fn render_algorithm_box(f: &mut Frame, app: &App, area: Rect) {
    let marker = if app.dropdown_open { "▲" } else { "▼" };
    let widget = Paragraph::new(format!("{} {}", app.selected, marker))
        .block(Block::default().borders(Borders::ALL).title("Algorithm"));
    f.render_widget(widget, area);
}

fn render_start_button(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.pending {
        ("Sorting...", Style::default().fg(Color::Yellow))
    } else {
        ("[ Start ]", Style::default().fg(Color::Green).bold())
    };
    let widget = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

/// 実行時間・比較回数・交換回数のラベル
fn render_labels(f: &mut Frame, app: &App, areas: &[Rect]) {
    let runtime = match app.runtime() {
        Some(d) => format!("Runtime: {} ms", duration_ms(d)),
        None => "Runtime: ".to_string(),
    };
    let started = app.pending || app.last_run.is_some();
    let comparisons = if started {
        format!("Comparisons: {}", app.live_counters.comparisons)
    } else {
        "Comparisons: ".to_string()
    };
    let interchanges = if started {
        format!("Interchanges: {}", app.live_counters.interchanges)
    } else {
        "Interchanges: ".to_string()
    };

    for (text, area) in [runtime, comparisons, interchanges].into_iter().zip(areas) {
        let widget = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, *area);
    }
}

/// 開いたドロップダウンを選択欄の上に重ねて描画
fn render_dropdown(f: &mut Frame, app: &App, anchor: Rect) {
    let height = Algorithm::all().len() as u16 + 2;
    let popup = Rect {
        x: anchor.x,
        y: anchor.y.saturating_sub(height),
        width: anchor.width,
        height: height.min(anchor.y),
    };

    let items: Vec<ListItem> = Algorithm::all()
        .iter()
        .map(|a| {
            let is_selected = *a == app.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::White).bg(Color::Blue).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{prefix}{a}")).style(style)
        })
        .collect();

    f.render_widget(Clear, popup);
    f.render_widget(List::new(items).block(Block::default().borders(Borders::ALL)), popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_area_samples_evenly() {
        let data: Vec<i32> = (0..10).collect();
        assert_eq!(bar_columns(&data, 5), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn wide_area_keeps_every_value() {
        assert_eq!(bar_columns(&[3, -1, 2], 80), vec![3, 0, 2]);
        assert!(bar_columns(&[1, 2], 0).is_empty());
    }
}
