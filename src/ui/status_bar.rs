use crate::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Single-line status bar: item count, sort mode, key hints.
pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let total = app.model.catalog.items.len();
    let count = if app.model.ui.search_query.trim().is_empty() {
        format!("{} item{}", total, if total == 1 { "" } else { "s" })
    } else {
        format!("{}/{} items", app.search_match_count(), total)
    };

    let hints = if app.model.ui.vim_mode {
        "a add · s sort · / search · f found · r reload · enter open · q quit"
    } else {
        "a add · s sort · ctrl-f search · f found · r reload · enter open · q quit"
    };

    let line = Line::from(vec![
        Span::styled(count, Style::default().fg(Color::Gray)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("sort: {}", app.model.ui.sort_mode.display_label()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
