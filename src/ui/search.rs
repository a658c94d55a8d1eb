use crate::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Search input bar with a live match count.
pub fn render_search_input(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.model.ui.search_mode;
    let query = &app.model.ui.search_query;

    let mut spans = vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::raw(query.clone()),
    ];
    if editing {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    if !query.trim().is_empty() {
        let count = app.search_match_count();
        spans.push(Span::styled(
            format!(
                "  ({} match{})",
                count,
                if count == 1 { "" } else { "es" }
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let border_color = if editing { Color::Yellow } else { Color::DarkGray };
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);
}
