use crate::App;
use picganize::model::AddItemField;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_rect;

/// Centered modal form for adding a new item.
pub fn render_add_form(f: &mut Frame, app: &App) {
    let Some(form) = &app.model.ui.add_form else {
        return;
    };

    let area = centered_rect(54, 9, f.area());
    f.render_widget(Clear, area);

    let field_line = |label: &str, value: &str, field: AddItemField| {
        let focused = form.focus == field;
        let mut spans = vec![
            Span::styled(
                format!("{:<12}", label),
                if focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            ),
            Span::raw(value.to_string()),
        ];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    };

    let lines = vec![
        Line::from(""),
        field_line("name", &form.name, AddItemField::Name),
        field_line("location", &form.location, AddItemField::Location),
        field_line("photo path", &form.photo_path, AddItemField::PhotoPath),
        Line::from(""),
        Line::from(Span::styled(
            "tab next field · enter save · esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Add item "),
    );
    f.render_widget(dialog, area);
}
