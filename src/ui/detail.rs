use crate::{now_ms, App, PhotoPreviewState};
use picganize::logic::time::{format_relative_time, found_label};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use ratatui_image::StatefulImage;

pub fn render_detail(f: &mut Frame, app: &mut App, item_id: &str) {
    let Some(item) = app.model.catalog.item_by_id(item_id).cloned() else {
        // Snapshot changed under us (e.g. reload dropped the item)
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Item not found", Style::default().fg(Color::Red))),
            Line::from(Span::styled(
                "Press Esc to go back",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(msg, f.area());
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Min(8)])
        .split(f.area());

    render_photo(f, app, item.photo_path.as_deref(), chunks[0]);
    render_info(f, app, &item, chunks[1]);
}

fn render_photo(f: &mut Frame, app: &mut App, photo_path: Option<&str>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" photo ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let placeholder = |text: &str, color: Color| {
        Paragraph::new(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Center)
    };

    let Some(path) = photo_path else {
        f.render_widget(placeholder("No photo", Color::DarkGray), inner);
        return;
    };

    match app.photo_states.get_mut(path) {
        Some(PhotoPreviewState::Ready { protocol }) => {
            f.render_stateful_widget(StatefulImage::default(), inner, protocol);
        }
        Some(PhotoPreviewState::Loading) => {
            f.render_widget(placeholder("Loading photo...", Color::DarkGray), inner);
        }
        Some(PhotoPreviewState::Failed { reason }) => {
            let reason = reason.clone();
            f.render_widget(placeholder(&reason, Color::Red), inner);
        }
        None => {
            f.render_widget(placeholder("Photo preview disabled", Color::DarkGray), inner);
        }
    }
}

fn render_info(f: &mut Frame, app: &App, item: &picganize::model::Item, area: Rect) {
    let now = now_ms();
    let mut lines = vec![
        Line::from(Span::styled(
            item.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(location) = &item.location {
        lines.push(Line::from(vec![
            Span::styled("location  ", Style::default().fg(Color::DarkGray)),
            Span::raw(location.clone()),
        ]));
    }
    if let Some(created) = item.created_at {
        lines.push(Line::from(vec![
            Span::styled("added     ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_relative_time(created, now)),
        ]));
    }
    if let Some(label) = found_label(item.found_at, now) {
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(found) = item.found_at {
        lines.push(Line::from(vec![
            Span::styled("last found ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_relative_time(found, now)),
        ]));
    }
    if let Some(count) = item.found_count {
        if count > 0 {
            lines.push(Line::from(vec![
                Span::styled("found      ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("{} time{}", count, if count == 1 { "" } else { "s" })),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if app.model.ui.vim_mode {
            "f mark found · h/esc back · q quit"
        } else {
            "f mark found · esc back · q quit"
        },
        Style::default().fg(Color::DarkGray),
    )));

    let info = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(info, area);
}
