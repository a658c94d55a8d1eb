use crate::{now_ms, App};
use picganize::logic::sections::ListEntry;
use picganize::logic::time::{format_relative_time, found_label};
use picganize::model::Item;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::{layout, search, status_bar};

/// A bordered card with three content lines
const CARD_HEIGHT: u16 = 5;
const HEADER_HEIGHT: u16 = 1;
const ROW_GAP: u16 = 1;

pub fn render_library(f: &mut Frame, app: &mut App) {
    let show_search = app.model.ui.search_mode || !app.model.ui.search_query.is_empty();
    let layout = layout::compute_layout(f.area(), show_search);

    render_header(f, app, layout.header_area);
    if let Some(search_area) = layout.search_area {
        search::render_search_input(f, app, search_area);
    }

    if app.model.is_loading() {
        // Blank frame until both loads have answered, so the grid never
        // flashes wrongly-sorted content
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        )))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(loading, layout.content_area);
    } else {
        render_grid(f, app, layout.content_area);
    }

    status_bar::render_status_bar(f, app, layout.status_area);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " picganize ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("sort: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.model.ui.sort_mode.display_label(),
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let entries = app.current_list_entries();

    if entries.is_empty() {
        render_empty_state(f, app, area);
        return;
    }

    ensure_selection_visible(app, &entries, area.height);

    let selected = app.model.navigation.selected;
    let selected_col = app.model.navigation.selected_col;
    let card_width = area.width.saturating_sub(1) / 2;

    let mut y = area.y;
    for (idx, entry) in entries
        .iter()
        .enumerate()
        .skip(app.model.navigation.scroll_offset)
    {
        let height = entry_height(entry);
        if y + height > area.y + area.height {
            break;
        }

        match entry {
            ListEntry::Header { title, .. } => {
                let pill = Paragraph::new(Line::from(Span::styled(
                    format!(" {} ", title.as_str()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                )));
                f.render_widget(
                    pill,
                    Rect {
                        x: area.x,
                        y,
                        width: area.width,
                        height: HEADER_HEIGHT,
                    },
                );
            }
            ListEntry::Row(row) => {
                let left_area = Rect {
                    x: area.x,
                    y,
                    width: card_width,
                    height: CARD_HEIGHT,
                };
                render_card(f, &row.left, left_area, selected == Some(idx) && selected_col == 0);

                if let Some(right) = &row.right {
                    let right_area = Rect {
                        x: area.x + card_width + 1,
                        y,
                        width: card_width,
                        height: CARD_HEIGHT,
                    };
                    render_card(f, right, right_area, selected == Some(idx) && selected_col == 1);
                }
            }
        }

        y += height;
    }
}

fn render_empty_state(f: &mut Frame, app: &App, area: Rect) {
    let lines = if app.model.ui.search_query.trim().is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "You haven't saved anything yet.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Press 'a' to add your first item",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "No items match your search",
                Style::default().fg(Color::Gray),
            )),
        ]
    };

    let empty = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(empty, area);
}

fn render_card(f: &mut Frame, item: &Item, area: Rect, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let name = truncate_to_width(&item.name, inner_width);

    let mut lines = Vec::with_capacity(3);
    lines.push(Line::from(Span::styled(
        truncate_to_width(item.location_or_empty(), inner_width),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(Span::styled(
        match item.created_at {
            Some(ts) => format!("added {}", format_relative_time(ts, now_ms())),
            None => String::new(),
        },
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        found_label(item.found_at, now_ms()).unwrap_or(""),
        Style::default().fg(Color::Green),
    )));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(
                name,
                Style::default()
                    .fg(if selected { Color::Cyan } else { Color::White })
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(card, area);
}

fn entry_height(entry: &ListEntry) -> u16 {
    match entry {
        ListEntry::Header { .. } => HEADER_HEIGHT,
        ListEntry::Row(_) => CARD_HEIGHT + ROW_GAP,
    }
}

/// Adjust the scroll offset so the selected entry fits in the viewport.
fn ensure_selection_visible(app: &mut App, entries: &[ListEntry], viewport_height: u16) {
    let Some(selected) = app.model.navigation.selected else {
        return;
    };
    if selected >= entries.len() {
        return;
    }

    let offset = &mut app.model.navigation.scroll_offset;
    if selected < *offset {
        *offset = selected;
        return;
    }

    // Scroll down one entry at a time until the selection fits
    while *offset < selected {
        let visible: u16 = entries[*offset..=selected].iter().map(entry_height).sum();
        if visible <= viewport_height {
            break;
        }
        *offset += 1;
    }
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        width += char_width;
    }
    result.push('…');
    result
}
