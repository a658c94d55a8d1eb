use crate::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Transient notification rendered near the bottom of the screen.
pub fn render_toast(f: &mut Frame, app: &App) {
    let Some((message, _)) = &app.model.ui.toast_message else {
        return;
    };

    let screen = f.area();
    let width = (message.width() as u16 + 4).min(screen.width);
    let area = Rect {
        x: screen.x + (screen.width.saturating_sub(width)) / 2,
        y: screen.y + screen.height.saturating_sub(3),
        width,
        height: 1,
    };

    f.render_widget(Clear, area);
    let toast = Paragraph::new(Line::from(Span::styled(
        format!("  {}  ", message),
        Style::default().fg(Color::Black).bg(Color::White),
    )))
    .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(toast, area);
}
