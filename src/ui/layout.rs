use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed screen regions for the library layout
pub struct LayoutInfo {
    pub header_area: Rect,
    pub search_area: Option<Rect>,
    pub content_area: Rect,
    pub status_area: Rect,
}

/// Split the terminal into header, optional search bar, content, and
/// status line.
pub fn compute_layout(area: Rect, show_search: bool) -> LayoutInfo {
    if show_search {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Search bar
                Constraint::Min(5),    // Card grid
                Constraint::Length(1), // Status line
            ])
            .split(area);
        LayoutInfo {
            header_area: chunks[0],
            search_area: Some(chunks[1]),
            content_area: chunks[2],
            status_area: chunks[3],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);
        LayoutInfo {
            header_area: chunks[0],
            search_area: None,
            content_area: chunks[1],
            status_area: chunks[2],
        }
    }
}

/// Center a fixed-size rect inside `area`, clamped to its bounds.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
