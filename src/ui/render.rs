use crate::App;
use picganize::model::Screen;
use ratatui::Frame;

use super::{add_item, detail, library, toast};

/// Top-level render dispatch: active screen first, then overlays.
pub fn render(f: &mut Frame, app: &mut App) {
    match app.model.navigation.screen.clone() {
        Screen::Library => library::render_library(f, app),
        Screen::Detail { id } => detail::render_detail(f, app, &id),
    }

    if app.model.ui.add_form.is_some() {
        add_item::render_add_form(f, app);
    }

    toast::render_toast(f, app);
}
