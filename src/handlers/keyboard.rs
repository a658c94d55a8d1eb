use crate::App;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use picganize::model::Screen;

/// Route a key event to the right handler for the current UI state.
///
/// Precedence: the add-item form captures everything while open, then
/// search input mode, then the active screen's bindings.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return Ok(());
    }

    if app.model.ui.add_form.is_some() {
        handle_add_form_key(app, key);
        return Ok(());
    }

    if app.model.ui.search_mode {
        handle_search_key(app, key);
        return Ok(());
    }

    match app.model.navigation.screen.clone() {
        Screen::Library => handle_library_key(app, key),
        Screen::Detail { id } => handle_detail_key(app, key, &id),
    }

    Ok(())
}

fn handle_add_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_add_form(),
        KeyCode::Enter => app.submit_add_form(),
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = app.model.ui.add_form.as_mut() {
                form.focus = form.focus.next();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.model.ui.add_form.as_mut() {
                form.focused_text_mut().pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.model.ui.add_form.as_mut() {
                form.focused_text_mut().push(c);
            }
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.accept_search(),
        KeyCode::Backspace => {
            if app.model.ui.search_query.is_empty() {
                app.cancel_search();
            } else {
                app.pop_search_char();
            }
        }
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}

fn handle_library_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;

    // Ctrl+F opens search regardless of vim mode
    if key.code == KeyCode::Char('f') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.start_search();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Esc => {
            // Esc clears an accepted filter before anything else
            if !app.model.ui.search_query.is_empty() {
                app.cancel_search();
            }
        }
        KeyCode::Char('/') if vim => app.start_search(),
        KeyCode::Char('s') => app.cycle_sort_mode(),
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('r') => app.reload_items(),
        KeyCode::Char('f') => app.mark_selected_found(),
        KeyCode::Down => app.select_next_row(),
        KeyCode::Char('j') if vim => app.select_next_row(),
        KeyCode::Up => app.select_prev_row(),
        KeyCode::Char('k') if vim => app.select_prev_row(),
        KeyCode::Left => app.select_left_card(),
        KeyCode::Char('h') if vim => app.select_left_card(),
        KeyCode::Right => app.select_right_card(),
        KeyCode::Char('l') if vim => app.select_right_card(),
        KeyCode::Home => app.select_first_row(),
        KeyCode::Char('g') if vim => app.select_first_row(),
        KeyCode::End => app.select_last_row(),
        KeyCode::Char('G') if vim => app.select_last_row(),
        KeyCode::Enter => app.open_selected_detail(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent, item_id: &str) {
    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back_to_library(),
        KeyCode::Char('h') if app.model.ui.vim_mode => app.back_to_library(),
        KeyCode::Char('f') => app.mark_found(item_id),
        _ => {}
    }
}
