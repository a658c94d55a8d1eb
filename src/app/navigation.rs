use crate::{log_debug, App};
use picganize::logic::sections::ListEntry;
use picganize::logic::ui as ui_logic;
use picganize::model::Screen;

impl App {
    /// Id of the item under the grid cursor, honoring the column.
    pub fn selected_item_id(&self) -> Option<String> {
        let entries = self.current_list_entries();
        let idx = self.model.navigation.selected?;
        match entries.get(idx)? {
            ListEntry::Row(row) => {
                let item = if self.model.navigation.selected_col == 1 {
                    row.right.as_ref()?
                } else {
                    &row.left
                };
                Some(item.id.clone())
            }
            ListEntry::Header { .. } => None,
        }
    }

    /// Open the detail screen for the highlighted card and start decoding
    /// its photo in the background.
    pub fn open_selected_detail(&mut self) {
        let Some(id) = self.selected_item_id() else {
            return;
        };
        log_debug(&format!("Opening detail for {}", id));
        self.request_photo_preview(&id);
        self.model.navigation.screen = Screen::Detail { id };
    }

    /// Return from the detail screen to the library.
    ///
    /// Matches the app's focus behavior: every return to the library
    /// re-reads the persisted sort preference, picking up changes made
    /// by any other process sharing the database.
    pub fn back_to_library(&mut self) {
        self.model.navigation.screen = Screen::Library;
        self.request_sort_pref();
    }

    pub fn select_next_row(&mut self) {
        let entries = self.current_list_entries();
        let idx = match self.model.navigation.selected {
            Some(idx) => ui_logic::next_row_entry(&entries, idx),
            None => match ui_logic::first_row_entry(&entries) {
                Some(idx) => idx,
                None => return,
            },
        };
        self.model.navigation.selected = Some(idx);
        self.model.navigation.selected_col =
            ui_logic::clamp_col(&entries, idx, self.model.navigation.selected_col);
    }

    pub fn select_prev_row(&mut self) {
        let entries = self.current_list_entries();
        let idx = match self.model.navigation.selected {
            Some(idx) => ui_logic::prev_row_entry(&entries, idx),
            None => match ui_logic::first_row_entry(&entries) {
                Some(idx) => idx,
                None => return,
            },
        };
        self.model.navigation.selected = Some(idx);
        self.model.navigation.selected_col =
            ui_logic::clamp_col(&entries, idx, self.model.navigation.selected_col);
    }

    pub fn select_left_card(&mut self) {
        self.model.navigation.selected_col = 0;
    }

    pub fn select_right_card(&mut self) {
        let entries = self.current_list_entries();
        if let Some(idx) = self.model.navigation.selected {
            self.model.navigation.selected_col = ui_logic::clamp_col(&entries, idx, 1);
        }
    }

    pub fn select_first_row(&mut self) {
        let entries = self.current_list_entries();
        self.model.navigation.selected = ui_logic::first_row_entry(&entries);
        self.model.navigation.selected_col = 0;
        self.model.navigation.scroll_offset = 0;
    }

    pub fn select_last_row(&mut self) {
        let entries = self.current_list_entries();
        self.model.navigation.selected = entries.iter().rposition(|e| !e.is_header());
        if let Some(idx) = self.model.navigation.selected {
            self.model.navigation.selected_col =
                ui_logic::clamp_col(&entries, idx, self.model.navigation.selected_col);
        }
    }

    /// Re-validate the selection after the snapshot or filter changed.
    pub(crate) fn clamp_selection(&mut self) {
        let entries = self.current_list_entries();
        match self.model.navigation.selected {
            Some(idx) if idx < entries.len() && !entries[idx].is_header() => {
                self.model.navigation.selected_col =
                    ui_logic::clamp_col(&entries, idx, self.model.navigation.selected_col);
            }
            Some(_) => {
                self.model.navigation.selected = ui_logic::first_row_entry(&entries);
                self.model.navigation.selected_col = 0;
            }
            None => {}
        }
    }
}
