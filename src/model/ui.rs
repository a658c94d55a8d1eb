//! UI Model
//!
//! User preferences, search state, dialogs, and transient visual state.

use std::time::Instant;

use crate::SortMode;

/// Field focus inside the add-item form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddItemField {
    Name,
    Location,
    PhotoPath,
}

impl AddItemField {
    pub fn next(&self) -> AddItemField {
        match self {
            AddItemField::Name => AddItemField::Location,
            AddItemField::Location => AddItemField::PhotoPath,
            AddItemField::PhotoPath => AddItemField::Name,
        }
    }
}

/// State of the add-item form (the TUI stand-in for the capture screen)
#[derive(Clone, Debug)]
pub struct AddItemForm {
    pub name: String,
    pub location: String,
    pub photo_path: String,
    pub focus: AddItemField,
}

impl AddItemForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            photo_path: String::new(),
            focus: AddItemField::Name,
        }
    }

    /// Mutable reference to the text of the focused field.
    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            AddItemField::Name => &mut self.name,
            AddItemField::Location => &mut self.location,
            AddItemField::PhotoPath => &mut self.photo_path,
        }
    }
}

impl Default for AddItemForm {
    fn default() -> Self {
        Self::new()
    }
}

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Current sort mode
    pub sort_mode: SortMode,

    /// Whether the persisted sort preference has loaded at least once
    pub prefs_loaded: bool,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Current search query
    pub search_query: String,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Add-item form, when open
    pub add_form: Option<AddItemForm>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // LIFECYCLE
    // ============================================
    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            sort_mode: SortMode::default(),
            prefs_loaded: false,
            vim_mode,
            search_mode: false,
            search_query: String::new(),
            add_form: None,
            toast_message: None,
            should_quit: false,
        }
    }

    /// Show a toast notification.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }
}
