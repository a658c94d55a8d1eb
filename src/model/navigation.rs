//! Navigation model
//!
//! Which screen is showing plus the library grid selection and scroll
//! position. Selection indexes into the flattened render list produced by
//! the sectioning pipeline; header entries are never selectable.

/// Active screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// The library grid
    Library,
    /// Item detail for the given item id
    Detail { id: String },
}

/// Navigation state (screen, selection, scroll)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Current screen
    pub screen: Screen,

    /// Selected entry in the flattened library list (always a row entry)
    pub selected: Option<usize>,

    /// Selected column within the row: 0 = left card, 1 = right card
    pub selected_col: usize,

    /// First visible entry of the flattened list
    pub scroll_offset: usize,
}

impl NavigationModel {
    pub fn new() -> Self {
        Self {
            screen: Screen::Library,
            selected: None,
            selected_col: 0,
            scroll_offset: 0,
        }
    }

    /// Reset selection and scroll to the top of the list.
    pub fn reset_to_top(&mut self) {
        self.selected = None;
        self.selected_col = 0;
        self.scroll_offset = 0;
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}
