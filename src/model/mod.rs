//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application,
//! organized into focused sub-models:
//!
//! - **CatalogModel**: the current item snapshot and its load state
//! - **NavigationModel**: active screen, grid selection, scroll
//! - **UiModel**: user preferences, search, dialogs, toasts
//!
//! Key principles:
//! - Clone + Debug: state can be snapshotted and compared
//! - No services: all I/O lives behind the store service
//! - Derived views (sections, rows, render list) are recomputed from the
//!   snapshot on every relevant change, never mutated incrementally

pub mod catalog;
pub mod item;
pub mod navigation;
pub mod ui;

pub use catalog::CatalogModel;
pub use item::Item;
pub use navigation::{NavigationModel, Screen};
pub use ui::{AddItemField, AddItemForm, UiModel};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Item snapshot and load state
    pub catalog: CatalogModel,

    /// Screen, selection, scroll
    pub navigation: NavigationModel,

    /// Preferences, search, dialogs
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            catalog: CatalogModel::new(),
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// True until both the item snapshot and the sort preference have
    /// loaded at least once. The library renders a blank loading frame
    /// while this holds.
    pub fn is_loading(&self) -> bool {
        !self.catalog.items_loaded || !self.ui.prefs_loaded
    }
}
