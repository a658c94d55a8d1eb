//! Catalog model
//!
//! The current item snapshot as loaded from the store. The snapshot is
//! replaced wholesale on every reload; derived views (filtering, sorting,
//! sectioning) are recomputed from it rather than mutated incrementally.

use super::Item;

/// Item collection snapshot plus its load state
#[derive(Clone, Debug, Default)]
pub struct CatalogModel {
    /// Current snapshot of all items, in store order
    pub items: Vec<Item>,

    /// Whether the initial snapshot has loaded at least once
    pub items_loaded: bool,
}

impl CatalogModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an item by id in the current snapshot.
    pub fn item_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|it| it.id == id)
    }

    /// Replace an item in the snapshot by id.
    ///
    /// Unknown ids are ignored, mirroring the store's replace semantics.
    pub fn replace_item(&mut self, next: Item) {
        if let Some(slot) = self.items.iter_mut().find(|it| it.id == next.id) {
            *slot = next;
        }
    }

    /// True when the unfiltered collection is empty (drives the empty state).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
