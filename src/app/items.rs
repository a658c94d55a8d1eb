use crate::services::store::{StoreRequest, StoreResponse};
use crate::{log_debug, now_ms, App};
use picganize::model::{AddItemForm, Item};

impl App {
    /// Request a fresh item snapshot from the store service.
    pub fn reload_items(&mut self) {
        if self.store_tx.send(StoreRequest::LoadItems).is_err() {
            log_debug("Store service gone, cannot reload items");
        }
    }

    /// Dispatch a store service response into the model.
    pub fn handle_store_response(&mut self, response: StoreResponse) {
        match response {
            StoreResponse::ItemsLoaded { items } => match items {
                Ok(items) => {
                    log_debug(&format!("Loaded {} items", items.len()));
                    self.model.catalog.items = items;
                    self.model.catalog.items_loaded = true;
                    self.clamp_selection();
                }
                Err(e) => {
                    // Keep whatever snapshot we have rather than blanking
                    // the library over a transient read failure
                    log_debug(&format!("Failed to load items: {}", e));
                    self.model.catalog.items_loaded = true;
                }
            },
            StoreResponse::ItemInserted { id, result } => match result {
                Ok(()) => {
                    log_debug(&format!("Inserted item {}", id));
                    self.reload_items();
                }
                Err(e) => {
                    log_debug(&format!("Failed to insert item {}: {}", id, e));
                    self.model.ui.show_toast(format!("Error saving item: {}", e));
                }
            },
            StoreResponse::ItemReplaced { id, result } => match result {
                Ok(true) => {}
                Ok(false) => {
                    log_debug(&format!("Replace targeted unknown item {}", id));
                }
                Err(e) => {
                    // Optimistic update already applied; next reload resyncs
                    log_debug(&format!("Failed to persist item {}: {}", id, e));
                }
            },
            StoreResponse::SortPrefLoaded { request_id, value } => {
                self.apply_loaded_sort_pref(request_id, value);
            }
            StoreResponse::SortPrefSaved { result } => {
                if let Err(e) = result {
                    log_debug(&format!("Failed to persist sort preference: {}", e));
                }
            }
        }
    }

    /// Stamp an item as found right now: found timestamp moves to the
    /// current instant and the found counter increments. The snapshot is
    /// updated optimistically; the write happens in the background.
    pub fn mark_found(&mut self, id: &str) {
        let Some(item) = self.model.catalog.item_by_id(id) else {
            log_debug(&format!("Mark found: unknown item {}", id));
            return;
        };

        let mut updated = item.clone();
        updated.found_at = Some(now_ms());
        updated.found_count = Some(updated.found_count.unwrap_or(0) + 1);

        self.model.catalog.replace_item(updated.clone());
        let _ = self.store_tx.send(StoreRequest::ReplaceItem(updated));
        self.model.ui.show_toast("Marked as found".to_string());
    }

    /// Mark the currently highlighted library card as found.
    pub fn mark_selected_found(&mut self) {
        if let Some(id) = self.selected_item_id() {
            self.mark_found(&id);
        }
    }

    pub fn open_add_form(&mut self) {
        self.model.ui.add_form = Some(AddItemForm::new());
    }

    pub fn close_add_form(&mut self) {
        self.model.ui.add_form = None;
    }

    /// Validate and submit the add-item form.
    ///
    /// An empty name keeps the form open with a toast; otherwise a new
    /// item is built from the form fields and sent to the store service.
    pub fn submit_add_form(&mut self) {
        let Some(form) = self.model.ui.add_form.as_ref() else {
            return;
        };

        let name = form.name.trim().to_string();
        if name.is_empty() {
            self.model.ui.show_toast("Name is required".to_string());
            return;
        }

        let location = form.location.trim();
        let photo_path = form.photo_path.trim();
        let item = Item {
            id: format!("item-{}", now_ms()),
            name,
            photo_path: (!photo_path.is_empty()).then(|| photo_path.to_string()),
            location: (!location.is_empty()).then(|| location.to_string()),
            created_at: Some(now_ms()),
            found_at: None,
            found_count: None,
        };

        log_debug(&format!("Adding item {} ({})", item.id, item.name));
        let _ = self.store_tx.send(StoreRequest::InsertItem(item));
        self.model.ui.add_form = None;
    }
}
