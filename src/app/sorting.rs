use crate::services::store::StoreRequest;
use crate::{log_debug, App};
use anyhow::Result;
use picganize::SortMode;

impl App {
    /// Advance to the next sort mode and reset the grid to the top.
    ///
    /// The new mode takes effect immediately; persistence happens in the
    /// background and a write failure never touches the in-memory mode.
    pub fn cycle_sort_mode(&mut self) {
        let next = self.model.ui.sort_mode.next();
        self.set_sort_mode(next);
        self.model.navigation.reset_to_top();
    }

    fn set_sort_mode(&mut self, mode: SortMode) {
        self.model.ui.sort_mode = mode;
        if self
            .store_tx
            .send(StoreRequest::SaveSortPref { mode })
            .is_err()
        {
            log_debug("Store service gone, sort preference not persisted");
        }
    }

    /// Ask the store service for the persisted sort preference.
    ///
    /// Each request carries a fresh id; responses for anything but the
    /// most recent id are dropped, so rapid screen changes cannot apply
    /// a stale value over a newer one.
    pub fn request_sort_pref(&mut self) {
        self.pref_request_seq += 1;
        self.latest_pref_request = self.pref_request_seq;
        let _ = self.store_tx.send(StoreRequest::LoadSortPref {
            request_id: self.pref_request_seq,
        });
    }

    pub(crate) fn apply_loaded_sort_pref(
        &mut self,
        request_id: u64,
        value: Result<Option<String>>,
    ) {
        if request_id != self.latest_pref_request {
            log_debug(&format!(
                "Dropping stale sort preference response (request {})",
                request_id
            ));
            return;
        }

        match value {
            Ok(Some(raw)) => {
                if let Some(mode) = SortMode::parse_stored(&raw) {
                    self.model.ui.sort_mode = mode;
                } else {
                    log_debug(&format!("Ignoring unknown stored sort mode '{}'", raw));
                }
            }
            Ok(None) => {
                // First run, keep the default
            }
            Err(e) => {
                log_debug(&format!("Failed to load sort preference: {}", e));
            }
        }

        self.model.ui.prefs_loaded = true;
    }
}
