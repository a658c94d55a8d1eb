//! Store service worker
//!
//! Owns the SQLite store and processes requests from the UI loop in the
//! background. Requests are handled strictly in order; every request gets
//! exactly one response on the response channel.
//!
//! Preference loads carry a caller-chosen request id so the app can drop
//! responses that were superseded by a newer load (the screen refocused
//! before the old read finished). Preference saves are fire-and-forget
//! from the app's point of view: a failed save is logged and the UI keeps
//! its in-memory mode.

use anyhow::Result;
use tokio::sync::mpsc;

use picganize::model::Item;
use picganize::store::StoreDb;
use picganize::{SortMode, SORT_PREF_KEY};

use crate::log_debug;

/// Store request types
#[derive(Debug, Clone)]
pub enum StoreRequest {
    /// Re-read the full item snapshot
    LoadItems,

    /// Insert a newly created item
    InsertItem(Item),

    /// Replace an existing item by id (mark-as-found writes)
    ReplaceItem(Item),

    /// Read the persisted sort mode; `request_id` is echoed back
    LoadSortPref { request_id: u64 },

    /// Persist the sort mode (fire-and-forget)
    SaveSortPref { mode: SortMode },
}

/// Store response types
#[derive(Debug)]
pub enum StoreResponse {
    ItemsLoaded {
        items: Result<Vec<Item>>,
    },

    ItemInserted {
        id: String,
        result: Result<()>,
    },

    ItemReplaced {
        id: String,
        /// Ok(false) means the id was unknown and nothing was written
        result: Result<bool>,
    },

    SortPrefLoaded {
        request_id: u64,
        /// Raw stored value; normalization happens at the app boundary
        value: Result<Option<String>>,
    },

    SortPrefSaved {
        result: Result<()>,
    },
}

fn execute_request(db: &StoreDb, request: StoreRequest) -> StoreResponse {
    match request {
        StoreRequest::LoadItems => StoreResponse::ItemsLoaded {
            items: db.load_items(),
        },

        StoreRequest::InsertItem(item) => {
            let id = item.id.clone();
            StoreResponse::ItemInserted {
                id,
                result: db.insert_item(&item),
            }
        }

        StoreRequest::ReplaceItem(item) => {
            let id = item.id.clone();
            StoreResponse::ItemReplaced {
                id,
                result: db.replace_item(&item),
            }
        }

        StoreRequest::LoadSortPref { request_id } => StoreResponse::SortPrefLoaded {
            request_id,
            value: db.get_pref(SORT_PREF_KEY),
        },

        StoreRequest::SaveSortPref { mode } => StoreResponse::SortPrefSaved {
            result: db.set_pref(SORT_PREF_KEY, mode.as_str()),
        },
    }
}

/// Spawn the store service worker
pub fn spawn_store_service(
    db: StoreDb,
) -> (
    mpsc::UnboundedSender<StoreRequest>,
    mpsc::UnboundedReceiver<StoreResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<StoreRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<StoreResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            log_debug(&format!("DEBUG [Store Service]: {:?}", request));
            let response = execute_request(&db, request);
            if response_tx.send(response).is_err() {
                // App side hung up; stop the worker
                break;
            }
        }
    });

    (request_tx, response_rx)
}
