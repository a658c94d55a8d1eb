//! Item record
//!
//! The catalogued physical object: photo, name, location, timestamps.
//! Items are plain value objects; the sectioning pipeline never mutates
//! them in place.

use serde::{Deserialize, Serialize};

/// A catalogued item as stored in the database (and in import files).
///
/// All timestamps are epoch milliseconds. `created_at` is set once at
/// creation and immutable afterwards; `found_at` / `found_count` are
/// updated by the mark-as-found action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique identifier
    pub id: String,

    /// Display name (lowercased on render, stored as entered)
    pub name: String,

    /// Path to the item's photo on disk, if one was captured
    #[serde(default)]
    pub photo_path: Option<String>,

    /// Free-text location hint ("kitchen drawer", "garage shelf")
    #[serde(default)]
    pub location: Option<String>,

    /// Creation timestamp (epoch ms)
    #[serde(default)]
    pub created_at: Option<i64>,

    /// When the item was last marked as found (epoch ms)
    #[serde(default)]
    pub found_at: Option<i64>,

    /// How many times mark-as-found was triggered
    #[serde(default)]
    pub found_count: Option<u32>,
}

impl Item {
    /// Creation time used for sorting and bucketing.
    ///
    /// Items without a creation timestamp sort as if created at epoch 0,
    /// i.e. oldest possible.
    pub fn created_at_ms(&self) -> i64 {
        self.created_at.unwrap_or(0)
    }

    /// Location with absent treated as empty (for search matching).
    pub fn location_or_empty(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}
