//! picganize library
//!
//! Terminal catalogue for photographed personal items. Exposes the pure
//! model, the sectioning/sorting logic, and the SQLite store for testing.

pub mod logic;
pub mod model;
pub mod store;

/// Storage key for the persisted sort mode preference.
pub const SORT_PREF_KEY: &str = "picganize_sort_mode_v1";

/// Sort mode for the library grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Newest, // Newest first by creation time
    Oldest, // Oldest first by creation time
    AToZ,   // Alphabetical by item name
}

impl SortMode {
    /// Canonical value written to the preference store.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::AToZ => "aToZ",
        }
    }

    /// Label shown on the sort button / status bar.
    pub fn display_label(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::AToZ => "a to z",
        }
    }

    /// Advance to the next mode in the fixed cycle newest → oldest → a-z.
    pub fn next(&self) -> SortMode {
        match self {
            SortMode::Newest => SortMode::Oldest,
            SortMode::Oldest => SortMode::AToZ,
            SortMode::AToZ => SortMode::Newest,
        }
    }

    /// Parse a stored preference value.
    ///
    /// Accepts the canonical values plus the legacy aliases "name" and
    /// "a to z" that older versions persisted (both normalize to `AToZ`).
    /// Unknown values return `None` so the caller keeps its current mode.
    pub fn parse_stored(raw: &str) -> Option<SortMode> {
        match raw {
            "newest" => Some(SortMode::Newest),
            "oldest" => Some(SortMode::Oldest),
            "aToZ" => Some(SortMode::AToZ),
            // Legacy stored values from the v0 schema
            "name" | "a to z" => Some(SortMode::AToZ),
            _ => None,
        }
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::Newest
    }
}
