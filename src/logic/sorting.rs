//! Sorting comparison logic
//!
//! Pure functions for comparing items across the three sort modes.

use std::cmp::Ordering;

use crate::model::Item;
use crate::SortMode;

/// Compare two items according to the given sort mode
///
/// # Arguments
/// * `a` - First item
/// * `b` - Second item
/// * `sort_mode` - Which attribute to sort by
///
/// # Returns
/// Ordering indicating relative position (Less, Equal, Greater)
///
/// # Sort Rules
/// - `Newest`: descending by creation time
/// - `Oldest`: ascending by creation time
/// - `AToZ`: ascending by case-insensitive name
/// - Missing creation times compare as epoch 0 (oldest)
/// - Timestamp ties compare Equal so a stable sort preserves the original
///   relative order
pub fn compare_items(a: &Item, b: &Item, sort_mode: SortMode) -> Ordering {
    match sort_mode {
        SortMode::Newest => b.created_at_ms().cmp(&a.created_at_ms()),
        SortMode::Oldest => a.created_at_ms().cmp(&b.created_at_ms()),
        SortMode::AToZ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    }
}
