//! Search Logic
//!
//! Pure functions for filtering the item collection by a search query.
//! Matching is plain case-insensitive substring over the item name and
//! location; no wildcards, no tokenization.

use crate::model::Item;

/// Match a query against a single item.
///
/// The query is expected pre-folded (trimmed + lowercased); items match if
/// their lowercased name or lowercased location contains it. An absent
/// location is treated as the empty string.
pub fn item_matches(item: &Item, folded_query: &str) -> bool {
    if folded_query.is_empty() {
        return true; // Empty query matches everything
    }
    item.name.to_lowercase().contains(folded_query)
        || item.location_or_empty().to_lowercase().contains(folded_query)
}

/// Filter an item snapshot by a raw search term.
///
/// The term is trimmed and case-folded before matching. An empty (or
/// whitespace-only) term passes the snapshot through unchanged, preserving
/// order. The caller's slice is never mutated.
pub fn filter_items(items: &[Item], search_term: &str) -> Vec<Item> {
    let folded = search_term.trim().to_lowercase();
    if folded.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|it| item_matches(it, &folded))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(name: &str, location: Option<&str>) -> Item {
        Item {
            id: format!("id-{}", name),
            name: name.to_string(),
            photo_path: None,
            location: location.map(|s| s.to_string()),
            created_at: Some(0),
            found_at: None,
            found_count: None,
        }
    }

    #[test]
    fn test_empty_query_passes_everything() {
        let items = vec![make_item("hammer", None), make_item("tape", None)];
        assert_eq!(filter_items(&items, "").len(), 2);
        assert_eq!(filter_items(&items, "   ").len(), 2);
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let items = vec![make_item("Kitchen scale", None), make_item("hammer", None)];
        let filtered = filter_items(&items, "KIT");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Kitchen scale");
    }

    #[test]
    fn test_matches_location_case_insensitive() {
        let items = vec![
            make_item("blender", Some("near the kitchen")),
            make_item("drill", Some("garage")),
        ];
        let filtered = filter_items(&items, "kit");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "blender");
    }

    #[test]
    fn test_missing_location_treated_as_empty() {
        let items = vec![make_item("drill", None)];
        assert!(filter_items(&items, "garage").is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let items = vec![make_item("hammer", None)];
        assert_eq!(filter_items(&items, "  ham  ").len(), 1);
    }

    #[test]
    fn test_no_mutation_and_order_preserved() {
        let items = vec![
            make_item("b tool", Some("shed")),
            make_item("a tool", Some("shed")),
        ];
        let filtered = filter_items(&items, "tool");
        assert_eq!(filtered[0].name, "b tool");
        assert_eq!(filtered[1].name, "a tool");
        assert_eq!(items.len(), 2); // Caller's collection untouched
    }

    #[test]
    fn test_deterministic_on_reapplication() {
        let items = vec![
            make_item("Kitchen scale", Some("shelf")),
            make_item("drill", Some("near the kitchen")),
        ];
        let first = filter_items(&items, "kit");
        let second = filter_items(&items, "kit");
        assert_eq!(first, second);
    }
}
