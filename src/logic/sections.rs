//! Library sectioning engine
//!
//! The derived-state pipeline behind the library grid:
//!
//! ```text
//! items + search term + sort mode + day start
//!   → filter → sort → time-bucket → paginate into rows → flat render list
//! ```
//!
//! Every stage is a pure function over value objects; the pipeline re-runs
//! wholesale whenever any input changes. Wall-clock day boundaries come in
//! as an explicit `today_start_ms` parameter so tests control the clock.

use crate::logic::{search, sorting, time};
use crate::model::Item;
use crate::SortMode;

/// Time-based section bucket, in fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTitle {
    Today,
    ThisWeek,
    Earlier,
}

impl SectionTitle {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTitle::Today => "today",
            SectionTitle::ThisWeek => "this week",
            SectionTitle::Earlier => "earlier",
        }
    }
}

/// A two-column pagination unit: left card plus optional right card.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Composite key `leftId_rightIdOrEmpty`
    pub key: String,
    pub left: Item,
    pub right: Option<Item>,
}

/// A populated time bucket holding its rows in sort order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: SectionTitle,
    pub rows: Vec<Row>,
}

/// Render-ready list entry: a section header or a row of cards.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Header { key: String, title: SectionTitle },
    Row(Row),
}

impl ListEntry {
    pub fn key(&self) -> &str {
        match self {
            ListEntry::Header { key, .. } => key,
            ListEntry::Row(row) => &row.key,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, ListEntry::Header { .. })
    }
}

/// Group consecutive items two at a time into rows.
///
/// The final row of an odd-count slice has `right` absent.
pub fn build_rows(items: &[Item]) -> Vec<Row> {
    items
        .chunks(2)
        .map(|pair| {
            let left = pair[0].clone();
            let right = pair.get(1).cloned();
            let key = format!(
                "{}_{}",
                left.id,
                right.as_ref().map(|r| r.id.as_str()).unwrap_or("")
            );
            Row { key, left, right }
        })
        .collect()
}

/// Bucket sorted items into today / this week / earlier sections.
///
/// # Arguments
/// * `sorted` - Items already in display order (bucketing preserves it)
/// * `today_start_ms` - Start of the current local calendar day
///
/// # Bucket Rules
/// - `created_at >= today_start` → today
/// - `created_at >= today_start - 6 days` → this week (rolling 7-day
///   window including today)
/// - otherwise → earlier
///
/// Sections come out in fixed order today → this week → earlier and empty
/// sections are omitted, so the three buckets partition the input exactly.
pub fn bucket_items(sorted: &[Item], today_start_ms: i64) -> Vec<Section> {
    let week_start_ms = today_start_ms - 6 * time::DAY_MS;

    let mut today: Vec<Item> = Vec::new();
    let mut week: Vec<Item> = Vec::new();
    let mut earlier: Vec<Item> = Vec::new();

    for item in sorted {
        let created = item.created_at_ms();
        if created >= today_start_ms {
            today.push(item.clone());
        } else if created >= week_start_ms {
            week.push(item.clone());
        } else {
            earlier.push(item.clone());
        }
    }

    let mut out = Vec::new();
    if !today.is_empty() {
        out.push(Section {
            title: SectionTitle::Today,
            rows: build_rows(&today),
        });
    }
    if !week.is_empty() {
        out.push(Section {
            title: SectionTitle::ThisWeek,
            rows: build_rows(&week),
        });
    }
    if !earlier.is_empty() {
        out.push(Section {
            title: SectionTitle::Earlier,
            rows: build_rows(&earlier),
        });
    }
    out
}

/// Filter, sort, and bucket the item snapshot into sections.
///
/// In `AToZ` mode bucketing is skipped entirely: all items land in one
/// implicit `Earlier` section which the render step emits without a
/// header. The caller's slice is never mutated.
pub fn section_library(
    items: &[Item],
    search_term: &str,
    sort_mode: SortMode,
    today_start_ms: i64,
) -> Vec<Section> {
    let mut sorted = search::filter_items(items, search_term);
    sorted.sort_by(|a, b| sorting::compare_items(a, b, sort_mode));

    if sort_mode == SortMode::AToZ {
        if sorted.is_empty() {
            return Vec::new();
        }
        return vec![Section {
            title: SectionTitle::Earlier,
            rows: build_rows(&sorted),
        }];
    }

    bucket_items(&sorted, today_start_ms)
}

/// Flatten sections into the ordered render list.
///
/// One header entry precedes each section's rows, except in `AToZ` mode
/// where headers are suppressed entirely (alphabetical order has no
/// time-based grouping to announce).
pub fn build_list_entries(sections: &[Section], sort_mode: SortMode) -> Vec<ListEntry> {
    let mut out = Vec::new();
    for section in sections {
        if sort_mode != SortMode::AToZ {
            out.push(ListEntry::Header {
                key: format!("h_{}", section.title.as_str()),
                title: section.title,
            });
        }
        for row in &section.rows {
            out.push(ListEntry::Row(row.clone()));
        }
    }
    out
}

/// Run the whole pipeline: snapshot in, render list out.
pub fn library_list(
    items: &[Item],
    search_term: &str,
    sort_mode: SortMode,
    today_start_ms: i64,
) -> Vec<ListEntry> {
    let sections = section_library(items, search_term, sort_mode, today_start_ms);
    build_list_entries(&sections, sort_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::time::DAY_MS;

    fn make_item(id: &str, name: &str, created_at: i64) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            photo_path: None,
            location: None,
            created_at: Some(created_at),
            found_at: None,
            found_count: None,
        }
    }

    const TODAY_START: i64 = 1_700_000_000_000;

    #[test]
    fn test_build_rows_pairs_items() {
        let items = vec![
            make_item("a", "a", 0),
            make_item("b", "b", 0),
            make_item("c", "c", 0),
        ];
        let rows = build_rows(&items);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, "a_b");
        assert!(rows[0].right.is_some());
        assert_eq!(rows[1].key, "c_");
        assert!(rows[1].right.is_none());
    }

    #[test]
    fn test_build_rows_count_is_ceil_half() {
        for n in 0..9usize {
            let items: Vec<Item> = (0..n)
                .map(|i| make_item(&format!("i{}", i), "x", 0))
                .collect();
            let rows = build_rows(&items);
            assert_eq!(rows.len(), n.div_ceil(2));
            // Every row except possibly the last has both cards
            for row in rows.iter().rev().skip(1) {
                assert!(row.right.is_some());
            }
        }
    }

    #[test]
    fn test_buckets_partition_exactly() {
        let items = vec![
            make_item("t", "today item", TODAY_START + 1),
            make_item("w", "week item", TODAY_START - 2 * DAY_MS),
            make_item("e", "earlier item", TODAY_START - 10 * DAY_MS),
        ];
        let sections = bucket_items(&items, TODAY_START);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].title, SectionTitle::Today);
        assert_eq!(sections[1].title, SectionTitle::ThisWeek);
        assert_eq!(sections[2].title, SectionTitle::Earlier);

        let total: usize = sections
            .iter()
            .map(|s| {
                s.rows
                    .iter()
                    .map(|r| 1 + r.right.is_some() as usize)
                    .sum::<usize>()
            })
            .sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn test_bucket_boundaries() {
        // Exactly at today's start → today; just below → this week;
        // exactly at the week start → this week; just below → earlier
        let week_start = TODAY_START - 6 * DAY_MS;
        let items = vec![
            make_item("a", "a", TODAY_START),
            make_item("b", "b", TODAY_START - 1),
            make_item("c", "c", week_start),
            make_item("d", "d", week_start - 1),
        ];
        let sections = bucket_items(&items, TODAY_START);

        assert_eq!(sections[0].title, SectionTitle::Today);
        assert_eq!(sections[0].rows[0].left.id, "a");
        assert_eq!(sections[1].title, SectionTitle::ThisWeek);
        assert_eq!(sections[1].rows[0].left.id, "b");
        assert_eq!(sections[1].rows[0].right.as_ref().map(|r| r.id.as_str()), Some("c"));
        assert_eq!(sections[2].title, SectionTitle::Earlier);
        assert_eq!(sections[2].rows[0].left.id, "d");
    }

    #[test]
    fn test_empty_sections_omitted() {
        let items = vec![make_item("e", "earlier only", TODAY_START - 30 * DAY_MS)];
        let sections = bucket_items(&items, TODAY_START);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, SectionTitle::Earlier);
    }

    #[test]
    fn test_newest_scenario_one_item_per_section() {
        // Items created now, 2 days ago, 10 days ago → three sections of
        // one single-card row each
        let items = vec![
            make_item("n", "now", TODAY_START + 1),
            make_item("d2", "two days", TODAY_START - 2 * DAY_MS),
            make_item("d10", "ten days", TODAY_START - 10 * DAY_MS),
        ];
        let sections = section_library(&items, "", SortMode::Newest, TODAY_START);

        assert_eq!(sections.len(), 3);
        for section in &sections {
            assert_eq!(section.rows.len(), 1);
            assert!(section.rows[0].right.is_none());
        }
    }

    #[test]
    fn test_a_to_z_single_unheaded_section() {
        let items = vec![
            make_item("b", "Banana", 3_000),
            make_item("a", "apple", 1_000),
            make_item("c", "Cherry", 2_000),
        ];
        let sections = section_library(&items, "", SortMode::AToZ, TODAY_START);

        assert_eq!(sections.len(), 1);
        let names: Vec<&str> = sections[0]
            .rows
            .iter()
            .flat_map(|r| {
                std::iter::once(r.left.name.as_str())
                    .chain(r.right.as_ref().map(|i| i.name.as_str()))
            })
            .collect();
        assert_eq!(names, vec!["apple", "Banana", "Cherry"]);

        // No headers in the flattened list
        let entries = build_list_entries(&sections, SortMode::AToZ);
        assert!(entries.iter().all(|e| !e.is_header()));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_flatten_interleaves_headers() {
        let items = vec![
            make_item("t", "today", TODAY_START + 1),
            make_item("e", "earlier", TODAY_START - 20 * DAY_MS),
        ];
        let entries = library_list(&items, "", SortMode::Newest, TODAY_START);

        assert_eq!(entries.len(), 4);
        match &entries[0] {
            ListEntry::Header { key, title } => {
                assert_eq!(key, "h_today");
                assert_eq!(*title, SectionTitle::Today);
            }
            _ => panic!("expected header first"),
        }
        assert!(!entries[1].is_header());
        match &entries[2] {
            ListEntry::Header { title, .. } => assert_eq!(*title, SectionTitle::Earlier),
            _ => panic!("expected earlier header"),
        }
        assert!(!entries[3].is_header());
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let items = vec![
            make_item("first", "first", TODAY_START + 5),
            make_item("second", "second", TODAY_START + 5),
        ];
        let sections = section_library(&items, "", SortMode::Newest, TODAY_START);
        let row = &sections[0].rows[0];
        assert_eq!(row.left.id, "first");
        assert_eq!(row.right.as_ref().map(|r| r.id.as_str()), Some("second"));
    }

    #[test]
    fn test_search_feeds_pipeline() {
        let mut kitchen = make_item("k", "Kitchen scale", TODAY_START + 1);
        kitchen.location = Some("counter".to_string());
        let mut blender = make_item("b", "blender", TODAY_START + 2);
        blender.location = Some("near the kitchen".to_string());
        let drill = make_item("d", "drill", TODAY_START + 3);

        let items = vec![kitchen, blender, drill];
        let sections = section_library(&items, "kit", SortMode::Newest, TODAY_START);

        assert_eq!(sections.len(), 1);
        let row = &sections[0].rows[0];
        assert_eq!(row.left.id, "b"); // newest match first
        assert_eq!(row.right.as_ref().map(|r| r.id.as_str()), Some("k"));
    }

    #[test]
    fn test_pipeline_deterministic() {
        let items = vec![
            make_item("a", "a", TODAY_START - 3 * DAY_MS),
            make_item("b", "b", TODAY_START + 1),
        ];
        let first = library_list(&items, "", SortMode::Oldest, TODAY_START);
        let second = library_list(&items, "", SortMode::Oldest, TODAY_START);
        assert_eq!(first, second);
        assert_eq!(items.len(), 2); // Input untouched
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(library_list(&[], "", SortMode::Newest, TODAY_START).is_empty());
        assert!(library_list(&[], "", SortMode::AToZ, TODAY_START).is_empty());
    }

    #[test]
    fn test_zero_matches_yields_no_headers() {
        let items = vec![make_item("a", "hammer", TODAY_START + 1)];
        let entries = library_list(&items, "zzz", SortMode::Newest, TODAY_START);
        assert!(entries.is_empty());
    }
}
