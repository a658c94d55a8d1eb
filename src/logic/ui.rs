//! UI state transition logic
//!
//! Pure functions for moving the grid selection over the flattened render
//! list and for small UI timing decisions.

use crate::logic::sections::ListEntry;

/// Index of the first selectable (row) entry, if any.
pub fn first_row_entry(entries: &[ListEntry]) -> Option<usize> {
    entries.iter().position(|e| !e.is_header())
}

/// Index of the next row entry after `from`, skipping headers.
///
/// Returns `from` unchanged when already at the last row.
pub fn next_row_entry(entries: &[ListEntry], from: usize) -> usize {
    entries
        .iter()
        .enumerate()
        .skip(from + 1)
        .find(|(_, e)| !e.is_header())
        .map(|(idx, _)| idx)
        .unwrap_or(from)
}

/// Index of the previous row entry before `from`, skipping headers.
///
/// Returns `from` unchanged when already at the first row.
pub fn prev_row_entry(entries: &[ListEntry], from: usize) -> usize {
    entries
        .iter()
        .enumerate()
        .take(from)
        .rev()
        .find(|(_, e)| !e.is_header())
        .map(|(idx, _)| idx)
        .unwrap_or(from)
}

/// Clamp a column index to the cards actually present in the entry.
///
/// Headers and single-card rows only have column 0.
pub fn clamp_col(entries: &[ListEntry], entry_idx: usize, col: usize) -> usize {
    match entries.get(entry_idx) {
        Some(ListEntry::Row(row)) if row.right.is_some() => col.min(1),
        _ => 0,
    }
}

/// Whether a toast has been showing long enough to dismiss (1.5s).
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= 1500
}
