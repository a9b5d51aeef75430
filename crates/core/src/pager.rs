//! Paging over the command sequence.
//!
//! The cursor is the 0-based index of the first command shown and always
//! stays within `0..=len.saturating_sub(page_size)`.

use std::ops::Range;

/// The visible window of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 0-based indexes into the sequence.
    pub range: Range<usize>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Computes the page shown for `cursor`.
///
/// An empty sequence yields an empty range.
#[must_use]
pub fn page(len: usize, cursor: usize, page_size: usize) -> Page {
    let start = cursor.min(len);
    let end = start.saturating_add(page_size).min(len);

    Page {
        range: start..end,
        has_previous: start > 0,
        has_next: end < len,
    }
}

/// Largest valid cursor for a sequence.
#[must_use]
pub fn max_cursor(len: usize, page_size: usize) -> usize {
    len.saturating_sub(page_size)
}

#[must_use]
pub fn clamp_cursor(cursor: usize, len: usize, page_size: usize) -> usize {
    cursor.min(max_cursor(len, page_size))
}

#[must_use]
pub fn next_cursor(cursor: usize, len: usize, page_size: usize) -> usize {
    clamp_cursor(cursor.saturating_add(page_size), len, page_size)
}

#[must_use]
pub fn previous_cursor(cursor: usize, len: usize, page_size: usize) -> usize {
    clamp_cursor(cursor.saturating_sub(page_size), len, page_size)
}

/// Cursor for the page containing the 0-based `index`.
#[must_use]
pub fn cursor_for_index(index: usize, len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    clamp_cursor(index - index % page_size, len, page_size)
}
