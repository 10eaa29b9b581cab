//! Client-side paging of table rows

use serde::Serialize;

/// One page of table rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Zero-based page index, clamped to the last page
    pub index: usize,
    /// Number of pages; at least 1 even for an empty table
    pub total_pages: usize,
    /// Total number of rows across all pages
    pub total_rows: usize,
    pub rows: Vec<T>,
}

/// Slice out one page of rows
///
/// A page index past the end yields the last page. A zero page size is
/// treated as 1.
#[must_use]
pub fn paginate<T: Clone>(rows: &[T], page_size: usize, index: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = rows.len().div_ceil(page_size).max(1);
    let index = index.min(total_pages - 1);
    let start = (index * page_size).min(rows.len());
    let end = (start + page_size).min(rows.len());

    Page {
        index,
        total_pages,
        total_rows: rows.len(),
        rows: rows[start..end].to_vec(),
    }
}
