//! Table presentation helpers
//!
//! Sorting and paging operate on already-derived rows and return new vectors;
//! the builders' outputs are never edited in place.

pub mod page;
pub mod render;
pub mod sort;

pub use page::{Page, paginate};
pub use render::{render_group_counts, render_year_summaries};
pub use sort::{GroupColumn, SortOrder, YearColumn, sort_group_counts, sort_year_summaries};
