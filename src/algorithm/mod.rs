//! Table-building algorithms
//!
//! Both builders are pure functions over the full record set. They never
//! fail: a year without data produces a zero-filled or empty result.

pub mod aggregate;
pub mod summary;

pub use aggregate::aggregate_by_category;
pub use summary::{DEFAULT_CANDIDATE_YEARS, build_year_summaries, summarize_year};
