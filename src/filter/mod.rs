//! Category filtering for the records view
//!
//! This module backs the job-title selection control. An empty selection
//! resets the view to the full record set; any other selection keeps only
//! exact matches, preserving record order.

use itertools::Itertools;

use crate::models::Record;

/// Normalise a filter selection: `None` and `Some("")` both mean "no filter"
#[must_use]
pub fn active_category(category: Option<&str>) -> Option<&str> {
    category.filter(|c| !c.is_empty())
}

/// Return the records matching the selected job title
///
/// # Arguments
/// * `records` - The full record set
/// * `category` - Selected job title, or `None`/empty for all records
#[must_use]
pub fn filter_by_category(records: &[Record], category: Option<&str>) -> Vec<Record> {
    filter_by_category_ref(records, category)
        .into_iter()
        .cloned()
        .collect()
}

/// Borrowing variant of [`filter_by_category`]
#[must_use]
pub fn filter_by_category_ref<'a>(records: &'a [Record], category: Option<&str>) -> Vec<&'a Record> {
    match active_category(category) {
        Some(category) => records.iter().filter(|r| r.is_category(category)).collect(),
        None => records.iter().collect(),
    }
}

/// Distinct job titles in first-seen order
///
/// These are the options offered by the filter-selection control.
#[must_use]
pub fn unique_categories(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.category.as_str())
        .unique()
        .map(str::to_owned)
        .collect()
}
