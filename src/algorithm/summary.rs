//! Year summary builder
//!
//! Computes the record count and the rounded-up average salary for each
//! candidate year.

use crate::models::{Record, YearSummary};

/// Years shown in the summary table when no other list is configured
pub const DEFAULT_CANDIDATE_YEARS: [i32; 5] = [2024, 2023, 2022, 2021, 2020];

/// Build one summary row per candidate year, in the order given
///
/// # Arguments
/// * `records` - The full record set
/// * `years` - Candidate years; duplicates produce duplicate rows
///
/// # Returns
/// A vector with exactly `years.len()` entries
#[must_use]
pub fn build_year_summaries(records: &[Record], years: &[i32]) -> Vec<YearSummary> {
    years
        .iter()
        .map(|&year| summarize_year(records, year))
        .collect()
}

/// Summarize a single year
///
/// The average is the ceiling of the salary total over the record count, so
/// fractional averages always round up.
#[must_use]
pub fn summarize_year(records: &[Record], year: i32) -> YearSummary {
    let (count, total) = records
        .iter()
        .filter(|record| record.is_year(year))
        .fold((0usize, 0.0f64), |(count, total), record| {
            (count + 1, total + record.value)
        });

    if count == 0 {
        return YearSummary::empty(year);
    }

    YearSummary {
        year,
        count,
        average: ceil_average(total, count),
    }
}

/// Round `total / count` up to a whole amount
///
/// Negative or NaN quotients saturate to 0 on the cast.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_average(total: f64, count: usize) -> u64 {
    (total / count as f64).ceil() as u64
}
