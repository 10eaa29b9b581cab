//! Derived table rows
//!
//! Each row type has its own column enum in `crate::table::sort`; there is no
//! shared column abstraction between the two tables.

use serde::Serialize;

/// One row of the year summary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSummary {
    /// Candidate year
    pub year: i32,
    /// Number of records in the year
    pub count: usize,
    /// Average salary rounded up, or 0 for an empty year
    pub average: u64,
}

impl YearSummary {
    /// A row for a year with no records
    #[must_use]
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            count: 0,
            average: 0,
        }
    }
}

/// One row of the drill-down table: how many records share a job title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    /// Job title
    pub category: String,
    /// Number of records with this job title, always at least 1
    pub count: usize,
}
