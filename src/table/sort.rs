//! Column sorting for the two tables

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::SalaryTablesError;
use crate::models::{GroupCount, YearSummary};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Sortable columns of the year summary table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearColumn {
    Year,
    TotalJobs,
    AverageSalary,
}

impl YearColumn {
    /// Column header
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::TotalJobs => "Total Jobs",
            Self::AverageSalary => "Avg Salary (in USD)",
        }
    }

    fn compare(self, a: &YearSummary, b: &YearSummary) -> Ordering {
        match self {
            Self::Year => a.year.cmp(&b.year),
            Self::TotalJobs => a.count.cmp(&b.count),
            Self::AverageSalary => a.average.cmp(&b.average),
        }
    }
}

/// Sortable columns of the drill-down table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupColumn {
    JobTitle,
    NumberOfJobs,
}

impl GroupColumn {
    /// Column header
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::JobTitle => "Job Title",
            Self::NumberOfJobs => "Number of Jobs",
        }
    }

    fn compare(self, a: &GroupCount, b: &GroupCount) -> Ordering {
        match self {
            Self::JobTitle => a.category.cmp(&b.category),
            Self::NumberOfJobs => a.count.cmp(&b.count),
        }
    }
}

impl FromStr for YearColumn {
    type Err = SalaryTablesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "count" | "total" | "total-jobs" => Ok(Self::TotalJobs),
            "average" | "avg" | "salary" => Ok(Self::AverageSalary),
            other => Err(SalaryTablesError::config(format!(
                "unknown year table column '{other}'"
            ))),
        }
    }
}

impl FromStr for GroupColumn {
    type Err = SalaryTablesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" | "job-title" => Ok(Self::JobTitle),
            "count" | "jobs" => Ok(Self::NumberOfJobs),
            other => Err(SalaryTablesError::config(format!(
                "unknown job title table column '{other}'"
            ))),
        }
    }
}

/// Return the summary rows sorted by a column; ties keep their order
#[must_use]
pub fn sort_year_summaries(
    rows: &[YearSummary],
    column: YearColumn,
    order: SortOrder,
) -> Vec<YearSummary> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| order.apply(column.compare(a, b)));
    sorted
}

/// Return the drill-down rows sorted by a column; ties keep their order
#[must_use]
pub fn sort_group_counts(
    rows: &[GroupCount],
    column: GroupColumn,
    order: SortOrder,
) -> Vec<GroupCount> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| order.apply(column.compare(a, b)));
    sorted
}
