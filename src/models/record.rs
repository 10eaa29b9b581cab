//! Salary record model
//!
//! This module contains the `Record` model, one observation from the salary
//! survey. Field names on the wire follow the survey export (`work_year`,
//! `job_title`, `salary`); any additional columns in the export are ignored.

use serde::{Deserialize, Serialize};

/// A single salary observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Year the salary was paid
    #[serde(rename = "work_year")]
    pub year: i32,
    /// Job title of the respondent
    #[serde(rename = "job_title")]
    pub category: String,
    /// Salary amount
    #[serde(rename = "salary")]
    pub value: f64,
}

impl Record {
    /// Create a new salary record
    #[must_use]
    pub fn new(year: i32, category: impl Into<String>, value: f64) -> Self {
        Self {
            year,
            category: category.into(),
            value,
        }
    }

    /// Check whether the record belongs to the given year
    #[must_use]
    pub fn is_year(&self, year: i32) -> bool {
        self.year == year
    }

    /// Check whether the record has exactly the given job title
    #[must_use]
    pub fn is_category(&self, category: &str) -> bool {
        self.category == category
    }
}
