//! Configuration for the salary tables.

use std::fmt;

use crate::algorithm::DEFAULT_CANDIDATE_YEARS;
use crate::error::{Result, SalaryTablesError};

/// Rows per drill-down page when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for building the salary tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryTablesConfig {
    /// Years shown in the summary table, in display order
    pub candidate_years: Vec<i32>,
    /// Rows per page of the drill-down table
    pub page_size: usize,
    /// Reject records with unusable salaries or job titles at load time
    pub validate_records: bool,
}

impl Default for SalaryTablesConfig {
    fn default() -> Self {
        Self {
            candidate_years: DEFAULT_CANDIDATE_YEARS.to_vec(),
            page_size: DEFAULT_PAGE_SIZE,
            validate_records: true,
        }
    }
}

impl SalaryTablesConfig {
    /// Set the candidate years
    #[must_use]
    pub fn with_candidate_years(mut self, years: Vec<i32>) -> Self {
        self.candidate_years = years;
        self
    }

    /// Set the drill-down page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Enable or disable record validation on load
    #[must_use]
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_records = validate;
        self
    }

    /// Check that the configuration can drive the tables
    pub fn validate(&self) -> Result<()> {
        if self.candidate_years.is_empty() {
            return Err(SalaryTablesError::config(
                "at least one candidate year is required",
            ));
        }
        if self.page_size == 0 {
            return Err(SalaryTablesError::config("page size must be positive"));
        }
        Ok(())
    }
}

impl fmt::Display for SalaryTablesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Salary Tables Configuration:")?;
        let years = self
            .candidate_years
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "  Candidate Years: {years}")?;
        writeln!(f, "  Page Size: {}", self.page_size)?;
        writeln!(f, "  Validate Records: {}", self.validate_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SalaryTablesConfig::default();
        assert_eq!(config.candidate_years, vec![2024, 2023, 2022, 2021, 2020]);
        assert_eq!(config.page_size, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        let no_years = SalaryTablesConfig::default().with_candidate_years(Vec::new());
        assert!(matches!(no_years.validate(), Err(SalaryTablesError::Config(_))));

        let no_rows = SalaryTablesConfig::default().with_page_size(0);
        assert!(matches!(no_rows.validate(), Err(SalaryTablesError::Config(_))));
    }
}
