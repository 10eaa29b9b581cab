//! Table view state
//!
//! `TableView` owns the shared record set and the two pieces of view state:
//! the drill-down selection and the job-title filter. Activating a year
//! recomputes the drill-down rows from the full record set and replaces them
//! wholesale. Filtered records are borrowed from the shared set on each read.
//!
//! The year summary and the filtered records are separate views: the filter
//! never changes the summary rows or the drill-down.

use crate::algorithm::{aggregate_by_category, build_year_summaries};
use crate::config::SalaryTablesConfig;
use crate::error::Result;
use crate::filter::{active_category, filter_by_category_ref, unique_categories};
use crate::loader::RecordSet;
use crate::models::{GroupCount, Record, YearSummary};
use crate::table::{Page, paginate};

/// Drill-down selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No year has been activated
    #[default]
    Unselected,
    /// The drill-down shows the job titles of this year
    YearSelected(i32),
}

impl Selection {
    /// The active year, if any
    #[must_use]
    pub fn year(self) -> Option<i32> {
        match self {
            Self::Unselected => None,
            Self::YearSelected(year) => Some(year),
        }
    }
}

/// Read model and event handlers for the salary tables
#[derive(Debug, Clone)]
pub struct TableView {
    records: RecordSet,
    config: SalaryTablesConfig,
    selection: Selection,
    category_filter: Option<String>,
    year_rows: Vec<YearSummary>,
    drill_down_rows: Vec<GroupCount>,
}

impl TableView {
    /// Build the initial view: summary rows computed, nothing selected
    pub fn new(records: RecordSet, config: SalaryTablesConfig) -> Result<Self> {
        config.validate()?;
        let year_rows = build_year_summaries(&records, &config.candidate_years);
        log::debug!(
            "Built {} year summary rows from {} records",
            year_rows.len(),
            records.len()
        );

        Ok(Self {
            records,
            config,
            selection: Selection::Unselected,
            category_filter: None,
            year_rows,
            drill_down_rows: Vec::new(),
        })
    }

    /// A year row was activated: show its job titles
    pub fn on_year_activated(&mut self, year: i32) {
        log::info!("Drilling down into {year}");
        self.selection = Selection::YearSelected(year);
        self.drill_down_rows = aggregate_by_category(&self.records, year);
    }

    /// The job-title filter changed; an empty selection resets the view
    pub fn on_category_filter_changed(&mut self, category: Option<&str>) {
        let category = active_category(category);
        self.category_filter = category.map(str::to_owned);
        log::debug!(
            "Filter {:?} keeps {} of {} records",
            self.category_filter,
            self.filtered_records().len(),
            self.records.len()
        );
    }

    /// Dismiss the drill-down and return to the unselected state
    pub fn clear_selection(&mut self) {
        self.selection = Selection::Unselected;
        self.drill_down_rows = Vec::new();
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        self.category_filter.as_deref()
    }

    #[must_use]
    pub fn config(&self) -> &SalaryTablesConfig {
        &self.config
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Rows of the year summary table
    #[must_use]
    pub fn year_rows(&self) -> &[YearSummary] {
        &self.year_rows
    }

    /// Rows of the drill-down table, or `None` while no year is active
    #[must_use]
    pub fn drill_down_rows(&self) -> Option<&[GroupCount]> {
        self.selection.year().map(|_| self.drill_down_rows.as_slice())
    }

    /// One page of the drill-down table, sized by the configuration
    #[must_use]
    pub fn drill_down_page(&self, index: usize) -> Option<Page<GroupCount>> {
        self.drill_down_rows()
            .map(|rows| paginate(rows, self.config.page_size, index))
    }

    /// Records passing the job-title filter, borrowed from the shared set
    #[must_use]
    pub fn filtered_records(&self) -> Vec<&Record> {
        filter_by_category_ref(&self.records, self.category_filter())
    }

    /// Options for the job-title filter control
    #[must_use]
    pub fn filter_options(&self) -> Vec<String> {
        unique_categories(&self.records)
    }
}
