//! A Rust library for summarising salary survey data into a year summary
//! table and a per-year job-title drill-down table.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod table;
pub mod utils;
pub mod view;

// Re-export the most common types for easier use
pub use config::SalaryTablesConfig;
pub use error::{LoadError, Result, SalaryTablesError};
pub use loader::{RecordSet, load_records, parse_records, read_records};
pub use models::{GroupCount, Record, YearSummary};
pub use view::{Selection, TableView};

// Table builders
pub use algorithm::{aggregate_by_category, build_year_summaries};
pub use filter::{filter_by_category, unique_categories};
