//! Error handling for salary-tables.
//!
//! The table builders are total and never fail. Errors only arise at the
//! edges: reading the dataset and validating user configuration.

use std::io;
use std::path::PathBuf;

/// Errors raised while loading a salary dataset
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The dataset file could not be read
    #[error("Failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dataset is not a JSON array of salary records
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record parsed but carries a value the tables cannot use
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Specialized error type for salary-tables
#[derive(Debug, thiserror::Error)]
pub enum SalaryTablesError {
    /// Error loading the dataset
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Error in the table configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SalaryTablesError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type for salary-tables operations
pub type Result<T> = std::result::Result<T, SalaryTablesError>;
