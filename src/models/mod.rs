//! Domain models for salary survey data
//!
//! `Record` is the raw observation loaded from the dataset. `YearSummary` and
//! `GroupCount` are the two derived row shapes shown in the tables.

pub mod record;
pub mod summary;

pub use record::Record;
pub use summary::{GroupCount, YearSummary};
