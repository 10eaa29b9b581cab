#![allow(dead_code)]

use std::path::{Path, PathBuf};

use salary_tables::{Record, RecordSet};

/// The three-record sample used throughout the tests
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(2023, "Engineer", 100.0),
        Record::new(2023, "Engineer", 200.0),
        Record::new(2023, "Analyst", 50.0),
    ]
}

/// A record set spanning several years, with interleaved job titles
#[must_use]
pub fn multi_year_records() -> RecordSet {
    vec![
        Record::new(2024, "Data Scientist", 185_000.0),
        Record::new(2023, "Data Engineer", 142_000.0),
        Record::new(2024, "Data Engineer", 150_000.0),
        Record::new(2022, "Data Analyst", 88_000.0),
        Record::new(2024, "Data Scientist", 165_000.0),
        Record::new(2023, "Data Analyst", 95_000.0),
        Record::new(2022, "Data Analyst", 91_000.0),
        Record::new(2023, "Data Engineer", 138_500.0),
    ]
    .into()
}

/// Path to the dataset shipped with the crate
#[must_use]
pub fn bundled_dataset() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/salaries.json")
}

/// Serialize records in the survey export format
#[must_use]
pub fn to_survey_json(records: &[Record]) -> String {
    serde_json::to_string(records).unwrap()
}
