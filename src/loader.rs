//! Dataset loading
//!
//! Turns the survey export (a JSON array of objects) into a typed, shared
//! record set. This is the only place where untrusted data is checked; the
//! table builders assume well-formed records.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::error::LoadError;
use crate::models::Record;
use crate::utils::logging::{
    DatasetSource, log_dataset_load_start, log_dataset_loaded, log_dataset_rejected,
};

/// An immutable record set shared by every view of the tables
pub type RecordSet = Arc<[Record]>;

/// Load and validate a dataset file
///
/// # Arguments
/// * `path` - Path to a JSON array of salary records
/// * `validate` - Whether to reject records with unusable values
pub fn load_records(path: &Path, validate: bool) -> Result<RecordSet, LoadError> {
    let source = DatasetSource::File(path);
    log_dataset_load_start(source);
    let start = Instant::now();

    let result = fs::read_to_string(path)
        .map_err(|err| LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })
        .and_then(|content| Ok(serde_json::from_str::<Vec<Record>>(&content)?));
    finish(source, result, validate, Some(start))
}

/// Parse a dataset held in memory
pub fn parse_records(json: &str, validate: bool) -> Result<RecordSet, LoadError> {
    let result = serde_json::from_str(json).map_err(LoadError::from);
    finish(DatasetSource::Memory, result, validate, None)
}

/// Parse a dataset from any reader
pub fn read_records<R: Read>(reader: R, validate: bool) -> Result<RecordSet, LoadError> {
    let result = serde_json::from_reader(reader).map_err(LoadError::from);
    finish(DatasetSource::Reader, result, validate, None)
}

fn finish(
    source: DatasetSource<'_>,
    parsed: Result<Vec<Record>, LoadError>,
    validate: bool,
    start: Option<Instant>,
) -> Result<RecordSet, LoadError> {
    let checked = parsed.and_then(|records| {
        if validate {
            validate_records(&records)?;
        }
        Ok(records)
    });

    match checked {
        Ok(records) => {
            log_dataset_loaded(source, records.len(), validate, start.map(|s| s.elapsed()));
            Ok(records.into())
        }
        Err(error) => {
            log_dataset_rejected(source, &error);
            Err(error)
        }
    }
}

/// Check that every record can take part in the tables
///
/// Salaries must be finite and non-negative, and job titles non-empty (the
/// empty title is reserved for "no filter").
pub fn validate_records(records: &[Record]) -> Result<(), LoadError> {
    for (index, record) in records.iter().enumerate() {
        if !record.value.is_finite() || record.value < 0.0 {
            return Err(LoadError::InvalidRecord {
                index,
                reason: format!("salary {} is not a non-negative amount", record.value),
            });
        }
        if record.category.trim().is_empty() {
            return Err(LoadError::InvalidRecord {
                index,
                reason: "job title is empty".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_records(r#"{"work_year": 2023}"#, true);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_validation_reports_row_index() {
        let json = r#"[
            {"work_year": 2023, "job_title": "Analyst", "salary": 10},
            {"work_year": 2023, "job_title": "", "salary": 10}
        ]"#;
        match parse_records(json, true) {
            Err(LoadError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(parse_records(json, false).unwrap().len(), 2);
    }
}
