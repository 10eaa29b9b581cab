mod utils;

use salary_tables::{GroupCount, aggregate_by_category};
use utils::{multi_year_records, sample_records};

fn group(category: &str, count: usize) -> GroupCount {
    GroupCount {
        category: category.to_string(),
        count,
    }
}

#[test]
fn test_aggregate_counts_in_first_seen_order() {
    let groups = aggregate_by_category(&sample_records(), 2023);
    assert_eq!(groups, vec![group("Engineer", 2), group("Analyst", 1)]);
}

#[test]
fn test_aggregate_ignores_other_years() {
    let records = multi_year_records();

    assert_eq!(
        aggregate_by_category(&records, 2024),
        vec![group("Data Scientist", 2), group("Data Engineer", 1)]
    );
    assert_eq!(
        aggregate_by_category(&records, 2023),
        vec![group("Data Engineer", 2), group("Data Analyst", 1)]
    );
}

#[test]
fn test_aggregate_year_without_records() {
    assert!(aggregate_by_category(&sample_records(), 1999).is_empty());
    assert!(aggregate_by_category(&[], 2023).is_empty());
}

#[test]
fn test_aggregate_single_category() {
    let records = multi_year_records();
    assert_eq!(
        aggregate_by_category(&records, 2022),
        vec![group("Data Analyst", 2)]
    );
}

#[test]
fn test_aggregate_counts_sum_to_year_total() {
    let records = multi_year_records();
    for year in 2019..=2025 {
        let total: usize = aggregate_by_category(&records, year)
            .iter()
            .map(|g| g.count)
            .sum();
        let expected = records.iter().filter(|r| r.year == year).count();
        assert_eq!(total, expected, "year {year}");
    }
}

#[test]
fn test_aggregate_is_repeatable() {
    let records = multi_year_records();
    assert_eq!(
        aggregate_by_category(&records, 2023),
        aggregate_by_category(&records, 2023)
    );
}
