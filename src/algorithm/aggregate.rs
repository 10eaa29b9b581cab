//! Group-by aggregator for the drill-down table

use rustc_hash::FxHashMap;

use crate::models::{GroupCount, Record};

/// Count the records of one year per job title
///
/// Groups are emitted in the order their job title is first seen among the
/// matching records. A year without records yields an empty vector.
#[must_use]
pub fn aggregate_by_category(records: &[Record], year: i32) -> Vec<GroupCount> {
    let mut groups: Vec<GroupCount> = Vec::new();
    let mut slots: FxHashMap<&str, usize> = FxHashMap::default();

    for record in records.iter().filter(|record| record.is_year(year)) {
        match slots.get(record.category.as_str()) {
            Some(&slot) => groups[slot].count += 1,
            None => {
                slots.insert(record.category.as_str(), groups.len());
                groups.push(GroupCount {
                    category: record.category.clone(),
                    count: 1,
                });
            }
        }
    }

    log::debug!("Aggregated {} job titles for {year}", groups.len());
    groups
}
