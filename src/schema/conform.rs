//! Record conformance

use super::types::PropertiesList;
use crate::types::Record;

/// Drop top-level properties the schema does not declare
///
/// Returns the conformed record and the names that were removed. Values of
/// declared properties pass through untouched; type mismatches are left for
/// downstream validation.
pub fn conform_record(schema: &PropertiesList, mut record: Record) -> (Record, Vec<String>) {
    let mut removed: Vec<String> = record
        .keys()
        .filter(|key| !schema.contains(key))
        .cloned()
        .collect();
    removed.sort();

    for key in &removed {
        record.remove(key);
    }

    (record, removed)
}
