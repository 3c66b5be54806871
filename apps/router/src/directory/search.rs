//! Linear-scan directory filtering.

use crate::models::criteria::Criteria;
use crate::models::employee::DirectoryRecord;

/// Rows matching every present field: id by equality, name/country/job_role by
/// case-insensitive substring. `all` alone selects the whole table; combined with other
/// fields it changes nothing, so adding a field can only shrink the result.
pub fn filter<'a>(records: &'a [DirectoryRecord], criteria: &Criteria) -> Vec<&'a DirectoryRecord> {
    records.iter().filter(|r| matches(r, criteria)).collect()
}

/// Service-level search: criteria that carry nothing at all find nothing.
pub fn search(records: &[DirectoryRecord], criteria: &Criteria) -> Vec<DirectoryRecord> {
    if criteria.is_empty() {
        return Vec::new();
    }
    filter(records, criteria).into_iter().cloned().collect()
}

fn matches(record: &DirectoryRecord, criteria: &Criteria) -> bool {
    criteria.id.map_or(true, |id| record.id == id)
        && contains(&record.name, criteria.name.as_deref())
        && contains(&record.country, criteria.country.as_deref())
        && contains(&record.job_role, criteria.job_role.as_deref())
}

fn contains(field: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |n| field.to_lowercase().contains(&n.trim().to_lowercase()))
}
