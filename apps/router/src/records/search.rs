//! Linear-scan filtering over the records tables.
//!
//! Salary and schedule rows are keyed by employee id, hierarchy rows by role. Names are
//! never resolved here: a caller that only knows a name must ask the directory first.

use crate::models::criteria::Criteria;
use crate::models::hr::HrRecord;
use crate::models::routing::QueryType;
use crate::records::seed::RecordTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Salary,
    Hierarchy,
    Schedule,
}

impl RecordKind {
    /// Table answering a query type. Anything that is not about hierarchy or
    /// schedules is answered from the salary table.
    pub fn for_query_type(query_type: QueryType) -> Self {
        match query_type {
            QueryType::Hierarchy | QueryType::HighestRole | QueryType::LowestRole => {
                RecordKind::Hierarchy
            }
            QueryType::Schedule => RecordKind::Schedule,
            QueryType::Salary
            | QueryType::General
            | QueryType::HighestSalary
            | QueryType::LowestSalary => RecordKind::Salary,
        }
    }

    /// Whether the criteria name anything this table can look up. A salary request
    /// keyed to nobody asks for the whole salary table.
    fn is_addressed_by(self, criteria: &Criteria) -> bool {
        criteria.all
            || match self {
                RecordKind::Salary => criteria.id.is_some() || criteria.is_empty(),
                RecordKind::Schedule => criteria.id.is_some(),
                RecordKind::Hierarchy => criteria.job_role.is_some(),
            }
    }
}

/// Rows of `kind` matching every applicable field. Fields a table has no column for
/// are ignored, so adding a field can only shrink the result.
pub fn filter(tables: &RecordTables, kind: RecordKind, criteria: &Criteria) -> Vec<HrRecord> {
    let id_matches = |employee_id: u32| criteria.id.map_or(true, |id| id == employee_id);

    match kind {
        RecordKind::Salary => tables
            .salaries
            .iter()
            .filter(|s| id_matches(s.employee_id))
            .cloned()
            .map(HrRecord::Salary)
            .collect(),
        RecordKind::Schedule => tables
            .schedules
            .iter()
            .filter(|s| id_matches(s.employee_id))
            .cloned()
            .map(HrRecord::Schedule)
            .collect(),
        RecordKind::Hierarchy => tables
            .hierarchy
            .iter()
            .filter(|h| {
                criteria.job_role.as_deref().map_or(true, |role| {
                    h.job_role
                        .to_lowercase()
                        .contains(&role.trim().to_lowercase())
                })
            })
            .cloned()
            .map(HrRecord::Hierarchy)
            .collect(),
    }
}

/// Service-level search: criteria that address nothing in the table find nothing.
pub fn search(tables: &RecordTables, kind: RecordKind, criteria: &Criteria) -> Vec<HrRecord> {
    if !kind.is_addressed_by(criteria) {
        return Vec::new();
    }
    filter(tables, kind, criteria)
}
