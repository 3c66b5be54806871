//! Two-step agent-to-agent sequencing for questions about one person.
//!
//! ResolveIdentity (directory) → FetchDetail (records, keyed by the resolved id) → Merge.
//! Any failure is terminal; the records backend is never called without an identity.

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::agents::{Backend, BackendError};
use crate::models::criteria::Criteria;
use crate::models::employee::DirectoryRecord;
use crate::models::hr::HrRecord;
use crate::models::routing::QueryType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedResult {
    pub employee_info: DirectoryRecord,
    pub hr_info: Vec<HrRecord>,
    pub query_type: QueryType,
}

#[derive(Debug, Error)]
pub enum OrchestrationError {
    #[error("Employee not found")]
    NotFound,

    #[error("Could not determine employee ID")]
    MissingIdentity,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

enum Stage {
    ResolveIdentity,
    FetchDetail(DirectoryRecord),
    Merge(DirectoryRecord, Vec<HrRecord>),
}

/// Resolves `query` to one employee via the directory, then fetches that employee's
/// `query_type` rows from the records backend. The first directory match wins.
pub async fn resolve_and_fetch(
    backend: &dyn Backend,
    query: &str,
    query_type: QueryType,
) -> Result<MergedResult, OrchestrationError> {
    let mut stage = Stage::ResolveIdentity;
    loop {
        stage = match stage {
            Stage::ResolveIdentity => {
                let employee = backend
                    .search_directory(query)
                    .await?
                    .into_iter()
                    .next()
                    .ok_or(OrchestrationError::NotFound)?;
                if employee.id == 0 {
                    return Err(OrchestrationError::MissingIdentity);
                }
                info!("Resolved employee: {} (ID: {})", employee.name, employee.id);
                Stage::FetchDetail(employee)
            }
            Stage::FetchDetail(employee) => {
                let keys = Criteria::for_employee(&employee).to_query();
                info!("Fetching {query_type} for ID {}", employee.id);
                let hr_info = backend.search_records(&keys, query_type).await?;
                Stage::Merge(employee, hr_info)
            }
            Stage::Merge(employee_info, hr_info) => {
                return Ok(MergedResult {
                    employee_info,
                    hr_info,
                    query_type,
                })
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hr::SalaryRecord;
    use crate::test_support::{sample_employees, MockBackend};

    fn bob_salary() -> HrRecord {
        HrRecord::Salary(SalaryRecord {
            employee_id: 2,
            base_salary: 105_000.0,
            currency: "USD".to_string(),
            bonus_eligible: true,
        })
    }

    #[tokio::test]
    async fn test_records_called_with_resolved_id() {
        let bob = sample_employees().remove(1);
        let backend = MockBackend::new(vec![bob.clone()], vec![bob_salary()]);

        let merged = resolve_and_fetch(&backend, "What is Bob's salary?", QueryType::Salary)
            .await
            .unwrap();

        assert_eq!(merged.employee_info, bob);
        assert_eq!(merged.hr_info, vec![bob_salary()]);
        assert_eq!(backend.directory_calls(), vec!["What is Bob's salary?"]);

        let calls = backend.records_calls();
        assert_eq!(calls.len(), 1);
        let (query, query_type) = &calls[0];
        let sent: Criteria = serde_json::from_str(query).unwrap();
        assert_eq!(sent.id, Some(2));
        assert_eq!(sent.job_role.as_deref(), Some("Data Scientist"));
        assert_eq!(*query_type, QueryType::Salary);
    }

    #[tokio::test]
    async fn test_first_directory_match_wins() {
        let backend = MockBackend::new(sample_employees(), vec![]);

        let merged = resolve_and_fetch(&backend, "anyone", QueryType::Schedule)
            .await
            .unwrap();
        assert_eq!(merged.employee_info.id, 1);
        assert!(merged.hr_info.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_never_calls_records() {
        let backend = MockBackend::new(vec![], vec![bob_salary()]);

        let err = resolve_and_fetch(&backend, "Nobody", QueryType::Salary)
            .await
            .unwrap_err();
        assert!(matches!(err, OrchestrationError::NotFound));
        assert_eq!(err.to_string(), "Employee not found");
        assert!(backend.records_calls().is_empty());
    }

    #[tokio::test]
    async fn test_zero_id_is_missing_identity() {
        let ghost = DirectoryRecord::new(0, "Ghost", "Nowhere", "Unknown");
        let backend = MockBackend::new(vec![ghost], vec![]);

        let err = resolve_and_fetch(&backend, "ghost", QueryType::Salary)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Could not determine employee ID");
        assert!(backend.records_calls().is_empty());
    }

    #[tokio::test]
    async fn test_backend_errors_carry_the_agent_name() {
        let backend = MockBackend {
            fail_directory: true,
            ..MockBackend::default()
        };
        let err = resolve_and_fetch(&backend, "bob", QueryType::Salary)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Employee Info Agent"));

        let backend = MockBackend {
            fail_records: true,
            ..MockBackend::new(sample_employees(), vec![])
        };
        let err = resolve_and_fetch(&backend, "bob", QueryType::Salary)
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("HR Agent"));
    }
}
