//! Highest / lowest queries over the full data sets.
//!
//! Salary: directory and salary table are fetched concurrently, joined on employee id
//! (unmatched rows dropped, later duplicate salary rows overwrite earlier ones) and the
//! extreme `base_salary` is selected. Role: directory roles are ranked through
//! [`role_level`] (lower level = more senior). Ties go to the first employee in
//! directory order.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::agents::{Backend, BackendError};
use crate::models::criteria::Criteria;
use crate::models::employee::DirectoryRecord;
use crate::models::hr::{role_level, HrRecord, SalaryRecord};
use crate::models::routing::QueryType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub comparison: QueryType,
    pub employee: DirectoryRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Employees that took part in the comparison.
    pub considered: usize,
}

#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("No employee salary data found")]
    NoSalaryData,

    #[error("No employee data found")]
    NoEmployeeData,

    #[error("Unknown comparison type: {0}")]
    UnknownType(QueryType),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub async fn compare(
    backend: &dyn Backend,
    query_type: QueryType,
) -> Result<ComparisonResult, ComparisonError> {
    let everything = Criteria::everything().to_query();

    match query_type {
        QueryType::HighestSalary | QueryType::LowestSalary => {
            let (employees, records) = tokio::join!(
                backend.search_directory(&everything),
                backend.search_records(&everything, QueryType::Salary),
            );
            let employees = employees?;
            let salaries: Vec<SalaryRecord> = records?
                .iter()
                .filter_map(HrRecord::as_salary)
                .cloned()
                .collect();
            info!(
                "Comparing {} employees against {} salary rows",
                employees.len(),
                salaries.len()
            );
            salary_extreme(&employees, &salaries, query_type)
        }
        QueryType::HighestRole | QueryType::LowestRole => {
            let employees = backend.search_directory(&everything).await?;
            info!("Ranking {} employees by role", employees.len());
            role_extreme(&employees, query_type)
        }
        other => Err(ComparisonError::UnknownType(other)),
    }
}

fn salary_extreme(
    employees: &[DirectoryRecord],
    salaries: &[SalaryRecord],
    query_type: QueryType,
) -> Result<ComparisonResult, ComparisonError> {
    let by_id: HashMap<u32, &SalaryRecord> = salaries.iter().map(|s| (s.employee_id, s)).collect();
    let joined: Vec<(&DirectoryRecord, &SalaryRecord)> = employees
        .iter()
        .filter_map(|e| by_id.get(&e.id).map(|s| (e, *s)))
        .collect();

    let considered = joined.len();
    let (employee, salary) = first_extreme(
        joined,
        |(_, s)| s.base_salary,
        query_type == QueryType::HighestSalary,
    )
    .ok_or(ComparisonError::NoSalaryData)?;

    Ok(ComparisonResult {
        comparison: query_type,
        employee: employee.clone(),
        salary: Some(salary.clone()),
        level: None,
        considered,
    })
}

fn role_extreme(
    employees: &[DirectoryRecord],
    query_type: QueryType,
) -> Result<ComparisonResult, ComparisonError> {
    // Highest role = smallest level number.
    let employee = first_extreme(
        employees,
        |e| role_level(&e.job_role),
        query_type == QueryType::LowestRole,
    )
    .ok_or(ComparisonError::NoEmployeeData)?;

    Ok(ComparisonResult {
        comparison: query_type,
        employee: employee.clone(),
        salary: None,
        level: Some(role_level(&employee.job_role)),
        considered: employees.len(),
    })
}

/// Max (or min) by `key`, keeping the first of equal candidates.
fn first_extreme<T, K: PartialOrd>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
    max: bool,
) -> Option<T> {
    let mut best: Option<(T, K)> = None;
    for item in items {
        let k = key(&item);
        let replace = match &best {
            None => true,
            Some((_, current)) if max => k > *current,
            Some((_, current)) => k < *current,
        };
        if replace {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}
