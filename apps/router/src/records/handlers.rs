//! Axum route handlers for the records backend.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::resolve_criteria;
use crate::models::hr::HrRecord;
use crate::models::routing::QueryType;
use crate::models::task::{TaskRequest, TaskResponse};
use crate::records::search::{search, RecordKind};
use crate::state::RecordsState;

/// POST /hr-tasks/send
///
/// `query_type` picks the table (unknown or absent → general → salaries); `query` is
/// resolved to criteria as on the directory backend. A missing or blank `query` is a 400.
pub async fn handle_task(
    State(state): State<RecordsState>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse<HrRecord>>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let query = request
        .query()
        .ok_or_else(|| AppError::Validation("Missing query.".to_string()))?;
    let query_type = request
        .query_type
        .as_deref()
        .and_then(QueryType::parse)
        .unwrap_or_default();

    info!("HR task received: query={query:?}, query_type={query_type}");

    let criteria = resolve_criteria(query, state.extractor.as_ref()).await;
    let kind = RecordKind::for_query_type(query_type);
    let results = search(&state.tables, kind, &criteria);

    info!(?criteria, ?kind, "HR returning {} results", results.len());
    Ok(Json(TaskResponse { results }))
}
