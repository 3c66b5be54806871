//! Axum route handlers for the directory backend.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::directory::search::search;
use crate::errors::AppError;
use crate::extraction::resolve_criteria;
use crate::models::employee::DirectoryRecord;
use crate::models::task::{TaskRequest, TaskResponse};
use crate::state::DirectoryState;

/// POST /tasks/send
///
/// Resolves criteria from `query` (structured pass-through or extractor) and returns
/// the matching directory entries. A missing or blank `query` is a 400.
pub async fn handle_task(
    State(state): State<DirectoryState>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse<DirectoryRecord>>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let query = request
        .query()
        .ok_or_else(|| AppError::Validation("Missing query.".to_string()))?;

    info!("Directory task received: query={query:?}");

    let criteria = resolve_criteria(query, state.extractor.as_ref()).await;
    let results = search(&state.employees, &criteria);

    info!(?criteria, "Directory returning {} results", results.len());
    Ok(Json(TaskResponse { results }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::routes::auth::API_KEY_HEADER;
    use crate::test_support::{directory_app, TEST_SECRET};

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_task(key: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/tasks/send")
            .header("Content-Type", "application/json");
        if let Some(key) = key {
            builder = builder.header(API_KEY_HEADER, key);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_valid_query_returns_results_list() {
        let (status, body) = send(
            directory_app(),
            post_task(Some(TEST_SECRET), r#"{"query": "who is Alice Smith"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["job_role"], "Software Engineer");
    }

    #[tokio::test]
    async fn test_unmatched_query_returns_empty_list() {
        let (status, body) = send(
            directory_app(),
            post_task(Some(TEST_SECRET), r#"{"query": "what's the weather like"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"results": []}));
    }

    #[tokio::test]
    async fn test_show_all_employees_returns_entire_directory() {
        let (_, body) = send(
            directory_app(),
            post_task(Some(TEST_SECRET), r#"{"query": "show all employees"}"#),
        )
        .await;
        assert_eq!(body["results"].as_array().unwrap().len(), 40);
    }

    #[tokio::test]
    async fn test_structured_criteria_pass_through() {
        let (_, body) = send(
            directory_app(),
            post_task(Some(TEST_SECRET), r#"{"query": "{\"country\": \"japan\"}"}"#),
        )
        .await;
        let names: Vec<&str> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["George Green", "Alex VP Engineering"]);
    }

    #[tokio::test]
    async fn test_missing_or_wrong_key_is_401_regardless_of_body() {
        for (key, body) in [
            (None, r#"{"query": "show all employees"}"#),
            (Some("wrong"), r#"{"query": "show all employees"}"#),
            (None, "not json at all"),
            (Some("wrong"), "{}"),
        ] {
            let (status, _) = send(directory_app(), post_task(key, body)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "key={key:?} body={body}");
        }
    }

    #[tokio::test]
    async fn test_root_requires_key() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, _) = send(directory_app(), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .uri("/")
            .header(API_KEY_HEADER, TEST_SECRET)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(directory_app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "directory");
    }

    #[tokio::test]
    async fn test_missing_query_is_400() {
        for body in [r#"{}"#, r#"{"query": ""}"#, r#"{"query": null}"#, "garbage"] {
            let (status, _) = send(directory_app(), post_task(Some(TEST_SECRET), body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body={body}");
        }
    }
}
