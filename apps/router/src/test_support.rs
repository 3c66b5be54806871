//! Shared fixtures for unit tests: seeded in-process services, stub servers and an
//! in-memory [`Backend`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{routing::post, Json, Router};
use serde_json::Value;

use crate::agents::{Agent, Backend, BackendError};
use crate::config::{Config, LlmConfig};
use crate::directory::seed::seed_directory;
use crate::extraction::{KeywordExtractor, Vocabulary};
use crate::models::employee::DirectoryRecord;
use crate::models::hr::{HrRecord, ROLE_LEVELS};
use crate::models::routing::QueryType;
use crate::records::seed::RecordTables;
use crate::routes::auth::SharedSecret;
use crate::routes::{build_directory_router, build_records_router};
use crate::state::{DirectoryState, RecordsState};

pub const TEST_SECRET: &str = "test-secret";

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Seeded directory service with keyword extraction.
pub fn directory_app() -> Router {
    let employees = seed_directory();
    let extractor = KeywordExtractor::new(Vocabulary::from_directory(&employees));
    let state = DirectoryState {
        employees: employees.into(),
        extractor: Arc::new(extractor),
    };
    build_directory_router(state, SharedSecret::new(TEST_SECRET))
}

/// Seeded records service with role-only keyword extraction.
pub fn records_app() -> Router {
    let extractor =
        KeywordExtractor::new(Vocabulary::from_roles(ROLE_LEVELS.iter().map(|(r, _, _)| *r)));
    let state = RecordsState {
        tables: Arc::new(RecordTables::seeded()),
        extractor: Arc::new(extractor),
    };
    build_records_router(state, SharedSecret::new(TEST_SECRET))
}

/// Serves `app` on an ephemeral local port; returns its base URL.
pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A completion endpoint that answers every request with `body`. Returns its full URL.
pub async fn completion_stub(body: Value) -> String {
    let app = Router::new().route(
        COMPLETIONS_PATH,
        post(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    );
    format!("{}{COMPLETIONS_PATH}", spawn_app(app).await)
}

/// A completion endpoint whose reply content is `text`.
pub async fn completion_reply(text: &str) -> String {
    completion_stub(serde_json::json!({
        "choices": [{"message": {"content": text}}]
    }))
    .await
}

/// A completion endpoint that never answers within any test timeout.
pub async fn stalled_completion_stub() -> String {
    let app = Router::new().route(
        COMPLETIONS_PATH,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(Value::Null)
        }),
    );
    format!("{}{COMPLETIONS_PATH}", spawn_app(app).await)
}

pub fn llm_config(endpoint: &str) -> LlmConfig {
    LlmConfig {
        endpoint: endpoint.to_string(),
        api_key: "test".to_string(),
        model: "test-model".to_string(),
        timeout: Duration::from_millis(500),
    }
}

/// Client-side config pointing at the given service base URLs.
pub fn backend_config(directory_url: &str, records_url: &str, secret: &str) -> Config {
    Config {
        llm: None,
        enable_llm_extraction: false,
        shared_secret: secret.to_string(),
        directory_url: directory_url.to_string(),
        records_url: records_url.to_string(),
        directory_port: 0,
        records_port: 0,
        backend_timeout: Duration::from_secs(5),
        rust_log: "debug".to_string(),
    }
}

pub fn sample_employees() -> Vec<DirectoryRecord> {
    vec![
        DirectoryRecord::new(1, "Alice Smith", "USA", "Software Engineer"),
        DirectoryRecord::new(2, "Bob Johnson", "Canada", "Data Scientist"),
        DirectoryRecord::new(3, "Charlie Lee", "UK", "CEO"),
    ]
}

/// In-memory backend: returns fixed rows for any query and records every call.
#[derive(Default)]
pub struct MockBackend {
    pub employees: Vec<DirectoryRecord>,
    pub records: Vec<HrRecord>,
    pub fail_directory: bool,
    pub fail_records: bool,
    pub directory_calls: Mutex<Vec<String>>,
    pub records_calls: Mutex<Vec<(String, QueryType)>>,
}

impl MockBackend {
    pub fn new(employees: Vec<DirectoryRecord>, records: Vec<HrRecord>) -> Self {
        Self {
            employees,
            records,
            ..Self::default()
        }
    }

    pub fn directory_calls(&self) -> Vec<String> {
        self.directory_calls.lock().unwrap().clone()
    }

    pub fn records_calls(&self) -> Vec<(String, QueryType)> {
        self.records_calls.lock().unwrap().clone()
    }
}

fn unavailable(agent: Agent) -> BackendError {
    BackendError::Status {
        agent,
        status: 503,
        message: "unavailable".to_string(),
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn search_directory(&self, query: &str) -> Result<Vec<DirectoryRecord>, BackendError> {
        self.directory_calls.lock().unwrap().push(query.to_string());
        if self.fail_directory {
            return Err(unavailable(Agent::Directory));
        }
        Ok(self.employees.clone())
    }

    async fn search_records(
        &self,
        query: &str,
        query_type: QueryType,
    ) -> Result<Vec<HrRecord>, BackendError> {
        self.records_calls
            .lock()
            .unwrap()
            .push((query.to_string(), query_type));
        if self.fail_records {
            return Err(unavailable(Agent::Records));
        }
        Ok(self.records.clone())
    }
}
