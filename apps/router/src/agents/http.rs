use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::agents::{Agent, Backend, BackendError};
use crate::config::Config;
use crate::models::employee::DirectoryRecord;
use crate::models::hr::HrRecord;
use crate::models::routing::QueryType;
use crate::models::task::{TaskRequest, TaskResponse};
use crate::routes::auth::API_KEY_HEADER;

const DIRECTORY_PATH: &str = "/tasks/send";
const RECORDS_PATH: &str = "/hr-tasks/send";
const MAX_ERROR_BODY: usize = 200;

/// Authenticated HTTP client for both agents. Cheap to clone.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    directory_url: String,
    records_url: String,
    api_key: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(config.backend_timeout).build()?,
            directory_url: endpoint(&config.directory_url, DIRECTORY_PATH),
            records_url: endpoint(&config.records_url, RECORDS_PATH),
            api_key: config.shared_secret.clone(),
        })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        agent: Agent,
        url: &str,
        body: &TaskRequest,
    ) -> Result<Vec<T>, BackendError> {
        debug!(%agent, ?body, "POST {url}");

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(agent, e))?;

        let status = response.status();
        if !status.is_success() {
            let mut message = response.text().await.unwrap_or_default();
            message.truncate(floor_char_boundary(&message, MAX_ERROR_BODY));
            return Err(BackendError::Status {
                agent,
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(agent, e))?;
        let parsed: TaskResponse<T> =
            serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode {
                agent,
                message: e.to_string(),
            })?;
        Ok(parsed.results)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn search_directory(&self, query: &str) -> Result<Vec<DirectoryRecord>, BackendError> {
        self.post(Agent::Directory, &self.directory_url, &TaskRequest::new(query))
            .await
    }

    async fn search_records(
        &self,
        query: &str,
        query_type: QueryType,
    ) -> Result<Vec<HrRecord>, BackendError> {
        let body = TaskRequest::new(query).with_query_type(query_type.as_str());
        self.post(Agent::Records, &self.records_url, &body).await
    }
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

fn transport_error(agent: Agent, source: reqwest::Error) -> BackendError {
    if source.is_timeout() {
        BackendError::Timeout { agent }
    } else {
        BackendError::Transport { agent, source }
    }
}

fn floor_char_boundary(text: &str, max: usize) -> usize {
    if text.len() <= max {
        return text.len();
    }
    (0..=max).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{routing::post, Router};

    use super::*;
    use crate::test_support::{backend_config, directory_app, records_app, spawn_app, TEST_SECRET};

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        assert_eq!(
            endpoint("http://localhost:8000/", DIRECTORY_PATH),
            "http://localhost:8000/tasks/send"
        );
    }

    #[tokio::test]
    async fn test_directory_round_trip() {
        let base = spawn_app(directory_app()).await;
        let backend = HttpBackend::new(&backend_config(&base, &base, TEST_SECRET)).unwrap();

        let found = backend.search_directory("who is Alice Smith").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[tokio::test]
    async fn test_records_round_trip_sends_query_type() {
        let base = spawn_app(records_app()).await;
        let backend = HttpBackend::new(&backend_config(&base, &base, TEST_SECRET)).unwrap();

        let found = backend
            .search_records(r#"{"id": 3}"#, QueryType::Schedule)
            .await
            .unwrap();
        assert!(matches!(&found[..], [HrRecord::Schedule(s)] if s.employee_id == 3));
    }

    #[tokio::test]
    async fn test_wrong_secret_surfaces_status_error_naming_the_agent() {
        let base = spawn_app(directory_app()).await;
        let backend = HttpBackend::new(&backend_config(&base, &base, "wrong")).unwrap();

        let err = backend.search_directory("anyone").await.unwrap_err();
        assert!(matches!(err, BackendError::Status { status: 401, .. }));
        assert!(err.to_string().starts_with("Employee Info Agent: HTTP 401"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let config = backend_config("http://127.0.0.1:1", "http://127.0.0.1:1", TEST_SECRET);
        let backend = HttpBackend::new(&config).unwrap();

        let err = backend
            .search_records("{}", QueryType::Salary)
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Transport { agent: Agent::Records, .. }));
        assert!(err.to_string().starts_with("HR Agent: "));
    }

    #[tokio::test]
    async fn test_slow_backend_times_out() {
        let slow = Router::new().route(
            RECORDS_PATH,
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "{}"
            }),
        );
        let base = spawn_app(slow).await;
        let mut config = backend_config(&base, &base, TEST_SECRET);
        config.backend_timeout = Duration::from_millis(100);
        let backend = HttpBackend::new(&config).unwrap();

        let err = backend
            .search_records("{}", QueryType::Salary)
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Timeout { agent: Agent::Records }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let odd = Router::new().route(DIRECTORY_PATH, post(|| async { "hello" }));
        let base = spawn_app(odd).await;
        let backend = HttpBackend::new(&backend_config(&base, &base, TEST_SECRET)).unwrap();

        let err = backend.search_directory("x").await.unwrap_err();
        assert!(matches!(err, BackendError::Decode { agent: Agent::Directory, .. }));
    }
}
