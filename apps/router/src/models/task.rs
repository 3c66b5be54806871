//! Wire types of the agent-to-agent task endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /tasks/send` and `POST /hr-tasks/send`.
///
/// Both fields are optional on the way in so a missing `query` surfaces as a 400
/// from the handler rather than a deserialisation rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
}

impl TaskRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            query_type: None,
        }
    }

    pub fn with_query_type(mut self, query_type: impl Into<String>) -> Self {
        self.query_type = Some(query_type.into());
        self
    }

    /// The query text, if present and not blank.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}
