//! Clients for the directory and records agents.
//!
//! Routing code depends only on the [`Backend`] trait; [`HttpBackend`] is the real
//! implementation. Every failure is a [`BackendError`] naming the agent that failed,
//! never a panic.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::employee::DirectoryRecord;
use crate::models::hr::HrRecord;
use crate::models::routing::QueryType;

pub mod http;

pub use http::HttpBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agent {
    Directory,
    Records,
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Agent::Directory => f.write_str("Employee Info Agent"),
            Agent::Records => f.write_str("HR Agent"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{agent}: request timed out")]
    Timeout { agent: Agent },

    #[error("{agent}: {source}")]
    Transport {
        agent: Agent,
        #[source]
        source: reqwest::Error,
    },

    #[error("{agent}: HTTP {status}: {message}")]
    Status {
        agent: Agent,
        status: u16,
        message: String,
    },

    #[error("{agent}: malformed response: {message}")]
    Decode { agent: Agent, message: String },
}

#[async_trait]
pub trait Backend: Send + Sync {
    /// `POST /tasks/send` with `{"query": query}`.
    async fn search_directory(&self, query: &str) -> Result<Vec<DirectoryRecord>, BackendError>;

    /// `POST /hr-tasks/send` with `{"query": query, "query_type": query_type}`.
    async fn search_records(
        &self,
        query: &str,
        query_type: QueryType,
    ) -> Result<Vec<HrRecord>, BackendError>;
}
