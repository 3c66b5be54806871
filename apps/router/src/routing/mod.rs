//! Query routing: clarify (optional) → classify → dispatch to one backend, the
//! two-step orchestrator or the comparison engine.
//!
//! Every failure ends as [`QueryOutcome::Failed`]; nothing past this point raises.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::agents::Backend;
use crate::extraction::{CriteriaExtractor, LlmCriteriaExtractor};
use crate::llm_client::LlmClient;
use crate::models::employee::DirectoryRecord;
use crate::models::hr::HrRecord;
use crate::models::routing::{AgentType, QueryType};

pub mod clarify;
pub mod classifier;
pub mod comparison;
pub mod orchestrator;
pub mod prompts;

use clarify::QueryClarifier;
use classifier::{KeywordClassifier, LlmClassifier, QueryClassifier};
use comparison::ComparisonResult;
use orchestrator::MergedResult;

/// Result of routing one query. Serialises to the shapes the services and the
/// narrator exchange: `{"error": ...}`, `{"results": [...]}`, merged or comparison objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    Failed {
        error: String,
    },
    Merged(MergedResult),
    Comparison(ComparisonResult),
    Employees {
        results: Vec<DirectoryRecord>,
    },
    Records {
        query_type: QueryType,
        results: Vec<HrRecord>,
    },
}

impl QueryOutcome {
    pub fn failed(error: impl ToString) -> Self {
        QueryOutcome::Failed {
            error: error.to_string(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryOutcome::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// True for a successful lookup that found nothing. A merged result always has
    /// the resolved employee, so it is never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            QueryOutcome::Employees { results } => results.is_empty(),
            QueryOutcome::Records { results, .. } => results.is_empty(),
            QueryOutcome::Merged(_) | QueryOutcome::Failed { .. } | QueryOutcome::Comparison(_) => {
                false
            }
        }
    }
}

/// Routes queries to the backends. Cheap to clone; every part is shared.
#[derive(Clone)]
pub struct QueryRouter {
    backend: Arc<dyn Backend>,
    classifier: Arc<dyn QueryClassifier>,
    extractor: Option<Arc<dyn CriteriaExtractor>>,
    clarifier: Option<Arc<QueryClarifier>>,
}

impl QueryRouter {
    pub fn new(backend: Arc<dyn Backend>, classifier: Arc<dyn QueryClassifier>) -> Self {
        Self {
            backend,
            classifier,
            extractor: None,
            clarifier: None,
        }
    }

    /// Keyword classification, raw query text to the backends.
    pub fn offline(backend: Arc<dyn Backend>) -> Self {
        Self::new(backend, Arc::new(KeywordClassifier))
    }

    /// Clarification, LLM classification and client-side criteria extraction.
    pub fn assisted(backend: Arc<dyn Backend>, llm: LlmClient) -> Self {
        Self::new(backend, Arc::new(LlmClassifier::new(llm.clone())))
            .with_extractor(Arc::new(LlmCriteriaExtractor::directory(llm.clone())))
            .with_clarifier(QueryClarifier::new(llm))
    }

    /// Pre-extract criteria on single-backend routes; sent as a JSON `query`.
    pub fn with_extractor(mut self, extractor: Arc<dyn CriteriaExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    pub fn with_clarifier(mut self, clarifier: QueryClarifier) -> Self {
        self.clarifier = Some(Arc::new(clarifier));
        self
    }

    pub async fn route(&self, query: &str) -> QueryOutcome {
        let text = match &self.clarifier {
            Some(clarifier) => clarifier.clarify(query).await,
            None => query.to_string(),
        };

        let decision = self.classifier.classify(&text).await;
        info!(
            agent_type = ?decision.agent_type,
            query_type = %decision.query_type,
            "Routing {text:?}"
        );

        let backend = self.backend.as_ref();
        match decision.agent_type {
            AgentType::MultiAgent => {
                match orchestrator::resolve_and_fetch(backend, &text, decision.query_type).await {
                    Ok(merged) => QueryOutcome::Merged(merged),
                    Err(e) => QueryOutcome::failed(e),
                }
            }
            AgentType::Comparison => match comparison::compare(backend, decision.query_type).await {
                Ok(result) => QueryOutcome::Comparison(result),
                Err(e) => QueryOutcome::failed(e),
            },
            AgentType::Hr => {
                let payload = self.payload(&text).await;
                match backend.search_records(&payload, decision.query_type).await {
                    Ok(results) => QueryOutcome::Records {
                        query_type: decision.query_type,
                        results,
                    },
                    Err(e) => QueryOutcome::failed(e),
                }
            }
            AgentType::Employee => {
                let payload = self.payload(&text).await;
                match backend.search_directory(&payload).await {
                    Ok(results) => QueryOutcome::Employees { results },
                    Err(e) => QueryOutcome::failed(e),
                }
            }
        }
    }

    /// Extracted criteria as JSON when something was understood, the text otherwise.
    async fn payload(&self, text: &str) -> String {
        let Some(extractor) = &self.extractor else {
            return text.to_string();
        };
        let criteria = extractor.extract(text).await;
        if criteria.is_empty() {
            text.to_string()
        } else {
            criteria.to_query()
        }
    }
}
