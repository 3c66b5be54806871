//! Criteria extraction: free text in, sparse [`Criteria`] filter out.
//!
//! The contract is total: an extractor always returns a (possibly empty) `Criteria`
//! and never fails. `AppState`-style holders carry an `Arc<dyn CriteriaExtractor>`,
//! chosen at startup: [`LlmCriteriaExtractor`] when a completion endpoint is configured,
//! [`KeywordExtractor`] otherwise.

use async_trait::async_trait;
use tracing::debug;

use crate::models::criteria::Criteria;

pub mod keyword;
pub mod llm;
pub mod prompts;

pub use keyword::{KeywordExtractor, Vocabulary};
pub use llm::LlmCriteriaExtractor;

#[async_trait]
pub trait CriteriaExtractor: Send + Sync {
    async fn extract(&self, query: &str) -> Criteria;
}

/// Returns the criteria a query already carries when it is a JSON criteria object,
/// which is what an LLM-assisted client sends after extracting on its side.
pub fn structured_query(query: &str) -> Option<Criteria> {
    let trimmed = query.trim();
    if !trimmed.starts_with('{') {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

/// Structured pass-through first, extractor otherwise.
pub async fn resolve_criteria(query: &str, extractor: &dyn CriteriaExtractor) -> Criteria {
    if let Some(criteria) = structured_query(query) {
        debug!(?criteria, "query carries structured criteria");
        return criteria;
    }
    extractor.extract(query).await
}
