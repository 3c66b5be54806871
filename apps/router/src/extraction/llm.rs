use async_trait::async_trait;
use tracing::{debug, warn};

use crate::extraction::prompts::{DIRECTORY_CRITERIA_SYSTEM, RECORDS_CRITERIA_SYSTEM};
use crate::extraction::CriteriaExtractor;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::criteria::Criteria;

const EXTRACTION_TEMPERATURE: f32 = 0.1;

/// Criteria extraction through the completion endpoint. Fails open: any transport,
/// status or parse error is logged and yields empty criteria.
pub struct LlmCriteriaExtractor {
    llm: LlmClient,
    system: String,
}

impl LlmCriteriaExtractor {
    /// Extractor tuned for directory queries (names, countries, roles).
    pub fn directory(llm: LlmClient) -> Self {
        Self::with_prompt(llm, DIRECTORY_CRITERIA_SYSTEM)
    }

    /// Extractor tuned for records queries (ids and roles only).
    pub fn records(llm: LlmClient) -> Self {
        Self::with_prompt(llm, RECORDS_CRITERIA_SYSTEM)
    }

    fn with_prompt(llm: LlmClient, prompt: &str) -> Self {
        Self {
            llm,
            system: format!("{prompt}\n\n{JSON_ONLY_INSTRUCTION}"),
        }
    }
}

#[async_trait]
impl CriteriaExtractor for LlmCriteriaExtractor {
    async fn extract(&self, query: &str) -> Criteria {
        let call = self
            .llm
            .call_json::<Criteria>(&self.system, query, EXTRACTION_TEMPERATURE);

        match tokio::time::timeout(self.llm.timeout(), call).await {
            Ok(Ok(criteria)) => {
                debug!(?criteria, "LLM criteria");
                criteria
            }
            Ok(Err(e)) => {
                warn!("Criteria extraction failed, continuing with no criteria: {e}");
                Criteria::default()
            }
            Err(_) => {
                warn!("Criteria extraction timed out, continuing with no criteria");
                Criteria::default()
            }
        }
    }
}
