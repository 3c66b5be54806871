use tracing::{debug, warn};

use crate::llm_client::LlmClient;
use crate::routing::prompts::CLARIFY_SYSTEM;

const CLARIFY_TEMPERATURE: f32 = 0.1;

/// Rewrites a terse user query into a complete question before classification.
/// Fails open: any error, timeout or empty reply keeps the original text.
pub struct QueryClarifier {
    llm: LlmClient,
}

impl QueryClarifier {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    pub async fn clarify(&self, query: &str) -> String {
        let call = self.llm.complete(CLARIFY_SYSTEM, query, CLARIFY_TEMPERATURE);

        match tokio::time::timeout(self.llm.timeout(), call).await {
            Ok(Ok(text)) => {
                let clarified = first_line(&text);
                if clarified.is_empty() {
                    return query.to_string();
                }
                debug!("Clarified query: {clarified:?}");
                clarified.to_string()
            }
            Ok(Err(e)) => {
                warn!("Query clarification failed, keeping original text: {e}");
                query.to_string()
            }
            Err(_) => {
                warn!("Query clarification timed out, keeping original text");
                query.to_string()
            }
        }
    }
}

/// Models sometimes add commentary after the rewrite; only the first line is the query.
fn first_line(text: &str) -> &str {
    text.lines()
        .map(|l| l.trim().trim_matches('"'))
        .find(|l| !l.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{completion_reply, llm_config};

    #[tokio::test]
    async fn test_reply_replaces_query() {
        let url = completion_reply("\"What is Bob Johnson's salary?\"\n").await;
        let clarifier = QueryClarifier::new(LlmClient::new(&llm_config(&url)).unwrap());

        assert_eq!(clarifier.clarify("bob salary").await, "What is Bob Johnson's salary?");
    }

    #[tokio::test]
    async fn test_failure_keeps_original() {
        let llm = LlmClient::new(&llm_config("http://127.0.0.1:1/v1/chat/completions")).unwrap();
        let clarifier = QueryClarifier::new(llm);

        assert_eq!(clarifier.clarify("bob salary").await, "bob salary");
    }

    #[test]
    fn test_first_line_skips_blank_lines() {
        assert_eq!(first_line("\n\n  Find employee with ID 5 \nnote: done"), "Find employee with ID 5");
        assert_eq!(first_line("   "), "");
    }
}
