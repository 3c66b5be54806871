use tracing::warn;

use crate::llm_client::prompts::GROUNDED_ANSWER_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::response::prompts::{NARRATE_SYSTEM, NARRATE_USER_TEMPLATE};
use crate::response::template;
use crate::routing::QueryOutcome;

const NARRATE_TEMPERATURE: f32 = 0.3;

/// Conversational rendering through the completion endpoint. Errors and empty results
/// never reach the LLM; a failed or timed-out narration falls back to the template.
#[derive(Clone)]
pub struct Narrator {
    llm: LlmClient,
    system: String,
}

impl Narrator {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: format!("{NARRATE_SYSTEM}\n\n{GROUNDED_ANSWER_INSTRUCTION}"),
        }
    }

    pub async fn narrate(&self, query: &str, outcome: &QueryOutcome) -> String {
        if let Some(error) = outcome.error() {
            return format!("I'm sorry, but I encountered an error: {error}");
        }
        if outcome.is_empty() {
            return template::render(outcome);
        }

        let data = match serde_json::to_string_pretty(outcome) {
            Ok(data) => data,
            Err(e) => {
                warn!("Could not serialise outcome for narration: {e}");
                return template::render(outcome);
            }
        };
        let user = NARRATE_USER_TEMPLATE
            .replace("{query}", query)
            .replace("{data}", &data);

        let call = self.llm.complete(&self.system, &user, NARRATE_TEMPERATURE);
        match tokio::time::timeout(self.llm.timeout(), call).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Narration failed, using template: {e}");
                template::render(outcome)
            }
            Err(_) => {
                warn!("Narration timed out, using template");
                template::render(outcome)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::DirectoryRecord;
    use crate::test_support::{completion_reply, llm_config, stalled_completion_stub};

    fn alice() -> QueryOutcome {
        QueryOutcome::Employees {
            results: vec![DirectoryRecord::new(1, "Alice Smith", "USA", "Software Engineer")],
        }
    }

    #[tokio::test]
    async fn test_reply_is_returned() {
        let url = completion_reply("Alice Smith is a Software Engineer based in the USA.").await;
        let narrator = Narrator::new(LlmClient::new(&llm_config(&url)).unwrap());

        assert_eq!(
            narrator.narrate("who is alice", &alice()).await,
            "Alice Smith is a Software Engineer based in the USA."
        );
    }

    #[tokio::test]
    async fn test_errors_and_empty_results_skip_the_llm() {
        let llm = LlmClient::new(&llm_config("http://127.0.0.1:1/v1/chat/completions")).unwrap();
        let narrator = Narrator::new(llm);

        assert_eq!(
            narrator
                .narrate("bob salary", &QueryOutcome::failed("Employee not found"))
                .await,
            "I'm sorry, but I encountered an error: Employee not found"
        );
        assert_eq!(
            narrator
                .narrate("x", &QueryOutcome::Employees { results: vec![] })
                .await,
            template::NO_RESULTS
        );
    }

    #[tokio::test]
    async fn test_timeout_falls_back_to_template() {
        let url = stalled_completion_stub().await;
        let narrator = Narrator::new(LlmClient::new(&llm_config(&url)).unwrap());

        assert_eq!(
            narrator.narrate("who is alice", &alice()).await,
            template::render(&alice())
        );
    }
}
