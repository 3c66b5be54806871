//! Query classification: free text → {agent_type, query_type}.
//!
//! Total and bounded. Both strategies always produce a [`RoutingDecision`]; the LLM
//! strategy falls back to the default pair (employee, general) on any failure.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::hr::ROLE_LEVELS;
use crate::models::routing::{AgentType, QueryType, RoutingDecision};
use crate::routing::prompts::ROUTING_SYSTEM;
use crate::text::Normalized;

const CLASSIFY_TEMPERATURE: f32 = 0.1;

#[async_trait]
pub trait QueryClassifier: Send + Sync {
    async fn classify(&self, query: &str) -> RoutingDecision;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordClassifier
// ────────────────────────────────────────────────────────────────────────────

const SALARY_WORDS: &[&str] = &["salary", "pay", "paid", "compensation", "wage", "earnings", "earn"];
const HIERARCHY_WORDS: &[&str] = &[
    "hierarchy",
    "reports to",
    "reporting",
    "level",
    "boss",
    "manager",
    "supervisor",
];
const SCHEDULE_WORDS: &[&str] = &["schedule", "hours", "shift", "work time", "working hours"];

const HIGH_WORDS: &[&str] = &["highest", "most", "top", "maximum", "max", "biggest", "largest"];
const LOW_WORDS: &[&str] = &["lowest", "least", "minimum", "min", "smallest", "bottom"];
const ROLE_WORDS: &[&str] = &["role", "rank", "position", "level", "seniority", "title"];

/// Words that point the query at one person.
const PERSON_HINTS: &[&str] = &["for", "of", "id", "employee", "what is"];
/// Words that ask for a whole table, which outrank person hints.
const TABLE_WORDS: &[&str] = &["all", "every", "everyone", "entire", "whole"];

/// Deterministic keyword classifier. Rules, first match wins:
/// 1. superlative + salary word → comparison (highest/lowest_salary);
///    superlative + role word → comparison (highest/lowest_role)
/// 2. HR keyword + person hint (`for`, `of`, `id`, `employee`, `what is`, `'s`) → multi_agent
/// 3. HR keyword alone → hr
/// 4. otherwise → employee / general
///
/// HR keywords are looked for only outside known role titles, so "HR Manager" is a
/// role and not a hierarchy question.
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn classify_now(&self, query: &str) -> RoutingDecision {
        let text = Normalized::new(query);

        if let Some(query_type) = comparison_type(&text) {
            return RoutingDecision::new(AgentType::Comparison, query_type);
        }

        let outside_roles = text.without_phrases(ROLE_LEVELS.iter().map(|(role, _, _)| *role));
        let Some(query_type) = hr_type(&outside_roles) else {
            return RoutingDecision::default();
        };

        let about_person = (text.contains_any(PERSON_HINTS) || has_possessive(query))
            && !text.contains_any(TABLE_WORDS);
        let agent_type = if about_person {
            AgentType::MultiAgent
        } else {
            AgentType::Hr
        };
        RoutingDecision::new(agent_type, query_type)
    }
}

#[async_trait]
impl QueryClassifier for KeywordClassifier {
    async fn classify(&self, query: &str) -> RoutingDecision {
        self.classify_now(query)
    }
}

fn comparison_type(text: &Normalized) -> Option<QueryType> {
    let high = text.contains_any(HIGH_WORDS);
    if !high && !text.contains_any(LOW_WORDS) {
        return None;
    }
    if text.contains_any(SALARY_WORDS) {
        Some(if high {
            QueryType::HighestSalary
        } else {
            QueryType::LowestSalary
        })
    } else if text.contains_any(ROLE_WORDS) {
        Some(if high {
            QueryType::HighestRole
        } else {
            QueryType::LowestRole
        })
    } else {
        None
    }
}

fn hr_type(text: &Normalized) -> Option<QueryType> {
    [
        (QueryType::Salary, SALARY_WORDS),
        (QueryType::Hierarchy, HIERARCHY_WORDS),
        (QueryType::Schedule, SCHEDULE_WORDS),
    ]
    .into_iter()
    .find(|(_, words)| text.contains_any(words))
    .map(|(query_type, _)| query_type)
}

fn has_possessive(query: &str) -> bool {
    let lower = query.to_lowercase();
    lower.contains("'s ") || lower.contains("\u{2019}s ") || lower.ends_with("'s")
}

// ────────────────────────────────────────────────────────────────────────────
// LlmClassifier
// ────────────────────────────────────────────────────────────────────────────

/// Classification through the completion endpoint, bounded by the client timeout.
pub struct LlmClassifier {
    llm: LlmClient,
    system: String,
}

impl LlmClassifier {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: format!("{ROUTING_SYSTEM}\n\n{JSON_ONLY_INSTRUCTION}"),
        }
    }
}

#[async_trait]
impl QueryClassifier for LlmClassifier {
    async fn classify(&self, query: &str) -> RoutingDecision {
        let call = self
            .llm
            .call_json::<RoutingDecision>(&self.system, query, CLASSIFY_TEMPERATURE);

        match tokio::time::timeout(self.llm.timeout(), call).await {
            Ok(Ok(decision)) => {
                debug!(?decision, "LLM routing decision");
                decision
            }
            Ok(Err(e)) => {
                warn!("Routing classification failed, using default route: {e}");
                RoutingDecision::default()
            }
            Err(_) => {
                warn!("Routing classification timed out, using default route");
                RoutingDecision::default()
            }
        }
    }
}
