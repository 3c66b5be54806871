use std::fmt;

use serde::{Deserialize, Serialize};

/// Which backend (or backend combination) answers a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    #[default]
    Employee,
    Hr,
    MultiAgent,
    Comparison,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Salary,
    Hierarchy,
    Schedule,
    #[default]
    General,
    HighestSalary,
    LowestSalary,
    HighestRole,
    LowestRole,
}

impl QueryType {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::Salary => "salary",
            QueryType::Hierarchy => "hierarchy",
            QueryType::Schedule => "schedule",
            QueryType::General => "general",
            QueryType::HighestSalary => "highest_salary",
            QueryType::LowestSalary => "lowest_salary",
            QueryType::HighestRole => "highest_role",
            QueryType::LowestRole => "lowest_role",
        }
    }

    /// Case-insensitive parse of the wire name.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_lowercase();
        [
            QueryType::Salary,
            QueryType::Hierarchy,
            QueryType::Schedule,
            QueryType::General,
            QueryType::HighestSalary,
            QueryType::LowestSalary,
            QueryType::HighestRole,
            QueryType::LowestRole,
        ]
        .into_iter()
        .find(|t| t.as_str() == raw)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a classifier. Missing fields default to `employee` / `general`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingDecision {
    pub agent_type: AgentType,
    pub query_type: QueryType,
}

impl RoutingDecision {
    pub fn new(agent_type: AgentType, query_type: QueryType) -> Self {
        Self {
            agent_type,
            query_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_decision_is_employee_general() {
        let d = RoutingDecision::default();
        assert_eq!(d.agent_type, AgentType::Employee);
        assert_eq!(d.query_type, QueryType::General);
    }

    #[test]
    fn test_partial_decision_fills_defaults() {
        let d: RoutingDecision = serde_json::from_str(r#"{"agent_type": "multi_agent"}"#).unwrap();
        assert_eq!(d, RoutingDecision::new(AgentType::MultiAgent, QueryType::General));
    }

    #[test]
    fn test_unknown_agent_type_is_rejected() {
        assert!(serde_json::from_str::<RoutingDecision>(r#"{"agent_type": "oracle"}"#).is_err());
    }

    #[test]
    fn test_query_type_parse() {
        assert_eq!(QueryType::parse(" Highest_Salary "), Some(QueryType::HighestSalary));
        assert_eq!(QueryType::parse("payroll"), None);
        assert_eq!(QueryType::LowestRole.to_string(), "lowest_role");
    }
}
