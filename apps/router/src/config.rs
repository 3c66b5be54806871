use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_SHARED_SECRET: &str = "dummy-dekallm-key";

/// Application configuration loaded from environment variables.
/// Fails at startup if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Present only when a completion endpoint is configured (`API_URL`).
    pub llm: Option<LlmConfig>,
    /// Services use the LLM extractor when `llm` is present and this is on.
    pub enable_llm_extraction: bool,
    pub shared_secret: String,
    pub directory_url: String,
    pub records_url: String,
    pub directory_port: u16,
    pub records_port: u16,
    pub backend_timeout: Duration,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let llm = match lookup("API_URL") {
            Some(endpoint) => Some(LlmConfig {
                endpoint,
                api_key: require(&lookup, "API_KEY")?,
                model: require(&lookup, "MODEL")?,
                timeout: Duration::from_secs(parse_or(&lookup, "LLM_TIMEOUT_SECS", 15)?),
            }),
            None => None,
        };

        Ok(Config {
            llm,
            enable_llm_extraction: parse_or(&lookup, "ENABLE_LLM_EXTRACTION", true)?,
            shared_secret: lookup("AGENT_SHARED_SECRET")
                .unwrap_or_else(|| DEFAULT_SHARED_SECRET.to_string()),
            directory_url: lookup("DIRECTORY_URL")
                .unwrap_or_else(|| "http://localhost:8000".to_string()),
            records_url: lookup("RECORDS_URL")
                .unwrap_or_else(|| "http://localhost:8001".to_string()),
            directory_port: parse_or(&lookup, "DIRECTORY_PORT", 8000)?,
            records_port: parse_or(&lookup, "RECORDS_PORT", 8001)?,
            backend_timeout: Duration::from_secs(parse_or(&lookup, "BACKEND_TIMEOUT_SECS", 10)?),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// The LLM config, if the services should extract criteria with it.
    pub fn extraction_llm(&self) -> Option<&LlmConfig> {
        self.llm.as_ref().filter(|_| self.enable_llm_extraction)
    }
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_llm() {
        let config = config_from(&[]).unwrap();
        assert!(config.llm.is_none());
        assert_eq!(config.shared_secret, "dummy-dekallm-key");
        assert_eq!(config.directory_url, "http://localhost:8000");
        assert_eq!(config.records_port, 8001);
        assert_eq!(config.backend_timeout, Duration::from_secs(10));
        assert!(config.extraction_llm().is_none());
    }

    #[test]
    fn test_api_url_requires_key_and_model() {
        let err = config_from(&[("API_URL", "http://llm.local/v1/chat/completions")]).unwrap_err();
        assert!(err.to_string().contains("API_KEY"));

        let config = config_from(&[
            ("API_URL", "http://llm.local/v1/chat/completions"),
            ("API_KEY", "sk-test"),
            ("MODEL", "tiny"),
            ("LLM_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        let llm = config.llm.as_ref().unwrap();
        assert_eq!(llm.model, "tiny");
        assert_eq!(llm.timeout, Duration::from_secs(3));
        assert!(config.extraction_llm().is_some());
    }

    #[test]
    fn test_extraction_can_be_disabled() {
        let config = config_from(&[
            ("API_URL", "http://llm.local"),
            ("API_KEY", "k"),
            ("MODEL", "m"),
            ("ENABLE_LLM_EXTRACTION", "false"),
        ])
        .unwrap();
        assert!(config.llm.is_some());
        assert!(config.extraction_llm().is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("DIRECTORY_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("DIRECTORY_PORT"));
    }
}
