use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_URL;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Unset disables the LLM path; analysis and chat run on local templates.
    pub groq_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_timeout: Duration,
    pub skill_section_harvest: bool,
    /// Half-width of the context window in characters. `None` checks context
    /// against the whole text.
    pub skill_context_window: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            groq_api_key: None,
            llm_api_url: DEFAULT_API_URL.to_string(),
            llm_timeout: Duration::from_secs(30),
            skill_section_harvest: true,
            skill_context_window: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let window: usize = parse_env("SKILL_CONTEXT_WINDOW", 0)?;

        Ok(Config {
            port: parse_env("PORT", defaults.port).context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            groq_api_key: optional_env("GROQ_API_KEY"),
            llm_api_url: optional_env("LLM_API_URL").unwrap_or(defaults.llm_api_url),
            llm_timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", 30)?),
            skill_section_harvest: parse_env("SKILL_SECTION_HARVEST", defaults.skill_section_harvest)?,
            skill_context_window: (window > 0).then_some(window),
        })
    }
}

/// Non-empty value of `key`, if set.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
