//! Career chat: greeting and N-day plan shortcuts, an LLM turn, and keyword
//! templates when the LLM is unavailable.

pub mod fallback;
pub mod formatting;
pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::analysis::models::value_as_f64;
use crate::skills::Skill;

// ────────────────────────────────────────────────────────────────────────────
// Request / response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatRequest {
    pub user_message: String,
    pub analysis_summary: Option<AnalysisSummary>,
    pub conversation: Vec<ConversationMessage>,
}

/// One prior chat message as the client tracks it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConversationMessage {
    pub sender: String,
    pub text: String,
}

/// The slice of an earlier analysis the client sends back with each turn.
/// Every field is optional and loosely typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisSummary {
    #[serde(deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    pub experience_level: Option<String>,
    pub skills: SummarySkills,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SummarySkills {
    pub present: Vec<Skill>,
    pub missing: Vec<Skill>,
}

impl AnalysisSummary {
    pub fn score_label(&self) -> String {
        match self.score {
            Some(score) if score != 0.0 => score.to_string(),
            _ => "N/A".to_string(),
        }
    }

    /// Names of the first `n` present skills joined with ", ", if any.
    pub fn top_present(&self, n: usize) -> Option<String> {
        join_top(&self.skills.present, n)
    }

    pub fn top_missing(&self, n: usize) -> Option<String> {
        join_top(&self.skills.missing, n)
    }
}

fn join_top(skills: &[Skill], n: usize) -> Option<String> {
    if skills.is_empty() {
        return None;
    }
    Some(
        skills
            .iter()
            .take(n)
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChatSource {
    Validation,
    GreetingResponse,
    StructuredPlan,
    Llm,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub success: bool,
    pub source: ChatSource,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>, success: bool, source: ChatSource) -> Self {
        Self {
            response: response.into(),
            success,
            source,
        }
    }
}
