//! Validation and coercion of the LLM's analysis JSON.
//!
//! The LLM only contributes narrative. A response without a numeric `score`
//! or an object `skills` is structurally invalid and treated as a failed call;
//! narrative fields with the wrong type are dropped individually.

use serde_json::Value;
use tracing::debug;

use crate::analysis::models::{value_as_f64, Insight, InsightKind, LearningStep, Priority};
use crate::llm_client::LlmError;

/// Narrative fields taken from an accepted LLM response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalNarrative {
    /// The model's own score; reported in logs only.
    pub score: f64,
    pub summary: Option<String>,
    pub ai_guidance: Option<String>,
    pub insights: Option<Vec<Insight>>,
    pub learning_path: Option<Vec<LearningStep>>,
}

pub fn coerce_external(value: &Value) -> Result<ExternalNarrative, LlmError> {
    let object = value
        .as_object()
        .ok_or_else(|| LlmError::InvalidShape("expected a JSON object".to_string()))?;

    let score = object
        .get("score")
        .and_then(value_as_f64)
        .ok_or_else(|| LlmError::InvalidShape("missing numeric score".to_string()))?;

    if !object.get("skills").is_some_and(Value::is_object) {
        return Err(LlmError::InvalidShape("missing skills object".to_string()));
    }

    let narrative = ExternalNarrative {
        score,
        summary: non_empty_string(object.get("summary")),
        ai_guidance: non_empty_string(object.get("aiGuidance")),
        insights: object.get("insights").and_then(coerce_insights),
        learning_path: object.get("learningPath").and_then(coerce_learning_path),
    };

    debug!(
        "LLM narrative accepted (model score {}, summary: {}, guidance: {}, insights: {}, learning path: {})",
        narrative.score,
        narrative.summary.is_some(),
        narrative.ai_guidance.is_some(),
        narrative.insights.as_ref().map_or(0, Vec::len),
        narrative.learning_path.as_ref().map_or(0, Vec::len),
    );

    Ok(narrative)
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Keeps well-typed insights; `None` when nothing usable remains.
fn coerce_insights(value: &Value) -> Option<Vec<Insight>> {
    let insights: Vec<Insight> = value
        .as_array()?
        .iter()
        .filter_map(|item| {
            let kind = item.get("type").and_then(Value::as_str).and_then(InsightKind::parse)?;
            let message = non_empty_string(item.get("message"))?;
            Some(Insight { kind, message })
        })
        .collect();

    (!insights.is_empty()).then_some(insights)
}

fn coerce_learning_path(value: &Value) -> Option<Vec<LearningStep>> {
    let steps: Vec<LearningStep> = value
        .as_array()?
        .iter()
        .filter_map(|item| {
            let skill = non_empty_string(item.get("skill"))?;
            let time_estimate = non_empty_string(item.get("timeEstimate"))?;
            let priority = item
                .get("priority")
                .and_then(Value::as_str)
                .and_then(Priority::parse)?;
            let resources = item
                .get("resources")
                .and_then(Value::as_array)
                .map(|r| {
                    r.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            Some(LearningStep {
                skill,
                time_estimate,
                resources,
                priority,
            })
        })
        .collect();

    (!steps.is_empty()).then_some(steps)
}
