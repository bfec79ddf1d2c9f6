//! Analysis Result wire model (camelCase JSON consumed by the front end).
//!
//! Every type deserializes leniently so a previously returned result can be
//! posted back for export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::skills::Skill;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Senior,
    #[default]
    #[serde(other)]
    Mid,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Mid => "mid",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    #[serde(rename = "Excellent Match")]
    Excellent,
    #[serde(rename = "Strong Match")]
    Strong,
    #[serde(rename = "Good Fit")]
    GoodFit,
    #[serde(rename = "Moderate Match")]
    Moderate,
    #[serde(rename = "Weak Match")]
    Weak,
    #[default]
    #[serde(rename = "Needs Improvement")]
    #[serde(other)]
    NeedsImprovement,
}

impl MatchLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLevel::Excellent => "Excellent Match",
            MatchLevel::Strong => "Strong Match",
            MatchLevel::GoodFit => "Good Fit",
            MatchLevel::Moderate => "Moderate Match",
            MatchLevel::Weak => "Weak Match",
            MatchLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Strength,
    Improvement,
    #[default]
    #[serde(other)]
    Advice,
}

impl InsightKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "strength" => Some(InsightKind::Strength),
            "improvement" => Some(InsightKind::Improvement),
            "advice" => Some(InsightKind::Advice),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Strength => "strength",
            InsightKind::Improvement => "improvement",
            InsightKind::Advice => "advice",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Low,
    #[default]
    #[serde(other)]
    Medium,
}

impl Priority {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type", default)]
    pub kind: InsightKind,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningStep {
    pub skill: String,
    pub time_estimate: String,
    pub resources: Vec<String>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSets {
    pub required: Vec<Skill>,
    pub present: Vec<Skill>,
    pub missing: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisMetadata {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub job_desc_length: usize,
    pub resume_length: usize,
    pub model_used: String,
    pub skills_detected: usize,
    pub cross_domain: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            analysis_id: Uuid::nil(),
            analyzed_at: Utc::now(),
            job_desc_length: 0,
            resume_length: 0,
            model_used: String::new(),
            skills_detected: 0,
            cross_domain: false,
            note: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    #[serde(deserialize_with = "lenient_f64")]
    pub score: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub ats_score: f64,
    pub experience_level: ExperienceLevel,
    pub match_level: MatchLevel,
    pub summary: String,
    pub skills: SkillSets,
    pub insights: Vec<Insight>,
    pub learning_path: Vec<LearningStep>,
    pub ai_guidance: String,
    #[serde(rename = "conversationalAI")]
    pub conversational_ai: String,
    pub metadata: AnalysisMetadata,
}

/// Accepts a JSON number or a numeric string; anything else reads as 0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_as_f64(&value).unwrap_or(0.0))
}

pub fn value_as_f64(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::Category;
    use serde_json::json;

    #[test]
    fn test_result_serializes_with_front_end_field_names() {
        let result = AnalysisResult {
            score: 6.7,
            conversational_ai: "hi".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 6.7);
        assert!(json.get("atsScore").is_some());
        assert!(json.get("learningPath").is_some());
        assert!(json.get("aiGuidance").is_some());
        assert_eq!(json["conversationalAI"], "hi");
        assert_eq!(json["experienceLevel"], "mid");
        assert_eq!(json["matchLevel"], "Needs Improvement");
        assert!(json["metadata"].get("note").is_none());
        assert!(json["metadata"].get("crossDomain").is_some());
    }

    #[test]
    fn test_partial_result_deserializes_leniently() {
        let result: AnalysisResult = serde_json::from_value(json!({
            "score": "7.5",
            "matchLevel": "Something Else",
            "experienceLevel": "expert",
            "skills": { "present": [{ "name": "Rust", "category": "Programming Languages" }] },
            "insights": [{ "type": "strength", "message": "Strong in Rust" }]
        }))
        .unwrap();
        assert_eq!(result.score, 7.5);
        assert_eq!(result.ats_score, 0.0);
        assert_eq!(result.match_level, MatchLevel::NeedsImprovement);
        assert_eq!(result.experience_level, ExperienceLevel::Mid);
        assert_eq!(result.skills.present[0].category, Category::ProgrammingLanguages);
        assert!(result.skills.missing.is_empty());
        assert_eq!(result.insights[0].kind, InsightKind::Strength);
    }

    #[test]
    fn test_unknown_enum_strings_fall_back_to_defaults() {
        let step: LearningStep = serde_json::from_value(json!({
            "skill": "Docker",
            "priority": "Urgent"
        }))
        .unwrap();
        assert_eq!(step.priority, Priority::Medium);

        let step: LearningStep = serde_json::from_value(json!({"priority": "Low"})).unwrap();
        assert_eq!(step.priority, Priority::Low);

        let result: AnalysisResult = serde_json::from_value(json!({
            "experienceLevel": "senior",
            "matchLevel": "Weak Match"
        }))
        .unwrap();
        assert_eq!(result.experience_level, ExperienceLevel::Senior);
        assert_eq!(result.match_level, MatchLevel::Weak);
    }

    #[test]
    fn test_value_as_f64() {
        assert_eq!(value_as_f64(&json!(3)), Some(3.0));
        assert_eq!(value_as_f64(&json!(" 4.5 ")), Some(4.5));
        assert_eq!(value_as_f64(&json!("n/a")), None);
        assert_eq!(value_as_f64(&json!(null)), None);
    }

    #[test]
    fn test_priority_and_insight_parsing_is_case_insensitive() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(InsightKind::parse("Improvement"), Some(InsightKind::Improvement));
        assert_eq!(InsightKind::parse("warning"), None);
    }
}
