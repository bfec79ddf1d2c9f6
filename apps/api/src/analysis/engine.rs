//! Analysis orchestration.
//!
//! 1. The local engine always runs: extract, intersect, score, detect domain
//!    mismatch, template the narrative.
//! 2. When an LLM backend is configured it is asked for a narrative under a
//!    timeout. Skills, scores and levels always stay the local engine's.
//! 3. Any LLM failure degrades to the local result with a fallback note.

use std::collections::HashSet;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::models::{AnalysisMetadata, AnalysisResult, ExperienceLevel, MatchLevel, SkillSets};
use crate::analysis::narrative;
use crate::analysis::normalize::{coerce_external, ExternalNarrative};
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_MAX_TOKENS, ANALYSIS_TEMPERATURE};
use crate::analysis::scoring::{calculate_scores, detect_domain_mismatch};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{
    complete_within, parse_json_object, ChatBackend, ChatMessage, CompletionRequest, LlmError,
};
use crate::skills::{Category, Skill, SkillExtractor};

pub const FALLBACK_MODEL: &str = "fallback_keyword_analysis";
pub const FALLBACK_SUMMARY_PREFIX: &str =
    "Basic analysis completed. For detailed AI insights, please try again. ";
const NOT_CONFIGURED_NOTE: &str = "Used fallback: LLM not configured (GROQ_API_KEY is unset)";

/// Required, present and missing skills plus everything found in the resume.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub required: Vec<Skill>,
    pub present: Vec<Skill>,
    pub missing: Vec<Skill>,
    pub resume_skills: Vec<Skill>,
}

pub fn match_skills(extractor: &SkillExtractor, job_description: &str, resume: &str) -> SkillMatch {
    let required = extractor.extract(job_description);
    let resume_skills = extractor.extract(resume);

    let resume_keys: HashSet<(String, Category)> = resume_skills.iter().map(Skill::key).collect();

    let (present, missing): (Vec<Skill>, Vec<Skill>) = required
        .iter()
        .cloned()
        .partition(|skill| resume_keys.contains(&skill.key()));

    SkillMatch {
        required,
        present,
        missing,
        resume_skills,
    }
}

/// The deterministic, LLM-free analysis.
pub fn analyze_locally(extractor: &SkillExtractor, job_description: &str, resume: &str) -> AnalysisResult {
    let SkillMatch {
        required,
        present,
        missing,
        resume_skills,
    } = match_skills(extractor, job_description, resume);

    let scores = calculate_scores(&required, &present);
    let mismatch = detect_domain_mismatch(&required, &resume_skills);

    let (experience_level, match_level, summary) = match &mismatch {
        Some(m) => (
            ExperienceLevel::Entry,
            MatchLevel::Weak,
            narrative::mismatch_summary(m),
        ),
        None => (
            scores.experience_level,
            scores.match_level,
            narrative::summary(&present, &required),
        ),
    };

    info!(
        "Local analysis: {} required, {} present, {} missing, score {} ({}){}",
        required.len(),
        present.len(),
        missing.len(),
        scores.score,
        match_level.as_str(),
        if mismatch.is_some() { ", cross-domain" } else { "" }
    );

    AnalysisResult {
        score: scores.score,
        ats_score: scores.ats_score,
        experience_level,
        match_level,
        insights: narrative::insights(&present, &missing, mismatch.as_ref()),
        learning_path: narrative::learning_path(&missing),
        ai_guidance: narrative::ai_guidance(scores.score, &present, &missing, mismatch.as_ref()),
        conversational_ai: narrative::conversational_intro(scores.score, &summary),
        summary,
        metadata: AnalysisMetadata {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            job_desc_length: job_description.chars().count(),
            resume_length: resume.chars().count(),
            model_used: FALLBACK_MODEL.to_string(),
            skills_detected: present.len() + missing.len(),
            cross_domain: mismatch.is_some(),
            note: None,
        },
        skills: SkillSets {
            required,
            present,
            missing,
        },
    }
}

/// Full analysis: local engine plus, when available, the LLM narrative.
/// Never fails; LLM problems degrade to the local result.
pub async fn analyze(
    extractor: &SkillExtractor,
    llm: Option<&dyn ChatBackend>,
    timeout: Duration,
    job_description: &str,
    resume: &str,
) -> AnalysisResult {
    let local = analyze_locally(extractor, job_description, resume);

    let Some(llm) = llm else {
        return degrade(local, NOT_CONFIGURED_NOTE.to_string());
    };

    match request_narrative(llm, timeout, job_description, resume).await {
        Ok(external) => {
            info!("LLM analysis accepted from {}", llm.model());
            merge_external(local, external, llm.model())
        }
        Err(e) => {
            warn!("LLM analysis failed, using fallback analysis: {e}");
            degrade(local, format!("Used fallback due to API error: {e}"))
        }
    }
}

async fn request_narrative(
    llm: &dyn ChatBackend,
    timeout: Duration,
    job_description: &str,
    resume: &str,
) -> Result<ExternalNarrative, LlmError> {
    let request = CompletionRequest {
        messages: vec![
            ChatMessage::system(JSON_ONLY_SYSTEM),
            ChatMessage::user(build_analysis_prompt(job_description, resume)),
        ],
        temperature: ANALYSIS_TEMPERATURE,
        max_tokens: ANALYSIS_MAX_TOKENS,
        json_mode: true,
    };

    let content = complete_within(llm, &request, timeout).await?;

    let value = parse_json_object(&content)?;
    coerce_external(&value)
}

/// Takes the LLM's narrative where it is usable. A domain mismatch keeps the
/// local mismatch narrative.
fn merge_external(mut result: AnalysisResult, external: ExternalNarrative, model: &str) -> AnalysisResult {
    result.metadata.model_used = model.to_string();

    if result.metadata.cross_domain {
        return result;
    }

    if let Some(summary) = external.summary {
        result.summary = summary;
    }
    if let Some(guidance) = external.ai_guidance {
        result.ai_guidance = guidance;
    }
    if let Some(insights) = external.insights {
        result.insights = insights;
    }
    if let Some(path) = external.learning_path {
        result.learning_path = path;
    }
    result.conversational_ai = narrative::conversational_intro(result.score, &result.summary);
    result
}

fn degrade(mut result: AnalysisResult, note: String) -> AnalysisResult {
    result.summary = format!("{FALLBACK_SUMMARY_PREFIX}{}", result.summary);
    result.metadata.model_used = FALLBACK_MODEL.to_string();
    result.metadata.note = Some(note);
    result
}
