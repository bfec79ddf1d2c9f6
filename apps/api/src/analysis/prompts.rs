// LLM prompt constants for the Analysis module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::truncate_chars;

/// Each document is cut to this many characters before prompting.
pub const MAX_PROMPT_DOC_CHARS: usize = 2000;
pub const ANALYSIS_TEMPERATURE: f32 = 0.1;
pub const ANALYSIS_MAX_TOKENS: u32 = 1500;

/// Analysis prompt template. Replace `{job_description}` and `{resume}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert career analyst. Analyze this resume against the job description.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}

Return ONLY a valid JSON object with this exact structure:
{
  "score": 6.5,
  "atsScore": 72,
  "experienceLevel": "mid",
  "matchLevel": "Good Fit",
  "summary": "Brief analysis summary here.",
  "skills": {
    "required": [{"name": "Python", "category": "Programming Languages"}],
    "present": [{"name": "Python", "category": "Programming Languages"}],
    "missing": [{"name": "Docker", "category": "Cloud & DevOps"}]
  },
  "insights": [
    {"type": "strength", "message": "You have strong Python skills."}
  ],
  "learningPath": [
    {"skill": "Docker", "timeEstimate": "1-2 months", "resources": ["Docker docs"], "priority": "High"}
  ],
  "aiGuidance": "Detailed guidance here."
}

IMPORTANT:
- Only return the JSON object, no other text.
- Use realistic scores between 1-10 for score.
- Use realistic scores between 0-100 for atsScore.
- experienceLevel must be "junior", "mid", or "senior".
- matchLevel must be one of: "Excellent Match", "Strong Match", "Good Fit", "Moderate Match", "Needs Improvement", "Weak Match".
- insight types must be "strength", "improvement", or "advice".
- learningPath priority must be "High", "Medium", or "Low".
- Base your analysis only on the provided resume and job description."#;

pub fn build_analysis_prompt(job_description: &str, resume: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume}", truncate_chars(resume, MAX_PROMPT_DOC_CHARS))
        .replace(
            "{job_description}",
            truncate_chars(job_description, MAX_PROMPT_DOC_CHARS),
        )
}
