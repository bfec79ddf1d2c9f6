//! Narrative / Insight Generator: pure templating over computed skill sets and scores.

use crate::analysis::models::{Insight, InsightKind, LearningStep, Priority};
use crate::analysis::scoring::DomainMismatch;
use crate::skills::Skill;

const LEARNING_RESOURCES: [&str; 3] = ["Online courses", "Documentation", "Practice projects"];

pub fn summary(present: &[Skill], required: &[Skill]) -> String {
    let p = present.len();
    let r = required.len();

    let qualifier = if p == 0 {
        "No matching skills found."
    } else if p == r {
        "Perfect skill match!"
    } else if p as f64 >= r as f64 * 0.7 {
        "Strong skill alignment."
    } else if p as f64 >= r as f64 * 0.4 {
        "Moderate skill alignment."
    } else {
        "Weak skill alignment."
    };

    format!("Found {p} matching skills out of {r} required. {qualifier}")
}

pub fn mismatch_summary(mismatch: &DomainMismatch) -> String {
    format!(
        "Cross-domain mismatch: job requires {} skills but resume shows {} skills.",
        mismatch.job_domains(),
        mismatch.resume_domains()
    )
}

pub fn insights(present: &[Skill], missing: &[Skill], mismatch: Option<&DomainMismatch>) -> Vec<Insight> {
    let strength = if !present.is_empty() {
        format!("Strong in: {}", top_names(present, 3))
    } else if mismatch.is_some() {
        "Consider roles in your domain expertise".to_string()
    } else {
        "Review and strengthen your skill set".to_string()
    };

    let mut insights = vec![Insight {
        kind: InsightKind::Strength,
        message: strength,
    }];

    if !missing.is_empty() {
        insights.push(Insight {
            kind: InsightKind::Improvement,
            message: format!("Consider learning: {}", top_names(missing, 3)),
        });
    }

    let advice = match mismatch {
        Some(_) => "Apply for jobs that match your domain expertise, or consider retraining",
        None => "Tailor your resume with job description keywords and highlight relevant projects.",
    };
    insights.push(Insight {
        kind: InsightKind::Advice,
        message: advice.to_string(),
    });

    insights
}

pub fn learning_path(missing: &[Skill]) -> Vec<LearningStep> {
    const PLAN: [(&str, Priority); 3] = [
        ("1-2 months", Priority::High),
        ("2-3 months", Priority::Medium),
        ("3-4 months", Priority::Low),
    ];

    missing
        .iter()
        .zip(PLAN)
        .map(|(skill, (time_estimate, priority))| LearningStep {
            skill: skill.name.clone(),
            time_estimate: time_estimate.to_string(),
            resources: LEARNING_RESOURCES.iter().map(|r| r.to_string()).collect(),
            priority,
        })
        .collect()
}

pub fn ai_guidance(
    score: f64,
    present: &[Skill],
    missing: &[Skill],
    mismatch: Option<&DomainMismatch>,
) -> String {
    let mut guidance = String::from("Career Match Analysis:\n\n");

    if let Some(mismatch) = mismatch {
        guidance.push_str("⚠️ Domain Mismatch Alert\n\n");
        guidance.push_str(&format!("Job requires skills in: {}\n", mismatch.job_domains()));
        guidance.push_str(&format!(
            "Your resume shows skills in: {}\n\n",
            mismatch.resume_domains()
        ));
        guidance.push_str(
            "Recommendation: Consider applying for roles in your domain or pursuing additional training.",
        );
        return guidance;
    }

    if !present.is_empty() {
        guidance.push_str(&format!("✅ Skills you have: {}\n\n", top_names(present, 5)));
    }
    if !missing.is_empty() {
        guidance.push_str(&format!("📝 Skills to develop: {}\n\n", top_names(missing, 5)));
    }

    if score >= 7.0 {
        guidance.push_str(&format!(
            "Great match! You're well-positioned for this role. Highlight your experience with {} in your application.",
            names_or(present, "your matching skills")
        ));
    } else if score >= 5.0 {
        guidance.push_str(&format!(
            "Moderate match. Focus on building skills in {} to improve your chances.",
            names_or(missing, "the remaining requirements")
        ));
    } else {
        guidance.push_str(&format!(
            "Significant skill gaps. Consider roles more closely aligned with your current skills, or invest in training for {}.",
            names_or(missing, "the skills this role emphasizes")
        ));
    }

    guidance
}

pub fn conversational_intro(score: f64, summary: &str) -> String {
    format!(
        "I've analyzed your resume against the job description. Your match score is {score:.1}/10. {summary}"
    )
}

fn top_names(skills: &[Skill], n: usize) -> String {
    skills
        .iter()
        .take(n)
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn names_or(skills: &[Skill], fallback: &str) -> String {
    if skills.is_empty() {
        fallback.to_string()
    } else {
        top_names(skills, 3)
    }
}
