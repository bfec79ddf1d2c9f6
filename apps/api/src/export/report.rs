//! Plain-text analysis report, also the source text for the PDF export.

use chrono::{DateTime, Utc};

use crate::analysis::models::AnalysisResult;
use crate::skills::Skill;

pub const REPORT_TITLE: &str = "CAREER COMPASS - ANALYSIS REPORT";

pub fn render_report(analysis: &AnalysisResult, generated_at: DateTime<Utc>) -> String {
    let mut txt = String::new();

    txt.push_str(REPORT_TITLE);
    txt.push('\n');
    txt.push_str(&"=".repeat(48));
    txt.push_str("\n\n");

    txt.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    txt.push_str(&format!("Match Score: {}/10\n", analysis.score));
    txt.push_str(&format!("ATS Compatibility: {}%\n", analysis.ats_score));
    txt.push_str(&format!("Experience Level: {}\n", analysis.experience_level.as_str()));
    txt.push_str(&format!("Match Level: {}\n\n", analysis.match_level.as_str()));

    txt.push_str(&format!("SUMMARY:\n{}\n\n", analysis.summary));

    txt.push_str("SKILLS ANALYSIS:\n");
    push_skills(&mut txt, "Required Skills:", &analysis.skills.required);
    txt.push('\n');
    push_skills(&mut txt, "Present Skills:", &analysis.skills.present);
    txt.push('\n');
    push_skills(&mut txt, "Missing Skills:", &analysis.skills.missing);

    txt.push_str("\nKEY INSIGHTS:\n");
    for (i, insight) in analysis.insights.iter().enumerate() {
        txt.push_str(&format!(
            "{}. [{}] {}\n",
            i + 1,
            insight.kind.as_str().to_uppercase(),
            insight.message
        ));
    }

    txt.push_str("\nLEARNING PATH:\n");
    for (i, step) in analysis.learning_path.iter().enumerate() {
        txt.push_str(&format!("{}. {}\n", i + 1, step.skill));
        txt.push_str(&format!("   Time: {}\n", step.time_estimate));
        txt.push_str(&format!("   Priority: {}\n", step.priority.as_str()));
        txt.push_str(&format!("   Resources: {}\n\n", step.resources.join(", ")));
    }

    txt.push_str(&format!("\nDETAILED GUIDANCE:\n{}\n", analysis.ai_guidance));
    txt
}

fn push_skills(txt: &mut String, heading: &str, skills: &[Skill]) {
    txt.push_str(heading);
    txt.push('\n');
    for (i, skill) in skills.iter().enumerate() {
        txt.push_str(&format!("  {}. {} ({})\n", i + 1, skill.name, skill.category));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{Insight, InsightKind, LearningStep, MatchLevel, Priority, SkillSets};
    use crate::skills::Category;
    use chrono::TimeZone;

    #[test]
    fn test_report_sections() {
        let analysis = AnalysisResult {
            score: 6.7,
            ats_score: 70.7,
            match_level: MatchLevel::GoodFit,
            summary: "Found 2 matching skills out of 3 required.".to_string(),
            skills: SkillSets {
                required: vec![
                    Skill::new("Python", Category::ProgrammingLanguages),
                    Skill::new("Docker", Category::CloudDevOps),
                ],
                present: vec![Skill::new("Python", Category::ProgrammingLanguages)],
                missing: vec![Skill::new("Docker", Category::CloudDevOps)],
            },
            insights: vec![Insight {
                kind: InsightKind::Strength,
                message: "Strong Python".to_string(),
            }],
            learning_path: vec![LearningStep {
                skill: "Docker".to_string(),
                time_estimate: "1-2 months".to_string(),
                resources: vec!["Official docs".to_string(), "Udemy".to_string()],
                priority: Priority::High,
            }],
            ai_guidance: "Learn Docker next.".to_string(),
            ..Default::default()
        };
        let generated = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();

        let txt = render_report(&analysis, generated);

        assert!(txt.starts_with("CAREER COMPASS - ANALYSIS REPORT\n"));
        assert!(txt.contains("Generated: 2026-01-02 03:04:05 UTC\n"));
        assert!(txt.contains("Match Score: 6.7/10\n"));
        assert!(txt.contains("ATS Compatibility: 70.7%\n"));
        assert!(txt.contains("Match Level: Good Fit\n"));
        assert!(txt.contains("Required Skills:\n  1. Python (Programming Languages)\n  2. Docker (Cloud & DevOps)\n"));
        assert!(txt.contains("Missing Skills:\n  1. Docker (Cloud & DevOps)\n"));
        assert!(txt.contains("1. [STRENGTH] Strong Python\n"));
        assert!(txt.contains("   Priority: High\n   Resources: Official docs, Udemy\n"));
        assert!(txt.ends_with("DETAILED GUIDANCE:\nLearn Docker next.\n"));
    }
}
