//! Template answers used for greetings, N-day plans, and whenever the LLM
//! is unavailable or its reply is unusable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chat::AnalysisSummary;

const DEFAULT_MISSING: &str = "the key skills for this role";
const DEFAULT_PRESENT: &str = "your current skills";
const TOP_SKILLS: usize = 3;

/// Messages answered directly from a template without calling the LLM.
pub const GREETINGS: &[&str] = &[
    "thank you", "thanks", "hello", "hi", "hey", "bye", "goodbye", "help", "ok", "okay",
];

static DAY_PLAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*days?\s*plan").expect("valid day plan regex"));

pub fn is_greeting(normalized: &str) -> bool {
    GREETINGS.contains(&normalized)
}

/// Day count of an "N day plan" request. `message` must already be lowercase.
pub fn parse_day_plan(message: &str) -> Option<u32> {
    let caps = DAY_PLAN_RE.captures(message)?;
    // Only digits were captured; anything unparsable is an overflow.
    Some(caps[1].parse::<u32>().unwrap_or(u32::MAX))
}

/// Top missing skills for plan and gap templates.
pub fn missing_skills_label(summary: Option<&AnalysisSummary>) -> String {
    summary
        .and_then(|s| s.top_missing(TOP_SKILLS))
        .unwrap_or_else(|| DEFAULT_MISSING.to_string())
}

/// Keyword-driven template answer for `message`.
pub fn template_reply(message: &str, summary: Option<&AnalysisSummary>) -> String {
    let lower = message.trim().to_lowercase();
    let score = summary.map_or_else(|| "N/A".to_string(), AnalysisSummary::score_label);

    match lower.as_str() {
        "thank you" | "thanks" | "ok" | "okay" => {
            return "You're welcome! What else would you like to know about your career match?"
                .to_string()
        }
        "hello" | "hi" | "hey" => {
            return format!("Hi! Your match score is {score}/10. What would you like to discuss?")
        }
        "bye" | "goodbye" => return "Goodbye! Keep working on those skills. Good luck!".to_string(),
        "help" | "what can you do" => {
            return "I can help with skill gaps, resume tips, interview prep, and learning plans. \
                    What interests you?"
                .to_string()
        }
        _ => {}
    }

    let missing = missing_skills_label(summary);

    if let Some(days) = parse_day_plan(&lower) {
        return learning_plan(days, &missing);
    }

    if lower.contains("skill") && (lower.contains("priorit") || lower.contains("learn")) {
        return format!(
            "Focus on learning {missing} first. These are the most critical skills for this role.\n\n\
             Start with:\n\
             1. An introductory course or official tutorial for each skill\n\
             2. A hands-on guided project that combines them\n\
             3. Practice projects to build your portfolio\n\n\
             Dedicate 1-2 hours daily for best results."
        );
    }

    if lower.contains("strength") {
        return match summary.and_then(|s| s.top_present(TOP_SKILLS)) {
            Some(present) => format!(
                "Your key strengths are: {present}.\n\n\
                 Highlight these in your resume and interviews. Build projects that showcase these \
                 skills. Consider roles that heavily use these technologies."
            ),
            None => format!(
                "Based on your resume, focus on building foundational skills first. Start with \
                 {missing} to match this role better."
            ),
        };
    }

    if lower.contains("experience level") {
        let level = summary
            .and_then(|s| s.experience_level.as_deref())
            .filter(|l| !l.trim().is_empty())
            .unwrap_or("entry");
        return format!(
            "Your experience level is {level} for this role.\n\n\
             To advance:\n\
             1. Build more projects using required skills\n\
             2. Get certifications in {missing}\n\
             3. Contribute to open-source or internships\n\n\
             Focus on gaining practical experience."
        );
    }

    if lower.contains("resume") || lower.contains("update") {
        return format!(
            "Update your resume by:\n\
             1. Adding keywords like {missing} in your skills section\n\
             2. Describing projects where you used relevant tools\n\
             3. Quantifying achievements with numbers\n\
             4. Keeping format clean and ATS-friendly\n\n\
             Tailor it for each job application."
        );
    }

    if lower.contains("interview") {
        return "For interview prep:\n\
                1. Research the company and role thoroughly\n\
                2. Practice explaining your projects in detail\n\
                3. Prepare STAR method examples\n\
                4. Study common technical questions\n\
                5. Prepare questions to ask them\n\n\
                Practice with mock interviews."
            .to_string();
    }

    if lower.contains("gap") || lower.contains("address") {
        return format!(
            "To address skill gaps in {missing}:\n\
             1. Take structured online courses (Udemy, Coursera)\n\
             2. Practice daily with tutorials and projects\n\
             3. Join communities to learn from others\n\
             4. Build a portfolio of work\n\n\
             Consistency is key. Aim for 1-2 hours daily."
        );
    }

    if lower.contains("match") || lower.contains("better") {
        return format!(
            "To improve your match:\n\
             1. Learn the missing skills: {missing}\n\
             2. Build projects using these technologies\n\
             3. Update resume with relevant keywords\n\
             4. Get certifications if available\n\n\
             Focus on practical experience over theory."
        );
    }

    "I can help with:\n\
     - Skill gap analysis and learning plans\n\
     - Resume optimization tips\n\
     - Interview preparation\n\
     - Career strategy advice\n\n\
     What would you like to focus on?"
        .to_string()
}

/// A phase-structured plan for `days` days over `skills`.
pub fn learning_plan(days: u32, skills: &str) -> String {
    let days = days.max(1);

    match days {
        0..=3 => format!(
            "Here's a {days}-day quick start plan:\n\n\
             1. Day 1 - Research {skills} basics and set up the tools you need\n\
             2. Day 2 - Complete the first module of a beginner course\n\
             3. Day 3 - Create a simple practice project\n\n\
             Focus on fundamentals first."
        ),
        4..=7 => format!(
            "Here's your {days}-day learning plan:\n\n\
             1. Days 1-2 - Learn the basics of {skills} through tutorials and documentation\n\
             2. Days 3-4 - Start a structured beginner course on Udemy or Coursera\n\
             3. Days 5-6 - Practice with small exercises daily\n\
             4. Day 7 - Build a small project of your own and review progress\n\n\
             Practice 1-2 hours daily for best results."
        ),
        8..=14 => format!(
            "Here's your {days}-day intensive plan:\n\n\
             Week 1:\n\
             1. Days 1-3 - Complete a fundamentals course covering {skills}\n\
             2. Days 4-5 - Work through guided exercises\n\
             3. Days 6-7 - Build a small project using what you learned\n\n\
             Week 2:\n\
             1. Days 8-10 - Move on to intermediate features and tooling\n\
             2. Days 11-12 - Practice with realistic, job-style tasks\n\
             3. Days 13-14 - Finish a simple portfolio project\n\n\
             Dedicate 2 hours daily. Join online communities for support."
        ),
        15..=30 => format!(
            "Here's your {days}-day comprehensive plan:\n\n\
             Week 1 (Days 1-7): Fundamentals\n\
             - Learn the core concepts of {skills}\n\
             - Complete a beginner course online\n\
             - Do 3 small practice exercises\n\n\
             Week 2 (Days 8-14): Core Skills\n\
             - Enroll in a structured course (Udemy/Coursera)\n\
             - Master the everyday tools and workflows\n\
             - Build 3 small projects\n\n\
             Week 3 (Days 15-21): Intermediate Skills\n\
             - Tackle more complex problems\n\
             - Combine the skills in a single project\n\
             - Start building a portfolio project\n\n\
             Week 4 (Days 22-{days}): Advanced & Portfolio\n\
             - Explore advanced features and best practices\n\
             - Complete 1-2 realistic projects\n\
             - Document your work for your portfolio\n\
             - Review and practice daily\n\n\
             Goal: 2-3 hours daily practice. Join online communities for feedback."
        ),
        31..=60 => format!(
            "Here's your {days}-day mastery plan:\n\n\
             Month 1 - Foundations:\n\
             Weeks 1-2: Master the fundamentals of {skills}\n\
             Weeks 3-4: Build small projects with each skill\n\n\
             Month 2 - Advanced Skills:\n\
             Weeks 5-6: Advanced features, integration and best practices\n\
             Weeks 7-8: Real-world projects and portfolio building\n\n\
             Daily Activities:\n\
             - 2-3 hours of focused practice\n\
             - Join forums and communities\n\
             - Complete 1 project per week\n\
             - Get feedback from experienced practitioners\n\n\
             By day {days}, you should have:\n\
             - A solid foundation in {skills}\n\
             - 6-8 portfolio projects\n\
             - Confidence applying these skills on the job\n\n\
             Consistency is key to success!"
        ),
        _ => format!(
            "Here's your {days}-day extended learning plan:\n\n\
             Phase 1 (First 30 days): Build strong foundations in {skills}\n\
             Phase 2 (Days 31-60): Develop intermediate skills with complex projects\n\
             Phase 3 (Days 61-90): Master advanced topics and build a comprehensive portfolio\n\
             Phase 4 (Remaining days): Specialize and prepare for job applications\n\n\
             Weekly Goals:\n\
             - Complete 1 structured course module\n\
             - Build 1-2 practice projects\n\
             - Spend 10-15 hours on hands-on practice\n\
             - Participate in online communities\n\n\
             By the end, you'll have:\n\
             - Strong command of {skills}\n\
             - Professional portfolio with 15+ projects\n\
             - Industry-relevant certifications\n\
             - Job-ready skills and confidence\n\n\
             Break it into smaller milestones and stay consistent!"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::SummarySkills;
    use crate::skills::{Category, Skill};

    fn summary() -> AnalysisSummary {
        AnalysisSummary {
            score: Some(6.7),
            experience_level: Some("junior".to_string()),
            skills: SummarySkills {
                present: vec![Skill::new("Python", Category::ProgrammingLanguages)],
                missing: vec![
                    Skill::new("Docker", Category::CloudDevOps),
                    Skill::new("AWS", Category::CloudDevOps),
                ],
            },
        }
    }

    #[test]
    fn test_parse_day_plan() {
        assert_eq!(parse_day_plan("give me a 7 day plan"), Some(7));
        assert_eq!(parse_day_plan("30days plan please"), Some(30));
        assert_eq!(parse_day_plan("a 2 days plan"), Some(2));
        assert_eq!(parse_day_plan("plan for 7 days"), None);
        assert_eq!(parse_day_plan("99999999999 day plan"), Some(u32::MAX));
    }

    #[test]
    fn test_greetings_are_exact_matches() {
        assert!(is_greeting("thanks"));
        assert!(is_greeting("okay"));
        assert!(!is_greeting("thanks a lot"));
    }

    #[test]
    fn test_greeting_replies_include_score() {
        let s = summary();
        assert_eq!(
            template_reply("Hello", Some(&s)),
            "Hi! Your match score is 6.7/10. What would you like to discuss?"
        );
        assert!(template_reply("hey", None).contains("N/A/10"));
        assert!(template_reply("ok", None).starts_with("You're welcome!"));
    }

    #[test]
    fn test_learning_plan_buckets() {
        assert!(learning_plan(3, "Docker").starts_with("Here's a 3-day quick start plan"));
        assert!(learning_plan(7, "Docker").starts_with("Here's your 7-day learning plan"));
        assert!(learning_plan(14, "Docker").contains("Week 2:"));
        assert!(learning_plan(30, "Docker").contains("Week 4 (Days 22-30)"));
        assert!(learning_plan(45, "Docker").contains("By day 45"));
        assert!(learning_plan(90, "Docker").contains("Phase 4"));
        assert!(learning_plan(0, "Docker").starts_with("Here's a 1-day quick start plan"));
    }

    #[test]
    fn test_keyword_templates_use_missing_skills() {
        let s = summary();
        assert!(template_reply("Which skills should I learn first?", Some(&s))
            .starts_with("Focus on learning Docker, AWS first."));
        assert!(template_reply("How do I update my resume?", Some(&s)).contains("keywords like Docker, AWS"));
        assert!(template_reply("how can I address the gap", None).contains(DEFAULT_MISSING));
        assert!(template_reply("what is my experience level", Some(&s)).contains("junior"));
        assert!(template_reply("what is my experience level", None).contains("entry"));
    }

    #[test]
    fn test_strengths_template_depends_on_present_skills() {
        let s = summary();
        assert!(template_reply("my strengths?", Some(&s)).contains("Your key strengths are: Python."));
        assert!(template_reply("my strengths?", None).starts_with("Based on your resume"));
    }

    #[test]
    fn test_unknown_message_gets_menu() {
        assert!(template_reply("tell me a joke", None).starts_with("I can help with:"));
    }
}
