//! Score Calculator: turns required/present skill sets into the numeric
//! score, ATS score, experience level and match level.
//!
//! One formula and one threshold set apply on every path, LLM or fallback.

use std::collections::BTreeSet;

use crate::analysis::models::{ExperienceLevel, MatchLevel};
use crate::skills::{Category, Skill};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub score: f64,
    pub ats_score: f64,
    pub experience_level: ExperienceLevel,
    pub match_level: MatchLevel,
}

/// Job and resume skill categories that share nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMismatch {
    pub job_categories: Vec<Category>,
    pub resume_categories: Vec<Category>,
}

impl DomainMismatch {
    pub fn job_domains(&self) -> String {
        join_categories(&self.job_categories)
    }

    pub fn resume_domains(&self) -> String {
        join_categories(&self.resume_categories)
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn calculate_scores(required: &[Skill], present: &[Skill]) -> Scores {
    let match_ratio = present.len() as f64 / required.len().max(1) as f64;

    let score = round1((match_ratio * 10.0).clamp(1.0, 10.0));
    let ats_score = round1((match_ratio * 100.0 + present.len() as f64 * 2.0).min(100.0));

    let technical = present.iter().filter(|s| s.category.is_technical()).count();

    Scores {
        score,
        ats_score,
        experience_level: ExperienceLevel::from_technical_count(technical),
        match_level: MatchLevel::from_score(score),
    }
}

impl ExperienceLevel {
    pub fn from_technical_count(count: usize) -> Self {
        match count {
            0..=2 => ExperienceLevel::Junior,
            3..=5 => ExperienceLevel::Mid,
            _ => ExperienceLevel::Senior,
        }
    }
}

impl MatchLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.5 {
            MatchLevel::Excellent
        } else if score >= 7.0 {
            MatchLevel::Strong
        } else if score >= 6.0 {
            MatchLevel::GoodFit
        } else if score >= 5.0 {
            MatchLevel::Moderate
        } else if score >= 3.0 {
            MatchLevel::NeedsImprovement
        } else {
            MatchLevel::Weak
        }
    }
}

/// Compares the domain categories of the job's required skills with every
/// skill found in the resume. Soft skills and harvested tokens are ignored.
pub fn detect_domain_mismatch(required: &[Skill], resume_skills: &[Skill]) -> Option<DomainMismatch> {
    let job: BTreeSet<Category> = domain_categories(required);
    let resume: BTreeSet<Category> = domain_categories(resume_skills);

    if job.is_empty() || resume.is_empty() || !job.is_disjoint(&resume) {
        return None;
    }

    Some(DomainMismatch {
        job_categories: job.into_iter().collect(),
        resume_categories: resume.into_iter().collect(),
    })
}

fn domain_categories(skills: &[Skill]) -> BTreeSet<Category> {
    skills
        .iter()
        .map(|s| s.category)
        .filter(Category::is_domain)
        .collect()
}

fn join_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[(&str, Category)]) -> Vec<Skill> {
        names.iter().map(|(n, c)| Skill::new(*n, *c)).collect()
    }

    fn required_five() -> Vec<Skill> {
        skills(&[
            ("Python", Category::ProgrammingLanguages),
            ("Docker", Category::CloudDevOps),
            ("AWS", Category::CloudDevOps),
            ("SQL", Category::Databases),
            ("Git", Category::SoftwareTools),
        ])
    }

    #[test]
    fn test_empty_sets_floor_the_score() {
        let scores = calculate_scores(&[], &[]);
        assert_eq!(scores.score, 1.0);
        assert_eq!(scores.ats_score, 0.0);
        assert_eq!(scores.experience_level, ExperienceLevel::Junior);
        assert_eq!(scores.match_level, MatchLevel::Weak);
    }

    #[test]
    fn test_two_of_three_is_a_good_fit() {
        let required = skills(&[
            ("Python", Category::ProgrammingLanguages),
            ("AWS", Category::CloudDevOps),
            ("Docker", Category::CloudDevOps),
        ]);
        let scores = calculate_scores(&required, &required[..2]);
        assert_eq!(scores.score, 6.7);
        assert_eq!(scores.ats_score, 70.7);
        assert_eq!(scores.match_level, MatchLevel::GoodFit);
        assert_eq!(scores.experience_level, ExperienceLevel::Junior);
    }

    #[test]
    fn test_full_match_caps_scores() {
        let required = required_five();
        let scores = calculate_scores(&required, &required);
        assert_eq!(scores.score, 10.0);
        assert_eq!(scores.ats_score, 100.0);
        assert_eq!(scores.match_level, MatchLevel::Excellent);
        assert_eq!(scores.experience_level, ExperienceLevel::Mid);
    }

    #[test]
    fn test_scores_are_monotonic_in_present_skills() {
        let required = required_five();
        let mut last = calculate_scores(&required, &[]);
        for n in 1..=required.len() {
            let next = calculate_scores(&required, &required[..n]);
            assert!(next.score >= last.score);
            assert!(next.ats_score >= last.ats_score);
            last = next;
        }
    }

    #[test]
    fn test_match_level_thresholds() {
        assert_eq!(MatchLevel::from_score(10.0), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(8.5), MatchLevel::Excellent);
        assert_eq!(MatchLevel::from_score(8.4), MatchLevel::Strong);
        assert_eq!(MatchLevel::from_score(7.0), MatchLevel::Strong);
        assert_eq!(MatchLevel::from_score(6.0), MatchLevel::GoodFit);
        assert_eq!(MatchLevel::from_score(5.0), MatchLevel::Moderate);
        assert_eq!(MatchLevel::from_score(3.0), MatchLevel::NeedsImprovement);
        assert_eq!(MatchLevel::from_score(2.9), MatchLevel::Weak);
    }

    #[test]
    fn test_experience_level_counts_only_technical_skills() {
        let present = skills(&[
            ("Python", Category::ProgrammingLanguages),
            ("SQL", Category::Databases),
            ("Docker", Category::CloudDevOps),
            ("Leadership", Category::GeneralSkills),
            ("Scrum", Category::BusinessManagement),
        ]);
        assert_eq!(calculate_scores(&present, &present).experience_level, ExperienceLevel::Mid);
        assert_eq!(ExperienceLevel::from_technical_count(2), ExperienceLevel::Junior);
        assert_eq!(ExperienceLevel::from_technical_count(6), ExperienceLevel::Senior);
    }

    #[test]
    fn test_disjoint_domains_are_a_mismatch() {
        let job = skills(&[
            ("SolidWorks", Category::MechanicalEngineering),
            ("Communication", Category::GeneralSkills),
        ]);
        let resume = skills(&[
            ("React", Category::WebDevelopment),
            ("Communication", Category::GeneralSkills),
        ]);
        let mismatch = detect_domain_mismatch(&job, &resume).unwrap();
        assert_eq!(mismatch.job_domains(), "Mechanical Engineering");
        assert_eq!(mismatch.resume_domains(), "Web Development");
    }

    #[test]
    fn test_overlap_or_empty_side_is_not_a_mismatch() {
        let job = skills(&[("Python", Category::ProgrammingLanguages)]);
        let resume = skills(&[
            ("Rust", Category::ProgrammingLanguages),
            ("React", Category::WebDevelopment),
        ]);
        assert!(detect_domain_mismatch(&job, &resume).is_none());
        assert!(detect_domain_mismatch(&job, &[]).is_none());
        assert!(detect_domain_mismatch(&[], &resume).is_none());

        let soft_only = skills(&[("Teamwork", Category::GeneralSkills)]);
        assert!(detect_domain_mismatch(&job, &soft_only).is_none());
    }
}
