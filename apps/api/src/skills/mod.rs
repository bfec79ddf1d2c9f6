//! Skill extraction: a static taxonomy compiled once into word-boundary matchers,
//! plus a free-form harvester for "Skills:" style sections.

pub mod canonical;
pub mod extractor;
pub mod sections;
pub mod taxonomy;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use extractor::{ExtractorOptions, SkillExtractor};

/// Fixed skill categories. Declaration order is the taxonomy order and drives
/// the ordering of extraction results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "Programming Languages")]
    ProgrammingLanguages,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Backend Development")]
    BackendDevelopment,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "Databases")]
    Databases,
    #[serde(rename = "Cloud & DevOps")]
    CloudDevOps,
    #[serde(rename = "Software Tools")]
    SoftwareTools,
    #[serde(rename = "Data Science & AI")]
    DataScienceAi,
    #[serde(rename = "Cybersecurity")]
    Cybersecurity,
    #[serde(rename = "QA & Testing")]
    QaTesting,
    #[serde(rename = "Mechanical Engineering")]
    MechanicalEngineering,
    #[serde(rename = "Civil Engineering")]
    CivilEngineering,
    #[serde(rename = "Electrical Engineering")]
    ElectricalEngineering,
    #[serde(rename = "Business & Management")]
    BusinessManagement,
    #[serde(rename = "Design & Creative")]
    DesignCreative,
    #[serde(rename = "Healthcare & Medical")]
    HealthcareMedical,
    #[serde(rename = "Education & Academia")]
    EducationAcademia,
    #[serde(rename = "General Skills")]
    GeneralSkills,
    /// Free-form tokens harvested from a resume or JD skills section.
    #[serde(rename = "Skills Section")]
    SkillsSection,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ProgrammingLanguages => "Programming Languages",
            Category::WebDevelopment => "Web Development",
            Category::BackendDevelopment => "Backend Development",
            Category::MobileDevelopment => "Mobile Development",
            Category::Databases => "Databases",
            Category::CloudDevOps => "Cloud & DevOps",
            Category::SoftwareTools => "Software Tools",
            Category::DataScienceAi => "Data Science & AI",
            Category::Cybersecurity => "Cybersecurity",
            Category::QaTesting => "QA & Testing",
            Category::MechanicalEngineering => "Mechanical Engineering",
            Category::CivilEngineering => "Civil Engineering",
            Category::ElectricalEngineering => "Electrical Engineering",
            Category::BusinessManagement => "Business & Management",
            Category::DesignCreative => "Design & Creative",
            Category::HealthcareMedical => "Healthcare & Medical",
            Category::EducationAcademia => "Education & Academia",
            Category::GeneralSkills => "General Skills",
            Category::SkillsSection => "Skills Section",
            Category::Other => "Other",
        }
    }

    /// Categories counted towards the experience level.
    pub fn is_technical(&self) -> bool {
        matches!(
            self,
            Category::ProgrammingLanguages
                | Category::WebDevelopment
                | Category::BackendDevelopment
                | Category::MobileDevelopment
                | Category::Databases
                | Category::CloudDevOps
                | Category::SoftwareTools
                | Category::DataScienceAi
                | Category::Cybersecurity
                | Category::QaTesting
        )
    }

    /// Categories that describe a professional domain. Soft skills and
    /// harvested tokens say nothing about the domain of a job or resume.
    pub fn is_domain(&self) -> bool {
        !matches!(
            self,
            Category::GeneralSkills | Category::SkillsSection | Category::Other
        )
    }

    /// Keywords that corroborate a match of this category when windowed
    /// context validation is enabled.
    pub fn context_keywords(&self) -> &'static [&'static str] {
        match self {
            Category::ProgrammingLanguages => &[
                "programming", "language", "developer", "development", "code", "coding",
                "software", "engineer", "scripting",
            ],
            Category::WebDevelopment => &[
                "web", "frontend", "front-end", "ui", "browser", "javascript", "framework",
                "developer", "responsive",
            ],
            Category::BackendDevelopment => &[
                "backend", "back-end", "api", "server", "framework", "service", "developer",
            ],
            Category::MobileDevelopment => &["mobile", "ios", "android", "app", "cross-platform"],
            Category::Databases => &[
                "database", "data", "query", "queries", "sql", "nosql", "schema", "storage",
            ],
            Category::CloudDevOps => &[
                "cloud", "devops", "deploy", "deployment", "infrastructure", "pipeline",
                "container", "server", "ci/cd", "monitoring",
            ],
            Category::SoftwareTools => &[
                "tool", "tools", "version control", "collaboration", "workflow", "tracking",
                "design",
            ],
            Category::DataScienceAi => &[
                "data", "model", "models", "machine learning", "analytics", "analysis",
                "learning", "ai", "statistics",
            ],
            Category::Cybersecurity => &[
                "security", "secure", "threat", "vulnerability", "compliance", "network",
                "authentication",
            ],
            Category::QaTesting => &["test", "testing", "qa", "quality", "automation", "bugs"],
            Category::MechanicalEngineering => &[
                "mechanical", "design", "cad", "engineering", "manufacturing", "simulation",
                "parts",
            ],
            Category::CivilEngineering => &[
                "civil", "structural", "construction", "design", "engineering", "site",
                "infrastructure",
            ],
            Category::ElectricalEngineering => &[
                "electrical", "electronics", "circuit", "embedded", "hardware", "firmware",
                "signal",
            ],
            Category::BusinessManagement => &[
                "business", "management", "manage", "stakeholder", "strategy", "marketing",
                "project", "team",
            ],
            Category::DesignCreative => &[
                "design", "creative", "visual", "adobe", "animation", "user", "portfolio",
            ],
            Category::HealthcareMedical => &[
                "clinical", "patient", "medical", "health", "healthcare", "hospital",
                "regulatory",
            ],
            Category::EducationAcademia => &[
                "teaching", "education", "students", "academic", "research", "course",
                "learning",
            ],
            Category::GeneralSkills => &[
                "skills", "strong", "excellent", "ability", "team", "work",
            ],
            Category::SkillsSection | Category::Other => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, categorized competency detected in text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: Category,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }

    /// Uniqueness key: the same name under two categories is two skills.
    pub fn key(&self) -> (String, Category) {
        (self.name.to_lowercase(), self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::CloudDevOps).unwrap();
        assert_eq!(json, r#""Cloud & DevOps""#);
        assert_eq!(Category::CloudDevOps.to_string(), "Cloud & DevOps");
    }

    #[test]
    fn test_unknown_category_deserializes_as_other() {
        let category: Category = serde_json::from_str(r#""Soft Skills""#).unwrap();
        assert_eq!(category, Category::Other);
    }

    #[test]
    fn test_skill_without_category_defaults_to_other() {
        let skill: Skill = serde_json::from_str(r#"{"name": "Python"}"#).unwrap();
        assert_eq!(skill.category, Category::Other);
    }

    #[test]
    fn test_skill_key_is_case_insensitive_and_category_scoped() {
        let a = Skill::new("Python", Category::ProgrammingLanguages);
        let b = Skill::new("python", Category::ProgrammingLanguages);
        let c = Skill::new("Python", Category::SkillsSection);
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn test_technical_and_domain_subsets() {
        assert!(Category::Databases.is_technical());
        assert!(!Category::MechanicalEngineering.is_technical());
        assert!(Category::MechanicalEngineering.is_domain());
        assert!(!Category::GeneralSkills.is_domain());
        assert!(!Category::SkillsSection.is_domain());
    }
}
