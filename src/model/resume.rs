//! Structured resume record produced by the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Number of featured skill slots on a resume.
pub const FEATURED_SKILL_SLOTS: usize = 6;

/// Rating given to featured skills that were not rated by the user.
pub const DEFAULT_SKILL_RATING: u8 = 4;

/// A complete resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    /// Contact details and summary
    pub profile: ResumeProfile,
    /// Education entries, ordered University, 12th, 10th, Other
    pub educations: Vec<ResumeEducation>,
    /// Work history entries in document order
    pub work_experiences: Vec<ResumeWorkExperience>,
    /// Project entries in document order
    pub projects: Vec<ResumeProject>,
    /// Skills
    pub skills: ResumeSkills,
    /// Certifications in document order
    pub certifications: Vec<ResumeCertification>,
}

/// Contact details and summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub url: String,
    pub summary: String,
}

/// Schooling level of an education entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EducationType {
    /// College or university degree
    #[serde(rename = "University")]
    University,
    /// Higher secondary (HSC, 12th grade)
    #[serde(rename = "12th")]
    Class12,
    /// Secondary (SSC, 10th grade)
    #[serde(rename = "10th")]
    Class10,
    /// Anything that could not be classified
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl EducationType {
    /// All types in resume display order.
    pub const ALL: [EducationType; 4] = [
        EducationType::University,
        EducationType::Class12,
        EducationType::Class10,
        EducationType::Other,
    ];

    /// Label used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationType::University => "University",
            EducationType::Class12 => "12th",
            EducationType::Class10 => "10th",
            EducationType::Other => "Other",
        }
    }

    /// Degree recorded when none was found in the text.
    pub fn default_degree(&self) -> Option<&'static str> {
        match self {
            EducationType::University => Some("Bachelor's Degree"),
            EducationType::Class12 => Some("Higher Secondary Education"),
            EducationType::Class10 => Some("Secondary Education"),
            EducationType::Other => None,
        }
    }
}

impl std::fmt::Display for EducationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One education entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeEducation {
    pub school: String,
    pub degree: String,
    /// GPA on a 4/10 scale or a percentage, formatted with two decimals
    pub gpa: String,
    pub date: String,
    pub descriptions: Vec<String>,
    pub education_type: EducationType,
}

/// One job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeWorkExperience {
    pub company: String,
    pub job_title: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

/// One project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProject {
    pub project: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

/// One certification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeCertification {
    pub name: String,
    pub date: String,
    pub descriptions: Vec<String>,
}

/// A featured skill slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedSkill {
    pub skill: String,
    pub rating: u8,
}

impl FeaturedSkill {
    /// Create a featured skill with the default rating.
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            rating: DEFAULT_SKILL_RATING,
        }
    }

    /// Whether the slot holds no skill.
    pub fn is_empty(&self) -> bool {
        self.skill.is_empty()
    }
}

impl Default for FeaturedSkill {
    fn default() -> Self {
        Self::new("")
    }
}

/// Skills section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSkills {
    /// Fixed featured slots; unused slots hold an empty skill
    pub featured_skills: [FeaturedSkill; FEATURED_SKILL_SLOTS],
    /// Free-text skill descriptions
    pub descriptions: Vec<String>,
    /// Canonical skill names matched against a known-skills list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub known_skills: Vec<String>,
}

impl ResumeSkills {
    /// Non-empty featured skill names, in slot order.
    pub fn featured_names(&self) -> Vec<&str> {
        self.featured_skills
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.skill.as_str())
            .collect()
    }
}
