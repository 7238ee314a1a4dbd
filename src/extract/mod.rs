//! Field extractors: sections to typed resume entities.
//!
//! Every extractor is a pure function of the section map. Alongside the
//! entities, the scoring extractors return the candidate scores behind each
//! field so callers can inspect how confident a pick was.

pub mod bullets;
mod certifications;
mod education;
mod profile;
mod project;
mod skills;
pub mod subsections;
mod work_experience;

pub use certifications::extract_certifications;
pub use education::{
    dedup_educations, determine_education_type, extract_education, format_gpa, EducationScores,
    MAX_EDUCATIONS,
};
pub use profile::{extract_profile, format_phone, format_url, ProfileScores};
pub use project::{extract_projects, ProjectScores};
pub use skills::extract_skills;
pub use work_experience::{extract_work_experience, WorkExperienceScores, JOB_TITLES};

use serde::Serialize;

use crate::model::Resume;
use crate::parser::{LayoutOptions, SectionMap};

/// Candidate scores for every scored field of a resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeScores {
    pub profile: ProfileScores,
    /// One entry per education subsection, before deduplication
    pub educations: Vec<EducationScores>,
    pub work_experiences: Vec<WorkExperienceScores>,
    pub projects: Vec<ProjectScores>,
}

/// Run every extractor over the sections.
pub fn extract_resume_from_sections(
    sections: &SectionMap,
    layout: &LayoutOptions,
) -> (Resume, ResumeScores) {
    let (profile, profile_scores) = extract_profile(sections);
    let (educations, education_scores) = extract_education(sections, layout);
    let (work_experiences, work_scores) = extract_work_experience(sections, layout);
    let (projects, project_scores) = extract_projects(sections, layout);
    let skills = extract_skills(sections);
    let certifications = extract_certifications(sections);

    log::debug!(
        "Extracted {} educations, {} jobs, {} projects, {} certifications",
        educations.len(),
        work_experiences.len(),
        projects.len(),
        certifications.len()
    );

    let resume = Resume {
        profile,
        educations,
        work_experiences,
        projects,
        skills,
        certifications,
    };
    let scores = ResumeScores {
        profile: profile_scores,
        educations: education_scores,
        work_experiences: work_scores,
        projects: project_scores,
    };
    (resume, scores)
}
