//! Project extraction.

use serde::Serialize;

use crate::model::ResumeProject;
use crate::parser::{LayoutOptions, Line, SectionKey, SectionMap};
use crate::scoring::features::{is_bold, DATE_FEATURES};
use crate::scoring::{score_and_select, Feature, ScoreRecord, SelectOptions};

use super::bullets::get_bullet_points_from_lines;
use super::subsections::divide_section_into_subsections;
use super::work_experience::split_header;

/// Candidate scores behind one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectScores {
    pub project: Vec<ScoreRecord>,
    pub date: Vec<ScoreRecord>,
}

fn extract_entry(lines: &[Line]) -> (ResumeProject, ProjectScores) {
    let (items, body) = split_header(lines, 1);

    let (date, date_scores) = score_and_select(&items, DATE_FEATURES, &SelectOptions::default());
    let project_features = [Feature::test(is_bold, 2), Feature::contains(&date, -4)];
    let (project, project_scores) = score_and_select(
        &items,
        &project_features,
        &SelectOptions::default().allow_non_positive(),
    );

    let entry = ResumeProject {
        project,
        date,
        descriptions: get_bullet_points_from_lines(body),
    };
    let scores = ProjectScores {
        project: project_scores,
        date: date_scores,
    };
    (entry, scores)
}

/// Extract one project per subsection of the projects section.
pub fn extract_projects(
    sections: &SectionMap,
    layout: &LayoutOptions,
) -> (Vec<ResumeProject>, Vec<ProjectScores>) {
    divide_section_into_subsections(sections.lines(&SectionKey::Projects), layout)
        .iter()
        .map(|subsection| extract_entry(subsection))
        .unzip()
}
