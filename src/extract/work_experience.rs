//! Work experience extraction.

use serde::Serialize;

use crate::model::{ResumeWorkExperience, TextItem};
use crate::parser::{LayoutOptions, Line, SectionKey, SectionMap};
use crate::scoring::features::{has_more_than_five_words, has_number, is_bold, DATE_FEATURES};
use crate::scoring::{score_and_select, Feature, ScoreRecord, SelectOptions};

use super::bullets::{get_bullet_points_from_lines, get_descriptions_line_idx};
use super::subsections::divide_section_into_subsections;

/// Header lines assumed when a job has no detectable descriptions.
const DEFAULT_HEADER_LINES: usize = 2;

/// Words that mark a job title.
pub const JOB_TITLES: &[&str] = &[
    "Accountant",
    "Administrator",
    "Advisor",
    "Agent",
    "Analyst",
    "Apprentice",
    "Architect",
    "Assistant",
    "Associate",
    "Auditor",
    "Bartender",
    "Biologist",
    "Bookkeeper",
    "Buyer",
    "Carpenter",
    "Cashier",
    "CEO",
    "Clerk",
    "Co-op",
    "Co-Founder",
    "Consultant",
    "Coordinator",
    "CTO",
    "Developer",
    "Designer",
    "Director",
    "Driver",
    "Editor",
    "Electrician",
    "Engineer",
    "Extern",
    "Founder",
    "Freelancer",
    "Head",
    "Intern",
    "Janitor",
    "Journalist",
    "Laborer",
    "Lawyer",
    "Lead",
    "Manager",
    "Mechanic",
    "Member",
    "Nurse",
    "Officer",
    "Operator",
    "Operation",
    "Photographer",
    "President",
    "Producer",
    "Recruiter",
    "Representative",
    "Researcher",
    "Sales",
    "Server",
    "Scientist",
    "Specialist",
    "Supervisor",
    "Teacher",
    "Technician",
    "Trader",
    "Trainee",
    "Treasurer",
    "Tutor",
    "Vice",
    "VP",
    "Volunteer",
    "Webmaster",
    "Worker",
];

fn has_job_title(item: &TextItem) -> bool {
    item.text
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| matches!(c, ',' | ';' | ':' | '|')))
        .any(|word| JOB_TITLES.contains(&word))
}

const JOB_TITLE_FEATURES: &[Feature<'static>] = &[
    Feature::test(has_job_title, 4),
    Feature::test(has_number, -4),
    Feature::test(has_more_than_five_words, -2),
];

/// Candidate scores behind one job.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceScores {
    pub company: Vec<ScoreRecord>,
    pub job_title: Vec<ScoreRecord>,
    pub date: Vec<ScoreRecord>,
}

/// Split a subsection into header items and description lines.
///
/// Descriptions start at the first bullet (or long) line; without one the
/// first `default_header_lines` lines are the header.
pub(crate) fn split_header(
    lines: &[Line],
    default_header_lines: usize,
) -> (Vec<TextItem>, &[Line]) {
    let idx = get_descriptions_line_idx(lines)
        .unwrap_or(default_header_lines)
        .min(lines.len());
    let (header, body) = lines.split_at(idx);
    let items = header.iter().flat_map(|l| l.items().iter().cloned()).collect();
    (items, body)
}

fn extract_job(lines: &[Line]) -> (ResumeWorkExperience, WorkExperienceScores) {
    let (items, body) = split_header(lines, DEFAULT_HEADER_LINES);
    let select = SelectOptions::default();

    let (date, date_scores) = score_and_select(&items, DATE_FEATURES, &select);
    let (job_title, job_title_scores) = score_and_select(&items, JOB_TITLE_FEATURES, &select);

    // Company: bold text that is neither the date nor the title
    let company_features = [
        Feature::test(is_bold, 2),
        Feature::contains(&date, -4),
        Feature::contains(&job_title, -4),
    ];
    let (company, company_scores) = score_and_select(
        &items,
        &company_features,
        &SelectOptions::default().allow_non_positive(),
    );

    let job = ResumeWorkExperience {
        company,
        job_title,
        date,
        descriptions: get_bullet_points_from_lines(body),
    };
    let scores = WorkExperienceScores {
        company: company_scores,
        job_title: job_title_scores,
        date: date_scores,
    };
    (job, scores)
}

/// Extract one entry per subsection of the experience section.
pub fn extract_work_experience(
    sections: &SectionMap,
    layout: &LayoutOptions,
) -> (Vec<ResumeWorkExperience>, Vec<WorkExperienceScores>) {
    divide_section_into_subsections(sections.lines(&SectionKey::Experience), layout)
        .iter()
        .map(|subsection| extract_job(subsection))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rows: &[&[(&str, bool)]]) -> Vec<Line> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let y = 700.0 - i as f32 * 14.0;
                Line::from_items(
                    row.iter()
                        .enumerate()
                        .map(|(j, (text, bold))| {
                            let item = TextItem::new(*text, 50.0 + j as f32 * 250.0, y);
                            if *bold {
                                item.with_font("Calibri-Bold")
                            } else {
                                item
                            }
                        })
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_extract_job() {
        let lines = lines(&[
            &[("Acme Corp", true), ("Jun 2019 - Present", false)],
            &[("Senior Software Engineer", false)],
            &[("• Built the billing pipeline", false)],
            &[("• Cut cloud spend by 30%", false)],
        ]);
        let (job, scores) = extract_job(&lines);

        assert_eq!(job.company, "Acme Corp");
        assert_eq!(job.job_title, "Senior Software Engineer");
        assert_eq!(job.date, "Jun 2019 - Present");
        assert_eq!(
            job.descriptions,
            vec!["Built the billing pipeline", "Cut cloud spend by 30%"]
        );
        assert_eq!(scores.company.len(), 3);
    }

    #[test]
    fn test_default_header_without_bullets() {
        let lines = lines(&[
            &[("Globex", false)],
            &[("Intern", false)],
            &[("Answered support tickets", false)],
        ]);
        let (job, _) = extract_job(&lines);

        assert_eq!(job.company, "Globex");
        assert_eq!(job.job_title, "Intern");
        assert_eq!(job.date, "");
        assert_eq!(job.descriptions, vec!["Answered support tickets"]);
    }

    #[test]
    fn test_job_title_word_match() {
        assert!(has_job_title(&TextItem::new("Engineer, Platform", 0.0, 0.0)));
        assert!(!has_job_title(&TextItem::new("Engineering Manager's", 0.0, 0.0)));
    }
}
