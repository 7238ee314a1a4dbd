//! Education extraction.
//!
//! Each subsection of the education section becomes one candidate entry.
//! The entry is classified as University, 12th, 10th or Other, its fields
//! are scored from the subsection's text items, and gaps are filled by
//! per-type fallbacks. The candidates are then reduced to at most one entry
//! per classified type.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::model::{EducationType, ResumeEducation, TextItem};
use crate::parser::{LayoutOptions, Line, SectionKey, SectionMap};
use crate::scoring::features::{has_comma, has_letter, has_number, DATE_FEATURES};
use crate::scoring::{max_score, score_and_select, Feature, ScoreRecord, SelectOptions};

use super::bullets::{get_bullet_points_from_lines, get_descriptions_line_idx};
use super::subsections::divide_section_into_subsections;

/// Maximum number of education entries kept.
pub const MAX_EDUCATIONS: usize = 3;

const SCHOOLS: [&str; 10] = [
    "College",
    "University",
    "Institute",
    "School",
    "Academy",
    "BASIS",
    "Magnet",
    "Vidyalaya",
    "Center",
    "Centre",
];

const DEGREES: [&str; 17] = [
    "Associate",
    "Bachelor",
    "Master",
    "PhD",
    "Ph.",
    "B.Tech",
    "M.Tech",
    "B.Sc",
    "M.Sc",
    "B.A",
    "M.A",
    "B.E",
    "M.E",
    "B.Com",
    "M.Com",
    "B.B.A",
    "M.B.A",
];

const GENERIC_UNIVERSITY_DEGREE: &str = "Bachelor's Degree";

static DEGREE_ABBREVIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ABM][A-Z.]").unwrap());

static GPA_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:CGPA|SGPA|GPA)\b[:\s]*(\d{1,2}(?:\.\d{1,2})?)\b").unwrap()
});
static GPA_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d\.\d{1,2})\b(?:\s*/\s*(?:4|5|10)(?:\.0+)?)?").unwrap());
static GRADE_PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{2,3}(?:\.\d{1,2})?)\s*(?:%|percent)").unwrap()
});
static GRADE_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2,3}(?:\.\d{1,2})?)$").unwrap());

static UNIVERSITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)university|college|institute|\bb\.?tech\b|\bm\.?tech\b|bachelor|master|\bph\.?d\b|undergraduate|graduate|post\s*graduate|engineering|polytechnic|degree",
    )
    .unwrap()
});
static CLASS_12: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)12th|\bxii\b|higher\s*secondary|senior\s*secondary|intermediate|\bhsc\b|\+2|plus\s*two|junior\s*college",
    )
    .unwrap()
});
static CLASS_10: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)10th|\bx\b|secondary|matric|\bssc\b|high\s*school").unwrap()
});
static UPPER_SECONDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:higher|senior)\s*secondary").unwrap());

static UNIVERSITY_SCHOOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-z\s.]+(?:College|University|Institute|Engineering|Technology))")
        .unwrap()
});
static CLASS_12_SCHOOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-z\s.]+(?:College|School|Academy|HSC|Board|Education))").unwrap()
});
static CLASS_10_SCHOOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][A-Za-z\s.]+(?:School|Vidyalaya|Academy|SSC|Board|Education))").unwrap()
});

/// Degree names inferred from free text, tried in order.
static DEGREE_INFERENCE: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\bB\.?Tech\b|Bachelor.+Technology|Engineering", "Bachelor of Technology"),
        (r"(?i)\bM\.?Tech\b|Master.+Technology", "Master of Technology"),
        (r"(?i)\bB\.?Sc\b|Bachelor.+Science", "Bachelor of Science"),
        (r"(?i)\bM\.?Sc\b|Master.+Science", "Master of Science"),
        (r"(?i)\bB\.?A\b|Bachelor.+Arts", "Bachelor of Arts"),
        (r"(?i)\bM\.?A\b|Master.+Arts", "Master of Arts"),
        (r"(?i)\bMBA\b|Master.+Business", "Master of Business Administration"),
        (r"(?i)\bB\.?Com\b|Bachelor.+Commerce", "Bachelor of Commerce"),
    ]
    .into_iter()
    .map(|(pattern, degree)| (Regex::new(pattern).unwrap(), degree))
    .collect()
});

fn has_school(item: &TextItem) -> bool {
    SCHOOLS.iter().any(|school| item.text.contains(school))
}

fn has_degree(item: &TextItem) -> bool {
    DEGREES.iter().any(|degree| item.text.contains(degree))
        || DEGREE_ABBREVIATION.is_match(&item.text)
}

fn parse_value(text: &str) -> Option<f32> {
    text.parse::<f32>().ok()
}

/// GPA on a 10-point or smaller scale, e.g. "CGPA: 8.5" or "3.8/4.0".
fn match_gpa(item: &TextItem) -> Option<String> {
    let labeled = GPA_LABELED
        .captures(&item.text)
        .and_then(|c| c.get(1))
        .filter(|m| parse_value(m.as_str()).is_some_and(|v| v <= 10.0));

    labeled
        .or_else(|| GPA_BARE.captures(&item.text).and_then(|c| c.get(1)))
        .map(|m| m.as_str().to_string())
}

/// Percentage grade, e.g. "85%" or a bare "78.5".
fn match_grade(item: &TextItem) -> Option<String> {
    if let Some(m) = GRADE_PERCENT.captures(&item.text).and_then(|c| c.get(1)) {
        return Some(m.as_str().to_string());
    }

    GRADE_BARE
        .captures(item.text.trim())
        .and_then(|c| c.get(1))
        .filter(|m| parse_value(m.as_str()).is_some_and(|v| (45.0..=100.0).contains(&v)))
        .map(|m| m.as_str().to_string())
}

fn is_university(item: &TextItem) -> bool {
    UNIVERSITY.is_match(&item.text)
}

fn is_12th(item: &TextItem) -> bool {
    CLASS_12.is_match(&item.text)
}

fn is_10th(item: &TextItem) -> bool {
    // "Higher Secondary" names the 12th, not the 10th
    CLASS_10.is_match(&UPPER_SECONDARY.replace_all(&item.text, ""))
}

const SCHOOL_FEATURES: &[Feature<'static>] = &[
    Feature::test(has_school, 4),
    Feature::test(has_degree, -4),
    Feature::test(has_number, -4),
];

const DEGREE_FEATURES: &[Feature<'static>] = &[
    Feature::test(has_degree, 4),
    Feature::test(has_school, -4),
    Feature::test(has_number, -3),
];

const GPA_FEATURES: &[Feature<'static>] = &[
    Feature::capture(match_gpa, 4),
    Feature::capture(match_grade, 3),
    Feature::test(has_comma, -3),
    Feature::test(has_letter, -4),
];

const UNIVERSITY_FEATURES: &[Feature<'static>] = &[
    Feature::test(is_university, 4),
    Feature::test(is_12th, -4),
    Feature::test(is_10th, -4),
];

const CLASS_12_FEATURES: &[Feature<'static>] = &[
    Feature::test(is_12th, 4),
    Feature::test(is_university, -4),
    Feature::test(is_10th, -4),
];

const CLASS_10_FEATURES: &[Feature<'static>] = &[
    Feature::test(is_10th, 4),
    Feature::test(is_university, -4),
    Feature::test(is_12th, -4),
];

/// Candidate scores behind one education entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EducationScores {
    pub school: Vec<ScoreRecord>,
    pub degree: Vec<ScoreRecord>,
    pub gpa: Vec<ScoreRecord>,
    pub date: Vec<ScoreRecord>,
}

/// Classify a subsection by its strongest type signal.
///
/// University wins ties, then 12th, then 10th; nothing positive means Other.
pub fn determine_education_type(items: &[TextItem]) -> EducationType {
    let select = SelectOptions::default();
    let best =
        |features: &[Feature<'static>]| max_score(&score_and_select(items, features, &select).1);

    let university = best(UNIVERSITY_FEATURES);
    let class_12 = best(CLASS_12_FEATURES);
    let class_10 = best(CLASS_10_FEATURES);
    let top = university.max(class_12).max(class_10);

    if top <= 0 {
        EducationType::Other
    } else if university == top {
        EducationType::University
    } else if class_12 == top {
        EducationType::Class12
    } else {
        EducationType::Class10
    }
}

fn fallback_school(education_type: EducationType, text: &str) -> Option<String> {
    let pattern = match education_type {
        EducationType::University => &UNIVERSITY_SCHOOL,
        EducationType::Class12 => &CLASS_12_SCHOOL,
        EducationType::Class10 => &CLASS_10_SCHOOL,
        EducationType::Other => return None,
    };
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn infer_university_degree(text: &str) -> &'static str {
    DEGREE_INFERENCE
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, degree)| *degree)
        .unwrap_or(GENERIC_UNIVERSITY_DEGREE)
}

/// Format a GPA or percentage with two decimals when it is in range.
///
/// University values up to 10 and other values up to 100 are formatted;
/// anything else, including unparsable text, is returned unchanged.
pub fn format_gpa(gpa: &str, education_type: EducationType) -> String {
    let limit = match education_type {
        EducationType::University => 10.0,
        _ => 100.0,
    };
    match leading_number(gpa) {
        Some(value) if value <= limit => format!("{:.2}", value),
        _ => gpa.to_string(),
    }
}

/// Numeric prefix of the text, e.g. 85 for "85%".
fn leading_number(text: &str) -> Option<f32> {
    let text = text.trim();
    let end = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text[..end].trim_end_matches('.').parse().ok()
}

fn extract_entry(lines: &[Line]) -> (ResumeEducation, EducationScores) {
    let items: Vec<TextItem> = lines.iter().flat_map(|l| l.items().iter().cloned()).collect();
    let select = SelectOptions::default();

    let (school, school_scores) = score_and_select(&items, SCHOOL_FEATURES, &select);
    let (degree, degree_scores) = score_and_select(&items, DEGREE_FEATURES, &select);
    let (gpa, gpa_scores) = score_and_select(&items, GPA_FEATURES, &select);
    let (date, date_scores) = score_and_select(&items, DATE_FEATURES, &select);

    let descriptions = get_descriptions_line_idx(lines)
        .map(|idx| get_bullet_points_from_lines(&lines[idx..]))
        .unwrap_or_default();

    let education_type = determine_education_type(&items);
    let full_text = items
        .iter()
        .map(|i| i.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let school = if school.is_empty() {
        fallback_school(education_type, &full_text).unwrap_or_default()
    } else {
        school
    };

    let degree = match education_type {
        EducationType::University if degree.is_empty() => {
            infer_university_degree(&full_text).to_string()
        }
        _ if degree.is_empty() => education_type
            .default_degree()
            .unwrap_or_default()
            .to_string(),
        _ => degree,
    };

    let gpa = format_gpa(&gpa, education_type);

    let education = ResumeEducation {
        school,
        degree,
        gpa,
        date,
        descriptions,
        education_type,
    };
    let scores = EducationScores {
        school: school_scores,
        degree: degree_scores,
        gpa: gpa_scores,
        date: date_scores,
    };
    (education, scores)
}

/// Rank key of a candidate: a school, a specific degree and a GPA are each
/// better than their absence. Lower is better.
fn completeness_rank(education: &ResumeEducation) -> (bool, bool, bool) {
    let generic_degree = education.education_type == EducationType::University
        && education.degree == GENERIC_UNIVERSITY_DEGREE;
    (
        education.school.is_empty(),
        generic_degree,
        education.gpa.is_empty(),
    )
}

/// Keep the best entry per classified type, fill up with Other entries and
/// order by type.
pub fn dedup_educations(educations: Vec<ResumeEducation>) -> Vec<ResumeEducation> {
    let mut kept: Vec<ResumeEducation> = [
        EducationType::University,
        EducationType::Class12,
        EducationType::Class10,
    ]
    .iter()
    .filter_map(|ty| {
        educations
            .iter()
            .filter(|e| e.education_type == *ty)
            .min_by_key(|e| completeness_rank(e))
            .cloned()
    })
    .collect();

    let free_slots = MAX_EDUCATIONS.saturating_sub(kept.len());
    kept.extend(
        educations
            .into_iter()
            .filter(|e| e.education_type == EducationType::Other)
            .take(free_slots),
    );

    kept.sort_by_key(|e| e.education_type);
    kept.truncate(MAX_EDUCATIONS);
    kept
}

/// Extract education entries.
///
/// Lines of a Courses section are added as a "Courses: ..." description to
/// the University entry, or to the first entry when there is none.
pub fn extract_education(
    sections: &SectionMap,
    layout: &LayoutOptions,
) -> (Vec<ResumeEducation>, Vec<EducationScores>) {
    let lines = sections.lines(&SectionKey::Education);
    let (mut educations, scores): (Vec<_>, Vec<_>) =
        divide_section_into_subsections(lines, layout)
            .iter()
            .map(|subsection| extract_entry(subsection))
            .unzip();

    let courses = sections.text(&SectionKey::Courses);
    if !courses.is_empty() {
        let target = educations
            .iter()
            .position(|e| e.education_type == EducationType::University)
            .unwrap_or(0);
        if let Some(education) = educations.get_mut(target) {
            education.descriptions.push(format!("Courses: {}", courses));
        }
    }

    log::debug!("Found {} education candidates", educations.len());
    (dedup_educations(educations), scores)
}
