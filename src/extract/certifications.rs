//! Certification extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ResumeCertification;
use crate::parser::{Line, SectionKey, SectionMap};

use super::bullets::{
    get_bullet_points_from_lines, get_descriptions_line_idx, has_bullet_marker, is_continuation,
};

static CERTIFICATION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* )?\d{4}\b|\d{1,2}/\d{4}",
    )
    .unwrap()
});

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '–' | '—' | '|' | ',') || c.is_whitespace()
}

/// Split a certification line into name and date.
fn parse_certification_line(line: &Line) -> Option<ResumeCertification> {
    let text = line.text();
    if text.is_empty() {
        return None;
    }

    let (name, date) = match CERTIFICATION_DATE.find(&text) {
        Some(m) => {
            let name = format!("{}{}", &text[..m.start()], &text[m.end()..]);
            (name.trim_matches(is_separator).to_string(), m.as_str().to_string())
        }
        None => (text, String::new()),
    };

    Some(ResumeCertification {
        name,
        date,
        descriptions: Vec::new(),
    })
}

/// Extract certifications.
///
/// Lines before the first description line name certifications. After it,
/// a line that is neither a bullet nor the continuation of one names
/// another certification. All bullet descriptions are attached to the first
/// certification.
pub fn extract_certifications(sections: &SectionMap) -> Vec<ResumeCertification> {
    let lines = sections.lines(&SectionKey::Certifications);
    let Some(idx) = get_descriptions_line_idx(lines) else {
        return lines.iter().filter_map(parse_certification_line).collect();
    };

    let mut certifications: Vec<ResumeCertification> = lines[..idx]
        .iter()
        .filter_map(parse_certification_line)
        .collect();
    let mut description_lines: Vec<Line> = Vec::new();
    let mut last_bullet: Option<&Line> = None;

    for line in &lines[idx..] {
        if has_bullet_marker(line) {
            last_bullet = Some(line);
            description_lines.push(line.clone());
        } else if last_bullet.is_some_and(|bullet| is_continuation(line, bullet)) {
            description_lines.push(line.clone());
        } else {
            certifications.extend(parse_certification_line(line));
            last_bullet = None;
        }
    }

    if let Some(first) = certifications.first_mut() {
        first.descriptions = get_bullet_points_from_lines(&description_lines);
    }
    certifications
}
