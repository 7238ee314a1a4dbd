//! Skills extraction.

use crate::model::{FeaturedSkill, ResumeSkills, FEATURED_SKILL_SLOTS};
use crate::parser::{Line, SectionKey, SectionMap};

use super::bullets::{get_bullet_points_from_lines, get_descriptions_line_idx};

/// Skill names on a header line such as "Languages: Python, Java | SQL".
fn skill_tokens(line: &Line) -> Vec<String> {
    let text = line.text();
    let list = match text.split_once(':') {
        Some((label, rest)) if !label.trim().is_empty() => rest,
        _ => text.as_str(),
    };

    list.split([',', '|', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract skills.
///
/// Lines before the first description line hold the featured skills (at
/// most six); the rest become descriptions. A section without description
/// lines is all featured skills.
pub fn extract_skills(sections: &SectionMap) -> ResumeSkills {
    let lines = sections.lines(&SectionKey::Skills);
    let (header, body) = match get_descriptions_line_idx(lines) {
        Some(idx) => lines.split_at(idx),
        None => (lines, &[][..]),
    };

    let mut skills = ResumeSkills {
        descriptions: get_bullet_points_from_lines(body),
        ..Default::default()
    };

    let tokens = header.iter().flat_map(skill_tokens).take(FEATURED_SKILL_SLOTS);
    for (slot, token) in skills.featured_skills.iter_mut().zip(tokens) {
        *slot = FeaturedSkill::new(token);
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextItem;
    use crate::parser::{group_lines_into_sections, SectionOptions};

    fn sections(rows: &[&str]) -> SectionMap {
        let lines: Vec<Line> = std::iter::once("Skills")
            .chain(rows.iter().copied())
            .enumerate()
            .map(|(i, text)| {
                Line::from_items(vec![TextItem::new(text, 50.0, 700.0 - i as f32 * 14.0)])
            })
            .collect();
        group_lines_into_sections(&lines, &SectionOptions::default())
    }

    #[test]
    fn test_header_line_without_bullets() {
        let skills = extract_skills(&sections(&["Python, Java, SQL"]));

        assert_eq!(skills.featured_names(), vec!["Python", "Java", "SQL"]);
        assert!(skills.descriptions.is_empty());
        assert!(skills.featured_skills[3].is_empty());
    }

    #[test]
    fn test_featured_and_descriptions() {
        let skills = extract_skills(&sections(&[
            "Languages: Rust | Go | TypeScript",
            "Tools: Docker; Kubernetes; Terraform; Git",
            "• Comfortable with distributed tracing",
        ]));

        assert_eq!(
            skills.featured_names(),
            vec!["Rust", "Go", "TypeScript", "Docker", "Kubernetes", "Terraform"]
        );
        assert_eq!(
            skills.descriptions,
            vec!["Comfortable with distributed tracing"]
        );
    }

    #[test]
    fn test_bullets_only() {
        let skills = extract_skills(&sections(&["• Rust", "• SQL"]));
        assert!(skills.featured_names().is_empty());
        assert_eq!(skills.descriptions, vec!["Rust", "SQL"]);
    }
}
