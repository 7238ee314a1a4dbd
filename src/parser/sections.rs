//! Section grouping: split lines into named resume sections.
//!
//! A line that looks like a section title opens a new section; all following
//! lines belong to it until the next title. Lines before the first title
//! form the profile section.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use super::layout::Line;
use super::options::SectionOptions;

/// Canonical name of a resume section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKey {
    /// Lines before the first heading (name, contact details)
    Profile,
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    Summary,
    Objective,
    Courses,
    /// A heading that matched no keyword, keyed by its text
    Custom(String),
}

/// Keyword prefixes per section, in match priority order.
///
/// Courses precede Experience so "Coursework" is not taken for "work".
const SECTION_KEYWORDS: &[(&[&str], SectionKey)] = &[
    (&["education", "academic", "qualification"], SectionKey::Education),
    (&["course"], SectionKey::Courses),
    (
        &["experience", "work", "employment", "job", "internship"],
        SectionKey::Experience,
    ),
    (&["project"], SectionKey::Projects),
    (&["skill", "competenc", "technolog"], SectionKey::Skills),
    (
        &["certification", "certificate", "credential", "license"],
        SectionKey::Certifications,
    ),
    (&["summary", "about"], SectionKey::Summary),
    (&["objective"], SectionKey::Objective),
];

impl SectionKey {
    /// Match heading text against the keyword dictionary.
    ///
    /// Keywords match case-insensitively as word prefixes, so "Skills"
    /// matches "skill" and "Work History" matches "work".
    pub fn from_heading(text: &str) -> Option<SectionKey> {
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        SECTION_KEYWORDS.iter().find_map(|(keywords, key)| {
            words
                .iter()
                .any(|w| keywords.iter().any(|k| w.starts_with(k)))
                .then(|| key.clone())
        })
    }

    /// Display name of the section.
    pub fn name(&self) -> &str {
        match self {
            SectionKey::Profile => "profile",
            SectionKey::Education => "education",
            SectionKey::Experience => "experience",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
            SectionKey::Certifications => "certifications",
            SectionKey::Summary => "summary",
            SectionKey::Objective => "objective",
            SectionKey::Courses => "courses",
            SectionKey::Custom(title) => title,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for SectionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A named, contiguous run of lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    /// Canonical section name
    pub key: SectionKey,
    /// The title line that opened the section (none for the profile)
    pub heading: Option<Line>,
    /// Body lines in reading order
    pub lines: Vec<Line>,
}

/// Ordered mapping from section key to lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SectionMap {
    sections: Vec<Section>,
}

impl SectionMap {
    /// All sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Body lines of the first section with the given key.
    pub fn lines(&self, key: &SectionKey) -> &[Line] {
        self.get(key).map(|s| s.lines.as_slice()).unwrap_or(&[])
    }

    /// The first section with the given key.
    pub fn get(&self, key: &SectionKey) -> Option<&Section> {
        self.sections.iter().find(|s| &s.key == key)
    }

    /// Whether a section with the given key exists.
    pub fn contains(&self, key: &SectionKey) -> bool {
        self.get(key).is_some()
    }

    /// Total number of lines, headings included.
    pub fn line_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.lines.len() + usize::from(s.heading.is_some()))
            .sum()
    }

    /// Body text of a section joined into one string.
    pub fn text(&self, key: &SectionKey) -> String {
        self.lines(key)
            .iter()
            .map(Line::text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

static HEADING_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z\s&/,\-]*:?$").unwrap());

/// Decide whether a line is a section title and, if so, which one.
fn section_title(line: &Line, line_number: usize, options: &SectionOptions) -> Option<SectionKey> {
    let text = line.text();
    if text.is_empty() {
        return None;
    }

    let word_count = text.split_whitespace().filter(|w| *w != "&").count();
    let starts_with_capital = text.chars().next().is_some_and(char::is_uppercase);

    // Short capitalized keyword item alone on its line, e.g. "Work Experience"
    // or "SKILLS:"; a title next to a company name is an entry header
    if line.len() == 1
        && word_count <= options.max_heading_words
        && starts_with_capital
        && HEADING_CHARS.is_match(&text)
    {
        if let Some(key) = SectionKey::from_heading(&text) {
            return Some(key);
        }
    }

    // Bold and all uppercase reads as a title even without a keyword
    if line_number >= options.protected_leading_lines
        && line.len() == 1
        && line.is_bold()
        && line.is_uppercase()
    {
        let title = text.trim_end_matches(':').trim().to_string();
        return Some(SectionKey::from_heading(&title).unwrap_or(SectionKey::Custom(title)));
    }

    None
}

/// Group lines into sections.
///
/// Every line ends up in exactly one section, either as its heading or as a
/// body line. A keyword line in the middle of body text still opens a new
/// section.
pub fn group_lines_into_sections(lines: &[Line], options: &SectionOptions) -> SectionMap {
    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section {
        key: SectionKey::Profile,
        heading: None,
        lines: Vec::new(),
    };

    for (i, line) in lines.iter().enumerate() {
        if let Some(key) = section_title(line, i, options) {
            log::debug!("Line {} opens section '{}'", i, key);
            let next = Section {
                key,
                heading: Some(line.clone()),
                lines: Vec::new(),
            };
            let finished = std::mem::replace(&mut current, next);
            if finished.heading.is_some() || !finished.lines.is_empty() {
                sections.push(finished);
            }
        } else {
            current.lines.push(line.clone());
        }
    }

    if current.heading.is_some() || !current.lines.is_empty() {
        sections.push(current);
    }

    SectionMap { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TextItem;

    fn line(text: &str) -> Line {
        Line::from_items(vec![TextItem::new(text, 50.0, 0.0)])
    }

    fn bold_line(text: &str) -> Line {
        Line::from_items(vec![TextItem::new(text, 50.0, 0.0).with_font("Calibri-Bold")])
    }

    #[test]
    fn test_keyword_matching() {
        assert_eq!(SectionKey::from_heading("EDUCATION"), Some(SectionKey::Education));
        assert_eq!(
            SectionKey::from_heading("Work Experience"),
            Some(SectionKey::Experience)
        );
        assert_eq!(
            SectionKey::from_heading("Relevant Coursework"),
            Some(SectionKey::Courses)
        );
        assert_eq!(
            SectionKey::from_heading("Technical Skills"),
            Some(SectionKey::Skills)
        );
        assert_eq!(
            SectionKey::from_heading("Licenses & Certifications"),
            Some(SectionKey::Certifications)
        );
        assert_eq!(SectionKey::from_heading("Hobbies"), None);
    }

    #[test]
    fn test_lines_before_first_heading_are_profile() {
        let lines = vec![
            line("Jane Doe"),
            line("jane@example.com"),
            line("Education"),
            line("State University"),
        ];
        let sections = group_lines_into_sections(&lines, &SectionOptions::default());

        assert_eq!(sections.sections().len(), 2);
        assert_eq!(sections.lines(&SectionKey::Profile).len(), 2);
        assert_eq!(sections.lines(&SectionKey::Education).len(), 1);
        assert_eq!(sections.line_count(), lines.len());
    }

    #[test]
    fn test_heading_on_first_line() {
        let lines = vec![line("SKILLS"), line("Python, Java, SQL")];
        let sections = group_lines_into_sections(&lines, &SectionOptions::default());

        assert!(!sections.contains(&SectionKey::Profile));
        assert_eq!(sections.text(&SectionKey::Skills), "Python, Java, SQL");
    }

    #[test]
    fn test_long_or_lowercase_lines_are_not_headings() {
        let lines = vec![
            line("Jane Doe"),
            line("Gained experience building data pipelines"),
            line("education"),
        ];
        let sections = group_lines_into_sections(&lines, &SectionOptions::default());
        assert_eq!(sections.sections().len(), 1);
        assert_eq!(sections.lines(&SectionKey::Profile).len(), 3);
    }

    #[test]
    fn test_bold_uppercase_custom_heading() {
        let lines = vec![
            bold_line("JANE DOE"),
            line("jane@example.com"),
            bold_line("VOLUNTEERING"),
            line("Food bank, 2019"),
        ];
        let sections = group_lines_into_sections(&lines, &SectionOptions::default());

        let custom = SectionKey::Custom("VOLUNTEERING".to_string());
        assert_eq!(sections.lines(&custom).len(), 1);
        // The bold name in the protected header stays in the profile
        assert_eq!(sections.lines(&SectionKey::Profile).len(), 2);
    }

    #[test]
    fn test_keyword_in_multi_item_line_is_not_heading() {
        let lines = vec![
            line("Experience"),
            Line::from_items(vec![
                TextItem::new("Project Manager", 40.0, 0.0),
                TextItem::new("Google", 300.0, 0.0),
            ]),
            line("• Led a team of engineers"),
        ];
        let sections = group_lines_into_sections(&lines, &SectionOptions::default());

        assert!(!sections.contains(&SectionKey::Projects));
        assert_eq!(sections.lines(&SectionKey::Experience).len(), 2);
    }

    #[test]
    fn test_mid_paragraph_keyword_line_still_opens_section() {
        let lines = vec![
            line("Summary"),
            line("Engineer with a focus on reliability"),
            line("Projects"),
            line("and tooling for internal teams"),
        ];
        let sections = group_lines_into_sections(&lines, &SectionOptions::default());
        assert_eq!(sections.lines(&SectionKey::Summary).len(), 1);
        assert_eq!(sections.lines(&SectionKey::Projects).len(), 1);
    }
}
