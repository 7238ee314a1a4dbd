//! # resumex
//!
//! Heuristic resume structure inference for Rust.
//!
//! This library takes the positioned text items of a PDF resume (as emitted
//! by any PDF text layer) and infers a structured [`Resume`]: profile,
//! education, work experience, projects, skills and certifications.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumex::{parse_file, render};
//!
//! fn main() -> resumex::Result<()> {
//!     // Parse a JSON array of text items
//!     let parsed = parse_file("resume.items.json")?;
//!
//!     // Print the resume as JSON
//!     let json = render::to_json(&parsed.resume, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Lines**: items sharing a baseline are grouped left to right
//! - **Sections**: heading-like lines split the document into named sections
//! - **Subsections**: vertical gaps and bold headers split entries apart
//! - **Feature scoring**: each field is picked by weighted text features
//! - **Skills matching**: optional cross-reference against a known-skills list

pub mod error;
pub mod extract;
pub mod model;
pub mod parser;
pub mod render;
pub mod scoring;
pub mod skills;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{extract_resume_from_sections, ResumeScores};
pub use model::{
    EducationType, FeaturedSkill, Resume, ResumeCertification, ResumeEducation, ResumeProfile,
    ResumeProject, ResumeSkills, ResumeUpdate, ResumeWorkExperience, TextItem,
};
pub use parser::{
    LayoutOptions, Line, ParseOptions, Section, SectionKey, SectionMap, SectionOptions,
};
pub use render::JsonFormat;
pub use skills::{enrich_skills, SkillCatalog, SkillListSource, StaticSkillSource};

#[cfg(feature = "async")]
pub use skills::FileSkillSource;

use std::io::Read;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::parser::NormalizeOptions;

/// A parsed resume together with the candidate scores behind each field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    /// The structured resume
    pub resume: Resume,
    /// Per-field candidate scores
    pub scores: ResumeScores,
}

impl ParsedResume {
    /// Fill the known skills from a skills list.
    ///
    /// A list that cannot be loaded leaves the resume unchanged.
    pub async fn with_known_skills(mut self, source: &dyn SkillListSource) -> Self {
        self.resume.skills = enrich_skills(self.resume.skills, source).await;
        self
    }
}

/// Group text items into resume sections.
///
/// This runs the layout half of the pipeline only: normalization, line
/// grouping, item merging and section detection.
///
/// # Example
///
/// ```
/// use resumex::{parse_sections, ParseOptions, SectionKey, TextItem};
///
/// let items = vec![
///     TextItem::new("Jane Doe", 40.0, 760.0),
///     TextItem::new("SKILLS", 40.0, 700.0),
///     TextItem::new("Rust, SQL", 40.0, 680.0),
/// ];
/// let sections = parse_sections(&items, &ParseOptions::default()).unwrap();
/// assert!(sections.contains(&SectionKey::Skills));
/// ```
pub fn parse_sections(items: &[TextItem], options: &ParseOptions) -> Result<SectionMap> {
    if items.iter().all(TextItem::is_blank) {
        return Err(Error::EmptyInput);
    }

    let items = if options.normalize_text {
        parser::normalize_text_items(items, &NormalizeOptions::default())
    } else {
        items.to_vec()
    };

    let mut lines = parser::group_text_items_into_lines(&items, &options.layout);
    if options.merge_adjacent_items {
        lines = parser::merge_adjacent_items(&lines);
    }

    let sections = parser::group_lines_into_sections(&lines, &options.sections);
    log::debug!(
        "Grouped {} items into {} lines and {} sections",
        items.len(),
        sections.line_count(),
        sections.sections().len()
    );
    Ok(sections)
}

/// Parse text items into a resume with default options.
///
/// # Arguments
///
/// * `items` - Positioned text items of one resume, in any order
///
/// # Returns
///
/// The resume and its field scores, or [`Error::EmptyInput`] when no item
/// carries text.
///
/// # Example
///
/// ```
/// use resumex::{parse_text_items, TextItem};
///
/// let items = vec![TextItem::new("john.doe@example.com", 40.0, 760.0)];
/// let parsed = parse_text_items(&items).unwrap();
/// assert_eq!(parsed.resume.profile.email, "john.doe@example.com");
/// assert_eq!(parsed.resume.profile.name, "");
/// ```
pub fn parse_text_items(items: &[TextItem]) -> Result<ParsedResume> {
    parse_text_items_with_options(items, &ParseOptions::default())
}

/// Parse text items into a resume with custom options.
///
/// # Example
///
/// ```no_run
/// use resumex::{parse_text_items_with_options, LayoutOptions, ParseOptions};
///
/// let options = ParseOptions::new()
///     .raw()
///     .with_layout(LayoutOptions::default().with_subsection_gap_ratio(1.6));
/// let parsed = parse_text_items_with_options(&[], &options);
/// assert!(parsed.is_err());
/// ```
pub fn parse_text_items_with_options(
    items: &[TextItem],
    options: &ParseOptions,
) -> Result<ParsedResume> {
    let sections = parse_sections(items, options)?;
    let (resume, scores) = extract_resume_from_sections(&sections, &options.layout);
    Ok(ParsedResume { resume, scores })
}

/// Parse a JSON array of text items.
///
/// # Example
///
/// ```
/// use resumex::parse_json;
///
/// let json = r#"[{"text": "Jane Doe", "x": 40, "y": 760, "fontName": "Arial-Bold"}]"#;
/// let parsed = parse_json(json).unwrap();
/// assert_eq!(parsed.resume.profile.name, "Jane Doe");
/// ```
pub fn parse_json(json: &str) -> Result<ParsedResume> {
    let items: Vec<TextItem> = serde_json::from_str(json)?;
    parse_text_items(&items)
}

/// Parse a JSON array of text items from a reader.
///
/// # Example
///
/// ```no_run
/// use resumex::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("resume.items.json").unwrap();
/// let parsed = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<ParsedResume> {
    let items: Vec<TextItem> = serde_json::from_reader(reader)?;
    parse_text_items(&items)
}

/// Parse a JSON file of text items.
///
/// # Example
///
/// ```no_run
/// use resumex::parse_file;
///
/// let parsed = parse_file("resume.items.json").unwrap();
/// println!("{}", parsed.resume.profile.name);
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedResume> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}

/// Parse many independent resumes.
///
/// Resumes are parsed in parallel unless `options.parallel` is off. Results
/// keep the input order; one failing resume does not affect the others.
pub fn parse_batch(
    documents: &[Vec<TextItem>],
    options: &ParseOptions,
) -> Vec<Result<ParsedResume>> {
    if options.parallel {
        documents
            .par_iter()
            .map(|items| parse_text_items_with_options(items, options))
            .collect()
    } else {
        documents
            .iter()
            .map(|items| parse_text_items_with_options(items, options))
            .collect()
    }
}

/// Builder for parsing resumes.
///
/// # Example
///
/// ```no_run
/// use resumex::ResumeParser;
///
/// let text = ResumeParser::new()
///     .raw()
///     .parse_file("resume.items.json")?
///     .to_text()?;
/// # Ok::<(), resumex::Error>(())
/// ```
pub struct ResumeParser {
    options: ParseOptions,
}

impl ResumeParser {
    /// Create a new parser builder.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Skip normalization and item merging.
    pub fn raw(mut self) -> Self {
        self.options = self.options.raw();
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set layout thresholds.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.options = self.options.with_layout(layout);
        self
    }

    /// Set section detection options.
    pub fn with_sections(mut self, sections: SectionOptions) -> Self {
        self.options = self.options.with_sections(sections);
        self
    }

    /// Parse in-memory text items.
    pub fn parse_items(&self, items: &[TextItem]) -> Result<ResumeResult> {
        let parsed = parse_text_items_with_options(items, &self.options)?;
        Ok(ResumeResult { parsed })
    }

    /// Parse a JSON array of text items.
    pub fn parse_json(&self, json: &str) -> Result<ResumeResult> {
        let items: Vec<TextItem> = serde_json::from_str(json)?;
        self.parse_items(&items)
    }

    /// Parse a JSON file of text items.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<ResumeResult> {
        let file = std::fs::File::open(path)?;
        let items: Vec<TextItem> = serde_json::from_reader(std::io::BufReader::new(file))?;
        self.parse_items(&items)
    }

    /// Parse many resumes, in parallel unless [`sequential`](Self::sequential)
    /// was called.
    pub fn parse_batch(&self, documents: &[Vec<TextItem>]) -> Vec<Result<ParsedResume>> {
        parse_batch(documents, &self.options)
    }

    /// The options this builder parses with.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing one resume.
pub struct ResumeResult {
    parsed: ParsedResume,
}

impl ResumeResult {
    /// Convert the resume to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.parsed.resume, format)
    }

    /// Convert the resume and its scores to JSON.
    pub fn to_json_with_scores(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.parsed, format)
    }

    /// Convert to a human-readable summary.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.parsed.resume)
    }

    /// Get the resume.
    pub fn resume(&self) -> &Resume {
        &self.parsed.resume
    }

    /// Get the field scores.
    pub fn scores(&self) -> &ResumeScores {
        &self.parsed.scores
    }

    /// Take the parse result.
    pub fn into_parsed(self) -> ParsedResume {
        self.parsed
    }
}
