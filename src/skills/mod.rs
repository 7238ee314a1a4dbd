//! Cross-referencing extracted skills against a known-skills list.
//!
//! The list is a plain text resource: a header line followed by one skill
//! per line. Where it comes from is abstracted behind [`SkillListSource`];
//! a failing source never fails the parse, it only skips the enrichment.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::model::ResumeSkills;

/// Skills this short produce too many false positives and are skipped.
const MIN_SKILL_LEN: usize = 3;

/// A list of known skill names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    skills: Vec<String>,
}

impl SkillCatalog {
    /// Parse a header-plus-rows list.
    ///
    /// The first line is the header and is skipped. Blank rows are ignored
    /// and surrounding quotes are removed.
    pub fn parse(text: &str) -> Self {
        let skills = text
            .lines()
            .skip(1)
            .map(|row| row.trim().trim_matches('"').trim())
            .filter(|row| !row.is_empty())
            .map(str::to_string)
            .collect();
        Self { skills }
    }

    /// Create a catalog from skill names.
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    /// Known skill names.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Find the catalog skills mentioned in the given texts.
    ///
    /// Matching is case-insensitive and requires the skill to start at a
    /// word boundary: "SQL" is found in "sql, rust" but not in "PostgreSQL",
    /// while "Postgre" is found in "PostgreSQL" as a word prefix. Results keep the
    /// catalog's casing, contain each skill once and are sorted.
    pub fn match_skills<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        let haystack = texts
            .iter()
            .map(|t| t.as_ref().to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        let mut seen: HashSet<String> = HashSet::new();
        let mut found: Vec<String> = self
            .skills
            .iter()
            .filter(|skill| skill.chars().count() >= MIN_SKILL_LEN)
            .filter(|skill| starts_at_word_boundary(&haystack, &skill.to_lowercase()))
            .filter(|skill| seen.insert(skill.to_lowercase()))
            .cloned()
            .collect();

        found.sort();
        found
    }
}

/// Whether `needle` occurs in `haystack` right after a non-alphanumeric
/// character or at the start.
fn starts_at_word_boundary(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(i, _)| {
        haystack[..i]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

/// Somewhere a known-skills list can be loaded from.
#[async_trait]
pub trait SkillListSource: Send + Sync {
    /// Load the raw list text.
    async fn load(&self) -> Result<String>;
}

/// A skills list held in memory.
#[derive(Debug, Clone)]
pub struct StaticSkillSource {
    text: String,
}

impl StaticSkillSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl SkillListSource for StaticSkillSource {
    async fn load(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// A skills list read from a file.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct FileSkillSource {
    path: std::path::PathBuf,
}

#[cfg(feature = "async")]
impl FileSkillSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "async")]
#[async_trait]
impl SkillListSource for FileSkillSource {
    async fn load(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::SkillList(format!("{}: {}", self.path.display(), e)))
    }
}

/// Load a catalog from a source.
pub async fn load_catalog(source: &dyn SkillListSource) -> Result<SkillCatalog> {
    let text = source.load().await?;
    let catalog = SkillCatalog::parse(&text);
    if catalog.is_empty() {
        return Err(Error::SkillList("list has no skills".to_string()));
    }
    Ok(catalog)
}

/// Fill `known_skills` with the catalog skills mentioned in the skills
/// section.
///
/// Both the descriptions and the featured skills are searched. If the list
/// cannot be loaded, a warning is logged and the skills are returned
/// unchanged.
pub async fn enrich_skills(
    mut skills: ResumeSkills,
    source: &dyn SkillListSource,
) -> ResumeSkills {
    let catalog = match load_catalog(source).await {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("Skipping known-skills matching: {}", e);
            return skills;
        }
    };

    let texts: Vec<&str> = skills
        .descriptions
        .iter()
        .map(String::as_str)
        .chain(skills.featured_names())
        .collect();
    let known = catalog.match_skills(&texts);

    log::debug!("Matched {} of {} known skills", known.len(), catalog.len());
    skills.known_skills = known;
    skills
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_header_and_blanks() {
        let catalog = SkillCatalog::parse("skill\nPython\n\n \"Rust\" \nSQL\n");
        assert_eq!(catalog.skills(), &["Python", "Rust", "SQL"]);
    }

    #[test]
    fn test_match_skills() {
        let catalog =
            SkillCatalog::from_skills(["Python", "SQL", "Go", "Postgre", "Java", "python"]);
        let found = catalog.match_skills(&["Built ETL jobs in python and PostgreSQL", "MySQL"]);

        // "Go" is too short, "SQL" only appears inside other words
        assert_eq!(found, vec!["Postgre", "Python"]);
    }

    #[test]
    fn test_word_boundary() {
        assert!(starts_at_word_boundary("c++ and rust", "rust"));
        assert!(starts_at_word_boundary("(rust)", "rust"));
        assert!(!starts_at_word_boundary("trust", "rust"));
    }
}
