//! Feature scoring engine.
//!
//! Picks the text item that best fits a field by summing the weights of the
//! features each item exhibits. The engine knows nothing about resumes; the
//! extractors pass in their own feature tables.
//!
//! # Example
//!
//! ```
//! use resumex::model::TextItem;
//! use resumex::scoring::{score_and_select, Feature, SelectOptions};
//!
//! fn has_at(item: &TextItem) -> bool {
//!     item.text.contains('@')
//! }
//!
//! const EMAIL: &[Feature<'static>] = &[Feature::test(has_at, 4)];
//!
//! let items = vec![
//!     TextItem::new("Jane Doe", 0.0, 700.0),
//!     TextItem::new("jane@example.com", 0.0, 680.0),
//! ];
//! let (email, _) = score_and_select(&items, EMAIL, &SelectOptions::default());
//! assert_eq!(email, "jane@example.com");
//! ```

pub mod features;

use std::cmp::Ordering;

use serde::Serialize;

use crate::model::TextItem;

/// How a feature recognizes an item.
#[derive(Debug, Clone, Copy)]
pub enum Matcher<'a> {
    /// A yes/no predicate on the item
    Test(fn(&TextItem) -> bool),
    /// A predicate that also returns the part of the text it matched
    Capture(fn(&TextItem) -> Option<String>),
    /// Matches items whose text contains the given string (never matches
    /// when the string is empty)
    Contains(&'a str),
}

/// A weighted feature.
#[derive(Debug, Clone, Copy)]
pub struct Feature<'a> {
    pub matcher: Matcher<'a>,
    pub weight: i32,
}

impl<'a> Feature<'a> {
    /// Feature backed by a boolean predicate.
    pub const fn test(f: fn(&TextItem) -> bool, weight: i32) -> Self {
        Self {
            matcher: Matcher::Test(f),
            weight,
        }
    }

    /// Feature that returns the matched text as its own candidate.
    pub const fn capture(f: fn(&TextItem) -> Option<String>, weight: i32) -> Self {
        Self {
            matcher: Matcher::Capture(f),
            weight,
        }
    }

    /// Feature that fires when the item contains `text`.
    pub const fn contains(text: &'a str, weight: i32) -> Self {
        Self {
            matcher: Matcher::Contains(text),
            weight,
        }
    }
}

/// Score of one candidate text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    /// Candidate text (an item's text, or text captured from it)
    pub text: String,
    /// Sum of matching feature weights
    pub score: i32,
    /// Whether any feature matched
    pub matched: bool,
}

impl ScoreRecord {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            score: 0,
            matched: false,
        }
    }

    fn add(&mut self, weight: i32) {
        self.score += weight;
        self.matched = true;
    }
}

/// Ordering used to break ties between equally scored candidates.
///
/// `Ordering::Greater` means the first argument is preferred.
pub type TieBreak = fn(&ScoreRecord, &ScoreRecord) -> Ordering;

/// Selection rules applied after scoring.
#[derive(Debug, Clone, Copy)]
pub struct SelectOptions {
    /// Return an empty string unless the best score is positive
    pub require_positive: bool,
    /// Join all top-scoring candidates with a space instead of picking one
    pub concatenate_ties: bool,
    /// Prefer one tied candidate over another; first encountered wins when
    /// unset
    pub tie_break: Option<TieBreak>,
}

impl SelectOptions {
    /// Keep the best candidate even if its score is zero or negative.
    pub fn allow_non_positive(mut self) -> Self {
        self.require_positive = false;
        self
    }

    /// Join tied candidates.
    pub fn concatenating_ties(mut self) -> Self {
        self.concatenate_ties = true;
        self
    }

    /// Set a tie-break ordering.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = Some(tie_break);
        self
    }
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            require_positive: true,
            concatenate_ties: false,
            tie_break: None,
        }
    }
}

/// Tie-break that prefers the longer candidate text.
pub fn longest_text(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    a.text.chars().count().cmp(&b.text.chars().count())
}

/// Score every item against the features.
///
/// Each item yields a record for its own text. A capturing feature whose
/// captured text differs from the item text yields a separate record that
/// carries only that feature's weight.
pub fn score_items(items: &[TextItem], features: &[Feature<'_>]) -> Vec<ScoreRecord> {
    let mut records = Vec::with_capacity(items.len());

    for item in items {
        let mut own = ScoreRecord::new(item.text.as_str());
        let mut captured: Vec<ScoreRecord> = Vec::new();

        for feature in features {
            match feature.matcher {
                Matcher::Test(f) => {
                    if f(item) {
                        own.add(feature.weight);
                    }
                }
                Matcher::Contains(text) => {
                    if !text.is_empty() && item.text.contains(text) {
                        own.add(feature.weight);
                    }
                }
                Matcher::Capture(f) => match f(item) {
                    Some(text) if text == item.text => own.add(feature.weight),
                    Some(text) => match captured.iter_mut().find(|r| r.text == text) {
                        Some(record) => record.add(feature.weight),
                        None => {
                            let mut record = ScoreRecord::new(text);
                            record.add(feature.weight);
                            captured.push(record);
                        }
                    },
                    None => {}
                },
            }
        }

        records.push(own);
        records.extend(captured);
    }

    records
}

/// Pick the best text from already scored records.
pub fn select(records: &[ScoreRecord], options: &SelectOptions) -> String {
    let Some(best_score) = records.iter().map(|r| r.score).max() else {
        return String::new();
    };

    if options.require_positive && best_score <= 0 {
        return String::new();
    }

    let mut tied = records.iter().filter(|r| r.score == best_score);

    if options.concatenate_ties {
        return tied
            .map(|r| r.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
    }

    let first = tied.next();
    let winner = match options.tie_break {
        // Strictly greater keeps the earlier candidate on equal preference
        Some(prefer) => tied.fold(first, |best, r| match best {
            Some(b) if prefer(r, b) == Ordering::Greater => Some(r),
            _ => best,
        }),
        None => first,
    };

    winner.map(|r| r.text.clone()).unwrap_or_default()
}

/// Score items and select the best text.
///
/// Returns the selected text (possibly empty) together with every candidate
/// record, so callers can report how confident each pick was.
pub fn score_and_select(
    items: &[TextItem],
    features: &[Feature<'_>],
    options: &SelectOptions,
) -> (String, Vec<ScoreRecord>) {
    let records = score_items(items, features);
    let text = select(&records, options);
    (text, records)
}

/// Highest score among the records, or zero when there are none.
pub fn max_score(records: &[ScoreRecord]) -> i32 {
    records.iter().map(|r| r.score).max().unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str) -> TextItem {
        TextItem::new(text, 0.0, 0.0)
    }

    fn has_digit(item: &TextItem) -> bool {
        item.text.chars().any(|c| c.is_ascii_digit())
    }

    fn is_short(item: &TextItem) -> bool {
        item.text.len() < 6
    }

    fn first_word(item: &TextItem) -> Option<String> {
        item.text.split_whitespace().next().map(str::to_string)
    }

    #[test]
    fn test_highest_score_wins() {
        let features = [Feature::test(has_digit, 3), Feature::test(is_short, 1)];
        let items = vec![item("abc"), item("2020"), item("May 2020 - Present")];
        let (text, records) = score_and_select(&items, &features, &SelectOptions::default());

        assert_eq!(text, "2020");
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].score, 4);
        assert!(records[0].matched);
    }

    #[test]
    fn test_non_positive_returns_empty() {
        let features = [Feature::test(has_digit, -4)];
        let items = vec![item("2020"), item("Jane")];
        let (text, records) = score_and_select(&items, &features, &SelectOptions::default());

        assert_eq!(text, "");
        assert_eq!(records[1].score, 0);
        assert!(!records[1].matched);

        let (text, _) = score_and_select(
            &items,
            &features,
            &SelectOptions::default().allow_non_positive(),
        );
        assert_eq!(text, "Jane");
    }

    #[test]
    fn test_empty_items() {
        let (text, records) =
            score_and_select(&[], &[Feature::test(has_digit, 1)], &SelectOptions::default());
        assert!(text.is_empty());
        assert!(records.is_empty());
    }

    #[test]
    fn test_capture_creates_separate_candidate() {
        let features = [Feature::capture(first_word, 4), Feature::test(has_digit, -4)];
        let items = vec![item("Acme 2020")];
        let (text, records) = score_and_select(&items, &features, &SelectOptions::default());

        assert_eq!(text, "Acme");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].score, -4);
        assert_eq!(records[1].score, 4);
    }

    #[test]
    fn test_capture_of_whole_text_adds_to_item() {
        let features = [Feature::capture(first_word, 4), Feature::test(is_short, 1)];
        let (_, records) =
            score_and_select(&[item("Acme")], &features, &SelectOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].score, 5);
    }

    #[test]
    fn test_ties() {
        let features = [Feature::test(is_short, 1)];
        let items = vec![item("ab"), item("abcd"), item("long text here")];

        let (text, _) = score_and_select(&items, &features, &SelectOptions::default());
        assert_eq!(text, "ab");

        let options = SelectOptions::default().with_tie_break(longest_text);
        let (text, _) = score_and_select(&items, &features, &options);
        assert_eq!(text, "abcd");

        let options = SelectOptions::default().concatenating_ties();
        let (text, _) = score_and_select(&items, &features, &options);
        assert_eq!(text, "ab abcd");
    }

    #[test]
    fn test_contains_feature() {
        let date = String::from("2020");
        let features = [Feature::contains(&date, -4), Feature::contains("", -4)];
        let items = vec![item("Acme 2020"), item("Acme")];
        let (text, records) = score_and_select(
            &items,
            &features,
            &SelectOptions::default().allow_non_positive(),
        );

        assert_eq!(text, "Acme");
        assert_eq!(records[0].score, -4);
        assert_eq!(records[1].score, 0);
    }

    #[test]
    fn test_max_score_floors_at_zero() {
        assert_eq!(max_score(&[]), 0);
        let records = vec![ScoreRecord {
            text: "x".into(),
            score: -3,
            matched: true,
        }];
        assert_eq!(max_score(&records), 0);
    }
}
