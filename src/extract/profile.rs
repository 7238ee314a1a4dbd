//! Profile extraction: name, contact details and summary.
//!
//! Every field is scored independently over the text items of the profile
//! section. Each feature table rewards the field's own pattern and penalizes
//! the distinctive patterns of the other fields (an "@" belongs to the
//! email, a slash to the URL, and so on).

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::model::{ResumeProfile, TextItem};
use crate::parser::{SectionKey, SectionMap};
use crate::scoring::features::{
    has_comma, has_four_or_more_words, has_letter, has_letter_and_is_all_uppercase, has_number,
    is_bold,
};
use crate::scoring::{score_and_select, Feature, ScoreRecord, SelectOptions};

static ONLY_LETTER_SPACE_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s.]+$").unwrap());
static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S*@\S+\.\S+").unwrap());
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?:\+|00)?\d{1,3}[-.\s]?)?(?:\(?\d{1,4}\)?[-.\s]?)?(?:\d{1,4}[-.\s]?){1,3}\d{1,4}")
        .unwrap()
});
static CITY_STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-zA-Z\s]+, [A-Z]{2}").unwrap());
static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+\.[a-z]+/\S+").unwrap());
static URL_HTTP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static URL_WWW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"www\.\S+\.\S+").unwrap());
static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:https?://|www\.)").unwrap());

fn trim_leading_junk(text: &str) -> &str {
    text.trim_start_matches(|c: char| !c.is_ascii_alphanumeric())
}

fn match_only_letter_space_period(item: &TextItem) -> Option<String> {
    ONLY_LETTER_SPACE_PERIOD
        .find(&item.text)
        .map(|m| m.as_str().to_string())
}

fn match_email(item: &TextItem) -> Option<String> {
    EMAIL
        .find(&item.text)
        .map(|m| trim_leading_junk(m.as_str()).to_string())
}

fn match_phone(item: &TextItem) -> Option<String> {
    PHONE.find(&item.text).map(|m| {
        m.as_str()
            .chars()
            .filter(|c| c.is_ascii_digit() || "+()- ".contains(*c))
            .collect()
    })
}

fn match_city_and_state(item: &TextItem) -> Option<String> {
    CITY_STATE.find(&item.text).map(|m| m.as_str().to_string())
}

fn has_city_and_state(item: &TextItem) -> bool {
    CITY_STATE.is_match(&item.text)
}

fn match_url(item: &TextItem) -> Option<String> {
    URL.find(&item.text)
        .map(|m| trim_leading_junk(m.as_str()).to_string())
}

fn match_url_http(item: &TextItem) -> Option<String> {
    URL_HTTP.find(&item.text).map(|m| m.as_str().to_string())
}

fn match_url_www(item: &TextItem) -> Option<String> {
    URL_WWW.find(&item.text).map(|m| m.as_str().to_string())
}

fn has_at(item: &TextItem) -> bool {
    item.text.contains('@')
}

fn has_parenthesis(item: &TextItem) -> bool {
    item.text.contains('(')
}

fn has_slash(item: &TextItem) -> bool {
    item.text.contains('/')
}

/// Name: letters, spaces and periods only, usually bold or all caps.
const NAME_FEATURES: &[Feature<'static>] = &[
    Feature::capture(match_only_letter_space_period, 3),
    Feature::test(is_bold, 2),
    Feature::test(has_letter_and_is_all_uppercase, 2),
    Feature::test(has_at, -4),
    Feature::test(has_number, -4),
    Feature::test(has_parenthesis, -4),
    Feature::test(has_comma, -4),
    Feature::test(has_slash, -4),
    Feature::test(has_four_or_more_words, -2),
];

const EMAIL_FEATURES: &[Feature<'static>] = &[
    Feature::capture(match_email, 4),
    Feature::test(is_bold, -1),
    Feature::test(has_letter_and_is_all_uppercase, -1),
    Feature::test(has_parenthesis, -4),
    Feature::test(has_comma, -4),
    Feature::test(has_slash, -4),
    Feature::test(has_four_or_more_words, -4),
];

const PHONE_FEATURES: &[Feature<'static>] = &[
    Feature::capture(match_phone, 4),
    Feature::test(has_letter, -4),
];

/// Location: "City, ST".
const LOCATION_FEATURES: &[Feature<'static>] = &[
    Feature::capture(match_city_and_state, 4),
    Feature::test(is_bold, -1),
    Feature::test(has_at, -4),
    Feature::test(has_parenthesis, -3),
    Feature::test(has_slash, -4),
];

const URL_FEATURES: &[Feature<'static>] = &[
    Feature::capture(match_url, 4),
    Feature::capture(match_url_http, 3),
    Feature::capture(match_url_www, 3),
    Feature::test(is_bold, -1),
    Feature::test(has_at, -4),
    Feature::test(has_parenthesis, -3),
    Feature::test(has_comma, -4),
    Feature::test(has_four_or_more_words, -4),
];

const SUMMARY_FEATURES: &[Feature<'static>] = &[
    Feature::test(has_four_or_more_words, 4),
    Feature::test(is_bold, -1),
    Feature::test(has_at, -4),
    Feature::test(has_parenthesis, -3),
    Feature::test(has_city_and_state, -4),
];

/// Candidate scores behind each profile field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileScores {
    pub name: Vec<ScoreRecord>,
    pub email: Vec<ScoreRecord>,
    pub phone: Vec<ScoreRecord>,
    pub location: Vec<ScoreRecord>,
    pub url: Vec<ScoreRecord>,
    pub summary: Vec<ScoreRecord>,
}

/// Format a phone number by its digit count.
///
/// Ten digits become "XXXXX XXXXX"; longer numbers keep the extra leading
/// digits as a country code ("+CC XXXXX XXXXX"). Shorter numbers are only
/// stripped of stray characters.
pub fn format_phone(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || "+()-. ".contains(*c))
        .collect();
    let digits: String = cleaned.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => format!("{} {}", &digits[..5], &digits[5..]),
        n if n > 10 => {
            let (country, local) = digits.split_at(n - 10);
            format!("+{} {} {}", country, &local[..5], &local[5..])
        }
        _ => cleaned,
    }
}

/// Strip stray leading characters and add a scheme to bare URLs.
pub fn format_url(raw: &str) -> String {
    let url = raw.trim_start_matches(|c: char| !c.is_ascii_alphanumeric() && c != ':');
    if url.is_empty() || URL_SCHEME.is_match(url) {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

fn sanitize(mut profile: ResumeProfile) -> ResumeProfile {
    profile.email = trim_leading_junk(&profile.email).to_string();
    if !profile.url.is_empty() {
        profile.url = format_url(&profile.url);
    }
    if !profile.phone.is_empty() {
        profile.phone = format_phone(&profile.phone);
    }
    profile
}

/// Extract the profile from the lines before the first heading.
///
/// A dedicated Summary section, or failing that an Objective section, takes
/// precedence over a summary guessed from the profile lines.
pub fn extract_profile(sections: &SectionMap) -> (ResumeProfile, ProfileScores) {
    let items: Vec<TextItem> = sections
        .lines(&SectionKey::Profile)
        .iter()
        .flat_map(|line| line.items().iter().cloned())
        .collect();

    let select = SelectOptions::default();
    let (name, name_scores) = score_and_select(&items, NAME_FEATURES, &select);
    let (email, email_scores) = score_and_select(&items, EMAIL_FEATURES, &select);
    let (phone, phone_scores) = score_and_select(&items, PHONE_FEATURES, &select);
    let (location, location_scores) = score_and_select(&items, LOCATION_FEATURES, &select);
    let (url, url_scores) = score_and_select(&items, URL_FEATURES, &select);
    let (summary, summary_scores) = score_and_select(
        &items,
        SUMMARY_FEATURES,
        &SelectOptions::default().concatenating_ties(),
    );

    let summary = [SectionKey::Summary, SectionKey::Objective]
        .iter()
        .map(|key| sections.text(key))
        .find(|text| !text.is_empty())
        .unwrap_or(summary);

    let profile = sanitize(ResumeProfile {
        name,
        email,
        phone,
        location,
        url,
        summary,
    });

    let scores = ProfileScores {
        name: name_scores,
        email: email_scores,
        phone: phone_scores,
        location: location_scores,
        url: url_scores,
        summary: summary_scores,
    };

    (profile, scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{group_lines_into_sections, Line, SectionOptions};

    fn sections(lines: &[(&str, bool)]) -> SectionMap {
        let lines: Vec<Line> = lines
            .iter()
            .enumerate()
            .map(|(i, (text, bold))| {
                let item = TextItem::new(*text, 50.0, 700.0 - i as f32 * 14.0);
                let item = if *bold { item.with_font("Helvetica-Bold") } else { item };
                Line::from_items(vec![item])
            })
            .collect();
        group_lines_into_sections(&lines, &SectionOptions::default())
    }

    #[test]
    fn test_full_profile() {
        let sections = sections(&[
            ("Jane Doe", true),
            ("jane.doe@example.com", false),
            ("(512) 555-0147", false),
            ("Austin, TX", false),
            ("github.com/janedoe", false),
            ("Backend engineer who enjoys building reliable systems", false),
        ]);
        let (profile, scores) = extract_profile(&sections);

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.email, "jane.doe@example.com");
        assert_eq!(profile.phone, "51255 50147");
        assert_eq!(profile.location, "Austin, TX");
        assert_eq!(profile.url, "https://github.com/janedoe");
        assert_eq!(
            profile.summary,
            "Backend engineer who enjoys building reliable systems"
        );
        assert_eq!(scores.name.len(), 6);
    }

    #[test]
    fn test_email_only_leaves_name_empty() {
        let sections = sections(&[("john.doe@example.com", false)]);
        let (profile, _) = extract_profile(&sections);

        assert_eq!(profile.email, "john.doe@example.com");
        assert_eq!(profile.name, "");
        assert_eq!(profile.phone, "");
        assert_eq!(profile.url, "");
    }

    #[test]
    fn test_summary_section_wins() {
        let sections = sections(&[
            ("Jane Doe", true),
            ("Backend engineer who enjoys building reliable systems", false),
            ("Summary", true),
            ("Seasoned engineer.", false),
        ]);
        let (profile, _) = extract_profile(&sections);
        assert_eq!(profile.summary, "Seasoned engineer.");
    }

    #[test]
    fn test_objective_section_without_summary() {
        let sections = sections(&[
            ("Jane Doe", true),
            ("Backend engineer who enjoys building reliable systems", false),
            ("Objective", true),
            ("Grow into a platform role.", false),
        ]);
        let (profile, _) = extract_profile(&sections);
        assert_eq!(profile.summary, "Grow into a platform role.");
    }

    #[test]
    fn test_email_prefix_cleanup() {
        let sections = sections(&[("#jane@example.com", false)]);
        let (profile, _) = extract_profile(&sections);
        assert_eq!(profile.email, "jane@example.com");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("+91 98765-43210"), "+91 98765 43210");
        assert_eq!(format_phone("555-0147"), "555-0147");
        assert_eq!(format_phone("(512) 555-0147"), "51255 50147");
    }

    #[test]
    fn test_format_url() {
        assert_eq!(format_url("linkedin.com/in/jane"), "https://linkedin.com/in/jane");
        assert_eq!(format_url("https://jane.dev/"), "https://jane.dev/");
        assert_eq!(format_url("|www.jane.dev"), "www.jane.dev");
    }
}
