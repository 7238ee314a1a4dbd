//! Feature predicates shared by several extractors.

use std::sync::LazyLock;

use regex::Regex;

use super::Feature;
use crate::model::TextItem;

pub fn is_bold(item: &TextItem) -> bool {
    item.is_bold()
}

pub fn has_letter(item: &TextItem) -> bool {
    item.text.chars().any(|c| c.is_alphabetic())
}

pub fn has_number(item: &TextItem) -> bool {
    item.text.chars().any(|c| c.is_ascii_digit())
}

pub fn has_comma(item: &TextItem) -> bool {
    item.text.contains(',')
}

/// Letters present and all of them uppercase.
pub fn has_letter_and_is_all_uppercase(item: &TextItem) -> bool {
    has_letter(item) && item.text.to_uppercase() == item.text
}

pub fn has_only_letters_spaces_ampersands(item: &TextItem) -> bool {
    !item.text.trim().is_empty()
        && item
            .text
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '&')
}

/// Words of the item, split on whitespace.
pub fn word_count(item: &TextItem) -> usize {
    item.text.split_whitespace().count()
}

pub fn has_four_or_more_words(item: &TextItem) -> bool {
    word_count(item) >= 4
}

pub fn has_more_than_five_words(item: &TextItem) -> bool {
    word_count(item) > 5
}

/// Words that contain no digits.
pub fn words_without_numbers(item: &TextItem) -> Vec<&str> {
    item.text
        .split_whitespace()
        .filter(|w| !w.chars().any(|c| c.is_ascii_digit()))
        .collect()
}

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:19|20)\d{2}").unwrap());

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SEASONS: [&str; 4] = ["Summer", "Fall", "Spring", "Winter"];

pub fn has_year(item: &TextItem) -> bool {
    YEAR.is_match(&item.text)
}

/// Full month name or its first four letters ("Sept", "June", "Janu").
pub fn has_month(item: &TextItem) -> bool {
    MONTHS.iter().any(|month| {
        let short: String = month.chars().take(4).collect();
        item.text.contains(month) || item.text.contains(short.as_str())
    })
}

pub fn has_season(item: &TextItem) -> bool {
    SEASONS.iter().any(|season| item.text.contains(season))
}

pub fn has_present(item: &TextItem) -> bool {
    item.text.contains("Present")
}

/// Features of a date string such as "Jun 2019 - Present".
pub const DATE_FEATURES: &[Feature<'static>] = &[
    Feature::test(has_year, 1),
    Feature::test(has_month, 1),
    Feature::test(has_season, 1),
    Feature::test(has_present, 1),
    Feature::test(has_comma, -1),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{score_and_select, SelectOptions};

    fn item(text: &str) -> TextItem {
        TextItem::new(text, 0.0, 0.0)
    }

    #[test]
    fn test_case_checks() {
        assert!(has_letter_and_is_all_uppercase(&item("JANE DOE")));
        assert!(!has_letter_and_is_all_uppercase(&item("Jane Doe")));
        assert!(!has_letter_and_is_all_uppercase(&item("2020")));
        assert!(has_only_letters_spaces_ampersands(&item("Research & Teaching")));
        assert!(!has_only_letters_spaces_ampersands(&item("Python, Java")));
    }

    #[test]
    fn test_month_and_year() {
        assert!(has_month(&item("Sept 2021")));
        assert!(has_month(&item("March")));
        assert!(!has_month(&item("Mar 2021")));
        assert!(has_year(&item("2019 - 2023")));
        assert!(!has_year(&item("Room 1842")));
    }

    #[test]
    fn test_date_features_pick_date() {
        let items = vec![
            item("Acme Corp"),
            item("Software Engineer"),
            item("June 2019 - Present"),
            item("Austin, TX 2018"),
        ];
        let (date, _) = score_and_select(&items, DATE_FEATURES, &SelectOptions::default());
        assert_eq!(date, "June 2019 - Present");
    }

    #[test]
    fn test_words_without_numbers() {
        let it = item("Built 3 services in 2020 with Rust");
        let words = words_without_numbers(&it);
        assert_eq!(words, vec!["Built", "services", "in", "with", "Rust"]);
    }
}
