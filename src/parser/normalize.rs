//! Text normalization for raw PDF text items.
//!
//! PDF text layers leak typographic artifacts into extracted text:
//! ligature glyphs, decomposed accents, replacement characters and
//! non-breaking spaces. These break the keyword and regex matching done by
//! the extractors, so they are repaired before grouping.

use unicode_normalization::UnicodeNormalization;

use crate::model::TextItem;

/// Options for text normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Standardize bullet characters (●, ○, ■ → •)
    pub standardize_bullets: bool,

    /// Remove Private Use Area (PUA) characters
    pub remove_pua: bool,

    /// Remove Unicode replacement character (U+FFFD)
    pub remove_replacement_char: bool,

    /// Turn non-breaking and other exotic spaces into plain spaces
    pub normalize_spaces: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            standardize_bullets: true,
            // Symbol fonts map bullets into the PUA
            remove_pua: false,
            remove_replacement_char: true,
            normalize_spaces: true,
        }
    }
}

const LIGATURES: [(char, &str); 7] = [
    ('\u{FB00}', "ff"),
    ('\u{FB01}', "fi"),
    ('\u{FB02}', "fl"),
    ('\u{FB03}', "ffi"),
    ('\u{FB04}', "ffl"),
    ('\u{FB05}', "st"),
    ('\u{FB06}', "st"),
];

const BULLET_VARIANTS: [char; 10] = ['●', '○', '■', '□', '◆', '◇', '▪', '▫', '►', '▻'];

fn is_pua(c: char) -> bool {
    let code = c as u32;
    (0xE000..=0xF8FF).contains(&code)
        || (0xF0000..=0xFFFFD).contains(&code)
        || (0x100000..=0x10FFFD).contains(&code)
}

fn is_exotic_space(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

/// Normalize a single string.
pub fn normalize_text(text: &str, options: &NormalizeOptions) -> String {
    let mut result: String = if options.normalize_unicode {
        text.nfc().collect()
    } else {
        text.to_string()
    };

    if options.fix_ligatures && result.chars().any(|c| ('\u{FB00}'..='\u{FB06}').contains(&c)) {
        for (ligature, replacement) in LIGATURES {
            result = result.replace(ligature, replacement);
        }
    }

    result
        .chars()
        .filter(|c| !(options.remove_replacement_char && *c == '\u{FFFD}'))
        .filter(|c| !(options.remove_pua && is_pua(*c)))
        .map(|c| {
            if options.standardize_bullets && BULLET_VARIANTS.contains(&c) {
                '•'
            } else if options.normalize_spaces && is_exotic_space(c) {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Return normalized copies of the given text items.
///
/// Geometry and font data are kept; only the text changes. No item is
/// dropped, even if its text becomes empty.
pub fn normalize_text_items(items: &[TextItem], options: &NormalizeOptions) -> Vec<TextItem> {
    items
        .iter()
        .map(|item| TextItem {
            text: normalize_text(&item.text, options),
            ..item.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_normalization() {
        // "e" + combining acute accent → "é"
        let result = normalize_text("Rene\u{0301}", &NormalizeOptions::default());
        assert_eq!(result, "René");
    }

    #[test]
    fn test_ligature_fix() {
        let result = normalize_text("Certi\u{FB01}ed pro\u{FB01}cient", &NormalizeOptions::default());
        assert_eq!(result, "Certified proficient");
    }

    #[test]
    fn test_bullet_and_space_cleanup() {
        let result = normalize_text("●\u{00A0}Led team\u{FFFD}", &NormalizeOptions::default());
        assert_eq!(result, "• Led team");
    }

    #[test]
    fn test_pua_kept_by_default() {
        let options = NormalizeOptions::default();
        assert_eq!(normalize_text("\u{F0B7}", &options), "\u{F0B7}");

        let options = NormalizeOptions {
            remove_pua: true,
            ..Default::default()
        };
        assert_eq!(normalize_text("\u{F0B7}x", &options), "x");
    }

    #[test]
    fn test_items_keep_geometry() {
        let items = vec![TextItem::new("o\u{FB03}ce", 12.0, 340.0).with_font("Times-Bold")];
        let normalized = normalize_text_items(&items, &NormalizeOptions::default());

        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].text, "office");
        assert_eq!(normalized[0].x, 12.0);
        assert!(normalized[0].is_bold());
    }
}
