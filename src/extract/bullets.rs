//! Bullet point detection and description extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::Line;
use crate::scoring::features::words_without_numbers;

/// Glyphs that mark a bullet anywhere in a line.
pub const BULLET_POINTS: &[char] = &[
    '⋅', '∙', '🞄', '•', '⦁', '⚫', '●', '⬤', '⚬', '○', '■', '□', '▪', '▸', '►', '◆', '◇', '➤',
    '✓', '✗',
];

/// A line indented at least this far (in points) past the bullet line
/// continues that bullet.
pub const CONTINUATION_INDENT: f32 = 2.0;

/// Minimum words (numbers excluded) for a lone line to read as a
/// description when no bullets are present.
const MIN_DESCRIPTION_WORDS: usize = 8;

static LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*–]\s+").unwrap());

/// Whether the text consists of a single bullet glyph.
pub fn is_bullet_glyph(text: &str) -> bool {
    let mut chars = text.trim().chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if BULLET_POINTS.contains(&c))
}

/// Whether the line carries a bullet glyph or starts with a dash or asterisk
/// marker.
pub fn has_bullet_marker(line: &Line) -> bool {
    let text = line.text();
    text.contains(BULLET_POINTS) || LEADING_MARKER.is_match(&text)
}

/// Whether `line` wraps the text of `bullet_line`.
pub fn is_continuation(line: &Line, bullet_line: &Line) -> bool {
    !has_bullet_marker(line) && line.x() > bullet_line.x() + CONTINUATION_INDENT
}

/// Index of the first description line.
///
/// The first line with a bullet marker; failing that, the first line made of
/// a single item with at least eight words that are not numbers.
pub fn get_descriptions_line_idx(lines: &[Line]) -> Option<usize> {
    lines.iter().position(has_bullet_marker).or_else(|| {
        lines.iter().position(|line| {
            line.len() == 1
                && line
                    .first()
                    .is_some_and(|item| words_without_numbers(item).len() >= MIN_DESCRIPTION_WORDS)
        })
    })
}

/// Turn description lines into bullet point strings.
///
/// Without any marker every line is one description. Otherwise a marker
/// starts a new bullet, glyphs in the middle of a line split it, and
/// unmarked lines are appended to the bullet before them.
pub fn get_bullet_points_from_lines(lines: &[Line]) -> Vec<String> {
    if !lines.iter().any(has_bullet_marker) {
        return lines
            .iter()
            .map(Line::text)
            .filter(|t| !t.is_empty())
            .collect();
    }

    let mut bullets: Vec<String> = Vec::new();

    for line in lines {
        let text = line.text();
        let (rest, starts_bullet) = match LEADING_MARKER.find(&text) {
            Some(m) => (&text[m.end()..], true),
            None => (text.as_str(), false),
        };

        for (i, segment) in rest.split(BULLET_POINTS).enumerate() {
            let segment = segment.trim();
            // Text before any marker on an unmarked line continues the last bullet
            if i == 0 && !starts_bullet {
                if let Some(last) = bullets.last_mut() {
                    if !segment.is_empty() {
                        last.push(' ');
                        last.push_str(segment);
                    }
                    continue;
                }
                if segment.is_empty() {
                    continue;
                }
            }
            bullets.push(segment.to_string());
        }
    }

    bullets.retain(|b| !b.is_empty());
    bullets
}
