//! Splitting a section into subsections (one job, one school, ...).

use std::collections::HashMap;

use crate::parser::{LayoutOptions, Line};

use super::bullets::{has_bullet_marker, is_bullet_glyph, is_continuation};

/// Split lines at every index flagged as a subsection start.
fn split_at_starts(lines: &[Line], starts: &[bool]) -> Vec<Vec<Line>> {
    let mut subsections: Vec<Vec<Line>> = Vec::new();
    let mut current: Vec<Line> = Vec::new();

    for (line, &start) in lines.iter().zip(starts) {
        if start && !current.is_empty() {
            subsections.push(std::mem::take(&mut current));
        }
        current.push(line.clone());
    }

    if !current.is_empty() {
        subsections.push(current);
    }
    subsections
}

/// Vertical distance to the previous line, rounded to whole points.
///
/// `None` across a page break.
fn rounded_gap(prev: &Line, line: &Line) -> Option<i32> {
    (prev.page() == line.page()).then(|| (prev.y() - line.y()).round() as i32)
}

/// The most common gap; the first gap to reach the top count wins ties.
fn typical_line_gap(lines: &[Line]) -> Option<i32> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    let mut best: Option<(i32, usize)> = None;

    for pair in lines.windows(2) {
        let Some(gap) = rounded_gap(&pair[0], &pair[1]) else {
            continue;
        };
        let count = counts.entry(gap).or_insert(0);
        *count += 1;
        if best.map_or(true, |(_, max)| *count > max) {
            best = Some((gap, *count));
        }
    }

    best.map(|(gap, _)| gap)
}

fn starts_by_line_gap(lines: &[Line], layout: &LayoutOptions) -> Vec<bool> {
    let Some(typical) = typical_line_gap(lines) else {
        return vec![false; lines.len()];
    };
    let threshold = typical as f32 * layout.subsection_gap_ratio;

    std::iter::once(false)
        .chain(lines.windows(2).map(|pair| {
            rounded_gap(&pair[0], &pair[1]).is_some_and(|gap| gap as f32 > threshold)
        }))
        .collect()
}

fn starts_by_bold(lines: &[Line]) -> Vec<bool> {
    std::iter::once(false)
        .chain(lines.windows(2).map(|pair| {
            let prev_bold = pair[0].first().is_some_and(|i| i.is_bold());
            pair[1]
                .first()
                .is_some_and(|i| !prev_bold && i.is_bold() && !is_bullet_glyph(&i.text))
        }))
        .collect()
}

/// A plain line that follows a run of bullets starts a new entry.
fn starts_after_bullets(lines: &[Line]) -> Vec<bool> {
    let mut last_bullet: Option<&Line> = None;

    lines
        .iter()
        .map(|line| {
            if has_bullet_marker(line) {
                last_bullet = Some(line);
                return false;
            }
            match last_bullet {
                Some(bullet) if is_continuation(line, bullet) => false,
                Some(_) => {
                    last_bullet = None;
                    true
                }
                None => false,
            }
        })
        .collect()
}

/// Divide a section's lines into subsections.
///
/// A gap wider than the typical line gap times the configured ratio starts a
/// subsection. When that finds nothing, a non-bold to bold transition is
/// tried, and then an unindented plain line following bullet points.
pub fn divide_section_into_subsections(lines: &[Line], layout: &LayoutOptions) -> Vec<Vec<Line>> {
    let subsections = split_at_starts(lines, &starts_by_line_gap(lines, layout));
    if subsections.len() > 1 {
        return subsections;
    }

    let subsections = split_at_starts(lines, &starts_by_bold(lines));
    if subsections.len() > 1 {
        log::debug!("Split {} lines into subsections by bold text", lines.len());
        return subsections;
    }

    split_at_starts(lines, &starts_after_bullets(lines))
}
