//! Line grouping for positioned text.
//!
//! Text items arrive in whatever order the PDF text layer emitted them.
//! This module sorts them into visual lines (top to bottom, left to right)
//! and optionally merges touching fragments into word runs.

use serde::Serialize;

use crate::model::TextItem;

use super::options::LayoutOptions;

/// A visual line: text items sharing a vertical band, ordered by X.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Line {
    items: Vec<TextItem>,
}

impl Line {
    /// Create a line from items, ordering them left to right.
    pub fn from_items(mut items: Vec<TextItem>) -> Self {
        items.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { items }
    }

    /// The items of this line, left to right.
    pub fn items(&self) -> &[TextItem] {
        &self.items
    }

    /// The leftmost item.
    pub fn first(&self) -> Option<&TextItem> {
        self.items.first()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the line has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Baseline of the leftmost item.
    pub fn y(&self) -> f32 {
        self.items.first().map(|i| i.y).unwrap_or(0.0)
    }

    /// Left edge of the line.
    pub fn x(&self) -> f32 {
        self.items.first().map(|i| i.x).unwrap_or(0.0)
    }

    /// Page the line sits on.
    pub fn page(&self) -> u32 {
        self.items.first().map(|i| i.page).unwrap_or(0)
    }

    /// Item texts joined by single spaces.
    pub fn text(&self) -> String {
        self.items
            .iter()
            .map(|i| i.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the line is predominantly bold.
    pub fn is_bold(&self) -> bool {
        let bold_chars: usize = self
            .items
            .iter()
            .filter(|i| i.is_bold())
            .map(|i| i.text.trim().len())
            .sum();
        let total_chars: usize = self.items.iter().map(|i| i.text.trim().len()).sum();
        total_chars > 0 && bold_chars as f32 / total_chars as f32 > 0.5
    }

    /// Check if the line has letters and all of them are uppercase.
    pub fn is_uppercase(&self) -> bool {
        let text = self.text();
        let mut letters = text.chars().filter(|c| c.is_alphabetic()).peekable();
        letters.peek().is_some() && letters.all(|c| c.is_uppercase())
    }
}

/// Group text items into visual lines.
///
/// Items are ordered by page, then top to bottom. An item joins the current
/// line when it is on the same page and its baseline is within the
/// tolerance of the line's first item; otherwise it starts a new line. Every
/// input item ends up in exactly one line.
pub fn group_text_items_into_lines(items: &[TextItem], layout: &LayoutOptions) -> Vec<Line> {
    if items.is_empty() {
        return vec![];
    }

    // Stable sort keeps emission order for items on the same baseline
    let mut items = items.to_vec();
    items.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then_with(|| b.y.total_cmp(&a.y))
    });

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<TextItem> = Vec::new();

    for item in items {
        let same_line = current.first().is_some_and(|anchor| {
            anchor.page == item.page
                && (anchor.y - item.y).abs() <= layout.y_tolerance(anchor.height, item.height)
        });

        if !same_line && !current.is_empty() {
            lines.push(Line::from_items(std::mem::take(&mut current)));
        }
        current.push(item);
    }

    if !current.is_empty() {
        lines.push(Line::from_items(current));
    }

    log::debug!("Grouped text items into {} lines", lines.len());
    lines
}

/// Estimate the typical character width from items that carry a width.
fn typical_char_width(lines: &[Line]) -> Option<f32> {
    let (width, chars) = lines
        .iter()
        .flat_map(|l| l.items())
        .filter(|i| i.width > 0.0 && !i.is_blank())
        .fold((0.0f32, 0usize), |(w, c), i| {
            (w + i.width, c + i.text.chars().count())
        });

    (chars > 0).then(|| width / chars as f32)
}

/// Merge touching text items within each line.
///
/// PDF text layers often split words into fragments and emit spaces as
/// separate items. Items whose horizontal gap is at most one typical
/// character width are joined (a space is inserted when the gap is wider
/// than a fifth of a character and neither side already has whitespace).
/// Whitespace-only items are dropped, and so are lines left empty.
pub fn merge_adjacent_items(lines: &[Line]) -> Vec<Line> {
    let char_width = typical_char_width(lines);

    lines
        .iter()
        .filter_map(|line| {
            let mut merged: Vec<TextItem> = Vec::new();

            for item in line.items().iter().filter(|i| !i.is_blank()) {
                let Some(prev) = merged.last_mut() else {
                    merged.push(item.clone());
                    continue;
                };

                let gap = item.x - prev.right();
                match char_width {
                    Some(cw) if prev.width > 0.0 && gap <= cw => {
                        let needs_space = gap > cw * 0.2
                            && !prev.text.ends_with(char::is_whitespace)
                            && !item.text.starts_with(char::is_whitespace);
                        if needs_space {
                            prev.text.push(' ');
                        }
                        prev.text.push_str(&item.text);
                        prev.width = item.right().max(prev.right()) - prev.x;
                        prev.height = prev.height.max(item.height);
                    }
                    _ => merged.push(item.clone()),
                }
            }

            (!merged.is_empty()).then(|| Line::from_items(merged))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str, x: f32, y: f32) -> TextItem {
        TextItem::new(text, x, y).with_size(text.len() as f32 * 5.0, 10.0)
    }

    #[test]
    fn test_groups_by_baseline_and_orders_by_x() {
        let items = vec![
            item("Doe", 80.0, 700.0),
            item("Summary", 50.0, 650.0),
            item("Jane", 50.0, 700.5),
        ];
        let lines = group_text_items_into_lines(&items, &LayoutOptions::default());

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "Jane Doe");
        assert_eq!(lines[1].text(), "Summary");
    }

    #[test]
    fn test_item_count_preserved() {
        let items: Vec<TextItem> = (0..25)
            .map(|i| item(&format!("w{i}"), (i % 5) as f32 * 40.0, 700.0 - (i / 5) as f32 * 14.0))
            .chain(std::iter::once(item(" ", 300.0, 700.0)))
            .collect();
        let lines = group_text_items_into_lines(&items, &LayoutOptions::default());

        let total: usize = lines.iter().map(Line::len).sum();
        assert_eq!(total, items.len());
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_pages_are_not_interleaved() {
        let items = vec![
            item("second page", 50.0, 700.0).on_page(1),
            item("first page bottom", 50.0, 100.0),
            item("first page top", 50.0, 700.0),
        ];
        let lines = group_text_items_into_lines(&items, &LayoutOptions::default());

        let texts: Vec<String> = lines.iter().map(Line::text).collect();
        assert_eq!(
            texts,
            vec!["first page top", "first page bottom", "second page"]
        );
    }

    #[test]
    fn test_zero_height_items_use_minimum_tolerance() {
        let items = vec![
            TextItem::new("a", 0.0, 100.0),
            TextItem::new("b", 10.0, 100.8),
            TextItem::new("c", 0.0, 95.0),
        ];
        let lines = group_text_items_into_lines(&items, &LayoutOptions::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "a b");
    }

    #[test]
    fn test_non_finite_coordinates_do_not_panic() {
        let items: Vec<TextItem> = (0..40)
            .map(|i| {
                let y = if i % 3 == 0 { f32::NAN } else { 700.0 - i as f32 * 14.0 };
                let x = if i % 5 == 0 { f32::NAN } else { 50.0 };
                item(&format!("Line {}", i), x, y)
            })
            .collect();

        let lines = group_text_items_into_lines(&items, &LayoutOptions::default());
        let total: usize = lines.iter().map(|l| l.len()).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(group_text_items_into_lines(&[], &LayoutOptions::default()).is_empty());
    }

    #[test]
    fn test_merge_adjacent_items() {
        // "Soft" + "ware" touch, a space item sits between words, the date is far away
        let items = vec![
            TextItem::new("Soft", 50.0, 700.0).with_size(20.0, 10.0),
            TextItem::new("ware", 70.0, 700.0).with_size(20.0, 10.0),
            TextItem::new(" ", 90.0, 700.0).with_size(5.0, 10.0),
            TextItem::new("Engineer", 95.0, 700.0).with_size(40.0, 10.0),
            TextItem::new("2020", 400.0, 700.0).with_size(20.0, 10.0),
        ];
        let lines = group_text_items_into_lines(&items, &LayoutOptions::default());
        let merged = merge_adjacent_items(&lines);

        assert_eq!(merged.len(), 1);
        let texts: Vec<&str> = merged[0].items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Software Engineer", "2020"]);
    }

    #[test]
    fn test_merge_drops_blank_lines() {
        let lines = vec![Line::from_items(vec![item("  ", 0.0, 10.0)])];
        assert!(merge_adjacent_items(&lines).is_empty());
    }

    #[test]
    fn test_line_style_checks() {
        let line = Line::from_items(vec![
            TextItem::new("EDUCATION", 50.0, 600.0).with_font("Arial-Bold")
        ]);
        assert!(line.is_bold());
        assert!(line.is_uppercase());

        let line = Line::from_items(vec![TextItem::new("Education", 50.0, 600.0)]);
        assert!(!line.is_bold());
        assert!(!line.is_uppercase());
    }
}
