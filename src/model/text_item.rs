//! Positioned text fragments as produced by a PDF text layer.

use serde::{Deserialize, Serialize};

/// One positioned run of text from a PDF page.
///
/// Coordinates follow PDF user space: `x` grows to the right and `y` grows
/// upward, so the first line of a page carries the largest `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    /// The text content
    pub text: String,
    /// X position (left edge)
    pub x: f32,
    /// Y position (baseline)
    pub y: f32,
    /// Width of the run
    #[serde(default)]
    pub width: f32,
    /// Height of the run (roughly the font size)
    #[serde(default)]
    pub height: f32,
    /// Font name (e.g., "Helvetica-Bold")
    #[serde(default)]
    pub font_name: String,
    /// Zero-based page index
    #[serde(default)]
    pub page: u32,
}

impl TextItem {
    /// Create a new text item with no size or font information.
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width: 0.0,
            height: 0.0,
            font_name: String::new(),
            page: 0,
        }
    }

    /// Set width and height.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the font name.
    pub fn with_font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = font_name.into();
        self
    }

    /// Set the page index.
    pub fn on_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Right edge of the run.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Whether the font appears to be bold.
    pub fn is_bold(&self) -> bool {
        let font = self.font_name.to_lowercase();
        font.contains("bold") || font.contains("black") || font.contains("heavy")
    }

    /// Whether the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
