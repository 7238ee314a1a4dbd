//! Parsing options and configuration.

/// Options for the resume parsing pipeline.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Normalize text (NFC, ligatures, stray control glyphs) before grouping
    pub normalize_text: bool,

    /// Merge touching text items within a line into word runs
    pub merge_adjacent_items: bool,

    /// Whether batch parsing may use parallel processing
    pub parallel: bool,

    /// Line and subsection geometry thresholds
    pub layout: LayoutOptions,

    /// Section heading detection
    pub sections: SectionOptions,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable text normalization.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_text = normalize;
        self
    }

    /// Keep text items exactly as the PDF text layer produced them.
    pub fn raw(mut self) -> Self {
        self.normalize_text = false;
        self.merge_adjacent_items = false;
        self
    }

    /// Enable or disable merging of adjacent text items.
    pub fn with_item_merging(mut self, merge: bool) -> Self {
        self.merge_adjacent_items = merge;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set layout thresholds.
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    /// Set section detection options.
    pub fn with_sections(mut self, sections: SectionOptions) -> Self {
        self.sections = sections;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_text: true,
            merge_adjacent_items: true,
            parallel: true,
            layout: LayoutOptions::default(),
            sections: SectionOptions::default(),
        }
    }
}

/// Geometry thresholds for grouping items into lines and lines into
/// subsections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Items within this fraction of the taller item's height share a line
    pub y_tolerance_ratio: f32,

    /// Lower bound of the line tolerance in points (for zero-height items)
    pub min_y_tolerance: f32,

    /// A line gap larger than the typical gap times this ratio starts a
    /// new subsection
    pub subsection_gap_ratio: f32,
}

impl LayoutOptions {
    /// Set the line tolerance ratio.
    pub fn with_y_tolerance_ratio(mut self, ratio: f32) -> Self {
        self.y_tolerance_ratio = ratio;
        self
    }

    /// Set the subsection gap ratio.
    pub fn with_subsection_gap_ratio(mut self, ratio: f32) -> Self {
        self.subsection_gap_ratio = ratio;
        self
    }

    /// Vertical tolerance for two items of the given heights.
    pub fn y_tolerance(&self, height_a: f32, height_b: f32) -> f32 {
        (height_a.max(height_b) * self.y_tolerance_ratio).max(self.min_y_tolerance)
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            y_tolerance_ratio: 0.3,
            min_y_tolerance: 1.0,
            subsection_gap_ratio: 1.4,
        }
    }
}

/// Options for detecting section headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOptions {
    /// Maximum words (ignoring "&") of a keyword heading
    pub max_heading_words: usize,

    /// Leading lines that never count as keyword-less headings, so a bold
    /// all-caps name is kept in the profile
    pub protected_leading_lines: usize,
}

impl SectionOptions {
    /// Set the maximum heading length in words.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    /// Set the number of protected leading lines.
    pub fn with_protected_leading_lines(mut self, lines: usize) -> Self {
        self.protected_leading_lines = lines;
        self
    }
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            max_heading_words: 3,
            protected_leading_lines: 2,
        }
    }
}
