//! Layout parsing: text items to lines to sections.

mod layout;
mod normalize;
mod options;
mod sections;

pub use layout::{group_text_items_into_lines, merge_adjacent_items, Line};
pub use normalize::{normalize_text, normalize_text_items, NormalizeOptions};
pub use options::{LayoutOptions, ParseOptions, SectionOptions};
pub use sections::{group_lines_into_sections, Section, SectionKey, SectionMap};
