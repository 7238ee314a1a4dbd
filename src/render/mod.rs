//! Rendering module for converting resumes to output formats.

mod json;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use text::{sections_to_text, to_text};
