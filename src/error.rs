//! Error types for resumex library.

use std::io;
use thiserror::Error;

/// Result type alias for resumex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while inferring resume structure.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input carried no text at all (image-only or unreadable PDF).
    #[error("No text items to parse: the document has no selectable text")]
    EmptyInput,

    /// Malformed JSON input or output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The known-skills list could not be loaded.
    #[error("Skill list unavailable: {0}")]
    SkillList(String),

    /// An update targeted an entry that does not exist.
    #[error("{kind} index {index} is out of range (resume has {len})")]
    IndexOutOfRange {
        /// Entity kind, e.g. "education"
        kind: &'static str,
        /// Requested index
        index: usize,
        /// Number of entries present
        len: usize,
    },

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyInput;
        assert_eq!(
            err.to_string(),
            "No text items to parse: the document has no selectable text"
        );

        let err = Error::IndexOutOfRange {
            kind: "education",
            index: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "education index 4 is out of range (resume has 2)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
