//! Error types for palette sessions and documents.

use ps_color::ColorError;
use thiserror::Error;

/// Everything that can go wrong above the color math.
#[derive(Debug, Error)]
pub enum StudioError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Invalid palette document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No palette entry with id '{id}'")]
    UnknownEntry { id: String },
}

/// Result type alias for studio operations.
pub type Result<T> = std::result::Result<T, StudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_errors_pass_through() {
        let err = StudioError::from(ColorError::InvalidColorFormat("nope".to_owned()));
        assert_eq!(err.to_string(), "invalid color format: 'nope'");
    }

    #[test]
    fn unknown_entry_names_the_id() {
        let err = StudioError::UnknownEntry { id: "42".to_owned() };
        assert_eq!(err.to_string(), "No palette entry with id '42'");
    }
}
