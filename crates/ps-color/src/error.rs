// SPDX-License-Identifier: MIT
//
// Error type for color parsing. There is exactly one failure mode: the
// input does not match any recognized color syntax.

use thiserror::Error;

/// Error returned when a string cannot be read as a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input matched none of the hex, `rgb()`, `hsl()` or named forms.
    /// Carries the original input, untrimmed.
    #[error("invalid color format: '{0}'")]
    InvalidColorFormat(String),
}

/// Result alias for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
