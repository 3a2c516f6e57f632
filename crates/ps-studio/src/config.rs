//! Session configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes.

use std::fs;
use std::path::Path;

use ps_color::Color;
use ps_theory::VisionKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Name written into exported palette documents by default.
pub const DEFAULT_EXPORT_NAME: &str = "Color Palette";

/// Selected color a session starts with.
pub const DEFAULT_COLOR: Color = Color::from_u32(0x63_66_f1);

/// Settings for a palette session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudioConfig {
    /// `name` field of exported documents.
    pub export_name: String,

    /// Initially selected color.
    pub default_color: Color,

    /// Start with Primary/Secondary/Accent instead of an empty palette.
    pub starter_palette: bool,

    /// Vision mode applied to simulated views.
    pub vision: VisionKind,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            export_name: DEFAULT_EXPORT_NAME.to_owned(),
            default_color: DEFAULT_COLOR,
            starter_palette: true,
            vision: VisionKind::None,
        }
    }
}

impl StudioConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Json`](crate::StudioError::Json) if the text is
    /// not valid JSON or a field has the wrong type (including a color that
    /// does not parse).
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a config file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a JSON error as
    /// for [`from_json`](Self::from_json).
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
