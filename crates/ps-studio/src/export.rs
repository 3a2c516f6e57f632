//! Palette documents: the JSON a palette is exported to and read back from.
//!
//! ```json
//! {
//!   "name": "Color Palette",
//!   "colors": [{ "id": "1", "hex": "#6366f1", "name": "Primary" }],
//!   "exportedAt": "2024-05-01T12:00:00Z"
//! }
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::palette::{Palette, PaletteEntry};

/// A palette snapshot with a name and an export timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteDocument {
    pub name: String,
    pub colors: Vec<PaletteEntry>,
    pub exported_at: DateTime<Utc>,
}

impl PaletteDocument {
    /// Snapshot `palette` now.
    #[must_use]
    pub fn new(name: impl Into<String>, palette: &Palette) -> Self {
        Self::at(name, palette, Utc::now())
    }

    /// Snapshot `palette` with an explicit timestamp.
    #[must_use]
    pub fn at(name: impl Into<String>, palette: &Palette, exported_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            colors: palette.entries().to_vec(),
            exported_at,
        }
    }

    /// Pretty-printed JSON, two-space indented.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Json`](crate::StudioError::Json) if
    /// serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document. Every `hex` goes through the color parser, so any
    /// accepted color form is read and normalized.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Json`](crate::StudioError::Json) on malformed
    /// JSON, missing fields, or an unparseable color.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an I/O or serialization error.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut json = self.to_json()?;
        json.push('\n');
        fs::write(path, json)?;
        debug!("Wrote {} colors to {}", self.colors.len(), path.display());
        Ok(())
    }

    /// Read a document from `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error, or a JSON error as for [`from_json`](Self::from_json).
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Turn the stored entries back into an editable palette.
    #[must_use]
    pub fn into_palette(self) -> Palette {
        Palette::from_entries(self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn json_layout() {
        let doc = PaletteDocument::at("Brand", &Palette::starter(), fixed_time());
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(value["name"], "Brand");
        assert_eq!(value["exportedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(value["colors"][0]["id"], "1");
        assert_eq!(value["colors"][0]["hex"], "#6366f1");
        assert_eq!(value["colors"][2]["name"], "Accent");
        assert_eq!(value["colors"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn to_json_is_pretty() {
        let doc = PaletteDocument::at("Empty", &Palette::new(), fixed_time());
        let json = doc.to_json().unwrap();
        assert!(json.contains("\n  \"name\": \"Empty\""), "{json}");
    }

    #[test]
    fn reads_documents_with_loose_colors() {
        let text = r##"{
            "name": "Imported",
            "colors": [
                { "id": "1712345678901", "hex": "#ABC", "name": "Sky" },
                { "id": "1712345678902", "hex": "rgb(255, 0, 0)" }
            ],
            "exportedAt": "2024-05-01T12:00:00.000Z"
        }"##;
        let doc = PaletteDocument::from_json(text).unwrap();
        assert_eq!(doc.exported_at, fixed_time());
        let palette = doc.into_palette();
        let hexes: Vec<_> = palette.iter().map(|e| e.color.to_hex()).collect();
        assert_eq!(hexes, ["#aabbcc", "#ff0000"]);
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(PaletteDocument::from_json("not json").is_err());
        assert!(PaletteDocument::from_json(r#"{"name": "x", "colors": []}"#).is_err());
        let bad_hex = r#"{"name": "x", "colors": [{"id": "1", "hex": "nope"}],
                          "exportedAt": "2024-05-01T12:00:00Z"}"#;
        assert!(PaletteDocument::from_json(bad_hex).is_err());
    }
}
