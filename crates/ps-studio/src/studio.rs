//! Studio — one palette-editing session.
//!
//! The session owns the palette, the currently selected color, and the
//! vision mode used for simulated views. Everything the annotating views
//! need (recommendations, contrast tables, simulations, preview) is derived
//! on demand from that state, so nothing can go stale.
//!
//! Invalid color input never clobbers state: [`Studio::select_input`]
//! hands the parse error back and keeps the previous selection.

use ps_color::{Adjustment, Color, ColorError, adjust, parse};
use ps_theory::contrast::{
    AA_NORMAL, BackgroundCheck, ContrastResult, check_backgrounds, contrast_ratio, palette_pairs,
};
use ps_theory::vision::is_visibly_different;
use ps_theory::{Recommendation, VisionKind, recommend, simulate};
use serde::Serialize;
use tracing::debug;

use crate::config::StudioConfig;
use crate::error::{Result, StudioError};
use crate::export::PaletteDocument;
use crate::palette::{Palette, PaletteEntry};
use crate::preview::PreviewScheme;

/// Contrast between two palette entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairContrast {
    pub first: String,
    pub second: String,
    #[serde(flatten)]
    pub result: ContrastResult,
}

/// How one palette entry looks under the session's vision mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulatedEntry {
    pub id: String,
    pub name: Option<String>,
    pub original: Color,
    pub simulated: Color,
    pub different: bool,
}

/// Palette-wide accessibility summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    /// Entries reaching AA for normal text against white.
    pub aa_compliant: usize,
}

/// A palette-editing session.
#[derive(Debug, Clone)]
pub struct Studio {
    config: StudioConfig,
    palette: Palette,
    selected: Color,
    vision: VisionKind,
}

impl Studio {
    /// Start a session from config: starter or empty palette, default
    /// selection and vision mode.
    #[must_use]
    pub fn new(config: StudioConfig) -> Self {
        let palette = if config.starter_palette {
            Palette::starter()
        } else {
            Palette::new()
        };
        Self::with_palette(config, palette)
    }

    /// Start a session on an existing palette.
    #[must_use]
    pub fn with_palette(config: StudioConfig, palette: Palette) -> Self {
        let selected = config.default_color;
        let vision = config.vision;
        Self {
            config,
            palette,
            selected,
            vision,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StudioConfig {
        &self.config
    }

    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Give up the session and keep its palette.
    #[must_use]
    pub fn into_palette(self) -> Palette {
        self.palette
    }

    #[must_use]
    pub const fn selected(&self) -> Color {
        self.selected
    }

    #[must_use]
    pub const fn vision(&self) -> VisionKind {
        self.vision
    }

    pub const fn set_vision(&mut self, kind: VisionKind) {
        self.vision = kind;
    }

    // ── Selection ───────────────────────────────────────────────────────

    /// Select an already-validated color.
    pub const fn select(&mut self, color: Color) {
        self.selected = color;
    }

    /// Parse user input and select it.
    ///
    /// # Errors
    ///
    /// Returns the parse error unchanged; the previous selection stays.
    pub fn select_input(&mut self, input: &str) -> std::result::Result<Color, ColorError> {
        match parse(input) {
            Ok(color) => {
                self.selected = color;
                Ok(color)
            }
            Err(err) => {
                debug!("Rejected color input {input:?}, keeping {}", self.selected);
                Err(err)
            }
        }
    }

    /// Apply a quick adjustment to the selection and return the new color.
    pub fn adjust_selected(&mut self, op: Adjustment, amount: f64) -> Color {
        self.selected = adjust(self.selected, op, amount);
        self.selected
    }

    /// Select the color of a palette entry.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::UnknownEntry`](crate::StudioError::UnknownEntry)
    /// for an unknown id.
    pub fn select_entry(&mut self, id: &str) -> Result<Color> {
        let color = self
            .palette
            .get(id)
            .map(|e| e.color)
            .ok_or_else(|| StudioError::UnknownEntry { id: id.to_owned() })?;
        self.selected = color;
        Ok(color)
    }

    // ── Palette edits ───────────────────────────────────────────────────

    /// Add the selected color as `Color N`, N being the new length.
    pub fn add_selected(&mut self) -> &PaletteEntry {
        let name = format!("Color {}", self.palette.len() + 1);
        self.palette.add(self.selected, Some(name))
    }

    /// Add a suggested color as `Recommended N`, N being the new length.
    pub fn add_recommendation(&mut self, color: Color) -> &PaletteEntry {
        let name = format!("Recommended {}", self.palette.len() + 1);
        self.palette.add(color, Some(name))
    }

    /// Add a color with an explicit name.
    pub fn add_color(&mut self, color: Color, name: Option<String>) -> &PaletteEntry {
        self.palette.add(color, name)
    }

    /// Remove a palette entry.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::UnknownEntry`](crate::StudioError::UnknownEntry)
    /// for an unknown id.
    pub fn remove(&mut self, id: &str) -> Result<PaletteEntry> {
        self.palette.remove(id)
    }

    /// Rename a palette entry; an empty name clears it.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::UnknownEntry`](crate::StudioError::UnknownEntry)
    /// for an unknown id.
    pub fn rename(&mut self, id: &str, name: &str) -> Result<()> {
        self.palette.rename(id, name)
    }

    /// Recolor a palette entry, renaming it when `name` is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::UnknownEntry`](crate::StudioError::UnknownEntry)
    /// for an unknown id.
    pub fn update(&mut self, id: &str, color: Color, name: Option<&str>) -> Result<()> {
        self.palette.update(id, color, name)
    }

    // ── Derived views ───────────────────────────────────────────────────

    /// Harmony suggestions for the selection that are not in the palette yet.
    #[must_use]
    pub fn recommendations(&self) -> Vec<Recommendation> {
        let recs = recommend(self.selected, &self.palette.colors());
        debug!("Generated {} recommendations for {}", recs.len(), self.selected);
        recs
    }

    /// The selection against the common reference backgrounds.
    #[must_use]
    pub fn background_checks(&self) -> Vec<BackgroundCheck> {
        check_backgrounds(self.selected)
    }

    /// Contrast for every pair of palette entries.
    #[must_use]
    pub fn combinations(&self) -> Vec<PairContrast> {
        let entries = self.palette.entries();
        palette_pairs(&self.palette.colors())
            .into_iter()
            .map(|(i, j, result)| PairContrast {
                first: entries[i].id.clone(),
                second: entries[j].id.clone(),
                result,
            })
            .collect()
    }

    /// Every palette entry under the session's vision mode.
    #[must_use]
    pub fn simulated(&self) -> Vec<SimulatedEntry> {
        self.palette
            .iter()
            .map(|e| SimulatedEntry {
                id: e.id.clone(),
                name: e.name.clone(),
                original: e.color,
                simulated: simulate(e.color, self.vision),
                different: is_visibly_different(e.color, self.vision),
            })
            .collect()
    }

    /// Entry count and how many reach AA against white.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let aa_compliant = self
            .palette
            .iter()
            .filter(|e| contrast_ratio(e.color, Color::WHITE) >= AA_NORMAL)
            .count();
        Summary {
            total: self.palette.len(),
            aa_compliant,
        }
    }

    /// Preview roles from the simulated palette.
    #[must_use]
    pub fn preview(&self) -> PreviewScheme {
        let colors: Vec<Color> = self
            .palette
            .iter()
            .map(|e| simulate(e.color, self.vision))
            .collect();
        PreviewScheme::from_colors(&colors)
    }

    /// Snapshot the palette under the configured export name.
    #[must_use]
    pub fn export(&self) -> PaletteDocument {
        PaletteDocument::new(self.config.export_name.clone(), &self.palette)
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn c(hex: &str) -> Color {
        parse(hex).unwrap()
    }

    #[test]
    fn new_session_uses_config() {
        let studio = Studio::default();
        assert_eq!(studio.selected(), c("#6366f1"));
        assert_eq!(studio.palette().len(), 3);
        assert_eq!(studio.vision(), VisionKind::None);

        let config = StudioConfig {
            starter_palette: false,
            default_color: c("#ff0000"),
            vision: VisionKind::Protanopia,
            ..StudioConfig::default()
        };
        let studio = Studio::new(config);
        assert!(studio.palette().is_empty());
        assert_eq!(studio.selected(), c("#ff0000"));
        assert_eq!(studio.vision(), VisionKind::Protanopia);
    }

    #[test]
    fn invalid_input_keeps_selection() {
        let mut studio = Studio::default();
        let err = studio.select_input("not-a-color").unwrap_err();
        assert_eq!(err, ColorError::InvalidColorFormat("not-a-color".to_owned()));
        assert_eq!(studio.selected(), c("#6366f1"));

        assert_eq!(studio.select_input(" Tomato ").unwrap(), c("#ff6347"));
        assert_eq!(studio.selected(), c("#ff6347"));
    }

    #[test]
    fn adjust_selected_updates_selection() {
        let mut studio = Studio::default();
        let darker = studio.adjust_selected(Adjustment::Darken, 1.0);
        assert_eq!(studio.selected(), darker);
        assert_ne!(darker, c("#6366f1"));
        assert_eq!(studio.adjust_selected(Adjustment::Darken, 0.0), darker);
    }

    #[test]
    fn add_names_follow_length() {
        let mut studio = Studio::default();
        studio.select_input("#123456").unwrap();
        let added = studio.add_selected().clone();
        assert_eq!(added.name.as_deref(), Some("Color 4"));
        assert_eq!(added.color, c("#123456"));

        let rec = studio.recommendations()[0].color;
        let added = studio.add_recommendation(rec).clone();
        assert_eq!(added.name.as_deref(), Some("Recommended 5"));
        assert_eq!(studio.palette().len(), 5);
    }

    #[test]
    fn recommendations_exclude_palette_colors() {
        let mut studio = Studio::default();
        let first = studio.recommendations()[0];
        assert_eq!(first.label, "Complementary");
        studio.add_recommendation(first.color);
        let recs = studio.recommendations();
        assert_eq!(recs.len(), 8);
        assert!(recs.iter().all(|r| r.color != first.color));
    }

    #[test]
    fn select_entry_and_unknown_ids() {
        let mut studio = Studio::default();
        assert_eq!(studio.select_entry("3").unwrap(), c("#06b6d4"));
        assert_eq!(studio.selected(), c("#06b6d4"));
        assert!(matches!(studio.select_entry("9"), Err(StudioError::UnknownEntry { .. })));
        assert!(studio.remove("9").is_err());
        assert!(studio.rename("9", "x").is_err());
        assert_eq!(studio.selected(), c("#06b6d4"));
    }

    #[test]
    fn remove_and_rename() {
        let mut studio = Studio::default();
        let removed = studio.remove("2").unwrap();
        assert_eq!(removed.name.as_deref(), Some("Secondary"));
        studio.rename("1", "Brand").unwrap();
        let names: Vec<_> = studio.palette().iter().map(|e| e.name.clone()).collect();
        assert_eq!(names, [Some("Brand".to_owned()), Some("Accent".to_owned())]);
    }

    #[test]
    fn update_recolors_and_keeps_name_on_empty() {
        let mut studio = Studio::default();
        studio.update("1", Color::BLACK, Some("")).unwrap();
        studio.update("2", Color::WHITE, Some("Paper")).unwrap();

        let first = studio.palette().get("1").unwrap();
        assert_eq!(first.color, Color::BLACK);
        assert_eq!(first.name.as_deref(), Some("Primary"));
        let second = studio.palette().get("2").unwrap();
        assert_eq!(second.color, Color::WHITE);
        assert_eq!(second.name.as_deref(), Some("Paper"));

        assert!(studio.update("42", Color::BLACK, None).is_err());
        assert_eq!(studio.palette().len(), 3);
    }

    #[test]
    fn combinations_reference_entry_ids() {
        let studio = Studio::default();
        let pairs: Vec<_> = studio
            .combinations()
            .into_iter()
            .map(|p| (p.first, p.second))
            .collect();
        let expected = [("1", "2"), ("1", "3"), ("2", "3")].map(|(a, b)| (a.to_owned(), b.to_owned()));
        assert_eq!(pairs, expected);
    }

    #[test]
    fn background_checks_follow_selection() {
        let mut studio = Studio::default();
        studio.select(Color::BLACK);
        let checks = studio.background_checks();
        assert_eq!(checks.len(), 4);
        assert!((checks[0].result.ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn simulated_view_marks_changes() {
        let mut studio = Studio::with_palette(StudioConfig::default(), Palette::new());
        studio.add_color(c("#ff0000"), None);
        studio.add_color(Color::WHITE, None);

        let normal = studio.simulated();
        assert!(normal.iter().all(|e| !e.different && e.original == e.simulated));

        studio.set_vision(VisionKind::Protanopia);
        let sim = studio.simulated();
        assert_eq!(sim[0].simulated.to_hex(), "#918e00");
        assert!(sim[0].different);
        assert!(!sim[1].different);
    }

    #[test]
    fn summary_counts_aa_against_white() {
        let mut studio = Studio::with_palette(StudioConfig::default(), Palette::new());
        assert_eq!(studio.summary(), Summary { total: 0, aa_compliant: 0 });
        studio.add_color(Color::BLACK, None);
        studio.add_color(c("#767676"), None);
        studio.add_color(c("#777777"), None);
        studio.add_color(Color::WHITE, None);
        assert_eq!(studio.summary(), Summary { total: 4, aa_compliant: 2 });
    }

    #[test]
    fn preview_uses_simulated_colors() {
        let mut studio = Studio::default();
        studio.set_vision(VisionKind::Tritanopia);
        let scheme = studio.preview();
        assert_eq!(scheme.primary.fill, simulate(c("#6366f1"), VisionKind::Tritanopia));

        let empty = Studio::with_palette(StudioConfig::default(), Palette::new());
        assert_eq!(empty.preview().primary.fill, c("#6366f1"));
    }

    #[test]
    fn export_uses_configured_name() {
        let config = StudioConfig {
            export_name: "Brand Kit".to_owned(),
            ..StudioConfig::default()
        };
        let studio = Studio::new(config);
        let doc = studio.export();
        assert_eq!(doc.name, "Brand Kit");
        assert_eq!(doc.colors.len(), 3);
        assert_eq!(doc.into_palette(), studio.into_palette());
    }
}
