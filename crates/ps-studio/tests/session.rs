//! End-to-end session tests: config files, editing, and export round trips
//! through real files on disk.

use std::fs;

use pretty_assertions::assert_eq;
use ps_color::{Adjustment, Color};
use ps_studio::{PaletteDocument, Studio, StudioConfig, StudioError};
use ps_theory::{VisionKind, WcagLevel};

fn c(hex: &str) -> Color {
    ps_color::parse(hex).unwrap()
}

// ==================== Config ====================

#[test]
fn config_file_drives_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studio.json");
    fs::write(
        &path,
        r##"{ "exportName": "Brand Kit", "starterPalette": false, "defaultColor": "#0ea5e9" }"##,
    )
    .unwrap();

    let config = StudioConfig::load(&path).unwrap();
    let studio = Studio::new(config);
    assert!(studio.palette().is_empty());
    assert_eq!(studio.selected(), c("#0ea5e9"));
    assert_eq!(studio.export().name, "Brand Kit");
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StudioConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, StudioError::Io(_)), "{err}");
}

#[test]
fn malformed_config_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ exportName: ").unwrap();
    let err = StudioConfig::load(&path).unwrap_err();
    assert!(matches!(err, StudioError::Json(_)), "{err}");
}

// ==================== Editing session ====================

#[test]
fn typical_editing_session() {
    let mut studio = Studio::default();

    // A typo does not lose the current selection.
    assert!(studio.select_input("#12345").is_err());
    assert_eq!(studio.selected(), c("#6366f1"));

    studio.select_input("hsl(160, 84%, 39%)").unwrap();
    studio.adjust_selected(Adjustment::Darken, 0.5);
    let added = studio.add_selected().clone();
    assert_eq!(added.id, "4");
    assert_eq!(added.name.as_deref(), Some("Color 4"));

    let suggestion = studio.recommendations()[1];
    studio.add_recommendation(suggestion.color);
    assert_eq!(studio.palette().len(), 5);

    studio.remove("2").unwrap();
    studio.rename("5", "Highlight").unwrap();
    let ids: Vec<_> = studio.palette().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1", "3", "4", "5"]);

    assert_eq!(studio.combinations().len(), 6);
    assert_eq!(studio.summary().total, 4);
}

#[test]
fn black_on_white_is_aaa_everywhere() {
    let mut studio = Studio::default();
    studio.select(Color::BLACK);
    let white = &studio.background_checks()[0];
    assert_eq!(white.name, "White");
    assert_eq!(white.result.normal_text, WcagLevel::Aaa);
    assert_eq!(white.result.large_text, WcagLevel::Aaa);
}

#[test]
fn vision_mode_applies_to_simulation_and_preview() {
    let config = StudioConfig {
        vision: VisionKind::Deuteranopia,
        ..StudioConfig::default()
    };
    let studio = Studio::new(config);
    let simulated = studio.simulated();
    assert_eq!(simulated.len(), 3);
    assert_eq!(studio.preview().primary.fill, simulated[0].simulated);
}

// ==================== Export ====================

#[test]
fn export_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.json");

    let mut studio = Studio::default();
    studio.select_input("coral").unwrap();
    studio.add_selected();
    let doc = studio.export();
    doc.save(&path).unwrap();

    let loaded = PaletteDocument::load(&path).unwrap();
    assert_eq!(loaded, doc);

    let mut palette = loaded.into_palette();
    let hexes: Vec<_> = palette.iter().map(|e| e.color.to_hex()).collect();
    assert_eq!(hexes, ["#6366f1", "#8b5cf6", "#06b6d4", "#ff7f50"]);
    assert_eq!(palette.add(Color::WHITE, None).id, "5");
}

#[test]
fn recolored_entry_survives_a_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.json");
    Studio::default().export().save(&path).unwrap();

    let doc = PaletteDocument::load(&path).unwrap();
    let name = doc.name.clone();
    let mut studio = Studio::with_palette(StudioConfig::default(), doc.into_palette());
    studio.update("3", c("navy"), None).unwrap();
    PaletteDocument::new(name, studio.palette()).save(&path).unwrap();

    let palette = PaletteDocument::load(&path).unwrap().into_palette();
    let accent = palette.get("3").unwrap();
    assert_eq!(accent.color.to_hex(), "#000080");
    assert_eq!(accent.name.as_deref(), Some("Accent"));
}

#[test]
fn saved_file_is_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.json");
    Studio::default().export().save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("{\n  \"name\": \"Color Palette\",\n  \"colors\": ["), "{text}");
    assert!(text.contains("\"exportedAt\""));
    assert!(text.ends_with("}\n"));
}
