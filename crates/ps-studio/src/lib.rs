//! # ps-studio — palette sessions for palette-studio
//!
//! This crate holds the stateful side of the tool:
//!
//! - **[`palette`]**: `Palette` and `PaletteEntry`, ordered with stable ids
//! - **[`studio`]**: `Studio`, one editing session (selection, vision mode,
//!   derived views)
//! - **[`preview`]**: primary/secondary/accent roles for sample UI
//! - **[`export`]**: the JSON `PaletteDocument` format
//! - **[`config`]**: `StudioConfig`, read from a JSON file
//!
//! Color math lives in `ps-color` and `ps-theory`; nothing here computes a
//! color directly.

pub mod config;
pub mod error;
pub mod export;
pub mod palette;
pub mod preview;
pub mod studio;

pub use config::StudioConfig;
pub use error::{Result, StudioError};
pub use export::PaletteDocument;
pub use palette::{Palette, PaletteEntry};
pub use preview::{PreviewScheme, Swatch};
pub use studio::{PairContrast, SimulatedEntry, Studio, Summary};
