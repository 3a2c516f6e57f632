//! # ps-theory — color theory engine for palette-studio
//!
//! Pure functions over [`ps_color::Color`] values that annotate a palette
//! for display. Nothing here holds state; every call is fixed arithmetic.
//!
//! # Architecture
//!
//! ```text
//! Color (validated by ps-color)
//!     │
//!     ├──▶ contrast.rs: relative luminance, contrast ratio, WCAG levels
//!     │
//!     ├──▶ vision.rs:   dichromatic simulation (3×3 RGB matrices)
//!     │
//!     └──▶ harmony.rs:  complementary / triadic / analogous /
//!                       split-complementary / monochromatic suggestions
//! ```

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Matrix rows read better with their literal coefficients.
#![allow(clippy::unreadable_literal)]

pub mod contrast;
pub mod harmony;
pub mod vision;

pub use contrast::{ContrastResult, WcagLevel, contrast_ratio, relative_luminance, wcag_level};
pub use harmony::{HarmonyCategory, Recommendation, recommend};
pub use vision::{VisionKind, simulate};
