//! Live-preview color scheme: the first three palette colors mapped onto
//! primary, secondary and accent roles.

use ps_color::Color;
use ps_theory::contrast::readable_text_color;
use serde::Serialize;

/// Fallbacks for roles the palette is too short to fill.
pub const FALLBACK_PRIMARY: Color = Color::from_u32(0x63_66_f1);
pub const FALLBACK_SECONDARY: Color = Color::from_u32(0x8b_5c_f6);
pub const FALLBACK_ACCENT: Color = Color::from_u32(0x06_b6_d4);

/// A fill color with the text color that reads on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub fill: Color,
    pub text: Color,
}

impl Swatch {
    #[must_use]
    pub fn new(fill: Color) -> Self {
        Self {
            fill,
            text: readable_text_color(fill),
        }
    }
}

/// Role assignment for sample UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewScheme {
    pub primary: Swatch,
    pub secondary: Swatch,
    pub accent: Swatch,
}

impl PreviewScheme {
    /// Build a scheme from colors already in display order.
    ///
    /// Callers pass simulated colors when previewing a vision mode.
    #[must_use]
    pub fn from_colors(colors: &[Color]) -> Self {
        let role = |i: usize, fallback: Color| Swatch::new(colors.get(i).copied().unwrap_or(fallback));
        Self {
            primary: role(0, FALLBACK_PRIMARY),
            secondary: role(1, FALLBACK_SECONDARY),
            accent: role(2, FALLBACK_ACCENT),
        }
    }
}
