//! Harmony suggestions derived from a base color.
//!
//! Hue relationships rotate in HSL; the monochromatic variants go through
//! the CIELAB adjustments in `ps-color`. The generated list always has the
//! same order, so a filtered, truncated view of it is stable too.

use std::fmt;

use ps_color::{Adjustment, Color, adjust, rotate_hue};
use serde::{Deserialize, Serialize};

/// Most suggestions shown at once.
pub const MAX_RECOMMENDATIONS: usize = 8;

/// The harmony family a suggestion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonyCategory {
    /// Opposite hue.
    Complementary,
    /// Hues 120 degrees apart.
    Triadic,
    /// Neighbouring hues, 30 degrees either side.
    Analogous,
    /// The two hues beside the complement.
    SplitComplementary,
    /// Same hue, different lightness or chroma.
    Monochromatic,
}

impl HarmonyCategory {
    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::Analogous => "Analogous",
            Self::SplitComplementary => "Split Complementary",
            Self::Monochromatic => "Monochromatic",
        }
    }
}

impl fmt::Display for HarmonyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One suggested color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub color: Color,
    pub category: HarmonyCategory,
    pub label: &'static str,
}

/// How a suggestion is derived from the base color.
#[derive(Clone, Copy)]
enum Derivation {
    Rotate(f64),
    Adjust(Adjustment),
}

const RULES: [(&str, HarmonyCategory, Derivation); 10] = {
    use Derivation::{Adjust, Rotate};
    use HarmonyCategory::{Analogous, Complementary, Monochromatic, SplitComplementary, Triadic};
    [
        ("Complementary", Complementary, Rotate(180.0)),
        ("Triadic 1", Triadic, Rotate(120.0)),
        ("Triadic 2", Triadic, Rotate(240.0)),
        ("Analogous 1", Analogous, Rotate(30.0)),
        ("Analogous 2", Analogous, Rotate(-30.0)),
        ("Split Comp 1", SplitComplementary, Rotate(150.0)),
        ("Split Comp 2", SplitComplementary, Rotate(210.0)),
        ("Lighter", Monochromatic, Adjust(Adjustment::Brighten)),
        ("Darker", Monochromatic, Adjust(Adjustment::Darken)),
        ("Desaturated", Monochromatic, Adjust(Adjustment::Desaturate)),
    ]
};

/// Every suggestion for `base`, in fixed order, unfiltered.
///
/// Duplicates are kept: an achromatic base yields the same color for every
/// hue rotation.
#[must_use]
pub fn generate(base: Color) -> Vec<Recommendation> {
    RULES
        .iter()
        .map(|&(label, category, derivation)| {
            let color = match derivation {
                Derivation::Rotate(degrees) => rotate_hue(base, degrees),
                Derivation::Adjust(op) => adjust(base, op, 1.0),
            };
            Recommendation { color, category, label }
        })
        .collect()
}

/// Suggestions for `base` that are not already in `palette`, capped at
/// [`MAX_RECOMMENDATIONS`].
#[must_use]
pub fn recommend(base: Color, palette: &[Color]) -> Vec<Recommendation> {
    generate(base)
        .into_iter()
        .filter(|rec| !palette.contains(&rec.color))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
