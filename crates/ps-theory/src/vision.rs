//! Color-vision-deficiency simulation.
//!
//! Each dichromacy is a fixed 3×3 matrix applied to the 0–255 RGB triple.
//! These are coarse approximations, not the Brettel or Viénot models, and
//! are good enough to spot palette entries that collapse into each other.

use std::fmt;

use ps_color::{Color, parse};
use serde::{Deserialize, Serialize};

type Matrix = [[f64; 3]; 3];

const PROTANOPIA: Matrix = [[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.242, 0.758]];
const DEUTERANOPIA: Matrix = [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]];
const TRITANOPIA: Matrix = [[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]];

/// The vision modes a palette can be previewed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionKind {
    /// Typical trichromatic vision.
    #[default]
    None,
    /// Missing L cones.
    Protanopia,
    /// Missing M cones.
    Deuteranopia,
    /// Missing S cones.
    Tritanopia,
}

impl VisionKind {
    /// Lowercase name, as accepted on the command line and in config.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
        }
    }

    /// Parse a vision kind from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|k| k.name() == lower).copied()
    }

    /// All vision kinds, `None` first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::None, Self::Protanopia, Self::Deuteranopia, Self::Tritanopia]
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Normal Vision",
            Self::Protanopia => "Protanopia (Red-blind)",
            Self::Deuteranopia => "Deuteranopia (Green-blind)",
            Self::Tritanopia => "Tritanopia (Blue-blind)",
        }
    }

    /// Prevalence note shown next to the label. Normal vision has none.
    #[must_use]
    pub const fn description(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Protanopia | Self::Deuteranopia => Some("~1% of males"),
            Self::Tritanopia => Some("~0.001% of population"),
        }
    }

    const fn matrix(self) -> Option<&'static Matrix> {
        match self {
            Self::None => None,
            Self::Protanopia => Some(&PROTANOPIA),
            Self::Deuteranopia => Some(&DEUTERANOPIA),
            Self::Tritanopia => Some(&TRITANOPIA),
        }
    }
}

impl fmt::Display for VisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Simulate how `color` looks under `kind`. `None` is the identity.
#[must_use]
pub fn simulate(color: Color, kind: VisionKind) -> Color {
    let Some(m) = kind.matrix() else {
        return color;
    };
    let (r, g, b) = color.to_rgb();
    let (r, g, b) = (f64::from(r), f64::from(g), f64::from(b));
    let row = |i: usize| m[i][2].mul_add(b, m[i][0].mul_add(r, m[i][1] * g));
    // from_rgb_f64 rounds to nearest and clamps to 0–255
    Color::from_rgb_f64(row(0), row(1), row(2))
}

/// Simulate a color string, returning it unchanged when it does not parse.
///
/// A successful simulation returns canonical lowercase hex.
#[must_use]
pub fn simulate_str(input: &str, kind: VisionKind) -> String {
    parse(input).map_or_else(|_| input.to_owned(), |color| simulate(color, kind).to_hex())
}

/// Whether `color` renders differently under `kind`.
#[must_use]
pub fn is_visibly_different(color: Color, kind: VisionKind) -> bool {
    simulate(color, kind) != color
}
