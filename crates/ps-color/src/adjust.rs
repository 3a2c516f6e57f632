// SPDX-License-Identifier: MIT
//
// Perceptual quick adjustments: brighten, darken, saturate and desaturate.
//
// Lightness moves along CIELAB L*, saturation along CIE LCh chroma, both in
// steps of 18 units per 1.0 of `amount`. The result is clipped per channel
// into the sRGB gamut, so arbitrarily large amounts settle on white, black,
// gray, or a fully saturated color instead of failing.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::lab::{LAB_STEP, Lab};
use crate::parse::parse;

/// Largest `amount` that still changes the outcome. Past this every channel
/// has already clipped, and capping keeps the Lab math finite.
const MAX_AMOUNT: f64 = 10_000.0;

/// One of the four quick adjustments a color picker offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjustment {
    /// Raise L*.
    Brighten,
    /// Lower L*.
    Darken,
    /// Raise LCh chroma.
    Saturate,
    /// Lower LCh chroma, never below zero.
    Desaturate,
}

impl Adjustment {
    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brighten => "brighten",
            Self::Darken => "darken",
            Self::Saturate => "saturate",
            Self::Desaturate => "desaturate",
        }
    }

    /// Parse an adjustment from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|a| a.name() == lower).copied()
    }

    /// All adjustments.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Brighten, Self::Darken, Self::Saturate, Self::Desaturate]
    }
}

/// Apply `op` to `color` by `amount`.
///
/// `amount` is an unbounded positive factor; 1.0 is one perceptual step.
/// Negative and NaN amounts leave the color unchanged.
#[must_use]
pub fn adjust(color: Color, op: Adjustment, amount: f64) -> Color {
    let amount = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, MAX_AMOUNT) };
    if amount == 0.0 {
        return color;
    }

    let delta = LAB_STEP * amount;
    let lab = Lab::from_color(color);
    match op {
        Adjustment::Brighten => Lab { l: lab.l + delta, ..lab }.to_color(),
        Adjustment::Darken => Lab { l: lab.l - delta, ..lab }.to_color(),
        Adjustment::Saturate | Adjustment::Desaturate => {
            let mut lch = lab.to_lch();
            lch.c = if op == Adjustment::Saturate { lch.c + delta } else { lch.c - delta };
            lch.c = lch.c.max(0.0);
            lch.to_lab().to_color()
        }
    }
}

/// Parse `input` and adjust it.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`](crate::ColorError::InvalidColorFormat)
/// if `input` is not a color.
pub fn adjust_str(input: &str, op: Adjustment, amount: f64) -> Result<Color> {
    parse(input).map(|color| adjust(color, op, amount))
}
