//! WCAG contrast ratio and compliance levels.
//!
//! Thresholds per WCAG 2.1, inclusive at the boundary:
//!
//! | Level | Normal text | Large text |
//! |-------|-------------|------------|
//! | AAA   | >= 7.0:1    | >= 4.5:1   |
//! | AA    | >= 4.5:1    | >= 3.0:1   |
//!
//! Everything works on validated [`Color`] values. String inputs go through
//! [`contrast_str`], which reports the parse failure instead of guessing a
//! ratio. A caller that needs a total function picks its own fallback.

use std::fmt;

use ps_color::{Color, ColorError, parse};
use serde::{Deserialize, Serialize};

/// AAA threshold for normal-size text.
pub const AAA_NORMAL: f64 = 7.0;
/// AA threshold for normal-size text.
pub const AA_NORMAL: f64 = 4.5;
/// AAA threshold for large text.
pub const AAA_LARGE: f64 = 4.5;
/// AA threshold for large text.
pub const AA_LARGE: f64 = 3.0;

/// Swatch labels switch to white text above this ratio against white.
const LIGHT_TEXT_THRESHOLD: f64 = 4.5;

/// The backgrounds every selected color is checked against.
pub const COMMON_BACKGROUNDS: [(&str, Color); 4] = [
    ("White", Color::from_u32(0xff_ff_ff)),
    ("Black", Color::from_u32(0x00_00_00)),
    ("Light Gray", Color::from_u32(0xf8_f9_fa)),
    ("Dark Gray", Color::from_u32(0x21_25_29)),
];

// ---------------------------------------------------------------------------
// Luminance and ratio
// ---------------------------------------------------------------------------

/// How bright a swatch is to the eye: black is 0, white is 1.
///
/// Each channel is linearized, then weighted 0.2126 / 0.7152 / 0.0722 for
/// red, green and blue.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_rgb();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64
        .mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
        .clamp(0.0, 1.0)
}

/// Text/background contrast, from 1:1 (identical) up to 21:1 (black on
/// white). Symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Parse two color strings and compute their contrast ratio.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for the first input that does
/// not parse.
pub fn contrast_str(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(parse(a)?, parse(b)?))
}

/// Convert a single 8-bit sRGB channel to linear light.
#[inline]
fn srgb_to_linear(v: u8) -> f64 {
    let c = f64::from(v) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// WCAG levels
// ---------------------------------------------------------------------------

/// WCAG compliance level for one text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Display label: `AAA`, `AA`, or `Fail`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::Fail => "Fail",
        }
    }

    /// Whether this level is at least AA.
    #[must_use]
    pub const fn passes(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Classify a contrast ratio. Thresholds are inclusive.
#[must_use]
pub fn wcag_level(ratio: f64, is_large_text: bool) -> WcagLevel {
    let (aaa, aa) = if is_large_text {
        (AAA_LARGE, AA_LARGE)
    } else {
        (AAA_NORMAL, AA_NORMAL)
    };
    if ratio >= aaa {
        WcagLevel::Aaa
    } else if ratio >= aa {
        WcagLevel::Aa
    } else {
        WcagLevel::Fail
    }
}

// ---------------------------------------------------------------------------
// ContrastResult
// ---------------------------------------------------------------------------

/// Contrast between two colors with both text-size classifications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    #[serde(rename = "levelNormalText")]
    pub normal_text: WcagLevel,
    #[serde(rename = "levelLargeText")]
    pub large_text: WcagLevel,
}

impl ContrastResult {
    /// Classify an already-computed ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            normal_text: wcag_level(ratio, false),
            large_text: wcag_level(ratio, true),
        }
    }

    /// Contrast between two colors.
    #[must_use]
    pub fn between(a: Color, b: Color) -> Self {
        Self::from_ratio(contrast_ratio(a, b))
    }
}

/// Contrast of a color against a named reference background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundCheck {
    pub name: &'static str,
    pub background: Color,
    #[serde(flatten)]
    pub result: ContrastResult,
}

/// Check `color` against each of [`COMMON_BACKGROUNDS`], in order.
#[must_use]
pub fn check_backgrounds(color: Color) -> Vec<BackgroundCheck> {
    COMMON_BACKGROUNDS
        .iter()
        .map(|&(name, background)| BackgroundCheck {
            name,
            background,
            result: ContrastResult::between(color, background),
        })
        .collect()
}

/// Contrast for every unordered pair `(i, j)` with `i < j`.
///
/// Returns `(i, j, result)` triples in row-major order.
#[must_use]
pub fn palette_pairs(colors: &[Color]) -> Vec<(usize, usize, ContrastResult)> {
    let mut pairs = Vec::with_capacity(colors.len() * colors.len().saturating_sub(1) / 2);
    for (i, &a) in colors.iter().enumerate() {
        for (j, &b) in colors.iter().enumerate().skip(i + 1) {
            pairs.push((i, j, ContrastResult::between(a, b)));
        }
    }
    pairs
}

/// Pick black or white text for a swatch of `background`.
///
/// White wins only when it clears 4.5:1 strictly; ties go to black.
#[must_use]
pub fn readable_text_color(background: Color) -> Color {
    if contrast_ratio(background, Color::WHITE) > LIGHT_TEXT_THRESHOLD {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
