// SPDX-License-Identifier: MIT
//
// The `Color` value type: an opaque, validated sRGB color.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// A `Color` is stored as its 8-bit channel triple, so the canonical hex
// form and the RGB form are the same data: hex → RGB → hex is exact. HSL
// is derived on demand and quantized back to 8 bits whenever a new color
// is built from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::parse::parse;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A validated, fully opaque sRGB color.
///
/// Construct one with [`parse`](crate::parse()), [`Color::from_rgb`] or
/// [`Color::from_hsl`]. Values are `Copy` and immutable; every transform
/// returns a new color.
///
/// ```
/// use ps_color::{Color, parse, rotate_hue};
///
/// let red = parse("#f00").unwrap();
/// assert_eq!(red.to_hex(), "#ff0000");
/// assert_eq!(red.to_rgb(), (255, 0, 0));
///
/// let cyan = rotate_hue(red, 180.0);
/// assert_eq!(cyan, Color::from_rgb(0, 255, 255));
/// ```
///
/// Serializes as its canonical hex string and deserializes through the
/// same parser as user input.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

/// A color in HSL form.
///
/// - `h`: hue in degrees, [0, 360)
/// - `s`: saturation, [0, 1]
/// - `l`: lightness, [0, 1]
///
/// Achromatic colors report a hue of 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit sRGB channels.
    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Create a color from floating-point channels on the 0–255 scale.
    ///
    /// Each channel is rounded to nearest and clamped into the gamut. NaN
    /// channels become 0.
    #[must_use]
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Create a color from HSL.
    ///
    /// The hue is wrapped into [0, 360); saturation and lightness are
    /// clamped to [0, 1].
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = hsl_to_rgb(Hsl {
            h: normalize_hue(hsl.h),
            s: hsl.s.clamp(0.0, 1.0),
            l: hsl.l.clamp(0.0, 1.0),
        });
        Self::from_rgb_f64(r * 255.0, g * 255.0, b * 255.0)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// The 8-bit sRGB channel triple.
    #[inline]
    #[must_use]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The HSL form of this color.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Whether all three channels are equal (a gray, black or white).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse(&value)
    }
}

// ─── Hue Rotation ────────────────────────────────────────────────────────────

/// Rotate the HSL hue of `color` by `degrees`.
///
/// The new hue wraps into [0, 360); saturation and lightness are carried
/// over unchanged before re-quantizing to 8-bit channels. A rotation that
/// is a whole number of turns (including 0) returns `color` itself, and
/// achromatic colors are unaffected by any rotation.
#[must_use]
pub fn rotate_hue(color: Color, degrees: f64) -> Color {
    let turn = normalize_hue(degrees);
    if turn == 0.0 || color.is_achromatic() {
        return color;
    }
    let hsl = color.to_hsl();
    Color::from_hsl(Hsl {
        h: normalize_hue(hsl.h + turn),
        ..hsl
    })
}

// ─── HSL Math ────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360). Non-finite input maps to 0.
#[inline]
pub(crate) fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // A tiny negative remainder rounds up to exactly 360.0.
    if h >= 360.0 { 0.0 } else { h }
}

fn rgb_to_hsl(r8: u8, g8: u8, b8: u8) -> Hsl {
    let max8 = r8.max(g8).max(b8);
    let min8 = r8.min(g8).min(b8);

    let max = f64::from(max8) / 255.0;
    let min = f64::from(min8) / 255.0;
    let l = (max + min) / 2.0;

    if max8 == min8 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let (r, g, b) = (
        f64::from(r8) / 255.0,
        f64::from(g8) / 255.0,
        f64::from(b8) / 255.0,
    );
    let d = max - min;
    let s = if l < 0.5 { d / (max + min) } else { d / (2.0 - max - min) };
    let h = if r8 == max8 {
        (g - b) / d
    } else if g8 == max8 {
        2.0 + (b - r) / d
    } else {
        4.0 + (r - g) / d
    };

    Hsl { h: normalize_hue(h * 60.0), s, l }
}

/// HSL → sRGB channels in [0, 1].
fn hsl_to_rgb(hsl: Hsl) -> (f64, f64, f64) {
    let Hsl { h, s, l } = hsl;
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0f64.mul_add(l, -q);
    let hk = h / 360.0;

    (
        hue_channel(p, q, hk + 1.0 / 3.0),
        hue_channel(p, q, hk),
        hue_channel(p, q, hk - 1.0 / 3.0),
    )
}

fn hue_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Round a 0–255 float to the nearest channel value, clamping to the gamut.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // NaN survives clamp and casts to 0.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn assert_rgb_close(actual: (u8, u8, u8), expected: (u8, u8, u8)) {
        assert!(
            actual.0.abs_diff(expected.0) <= 1
                && actual.1.abs_diff(expected.1) <= 1
                && actual.2.abs_diff(expected.2) <= 1,
            "RGB mismatch: got {actual:?}, expected {expected:?}"
        );
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_is_lowercase_six_digits() {
        assert_eq!(Color::from_rgb(0xAB, 0x0C, 0xFF).to_hex(), "#ab0cff");
    }

    #[test]
    fn hex_rgb_hex_is_exact() {
        for hex in ["#000000", "#ffffff", "#6366f1", "#8b5cf6", "#06b6d4", "#c86432"] {
            let color = parse(hex).unwrap();
            let (r, g, b) = color.to_rgb();
            assert_eq!(Color::from_rgb(r, g, b).to_hex(), hex);
        }
    }

    #[test]
    fn from_u32_unpacks_channels() {
        assert_eq!(Color::from_u32(0x12_34_56).to_rgb(), (0x12, 0x34, 0x56));
    }

    #[test]
    fn display_matches_hex() {
        let c = Color::from_rgb(99, 102, 241);
        assert_eq!(c.to_string(), c.to_hex());
        assert_eq!(format!("{c:?}"), "Color(#6366f1)");
    }

    #[test]
    fn from_str_uses_parser() {
        let c: Color = "rgb(255, 0, 0)".parse().unwrap();
        assert_eq!(c, Color::from_rgb(255, 0, 0));
        assert!("bogus".parse::<Color>().is_err());
    }

    #[test]
    fn from_rgb_f64_rounds_and_clamps() {
        let c = Color::from_rgb_f64(-12.0, 127.5, 300.0);
        assert_eq!(c.to_rgb(), (0, 128, 255));
        assert_eq!(Color::from_rgb_f64(f64::NAN, 0.4, 0.6).to_rgb(), (0, 0, 1));
    }

    // ── HSL ──────────────────────────────────────────────────────────────

    #[test]
    fn hsl_of_primaries() {
        let red = Color::from_rgb(255, 0, 0).to_hsl();
        assert!(approx_eq(red.h, 0.0, 1e-9));
        assert!(approx_eq(red.s, 1.0, 1e-9));
        assert!(approx_eq(red.l, 0.5, 1e-9));

        let green = Color::from_rgb(0, 255, 0).to_hsl();
        assert!(approx_eq(green.h, 120.0, 1e-9));

        let blue = Color::from_rgb(0, 0, 255).to_hsl();
        assert!(approx_eq(blue.h, 240.0, 1e-9));
    }

    #[test]
    fn hsl_of_gray_has_no_saturation() {
        let gray = Color::from_rgb(128, 128, 128).to_hsl();
        assert!(approx_eq(gray.h, 0.0, 1e-9));
        assert!(approx_eq(gray.s, 0.0, 1e-9));
        assert!(approx_eq(gray.l, 128.0 / 255.0, 1e-9));
    }

    #[test]
    fn hsl_of_indigo() {
        // #6366f1 → roughly 239°, 84%, 67%
        let hsl = Color::from_rgb(0x63, 0x66, 0xf1).to_hsl();
        assert!(approx_eq(hsl.h, 238.7, 0.1), "hue was {}", hsl.h);
        assert!(approx_eq(hsl.s, 0.835, 0.005), "sat was {}", hsl.s);
        assert!(approx_eq(hsl.l, 0.667, 0.005), "light was {}", hsl.l);
    }

    #[test]
    fn hsl_roundtrip_within_one_step() {
        for rgb in [(0x63, 0x66, 0xf1), (0x8b, 0x5c, 0xf6), (0x06, 0xb6, 0xd4), (12, 200, 77)] {
            let color = Color::from_rgb(rgb.0, rgb.1, rgb.2);
            let back = Color::from_hsl(color.to_hsl());
            assert_rgb_close(back.to_rgb(), rgb);
        }
    }

    #[test]
    fn from_hsl_clamps_out_of_range() {
        let white = Color::from_hsl(Hsl { h: 42.0, s: 3.0, l: 7.0 });
        assert_eq!(white, Color::WHITE);
        let black = Color::from_hsl(Hsl { h: -90.0, s: 0.5, l: -1.0 });
        assert_eq!(black, Color::BLACK);
    }

    #[test]
    fn normalize_hue_wraps_into_range() {
        assert!(approx_eq(normalize_hue(370.0), 10.0, 1e-9));
        assert!(approx_eq(normalize_hue(-30.0), 330.0, 1e-9));
        assert!(approx_eq(normalize_hue(720.0), 0.0, 1e-9));
        assert!(normalize_hue(-1e-20) < 360.0);
        assert!(approx_eq(normalize_hue(f64::NAN), 0.0, 1e-9));
    }

    // ── Hue rotation ─────────────────────────────────────────────────────

    #[test]
    fn rotate_red_half_turn_is_cyan() {
        let red = Color::from_rgb(255, 0, 0);
        let rotated = rotate_hue(red, 180.0);
        assert_eq!(rotated.to_hex(), "#00ffff");
        assert!(approx_eq(rotated.to_hsl().h, 180.0, 1e-9));
    }

    #[test]
    fn rotate_red_thirds() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(rotate_hue(red, 120.0).to_hex(), "#00ff00");
        assert_eq!(rotate_hue(red, 240.0).to_hex(), "#0000ff");
    }

    #[test]
    fn full_and_zero_rotation_are_identity() {
        for hex in ["#6366f1", "#8b5cf6", "#06b6d4", "#123456", "#fedcba"] {
            let c = parse(hex).unwrap();
            assert_eq!(rotate_hue(c, 0.0), c);
            assert_eq!(rotate_hue(c, 360.0), c);
            assert_eq!(rotate_hue(c, -720.0), c);
        }
    }

    #[test]
    fn negative_rotation_wraps() {
        let c = parse("#6366f1").unwrap();
        let back = rotate_hue(c, -30.0).to_hsl();
        let fwd = rotate_hue(c, 330.0).to_hsl();
        assert!(approx_eq(back.h, fwd.h, 1e-6));
        assert!(back.h >= 0.0 && back.h < 360.0);
    }

    #[test]
    fn rotation_preserves_saturation_and_lightness() {
        let c = parse("#6366f1").unwrap();
        let before = c.to_hsl();
        let after = rotate_hue(c, 150.0).to_hsl();
        assert!(approx_eq(before.s, after.s, 0.01), "{before:?} vs {after:?}");
        assert!(approx_eq(before.l, after.l, 0.01), "{before:?} vs {after:?}");
    }

    #[test]
    fn rotating_gray_is_identity() {
        let gray = Color::from_rgb(90, 90, 90);
        assert_eq!(rotate_hue(gray, 123.0), gray);
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::from_rgb(6, 182, 212)).unwrap();
        assert_eq!(json, "\"#06b6d4\"");
    }

    #[test]
    fn deserializes_any_parseable_form() {
        let c: Color = serde_json::from_str("\"#ABC\"").unwrap();
        assert_eq!(c.to_hex(), "#aabbcc");
        assert!(serde_json::from_str::<Color>("\"not-a-color\"").is_err());
    }
}
