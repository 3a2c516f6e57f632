// SPDX-License-Identifier: MIT
//
// Color string parsing.
//
// Accepted forms (case-insensitive, surrounding whitespace ignored):
//
//   #rgb  #rrggbb  rgb  rrggbb          hex, `#` optional
//   rgb(r, g, b)   rgba(r, g, b, a)     0–255 or 0%–100% channels
//   rgb(r g b / a)                      space-separated CSS 4 syntax
//   hsl(h, s%, l%) hsla(h, s%, l%, a)   hue in degrees, optional `deg`
//   rebeccapurple                       any CSS named color
//
// Alpha is validated and then dropped. A `Color` is always opaque.

use crate::color::{Color, Hsl};
use crate::error::{ColorError, Result};
use crate::named;

/// Parse a user-entered color string.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] carrying `input` when it
/// matches none of the recognized forms, or when a channel is out of range.
pub fn parse(input: &str) -> Result<Color> {
    let lower = input.trim().to_ascii_lowercase();
    parse_hex(&lower)
        .or_else(|| parse_function(&lower))
        .or_else(|| named::lookup(&lower))
        .ok_or_else(|| ColorError::InvalidColorFormat(input.to_owned()))
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match digits.len() {
        // #rgb
        3 => {
            let r = hex_digit(digits[0])?;
            let g = hex_digit(digits[1])?;
            let b = hex_digit(digits[2])?;
            Some(Color::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #rrggbb
        6 => {
            let r = hex_byte(digits[0], digits[1])?;
            let g = hex_byte(digits[2], digits[3])?;
            let b = hex_byte(digits[4], digits[5])?;
            Some(Color::from_rgb(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

#[inline]
fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_digit(hi)? << 4 | hex_digit(lo)?)
}

// ─── Functional notation ─────────────────────────────────────────────────────

fn parse_function(s: &str) -> Option<Color> {
    let (name, rest) = s.split_once('(')?;
    let body = rest.strip_suffix(')')?;
    let args: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let alpha_ok = match args.len() {
        3 => true,
        4 => parse_alpha(args[3]).is_some(),
        _ => false,
    };
    if !alpha_ok {
        return None;
    }

    match name.trim() {
        "rgb" | "rgba" => {
            let r = parse_rgb_channel(args[0])?;
            let g = parse_rgb_channel(args[1])?;
            let b = parse_rgb_channel(args[2])?;
            Some(Color::from_rgb_f64(r, g, b))
        }
        "hsl" | "hsla" => {
            let h = parse_number(args[0].strip_suffix("deg").unwrap_or(args[0]))?;
            let s = parse_percent(args[1])?;
            let l = parse_percent(args[2])?;
            Some(Color::from_hsl(Hsl { h, s, l }))
        }
        _ => None,
    }
}

/// A finite decimal number.
fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `N%` with N in [0, 100], as a fraction.
fn parse_percent(s: &str) -> Option<f64> {
    let v = parse_number(s.strip_suffix('%')?)?;
    (0.0..=100.0).contains(&v).then_some(v / 100.0)
}

/// An `rgb()` channel on the 0–255 scale: either a number or a percentage.
fn parse_rgb_channel(s: &str) -> Option<f64> {
    if s.ends_with('%') {
        return parse_percent(s).map(|v| v * 255.0);
    }
    let v = parse_number(s)?;
    (0.0..=255.0).contains(&v).then_some(v)
}

/// Alpha as a number in [0, 1] or a percentage.
fn parse_alpha(s: &str) -> Option<f64> {
    if s.ends_with('%') {
        return parse_percent(s);
    }
    let v = parse_number(s)?;
    (0.0..=1.0).contains(&v).then_some(v)
}
