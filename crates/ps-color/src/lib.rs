// SPDX-License-Identifier: MIT
//
// ps-color — color space core for palette-studio.
//
// Everything above this crate works with one value type, `Color`: a
// validated sRGB color stored as its 8-bit channel triple and written out
// as canonical `#rrggbb`. Parsing accepts the forms a color picker sees
// (hex, `rgb()`, `hsl()`, CSS names); every transform is a free function
// that takes a `Color` by value and returns a new one. Nothing here
// allocates on the hot path except hex formatting.
//
// Conversion pipeline for adjustments:
//
//   sRGB ↔ Linear sRGB ↔ XYZ (D65) ↔ CIELAB ↔ CIE LCh
//
// Hue rotation happens in HSL, which is what designers read off a picker.

pub mod adjust;
pub mod color;
pub mod error;
mod lab;
pub mod named;
pub mod parse;

pub use adjust::{Adjustment, adjust, adjust_str};
pub use color::{Color, Hsl, rotate_hue};
pub use error::{ColorError, Result};
pub use parse::parse;
