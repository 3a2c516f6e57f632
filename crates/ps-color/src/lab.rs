// SPDX-License-Identifier: MIT
//
// CIELAB and CIE LCh conversions (D65 white point).
//
// Lightness and chroma adjustments happen here because equal steps in L*
// look like equal steps to a human, which is not true of HSL lightness.
//
// Pipeline: sRGB ↔ Linear sRGB ↔ XYZ ↔ CIELAB ↔ LCh
#![allow(clippy::many_single_char_names, clippy::unreadable_literal)]

use crate::color::{Color, normalize_hue};

/// One adjustment "unit" in L*/C*; `brighten(1)` moves L* by this much.
pub(crate) const LAB_STEP: f64 = 18.0;

// D65 reference white.
const XN: f64 = 0.950_470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_830;

// Piecewise constants of the CIELAB companding function.
const T0: f64 = 0.137_931_034; // 4 / 29
const T1: f64 = 0.206_896_552; // 6 / 29
const T2: f64 = 0.128_418_55; //  3 * T1^2
const T3: f64 = 0.008_856_452; // T1^3

/// A CIELAB color. `l` is nominally 0–100 but is not clamped here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// A CIE LCh color (cylindrical CIELAB). `h` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Lab {
    pub(crate) fn from_color(color: Color) -> Self {
        let (r, g, b) = color.to_rgb();
        let r = srgb_to_linear(r);
        let g = srgb_to_linear(g);
        let b = srgb_to_linear(b);

        let x = xyz_to_lab_f(0.180_437_5f64.mul_add(b, 0.412_456_4f64.mul_add(r, 0.357_576_1 * g)) / XN);
        let y = xyz_to_lab_f(0.072_175_0f64.mul_add(b, 0.212_672_9f64.mul_add(r, 0.715_152_2 * g)) / YN);
        let z = xyz_to_lab_f(0.950_304_1f64.mul_add(b, 0.019_333_9f64.mul_add(r, 0.119_192_0 * g)) / ZN);

        let l = 116.0f64.mul_add(y, -16.0);
        Self {
            l: l.max(0.0),
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
        }
    }

    /// Convert back to sRGB, clipping each channel into the gamut.
    pub(crate) fn to_color(self) -> Color {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let y = YN * lab_to_xyz_f(fy);
        let x = XN * lab_to_xyz_f(fx);
        let z = ZN * lab_to_xyz_f(fz);

        let r = linear_to_srgb((-0.498_531_4f64).mul_add(z, 3.240_454_2f64.mul_add(x, -1.537_138_5 * y)));
        let g = 0.041_556_0f64.mul_add(z, (-0.969_266_0f64).mul_add(x, 1.876_010_8 * y));
        let g = linear_to_srgb(g);
        let b = linear_to_srgb(1.057_225_2f64.mul_add(z, 0.055_643_4f64.mul_add(x, -0.204_025_9 * y)));

        Color::from_rgb_f64(r, g, b)
    }

    pub(crate) fn to_lch(self) -> Lch {
        let c = self.a.hypot(self.b);
        // Below display precision the hue is meaningless; pin it to 0.
        let h = if (c * 10_000.0).round() == 0.0 {
            0.0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };
        Lch { l: self.l, c, h }
    }
}

impl Lch {
    pub(crate) fn to_lab(self) -> Lab {
        let h = self.h.to_radians();
        Lab {
            l: self.l,
            a: self.c * h.cos(),
            b: self.c * h.sin(),
        }
    }
}

// ─── Transfer Functions ──────────────────────────────────────────────────────

/// 8-bit sRGB channel → linear light (remove gamma).
#[inline]
fn srgb_to_linear(v: u8) -> f64 {
    let c = f64::from(v) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light → sRGB on the 0–255 scale (apply gamma). Not clamped.
#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    255.0
        * if c <= 0.003_04 {
            12.92 * c
        } else {
            1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
        }
}

#[inline]
fn xyz_to_lab_f(t: f64) -> f64 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}

#[inline]
fn lab_to_xyz_f(t: f64) -> f64 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}
