//! HSL ⇄ RGB ⇄ hex conversion and WCAG 2.1 luminance/contrast.
//!
//! Pure functions over two small value types:
//!
//! ```text
//!   Hsl { h: 0–360°, s: 0–100, l: 0–100 }
//!     │  hsl_to_rgb (piecewise hue sectors, rounded per channel)
//!     ▼
//!   Rgb { r, g, b: u8 }  ──to_hex──▶  "#rrggbb"
//!     │
//!     ▼
//!   relative_luminance → contrast_ratio
//! ```
//!
//! Arithmetic is written out operation-by-operation rather than fused
//! (`mul_add`) so the rounded channels match previously generated token
//! sets bit for bit.
#![allow(clippy::suboptimal_flops)]

use std::fmt;

use serde::{Serialize, Serializer};

// ─── Rgb ────────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color. Displays and serializes as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        hex_to_rgb(s)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Decode back to HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// WCAG relative luminance in `[0, 1]`.
    #[must_use]
    pub fn luminance(self) -> f64 {
        relative_luminance(self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─── Hsl ────────────────────────────────────────────────────────────────────

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation, different lightness.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

// ─── Conversions ────────────────────────────────────────────────────────────

/// Convert HSL (`h` in degrees, `s`/`l` in 0–100) to rounded 8-bit RGB.
///
/// Saturation exactly 0 collapses to gray.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let v = to_u8(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb::new(
        to_u8(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_channel(p, q, h)),
        to_u8(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// One channel of the HSL hexcone, `t` is the hue offset in turns.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Decode RGB to HSL (`h` in degrees, `s`/`l` in percent).
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s * 100.0, l * 100.0)
}

/// Lowercase `#rrggbb`, two zero-padded digits per channel.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// `hsl_to_rgb` followed by `rgb_to_hex`.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// Parse `#rrggbb` or `rrggbb`. Anything else is `None`.
#[must_use]
pub fn hex_to_rgb(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();
    if bytes.len() != 6 {
        return None;
    }
    Some(Rgb::new(
        parse_hex_byte(&bytes[0..2])?,
        parse_hex_byte(&bytes[2..4])?,
        parse_hex_byte(&bytes[4..6])?,
    ))
}

const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Scale a unit value to a byte, rounding half up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamped to [0, 255] before the cast.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── WCAG ───────────────────────────────────────────────────────────────────

/// Linearize one gamma-encoded sRGB channel (0.0–1.0).
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1: `0.2126 R + 0.7152 G + 0.0722 B` over
/// linearized channels. Returns a value in `[0, 1]`.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f64::from(rgb.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG 2.1 contrast ratio, `(L_max + 0.05) / (L_min + 0.05)`.
///
/// Symmetric, always in `[1, 21]`.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
