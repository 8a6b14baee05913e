//! Spacing, radius, border, shadow, opacity and z-index scales.
//!
//! Draws come from a sequence salted with `-spacing`, in this order: base
//! unit jitter, radius jitter, shadow opacity jitter. Border widths,
//! opacity and z-index tables are static.

use serde::Serialize;

use crate::sequence::Sequence;
use crate::theme::{FontStyle, Theme};
use crate::tokens::{TokenMap, round1};

/// Base spacing unit in rem.
pub const BASE_UNIT: f64 = 1.0;

/// Salt appended to the seed for this subsystem.
pub const SALT: &str = "spacing";

/// Spacing steps as multiples of the base unit (step `4` is one unit).
const SPACING_STEPS: [(&str, f64); 33] = [
    ("0.5", 0.125),
    ("1", 0.25),
    ("1.5", 0.375),
    ("2", 0.5),
    ("2.5", 0.625),
    ("3", 0.75),
    ("3.5", 0.875),
    ("4", 1.0),
    ("5", 1.25),
    ("6", 1.5),
    ("7", 1.75),
    ("8", 2.0),
    ("9", 2.25),
    ("10", 2.5),
    ("11", 2.75),
    ("12", 3.0),
    ("14", 3.5),
    ("16", 4.0),
    ("20", 5.0),
    ("24", 6.0),
    ("28", 7.0),
    ("32", 8.0),
    ("36", 9.0),
    ("40", 10.0),
    ("44", 11.0),
    ("48", 12.0),
    ("52", 13.0),
    ("56", 14.0),
    ("60", 15.0),
    ("64", 16.0),
    ("72", 18.0),
    ("80", 20.0),
    ("96", 24.0),
];

/// Radius steps as multiples of the base radius.
const RADIUS_STEPS: [(&str, f64); 7] = [
    ("sm", 0.5),
    ("base", 1.0),
    ("md", 1.5),
    ("lg", 2.0),
    ("xl", 3.0),
    ("2xl", 4.0),
    ("3xl", 6.0),
];

/// All spacing-family tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTokens {
    pub spacing: TokenMap<String>,
    pub border_radius: TokenMap<String>,
    pub border_width: TokenMap<&'static str>,
    pub shadows: TokenMap<String>,
    pub opacity: TokenMap<&'static str>,
    pub z_index: TokenMap<&'static str>,
}

impl SpacingTokens {
    /// Spacing value for a step label, e.g. `"4"` → `"1rem"`.
    #[must_use]
    pub fn space(&self, label: &str) -> &str {
        self.spacing.get(label).map_or("0", String::as_str)
    }

    #[must_use]
    pub fn radius(&self, label: &str) -> &str {
        self.border_radius.get(label).map_or("0", String::as_str)
    }

    #[must_use]
    pub fn shadow(&self, label: &str) -> &str {
        self.shadows.get(label).map_or("none", String::as_str)
    }

    #[must_use]
    pub fn z(&self, label: &str) -> &str {
        self.z_index.get(label).copied().unwrap_or("auto")
    }
}

/// Spacing scale: `0`, `px`, then 33 rem steps. One draw.
pub fn generate_spacing(base_unit: f64, seq: &mut Sequence) -> TokenMap<String> {
    let base = base_unit + seq.next_float(-0.5, 0.5);
    let mut map = TokenMap::from_entries([("0", "0".to_owned()), ("px", "1px".to_owned())]);
    for (label, mult) in SPACING_STEPS {
        map.set(label, format!("{}rem", round1(base * mult)));
    }
    map
}

/// Base radius in px for a font style.
#[must_use]
pub const fn base_radius(style: FontStyle) -> f64 {
    match style {
        FontStyle::Rounded => 8.0,
        FontStyle::Geometric => 2.0,
        FontStyle::SansSerif | FontStyle::Humanist => 4.0,
    }
}

/// Radius scale: `none`, seven px steps, `full`. One draw.
pub fn generate_border_radius(theme: &Theme, seq: &mut Sequence) -> TokenMap<String> {
    let base = base_radius(theme.font_style) + seq.next_float(-1.0, 1.0);
    let mut map = TokenMap::from_entries([("none", "0".to_owned())]);
    for (label, mult) in RADIUS_STEPS {
        map.set(label, format!("{}px", round1(base * mult)));
    }
    map.set("full", "9999px".to_owned());
    map
}

#[must_use]
pub fn border_widths() -> TokenMap<&'static str> {
    TokenMap::from_entries([
        ("0", "0"),
        ("default", "1px"),
        ("2", "2px"),
        ("4", "4px"),
        ("8", "8px"),
    ])
}

/// Shadow opacity before jitter.
#[must_use]
pub fn shadow_intensity(theme: &Theme) -> f64 {
    if theme.is_high_contrast() { 0.3 } else { 0.15 }
}

/// Box shadows parametrized by one jittered opacity. One draw.
pub fn generate_shadows(theme: &Theme, seq: &mut Sequence) -> TokenMap<String> {
    let o = shadow_intensity(theme) + seq.next_float(-0.05, 0.05);
    let rgba = |alpha: f64| format!("rgba(0, 0, 0, {alpha})");

    TokenMap::from_entries([
        ("sm", format!("0 1px 2px 0 {}", rgba(o))),
        ("base", format!("0 1px 3px 0 {}, 0 1px 2px 0 {}", rgba(o), rgba(o * 0.6))),
        ("md", format!("0 4px 6px -1px {}, 0 2px 4px -1px {}", rgba(o), rgba(o * 0.6))),
        ("lg", format!("0 10px 15px -3px {}, 0 4px 6px -2px {}", rgba(o), rgba(o * 0.5))),
        ("xl", format!("0 20px 25px -5px {}, 0 10px 10px -5px {}", rgba(o), rgba(o * 0.4))),
        ("2xl", format!("0 25px 50px -12px {}", rgba(o * 1.5))),
        ("inner", format!("inset 0 2px 4px 0 {}", rgba(o * 0.6))),
        ("none", "none".to_owned()),
    ])
}

#[must_use]
pub fn opacity_scale() -> TokenMap<&'static str> {
    TokenMap::from_entries([
        ("0", "0"),
        ("5", "0.05"),
        ("10", "0.1"),
        ("20", "0.2"),
        ("25", "0.25"),
        ("30", "0.3"),
        ("40", "0.4"),
        ("50", "0.5"),
        ("60", "0.6"),
        ("70", "0.7"),
        ("75", "0.75"),
        ("80", "0.8"),
        ("90", "0.9"),
        ("95", "0.95"),
        ("100", "1"),
    ])
}

#[must_use]
pub fn z_index_scale() -> TokenMap<&'static str> {
    TokenMap::from_entries([
        ("0", "0"),
        ("10", "10"),
        ("20", "20"),
        ("30", "30"),
        ("40", "40"),
        ("50", "50"),
        ("auto", "auto"),
    ])
}

/// All spacing-family tokens for `(theme, seed)`, from the salted sequence.
#[must_use]
pub fn generate_spacing_tokens(theme: &Theme, seed: &str) -> SpacingTokens {
    let mut seq = Sequence::salted(seed, SALT);
    let spacing = generate_spacing(BASE_UNIT, &mut seq);
    let border_radius = generate_border_radius(theme, &mut seq);
    let shadows = generate_shadows(theme, &mut seq);

    SpacingTokens {
        spacing,
        border_radius,
        border_width: border_widths(),
        shadows,
        opacity: opacity_scale(),
        z_index: z_index_scale(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
