//! Palette generation: eleven-step lightness scales per hue.
//!
//! Each scale walks fixed HSL lightness anchors from 95% (`50`) down to 5%
//! (`950`). Every step draws a hue jitter and then a saturation jitter from
//! the shared [`Sequence`], both in `[-5, 5)`.
//!
//! # Draw order
//!
//! The order of draws is part of the output format. For one seed, the
//! sequence is consumed as:
//!
//! ```text
//! primary, secondary, accent      (theme hues, base saturation 80|60)
//! success, warning, error, info   (fixed hue/saturation pairs)
//! neutral hue jitter              (one draw, [-10, 10))
//! neutral                         (saturation 10)
//! ```
//!
//! with two draws (hue, then saturation) per step, steps from `50` to `950`.
//! Reordering anything here changes every color for every existing seed.

use serde::Serialize;

use crate::color::{Rgb, hsl_to_rgb};
use crate::contrast::pick_best_contrast_text;
use crate::sequence::Sequence;
use crate::theme::{ContrastLevel, Theme};

// ---------------------------------------------------------------------------
// Shade
// ---------------------------------------------------------------------------

/// One of the eleven fixed scale steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    pub const ALL: [Self; 11] = [
        Self::S50, Self::S100, Self::S200, Self::S300, Self::S400, Self::S500,
        Self::S600, Self::S700, Self::S800, Self::S900, Self::S950,
    ];

    /// Step label as written in token names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
        }
    }

    /// Anchor lightness in percent.
    #[must_use]
    pub const fn lightness(self) -> f64 {
        match self {
            Self::S50 => 95.0,
            Self::S100 => 90.0,
            Self::S200 => 80.0,
            Self::S300 => 70.0,
            Self::S400 => 60.0,
            Self::S500 => 50.0,
            Self::S600 => 40.0,
            Self::S700 => 30.0,
            Self::S800 => 20.0,
            Self::S900 => 10.0,
            Self::S950 => 5.0,
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// ColorScale
// ---------------------------------------------------------------------------

/// Exactly eleven colors, lightest (`50`) to darkest (`950`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScale {
    shades: [Rgb; 11],
}

impl ColorScale {
    #[must_use]
    pub const fn get(&self, shade: Shade) -> Rgb {
        self.shades[shade.index()]
    }

    /// Lookup by label (`"500"`).
    #[must_use]
    pub fn by_label(&self, label: &str) -> Option<Rgb> {
        Shade::from_label(label).map(|s| self.get(s))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, Rgb)> + '_ {
        Shade::ALL.into_iter().zip(self.shades.iter().copied())
    }
}

impl std::ops::Index<Shade> for ColorScale {
    type Output = Rgb;

    fn index(&self, shade: Shade) -> &Rgb {
        &self.shades[shade.index()]
    }
}

impl Serialize for ColorScale {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (shade, rgb) in self.iter() {
            map.serialize_entry(shade.label(), &rgb)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// ColorSet
// ---------------------------------------------------------------------------

/// Every color group of a design system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSet {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub accent: ColorScale,
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
    pub info: ColorScale,
    pub neutral: ColorScale,
}

impl ColorSet {
    /// Group names in generation (and serialization) order.
    pub const GROUPS: [&'static str; 8] = [
        "primary", "secondary", "accent", "success", "warning", "error", "info", "neutral",
    ];

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&ColorScale> {
        Some(match name {
            "primary" => &self.primary,
            "secondary" => &self.secondary,
            "accent" => &self.accent,
            "success" => &self.success,
            "warning" => &self.warning,
            "error" => &self.error,
            "info" => &self.info,
            "neutral" => &self.neutral,
            _ => return None,
        })
    }

    pub fn groups(&self) -> impl Iterator<Item = (&'static str, &ColorScale)> {
        [
            &self.primary, &self.secondary, &self.accent, &self.success,
            &self.warning, &self.error, &self.info, &self.neutral,
        ]
        .into_iter()
        .enumerate()
        .map(|(i, scale)| (Self::GROUPS[i], scale))
    }

    /// Light (`neutral.50`) or dark (`neutral.950`) text, whichever reads
    /// better on `background`.
    #[must_use]
    pub fn text_on(&self, background: Rgb) -> Rgb {
        pick_best_contrast_text(
            background,
            self.neutral[Shade::S50],
            self.neutral[Shade::S950],
        )
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Semantic groups: hue and base saturation, in draw order.
const SEMANTIC: [(f64, f64); 4] = [
    (140.0, 60.0), // success
    (40.0, 80.0),  // warning
    (0.0, 70.0),   // error
    (210.0, 60.0), // info
];

const NEUTRAL_SATURATION: f64 = 10.0;

/// Generate one eleven-step scale. Consumes 22 draws.
pub fn generate_color_scale(
    hue: f64,
    saturation: f64,
    theme: &Theme,
    seq: &mut Sequence,
) -> ColorScale {
    let base_sat = saturation + theme.saturation_boost * 100.0;
    let shades = Shade::ALL.map(|shade| {
        let hue_jitter = seq.next_float(-5.0, 5.0);
        let actual_hue = (hue + hue_jitter + 360.0).rem_euclid(360.0);

        let sat_jitter = seq.next_float(-5.0, 5.0);
        let actual_sat = (base_sat + sat_jitter).clamp(0.0, 100.0);

        hsl_to_rgb(actual_hue, actual_sat, shade.lightness())
    });
    ColorScale { shades }
}

/// Base saturation for theme-hue groups.
#[must_use]
pub const fn base_saturation(theme: &Theme) -> f64 {
    match theme.contrast {
        ContrastLevel::High => 80.0,
        _ => 60.0,
    }
}

/// Build the full color set for `(theme, seed)`.
#[must_use]
pub fn generate_colors(theme: &Theme, seed: &str) -> ColorSet {
    let mut seq = Sequence::new(seed);
    let sat = base_saturation(theme);

    let primary = generate_color_scale(theme.primary_hue, sat, theme, &mut seq);
    let secondary = generate_color_scale(theme.secondary_hue, sat, theme, &mut seq);
    let accent = generate_color_scale(theme.accent_hue, sat, theme, &mut seq);

    let [success, warning, error, info] =
        SEMANTIC.map(|(hue, sat)| generate_color_scale(hue, sat, theme, &mut seq));

    let neutral_hue = theme.primary_hue + seq.next_float(-10.0, 10.0);
    let neutral = generate_color_scale(neutral_hue, NEUTRAL_SATURATION, theme, &mut seq);

    tracing::debug!(theme = %theme.name, seed, primary_500 = %primary[Shade::S500], "generated colors");

    ColorSet { primary, secondary, accent, success, warning, error, info, neutral }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{builtin_names, builtin_theme};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn theme(name: &str) -> Theme {
        builtin_theme(name).unwrap()
    }

    #[test]
    fn shade_labels_in_order() {
        let labels: Vec<_> = Shade::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950"]
        );
    }

    #[test]
    fn scale_consumes_22_draws() {
        let t = theme("minimal");
        let mut a = Sequence::new("draws");
        let _ = generate_color_scale(200.0, 60.0, &t, &mut a);
        let mut b = Sequence::new("draws");
        for _ in 0..22 {
            b.next_f64();
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn cyberpunk_primary_500_is_pinned() {
        let colors = generate_colors(&theme("cyberpunk"), "hackathon");
        assert_eq!(colors.primary[Shade::S500].to_hex(), "#ab00ff");
    }

    #[test]
    fn minimal_primary_500_is_pinned() {
        let colors = generate_colors(&theme("minimal"), "hackathon");
        assert_eq!(colors.primary[Shade::S500].to_hex(), "#4f6fb0");
    }

    #[test]
    fn cyberpunk_neutral_extremes_are_pinned() {
        let colors = generate_colors(&theme("cyberpunk"), "hackathon");
        assert_eq!(colors.neutral[Shade::S50].to_hex(), "#f3edf7");
        assert_eq!(colors.neutral[Shade::S950].to_hex(), "#0e0811");
    }

    #[test]
    fn deterministic_for_same_seed() {
        let t = theme("cyberpunk");
        assert_eq!(generate_colors(&t, "hackathon"), generate_colors(&t, "hackathon"));
    }

    #[test]
    fn themes_differ_for_same_seed() {
        let a = generate_colors(&theme("cyberpunk"), "hackathon");
        let b = generate_colors(&theme("minimal"), "hackathon");
        assert_ne!(a.primary[Shade::S500], b.primary[Shade::S500]);
    }

    #[test]
    fn seeds_differ_for_same_theme() {
        let t = theme("nature");
        assert_ne!(generate_colors(&t, "one"), generate_colors(&t, "two"));
    }

    #[test]
    fn lightness_is_monotonic_for_all_catalog_themes() {
        for name in builtin_names() {
            for seed in ["monotonic", "hackathon", "", "1985", "ünïcode"] {
                assert_monotonic(&generate_colors(&theme(name), seed), &format!("{name}/{seed:?}"));
            }
        }
    }

    fn assert_monotonic(colors: &ColorSet, label: &str) {
        for (group, scale) in colors.groups() {
            let ls: Vec<f64> = scale.iter().map(|(_, c)| c.to_hsl().l).collect();
            for pair in ls.windows(2) {
                assert!(pair[0] >= pair[1], "{label} {group} lightness not decreasing: {ls:?}");
            }
        }
    }

    proptest! {
        #[test]
        fn lightness_is_monotonic_for_any_seed(
            seed in ".{0,24}",
            name in prop::sample::select(builtin_names().collect::<Vec<_>>()),
        ) {
            assert_monotonic(&generate_colors(&theme(name), &seed), &format!("{name}/{seed:?}"));
        }
    }

    #[test]
    fn serializes_shades_in_step_order() {
        let colors = generate_colors(&theme("arctic"), "order");
        let text = serde_json::to_string(&colors.primary).unwrap();
        assert!(text.starts_with("{\"50\":\"#"), "{text}");
        assert!(text.find("\"950\"").unwrap() > text.find("\"900\"").unwrap());
    }

    #[test]
    fn group_lookup() {
        let colors = generate_colors(&theme("forest"), "x");
        for name in ColorSet::GROUPS {
            assert!(colors.group(name).is_some(), "missing {name}");
        }
        assert!(colors.group("tertiary").is_none());
        assert_eq!(colors.groups().count(), 8);
    }

    #[test]
    fn text_on_primary_picks_readable_side() {
        let colors = generate_colors(&theme("cyberpunk"), "hackathon");
        let bg = colors.primary[Shade::S500];
        assert_eq!(colors.text_on(bg), colors.neutral[Shade::S50]);
        assert_eq!(colors.text_on(colors.neutral[Shade::S50]), colors.neutral[Shade::S950]);
    }
}
