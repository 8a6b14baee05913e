//! Typography: modular font-size scale, line heights, weights and fonts.
//!
//! The size scale is `base * ratio^k` for `k` in `-2..=6`, labelled `xs`
//! through `5xl`. The ratio gets one jitter draw in `[-0.02, 0.02)`; line
//! heights share one more in `[-0.05, 0.05)`. Everything else is static.

use serde::Serialize;

use crate::sequence::Sequence;
use crate::theme::{FontStyle, Theme};
use crate::tokens::{Size, TokenMap, round1, round2};

/// Base font size in px.
pub const BASE_FONT_SIZE: f64 = 16.0;

/// Minor third.
pub const DEFAULT_RATIO: f64 = 1.25;

/// Perfect fourth, used by high-contrast themes.
pub const HIGH_CONTRAST_RATIO: f64 = 1.333;

/// Size labels and their exponent.
const SIZE_STEPS: [(&str, i32); 9] = [
    ("xs", -2),
    ("sm", -1),
    ("base", 0),
    ("lg", 1),
    ("xl", 2),
    ("2xl", 3),
    ("3xl", 4),
    ("4xl", 5),
    ("5xl", 6),
];

const LINE_HEIGHTS: [(&str, f64); 5] = [
    ("tight", 1.25),
    ("snug", 1.375),
    ("normal", 1.5),
    ("relaxed", 1.625),
    ("loose", 2.0),
];

/// Font families for one style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontStack {
    pub primary: &'static str,
    pub heading: &'static str,
    pub mono: &'static str,
}

/// Font stacks per [`FontStyle`].
#[must_use]
pub const fn font_stack(style: FontStyle) -> FontStack {
    match style {
        FontStyle::Geometric => FontStack {
            primary: r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif"#,
            heading: r#""Space Grotesk", -apple-system, BlinkMacSystemFont, sans-serif"#,
            mono: r#""JetBrains Mono", "Fira Code", Consolas, Monaco, monospace"#,
        },
        FontStyle::SansSerif => FontStack {
            primary: r#"system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#,
            heading: r#"system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#,
            mono: r#"ui-monospace, "Cascadia Code", Menlo, Monaco, monospace"#,
        },
        FontStyle::Humanist => FontStack {
            primary: r#""Open Sans", "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif"#,
            heading: r#""Merriweather", Georgia, "Times New Roman", serif"#,
            mono: r#""Source Code Pro", Consolas, Monaco, monospace"#,
        },
        FontStyle::Rounded => FontStack {
            primary: r#"ui-rounded, "SF Pro Rounded", "Nunito", "Helvetica Neue", Arial, sans-serif"#,
            heading: r#"ui-rounded, "SF Pro Rounded", "Nunito", sans-serif"#,
            mono: r#""Courier Prime", "Courier New", Courier, monospace"#,
        },
    }
}

/// Complete typography tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub fonts: FontStack,
    pub font_size: TokenMap<Size>,
    pub line_height: TokenMap<Size>,
    pub letter_spacing: TokenMap<&'static str>,
    pub font_weight: TokenMap<u16>,
}

impl Typography {
    /// Font size in px for a scale label.
    #[must_use]
    pub fn size(&self, label: &str) -> Option<f64> {
        self.font_size.get(label).map(|s| s.0)
    }

    #[must_use]
    pub fn weight(&self, label: &str) -> Option<u16> {
        self.font_weight.get(label).copied()
    }
}

/// Size scale for an exact ratio, no jitter.
#[must_use]
pub fn type_scale(base_size: f64, ratio: f64) -> TokenMap<Size> {
    TokenMap::from_entries(SIZE_STEPS.map(|(label, k)| {
        let size = match k {
            0 => base_size,
            k if k < 0 => round1(base_size / ratio.powi(-k)),
            k => round1(base_size * ratio.powi(k)),
        };
        (label, Size(size))
    }))
}

/// Size scale with the ratio jittered by one draw.
pub fn generate_type_scale(base_size: f64, ratio: f64, seq: &mut Sequence) -> TokenMap<Size> {
    let actual = ratio + seq.next_float(-0.02, 0.02);
    type_scale(base_size, actual)
}

/// Line heights: `none` is always 1, the rest share one jitter draw.
pub fn generate_line_heights(seq: &mut Sequence) -> TokenMap<Size> {
    let jitter = seq.next_float(-0.05, 0.05);
    let mut map = TokenMap::from_entries([("none", Size(1.0))]);
    for (label, base) in LINE_HEIGHTS {
        map.set(label, Size(round2(base + jitter)));
    }
    map
}

#[must_use]
pub fn letter_spacing() -> TokenMap<&'static str> {
    TokenMap::from_entries([
        ("tighter", "-0.05em"),
        ("tight", "-0.025em"),
        ("normal", "0em"),
        ("wide", "0.025em"),
        ("wider", "0.05em"),
        ("widest", "0.1em"),
    ])
}

#[must_use]
pub fn font_weights() -> TokenMap<u16> {
    TokenMap::from_entries([
        ("thin", 100),
        ("extralight", 200),
        ("light", 300),
        ("normal", 400),
        ("medium", 500),
        ("semibold", 600),
        ("bold", 700),
        ("extrabold", 800),
        ("black", 900),
    ])
}

/// Scale ratio for a theme.
#[must_use]
pub fn scale_ratio(theme: &Theme) -> f64 {
    if theme.is_high_contrast() { HIGH_CONTRAST_RATIO } else { DEFAULT_RATIO }
}

/// Typography for `(theme, seed)`. Owns its own sequence built from the
/// unsalted seed.
#[must_use]
pub fn generate_typography(theme: &Theme, seed: &str) -> Typography {
    let mut seq = Sequence::new(seed);
    let font_size = generate_type_scale(BASE_FONT_SIZE, scale_ratio(theme), &mut seq);
    let line_height = generate_line_heights(&mut seq);

    Typography {
        fonts: font_stack(theme.font_style),
        font_size,
        line_height,
        letter_spacing: letter_spacing(),
        font_weight: font_weights(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_theme;
    use crate::sequence::HALF_DRAW_STATE;

    fn sizes(map: &TokenMap<Size>) -> Vec<f64> {
        map.iter().map(|(_, s)| s.0).collect()
    }

    #[test]
    fn zero_jitter_scale_at_16_and_1_25() {
        let mut seq = Sequence::from_state(HALF_DRAW_STATE);
        let scale = generate_type_scale(16.0, 1.25, &mut seq);
        assert_eq!(scale.get("base"), Some(&Size(16.0)));
        assert_eq!(scale.get("lg"), Some(&Size(20.0)));
        assert_eq!(scale.get("sm"), Some(&Size(12.8)));
        assert_eq!(scale.get("xs"), Some(&Size(10.2)));
        assert_eq!(scale.get("xl"), Some(&Size(25.0)));
    }

    #[test]
    fn nine_labels_in_order() {
        let scale = type_scale(16.0, 1.25);
        assert_eq!(
            scale.labels().collect::<Vec<_>>(),
            ["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl"]
        );
    }

    #[test]
    fn scale_is_strictly_increasing() {
        let mut seq = Sequence::new("grow");
        let s = sizes(&generate_type_scale(16.0, 1.333, &mut seq));
        assert!(s.windows(2).all(|w| w[0] < w[1]), "{s:?}");
    }

    #[test]
    fn cyberpunk_hackathon_scale() {
        let t = builtin_theme("cyberpunk").unwrap();
        let typo = generate_typography(&t, "hackathon");
        assert_eq!(
            sizes(&typo.font_size),
            [8.9, 12.0, 16.0, 21.4, 28.6, 38.3, 51.2, 68.5, 91.7]
        );
    }

    #[test]
    fn line_heights_share_one_jitter() {
        let mut seq = Sequence::from_state(HALF_DRAW_STATE);
        let lh = generate_line_heights(&mut seq);
        assert_eq!(
            sizes(&lh),
            [1.0, 1.25, 1.38, 1.5, 1.63, 2.0]
        );
    }

    #[test]
    fn line_heights_within_jitter() {
        let mut seq = Sequence::new("lh");
        let lh = generate_line_heights(&mut seq);
        let normal = lh.get("normal").unwrap().0;
        assert!((1.45..=1.55).contains(&normal), "{normal}");
    }

    #[test]
    fn fonts_follow_style() {
        let t = builtin_theme("nature").unwrap();
        let typo = generate_typography(&t, "x");
        assert!(typo.fonts.heading.contains("Merriweather"));
        assert_eq!(typo.weight("semibold"), Some(600));
        assert_eq!(typo.letter_spacing.get("widest"), Some(&"0.1em"));
    }

    #[test]
    fn ratio_follows_contrast() {
        assert!((scale_ratio(&builtin_theme("cyberpunk").unwrap()) - 1.333).abs() < f64::EPSILON);
        assert!((scale_ratio(&builtin_theme("minimal").unwrap()) - 1.25).abs() < f64::EPSILON);
    }

    #[test]
    fn deterministic() {
        let t = builtin_theme("sunset").unwrap();
        assert_eq!(generate_typography(&t, "abc"), generate_typography(&t, "abc"));
    }
}
