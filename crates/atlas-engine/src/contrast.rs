//! WCAG contrast resolution for text colors.
//!
//! Adjusts a candidate color's HSL lightness, one point at a time, until it
//! reaches a target contrast ratio against a background:
//!
//! - Dark background (luminance < 0.5): lighten the candidate.
//! - Light background: darken it.
//! - At most 50 steps. If none reach the target, fall back to pure black
//!   (light background) or pure white (dark background).
//!
//! The fallback is the policy for unreachable targets: a result is always
//! produced, and it is the same result every time.

use crate::color::{Hsl, Rgb, contrast_ratio, relative_luminance};

/// WCAG AA threshold for body text.
pub const DEFAULT_TARGET_RATIO: f64 = 4.5;

/// Largest ratio WCAG can express (black on white).
pub const MAX_CONTRAST_RATIO: f64 = 21.0;

/// Lightness steps tried before falling back.
const MAX_STEPS: u32 = 50;

/// Whether `background` counts as dark for search direction and fallback.
#[must_use]
pub fn is_dark_background(background: Rgb) -> bool {
    relative_luminance(background) < 0.5
}

/// Return a lightness for `color` that meets `target` contrast against
/// `background`, or the 0/100 fallback when 50 unit steps are not enough.
///
/// An already compliant color is returned unchanged.
#[must_use]
pub fn ensure_contrast(color: Hsl, background: Rgb, target: f64) -> f64 {
    if contrast_ratio(color.to_rgb(), background) >= target {
        return color.l;
    }

    let dark = is_dark_background(background);
    let dir = if dark { 1.0 } else { -1.0 };

    for i in 1..=MAX_STEPS {
        let l = (color.l + f64::from(i) * dir).clamp(0.0, 100.0);
        if contrast_ratio(color.with_lightness(l).to_rgb(), background) >= target {
            return l;
        }
    }

    tracing::debug!(
        %background,
        target,
        lightness = color.l,
        "contrast search exhausted, falling back to {}",
        if dark { "white" } else { "black" }
    );
    if dark { 100.0 } else { 0.0 }
}

/// Decode a stored shade, resolve its lightness against `background`, and
/// re-encode it. Hue and saturation are kept.
#[must_use]
pub fn accessible_shade(shade: Rgb, background: Rgb, target: f64) -> Rgb {
    let hsl = shade.to_hsl();
    if contrast_ratio(shade, background) >= target {
        return shade;
    }
    hsl.with_lightness(ensure_contrast(hsl, background, target)).to_rgb()
}

/// Whichever of two candidates contrasts more with `background`.
/// Ties go to `first`.
#[must_use]
pub fn pick_best_contrast_text(background: Rgb, first: Rgb, second: Rgb) -> Rgb {
    if contrast_ratio(background, first) >= contrast_ratio(background, second) {
        first
    } else {
        second
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compliant_color_is_untouched() {
        let c = Hsl::new(220.0, 60.0, 20.0);
        assert!((ensure_contrast(c, Rgb::WHITE, 4.5) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn darkens_on_light_background() {
        let c = Hsl::new(220.0, 60.0, 70.0);
        let l = ensure_contrast(c, Rgb::WHITE, 4.5);
        assert!(l < 70.0, "should have darkened: {l}");
        assert!(contrast_ratio(c.with_lightness(l).to_rgb(), Rgb::WHITE) >= 4.5);
        // First compliant step, so one point lighter must fail.
        assert!(contrast_ratio(c.with_lightness(l + 1.0).to_rgb(), Rgb::WHITE) < 4.5);
    }

    #[test]
    fn lightens_on_dark_background() {
        let bg = Rgb::new(0x12, 0x12, 0x1a);
        let c = Hsl::new(280.0, 80.0, 30.0);
        let l = ensure_contrast(c, bg, 4.5);
        assert!(l > 30.0, "should have lightened: {l}");
        assert!(contrast_ratio(c.with_lightness(l).to_rgb(), bg) >= 4.5);
    }

    #[test]
    fn falls_back_to_black_on_light_background() {
        // 50 steps down from 100 only reach 50, which is far from 21:1 on white.
        let c = Hsl::new(60.0, 100.0, 100.0);
        assert!(ensure_contrast(c, Rgb::WHITE, 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn falls_back_to_white_on_dark_background() {
        let c = Hsl::new(0.0, 0.0, 0.0);
        let l = ensure_contrast(c, Rgb::BLACK, 21.0);
        assert!((l - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accessible_shade_keeps_compliant_shade() {
        let shade = Rgb::new(0x10, 0x20, 0x60);
        assert_eq!(accessible_shade(shade, Rgb::WHITE, 4.5), shade);
    }

    #[test]
    fn accessible_shade_meets_target() {
        let shade = Rgb::new(0x99, 0xbb, 0xff);
        let fixed = accessible_shade(shade, Rgb::WHITE, 4.5);
        assert!(contrast_ratio(fixed, Rgb::WHITE) >= 4.5);
    }

    #[test]
    fn best_text_prefers_higher_ratio() {
        let light = Rgb::new(0xf3, 0xed, 0xf7);
        let dark = Rgb::new(0x0e, 0x08, 0x11);
        assert_eq!(pick_best_contrast_text(Rgb::new(0xab, 0x00, 0xff), light, dark), light);
        assert_eq!(pick_best_contrast_text(Rgb::new(0xee, 0xee, 0xee), light, dark), dark);
    }

    #[test]
    fn best_text_tie_goes_first() {
        let a = Rgb::new(1, 2, 3);
        assert_eq!(pick_best_contrast_text(Rgb::WHITE, a, a), a);
    }

    proptest! {
        #[test]
        fn resolved_or_fallback(
            h in 0.0f64..360.0,
            s in 0.0f64..=100.0,
            l in 0.0f64..=100.0,
            bg: (u8, u8, u8),
            target in 1.0f64..=MAX_CONTRAST_RATIO,
        ) {
            let bg = Rgb::new(bg.0, bg.1, bg.2);
            let c = Hsl::new(h, s, l);
            let out = ensure_contrast(c, bg, target);
            let ok = contrast_ratio(c.with_lightness(out).to_rgb(), bg) >= target;
            prop_assert!(ok || out == 0.0 || out == 100.0, "l={} out={}", l, out);
            prop_assert!((0.0..=100.0).contains(&out));
        }
    }
}
