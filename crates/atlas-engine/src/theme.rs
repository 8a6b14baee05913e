//! Theme records: the static parameters a design system is derived from.
//!
//! A theme is three hues plus a handful of mood knobs. Built-in themes come
//! from [`crate::builtin`]; custom ones are parsed from JSON with
//! [`Theme::from_json`]. Either way the record is never mutated after load.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme '{name}' not found. Available: {}", available.join(", "))]
    NotFound { name: String, available: Vec<&'static str> },
    #[error("custom theme missing required field: {0}")]
    MissingField(&'static str),
    #[error("custom theme field {field} has invalid value '{value}' (expected {expected})")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("failed to parse custom theme")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How punchy the theme is. `High` raises base saturation, steepens the
/// type scale and darkens shadows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastLevel {
    Low,
    #[default]
    Medium,
    High,
    Extreme,
}

impl ContrastLevel {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Low, Self::Medium, Self::High, Self::Extreme]
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

/// Font-stack bundle, which also steers border roundness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    Geometric,
    #[default]
    SansSerif,
    Humanist,
    Rounded,
}

impl FontStyle {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Geometric => "geometric",
            Self::SansSerif => "sans-serif",
            Self::Humanist => "humanist",
            Self::Rounded => "rounded",
        }
    }

    /// Parse a style name; anything unrecognized is sans-serif.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        [Self::Geometric, Self::SansSerif, Self::Humanist, Self::Rounded]
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowType {
    Hard,
    Soft,
}

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

/// Style overrides merged into component tokens after composition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_type: Option<ShadowType>,
    #[serde(default)]
    pub show_borders: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// CSS lengths accepted in archetype fields: `0`, `4px`, `0.5rem`, `1em`.
static CSS_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|\d+(\.\d+)?(px|rem|em))$").expect("CSS length pattern compiles")
});

impl Archetype {
    fn validate(&self) -> ThemeResult<()> {
        let lengths = [
            ("archetype.borderWidth", &self.border_width),
            ("archetype.borderRadius", &self.border_radius),
            ("archetype.blur", &self.blur),
        ];
        for (field, value) in lengths {
            if let Some(v) = value.as_deref().filter(|v| !CSS_LENGTH.is_match(v)) {
                return Err(ThemeError::InvalidValue {
                    field,
                    value: v.to_owned(),
                    expected: "a CSS length such as 4px or 0.5rem",
                });
            }
        }
        if let Some(o) = self.opacity.filter(|o| !(0.0..=1.0).contains(o)) {
            return Err(ThemeError::InvalidValue {
                field: "archetype.opacity",
                value: o.to_string(),
                expected: "a number between 0 and 1",
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Immutable theme configuration.
///
/// Serializes to the same shape [`Theme::from_json`] reads, so a built-in
/// theme can be dumped, edited, and loaded back as a custom theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub mood: String,
    /// Degrees, 0–360.
    pub primary_hue: f64,
    pub secondary_hue: f64,
    pub accent_hue: f64,
    /// Signed fraction added to base saturation (scaled by 100).
    pub saturation_boost: f64,
    #[serde(rename = "contrastRatio")]
    pub contrast: ContrastLevel,
    pub font_style: FontStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<Archetype>,
}

/// On-disk shape of a custom theme. Everything but `primaryHue` is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeFile {
    name: Option<String>,
    description: Option<String>,
    mood: Option<String>,
    primary_hue: Option<f64>,
    secondary_hue: Option<f64>,
    accent_hue: Option<f64>,
    saturation_boost: Option<f64>,
    contrast_ratio: Option<String>,
    font_style: Option<String>,
    archetype: Option<Archetype>,
}

impl Theme {
    /// Parse and validate a custom theme from JSON text.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, a missing `primaryHue`, non-finite numbers,
    /// an unknown `contrastRatio`, or archetype values that are not CSS
    /// lengths.
    pub fn from_json(text: &str) -> ThemeResult<Self> {
        let file: ThemeFile = serde_json::from_str(text)?;
        Self::from_file(file)
    }

    fn from_file(file: ThemeFile) -> ThemeResult<Self> {
        let primary_hue = file.primary_hue.ok_or(ThemeError::MissingField("primaryHue"))?;
        let primary_hue = finite("primaryHue", primary_hue)?;
        let secondary_hue = match file.secondary_hue {
            Some(h) => finite("secondaryHue", h)?,
            None => (primary_hue + 120.0) % 360.0,
        };
        let accent_hue = match file.accent_hue {
            Some(h) => finite("accentHue", h)?,
            None => (primary_hue + 240.0) % 360.0,
        };
        let saturation_boost = finite("saturationBoost", file.saturation_boost.unwrap_or(0.0))?;

        let contrast = match file.contrast_ratio.as_deref() {
            None => ContrastLevel::default(),
            Some(name) => ContrastLevel::from_name(name).ok_or_else(|| ThemeError::InvalidValue {
                field: "contrastRatio",
                value: name.to_owned(),
                expected: "one of low, medium, high, extreme",
            })?,
        };
        let font_style = file
            .font_style
            .as_deref()
            .map(FontStyle::from_name_or_default)
            .unwrap_or_default();

        if let Some(arch) = &file.archetype {
            arch.validate()?;
        }

        Ok(Self {
            name: file.name.unwrap_or_else(|| "Custom".to_owned()),
            description: file.description.unwrap_or_else(|| "Custom theme".to_owned()),
            mood: file.mood.unwrap_or_else(|| "custom".to_owned()),
            primary_hue,
            secondary_hue,
            accent_hue,
            saturation_boost,
            contrast,
            font_style,
            archetype: file.archetype,
        })
    }

    /// Pretty JSON in the custom-theme file format.
    ///
    /// # Errors
    ///
    /// Only if serialization itself fails, which plain data never does.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Whether the theme asks for the high-contrast treatment.
    #[must_use]
    pub fn is_high_contrast(&self) -> bool {
        self.contrast == ContrastLevel::High
    }
}

fn finite(field: &'static str, v: f64) -> ThemeResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ThemeError::InvalidValue {
            field,
            value: v.to_string(),
            expected: "a finite number",
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_custom_theme_gets_defaults() {
        let t = Theme::from_json(r#"{ "primaryHue": 300 }"#).unwrap();
        assert_eq!(t.name, "Custom");
        assert!((t.secondary_hue - 60.0).abs() < 1e-9);
        assert!((t.accent_hue - 180.0).abs() < 1e-9);
        assert!(t.saturation_boost.abs() < f64::EPSILON);
        assert_eq!(t.contrast, ContrastLevel::Medium);
        assert_eq!(t.font_style, FontStyle::SansSerif);
        assert!(t.archetype.is_none());
    }

    #[test]
    fn missing_primary_hue_names_the_field() {
        let err = Theme::from_json(r#"{ "name": "Broken" }"#).unwrap_err();
        assert!(matches!(err, ThemeError::MissingField("primaryHue")));
        assert_eq!(err.to_string(), "custom theme missing required field: primaryHue");
    }

    #[test]
    fn full_custom_theme() {
        let t = Theme::from_json(
            r#"{
                "name": "Brand",
                "primaryHue": 12.5,
                "secondaryHue": 200,
                "accentHue": 90,
                "saturationBoost": 0.25,
                "contrastRatio": "high",
                "fontStyle": "rounded",
                "archetype": { "showBorders": true, "borderWidth": "3px", "shadowType": "hard" }
            }"#,
        )
        .unwrap();
        assert_eq!(t.name, "Brand");
        assert!(t.is_high_contrast());
        assert_eq!(t.font_style, FontStyle::Rounded);
        let arch = t.archetype.unwrap();
        assert!(arch.show_borders);
        assert_eq!(arch.border_width.as_deref(), Some("3px"));
        assert_eq!(arch.shadow_type, Some(ShadowType::Hard));
    }

    #[test]
    fn unknown_font_style_falls_back() {
        let t = Theme::from_json(r#"{ "primaryHue": 10, "fontStyle": "gothic" }"#).unwrap();
        assert_eq!(t.font_style, FontStyle::SansSerif);
    }

    #[test]
    fn unknown_contrast_is_rejected() {
        let err = Theme::from_json(r#"{ "primaryHue": 10, "contrastRatio": "loud" }"#).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidValue { field: "contrastRatio", .. }));
    }

    #[test]
    fn bad_archetype_length_is_rejected() {
        let err = Theme::from_json(
            r#"{ "primaryHue": 10, "archetype": { "borderWidth": "thick" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidValue { field: "archetype.borderWidth", .. }));
    }

    #[test]
    fn archetype_opacity_range() {
        let err = Theme::from_json(r#"{ "primaryHue": 10, "archetype": { "opacity": 1.5 } }"#)
            .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidValue { field: "archetype.opacity", .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(Theme::from_json("{ nope"), Err(ThemeError::Parse(_))));
    }

    #[test]
    fn css_length_pattern() {
        for ok in ["0", "1px", "0.5rem", "10px", "2em"] {
            assert!(CSS_LENGTH.is_match(ok), "{ok}");
        }
        for bad in ["", "px", "4", "-1px", "4 px", "1.px"] {
            assert!(!CSS_LENGTH.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn builtin_themes_reload_from_their_json() {
        for (key, theme) in crate::builtin::builtin_themes() {
            let text = theme.to_json().unwrap();
            assert_eq!(Theme::from_json(&text).unwrap(), theme, "{key}");
        }
    }

    #[test]
    fn json_uses_file_field_names() {
        let t = Theme::from_json(
            r#"{ "primaryHue": 10, "contrastRatio": "low", "fontStyle": "sans-serif",
                 "archetype": { "blur": "8px" } }"#,
        )
        .unwrap();
        let v: serde_json::Value = serde_json::from_str(&t.to_json().unwrap()).unwrap();
        assert_eq!(v["primaryHue"], 10.0);
        assert_eq!(v["contrastRatio"], "low");
        assert_eq!(v["fontStyle"], "sans-serif");
        assert_eq!(v["archetype"]["blur"], "8px");
        assert!(v["archetype"].get("borderWidth").is_none());
    }

    #[test]
    fn contrast_names_round_trip() {
        for c in [ContrastLevel::Low, ContrastLevel::Medium, ContrastLevel::High, ContrastLevel::Extreme] {
            assert_eq!(ContrastLevel::from_name(c.name()), Some(c));
        }
    }
}
