//! The assembled design system.
//!
//! Colors, typography and spacing each build their own [`Sequence`] from
//! the seed, so generating one subsystem never shifts another's draws.
//! Component tokens are optional and derived from the other three.
//!
//! [`Sequence`]: crate::sequence::Sequence

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::components::{ComponentTokens, generate_component_tokens};
use crate::palette::{ColorSet, generate_colors};
use crate::spacing::{SpacingTokens, generate_spacing_tokens};
use crate::theme::Theme;
use crate::typography::{Typography, generate_typography};

/// Name written into every generated artifact.
pub const GENERATOR: &str = "Atlas";

/// Provenance stamped on a design system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub generator: &'static str,
    pub version: &'static str,
    pub generated: DateTime<Utc>,
}

impl Meta {
    #[must_use]
    pub const fn at(generated: DateTime<Utc>) -> Self {
        Self { generator: GENERATOR, version: env!("CARGO_PKG_VERSION"), generated }
    }
}

/// Where the theme record came from, so it can be requested again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ThemeSource {
    /// Built-in catalog, by key.
    #[default]
    Catalog,
    /// Custom theme JSON at this path.
    File(PathBuf),
}

/// Every token generated for one `(theme, seed)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignSystem {
    pub meta: Meta,
    /// Key the theme was requested by (`cyberpunk`, or a custom name).
    pub theme: String,
    pub seed: String,
    pub colors: ColorSet,
    pub typography: Typography,
    pub spacing: SpacingTokens,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentTokens>,
    /// The resolved theme record. Not part of the token output.
    #[serde(skip)]
    pub profile: Theme,
    #[serde(skip)]
    pub source: ThemeSource,
}

impl DesignSystem {
    /// Generate with the current time as the timestamp.
    #[must_use]
    pub fn generate(theme_key: &str, theme: &Theme, seed: &str, include_components: bool) -> Self {
        Self::generate_at(theme_key, theme, seed, include_components, Utc::now())
    }

    /// Generate with an explicit timestamp. Equal inputs give equal output.
    #[must_use]
    pub fn generate_at(
        theme_key: &str,
        theme: &Theme,
        seed: &str,
        include_components: bool,
        at: DateTime<Utc>,
    ) -> Self {
        let colors = generate_colors(theme, seed);
        let typography = generate_typography(theme, seed);
        let spacing = generate_spacing_tokens(theme, seed);
        let components = include_components
            .then(|| generate_component_tokens(&colors, &typography, &spacing, theme));

        tracing::info!(theme = theme_key, seed, include_components, "generated design system");

        Self {
            meta: Meta::at(at),
            theme: theme_key.to_owned(),
            seed: seed.to_owned(),
            colors,
            typography,
            spacing,
            components,
            profile: theme.clone(),
            source: ThemeSource::Catalog,
        }
    }

    /// Mark the theme as loaded from a custom file.
    #[must_use]
    pub fn with_theme_file(self, path: impl Into<PathBuf>) -> Self {
        Self { source: ThemeSource::File(path.into()), ..self }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_theme;
    use chrono::TimeZone;

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn components_are_optional() {
        let t = builtin_theme("minimal").unwrap();
        let with = DesignSystem::generate_at("minimal", &t, "s", true, epoch());
        let without = DesignSystem::generate_at("minimal", &t, "s", false, epoch());
        assert!(with.components.is_some());
        assert!(without.components.is_none());
        assert_eq!(with.colors, without.colors);

        let json = serde_json::to_value(&without).unwrap();
        assert!(json.get("components").is_none());
        assert!(json.get("profile").is_none());
    }

    #[test]
    fn meta_carries_crate_version() {
        let t = builtin_theme("forest").unwrap();
        let ds = DesignSystem::generate_at("forest", &t, "s", false, epoch());
        let json = serde_json::to_value(&ds).unwrap();
        assert_eq!(json["meta"]["generator"], GENERATOR);
        assert_eq!(json["meta"]["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["meta"]["generated"], "2025-01-01T00:00:00Z");
        assert_eq!(json["theme"], "forest");
        assert_eq!(json["seed"], "s");
    }

    #[test]
    fn theme_source_defaults_to_catalog_and_stays_out_of_json() {
        let t = builtin_theme("minimal").unwrap();
        let ds = DesignSystem::generate_at("brand", &t, "s", false, epoch());
        assert_eq!(ds.source, ThemeSource::Catalog);

        let from_file = ds.clone().with_theme_file("/themes/brand.json");
        assert_eq!(from_file.source, ThemeSource::File(PathBuf::from("/themes/brand.json")));
        assert_eq!(
            serde_json::to_string(&ds).unwrap(),
            serde_json::to_string(&from_file).unwrap()
        );
    }

    #[test]
    fn top_level_key_order() {
        let t = builtin_theme("arctic").unwrap();
        let ds = DesignSystem::generate_at("arctic", &t, "s", true, epoch());
        let text = serde_json::to_string(&ds).unwrap();
        let pos = |k: &str| text.find(&format!("\"{k}\":")).unwrap();
        assert!(pos("meta") < pos("theme"));
        assert!(pos("seed") < pos("colors"));
        assert!(pos("colors") < pos("typography"));
        assert!(pos("spacing") < pos("components"));
    }
}
