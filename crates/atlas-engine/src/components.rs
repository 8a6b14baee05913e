//! Semantic component tokens for common UI widgets.
//!
//! Pure composition: every value is looked up from the generated colors,
//! typography and spacing. Nothing here draws from a sequence.
//!
//! ```text
//! component ─┬─ variant ─┬─ token = value
//!            │           └─ ...
//!            └─ ...
//! button.primary.bg = "#ab00ff"
//! ```
//!
//! Archetype overrides are applied last, field by field.

use serde::Serialize;

use crate::color::Rgb;
use crate::contrast::{DEFAULT_TARGET_RATIO, accessible_shade};
use crate::palette::{ColorScale, ColorSet, Shade};
use crate::spacing::SpacingTokens;
use crate::theme::Theme;
use crate::tokens::{TokenMap, TokenValue};
use crate::typography::{BASE_FONT_SIZE, Typography};

/// Token name → value for one variant (`button.primary`).
pub type Variant = TokenMap<TokenValue>;

/// Variant name → tokens for one component (`button`).
pub type Component = TokenMap<Variant>;

/// All component tokens, in composition order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ComponentTokens {
    components: TokenMap<Component>,
}

impl ComponentTokens {
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    #[must_use]
    pub fn variant(&self, component: &str, variant: &str) -> Option<&Variant> {
        self.component(component)?.get(variant)
    }

    /// Single token lookup, e.g. `("button", "primary", "bg")`.
    #[must_use]
    pub fn token(&self, component: &str, variant: &str, token: &str) -> Option<&TokenValue> {
        self.variant(component, variant)?.get(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Component)> {
        self.components.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Set one token if its component and variant exist.
    fn set(&mut self, component: &str, variant: &str, token: &'static str, value: TokenValue) {
        if let Some(v) = self
            .components
            .get_mut(component)
            .and_then(|c| c.get_mut(variant))
        {
            v.set(token, value);
        }
    }
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Borrowed view over the generated scales with typed lookups.
struct Sources<'a> {
    colors: &'a ColorSet,
    typography: &'a Typography,
    spacing: &'a SpacingTokens,
}

impl Sources<'_> {
    fn font_size(&self, label: &str) -> TokenValue {
        TokenValue::Number(self.typography.size(label).unwrap_or(BASE_FONT_SIZE))
    }

    fn font_weight(&self, label: &str) -> TokenValue {
        TokenValue::from(self.typography.weight(label).unwrap_or(400))
    }

    fn space(&self, label: &str) -> TokenValue {
        self.spacing.space(label).into()
    }

    /// Two-value padding, `"<y> <x>"`.
    fn padding(&self, y: &str, x: &str) -> TokenValue {
        format!("{} {}", self.spacing.space(y), self.spacing.space(x)).into()
    }

    fn radius(&self, label: &str) -> TokenValue {
        self.spacing.radius(label).into()
    }

    fn shadow(&self, label: &str) -> TokenValue {
        self.spacing.shadow(label).into()
    }

    fn z(&self, label: &str) -> TokenValue {
        self.spacing.z(label).into()
    }

    /// Readable text for a filled background.
    fn text_on(&self, background: Rgb) -> TokenValue {
        self.colors.text_on(background).into()
    }

    /// A shade pushed to body-text contrast against the lightest neutral.
    fn on_surface(&self, shade: Rgb) -> TokenValue {
        accessible_shade(shade, self.colors.neutral[Shade::S50], DEFAULT_TARGET_RATIO).into()
    }
}

fn border(width: &str, color: Rgb) -> TokenValue {
    format!("{width} solid {color}").into()
}

fn variant<const N: usize>(entries: [(&'static str, TokenValue); N]) -> Variant {
    TokenMap::from_entries(entries)
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

fn button(s: &Sources<'_>) -> Component {
    let c = s.colors;
    let filled = |scale: &ColorScale| {
        variant([
            ("bg", scale[Shade::S500].into()),
            ("bgHover", scale[Shade::S600].into()),
            ("bgActive", scale[Shade::S700].into()),
            ("text", s.text_on(scale[Shade::S500])),
            ("borderRadius", s.radius("md")),
            ("padding", s.padding("2.5", "6")),
            ("fontSize", s.font_size("base")),
            ("fontWeight", s.font_weight("semibold")),
            ("shadow", s.shadow("sm")),
        ])
    };

    TokenMap::from_entries([
        ("primary", filled(&c.primary)),
        ("secondary", filled(&c.secondary)),
        (
            "outline",
            variant([
                ("bg", "transparent".into()),
                ("bgHover", c.primary[Shade::S50].into()),
                ("bgActive", c.primary[Shade::S100].into()),
                ("text", s.on_surface(c.primary[Shade::S600])),
                ("border", border("2px", c.primary[Shade::S500])),
                ("borderRadius", s.radius("md")),
                ("padding", s.padding("2.5", "6")),
                ("fontSize", s.font_size("base")),
                ("fontWeight", s.font_weight("semibold")),
            ]),
        ),
        (
            "ghost",
            variant([
                ("bg", "transparent".into()),
                ("bgHover", c.neutral[Shade::S100].into()),
                ("bgActive", c.neutral[Shade::S200].into()),
                ("text", c.neutral[Shade::S700].into()),
                ("borderRadius", s.radius("md")),
                ("padding", s.padding("2.5", "6")),
                ("fontSize", s.font_size("base")),
                ("fontWeight", s.font_weight("medium")),
            ]),
        ),
    ])
}

fn input(s: &Sources<'_>) -> Component {
    let c = s.colors;
    TokenMap::from_entries([
        (
            "base",
            variant([
                ("bg", c.neutral[Shade::S50].into()),
                ("bgFocus", c.neutral[Shade::S50].into()),
                ("text", c.neutral[Shade::S900].into()),
                ("border", border("1px", c.neutral[Shade::S300])),
                ("borderFocus", border("2px", c.primary[Shade::S500])),
                ("borderRadius", s.radius("md")),
                ("padding", s.padding("2.5", "4")),
                ("fontSize", s.font_size("base")),
                ("placeholder", c.neutral[Shade::S400].into()),
                ("shadow", s.shadow("sm")),
                ("shadowFocus", format!("0 0 0 3px {}", c.primary[Shade::S100]).into()),
            ]),
        ),
        (
            "error",
            variant([
                ("border", border("2px", c.error[Shade::S500])),
                ("shadowFocus", format!("0 0 0 3px {}", c.error[Shade::S100]).into()),
            ]),
        ),
    ])
}

fn card(s: &Sources<'_>) -> Component {
    let c = s.colors;
    TokenMap::from_entries([
        (
            "base",
            variant([
                ("bg", c.neutral[Shade::S50].into()),
                ("border", border("1px", c.neutral[Shade::S200])),
                ("borderRadius", s.radius("lg")),
                ("padding", s.space("6")),
                ("shadow", s.shadow("md")),
            ]),
        ),
        (
            "elevated",
            variant([
                ("bg", c.neutral[Shade::S50].into()),
                ("borderRadius", s.radius("lg")),
                ("padding", s.space("6")),
                ("shadow", s.shadow("xl")),
            ]),
        ),
        (
            "outlined",
            variant([
                ("bg", "transparent".into()),
                ("border", border("2px", c.neutral[Shade::S300])),
                ("borderRadius", s.radius("lg")),
                ("padding", s.space("6")),
            ]),
        ),
    ])
}

fn badge(s: &Sources<'_>) -> Component {
    let c = s.colors;
    let tinted = |scale: &ColorScale| {
        variant([
            ("bg", scale[Shade::S100].into()),
            ("text", scale[Shade::S800].into()),
            ("borderRadius", s.radius("full")),
            ("padding", s.padding("1", "3")),
            ("fontSize", s.font_size("sm")),
            ("fontWeight", s.font_weight("semibold")),
        ])
    };
    TokenMap::from_entries([
        ("primary", tinted(&c.primary)),
        ("success", tinted(&c.success)),
        ("warning", tinted(&c.warning)),
        ("error", tinted(&c.error)),
    ])
}

fn alert(s: &Sources<'_>) -> Component {
    let c = s.colors;
    let tinted = |scale: &ColorScale| {
        variant([
            ("bg", scale[Shade::S50].into()),
            ("border", border("1px", scale[Shade::S200])),
            ("text", scale[Shade::S900].into()),
            ("borderRadius", s.radius("md")),
            ("padding", s.space("4")),
        ])
    };
    TokenMap::from_entries([
        ("info", tinted(&c.info)),
        ("success", tinted(&c.success)),
        ("warning", tinted(&c.warning)),
        ("error", tinted(&c.error)),
    ])
}

fn navigation(s: &Sources<'_>) -> Component {
    let c = s.colors;
    TokenMap::from_entries([
        (
            "nav",
            variant([
                ("bg", c.neutral[Shade::S900].into()),
                ("text", c.neutral[Shade::S100].into()),
                ("textHover", c.primary[Shade::S300].into()),
                ("borderBottom", border("1px", c.neutral[Shade::S800])),
                ("padding", s.padding("4", "6")),
                ("shadow", s.shadow("md")),
            ]),
        ),
        (
            "link",
            variant([
                ("text", s.on_surface(c.primary[Shade::S600])),
                ("textHover", c.primary[Shade::S700].into()),
                ("textActive", c.primary[Shade::S800].into()),
                ("textVisited", c.primary[Shade::S900].into()),
                ("fontSize", s.font_size("base")),
                ("fontWeight", s.font_weight("medium")),
            ]),
        ),
    ])
}

fn modal(s: &Sources<'_>) -> Component {
    let c = s.colors;
    TokenMap::from_entries([
        (
            "overlay",
            variant([("bg", "rgba(0, 0, 0, 0.5)".into()), ("zIndex", s.z("50"))]),
        ),
        (
            "container",
            variant([
                ("bg", c.neutral[Shade::S50].into()),
                ("borderRadius", s.radius("xl")),
                ("padding", s.space("8")),
                ("shadow", s.shadow("2xl")),
                ("maxWidth", "32rem".into()),
                ("width", "100%".into()),
                ("zIndex", s.z("50")),
            ]),
        ),
        (
            "header",
            variant([
                ("fontSize", s.font_size("xl")),
                ("fontWeight", s.font_weight("bold")),
                ("text", c.neutral[Shade::S900].into()),
                ("borderBottom", border("1px", c.neutral[Shade::S200])),
                ("paddingBottom", s.space("4")),
                ("marginBottom", s.space("4")),
            ]),
        ),
        (
            "body",
            variant([
                ("fontSize", s.font_size("base")),
                ("text", c.neutral[Shade::S700].into()),
            ]),
        ),
        (
            "footer",
            variant([
                ("borderTop", border("1px", c.neutral[Shade::S200])),
                ("paddingTop", s.space("4")),
                ("marginTop", s.space("4")),
                ("gap", s.space("3")),
            ]),
        ),
    ])
}

fn tooltip(s: &Sources<'_>) -> Component {
    let c = s.colors;
    TokenMap::from_entries([
        (
            "base",
            variant([
                ("bg", c.neutral[Shade::S900].into()),
                ("text", c.neutral[Shade::S50].into()),
                ("borderRadius", s.radius("md")),
                ("padding", s.padding("1.5", "3")),
                ("fontSize", s.font_size("sm")),
                ("fontWeight", s.font_weight("medium")),
                ("shadow", s.shadow("lg")),
                ("zIndex", s.z("40")),
                ("maxWidth", "16rem".into()),
            ]),
        ),
        (
            "arrow",
            variant([("bg", c.neutral[Shade::S900].into()), ("size", "6px".into())]),
        ),
        (
            "light",
            variant([
                ("bg", c.neutral[Shade::S50].into()),
                ("text", c.neutral[Shade::S900].into()),
                ("border", border("1px", c.neutral[Shade::S200])),
                ("borderRadius", s.radius("md")),
                ("padding", s.padding("2", "4")),
                ("fontSize", s.font_size("sm")),
                ("shadow", s.shadow("md")),
            ]),
        ),
    ])
}

fn table(s: &Sources<'_>) -> Component {
    let c = s.colors;
    TokenMap::from_entries([
        (
            "container",
            variant([
                ("borderRadius", s.radius("lg")),
                ("border", border("1px", c.neutral[Shade::S200])),
                ("overflow", "hidden".into()),
            ]),
        ),
        (
            "header",
            variant([
                ("bg", c.neutral[Shade::S100].into()),
                ("text", c.neutral[Shade::S700].into()),
                ("fontSize", s.font_size("sm")),
                ("fontWeight", s.font_weight("semibold")),
                ("padding", s.padding("3", "4")),
                ("borderBottom", border("2px", c.neutral[Shade::S200])),
                ("textTransform", "uppercase".into()),
                ("letterSpacing", "0.05em".into()),
            ]),
        ),
        (
            "cell",
            variant([
                ("padding", s.padding("3", "4")),
                ("fontSize", s.font_size("base")),
                ("text", c.neutral[Shade::S900].into()),
                ("borderBottom", border("1px", c.neutral[Shade::S100])),
            ]),
        ),
        ("rowHover", variant([("bg", c.primary[Shade::S50].into())])),
        ("rowStriped", variant([("bg", c.neutral[Shade::S50].into())])),
    ])
}

// ---------------------------------------------------------------------------
// Archetype overrides
// ---------------------------------------------------------------------------

/// Variants that get a solid border when the archetype shows borders.
const BORDERED: [(&str, &str); 6] = [
    ("button", "primary"),
    ("button", "secondary"),
    ("card", "base"),
    ("card", "elevated"),
    ("modal", "container"),
    ("table", "container"),
];

const BLURRED: [(&str, &str); 3] = [("card", "base"), ("card", "elevated"), ("modal", "container")];

const TRANSLUCENT: [(&str, &str); 2] = [("card", "base"), ("modal", "container")];

fn apply_archetype(tokens: &mut ComponentTokens, theme: &Theme, colors: &ColorSet) {
    let Some(arch) = &theme.archetype else {
        return;
    };

    if arch.show_borders {
        let width = arch.border_width.as_deref().unwrap_or("1px");
        let value = border(width, colors.neutral[Shade::S950]);
        for (component, v) in BORDERED {
            tokens.set(component, v, "border", value.clone());
        }
    }

    if let Some(blur) = &arch.blur {
        for (component, v) in BLURRED {
            tokens.set(component, v, "backdropBlur", blur.as_str().into());
        }
        let opacity = TokenValue::Number(arch.opacity.unwrap_or(1.0));
        for (component, v) in TRANSLUCENT {
            tokens.set(component, v, "bgOpacity", opacity.clone());
        }
    }
}

/// Compose every component from the generated scales, then apply the
/// theme's archetype overrides.
#[must_use]
pub fn generate_component_tokens(
    colors: &ColorSet,
    typography: &Typography,
    spacing: &SpacingTokens,
    theme: &Theme,
) -> ComponentTokens {
    let s = Sources { colors, typography, spacing };

    let mut tokens = ComponentTokens {
        components: TokenMap::from_entries([
            ("button", button(&s)),
            ("input", input(&s)),
            ("card", card(&s)),
            ("badge", badge(&s)),
            ("alert", alert(&s)),
            ("navigation", navigation(&s)),
            ("modal", modal(&s)),
            ("tooltip", tooltip(&s)),
            ("table", table(&s)),
        ]),
    };
    apply_archetype(&mut tokens, theme, colors);

    tracing::debug!(theme = %theme.name, components = tokens.len(), "composed component tokens");
    tokens
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{builtin_names, builtin_theme};
    use crate::color::contrast_ratio;
    use crate::palette::generate_colors;
    use crate::spacing::generate_spacing_tokens;
    use crate::typography::generate_typography;

    fn compose(name: &str, seed: &str) -> (ColorSet, ComponentTokens) {
        let theme = builtin_theme(name).unwrap();
        let colors = generate_colors(&theme, seed);
        let typo = generate_typography(&theme, seed);
        let spacing = generate_spacing_tokens(&theme, seed);
        let tokens = generate_component_tokens(&colors, &typo, &spacing, &theme);
        (colors, tokens)
    }

    fn text(tokens: &ComponentTokens, c: &str, v: &str, t: &str) -> String {
        tokens.token(c, v, t).unwrap().to_string()
    }

    #[test]
    fn nine_components_in_order() {
        let (_, tokens) = compose("minimal", "x");
        let names: Vec<_> = tokens.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            ["button", "input", "card", "badge", "alert", "navigation", "modal", "tooltip", "table"]
        );
    }

    #[test]
    fn button_primary_looks_up_scales() {
        let (colors, tokens) = compose("cyberpunk", "hackathon");
        assert_eq!(text(&tokens, "button", "primary", "bg"), "#ab00ff");
        assert_eq!(
            text(&tokens, "button", "primary", "text"),
            colors.text_on(colors.primary[Shade::S500]).to_hex()
        );
        assert_eq!(tokens.token("button", "primary", "fontWeight"), Some(&TokenValue::Number(600.0)));
    }

    #[test]
    fn surface_text_meets_target_exactly() {
        for name in builtin_names() {
            for seed in ["links", "hackathon", ""] {
                let (colors, tokens) = compose(name, seed);
                for (c, v) in [("navigation", "link"), ("button", "outline")] {
                    let fg = Rgb::from_hex(&text(&tokens, c, v, "text")).unwrap();
                    let ratio = contrast_ratio(fg, colors.neutral[Shade::S50]);
                    assert!(ratio >= DEFAULT_TARGET_RATIO, "{name}/{seed:?} {c}.{v}: {ratio}");
                }
            }
        }
    }

    #[test]
    fn plain_themes_have_no_overrides() {
        let (_, tokens) = compose("minimal", "x");
        assert!(tokens.token("button", "primary", "border").is_none());
        assert!(tokens.token("card", "base", "backdropBlur").is_none());
    }

    #[test]
    fn neobrutalism_adds_thick_borders() {
        let (colors, tokens) = compose("neobrutalism", "x");
        let expected = format!("4px solid {}", colors.neutral[Shade::S950]);
        for (c, v) in BORDERED {
            assert_eq!(text(&tokens, c, v, "border"), expected, "{c}.{v}");
        }
        assert!(tokens.token("card", "base", "backdropBlur").is_none());
    }

    #[test]
    fn glassmorphism_adds_blur_and_opacity() {
        let (_, tokens) = compose("glassmorphism", "x");
        assert_eq!(text(&tokens, "card", "elevated", "backdropBlur"), "10px");
        assert_eq!(tokens.token("modal", "container", "bgOpacity"), Some(&TokenValue::Number(0.6)));
        assert!(tokens.token("card", "elevated", "bgOpacity").is_none());
        assert!(tokens.token("button", "primary", "border").is_none());
    }

    #[test]
    fn serializes_as_nested_objects() {
        let (_, tokens) = compose("forest", "x");
        let v = serde_json::to_value(&tokens).unwrap();
        assert_eq!(v["modal"]["overlay"]["bg"], "rgba(0, 0, 0, 0.5)");
        assert_eq!(v["badge"]["primary"]["borderRadius"], "9999px");
    }
}
