//! The built-in theme catalog.
//!
//! Each entry is a fixed set of hues and mood knobs. Lookups are
//! case-insensitive.

use crate::theme::{Archetype, ContrastLevel, FontStyle, ShadowType, Theme, ThemeError, ThemeResult};

/// Static row of the catalog.
struct Preset {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    mood: &'static str,
    hues: (f64, f64, f64),
    saturation_boost: f64,
    contrast: ContrastLevel,
    font_style: FontStyle,
}

const PRESETS: &[Preset] = &[
    Preset {
        key: "cyberpunk",
        name: "Cyberpunk",
        description: "Neon-lit dystopian future with high contrast and electric vibes",
        mood: "intense, futuristic, rebellious",
        hues: (280.0, 180.0, 320.0),
        saturation_boost: 0.3,
        contrast: ContrastLevel::High,
        font_style: FontStyle::Geometric,
    },
    Preset {
        key: "minimal",
        name: "Minimal",
        description: "Clean, spacious, and purposeful with maximum clarity",
        mood: "calm, focused, professional",
        hues: (220.0, 210.0, 200.0),
        saturation_boost: -0.2,
        contrast: ContrastLevel::Medium,
        font_style: FontStyle::SansSerif,
    },
    Preset {
        key: "nature",
        name: "Nature",
        description: "Organic earth tones with warmth and natural harmony",
        mood: "warm, grounded, peaceful",
        hues: (120.0, 30.0, 60.0),
        saturation_boost: 0.0,
        contrast: ContrastLevel::Medium,
        font_style: FontStyle::Humanist,
    },
    Preset {
        key: "darkmode",
        name: "Dark Mode",
        description: "Low-light optimized with deep backgrounds and glowing accents",
        mood: "mysterious, comfortable, modern",
        hues: (240.0, 260.0, 200.0),
        saturation_boost: 0.1,
        contrast: ContrastLevel::High,
        font_style: FontStyle::SansSerif,
    },
    Preset {
        key: "sunset",
        name: "Sunset",
        description: "Warm gradient palette inspired by golden hour",
        mood: "energetic, optimistic, vibrant",
        hues: (20.0, 340.0, 50.0),
        saturation_boost: 0.2,
        contrast: ContrastLevel::Medium,
        font_style: FontStyle::Rounded,
    },
    Preset {
        key: "arctic",
        name: "Arctic",
        description: "Cool, crisp palette with icy blues and clean whites",
        mood: "pristine, fresh, spacious",
        hues: (190.0, 210.0, 170.0),
        saturation_boost: -0.1,
        contrast: ContrastLevel::Medium,
        font_style: FontStyle::SansSerif,
    },
    Preset {
        key: "retrowave",
        name: "Retrowave",
        description: "80s inspired with bold colors and nostalgic vibes",
        mood: "nostalgic, bold, energetic",
        hues: (300.0, 180.0, 60.0),
        saturation_boost: 0.4,
        contrast: ContrastLevel::High,
        font_style: FontStyle::Geometric,
    },
    Preset {
        key: "forest",
        name: "Forest",
        description: "Deep greens with natural textures and organic flow",
        mood: "serene, natural, grounded",
        hues: (140.0, 80.0, 40.0),
        saturation_boost: 0.0,
        contrast: ContrastLevel::Medium,
        font_style: FontStyle::Humanist,
    },
    Preset {
        key: "neobrutalism",
        name: "Neo-Brutalism",
        description: "Vibrant colors, thick borders, and aggressive shadows",
        mood: "bold, loud, raw",
        hues: (50.0, 180.0, 320.0),
        saturation_boost: 0.5,
        contrast: ContrastLevel::High,
        font_style: FontStyle::Geometric,
    },
    Preset {
        key: "glassmorphism",
        name: "Glassmorphism",
        description: "Frosted glass effect with soft glows and minimalism",
        mood: "elegant, transparent, layered",
        hues: (210.0, 280.0, 190.0),
        saturation_boost: 0.2,
        contrast: ContrastLevel::Medium,
        font_style: FontStyle::SansSerif,
    },
];

/// Archetype overrides for the presets that carry one.
fn preset_archetype(key: &str) -> Option<Archetype> {
    match key {
        "neobrutalism" => Some(Archetype {
            border_width: Some("4px".into()),
            border_radius: Some("0px".into()),
            shadow_type: Some(ShadowType::Hard),
            show_borders: true,
            ..Archetype::default()
        }),
        "glassmorphism" => Some(Archetype {
            blur: Some("10px".into()),
            opacity: Some(0.6),
            border_radius: Some("24px".into()),
            border_width: Some("1px".into()),
            shadow_type: Some(ShadowType::Soft),
            ..Archetype::default()
        }),
        _ => None,
    }
}

impl Preset {
    fn to_theme(&self) -> Theme {
        Theme {
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            mood: self.mood.to_owned(),
            primary_hue: self.hues.0,
            secondary_hue: self.hues.1,
            accent_hue: self.hues.2,
            saturation_boost: self.saturation_boost,
            contrast: self.contrast,
            font_style: self.font_style,
            archetype: preset_archetype(self.key),
        }
    }
}

/// Look up a builtin theme by key (case-insensitive).
///
/// Returns `None` if the key is not recognized.
#[must_use]
pub fn builtin_theme(key: &str) -> Option<Theme> {
    PRESETS
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(key))
        .map(Preset::to_theme)
}

/// Look up a builtin theme, failing with the list of valid keys.
///
/// # Errors
///
/// Returns [`ThemeError::NotFound`] for unknown keys.
pub fn resolve_theme(key: &str) -> ThemeResult<Theme> {
    builtin_theme(key).ok_or_else(|| ThemeError::NotFound {
        name: key.to_owned(),
        available: builtin_names().collect(),
    })
}

/// All builtin theme keys, in catalog order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.key)
}

/// All builtin themes as `(key, theme)`, in catalog order.
pub fn builtin_themes() -> impl Iterator<Item = (&'static str, Theme)> {
    PRESETS.iter().map(|p| (p.key, p.to_theme()))
}

/// A catalog theme with its keyword score.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub key: &'static str,
    pub score: usize,
    pub theme: Theme,
}

/// Rank catalog themes against free-text keywords.
///
/// Each lowercase keyword scores one point per field (key, name,
/// description, mood) that contains it. Every theme is returned, best first;
/// ties keep catalog order.
#[must_use]
pub fn recommend_themes(keywords: &str) -> Vec<Recommendation> {
    let words: Vec<String> = keywords
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 1)
        .map(str::to_lowercase)
        .collect();

    let mut ranked: Vec<Recommendation> = PRESETS
        .iter()
        .map(|p| {
            let fields = [
                p.key.to_owned(),
                p.name.to_lowercase(),
                p.description.to_lowercase(),
                p.mood.to_lowercase(),
            ];
            let score = words
                .iter()
                .map(|w| fields.iter().filter(|f| f.contains(w.as_str())).count())
                .sum();
            Recommendation { key: p.key, score, theme: p.to_theme() }
        })
        .collect();

    // Stable sort keeps catalog order among equal scores.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
