// SPDX-License-Identifier: MIT
//
// CSS custom properties under `:root`.
//
// Naming:
//
//   --color-<group>-<shade>          --spacing-<label>   (`.` → `_`)
//   --font-<role>                    --radius-<label>
//   --font-size-<label>              --border-width-<label>
//   --line-height-<label>            --shadow-<label>
//   --letter-spacing-<label>         --opacity-<label>
//   --font-weight-<label>            --z-<label>
//   --<component>-<variant>-<token>  (kebab case)

use std::io::{self, Write};

use atlas_engine::{DesignSystem, TokenMap, TokenValue};

use crate::comment_text;

/// One titled block of variables.
pub struct Section {
    pub title: &'static str,
    pub vars: Vec<(String, String)>,
}

/// `bgHover` → `bg-hover`, `rowStriped` → `row-striped`.
pub(crate) fn kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn prefixed<V>(prefix: &str, map: &TokenMap<V>, value: impl Fn(&V) -> String) -> Vec<(String, String)> {
    map.iter()
        .map(|(label, v)| (format!("{prefix}-{label}"), value(v)))
        .collect()
}

/// Component token as a CSS value. Bare font sizes become px.
fn component_value(token: &str, value: &TokenValue) -> String {
    match value {
        TokenValue::Number(n) if token == "fontSize" => format!("{n}px"),
        other => other.to_string(),
    }
}

/// All variables, grouped in output order.
#[must_use]
pub fn sections(ds: &DesignSystem) -> Vec<Section> {
    let t = &ds.typography;
    let s = &ds.spacing;

    let colors = ds
        .colors
        .groups()
        .flat_map(|(group, scale)| {
            scale
                .iter()
                .map(move |(shade, rgb)| (format!("color-{group}-{}", shade.label()), rgb.to_hex()))
        })
        .collect();

    let mut typography = vec![
        ("font-primary".to_owned(), t.fonts.primary.to_owned()),
        ("font-heading".to_owned(), t.fonts.heading.to_owned()),
        ("font-mono".to_owned(), t.fonts.mono.to_owned()),
    ];
    typography.extend(prefixed("font-size", &t.font_size, |v| format!("{v}px")));
    typography.extend(prefixed("line-height", &t.line_height, ToString::to_string));
    typography.extend(prefixed("letter-spacing", &t.letter_spacing, ToString::to_string));
    typography.extend(prefixed("font-weight", &t.font_weight, ToString::to_string));

    let spacing = s
        .spacing
        .iter()
        .map(|(label, v)| (format!("spacing-{}", label.replace('.', "_")), v.clone()))
        .collect();

    let mut borders = prefixed("radius", &s.border_radius, Clone::clone);
    borders.extend(prefixed("border-width", &s.border_width, ToString::to_string));

    let mut sections = vec![
        Section { title: "Colors", vars: colors },
        Section { title: "Typography", vars: typography },
        Section { title: "Spacing", vars: spacing },
        Section { title: "Borders", vars: borders },
        Section { title: "Shadows", vars: prefixed("shadow", &s.shadows, Clone::clone) },
        Section { title: "Opacity", vars: prefixed("opacity", &s.opacity, ToString::to_string) },
        Section { title: "Z-Index", vars: prefixed("z", &s.z_index, ToString::to_string) },
    ];

    if let Some(components) = &ds.components {
        let mut vars = Vec::new();
        for (component, variants) in components.iter() {
            for (variant, tokens) in variants.iter() {
                for (token, value) in tokens.iter() {
                    vars.push((
                        format!("{component}-{}-{}", kebab(variant), kebab(token)),
                        component_value(token, value),
                    ));
                }
            }
        }
        sections.push(Section { title: "Components", vars });
    }

    sections
}

/// Write `tokens.css`.
///
/// # Errors
///
/// Propagates write errors from `w`.
pub fn write_css(w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
    writeln!(w, "/*")?;
    writeln!(w, " * {} design tokens v{}", ds.meta.generator, ds.meta.version)?;
    writeln!(
        w,
        " * Theme: {}  Seed: {}",
        comment_text(&ds.theme),
        comment_text(&ds.seed)
    )?;
    writeln!(w, " * Generated: {}", ds.meta.generated.to_rfc3339())?;
    writeln!(w, " */")?;
    writeln!(w)?;
    writeln!(w, ":root {{")?;
    for (i, section) in sections(ds).iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        writeln!(w, "  /* {} */", section.title)?;
        for (name, value) in &section.vars {
            writeln!(w, "  --{name}: {value};")?;
        }
    }
    writeln!(w, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{design_system, render};

    #[test]
    fn kebab_cases_camel_names() {
        assert_eq!(kebab("bgHover"), "bg-hover");
        assert_eq!(kebab("rowStriped"), "row-striped");
        assert_eq!(kebab("2xl"), "2xl");
    }

    #[test]
    fn root_block_carries_pinned_colors() {
        let ds = design_system("cyberpunk", "hackathon", false);
        let css = render(|w| write_css(w, &ds));
        assert!(css.contains(":root {"));
        assert!(css.contains("  --color-primary-500: #ab00ff;"), "{css}");
        assert!(css.contains("  --color-neutral-950: #0e0811;"));
        assert!(css.contains("  --font-size-5xl: 91.7px;"));
        assert!(css.trim_end().ends_with('}'));
    }

    #[test]
    fn spacing_labels_swap_dots() {
        let ds = design_system("minimal", "x", false);
        let css = render(|w| write_css(w, &ds));
        assert!(css.contains("  --spacing-0_5: "));
        assert!(css.contains("  --spacing-px: 1px;"));
        assert!(!css.contains("--spacing-0.5"));
    }

    #[test]
    fn component_tokens_are_kebab_cased() {
        let ds = design_system("minimal", "x", true);
        let css = render(|w| write_css(w, &ds));
        assert!(css.contains("  --button-primary-bg-hover: #"));
        assert!(css.contains("  --button-primary-font-size: 16px;"));
        assert!(css.contains("  --table-row-striped-bg: #"));
        assert!(css.contains("  --modal-overlay-z-index: 50;"));
    }

    #[test]
    fn no_component_section_without_components() {
        let ds = design_system("minimal", "x", false);
        assert!(sections(&ds).iter().all(|s| s.title != "Components"));
    }

    #[test]
    fn variable_count_matches_scales() {
        let ds = design_system("arctic", "x", false);
        let secs = sections(&ds);
        assert_eq!(secs[0].vars.len(), 8 * 11);
        assert_eq!(secs[2].vars.len(), 35);
    }
}
