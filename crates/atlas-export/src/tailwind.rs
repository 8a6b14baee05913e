// SPDX-License-Identifier: MIT
//
// Tailwind CSS config: tokens go under `theme.extend` so the framework's
// defaults stay available.

use std::io::{self, Write};

use atlas_engine::{DesignSystem, TokenMap};
use serde_json::{Map, Value, json};

use crate::comment_text;

fn object<V>(map: &TokenMap<V>, value: impl Fn(&V) -> Value) -> Value {
    Value::Object(
        map.iter()
            .map(|(label, v)| (label.to_owned(), value(v)))
            .collect::<Map<String, Value>>(),
    )
}

/// The `theme.extend` block.
#[must_use]
pub fn extend(ds: &DesignSystem) -> Value {
    let t = &ds.typography;
    let s = &ds.spacing;
    let text = |v: &&'static str| Value::from(*v);
    let owned = |v: &String| Value::from(v.as_str());

    let colors: Map<String, Value> = ds
        .colors
        .groups()
        .map(|(group, scale)| {
            let shades = scale
                .iter()
                .map(|(shade, rgb)| (shade.label().to_owned(), Value::from(rgb.to_hex())))
                .collect::<Map<String, Value>>();
            (group.to_owned(), Value::Object(shades))
        })
        .collect();

    json!({
        "colors": colors,
        "fontFamily": {
            "sans": [t.fonts.primary],
            "heading": [t.fonts.heading],
            "mono": [t.fonts.mono],
        },
        "fontSize": object(&t.font_size, |v| Value::from(format!("{v}px"))),
        "lineHeight": object(&t.line_height, |v| Value::from(v.to_string())),
        "letterSpacing": object(&t.letter_spacing, text),
        "fontWeight": object(&t.font_weight, |v| Value::from(v.to_string())),
        "spacing": object(&s.spacing, owned),
        "borderRadius": object(&s.border_radius, owned),
        "borderWidth": object(&s.border_width, text),
        "boxShadow": object(&s.shadows, owned),
        "opacity": object(&s.opacity, text),
        "zIndex": object(&s.z_index, text),
    })
}

/// Write `tailwind.config.js`.
///
/// # Errors
///
/// Propagates write and serialization errors.
pub fn write_tailwind(w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
    let config = json!({
        "content": ["./src/**/*.{html,js,jsx,ts,tsx}"],
        "theme": { "extend": extend(ds) },
        "plugins": [],
    });

    writeln!(
        w,
        "// {} theme '{}' (seed: {})",
        ds.meta.generator,
        comment_text(&ds.theme),
        comment_text(&ds.seed)
    )?;
    writeln!(w, "/** @type {{import('tailwindcss').Config}} */")?;
    writeln!(w, "module.exports = {};", serde_json::to_string_pretty(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{design_system, render};

    #[test]
    fn extend_block_values() {
        let ds = design_system("cyberpunk", "hackathon", false);
        let ext = extend(&ds);
        assert_eq!(ext["colors"]["primary"]["500"], "#ab00ff");
        assert_eq!(ext["fontSize"]["5xl"], "91.7px");
        assert_eq!(ext["fontWeight"]["bold"], "700");
        assert_eq!(ext["zIndex"]["auto"], "auto");
        assert_eq!(ext["borderRadius"]["full"], "9999px");
    }

    #[test]
    fn writes_commonjs_module() {
        let ds = design_system("nature", "moss", true);
        let js = render(|w| write_tailwind(w, &ds));
        assert!(js.contains("module.exports = {"));
        assert!(js.contains("\"extend\": {"));
        assert!(js.trim_end().ends_with("};"));
    }
}
