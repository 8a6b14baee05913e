// SPDX-License-Identifier: MIT
//
// ES module: one named export per token family plus a default export of
// the whole design system.

use std::io::{self, Write};

use atlas_engine::DesignSystem;
use serde::Serialize;

use crate::comment_text;

fn export_const(w: &mut impl Write, name: &str, value: &impl Serialize) -> io::Result<()> {
    writeln!(w, "export const {name} = {};", serde_json::to_string_pretty(value)?)?;
    writeln!(w)
}

/// Write `tokens.js`.
///
/// # Errors
///
/// Propagates write and serialization errors.
pub fn write_js(w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
    writeln!(w, "// {} design tokens v{}", ds.meta.generator, ds.meta.version)?;
    writeln!(
        w,
        "// Theme: {}  Seed: {}",
        comment_text(&ds.theme),
        comment_text(&ds.seed)
    )?;
    writeln!(w)?;

    export_const(w, "meta", &ds.meta)?;
    export_const(w, "colors", &ds.colors)?;
    export_const(w, "typography", &ds.typography)?;
    export_const(w, "spacing", &ds.spacing)?;

    let mut members = vec!["meta", "colors", "typography", "spacing"];
    if let Some(components) = &ds.components {
        export_const(w, "components", components)?;
        members.push("components");
    }

    writeln!(
        w,
        "export default {{ theme: {}, seed: {}, {} }};",
        serde_json::to_string(&ds.theme)?,
        serde_json::to_string(&ds.seed)?,
        members.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{design_system, render};

    #[test]
    fn named_and_default_exports() {
        let ds = design_system("sunset", "beach", true);
        let js = render(|w| write_js(w, &ds));
        assert!(js.contains("export const colors = {"));
        assert!(js.contains("export const components = {"));
        assert!(js.trim_end().ends_with(
            "export default { theme: \"sunset\", seed: \"beach\", meta, colors, typography, spacing, components };"
        ));
    }

    #[test]
    fn seed_is_quoted_as_json() {
        let ds = design_system("minimal", "a\"b", false);
        let js = render(|w| write_js(w, &ds));
        assert!(js.contains("seed: \"a\\\"b\""), "{js}");
        assert!(!js.contains("export const components"));
    }
}
