// SPDX-License-Identifier: MIT
//
// Self-contained HTML preview: swatches, type scale, spacing bars and a
// handful of components styled from the generated tokens.
//
// No external assets or scripts. Theme name, description and seed come
// from user input and are escaped; token values are generated and used as-is.

use std::borrow::Cow;
use std::io::{self, Write};

use atlas_engine::palette::ColorScale;
use atlas_engine::{DesignSystem, Rgb, Shade};

/// Spacing steps shown as bars.
const SPACING_PREVIEW_STEPS: usize = 15;

/// Escape text for HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Leading number of a CSS length (`"1.5rem"` → 1.5).
fn leading_number(value: &str) -> f64 {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    value[..end].parse().unwrap_or(0.0)
}

// ─── Stylesheet ──────────────────────────────────────────────────────────────

fn write_styles(w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
    let c = &ds.colors;
    let n = |s: Shade| c.neutral[s];
    let p = |s: Shade| c.primary[s];
    let radius = ds.spacing.radius("md");
    let shadow = ds.spacing.shadow("md");

    writeln!(w, "<style>")?;
    writeln!(w, "  * {{ margin: 0; padding: 0; box-sizing: border-box; }}")?;
    writeln!(
        w,
        "  body {{ font-family: {}; background: {}; color: {}; padding: 2rem; line-height: 1.6; }}",
        ds.typography.fonts.primary,
        n(Shade::S50),
        n(Shade::S900)
    )?;
    writeln!(w, "  h1, h2, h3 {{ font-family: {}; }}", ds.typography.fonts.heading)?;
    writeln!(w, "  h1 {{ font-size: 2rem; margin-bottom: 0.5rem; }}")?;
    writeln!(
        w,
        "  h2 {{ font-size: 1.5rem; margin: 2rem 0 1rem; border-bottom: 2px solid {}; padding-bottom: 0.5rem; }}",
        p(Shade::S500)
    )?;
    writeln!(w, "  h3 {{ font-size: 1.1rem; margin: 1rem 0 0.5rem; }}")?;
    writeln!(w, "  .meta {{ color: {}; margin-bottom: 2rem; }}", n(Shade::S600))?;
    writeln!(w, "  .color-group {{ margin-bottom: 1.5rem; }}")?;
    writeln!(w, "  .color-group-label {{ font-weight: 600; margin-bottom: 0.5rem; text-transform: capitalize; }}")?;
    writeln!(w, "  .swatches {{ display: flex; flex-wrap: wrap; gap: 4px; }}")?;
    writeln!(
        w,
        "  .swatch {{ width: 64px; height: 64px; border-radius: {radius}; display: flex; align-items: flex-end; justify-content: center; font-size: 0.65rem; padding: 4px; }}"
    )?;
    writeln!(w, "  .type-sample {{ margin-bottom: 0.75rem; display: flex; align-items: baseline; gap: 1rem; }}")?;
    writeln!(w, "  .label {{ min-width: 90px; font-size: 0.75rem; color: {}; }}", n(Shade::S600))?;
    writeln!(w, "  .spacing-bar {{ display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.25rem; }}")?;
    writeln!(w, "  .spacing-visual {{ height: 16px; background: {}; border-radius: 4px; }}", p(Shade::S400))?;
    writeln!(w, "  .row {{ display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1rem; align-items: center; }}")?;
    writeln!(
        w,
        "  .btn {{ padding: {} {}; border-radius: {radius}; font-weight: 600; border: 2px solid transparent; cursor: pointer; }}",
        ds.spacing.space("2.5"),
        ds.spacing.space("6")
    )?;
    writeln!(w, "  .card {{ background: {}; border-radius: {}; padding: 1.5rem; box-shadow: {shadow}; max-width: 320px; }}", n(Shade::S50), ds.spacing.radius("lg"))?;
    writeln!(w, "  .badge {{ display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 0.8rem; font-weight: 600; }}")?;
    writeln!(w, "  .alert {{ padding: 12px 16px; border-radius: {radius}; font-size: 0.9rem; margin-bottom: 0.5rem; max-width: 520px; }}")?;
    writeln!(w, "</style>")
}

// ─── Sections ────────────────────────────────────────────────────────────────

fn write_swatches(w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
    for (group, scale) in ds.colors.groups() {
        writeln!(w, "<div class=\"color-group\">")?;
        writeln!(w, "  <div class=\"color-group-label\">{group}</div>")?;
        writeln!(w, "  <div class=\"swatches\">")?;
        for (shade, rgb) in scale.iter() {
            writeln!(
                w,
                "    <div class=\"swatch\" style=\"background:{rgb};color:{}\" title=\"{group}-{label} {rgb}\">{label}</div>",
                ds.colors.text_on(rgb),
                label = shade.label()
            )?;
        }
        writeln!(w, "  </div>")?;
        writeln!(w, "</div>")?;
    }
    Ok(())
}

fn write_type_scale(w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
    for (label, size) in ds.typography.font_size.iter() {
        writeln!(
            w,
            "<div class=\"type-sample\"><span class=\"label\">{label} ({size}px)</span><span style=\"font-size:{size}px\">The quick brown fox</span></div>"
        )?;
    }
    Ok(())
}

fn write_spacing(w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
    for (label, value) in ds.spacing.spacing.iter().take(SPACING_PREVIEW_STEPS) {
        let width = (leading_number(value) * 16.0).min(600.0);
        writeln!(
            w,
            "<div class=\"spacing-bar\"><span class=\"label\">{label}: {value}</span><div class=\"spacing-visual\" style=\"width:{width}px\"></div></div>"
        )?;
    }
    Ok(())
}

fn button(w: &mut impl Write, label: &str, bg: &str, text: Rgb, border: &str) -> io::Result<()> {
    writeln!(
        w,
        "  <button class=\"btn\" style=\"background:{bg};color:{text};border-color:{border}\">{label}</button>"
    )
}

fn tinted(w: &mut impl Write, class: &str, scale: &ColorScale, text: &str) -> io::Result<()> {
    writeln!(
        w,
        "  <div class=\"{class}\" style=\"background:{};border:1px solid {};color:{}\">{text}</div>",
        scale[Shade::S50],
        scale[Shade::S200],
        scale[Shade::S900]
    )
}

fn write_components(w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
    let c = &ds.colors;
    let primary = c.primary[Shade::S500];
    let secondary = c.secondary[Shade::S500];

    writeln!(w, "<h3>Buttons</h3>")?;
    writeln!(w, "<div class=\"row\">")?;
    button(w, "Primary", &primary.to_hex(), c.text_on(primary), "transparent")?;
    button(w, "Secondary", &secondary.to_hex(), c.text_on(secondary), "transparent")?;
    button(w, "Outline", "transparent", c.primary[Shade::S600], &primary.to_hex())?;
    button(w, "Ghost", "transparent", c.neutral[Shade::S700], "transparent")?;
    writeln!(w, "</div>")?;

    writeln!(w, "<h3>Card</h3>")?;
    writeln!(w, "<div class=\"row\">")?;
    writeln!(w, "  <div class=\"card\">")?;
    writeln!(w, "    <h4>Card title</h4>")?;
    writeln!(w, "    <p style=\"color:{}\">A sample card using the generated tokens.</p>", c.neutral[Shade::S600])?;
    writeln!(
        w,
        "    <span class=\"badge\" style=\"background:{};color:{}\">Badge</span>",
        c.primary[Shade::S100],
        c.primary[Shade::S800]
    )?;
    writeln!(w, "  </div>")?;
    writeln!(w, "</div>")?;

    writeln!(w, "<h3>Alerts</h3>")?;
    tinted(w, "alert", &c.info, "An informational message.")?;
    tinted(w, "alert", &c.success, "Operation completed successfully.")?;
    tinted(w, "alert", &c.warning, "Please review before proceeding.")?;
    tinted(w, "alert", &c.error, "Something went wrong.")
}

/// Write `preview.html`.
///
/// # Errors
///
/// Propagates write errors from `w`.
pub fn write_preview(w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
    let title = escape_html(&ds.profile.name);

    writeln!(w, "<!DOCTYPE html>")?;
    writeln!(w, "<html lang=\"en\">")?;
    writeln!(w, "<head>")?;
    writeln!(w, "<meta charset=\"UTF-8\">")?;
    writeln!(w, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(w, "<title>{title} - Preview</title>")?;
    write_styles(w, ds)?;
    writeln!(w, "</head>")?;
    writeln!(w, "<body>")?;
    writeln!(w, "<h1>{title}</h1>")?;
    writeln!(w, "<p>{}</p>", escape_html(&ds.profile.description))?;
    writeln!(
        w,
        "<p class=\"meta\">Generated by {} v{} | Theme: {} | Seed: {} | {}</p>",
        ds.meta.generator,
        ds.meta.version,
        escape_html(&ds.theme),
        escape_html(&ds.seed),
        ds.meta.generated.format("%Y-%m-%d")
    )?;

    writeln!(w, "<h2>Colors</h2>")?;
    write_swatches(w, ds)?;
    writeln!(w, "<h2>Typography</h2>")?;
    write_type_scale(w, ds)?;
    writeln!(w, "<h2>Spacing</h2>")?;
    write_spacing(w, ds)?;
    if ds.components.is_some() {
        writeln!(w, "<h2>Components</h2>")?;
        write_components(w, ds)?;
    }

    writeln!(w, "</body>")?;
    writeln!(w, "</html>")
}
