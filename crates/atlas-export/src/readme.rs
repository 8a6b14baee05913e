// SPDX-License-Identifier: MIT
//
// README.md written next to the token files: what was generated, how to
// regenerate it, and a usage snippet per written format.

use std::borrow::Cow;
use std::io::{self, Write};

use atlas_engine::{DesignSystem, Shade, ThemeSource};

use crate::Format;

/// Quote `s` for a POSIX shell. Plain words pass through; anything else is
/// wrapped in single quotes with embedded `'` written as `'\''`.
fn shell_quote(s: &str) -> Cow<'_, str> {
    let plain = !s.is_empty()
        && s.chars().all(|c| c.is_ascii_alphanumeric() || "-_./,:=@%+".contains(c));
    if plain {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("'{}'", s.replace('\'', r"'\''")))
    }
}

fn usage(w: &mut impl Write, format: Format) -> io::Result<()> {
    match format {
        Format::Css => {
            writeln!(w, "### CSS custom properties\n")?;
            writeln!(w, "```css")?;
            writeln!(w, "@import './tokens.css';\n")?;
            writeln!(w, ".button {{")?;
            writeln!(w, "  background: var(--color-primary-500);")?;
            writeln!(w, "  padding: var(--spacing-2_5) var(--spacing-6);")?;
            writeln!(w, "  border-radius: var(--radius-md);")?;
            writeln!(w, "}}")?;
            writeln!(w, "```")?;
        }
        Format::Json => {
            writeln!(w, "### JSON\n")?;
            writeln!(w, "`tokens.json` holds every token, for build tools and design apps.")?;
        }
        Format::Js => {
            writeln!(w, "### JavaScript\n")?;
            writeln!(w, "```js")?;
            writeln!(w, "import tokens, {{ colors }} from './tokens.js';")?;
            writeln!(w, "```")?;
        }
        Format::Tailwind => {
            writeln!(w, "### Tailwind CSS\n")?;
            writeln!(w, "Copy `tailwind.config.js` into your project, then use classes such as")?;
            writeln!(w, "`bg-primary-500`, `text-neutral-900` and `p-4`.")?;
        }
        Format::Preview => {
            writeln!(w, "### Preview\n")?;
            writeln!(w, "Open `preview.html` in a browser to see every swatch and scale.")?;
        }
    }
    writeln!(w)
}

/// Write `README.md`.
///
/// # Errors
///
/// Propagates write errors from `w`.
pub fn write_readme(w: &mut impl Write, ds: &DesignSystem, formats: &[Format]) -> io::Result<()> {
    let theme = &ds.profile;

    writeln!(w, "# {} Design System\n", theme.name)?;
    writeln!(w, "{}\n", theme.description)?;
    writeln!(w, "| | |")?;
    writeln!(w, "|---|---|")?;
    writeln!(w, "| Theme | `{}` |", ds.theme)?;
    writeln!(w, "| Seed | `{}` |", ds.seed)?;
    writeln!(w, "| Mood | {} |", theme.mood)?;
    writeln!(w, "| Contrast | {} |", theme.contrast)?;
    writeln!(w, "| Font style | {} |", theme.font_style)?;
    writeln!(w, "| Primary | `{}` |", ds.colors.primary[Shade::S500])?;
    writeln!(w, "| Generated | {} by {} v{} |\n", ds.meta.generated.to_rfc3339(), ds.meta.generator, ds.meta.version)?;

    writeln!(w, "## Files\n")?;
    for format in formats {
        writeln!(w, "- `{}`", format.file_name())?;
    }
    writeln!(w, "- `README.md`\n")?;

    writeln!(w, "## Usage\n")?;
    for &format in formats {
        usage(w, format)?;
    }

    writeln!(w, "## Regenerate\n")?;
    writeln!(w, "The same theme and seed always produce the same tokens:\n")?;
    writeln!(w, "```sh")?;
    let names: Vec<_> = formats.iter().map(|f| f.name()).collect();
    match &ds.source {
        ThemeSource::Catalog => write!(w, "atlas generate --theme {}", shell_quote(&ds.theme))?,
        ThemeSource::File(path) => write!(
            w,
            "atlas generate --theme-file {}",
            shell_quote(&path.to_string_lossy())
        )?,
    }
    write!(w, " --seed {}", shell_quote(&ds.seed))?;
    if !names.is_empty() {
        write!(w, " --format {}", names.join(","))?;
    }
    if ds.components.is_none() {
        write!(w, " --no-components")?;
    }
    writeln!(w)?;
    writeln!(w, "```")
}
