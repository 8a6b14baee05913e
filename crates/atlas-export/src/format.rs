// SPDX-License-Identifier: MIT
//
// Output formats and their file names.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use atlas_engine::DesignSystem;

use crate::{ExportError, css, js, preview, tailwind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Css,
    Json,
    Js,
    Tailwind,
    Preview,
}

impl Format {
    pub const ALL: [Self; 5] = [Self::Css, Self::Json, Self::Js, Self::Tailwind, Self::Preview];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
            Self::Js => "js",
            Self::Tailwind => "tailwind",
            Self::Preview => "preview",
        }
    }

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Css => "tokens.css",
            Self::Json => "tokens.json",
            Self::Js => "tokens.js",
            Self::Tailwind => "tailwind.config.js",
            Self::Preview => "preview.html",
        }
    }

    /// Render `ds` in this format.
    ///
    /// # Errors
    ///
    /// Propagates write errors from `w`.
    pub fn render(self, w: &mut impl Write, ds: &DesignSystem) -> io::Result<()> {
        match self {
            Self::Css => css::write_css(w, ds),
            Self::Json => {
                serde_json::to_writer_pretty(&mut *w, ds)?;
                writeln!(w)
            }
            Self::Js => js::write_js(w, ds),
            Self::Tailwind => tailwind::write_tailwind(w, ds),
            Self::Preview => preview::write_preview(w, ds),
        }
    }

    /// Parse names given as separate items or comma lists (`css,json`).
    /// Duplicates are dropped, first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::UnknownFormat`] for the first unknown name.
    pub fn parse_list<S: AsRef<str>>(items: &[S]) -> Result<Vec<Self>, ExportError> {
        let mut formats = Vec::new();
        for name in items.iter().flat_map(|s| s.as_ref().split(',')) {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let format = name.parse()?;
            if !formats.contains(&format) {
                formats.push(format);
            }
        }
        Ok(formats)
    }
}

impl FromStr for Format {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExportError::UnknownFormat {
                name: s.to_owned(),
                valid: Self::ALL.map(Self::name).join(", "),
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("CSS".parse::<Format>().unwrap(), Format::Css);
        assert_eq!("Tailwind".parse::<Format>().unwrap(), Format::Tailwind);
    }

    #[test]
    fn unknown_lists_valid_names() {
        let err = "yaml".parse::<Format>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown format 'yaml'. Valid formats: css, json, js, tailwind, preview"
        );
    }

    #[test]
    fn list_splits_commas_and_dedupes() {
        let got = Format::parse_list(&["css,json", " preview ", "css", ""]).unwrap();
        assert_eq!(got, [Format::Css, Format::Json, Format::Preview]);
    }

    #[test]
    fn list_fails_on_first_unknown() {
        assert!(Format::parse_list(&["css", "svg"]).is_err());
    }
}
