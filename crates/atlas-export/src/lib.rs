// SPDX-License-Identifier: MIT
//
// atlas-export: writes a DesignSystem to disk in one or more formats.
//
//   DesignSystem ──► Format::render ──► BufWriter<File> ──► <dir>/<file>
//
// Every renderer is a pure function over `impl Write`, so tests render into
// a Vec<u8> and only `write_outputs` touches the filesystem. A README is
// always written last, after the selected formats.

pub mod css;
pub mod format;
pub mod js;
pub mod preview;
pub mod readme;
pub mod tailwind;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use atlas_engine::DesignSystem;
use thiserror::Error;

pub use format::Format;

/// File name of the always-written usage notes.
pub const README_FILE: &str = "README.md";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown format '{name}'. Valid formats: {valid}")]
    UnknownFormat { name: String, valid: String },
}

/// Write each selected format plus `README.md` into `dir`, creating it if
/// needed. Returns the written paths in write order.
///
/// # Errors
///
/// Returns [`ExportError::CreateDir`] or [`ExportError::Write`] with the
/// offending path. Files written before the failure are left in place.
pub fn write_outputs(
    ds: &DesignSystem,
    dir: &Path,
    formats: &[Format],
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(formats.len() + 1);
    for &format in formats {
        written.push(write_file(dir, format.file_name(), |w| format.render(w, ds))?);
    }
    written.push(write_file(dir, README_FILE, |w| readme::write_readme(w, ds, formats))?);

    tracing::info!(dir = %dir.display(), files = written.len(), "export complete");
    Ok(written)
}

/// Text safe to embed in a line or block comment of any output format.
pub(crate) fn comment_text(s: &str) -> String {
    s.replace("*/", "* /").replace(|c: char| c.is_control(), " ")
}

fn write_file(
    dir: &Path,
    name: &str,
    render: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(name);
    let result = File::create(&path).and_then(|file| {
        let mut w = BufWriter::new(file);
        render(&mut w)?;
        w.flush()
    });
    match result {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "wrote file");
            Ok(path)
        }
        Err(source) => Err(ExportError::Write { path, source }),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod test_support {
    use atlas_engine::{DesignSystem, builtin_theme};
    use chrono::{TimeZone, Utc};

    /// A fixed-timestamp design system for a catalog theme.
    pub fn design_system(key: &str, seed: &str, components: bool) -> DesignSystem {
        let theme = builtin_theme(key).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        DesignSystem::generate_at(key, &theme, seed, components, at)
    }

    pub fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::design_system;

    #[test]
    fn writes_selected_formats_then_readme() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out");
        let ds = design_system("cyberpunk", "hackathon", true);

        let paths = write_outputs(&ds, &out, &[Format::Css, Format::Json]).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["tokens.css", "tokens.json", "README.md"]);
        for p in &paths {
            assert!(p.is_file(), "{} missing", p.display());
        }
    }

    #[test]
    fn readme_only_when_no_formats() {
        let dir = tempfile::tempdir().unwrap();
        let ds = design_system("minimal", "x", false);
        let paths = write_outputs(&ds, dir.path(), &[]).unwrap();
        assert_eq!(paths, [dir.path().join(README_FILE)]);
    }

    #[test]
    fn json_file_round_trips_through_serde() {
        let dir = tempfile::tempdir().unwrap();
        let ds = design_system("forest", "trees", true);
        write_outputs(&ds, dir.path(), &[Format::Json]).unwrap();

        let text = fs::read_to_string(dir.path().join("tokens.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::to_value(&ds).unwrap());
    }

    #[test]
    fn create_dir_failure_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let ds = design_system("minimal", "x", false);

        let err = write_outputs(&ds, &blocker.join("sub"), &[Format::Css]).unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }), "{err:?}");
        assert!(err.to_string().contains("sub"));
    }
}
