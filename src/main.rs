// SPDX-License-Identifier: MIT
//
// atlas: deterministic design-token generator.
//
// This is the command-line binary that wires the two crates together:
//
//   atlas-engine → theme catalog, seeded generation, DesignSystem
//   atlas-export → CSS / JSON / JS / Tailwind / preview writers
//
// Every run flows through:
//
//   args → resolve theme (catalog key or --theme-file JSON)
//        → DesignSystem::generate(theme, seed)
//        → write_outputs(dir, formats) → summary on stdout
//
// Logs go to stderr so stdout stays clean for piping. Errors print one line
// and exit with status 1.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use atlas_engine::builtin::builtin_themes;
use atlas_engine::{DesignSystem, Shade, Theme, recommend_themes, resolve_theme};
use atlas_export::{Format, write_outputs};

/// Recommendations printed by `atlas recommend`.
const RECOMMENDATIONS: usize = 5;

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "atlas", version, about = "Generate a design system from a theme and a seed")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate tokens and write them to the output directory.
    #[command(visible_aliases = ["gen", "g"])]
    Generate(GenerateArgs),
    /// List the built-in themes.
    Themes {
        /// Print one theme as JSON, ready to edit and pass to --theme-file.
        #[arg(long, value_name = "KEY")]
        show: Option<String>,
    },
    /// Suggest themes for a free-text description.
    Recommend {
        /// Words describing the product or mood.
        #[arg(short, long)]
        keywords: String,
    },
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// Built-in theme key.
    #[arg(short, long, default_value = "cyberpunk", env = "ATLAS_THEME")]
    theme: String,

    /// Custom theme JSON. Takes precedence over --theme.
    #[arg(long, value_name = "PATH")]
    theme_file: Option<PathBuf>,

    /// Seed string. The same theme and seed always give the same tokens.
    #[arg(short, long, default_value = "hackathon", env = "ATLAS_SEED")]
    seed: String,

    /// Output directory.
    #[arg(short, long, default_value = "./design-system", env = "ATLAS_OUTPUT")]
    output: PathBuf,

    /// Formats to write: css, json, js, tailwind, preview. Repeat or comma-separate.
    #[arg(short, long, default_value = "css,json", value_delimiter = ',')]
    format: Vec<String>,

    /// Skip component tokens.
    #[arg(long)]
    no_components: bool,
}

// ─── Logging ────────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// Theme key and record, from a file or the catalog.
fn load_theme(args: &GenerateArgs) -> Result<(String, Theme)> {
    match &args.theme_file {
        Some(path) => {
            let theme = read_theme_file(path)?;
            let key = path
                .file_stem()
                .map_or_else(|| "custom".to_owned(), |s| s.to_string_lossy().into_owned());
            tracing::info!(path = %path.display(), name = %theme.name, "loaded custom theme");
            Ok((key, theme))
        }
        None => {
            let theme = resolve_theme(&args.theme)?;
            Ok((args.theme.to_lowercase(), theme))
        }
    }
}

fn read_theme_file(path: &Path) -> Result<Theme> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read theme file {}", path.display()))?;
    Theme::from_json(&text).with_context(|| format!("invalid theme file {}", path.display()))
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let formats = Format::parse_list(&args.format)?;
    let (key, theme) = load_theme(args)?;

    let mut ds = DesignSystem::generate(&key, &theme, &args.seed, !args.no_components);
    if let Some(path) = &args.theme_file {
        ds = ds.with_theme_file(fs::canonicalize(path).unwrap_or_else(|_| path.clone()));
    }
    let written = write_outputs(&ds, &args.output, &formats)?;

    println!("Generated {} design system (seed: {})", theme.name, args.seed);
    println!("  primary  {}", ds.colors.primary[Shade::S500]);
    println!("  accent   {}", ds.colors.accent[Shade::S500]);
    println!("  output   {}", args.output.display());
    for path in &written {
        println!("  wrote    {}", path.display());
    }
    Ok(())
}

fn show_theme(key: &str) -> Result<()> {
    let theme = resolve_theme(key)?;
    println!("{}", theme.to_json()?);
    Ok(())
}

fn list_themes() {
    for (key, theme) in builtin_themes() {
        println!("{key:<14} {:<14} {}", theme.name, theme.description);
        println!("{:<14} mood: {}", "", theme.mood);
    }
}

fn recommend(keywords: &str) {
    let recs = recommend_themes(keywords);
    if recs.first().is_none_or(|r| r.score == 0) {
        println!("No strong match for \"{keywords}\". Some themes to start from:");
    }
    for rec in recs.iter().take(RECOMMENDATIONS) {
        println!("{:<14} score {:<3} {}", rec.key, rec.score, rec.theme.description);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => generate(&args),
        Command::Themes { show: Some(key) } => show_theme(&key),
        Command::Themes { show: None } => {
            list_themes();
            Ok(())
        }
        Command::Recommend { keywords } => {
            recommend(&keywords);
            Ok(())
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("atlas: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
