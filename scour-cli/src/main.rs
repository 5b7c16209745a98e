//! Scour CLI
//!
//! Sanitize untrusted HTML from a file or an inline string, optionally
//! under a policy loaded from JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;

use scour_sanitizer::{Policy, PolicyFile, sanitize_with};

/// Whitelist-based HTML sanitizer.
#[derive(Debug, Parser)]
#[command(name = "scour", version, about)]
struct Args {
    /// HTML file to sanitize.
    file: Option<PathBuf>,

    /// Sanitize an inline HTML string instead of a file.
    #[arg(long, value_name = "HTML", conflicts_with = "file")]
    html: Option<String>,

    /// Policy file (JSON); absent fields fall back to the defaults.
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let html = match (&args.file, &args.html) {
        (_, Some(inline)) => inline.clone(),
        (Some(path), None) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("nothing to sanitize: pass a file or --html"),
    };

    let policy = match &args.policy {
        Some(path) => PolicyFile::load(path)
            .with_context(|| format!("failed to load policy {}", path.display()))?
            .resolve(),
        None => Policy::default(),
    };

    let clean = sanitize_with(&html, &policy);

    match &args.output {
        Some(path) => {
            fs::write(path, &clean)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("{} wrote {}", "ok:".green().bold(), path.display());
        }
        None => println!("{clean}"),
    }

    Ok(())
}
