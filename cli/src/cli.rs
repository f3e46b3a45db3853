//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level arguments.
#[derive(Parser)]
#[command(name = "bsod-guide", version, about = "BSOD troubleshooting guide static export")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render the guide as a standalone HTML document.
    Render {
        /// Output file (defaults to stdout).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Value of the `<html lang>` attribute.
        #[arg(long, default_value = "en")]
        lang: String,
        /// Stylesheet href linked from `<head>`.
        #[arg(long)]
        stylesheet: Option<String>,
        /// Canonical page URL. Falls back to `SITE_BASE_URL`.
        #[arg(long)]
        canonical_url: Option<String>,
    },
    /// Validate the guide content and report block counts.
    Check,
    /// Export the guide datasets as JSON.
    Export {
        /// Output file (defaults to stdout).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pretty-print the JSON.
        #[arg(long)]
        pretty: bool,
    },
}
