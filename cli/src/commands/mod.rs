//! Subcommand implementations.

pub mod check;
pub mod export;
pub mod render;

use anyhow::{Context, Result};
use bsod_guide_shared::Guide;

use crate::{
    cli::{Cli, Commands},
    html::RenderOptions,
    utils,
};

/// Validated built-in guide; content errors are fatal for every command.
pub fn load_guide() -> Result<Guide> {
    Guide::builtin().context("guide content failed validation")
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            out,
            lang,
            stylesheet,
            canonical_url,
        } => {
            let options = RenderOptions {
                lang,
                stylesheet,
                canonical_url: utils::resolve_canonical_url(canonical_url),
            };
            render::run(out.as_deref(), &options)
        },
        Commands::Check => check::run(),
        Commands::Export {
            out,
            pretty,
        } => export::run(out.as_deref(), pretty),
    }
}
