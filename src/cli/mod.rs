//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - highlight: Highlight command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod completions;
pub mod highlight;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use highlight::HighlightArgs;

/// Weft - component asset pipeline
///
/// Discover component script and style fragments, merge them into bundle
/// entries, and keep the CSS purge configuration in sync.
#[derive(Parser, Debug)]
#[command(
    name = "weft",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Component asset pipeline for static sites",
    long_about = "Weft discovers per-component script and style fragments, merges them \
                  deterministically into bundle entry points, emits the content globs the \
                  CSS purge stage scans, and syntax-highlights rendered documents.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  weft build                      \x1b[90m# Regenerate bundle entries and purge config\x1b[0m\n   \
                  weft build --check              \x1b[90m# Fail if generated output is out of date\x1b[0m\n   \
                  weft highlight output/          \x1b[90m# Highlight rendered HTML in place\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Site workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "WEFT_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate bundle entries and the CSS purge configuration
    Build(BuildArgs),

    /// Syntax-highlight rendered HTML documents in place
    Highlight(HighlightArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
