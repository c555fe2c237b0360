use clap::Parser;
use std::path::PathBuf;

/// Arguments for highlight command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Highlight a rendered output directory:\n    weft highlight output\n\n\
                  Highlight individual documents:\n    weft highlight output/index.html output/about.html")]
pub struct HighlightArgs {
    /// Rendered HTML files or directories to highlight in place
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}
