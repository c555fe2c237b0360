use clap::Parser;
use std::path::PathBuf;

/// Arguments for build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Regenerate bundle entries:\n    weft build\n\n\
                  Verify generated output in CI:\n    weft build --check\n\n\
                  Use a different output directory:\n    weft build --out-dir frontend/generated")]
pub struct BuildArgs {
    /// Output directory for generated entries, relative to the site root
    #[arg(long, default_value = "frontend/bundles")]
    pub out_dir: PathBuf,

    /// Verify generated output is up to date without writing
    #[arg(long)]
    pub check: bool,
}
