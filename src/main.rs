//! Weft - component asset pipeline
//!
//! A command line tool that discovers per-component script and style
//! fragments, merges them deterministically into bundle entry points, keeps
//! the CSS purge configuration in sync, and syntax-highlights rendered
//! documents.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod domain;
mod error;
mod hash;
mod highlight;
mod path_utils;
mod pattern;
mod progress;
mod purge;
mod resolver;
mod site;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(cli.workspace, args, cli.verbose),
        Commands::Highlight(args) => commands::highlight::run(cli.workspace, args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
