//! Highlight command implementation
//!
//! Applies the fixed grammar registry to rendered HTML documents in place.
//! Documents declaring only unregistered languages come through unchanged,
//! and re-running over already highlighted output is a no-op.

use std::path::{Path, PathBuf};

use console::Style;
use walkdir::WalkDir;

use crate::cli::HighlightArgs;
use crate::error::{Result, fs as fs_error};
use crate::highlight::{HighlighterRegistry, SyntectEngine};
use crate::progress::ProgressDisplay;
use crate::site;

/// Run highlight command
pub fn run(workspace: Option<PathBuf>, args: HighlightArgs, verbose: bool) -> Result<()> {
    let site_root = site::find_root(workspace)?;
    let documents = collect_documents(&site_root, &args.paths)?;

    // Registration happens here, before any document is touched.
    let registry = HighlighterRegistry::install(SyntectEngine::new());

    let progress = ProgressDisplay::new(documents.len() as u64);
    let mut updated = 0usize;

    for document in &documents {
        progress.update_file(&document.display().to_string());
        match registry.highlight_file(document) {
            Ok(changed) => {
                if changed {
                    updated += 1;
                    if verbose {
                        println!("  highlighted {}", document.display());
                    }
                }
            }
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        }
    }

    progress.finish();
    println!(
        "{} {} document(s) scanned, {} updated",
        Style::new().green().apply_to("✓"),
        documents.len(),
        updated
    );
    Ok(())
}

/// Expand the given paths into a sorted list of HTML documents
///
/// Explicit file arguments must exist; directories are walked recursively.
fn collect_documents(site_root: &Path, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        let full_path = if path.is_absolute() {
            path.clone()
        } else {
            site_root.join(path)
        };

        if full_path.is_file() {
            documents.push(full_path);
        } else if full_path.is_dir() {
            documents.extend(
                WalkDir::new(&full_path)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(std::result::Result::ok)
                    .filter(|e| e.file_type().is_file())
                    .filter(|e| is_html(e.path()))
                    .map(|e| e.path().to_path_buf()),
            );
        } else {
            return Err(fs_error::not_found(full_path.display().to_string()));
        }
    }

    documents.sort();
    documents.dedup();
    Ok(documents)
}

fn is_html(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("html" | "htm")
    )
}
