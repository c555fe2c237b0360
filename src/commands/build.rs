//! Build command implementation
//!
//! The build pass:
//! 1. Validate the declared path patterns (fatal on a malformed declaration)
//! 2. Resolve component fragments from the filesystem
//! 3. Aggregate fragments into one bundle entry per asset kind
//! 4. Render entries and the purge configuration
//! 5. Write changed files only, or verify freshness with --check

use std::path::{Path, PathBuf};

use console::Style;

use crate::bundle;
use crate::cli::BuildArgs;
use crate::domain::{AssetKind, BundleEntry};
use crate::error::{Result, bundle as bundle_error};
use crate::hash;
use crate::pattern;
use crate::purge::ContentGlobSet;
use crate::resolver;
use crate::site;

/// Run build command
pub fn run(workspace: Option<PathBuf>, args: BuildArgs, verbose: bool) -> Result<()> {
    let site_root = site::find_root(workspace)?;

    // Pattern validation happens before any filesystem traversal; a bad
    // declaration must never surface mid-build.
    let fragment_patterns = pattern::component_patterns()?;
    let script_patterns = pattern::frontend_script_patterns()?;

    let fragments = resolver::resolve(&fragment_patterns, &site_root);
    let entries = bundle::aggregate(fragments);
    let globs = ContentGlobSet::from_patterns(&fragment_patterns, &script_patterns);

    if verbose {
        print_fragments(&entries);
    }

    let outputs = render_outputs(&entries, &globs, &args.out_dir)?;

    if args.check {
        check_outputs(&site_root, &outputs)?;
        println!(
            "{} generated output is up to date",
            Style::new().green().apply_to("✓")
        );
        return Ok(());
    }

    let mut written = 0usize;
    for (rel_path, content) in &outputs {
        if hash::write_if_changed(&site_root.join(rel_path), content)? {
            written += 1;
        }
    }

    print_summary(&entries, written);
    Ok(())
}

/// Render every generated artifact as (site-relative path, content)
fn render_outputs(
    entries: &[BundleEntry],
    globs: &ContentGlobSet,
    out_dir: &Path,
) -> Result<Vec<(PathBuf, String)>> {
    let mut outputs = Vec::new();
    for entry in entries {
        outputs.push((
            out_dir.join(entry.file_name()),
            bundle::entry_source(entry, out_dir),
        ));
    }
    outputs.push((out_dir.join(ContentGlobSet::file_name()), globs.to_json()?));
    Ok(outputs)
}

fn check_outputs(site_root: &Path, outputs: &[(PathBuf, String)]) -> Result<()> {
    for (rel_path, content) in outputs {
        if !hash::up_to_date(&site_root.join(rel_path), content) {
            return Err(bundle_error::stale(rel_path.display().to_string()));
        }
    }
    Ok(())
}

fn print_fragments(entries: &[BundleEntry]) {
    for entry in entries {
        println!(
            "{} {} fragments:",
            Style::new().bold().apply_to(entry.kind.label()),
            entry.len()
        );
        for fragment in &entry.fragments {
            println!("  {}", fragment.site_path.display());
        }
    }
}

fn print_summary(entries: &[BundleEntry], written: usize) {
    let scripts = entries
        .iter()
        .find(|e| e.kind == AssetKind::Script)
        .map_or(0, BundleEntry::len);
    let stylesheets = entries
        .iter()
        .find(|e| e.kind == AssetKind::Stylesheet)
        .map_or(0, BundleEntry::len);

    println!(
        "{} bundled {} script fragment(s), {} stylesheet fragment(s); {} file(s) updated",
        Style::new().green().apply_to("✓"),
        scripts,
        stylesheets,
        written
    );
}
