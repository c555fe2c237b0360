//! Fragment resolution from declared path patterns
//!
//! Expands the declared patterns into a concrete, deduplicated, ordered
//! fragment list. Resolution is a pure filesystem read: no side effects, and
//! for a fixed filesystem snapshot the output is byte-identical across runs.
//!
//! Ordering contract:
//! - patterns contribute in declaration order
//! - within one pattern, fragments are sorted by site-relative path, never
//!   OS directory-entry order
//! - a file matched by several patterns keeps its first occurrence only,
//!   deduplicated by canonical path

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::{AssetKind, ResolvedFragment};
use crate::pattern::PathPattern;

/// Resolve patterns into an ordered fragment sequence
///
/// A pattern whose root directory does not exist contributes zero fragments;
/// components can be added and removed freely between builds without touching
/// any registry.
pub fn resolve(patterns: &[PathPattern], site_root: &Path) -> Vec<ResolvedFragment> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut fragments = Vec::new();

    for pattern in patterns {
        for fragment in resolve_pattern(pattern, site_root) {
            if seen.insert(canonical_identity(&fragment.absolute_path)) {
                fragments.push(fragment);
            }
        }
    }

    fragments
}

fn resolve_pattern(pattern: &PathPattern, site_root: &Path) -> Vec<ResolvedFragment> {
    let root = site_root.join(pattern.root());
    if !root.is_dir() {
        return Vec::new();
    }

    let mut matched: Vec<ResolvedFragment> = WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|entry| {
            let file_name = entry.file_name().to_str()?;
            let token = pattern.match_extension(file_name)?;
            let kind = AssetKind::for_extension(token)?;
            let absolute_path = entry.path().to_path_buf();
            let site_path = entry
                .path()
                .strip_prefix(site_root)
                .unwrap_or(entry.path())
                .to_path_buf();
            Some(ResolvedFragment {
                site_path,
                absolute_path,
                kind,
            })
        })
        .collect();

    matched.sort_by(|a, b| a.site_path.cmp(&b.site_path));
    matched
}

/// Canonical path used for deduplication across overlapping patterns
///
/// Falls back to the raw path when canonicalization fails (e.g., a file
/// deleted mid-walk); dedup then degrades to exact-path identity.
fn canonical_identity(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
