//! Fragment aggregation into bundle entries
//!
//! Partitions the resolved fragment sequence by asset kind and produces one
//! bundle entry per kind, preserving resolver order within each kind. A kind
//! with zero fragments still yields an (empty) entry. Whether two script
//! fragments declare conflicting top-level bindings is not this module's
//! concern; the downstream module system owns symbol semantics.

mod render;

pub use render::entry_source;

use crate::domain::{AssetKind, BundleEntry, ResolvedFragment};

/// Partition fragments into one bundle entry per asset kind
///
/// Entries come back in [`AssetKind::ALL`] order, both kinds always present.
/// A fragment's relative order versus other fragments of the same kind is
/// exactly its resolver order, so later style fragments keep overriding
/// earlier ones.
pub fn aggregate(fragments: Vec<ResolvedFragment>) -> Vec<BundleEntry> {
    let mut entries: Vec<BundleEntry> = AssetKind::ALL.iter().map(|&k| BundleEntry::empty(k)).collect();

    for fragment in fragments {
        if let Some(entry) = entries.iter_mut().find(|e| e.kind == fragment.kind) {
            entry.fragments.push(fragment);
        }
    }

    entries
}
