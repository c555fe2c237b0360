//! Bundle entry domain type
//!
//! A bundle entry is the synthetic unit the aggregator produces per asset
//! kind. It exists only for the duration of one build pass and has no
//! identity beyond its kind.

use super::fragment::{AssetKind, ResolvedFragment};

/// One synthetic bundle entry per asset kind
#[derive(Debug, Clone)]
pub struct BundleEntry {
    /// Asset kind this entry aggregates
    pub kind: AssetKind,

    /// Fragments in resolver order
    pub fragments: Vec<ResolvedFragment>,
}

impl BundleEntry {
    /// Create an empty entry for a kind
    ///
    /// An empty entry is valid output: a kind with zero fragments still gets
    /// a bundle so downstream consumers see a stable entry set.
    pub fn empty(kind: AssetKind) -> Self {
        Self {
            kind,
            fragments: Vec::new(),
        }
    }

    /// File name of the generated entry within the output directory
    pub fn file_name(&self) -> &'static str {
        match self.kind {
            AssetKind::Script => "index.js",
            AssetKind::Stylesheet => "index.css",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}
