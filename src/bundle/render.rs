//! Bundle entry source rendering
//!
//! Renders a bundle entry into the source text the module bundler consumes as
//! a single virtual import. Each fragment keeps its own file identity (one
//! import per fragment, in order) so source maps still point at the original
//! component files.

use std::path::{Component, Path};

use crate::domain::{AssetKind, BundleEntry};
use crate::path_utils;

const GENERATED_HEADER: &str = "Generated by weft. Do not edit.";

/// Render the source text for a bundle entry
///
/// `out_dir` is the entry's output directory relative to the site root; the
/// rendered imports are relative to it. The script entry pulls in the
/// stylesheet entry first so one virtual import covers both kinds.
pub fn entry_source(entry: &BundleEntry, out_dir: &Path) -> String {
    match entry.kind {
        AssetKind::Script => script_source(entry, out_dir),
        AssetKind::Stylesheet => stylesheet_source(entry, out_dir),
    }
}

fn script_source(entry: &BundleEntry, out_dir: &Path) -> String {
    let mut source = format!("// {GENERATED_HEADER}\n");
    source.push_str("import \"./index.css\";\n");
    for fragment in &entry.fragments {
        source.push_str(&format!(
            "import \"{}\";\n",
            relative_import(out_dir, &fragment.site_path)
        ));
    }
    source
}

fn stylesheet_source(entry: &BundleEntry, out_dir: &Path) -> String {
    let mut source = format!("/* {GENERATED_HEADER} */\n");
    for fragment in &entry.fragments {
        source.push_str(&format!(
            "@import \"{}\";\n",
            relative_import(out_dir, &fragment.site_path)
        ));
    }
    source
}

/// Import path from the output directory up to a site-root-relative fragment
fn relative_import(out_dir: &Path, site_path: &Path) -> String {
    let depth = out_dir
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();

    let mut import = String::new();
    for _ in 0..depth {
        import.push_str("../");
    }
    import.push_str(&path_utils::to_forward_slashes(site_path));
    import
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResolvedFragment;
    use std::path::PathBuf;

    fn fragment(site_path: &str, kind: AssetKind) -> ResolvedFragment {
        ResolvedFragment {
            site_path: PathBuf::from(site_path),
            absolute_path: PathBuf::from("/site").join(site_path),
            kind,
        }
    }

    #[test]
    fn test_script_entry_imports_stylesheet_entry_first() {
        let entry = BundleEntry {
            kind: AssetKind::Script,
            fragments: vec![
                fragment("src/_components/a.js", AssetKind::Script),
                fragment("src/_components/nav/nav.js", AssetKind::Script),
            ],
        };

        let source = entry_source(&entry, Path::new("frontend/bundles"));
        assert_eq!(
            source,
            "// Generated by weft. Do not edit.\n\
             import \"./index.css\";\n\
             import \"../../src/_components/a.js\";\n\
             import \"../../src/_components/nav/nav.js\";\n"
        );
    }

    #[test]
    fn test_stylesheet_entry_imports_in_order() {
        let entry = BundleEntry {
            kind: AssetKind::Stylesheet,
            fragments: vec![
                fragment("src/_components/base.css", AssetKind::Stylesheet),
                fragment("src/_components/theme.css", AssetKind::Stylesheet),
            ],
        };

        let source = entry_source(&entry, Path::new("frontend/bundles"));
        assert_eq!(
            source,
            "/* Generated by weft. Do not edit. */\n\
             @import \"../../src/_components/base.css\";\n\
             @import \"../../src/_components/theme.css\";\n"
        );
    }

    #[test]
    fn test_empty_script_entry_still_imports_stylesheet_entry() {
        let entry = BundleEntry::empty(AssetKind::Script);
        let source = entry_source(&entry, Path::new("frontend/bundles"));
        assert!(source.contains("import \"./index.css\";"));
    }

    #[test]
    fn test_empty_stylesheet_entry_is_just_the_header() {
        let entry = BundleEntry::empty(AssetKind::Stylesheet);
        let source = entry_source(&entry, Path::new("frontend/bundles"));
        assert_eq!(source, "/* Generated by weft. Do not edit. */\n");
    }

    #[test]
    fn test_relative_import_depth() {
        assert_eq!(
            relative_import(Path::new("frontend/bundles"), Path::new("src/a.css")),
            "../../src/a.css"
        );
        assert_eq!(
            relative_import(Path::new("out"), Path::new("src/a.css")),
            "../src/a.css"
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let entry = BundleEntry {
            kind: AssetKind::Script,
            fragments: vec![fragment("src/_components/a.js", AssetKind::Script)],
        };
        let out_dir = Path::new("frontend/bundles");
        assert_eq!(entry_source(&entry, out_dir), entry_source(&entry, out_dir));
    }
}
