//! Idempotent highlighting pass over rendered HTML
//!
//! Finds fenced code blocks that declare a language
//! (`<code class="language-...">`) and rewrites their bodies with the
//! engine's markup. Elements are left byte-identical when their language is
//! unregistered, and a marker class makes repeat passes over already
//! highlighted output no-ops.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::engine::HighlightEngine;

/// Class appended to a code element once its body has been rewritten
pub const HIGHLIGHTED_MARKER: &str = "highlighted";

#[allow(clippy::expect_used)]
fn code_block_regex() -> &'static Regex {
    static CODE_BLOCK: OnceLock<Regex> = OnceLock::new();
    CODE_BLOCK.get_or_init(|| {
        Regex::new(r#"(?s)<code class="language-([A-Za-z0-9_+#.-]+)([^"]*)">(.*?)</code>"#)
            .expect("code block regex is valid")
    })
}

/// Highlight every matching code block in a document
///
/// Returns the rewritten document. Blocks already carrying the marker class
/// and blocks declaring an unregistered language pass through unchanged, so
/// the function is idempotent and a partial grammar set degrades gracefully.
pub fn highlight_code_blocks<E: HighlightEngine>(html: &str, engine: &E) -> String {
    code_block_regex()
        .replace_all(html, |caps: &Captures| {
            let language = &caps[1];
            let extra_classes = &caps[2];
            let body = &caps[3];

            if extra_classes
                .split_whitespace()
                .any(|class| class == HIGHLIGHTED_MARKER)
            {
                return caps[0].to_string();
            }

            match engine.highlight(language, &unescape(body)) {
                Some(markup) => format!(
                    "<code class=\"language-{language}{extra_classes} {HIGHLIGHTED_MARKER}\">{markup}</code>"
                ),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Decode the entities the renderer escapes inside code blocks
fn unescape(body: &str) -> String {
    body.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
