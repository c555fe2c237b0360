//! Build-time syntax highlighting for rendered documents
//!
//! This module wires a fixed grammar set into a highlighting engine and
//! applies it to fenced code blocks in rendered HTML. The engine itself is a
//! capability boundary: the core only ever calls `register` and `highlight`
//! and never inspects the engine's internals.

pub mod document;
pub mod engine;
pub mod registry;
pub mod syntect_engine;

pub use engine::{Grammar, HighlightEngine};
pub use registry::HighlighterRegistry;
pub use syntect_engine::SyntectEngine;
