//! JSON rendering of the result tree.
//!
//! The shape mirrors the in-memory structures directly: a top-level
//! `folders` array, each entry carrying `path`, `total`, `passed`, and a
//! `results` array with per-channel verdicts keyed `in`, `out`, `rc`.

use crate::harness::results::ResultTree;

/// Serialize the tree as pretty-printed JSON with a trailing newline.
pub fn render(tree: &ResultTree) -> String {
    // Plain structs with string keys; serialization cannot fail in practice.
    let mut out = serde_json::to_string_pretty(tree).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}
