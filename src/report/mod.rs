//! Report rendering for a finalized result tree.
//!
//! Rendering is a pure function of the tree; nothing here touches the
//! filesystem or the processes that produced the results.

pub mod html;
pub mod json;

use crate::config::ReportFormat;
use crate::harness::results::ResultTree;

/// Render the tree in the requested format.
pub fn render(tree: &ResultTree, format: ReportFormat) -> String {
    match format {
        ReportFormat::Html => html::render(tree),
        ReportFormat::Json => json::render(tree),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_format() {
        let tree = ResultTree::default();
        assert!(render(&tree, ReportFormat::Html).starts_with("<!DOCTYPE html>"));
        assert!(render(&tree, ReportFormat::Json).starts_with('{'));
    }
}
