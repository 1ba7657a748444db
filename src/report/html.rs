//! Self-contained HTML report.
//!
//! One document with an embedded stylesheet and no external assets, meant
//! to be redirected to a file and opened as-is. Folders render in tree
//! order as a heading plus a verdict table; an empty tree renders a notice
//! instead, since the only way to get one is a root that could not be
//! opened.

use std::fmt::Write;

use crate::harness::results::{FolderResult, ResultTree, TestResult};

const STYLE: &str = "\
body { background-color: #b2c2bf; margin: 30px; font-family: 'Segoe UI', Arial, sans-serif; }
.container { margin: auto; width: 60%; min-width: 700px; box-shadow: 8px 8px 5px grey; }
.header { background-color: #c0ded9; text-align: center; padding: 10px; }
.content { background-color: #eaece5; padding: 15px; }
.folder { background-color: #ffffff; padding: 15px; margin-bottom: 15px; }
.notice { font-style: italic; }
table, th, td { border: 1px solid black; border-collapse: collapse; }
th { background-color: lightgrey; padding: 2px 8px; }
td { padding: 2px 8px; }
.result { width: 40px; text-align: center; }
.result.ok { background-color: #6b8e23; color: #ffffff; }
.result.nok { background-color: #ff1700; color: #ffffff; }
";

/// Render the whole document.
pub fn render(tree: &ResultTree) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Toolchain conformance results</title>\n");
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<div class=\"container\">\n");
    html.push_str("<div class=\"header\"><h1>Toolchain conformance results</h1></div>\n");
    html.push_str("<div class=\"content\">\n");

    if tree.is_empty() {
        html.push_str("<p class=\"notice\">Test folder could not be opened</p>\n");
    } else {
        for folder in &tree.folders {
            render_folder(&mut html, folder);
        }
    }

    html.push_str("</div>\n</div>\n</body>\n</html>\n");
    html
}

fn render_folder(html: &mut String, folder: &FolderResult) {
    html.push_str("<div class=\"folder\">\n");
    let _ = writeln!(
        html,
        "<h2>Folder \"{}\" (passed: {}/{})</h2>",
        escape(&folder.path),
        folder.passed,
        folder.total
    );
    if folder.results.is_empty() {
        html.push_str("<p class=\"notice\">No tests found in this folder</p>\n");
    } else {
        html.push_str("<table>\n");
        html.push_str("<tr><th>Test name</th><th>IN</th><th>OUT</th><th>RC</th></tr>\n");
        for result in &folder.results {
            render_row(html, result);
        }
        html.push_str("</table>\n");
    }
    html.push_str("</div>\n");
}

fn render_row(html: &mut String, result: &TestResult) {
    let _ = write!(html, "<tr><td>{}</td>", escape(&result.name));
    for verdict in [result.in_verdict, result.out_verdict, result.rc_verdict] {
        let class = if verdict.is_ok() { "ok" } else { "nok" };
        let _ = write!(html, "<td class=\"result {}\">{}</td>", class, verdict);
    }
    html.push_str("</tr>\n");
}

/// Minimal entity escaping for text interpolated into the document.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::compare::Verdict;

    #[test]
    fn test_escape_covers_markup_characters() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_empty_tree_renders_notice() {
        let html = render(&ResultTree::default());
        assert!(html.contains("Test folder could not be opened"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_folder_heading_and_rows() {
        let mut folder = FolderResult::new("./suite/");
        folder.record(TestResult::new("add", Verdict::Ok, Verdict::Ok, Verdict::Ok));
        folder.record(TestResult::new("sub", Verdict::Ok, Verdict::Nok, Verdict::Ok));
        let tree = ResultTree {
            folders: vec![folder],
        };

        let html = render(&tree);
        assert!(html.contains("<h2>Folder \"./suite/\" (passed: 1/2)</h2>"));
        assert!(html.contains("<td>add</td>"));
        assert!(html.contains("<td class=\"result nok\">NOK</td>"));
    }

    #[test]
    fn test_folder_without_cases_renders_notice() {
        let tree = ResultTree {
            folders: vec![FolderResult::new("./hollow/")],
        };
        let html = render(&tree);
        assert!(html.contains("(passed: 0/0)"));
        assert!(html.contains("No tests found in this folder"));
    }

    #[test]
    fn test_case_names_are_escaped() {
        let mut folder = FolderResult::new("./t/");
        folder.record(TestResult::new(
            "a<b",
            Verdict::Ok,
            Verdict::Ok,
            Verdict::Ok,
        ));
        let tree = ResultTree {
            folders: vec![folder],
        };
        let html = render(&tree);
        assert!(html.contains("<td>a&lt;b</td>"));
        assert!(!html.contains("<td>a<b</td>"));
    }
}
