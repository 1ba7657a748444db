//! Report rendering tests against hand-built result trees.

use tandem::config::ReportFormat;
use tandem::harness::Verdict;
use tandem::harness::results::{FolderResult, ResultTree, TestResult};
use tandem::report;

fn sample_tree() -> ResultTree {
    let mut folder = FolderResult::new("./suite/");
    folder.record(TestResult::new("add", Verdict::Ok, Verdict::Ok, Verdict::Ok));
    folder.record(TestResult::new("div", Verdict::Ok, Verdict::Nok, Verdict::Nok));
    ResultTree {
        folders: vec![folder],
    }
}

/// First folder block of the rendered document, without the surrounding
/// page scaffolding.
fn folder_block(html: &str) -> &str {
    let start = html.find("<div class=\"folder\">").unwrap();
    let end = html[start..].find("</div>").unwrap() + "</div>".len();
    &html[start..start + end]
}

#[test]
fn test_html_document_skeleton() {
    let html = report::render(&sample_tree(), ReportFormat::Html);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Toolchain conformance results</title>"));
    assert!(html.contains("<style>"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn test_html_folder_block_layout() {
    let html = report::render(&sample_tree(), ReportFormat::Html);
    insta::assert_snapshot!(folder_block(&html), @r#"
<div class="folder">
<h2>Folder "./suite/" (passed: 1/2)</h2>
<table>
<tr><th>Test name</th><th>IN</th><th>OUT</th><th>RC</th></tr>
<tr><td>add</td><td class="result ok">OK</td><td class="result ok">OK</td><td class="result ok">OK</td></tr>
<tr><td>div</td><td class="result ok">OK</td><td class="result nok">NOK</td><td class="result nok">NOK</td></tr>
</table>
</div>
"#);
}

#[test]
fn test_html_folders_keep_tree_order() {
    let tree = ResultTree {
        folders: vec![
            FolderResult::new("./suite/"),
            FolderResult::new("./suite/nested/"),
        ],
    };
    let html = report::render(&tree, ReportFormat::Html);
    let first = html.find("Folder \"./suite/\"").unwrap();
    let second = html.find("Folder \"./suite/nested/\"").unwrap();
    assert!(first < second);
}

#[test]
fn test_json_document_shape() {
    let rendered = report::render(&sample_tree(), ReportFormat::Json);
    insta::assert_snapshot!(rendered.trim_end(), @r#"
{
  "folders": [
    {
      "path": "./suite/",
      "total": 2,
      "passed": 1,
      "results": [
        {
          "name": "add",
          "in": "OK",
          "out": "OK",
          "rc": "OK"
        },
        {
          "name": "div",
          "in": "OK",
          "out": "NOK",
          "rc": "NOK"
        }
      ]
    }
  ]
}
"#);
}

#[test]
fn test_json_empty_tree_is_valid() {
    let rendered = report::render(&ResultTree::default(), ReportFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert!(json["folders"].as_array().unwrap().is_empty());
}
