//! Folder traversal and case discovery.
//!
//! Discovery is driven purely by `.src` files: every one found marks a test
//! case, and its expectation files are resolved later by the case runner.
//! Folders are reported in the order they are first visited, a parent
//! before its subfolders, and entries inside a folder are taken in
//! ascending name order so runs are deterministic across filesystems.
//!
//! A folder that cannot be opened is skipped without failing the run and
//! leaves no trace in the result tree.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::case::{SRC_SUFFIX, TestCase};
use super::interfaces::{CaseRunner, HarnessError, PipelineCaseRunner};
use super::results::{FolderResult, ResultTree};
use crate::config::{RunConfig, slash_terminated};

/// Scan the configured root and run every discovered case through the
/// subprocess pipeline.
pub fn scan(config: &RunConfig) -> Result<ResultTree, HarnessError> {
    let runner = PipelineCaseRunner::new(config);
    scan_with(&config.test_dir, config.recursive, &runner)
}

/// Scan `root` with an explicit case runner.
pub fn scan_with(
    root: &str,
    recursive: bool,
    runner: &dyn CaseRunner,
) -> Result<ResultTree, HarnessError> {
    let root = slash_terminated(root.to_string());
    let folders = scan_folder(&root, recursive, runner)?;
    Ok(ResultTree { folders })
}

/// Scan one folder and return its flattened subtree: the folder's own
/// result first, then each subfolder's subtree in listing order.
fn scan_folder(
    dir: &str,
    recursive: bool,
    runner: &dyn CaseRunner,
) -> Result<Vec<FolderResult>, HarnessError> {
    let names = match sorted_entries(dir) {
        Ok(names) => names,
        Err(e) => {
            debug!("skipping unreadable folder {}: {}", dir, e);
            return Ok(Vec::new());
        }
    };

    // Registered before any entry is examined so empty folders still report.
    let mut folder = FolderResult::new(dir);
    let mut subtrees = Vec::new();

    for name in names {
        let path = Path::new(dir).join(&name);
        if path.is_dir() {
            if recursive {
                let child = format!("{dir}{name}/");
                subtrees.extend(scan_folder(&child, recursive, runner)?);
            }
        } else if let Some(base) = name.strip_suffix(SRC_SUFFIX) {
            let case = TestCase::new(dir, base);
            let result = runner.run_case(&case)?;
            debug!(
                "case {}{}: in={} out={} rc={}",
                dir, base, result.in_verdict, result.out_verdict, result.rc_verdict
            );
            folder.record(result);
        }
    }

    let mut folders = Vec::with_capacity(1 + subtrees.len());
    folders.push(folder);
    folders.append(&mut subtrees);
    Ok(folders)
}

/// Entry names of `dir` in ascending order. Directory listing order is not
/// portable; sorting keeps reports stable.
fn sorted_entries(dir: &str) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}
