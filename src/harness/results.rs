//! Aggregated results: per-case verdicts, per-folder counters, result tree.

use serde::Serialize;

use super::compare::Verdict;

/// Tri-channel verdicts for one completed test case.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Case name without the `.src` suffix.
    pub name: String,
    /// Intermediate representation channel.
    #[serde(rename = "in")]
    pub in_verdict: Verdict,
    /// Program output channel.
    #[serde(rename = "out")]
    pub out_verdict: Verdict,
    /// Exit code channel.
    #[serde(rename = "rc")]
    pub rc_verdict: Verdict,
}

impl TestResult {
    pub fn new(
        name: impl Into<String>,
        in_verdict: Verdict,
        out_verdict: Verdict,
        rc_verdict: Verdict,
    ) -> Self {
        Self {
            name: name.into(),
            in_verdict,
            out_verdict,
            rc_verdict,
        }
    }

    /// A case passes only when all three channels are OK.
    pub fn passed(&self) -> bool {
        self.in_verdict.is_ok() && self.out_verdict.is_ok() && self.rc_verdict.is_ok()
    }
}

/// Counters plus ordered case results for one scanned folder.
///
/// A folder is registered the moment it is opened, before any entry is
/// examined, so folders without a single case still appear in the report.
#[derive(Debug, Clone, Serialize)]
pub struct FolderResult {
    /// Slash-terminated folder path as displayed in the report.
    pub path: String,
    /// Number of cases run in this folder.
    pub total: usize,
    /// Number of cases with all three channels OK.
    pub passed: usize,
    /// Case results in discovery order.
    pub results: Vec<TestResult>,
}

impl FolderResult {
    /// Register a folder with no cases recorded yet.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            total: 0,
            passed: 0,
            results: Vec::new(),
        }
    }

    /// Record one completed case. Counters only ever grow.
    pub fn record(&mut self, result: TestResult) {
        self.total += 1;
        if result.passed() {
            self.passed += 1;
        }
        self.results.push(result);
    }
}

/// All folder results of a run, in the order the folders were first
/// visited (a parent precedes its subfolders).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResultTree {
    pub folders: Vec<FolderResult>,
}

impl ResultTree {
    /// True when not even the root folder could be opened.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Case counts summed across all folders: `(passed, total)`.
    pub fn totals(&self) -> (usize, usize) {
        self.folders.iter().fold((0, 0), |(passed, total), folder| {
            (passed + folder.passed, total + folder.total)
        })
    }
}
