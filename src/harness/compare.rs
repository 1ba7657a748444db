//! Three-channel comparison of captured artifacts against expectations.
//!
//! Every case is judged on three channels: the intermediate representation
//! (`in`), the program output (`out`), and the interpreter exit code (`rc`).
//! All three are always evaluated, never short-circuited, so a report row
//! can show exactly which channels diverged.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use super::case::TestCase;
use super::pipeline::PipelineOutcome;
use super::results::TestResult;

/// Outcome of comparing one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOK")]
    Nok,
}

impl Verdict {
    /// True for [`Verdict::Ok`].
    pub fn is_ok(self) -> bool {
        matches!(self, Verdict::Ok)
    }

    /// The report spelling.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Ok => "OK",
            Verdict::Nok => "NOK",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compare all three channels of a finished pipeline run.
pub fn compare(case: &TestCase, outcome: &PipelineOutcome) -> TestResult {
    let in_verdict = files_match(outcome.intermediate(), &case.in_path());
    let out_verdict = files_match(outcome.output(), &case.out_path());
    let rc_verdict = rc_matches(outcome.return_code(), &case.rc_path());
    TestResult::new(case.name(), in_verdict, out_verdict, rc_verdict)
}

/// Byte equality of two files. Any read failure counts as a mismatch, so a
/// capture that was never produced judges the channel NOK instead of
/// aborting the run.
fn files_match(actual: &Path, expected: &Path) -> Verdict {
    match (fs::read(actual), fs::read(expected)) {
        (Ok(a), Ok(e)) if a == e => Verdict::Ok,
        _ => Verdict::Nok,
    }
}

fn rc_matches(code: i32, expected: &Path) -> Verdict {
    match fs::read(expected) {
        Ok(bytes) if rc_text_matches(code, &bytes) => Verdict::Ok,
        _ => Verdict::Nok,
    }
}

/// True when `text` is exactly the decimal rendering of `code`: no sign for
/// zero, no leading zeros, no whitespace, no trailing newline.
pub fn rc_text_matches(code: i32, text: &[u8]) -> bool {
    text == code.to_string().as_bytes()
}
