//! Harness execution boundary interfaces
//!
//! This module defines the trait seam between traversal and execution:
//! the scanner walks folders and hands each discovered case to a
//! [`CaseRunner`], which owns fixture resolution, the subprocess pipeline,
//! and comparison. The seam lets traversal be tested with canned runners
//! (no subprocesses) and keeps the door open for alternative execution
//! strategies later.

use thiserror::Error;

use super::case::TestCase;
use super::results::TestResult;
use super::{compare, fixture, pipeline};
use crate::config::RunConfig;

/// Errors that abort a harness run.
///
/// Comparison mismatches are data, not errors; subprocess failures degrade
/// to verdicts. The only fatal condition is being unable to materialize a
/// missing expectation file.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("couldn't generate {path}: {source}")]
    FixtureCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Case Runner Interface
// ============================================================================

/// Run one discovered case through to a recorded result.
pub trait CaseRunner {
    fn run_case(&self, case: &TestCase) -> Result<TestResult, HarnessError>;
}

// ============================================================================
// Default Implementation (Subprocess Pipeline)
// ============================================================================

/// Production runner: ensure fixtures, run the two-stage pipeline, compare
/// all three channels.
pub struct PipelineCaseRunner<'a> {
    config: &'a RunConfig,
}

impl<'a> PipelineCaseRunner<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }
}

impl CaseRunner for PipelineCaseRunner<'_> {
    fn run_case(&self, case: &TestCase) -> Result<TestResult, HarnessError> {
        fixture::ensure_fixtures(case)?;
        let outcome = pipeline::run_pipeline(case, self.config);
        let result = compare::compare(case, &outcome);
        // The outcome guard drops here, removing both temp artifacts.
        Ok(result)
    }
}
