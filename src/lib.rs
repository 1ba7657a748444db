#![forbid(unsafe_code)]
//! Black-box conformance harness for two-stage language toolchains
//!
//! A toolchain under test is a parser that turns source text into an
//! intermediate representation on stdout, plus an interpreter that executes
//! that representation and produces program output and an exit code. This
//! crate discovers fixture-based cases (`.src` files with `.in`/`.out`/`.rc`
//! expectations), drives each through the two-stage subprocess pipeline,
//! compares all three channels byte for byte, and renders an aggregated
//! HTML or JSON report.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a harness bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod config;
pub mod harness;
pub mod report;
pub mod version;

pub use config::{ReportFormat, RunConfig};

pub use harness::{
    CaseRunner, FolderResult, HarnessError, PipelineCaseRunner, ResultTree, TestCase, TestResult,
    Verdict, scan, scan_with,
};
