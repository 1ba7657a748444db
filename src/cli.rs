//! CLI module for the conformance harness
//!
//! This module provides the command-line interface for a harness run.
//!
//! ## Flags
//!
//! - `--directory <DIR>` - Root of the fixture tree (default `./`)
//! - `--recursive` - Descend into subfolders
//! - `--parse-script <PATH>` - Parser executable (stage one)
//! - `--int-script <PATH>` - Interpreter executable (stage two)
//! - `--format <html|json>` - Report format written to stdout
//!
//! `--help` must be the only argument; combined with anything else it is
//! rejected, so a typo can't silently discard half a command line.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! `execute` returns `CliResult<ExitCode>` instead of calling
//! `process::exit`. Only the top-level `run()` function handles errors and
//! exits: argument problems exit 10, a failed fixture creation exits 12,
//! and a completed run exits 0 no matter how many cases failed (the report
//! is the verdict, not the exit code).

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::config::{ReportFormat, RunConfig};
use crate::harness::{self, HarnessError};
use crate::report;
use crate::version::TANDEM_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Invalid or conflicting command-line arguments.
    pub const BAD_ARGS: ExitCode = ExitCode(10);
    /// A missing expectation file could not be created.
    pub const FIXTURE_WRITE: ExitCode = ExitCode(12);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Black-box conformance harness for two-stage language toolchains
#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(version = TANDEM_VERSION)]
#[command(about = "Black-box conformance harness for two-stage language toolchains")]
#[command(long_about = None)]
pub struct Cli {
    /// Root of the fixture tree
    #[arg(long, value_name = "DIR", default_value = "./")]
    pub directory: String,

    /// Descend into subfolders
    #[arg(long)]
    pub recursive: bool,

    /// Parser executable: reads source on stdin, writes IR on stdout
    #[arg(long = "parse-script", value_name = "PATH")]
    pub parse_script: PathBuf,

    /// Interpreter executable: invoked with --source=<IR file>
    #[arg(long = "int-script", value_name = "PATH")]
    pub int_script: PathBuf,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value = "html")]
    pub format: ReportFormat,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. Everything else
/// returns `CliResult` and errors are handled here.
pub fn run() {
    // Paths on argv are not required to be valid UTF-8; clap reports bad
    // bytes in String-typed flags as a parse error.
    let args: Vec<OsString> = env::args_os().collect();
    match execute(&args) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Parse arguments and run the harness.
fn execute(args: &[OsString]) -> CliResult<ExitCode> {
    if args.iter().skip(1).any(|a| is_help_flag(a)) && args.len() > 2 {
        return Err(CliError::new(
            "Error: --help cannot be combined with other arguments",
            ExitCode::BAD_ARGS,
        ));
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    print!("{err}");
                    Ok(ExitCode::SUCCESS)
                }
                _ => Err(CliError::new(err.to_string(), ExitCode::BAD_ARGS)),
            };
        }
    };

    run_harness(cli)
}

fn is_help_flag(arg: &OsStr) -> bool {
    arg == "--help" || arg == "-h"
}

/// Execute one full scan-and-report run.
fn run_harness(cli: Cli) -> CliResult<ExitCode> {
    let config = RunConfig::new(cli.parse_script, cli.int_script)
        .with_test_dir(cli.directory)
        .with_recursive(cli.recursive)
        .with_format(cli.format);

    tracing::debug!(
        "scanning {} (recursive: {})",
        config.test_dir,
        config.recursive
    );

    let tree = harness::scan(&config).map_err(|e| {
        let code = match &e {
            HarnessError::FixtureCreation { .. } => ExitCode::FIXTURE_WRITE,
        };
        CliError::new(format!("Error: {}", e), code)
    })?;

    let (passed, total) = tree.totals();
    tracing::info!(
        "{} of {} cases passed across {} folders",
        passed,
        total,
        tree.folders.len()
    );

    let rendered = report::render(&tree, config.format);
    io::stdout()
        .write_all(rendered.as_bytes())
        .map_err(|e| CliError::failure(format!("Error writing report: {}", e)))?;

    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// Tests
// ============================================================================
