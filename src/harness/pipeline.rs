//! Two-stage subprocess pipeline.
//!
//! Stage one feeds the case source to the parser on stdin and captures its
//! stdout as the intermediate artifact. Stage two hands that artifact to the
//! interpreter via `--source=<path>` and captures stdout plus the exit code.
//! Both captures are temporary files next to the fixtures; a guard removes
//! them when the caller is done comparing.
//!
//! Failure policy: the parser's exit status is ignored outright (a broken
//! parse surfaces as an empty or wrong intermediate artifact), and an
//! interpreter that cannot even be spawned degrades to exit code 127, the
//! shell's command-not-found status. Nothing in this module aborts a run.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use super::case::TestCase;
use crate::config::RunConfig;

/// Exit code reported when the interpreter cannot be spawned.
const SPAWN_FAILURE_CODE: i32 = 127;

/// One subprocess invocation: a program, its arguments, optional stdin
/// redirection, and a file that receives stdout verbatim.
#[derive(Debug)]
pub struct Stage {
    program: PathBuf,
    args: Vec<OsString>,
    stdin_from: Option<PathBuf>,
    stdout_to: PathBuf,
}

impl Stage {
    /// Define a stage running `program` with stdout captured to `stdout_to`.
    pub fn new(program: impl Into<PathBuf>, stdout_to: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin_from: None,
            stdout_to: stdout_to.into(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Redirect the child's stdin from a file. Without this the child gets
    /// a null stdin, so it can never contend for the harness's own input.
    pub fn stdin_from(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdin_from = Some(path.into());
        self
    }

    /// Run the stage and block until the child exits.
    ///
    /// The capture file is created (and truncated) before the child is
    /// spawned, so it exists even when spawning fails. Stderr is left
    /// attached to the harness's stderr.
    pub fn run(&self) -> io::Result<i32> {
        let capture = File::create(&self.stdout_to)?;
        let mut command = Command::new(&self.program);
        command.args(&self.args).stdout(Stdio::from(capture));
        match &self.stdin_from {
            Some(path) => command.stdin(Stdio::from(File::open(path)?)),
            None => command.stdin(Stdio::null()),
        };
        let status = command.status()?;
        Ok(exit_code(status))
    }
}

/// Map an exit status to the numeric code the rc channel compares.
///
/// Signal-terminated children report 128 plus the signal number, matching
/// shell convention, so an expected crash can still be pinned in a fixture.
fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => {
            #[cfg(unix)]
            {
                use std::os::unix::process::ExitStatusExt;
                if let Some(signal) = status.signal() {
                    return 128 + signal;
                }
            }
            1
        }
    }
}

/// Scoped ownership of a case's two temporary artifacts.
///
/// Dropping the guard removes both files. Removal failures are ignored; a
/// stage that never produced its capture leaves nothing to remove.
#[derive(Debug)]
pub struct TempArtifacts {
    intermediate: PathBuf,
    output: PathBuf,
}

impl TempArtifacts {
    fn new(case: &TestCase) -> Self {
        Self {
            intermediate: case.tmp_in_path(),
            output: case.tmp_out_path(),
        }
    }

    /// Captured parser stdout (`<base>.tmp.in`).
    pub fn intermediate(&self) -> &Path {
        &self.intermediate
    }

    /// Captured interpreter stdout (`<base>.tmp.out`).
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Drop for TempArtifacts {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.intermediate);
        let _ = fs::remove_file(&self.output);
    }
}

/// Captured observables of one pipeline execution.
///
/// The artifacts stay on disk for as long as the embedded guard lives, so
/// comparison reads them before the outcome is dropped.
#[derive(Debug)]
pub struct PipelineOutcome {
    return_code: i32,
    artifacts: TempArtifacts,
}

impl PipelineOutcome {
    /// Interpreter exit code.
    pub fn return_code(&self) -> i32 {
        self.return_code
    }

    /// Path of the captured intermediate representation.
    pub fn intermediate(&self) -> &Path {
        self.artifacts.intermediate()
    }

    /// Path of the captured program output.
    pub fn output(&self) -> &Path {
        self.artifacts.output()
    }
}

/// Run both pipeline stages for `case`.
pub fn run_pipeline(case: &TestCase, config: &RunConfig) -> PipelineOutcome {
    let artifacts = TempArtifacts::new(case);

    let parse = Stage::new(&config.parse_script, artifacts.intermediate())
        .stdin_from(case.src_path());
    if let Err(e) = parse.run() {
        debug!("parser stage did not run for {}: {}", case.name(), e);
    }

    let interpret = Stage::new(&config.int_script, artifacts.output())
        .arg(source_arg(artifacts.intermediate()));
    let return_code = match interpret.run() {
        Ok(code) => code,
        Err(e) => {
            debug!("interpreter stage did not run for {}: {}", case.name(), e);
            SPAWN_FAILURE_CODE
        }
    };

    PipelineOutcome {
        return_code,
        artifacts,
    }
}

/// Interpreter argument naming the intermediate file: `--source=<path>`.
fn source_arg(path: &Path) -> OsString {
    let mut arg = OsString::from("--source=");
    arg.push(path);
    arg
}
