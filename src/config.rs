//! Resolved run configuration.
//!
//! The CLI layer turns command-line flags into a [`RunConfig`]; everything
//! downstream (scanner, pipeline, report) treats the config as read-only.
//! Keeping the resolved form separate from the flag definitions lets tests
//! build configurations directly without going through argument parsing.

use std::path::PathBuf;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Self-contained HTML document.
    #[default]
    Html,
    /// Machine-readable JSON.
    Json,
}

/// Resolved settings for one harness run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root of the fixture tree, always slash-terminated.
    pub test_dir: String,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Parser executable: reads source text on stdin, writes the
    /// intermediate representation on stdout.
    pub parse_script: PathBuf,
    /// Interpreter executable: invoked with `--source=<file>`, writes
    /// program output on stdout.
    pub int_script: PathBuf,
    /// Report format written to stdout.
    pub format: ReportFormat,
}

impl RunConfig {
    /// Create a config for the given toolchain with default settings
    /// (current directory, non-recursive, HTML report).
    pub fn new(parse_script: impl Into<PathBuf>, int_script: impl Into<PathBuf>) -> Self {
        Self {
            test_dir: "./".to_string(),
            recursive: false,
            parse_script: parse_script.into(),
            int_script: int_script.into(),
            format: ReportFormat::default(),
        }
    }

    /// Set the fixture tree root.
    pub fn with_test_dir(mut self, dir: impl Into<String>) -> Self {
        self.test_dir = slash_terminated(dir.into());
        self
    }

    /// Enable or disable recursive descent.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the report format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

/// Append the trailing slash that downstream path concatenation relies on.
pub(crate) fn slash_terminated(mut dir: String) -> String {
    if !dir.ends_with('/') {
        dir.push('/');
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("parse.sh", "interpret.sh");
        assert_eq!(config.test_dir, "./");
        assert!(!config.recursive);
        assert_eq!(config.format, ReportFormat::Html);
    }

    #[test]
    fn test_test_dir_gains_trailing_slash() {
        let config = RunConfig::new("p", "i").with_test_dir("./suite/basic");
        assert_eq!(config.test_dir, "./suite/basic/");
    }

    #[test]
    fn test_test_dir_keeps_existing_slash() {
        let config = RunConfig::new("p", "i").with_test_dir("./suite/");
        assert_eq!(config.test_dir, "./suite/");
    }

    #[test]
    fn test_builders_chain() {
        let config = RunConfig::new("p", "i")
            .with_recursive(true)
            .with_format(ReportFormat::Json);
        assert!(config.recursive);
        assert_eq!(config.format, ReportFormat::Json);
    }
}
