//! Test case identity and derived file paths.

use std::path::PathBuf;

/// Suffix that marks a file as a test case source.
pub const SRC_SUFFIX: &str = ".src";

/// One discovered test case.
///
/// A case is identified by the slash-terminated path of its containing
/// folder plus its name (the source file name with [`SRC_SUFFIX`] stripped).
/// Every fixture and temporary file location derives from that pair, so the
/// whole family of paths stays consistent by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    folder: String,
    name: String,
}

impl TestCase {
    /// Create a case for `name` inside `folder` (slash-terminated).
    pub fn new(folder: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            name: name.into(),
        }
    }

    /// Case name without any suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slash-terminated path of the containing folder.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Source file fed to the parser on stdin.
    pub fn src_path(&self) -> PathBuf {
        self.with_suffix(SRC_SUFFIX)
    }

    /// Expected intermediate representation.
    pub fn in_path(&self) -> PathBuf {
        self.with_suffix(".in")
    }

    /// Expected program output.
    pub fn out_path(&self) -> PathBuf {
        self.with_suffix(".out")
    }

    /// Expected interpreter exit code, stored as decimal text.
    pub fn rc_path(&self) -> PathBuf {
        self.with_suffix(".rc")
    }

    /// Temporary capture of the parser's stdout.
    pub fn tmp_in_path(&self) -> PathBuf {
        self.with_suffix(".tmp.in")
    }

    /// Temporary capture of the interpreter's stdout.
    pub fn tmp_out_path(&self) -> PathBuf {
        self.with_suffix(".tmp.out")
    }

    fn with_suffix(&self, suffix: &str) -> PathBuf {
        PathBuf::from(format!("{}{}{}", self.folder, self.name, suffix))
    }
}
