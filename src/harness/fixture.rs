//! Fixture completion.
//!
//! A test author only has to write `N.src`; any missing expectation file is
//! created with a default before the case runs (`.in` and `.out` empty,
//! `.rc` the text `0`). Existing files are never touched, so the same case
//! can be re-run after the author fills the defaults in. A failure to create
//! a missing file aborts the whole run.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::case::TestCase;
use super::interfaces::HarnessError;

/// Default content for a missing `.rc` expectation.
const DEFAULT_RC: &str = "0";

/// Ensure all three expectation files for `case` exist.
pub fn ensure_fixtures(case: &TestCase) -> Result<(), HarnessError> {
    ensure_file(&case.in_path(), "")?;
    ensure_file(&case.out_path(), "")?;
    ensure_file(&case.rc_path(), DEFAULT_RC)?;
    Ok(())
}

fn ensure_file(path: &Path, default: &str) -> Result<(), HarnessError> {
    if path.exists() {
        return Ok(());
    }
    debug!("creating default fixture {}", path.display());
    fs::write(path, default).map_err(|source| HarnessError::FixtureCreation {
        path: path.to_string_lossy().into_owned(),
        source,
    })
}
