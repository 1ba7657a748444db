//! The discovery, execution, and comparison engine.
//!
//! A run walks the fixture tree ([`scanner`]), resolves missing
//! expectations ([`fixture`]), drives each case through the two-stage
//! subprocess pipeline ([`pipeline`]), judges the three channels
//! ([`compare`]), and accumulates everything into a [`results::ResultTree`]
//! ready for rendering.

pub mod case;
pub mod compare;
pub mod fixture;
pub mod interfaces;
pub mod pipeline;
pub mod results;
pub mod scanner;

pub use case::TestCase;
pub use compare::Verdict;
pub use interfaces::{CaseRunner, HarnessError, PipelineCaseRunner};
pub use results::{FolderResult, ResultTree, TestResult};
pub use scanner::{scan, scan_with};
