//! folder-structure - snapshot a project's folder tree into folder_structure.md

pub mod analysis;
pub mod classify;
pub mod error;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use analysis::{Analyzer, ProjectAnalysis, detect_stack};
pub use classify::{Classifier, FileClassification, FolderClassification, Importance};
pub use error::{Error, Result};
pub use output::{ReportRenderer, print_json};
pub use report::{OverwritePolicy, Report, SaveOutcome, generate_report, generate_report_with};
pub use tree::{ExclusionFilter, ScanConfig, TreeWalker};
