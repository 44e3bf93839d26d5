//! Report generation and saving
//!
//! Runs the tree walker and the analyzer over a root, renders the report and
//! writes it to `<root>/folder_structure.md`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::analysis::{Analyzer, ProjectAnalysis};
use crate::error::{Error, Result};
use crate::output::ReportRenderer;
use crate::tree::{REPORT_FILE_NAME, ScanConfig, Traversal, TreeWalker};

/// What to do when a report already exists at the output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace the existing file.
    Overwrite,
    /// Ask the confirmation callback.
    Ask,
    /// Fail with [`Error::AlreadyExists`].
    Refuse,
}

/// Result of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// The user declined to overwrite the existing file.
    Cancelled(PathBuf),
}

/// A rendered report together with the data it was built from.
#[derive(Debug, Clone)]
pub struct Report {
    pub root: PathBuf,
    pub project_name: String,
    pub tree: String,
    pub analysis: ProjectAnalysis,
    pub text: String,
}

/// Generate the report for `root`, stamped with the current time.
pub fn generate_report(root: &Path, config: &ScanConfig) -> Result<Report> {
    generate_report_with(root, config, &ReportRenderer::now())
}

/// Generate the report for `root` with an explicit renderer.
pub fn generate_report_with(
    root: &Path,
    config: &ScanConfig,
    renderer: &ReportRenderer,
) -> Result<Report> {
    let metadata = fs::metadata(root).map_err(|_| Error::RootNotFound(root.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    let project_name = Traversal::new(config).get_name(root);
    let tree = TreeWalker::new(config.clone()).render(root);
    let analysis = Analyzer::new(config.clone()).analyze(root);
    let text = renderer.render(&analysis, &tree, &project_name);

    Ok(Report {
        root: root.to_path_buf(),
        project_name,
        tree,
        analysis,
        text,
    })
}

impl Report {
    /// Where the report is written.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(REPORT_FILE_NAME)
    }

    /// Write the report, consulting `policy` when a file is already there.
    ///
    /// `confirm` is only called under [`OverwritePolicy::Ask`]; returning
    /// `false` leaves the existing file untouched.
    pub fn save<F>(&self, policy: OverwritePolicy, confirm: F) -> Result<SaveOutcome>
    where
        F: FnOnce(&Path) -> bool,
    {
        let path = self.output_path();

        if path.exists() {
            match policy {
                OverwritePolicy::Overwrite => {}
                OverwritePolicy::Ask => {
                    if !confirm(&path) {
                        info!("Left existing {} untouched", path.display());
                        return Ok(SaveOutcome::Cancelled(path));
                    }
                }
                OverwritePolicy::Refuse => return Err(Error::AlreadyExists(path)),
            }
        }

        fs::write(&path, &self.text).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {} ({} bytes)", path.display(), self.text.len());

        Ok(SaveOutcome::Saved(path))
    }
}
