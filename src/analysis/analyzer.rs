//! Analyzer - filtered recursive descent that aggregates project statistics

use std::path::Path;

use tracing::debug;

use crate::classify::{Classifier, FileType};
use crate::tree::{ScanConfig, Traversal};

use super::stack::detect_stack;
use super::{DirectorySize, ImportantEntry, LARGEST_DIRECTORIES_LIMIT, ProjectAnalysis, Tally};

/// Key used for the root directory in `largest_directories`.
pub const ROOT_LABEL: &str = "root";

/// Walks a root and produces a [`ProjectAnalysis`].
pub struct Analyzer {
    config: ScanConfig,
}

impl Analyzer {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, root: &Path) -> ProjectAnalysis {
        let mut collector = AnalysisCollector::default();
        self.visit(root, "", 0, &mut collector);
        collector.finalize()
    }

    /// Visit one directory and return its transitive file count.
    ///
    /// `relative` is the path from the root, empty for the root itself.
    fn visit(
        &self,
        path: &Path,
        relative: &str,
        depth: usize,
        collector: &mut AnalysisCollector,
    ) -> usize {
        let entries = match Traversal::new(&self.config).read_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping unreadable directory {}: {}", path.display(), e);
                return 0;
            }
        };

        let slot = collector.record_directory(relative, depth);
        let mut files = 0;

        for entry in &entries {
            if entry.is_dir() {
                // Linked directories are never entered, so they count for nothing
                if entry.should_descend() {
                    let child = child_path(relative, &entry.name);
                    files += self.visit(&entry.path, &child, depth + 1, collector);
                }
            } else {
                collector.record_file(&entry.name, &self.config.classifier);
                files += 1;
            }
        }

        collector.set_directory_files(slot, files);
        files
    }
}

fn child_path(relative: &str, name: &str) -> String {
    if relative.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", relative, name)
    }
}

/// Accumulates counts during the descent.
#[derive(Debug, Default)]
struct AnalysisCollector {
    files: usize,
    folders: usize,
    max_depth: usize,
    extensions: Tally,
    categories: Tally,
    important_files: Vec<ImportantEntry>,
    file_types: Vec<FileType>,
    /// Directories in pre-order with their transitive file counts
    directories: Vec<DirectorySize>,
}

impl AnalysisCollector {
    /// Register a directory before its children so ties keep encounter order.
    /// Returns the slot to fill in once the count is known.
    fn record_directory(&mut self, relative: &str, depth: usize) -> usize {
        if depth > 0 {
            self.folders += 1;
        }
        self.max_depth = self.max_depth.max(depth);

        let path = if relative.is_empty() {
            ROOT_LABEL.to_string()
        } else {
            relative.to_string()
        };
        self.directories.push(DirectorySize { path, files: 0 });
        self.directories.len() - 1
    }

    fn set_directory_files(&mut self, slot: usize, files: usize) {
        self.directories[slot].files = files;
    }

    fn record_file(&mut self, name: &str, classifier: &Classifier) {
        self.files += 1;

        let class = classifier.classify_file(name);
        self.extensions.add(&class.extension);
        self.categories.add(class.file_type.category);

        if !self.file_types.contains(&class.file_type) {
            self.file_types.push(class.file_type);
        }

        if let Some(important) = class.important {
            self.important_files.push(ImportantEntry {
                name: name.to_string(),
                icon: important.icon,
                importance: important.importance,
                description: important.description,
            });
        }
    }

    fn finalize(self) -> ProjectAnalysis {
        let names: Vec<&str> = self
            .important_files
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        let tech_stack = detect_stack(&self.extensions, &names);

        let mut largest = self.directories;
        // Stable sort: equal counts stay in encounter order
        largest.sort_by(|a, b| b.files.cmp(&a.files));
        largest.truncate(LARGEST_DIRECTORIES_LIMIT);

        ProjectAnalysis {
            total_files: self.files,
            total_folders: self.folders,
            max_depth: self.max_depth,
            extensions: self.extensions,
            categories: self.categories,
            important_files: self.important_files,
            file_types: self.file_types,
            tech_stack,
            largest_directories: largest,
        }
    }
}
