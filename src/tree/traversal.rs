//! Directory listing shared by the tree walker and the analyzer.
//!
//! Both passes list directories through [`Traversal::read_entries`], so the
//! exclusion rule, the stat handling and the sort order are identical for
//! the rendered tree and the analysis counts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::ScanConfig;

/// Kind of a listed entry. Symbolic links report the kind of their target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single child of a listed directory.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub is_symlink: bool,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Directories are descended into unless they are reached through a link.
    pub fn should_descend(&self) -> bool {
        self.is_dir() && !self.is_symlink
    }
}

/// Common traversal helpers bound to one scan configuration.
pub struct Traversal<'a> {
    pub config: &'a ScanConfig,
}

impl<'a> Traversal<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Get the display name of a path, defaulting to the full path for roots
    /// like `/` that have no final component.
    pub fn get_name(&self, path: &Path) -> String {
        path.file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }

    /// Read, filter and sort the children of `path`.
    ///
    /// Fails only when the directory itself cannot be listed. Entries that
    /// cannot be inspected are skipped with a warning.
    pub fn read_entries(&self, path: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let read_dir = fs::read_dir(path)?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Could not read entry in {}: {}", path.display(), e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            if self.config.filter.is_excluded(&name) {
                continue;
            }

            let entry_path = entry.path();
            match entry_kind(&entry) {
                Ok((kind, is_symlink)) => entries.push(DirectoryEntry {
                    name,
                    path: entry_path,
                    kind,
                    is_symlink,
                }),
                Err(e) => {
                    warn!("Could not process {}: {}", entry_path.display(), e);
                }
            }
        }

        // Byte-wise order: deterministic and independent of the listing order
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        debug!("Listed {} ({} entries)", path.display(), entries.len());
        Ok(entries)
    }
}

/// Resolve the kind of an entry, following symbolic links to their target.
fn entry_kind(entry: &fs::DirEntry) -> io::Result<(EntryKind, bool)> {
    let file_type = entry.file_type()?;

    if file_type.is_symlink() {
        let target = fs::metadata(entry.path())?;
        let kind = if target.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        return Ok((kind, true));
    }

    let kind = if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    };
    Ok((kind, false))
}
