//! Project analysis: counts, tallies, important files and largest directories
//!
//! The `Analyzer` performs its own filtered descent (through the same
//! listing routine as the tree walker) and produces a `ProjectAnalysis`.

mod analyzer;
mod stack;

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::classify::{FileType, Importance};

pub use analyzer::{Analyzer, ROOT_LABEL};
pub use stack::detect_stack;

/// Number of entries kept in `largest_directories`.
pub const LARGEST_DIRECTORIES_LIMIT: usize = 5;

/// Counter keyed by string that remembers the order keys were first seen.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, registering it on first sight.
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map_or(0, |&i| self.entries[i].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Entries by descending count; ties keep discovery order.
    pub fn by_count(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// An important file encountered during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportantEntry {
    pub name: String,
    pub icon: &'static str,
    pub importance: Importance,
    pub description: &'static str,
}

/// A directory and the number of files it contains, descendants included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySize {
    /// Path relative to the root, `/`-separated; the root itself is [`ROOT_LABEL`].
    pub path: String,
    pub files: usize,
}

/// Aggregate produced by one analysis run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectAnalysis {
    pub total_files: usize,
    /// Directories below the root (the root is not counted)
    pub total_folders: usize,
    /// Depth of the deepest directory visited; the root is depth 0
    pub max_depth: usize,
    /// Extension key -> file count, in discovery order
    pub extensions: Tally,
    /// Category -> file count, in discovery order
    pub categories: Tally,
    /// Important files in traversal order
    pub important_files: Vec<ImportantEntry>,
    /// Distinct file types present, in discovery order
    pub file_types: Vec<FileType>,
    pub tech_stack: Vec<String>,
    /// At most [`LARGEST_DIRECTORIES_LIMIT`] directories by transitive file count
    pub largest_directories: Vec<DirectorySize>,
}

impl ProjectAnalysis {
    /// Names of the important files, in traversal order.
    pub fn important_file_names(&self) -> Vec<&str> {
        self.important_files.iter().map(|f| f.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_and_order() {
        let mut tally = Tally::new();
        tally.add("ts");
        tally.add("md");
        tally.add("ts");
        tally.add("json");

        assert_eq!(tally.get("ts"), 2);
        assert_eq!(tally.get("missing"), 0);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.len(), 3);
        let keys: Vec<_> = tally.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["ts", "md", "json"]);
    }

    #[test]
    fn test_tally_by_count_is_stable() {
        let mut tally = Tally::new();
        for key in ["a", "b", "c", "c", "b", "d"] {
            tally.add(key);
        }
        // b and c tie at 2 (b seen first), a and d tie at 1 (a seen first)
        assert_eq!(tally.by_count(), vec![("b", 2), ("c", 2), ("a", 1), ("d", 1)]);
    }

    #[test]
    fn test_tally_serializes_in_discovery_order() {
        let mut tally = Tally::new();
        tally.add("z");
        tally.add("a");
        tally.add("z");
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"z":2,"a":1}"#);
    }
}
