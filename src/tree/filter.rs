//! Name-based exclusion of directory entries

use std::collections::HashSet;

/// Name of the generated report. Always excluded so re-runs don't list it.
pub const REPORT_FILE_NAME: &str = "folder_structure.md";

/// Entry names that are never rendered, counted or descended into.
pub const EXCLUDED_NAMES: &[&str] = &[
    // Build and dependency folders
    "node_modules",
    ".next",
    "dist",
    "build",
    "out",
    "target",
    "bin",
    "obj",
    // Version control and IDE folders
    ".git",
    ".svn",
    ".hg",
    ".vscode",
    ".idea",
    ".eclipse",
    ".gradle",
    // Language-specific build/cache folders
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".cache",
    ".eggs",
    ".coverage",
    ".nyc_output",
    ".webpack",
    ".nuxt",
    ".expo",
    ".angular",
    // Package managers
    "bower_components",
    "jspm_packages",
    "vendor",
    // Logs and temporary files
    "logs",
    "tmp",
    "temp",
    ".tmp",
    ".log",
    // Testing and coverage
    "coverage",
    ".reports",
    // Environment and secret files
    ".env",
    ".env.local",
    ".env.development",
    ".env.production",
    REPORT_FILE_NAME,
];

/// Exact-match exclusion set over single path segments.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    names: HashSet<String>,
}

impl ExclusionFilter {
    /// Create a filter from an explicit list of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether an entry name is excluded. Case-sensitive, no globbing.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(EXCLUDED_NAMES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_exclusions() {
        let filter = ExclusionFilter::default();
        assert!(filter.is_excluded("node_modules"));
        assert!(filter.is_excluded(".git"));
        assert!(filter.is_excluded(".env.local"));
        assert!(filter.is_excluded(REPORT_FILE_NAME));
        assert!(!filter.is_excluded("src"));
        assert!(!filter.is_excluded(".env.example"));
    }

    #[test]
    fn test_exact_match_only() {
        let filter = ExclusionFilter::default();
        // Case-sensitive
        assert!(!filter.is_excluded("Node_Modules"));
        assert!(!filter.is_excluded("DIST"));
        // No prefix/suffix or glob matching
        assert!(!filter.is_excluded("node_modules_backup"));
        assert!(!filter.is_excluded("my.log"));
        assert!(!filter.is_excluded("build.rs"));
    }

    #[test]
    fn test_custom_filter() {
        let filter = ExclusionFilter::new(["secret"]);
        assert!(filter.is_excluded("secret"));
        assert!(!filter.is_excluded("node_modules"));
    }
}
