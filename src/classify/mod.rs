//! File and folder classification
//!
//! Maps file names to an extension key, a display icon, a category and an
//! optional importance tier, and folder names to an icon and description.
//! The lookup tables are plain data held by a [`Classifier`]; the standard
//! tables are built once per process and shared.

mod tables;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use serde::Serialize;

/// Display information for a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FileType {
    pub icon: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

impl FileType {
    pub const fn new(icon: &'static str, category: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            category,
            description,
        }
    }
}

/// Used for any extension missing from the table.
pub const DEFAULT_FILE_TYPE: FileType = FileType::new("📄", "Other", "Other file");

/// Importance tier of a well-known file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Critical,
    High,
    Medium,
}

impl Importance {
    /// All tiers, most important first.
    pub const ALL: [Importance; 3] = [Importance::Critical, Importance::High, Importance::Medium];

    /// Priority glyph shown in front of important files.
    pub fn glyph(self) -> &'static str {
        match self {
            Importance::Critical => "🔴",
            Importance::High => "🟡",
            Importance::Medium => "🟢",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Importance::Critical => "Critical",
            Importance::High => "High",
            Importance::Medium => "Medium",
        }
    }

    /// One-line explanation used by the report legend.
    pub fn explanation(self) -> &'static str {
        match self {
            Importance::Critical => "project manifests and entry documentation",
            Importance::High => "lockfiles, build and container configuration",
            Importance::Medium => "tooling configuration and repository hygiene",
        }
    }
}

/// Entry of the important-files table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportantFile {
    pub icon: &'static str,
    pub importance: Importance,
    pub description: &'static str,
}

impl ImportantFile {
    pub const fn new(icon: &'static str, importance: Importance, description: &'static str) -> Self {
        Self {
            icon,
            importance,
            description,
        }
    }
}

/// Icon and description for a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FolderClassification {
    pub icon: &'static str,
    pub description: &'static str,
}

impl FolderClassification {
    pub const fn new(icon: &'static str, description: &'static str) -> Self {
        Self { icon, description }
    }
}

/// Used for any folder missing from the table.
pub const DEFAULT_FOLDER: FolderClassification = FolderClassification::new("📂", "Folder");

/// Everything known about a single file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileClassification {
    /// Lower-cased extension or pseudo-extension (empty when there is none).
    pub extension: String,
    pub file_type: FileType,
    /// Set when the exact file name is in the important-files table.
    pub important: Option<ImportantFile>,
}

impl FileClassification {
    pub fn is_important(&self) -> bool {
        self.important.is_some()
    }
}

/// Lookup tables consulted by the [`Classifier`].
#[derive(Debug, Clone, Default)]
pub struct ClassificationTables {
    /// Extension key (lower-case) -> file type
    pub extensions: HashMap<&'static str, FileType>,
    /// Exact, case-sensitive file name -> importance entry
    pub important_files: HashMap<&'static str, ImportantFile>,
    /// Folder name (lower-case) -> folder classification
    pub folders: HashMap<&'static str, FolderClassification>,
}

impl ClassificationTables {
    /// The built-in tables.
    pub fn standard() -> Self {
        tables::standard()
    }
}

static STANDARD_TABLES: LazyLock<Arc<ClassificationTables>> =
    LazyLock::new(|| Arc::new(ClassificationTables::standard()));

/// Classifies file and folder names against a set of tables.
///
/// Cloning is cheap: the tables are shared.
#[derive(Debug, Clone)]
pub struct Classifier {
    tables: Arc<ClassificationTables>,
}

impl Classifier {
    pub fn new(tables: ClassificationTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    pub fn classify_file(&self, name: &str) -> FileClassification {
        let extension = extension_key(name);
        let file_type = self.file_type(&extension);
        let important = self.tables.important_files.get(name).copied();

        FileClassification {
            extension,
            file_type,
            important,
        }
    }

    pub fn classify_folder(&self, name: &str) -> FolderClassification {
        self.tables
            .folders
            .get(name.to_lowercase().as_str())
            .copied()
            .unwrap_or(DEFAULT_FOLDER)
    }

    /// File type for an extension key, falling back to [`DEFAULT_FILE_TYPE`].
    pub fn file_type(&self, extension: &str) -> FileType {
        self.tables
            .extensions
            .get(extension)
            .copied()
            .unwrap_or(DEFAULT_FILE_TYPE)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            tables: Arc::clone(&STANDARD_TABLES),
        }
    }
}

/// Derive the extension key for a file name.
///
/// Only the last dot-separated segment counts, so `archive.tar.gz` yields
/// `gz`. A leading dot does not start an extension: `.gitignore` has none and
/// falls through to the well-known-name rules. Names beginning with `.env`
/// always map to `env`, even when they carry an extension of their own
/// (`.env.example` is `env`, not `example`), so every env variant is counted
/// together.
pub fn extension_key(name: &str) -> String {
    if name.starts_with(".env") {
        return "env".to_string();
    }

    if let Some(ext) = Path::new(name).extension() {
        return ext.to_string_lossy().to_lowercase();
    }

    if name.eq_ignore_ascii_case("dockerfile") {
        "dockerfile".to_string()
    } else if name == ".gitignore" {
        "gitignore".to_string()
    } else if name == ".dockerignore" {
        "dockerignore".to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_key() {
        assert_eq!(extension_key("main.rs"), "rs");
        assert_eq!(extension_key("Component.TSX"), "tsx");
        assert_eq!(extension_key("archive.tar.gz"), "gz");
        assert_eq!(extension_key("Makefile"), "");
        assert_eq!(extension_key("file."), "");
    }

    #[test]
    fn test_extension_key_well_known_names() {
        assert_eq!(extension_key("Dockerfile"), "dockerfile");
        assert_eq!(extension_key("DOCKERFILE"), "dockerfile");
        assert_eq!(extension_key(".gitignore"), "gitignore");
        assert_eq!(extension_key(".dockerignore"), "dockerignore");
        assert_eq!(extension_key(".env"), "env");
        assert_eq!(extension_key(".env.example"), "env");
        assert_eq!(extension_key(".envrc"), "env");
        // Other dotfiles have no extension
        assert_eq!(extension_key(".prettierrc"), "");
    }

    #[test]
    fn test_classify_known_extension() {
        let classifier = Classifier::default();
        let class = classifier.classify_file("index.ts");
        assert_eq!(class.extension, "ts");
        assert_eq!(class.file_type.category, "TypeScript");
        assert!(!class.is_important());
    }

    #[test]
    fn test_classify_unknown_extension_uses_default() {
        let classifier = Classifier::default();
        let class = classifier.classify_file("data.xyz");
        assert_eq!(class.extension, "xyz");
        assert_eq!(class.file_type, DEFAULT_FILE_TYPE);
        assert_eq!(class.file_type.icon, "📄");
        assert_eq!(class.file_type.category, "Other");
    }

    #[test]
    fn test_important_file_keeps_extension_classification() {
        let classifier = Classifier::default();
        let class = classifier.classify_file("package.json");
        assert_eq!(class.extension, "json");
        assert_eq!(class.file_type.category, "Config");
        let important = class.important.expect("package.json should be important");
        assert_eq!(important.importance, Importance::Critical);
    }

    #[test]
    fn test_important_lookup_is_case_sensitive() {
        let classifier = Classifier::default();
        assert!(classifier.classify_file("README.md").is_important());
        assert!(!classifier.classify_file("readme.md").is_important());
        assert!(classifier.classify_file("Dockerfile").is_important());
        assert!(!classifier.classify_file("dockerfile").is_important());
    }

    #[test]
    fn test_classify_folder() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify_folder("src").description, "Source code");
        assert_eq!(classifier.classify_folder("SRC").description, "Source code");
        assert_eq!(classifier.classify_folder("whatever"), DEFAULT_FOLDER);
        assert_eq!(classifier.classify_folder("whatever").icon, "📂");
    }

    #[test]
    fn test_custom_tables() {
        let mut tables = ClassificationTables::default();
        tables
            .extensions
            .insert("foo", FileType::new("🦊", "Foo", "Foo file"));
        tables
            .important_files
            .insert("FOO", ImportantFile::new("⭐", Importance::High, "The foo"));
        let classifier = Classifier::new(tables);

        assert_eq!(classifier.classify_file("a.foo").file_type.category, "Foo");
        // Standard entries are not present in custom tables
        assert_eq!(classifier.classify_file("a.rs").file_type, DEFAULT_FILE_TYPE);
        assert!(classifier.classify_file("FOO").is_important());
        assert!(!classifier.classify_file("package.json").is_important());
    }

    #[test]
    fn test_importance_glyphs_are_distinct() {
        let glyphs: Vec<_> = Importance::ALL.iter().map(|i| i.glyph()).collect();
        assert_eq!(glyphs, vec!["🔴", "🟡", "🟢"]);
    }
}
