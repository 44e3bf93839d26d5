//! TreeWalker - renders the decorated tree diagram as text

use std::path::Path;

use tracing::warn;

use super::config::ScanConfig;
use super::traversal::Traversal;

/// Indentation added per depth level.
pub const INDENT_GUIDE: &str = "│   ";
/// Connector for every entry except the last one in a directory.
pub const BRANCH: &str = "├── ";
/// Connector for the last entry in a directory.
pub const LAST_BRANCH: &str = "└── ";
/// Leaf emitted in place of a subtree that could not be listed.
pub const ERROR_LEAF: &str = "⚠️ [Error reading directory]";

/// Renders a filtered, sorted, icon-decorated tree of a directory.
pub struct TreeWalker {
    config: ScanConfig,
}

impl TreeWalker {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Render the whole tree: a `<root>/` line followed by the body.
    ///
    /// An empty (or fully excluded) root renders as the root line alone.
    pub fn render(&self, root: &Path) -> String {
        let name = Traversal::new(&self.config).get_name(root);
        let body = self.render_tree(root, 0);

        let mut output = format!("{}/\n", name);
        if !body.is_empty() {
            output.push_str("│\n");
            output.push_str(&body);
        }
        output
    }

    /// Render the children of `path`, each prefixed by `depth` indent guides.
    ///
    /// A directory that cannot be listed yields a single error leaf instead
    /// of failing the caller.
    pub fn render_tree(&self, path: &Path, depth: usize) -> String {
        let traversal = Traversal::new(&self.config);
        let indent = INDENT_GUIDE.repeat(depth);

        let entries = match traversal.read_entries(path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Error reading directory {}: {}", path.display(), e);
                return format!("{}{}{}\n", indent, LAST_BRANCH, ERROR_LEAF);
            }
        };

        let classifier = &self.config.classifier;
        let mut output = String::new();
        let count = entries.len();

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == count - 1;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };

            output.push_str(&indent);
            output.push_str(connector);

            if entry.is_dir() {
                let folder = classifier.classify_folder(&entry.name);
                output.push_str(&format!("{} {}/\n", folder.icon, entry.name));
                if entry.should_descend() {
                    output.push_str(&self.render_tree(&entry.path, depth + 1));
                }
            } else {
                let class = classifier.classify_file(&entry.name);
                match class.important {
                    Some(important) => output.push_str(&format!(
                        "{} {} **{}**\n",
                        important.importance.glyph(),
                        important.icon,
                        entry.name
                    )),
                    None => {
                        output.push_str(&format!("{} {}\n", class.file_type.icon, entry.name))
                    }
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn render(dir: &TempDir) -> String {
        TreeWalker::new(ScanConfig::default()).render_tree(dir.path(), 0)
    }

    #[test]
    fn test_connectors() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();

        let output = render(&dir);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(BRANCH), "{}", lines[0]);
        assert!(lines[1].starts_with(BRANCH), "{}", lines[1]);
        assert!(lines[2].starts_with(LAST_BRANCH), "{}", lines[2]);
    }

    #[test]
    fn test_last_connector_ignores_excluded_siblings() {
        // "node_modules" sorts after "index.js" but is excluded, so index.js is last
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.js"), "").unwrap();
        fs::create_dir(dir.path().join("node_modules")).unwrap();

        let output = render(&dir);
        assert_eq!(output, format!("{}📒 index.js\n", LAST_BRANCH));
    }

    #[test]
    fn test_nested_indentation() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();
        fs::write(dir.path().join("src/components/Button.tsx"), "").unwrap();

        let output = render(&dir);
        let expected = format!(
            "{LAST_BRANCH}📁 src/\n{INDENT_GUIDE}{LAST_BRANCH}🧩 components/\n{INDENT_GUIDE}{INDENT_GUIDE}{LAST_BRANCH}⚛️ Button.tsx\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_important_file_badge() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("data.json"), "{}").unwrap();

        let output = render(&dir);
        assert!(output.contains("📋 data.json"), "{}", output);
        assert!(output.contains("🔴 📦 **package.json**"), "{}", output);
    }

    #[test]
    fn test_render_root_line() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.rs"), "").unwrap();

        let name = dir.path().file_name().unwrap().to_string_lossy().to_string();
        let output = TreeWalker::new(ScanConfig::default()).render(dir.path());
        assert_eq!(
            output,
            format!("{}/\n│\n{}🦀 main.rs\n", name, LAST_BRANCH)
        );
    }

    #[test]
    fn test_render_empty_root() {
        let dir = TempDir::new().unwrap();
        let name = dir.path().file_name().unwrap().to_string_lossy().to_string();
        let output = TreeWalker::new(ScanConfig::default()).render(dir.path());
        assert_eq!(output, format!("{}/\n", name));
    }

    #[test]
    fn test_directory_with_only_excluded_entries() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("app/node_modules/pkg")).unwrap();
        fs::write(dir.path().join("app/node_modules/pkg/index.js"), "").unwrap();
        fs::create_dir(dir.path().join("app/.git")).unwrap();

        let output = render(&dir);
        assert_eq!(output, format!("{}📱 app/\n", LAST_BRANCH));
    }

    #[test]
    fn test_missing_directory_renders_error_leaf() {
        let walker = TreeWalker::new(ScanConfig::default());
        let output = walker.render_tree(Path::new("/nonexistent/dir/here"), 2);
        assert_eq!(
            output,
            format!("{}{}{}{}\n", INDENT_GUIDE, INDENT_GUIDE, LAST_BRANCH, ERROR_LEAF)
        );
    }

    #[test]
    fn test_removed_subdirectory_renders_error_leaf_under_parent() {
        // A directory deleted after its parent was listed cannot be read
        // even by a privileged user
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("gone");
        fs::create_dir(&gone).unwrap();
        fs::write(gone.join("a.txt"), "").unwrap();
        fs::remove_dir_all(&gone).unwrap();

        let walker = TreeWalker::new(ScanConfig::default());
        let output = walker.render_tree(&gone, 1);
        assert_eq!(output, format!("{}{}{}\n", INDENT_GUIDE, LAST_BRANCH, ERROR_LEAF));
        assert!(!output.contains("a.txt"));
    }
}
