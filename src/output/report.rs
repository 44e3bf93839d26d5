//! Markdown report rendering
//!
//! `ReportRenderer` combines a `ProjectAnalysis` and the rendered tree text
//! into the final `folder_structure.md` document. Rendering is a pure
//! function of its inputs; the generation time is fixed at construction.

use chrono::{Local, NaiveDateTime};

use crate::analysis::ProjectAnalysis;
use crate::classify::Importance;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the Markdown report.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    generated_at: NaiveDateTime,
}

impl ReportRenderer {
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self { generated_at }
    }

    /// Renderer stamped with the current local time.
    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    pub fn render(&self, analysis: &ProjectAnalysis, tree_text: &str, project_name: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("# 📁 Project Structure: {}\n\n", project_name));
        output.push_str(&format!(
            "> Generated on {}\n\n",
            self.generated_at.format(TIMESTAMP_FORMAT)
        ));

        render_overview(&mut output, analysis);
        render_important_files(&mut output, analysis);
        render_extension_stats(&mut output, analysis);
        render_category_stats(&mut output, analysis);
        render_largest_directories(&mut output, analysis);
        render_tree(&mut output, tree_text);
        render_legend(&mut output, analysis);

        output
    }
}

fn render_overview(output: &mut String, analysis: &ProjectAnalysis) {
    output.push_str("## 📊 Overview\n\n");
    output.push_str("| Metric | Value |\n");
    output.push_str("|--------|-------|\n");
    output.push_str(&format!("| Total Files | {} |\n", analysis.total_files));
    output.push_str(&format!("| Total Folders | {} |\n", analysis.total_folders));
    output.push_str(&format!("| Max Depth | {} |\n", analysis.max_depth));
    if !analysis.tech_stack.is_empty() {
        output.push_str(&format!(
            "| Tech Stack | {} |\n",
            analysis.tech_stack.join(", ")
        ));
    }
    output.push('\n');
}

fn render_important_files(output: &mut String, analysis: &ProjectAnalysis) {
    if analysis.important_files.is_empty() {
        return;
    }

    output.push_str("## ⭐ Important Files\n\n");
    for file in &analysis.important_files {
        output.push_str(&format!(
            "- {} {} **{}** - {}\n",
            file.importance.glyph(),
            file.icon,
            file.name,
            file.description
        ));
    }
    output.push('\n');
}

fn render_extension_stats(output: &mut String, analysis: &ProjectAnalysis) {
    if analysis.extensions.is_empty() {
        return;
    }

    output.push_str("## 📈 Statistics by File Type\n\n");
    output.push_str("| Extension | Files | Share |\n");
    output.push_str("|-----------|-------|-------|\n");
    for (ext, count) in analysis.extensions.by_count() {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            display_extension(ext),
            count,
            percentage(count, analysis.total_files)
        ));
    }
    output.push('\n');
}

fn render_category_stats(output: &mut String, analysis: &ProjectAnalysis) {
    if analysis.categories.is_empty() {
        return;
    }

    output.push_str("## 🗂️ Statistics by Category\n\n");
    output.push_str("| Category | Files | Share |\n");
    output.push_str("|----------|-------|-------|\n");
    for (category, count) in analysis.categories.by_count() {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            category,
            count,
            percentage(count, analysis.total_files)
        ));
    }
    output.push('\n');
}

fn render_largest_directories(output: &mut String, analysis: &ProjectAnalysis) {
    if analysis.largest_directories.is_empty() {
        return;
    }

    output.push_str("## 📦 Largest Directories\n\n");
    for (i, dir) in analysis.largest_directories.iter().enumerate() {
        let noun = if dir.files == 1 { "file" } else { "files" };
        output.push_str(&format!(
            "{}. `{}` - {} {}\n",
            i + 1,
            dir.path,
            dir.files,
            noun
        ));
    }
    output.push('\n');
}

fn render_tree(output: &mut String, tree_text: &str) {
    output.push_str("## 🌳 Folder Tree\n\n");
    output.push_str("```\n");
    output.push_str(tree_text);
    if !tree_text.ends_with('\n') {
        output.push('\n');
    }
    output.push_str("```\n\n");
}

fn render_legend(output: &mut String, analysis: &ProjectAnalysis) {
    output.push_str("## 📖 Legend\n\n");

    if !analysis.file_types.is_empty() {
        output.push_str("### File Types\n\n");
        for file_type in &analysis.file_types {
            output.push_str(&format!(
                "- {} **{}** - {}\n",
                file_type.icon, file_type.category, file_type.description
            ));
        }
        output.push('\n');
    }

    output.push_str("### Importance Levels\n\n");
    for importance in Importance::ALL {
        output.push_str(&format!(
            "- {} **{}** - {}\n",
            importance.glyph(),
            importance.label(),
            importance.explanation()
        ));
    }
}

/// Format an extension key for display; the empty key has no dot form.
fn display_extension(ext: &str) -> String {
    if ext.is_empty() {
        "(no extension)".to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Share of `total` to one decimal place.
fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}
