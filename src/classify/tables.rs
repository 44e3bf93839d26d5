//! Built-in classification data: extensions, important files and folders.

use std::collections::HashMap;

use super::{ClassificationTables, FileType, FolderClassification, Importance, ImportantFile};

const EXTENSIONS: &[(&str, FileType)] = &[
    // JavaScript/TypeScript
    ("ts", FileType::new("📘", "TypeScript", "TypeScript source")),
    ("tsx", FileType::new("⚛️", "React", "React component (TypeScript)")),
    ("js", FileType::new("📒", "JavaScript", "JavaScript source")),
    ("jsx", FileType::new("⚛️", "React", "React component (JavaScript)")),
    ("mjs", FileType::new("📒", "JavaScript", "ES module")),
    ("cjs", FileType::new("📒", "JavaScript", "CommonJS module")),
    ("vue", FileType::new("💚", "Vue", "Vue single-file component")),
    ("svelte", FileType::new("🧡", "Svelte", "Svelte component")),
    // Web
    ("html", FileType::new("🌐", "Markup", "HTML document")),
    ("htm", FileType::new("🌐", "Markup", "HTML document")),
    ("css", FileType::new("🎨", "Styles", "Stylesheet")),
    ("scss", FileType::new("🎨", "Styles", "Sass stylesheet")),
    ("sass", FileType::new("🎨", "Styles", "Sass stylesheet")),
    ("less", FileType::new("🎨", "Styles", "Less stylesheet")),
    // Data/Config
    ("json", FileType::new("📋", "Config", "JSON data")),
    ("yaml", FileType::new("⚙️", "Config", "YAML configuration")),
    ("yml", FileType::new("⚙️", "Config", "YAML configuration")),
    ("toml", FileType::new("⚙️", "Config", "TOML configuration")),
    ("ini", FileType::new("⚙️", "Config", "INI configuration")),
    ("xml", FileType::new("📰", "Data", "XML document")),
    ("csv", FileType::new("📊", "Data", "CSV data")),
    ("sql", FileType::new("🗃️", "Database", "SQL script")),
    ("lock", FileType::new("🔒", "Lockfile", "Dependency lockfile")),
    ("env", FileType::new("🔐", "Environment", "Environment variables")),
    // Documentation
    ("md", FileType::new("📝", "Documentation", "Markdown document")),
    ("mdx", FileType::new("📝", "Documentation", "MDX document")),
    ("txt", FileType::new("📄", "Documentation", "Plain text")),
    ("pdf", FileType::new("📕", "Documentation", "PDF document")),
    // Other languages
    ("rs", FileType::new("🦀", "Rust", "Rust source")),
    ("py", FileType::new("🐍", "Python", "Python source")),
    ("go", FileType::new("🐹", "Go", "Go source")),
    ("java", FileType::new("☕", "Java", "Java source")),
    ("kt", FileType::new("🟣", "Kotlin", "Kotlin source")),
    ("rb", FileType::new("💎", "Ruby", "Ruby source")),
    ("php", FileType::new("🐘", "PHP", "PHP source")),
    ("c", FileType::new("🔧", "C/C++", "C source")),
    ("h", FileType::new("🔧", "C/C++", "C header")),
    ("cpp", FileType::new("🔧", "C/C++", "C++ source")),
    ("hpp", FileType::new("🔧", "C/C++", "C++ header")),
    ("cs", FileType::new("🟪", "C#", "C# source")),
    ("swift", FileType::new("🐦", "Swift", "Swift source")),
    ("sh", FileType::new("🐚", "Shell", "Shell script")),
    ("bash", FileType::new("🐚", "Shell", "Shell script")),
    // Assets
    ("png", FileType::new("🖼️", "Images", "Image")),
    ("jpg", FileType::new("🖼️", "Images", "Image")),
    ("jpeg", FileType::new("🖼️", "Images", "Image")),
    ("gif", FileType::new("🖼️", "Images", "Image")),
    ("webp", FileType::new("🖼️", "Images", "Image")),
    ("svg", FileType::new("🖌️", "Images", "Vector graphic")),
    ("ico", FileType::new("🖼️", "Images", "Icon")),
    ("woff", FileType::new("🔤", "Fonts", "Web font")),
    ("woff2", FileType::new("🔤", "Fonts", "Web font")),
    ("ttf", FileType::new("🔤", "Fonts", "Font")),
    // Extensionless well-known names
    ("dockerfile", FileType::new("🐳", "Docker", "Container definition")),
    ("dockerignore", FileType::new("🐳", "Docker", "Docker ignore rules")),
    ("gitignore", FileType::new("🙈", "Git", "Git ignore rules")),
];

const IMPORTANT_FILES: &[(&str, ImportantFile)] = &[
    // Manifests
    ("package.json", ImportantFile::new("📦", Importance::Critical, "Node.js package manifest")),
    ("Cargo.toml", ImportantFile::new("🦀", Importance::Critical, "Rust crate manifest")),
    ("pyproject.toml", ImportantFile::new("🐍", Importance::Critical, "Python project manifest")),
    ("requirements.txt", ImportantFile::new("🐍", Importance::Critical, "Python dependencies")),
    ("go.mod", ImportantFile::new("🐹", Importance::Critical, "Go module definition")),
    ("README.md", ImportantFile::new("📖", Importance::Critical, "Project documentation")),
    // Lockfiles
    ("package-lock.json", ImportantFile::new("🔒", Importance::High, "npm lockfile")),
    ("yarn.lock", ImportantFile::new("🔒", Importance::High, "Yarn lockfile")),
    ("pnpm-lock.yaml", ImportantFile::new("🔒", Importance::High, "pnpm lockfile")),
    ("Cargo.lock", ImportantFile::new("🔒", Importance::High, "Cargo lockfile")),
    // Build and framework configuration
    ("tsconfig.json", ImportantFile::new("⚙️", Importance::High, "TypeScript configuration")),
    ("next.config.js", ImportantFile::new("▲", Importance::High, "Next.js configuration")),
    ("next.config.mjs", ImportantFile::new("▲", Importance::High, "Next.js configuration")),
    ("next.config.ts", ImportantFile::new("▲", Importance::High, "Next.js configuration")),
    ("Dockerfile", ImportantFile::new("🐳", Importance::High, "Container definition")),
    ("docker-compose.yml", ImportantFile::new("🐳", Importance::High, "Container orchestration")),
    ("docker-compose.yaml", ImportantFile::new("🐳", Importance::High, "Container orchestration")),
    ("tailwind.config.js", ImportantFile::new("🌊", Importance::Medium, "Tailwind CSS configuration")),
    ("tailwind.config.ts", ImportantFile::new("🌊", Importance::Medium, "Tailwind CSS configuration")),
    ("vite.config.ts", ImportantFile::new("⚡", Importance::Medium, "Vite configuration")),
    ("vite.config.js", ImportantFile::new("⚡", Importance::Medium, "Vite configuration")),
    ("webpack.config.js", ImportantFile::new("📦", Importance::Medium, "Webpack configuration")),
    (".eslintrc.json", ImportantFile::new("🧹", Importance::Medium, "ESLint configuration")),
    (".prettierrc", ImportantFile::new("✨", Importance::Medium, "Prettier configuration")),
    ("Makefile", ImportantFile::new("🛠️", Importance::Medium, "Build recipes")),
    // Repository hygiene
    (".gitignore", ImportantFile::new("🙈", Importance::Medium, "Git ignore rules")),
    (".env.example", ImportantFile::new("🔐", Importance::Medium, "Environment template")),
    ("LICENSE", ImportantFile::new("⚖️", Importance::Medium, "License")),
];

const FOLDERS: &[(&str, FolderClassification)] = &[
    ("src", FolderClassification::new("📁", "Source code")),
    ("app", FolderClassification::new("📱", "Application routes")),
    ("pages", FolderClassification::new("📄", "Page components")),
    ("components", FolderClassification::new("🧩", "UI components")),
    ("hooks", FolderClassification::new("🪝", "React hooks")),
    ("lib", FolderClassification::new("📚", "Library code")),
    ("utils", FolderClassification::new("🔧", "Utilities")),
    ("helpers", FolderClassification::new("🔧", "Helpers")),
    ("services", FolderClassification::new("🛎️", "Services")),
    ("api", FolderClassification::new("🔌", "API layer")),
    ("models", FolderClassification::new("🗃️", "Data models")),
    ("types", FolderClassification::new("🏷️", "Type definitions")),
    ("styles", FolderClassification::new("🎨", "Stylesheets")),
    ("public", FolderClassification::new("🌍", "Public assets")),
    ("assets", FolderClassification::new("🖼️", "Assets")),
    ("images", FolderClassification::new("🖼️", "Images")),
    ("config", FolderClassification::new("⚙️", "Configuration")),
    ("scripts", FolderClassification::new("📜", "Scripts")),
    ("docs", FolderClassification::new("📚", "Documentation")),
    ("test", FolderClassification::new("🧪", "Tests")),
    ("tests", FolderClassification::new("🧪", "Tests")),
    ("__tests__", FolderClassification::new("🧪", "Tests")),
    (".github", FolderClassification::new("🐙", "GitHub configuration")),
];

/// Build the standard tables.
pub(super) fn standard() -> ClassificationTables {
    ClassificationTables {
        extensions: EXTENSIONS.iter().copied().collect::<HashMap<_, _>>(),
        important_files: IMPORTANT_FILES.iter().copied().collect::<HashMap<_, _>>(),
        folders: FOLDERS.iter().copied().collect::<HashMap<_, _>>(),
    }
}
