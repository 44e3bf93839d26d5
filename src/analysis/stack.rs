//! Tech-stack detection from extension and important-file tallies

use super::Tally;

/// Derive technology tags, in a fixed evaluation order.
///
/// Each rule adds at most one tag and a tag is never added twice.
pub fn detect_stack<S: AsRef<str>>(extensions: &Tally, important_files: &[S]) -> Vec<String> {
    let has_ext = |ext: &str| extensions.contains(ext);
    let has_file = |name: &str| important_files.iter().any(|f| f.as_ref() == name);
    let file_matches = |part: &str| important_files.iter().any(|f| f.as_ref().contains(part));

    let rules: [(bool, &str); 9] = [
        (has_ext("tsx") || has_ext("jsx"), "React"),
        (file_matches("next.config"), "Next.js"),
        (has_ext("ts") || has_ext("tsx"), "TypeScript"),
        (has_ext("vue"), "Vue.js"),
        (has_ext("css"), "CSS"),
        (has_ext("scss"), "Sass/SCSS"),
        (file_matches("tailwind.config"), "Tailwind CSS"),
        (has_file("package.json"), "Node.js"),
        (has_file("Dockerfile"), "Docker"),
    ];

    let mut stack: Vec<String> = Vec::new();
    for (matched, tag) in rules {
        if matched && !stack.iter().any(|t| t == tag) {
            stack.push(tag.to_string());
        }
    }
    stack
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(keys: &[&str]) -> Tally {
        let mut t = Tally::new();
        for key in keys {
            t.add(key);
        }
        t
    }

    #[test]
    fn test_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(detect_stack(&Tally::new(), &none).is_empty());
    }

    #[test]
    fn test_fixed_order_not_frequency() {
        let exts = tally(&["css", "css", "css", "tsx"]);
        let stack = detect_stack(&exts, &["package.json", "next.config.js"]);
        assert_eq!(stack, vec!["React", "Next.js", "TypeScript", "CSS", "Node.js"]);
    }

    #[test]
    fn test_each_tag_once() {
        // tsx and jsx both trigger React; ts and tsx both trigger TypeScript
        let exts = tally(&["tsx", "jsx", "ts"]);
        let stack = detect_stack(&exts, &["tailwind.config.js", "tailwind.config.ts"]);
        assert_eq!(stack, vec!["React", "TypeScript", "Tailwind CSS"]);
    }

    #[test]
    fn test_exact_manifest_names() {
        let exts = tally(&["vue", "scss"]);
        let stack = detect_stack(&exts, &["Dockerfile", "package.json"]);
        assert_eq!(stack, vec!["Vue.js", "Sass/SCSS", "Node.js", "Docker"]);

        // Substrings do not count for the exact-name rules
        let stack = detect_stack(&Tally::new(), &["my-package.json.bak"]);
        assert!(stack.is_empty());
    }
}
