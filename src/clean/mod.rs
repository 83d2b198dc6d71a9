//! Cleanup pipeline for raw generated markdown.
//!
//! Generative models sometimes emit the same answer twice (two stylistic
//! variants separated by a "OneNote version" / "Word version" marker), plus
//! structural noise such as `---` rules. This module strips the noise and
//! collapses a duplicated back half before the text is converted into the
//! document model.

mod dedup;

pub use dedup::DuplicateDetector;

use regex::Regex;

/// Options for the cleanup pipeline.
///
/// All stages default to on; the toggles exist for hosts that want only the
/// structural cleanup without the duplicate collapse (or vice versa).
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Strip `# OneNote version:` / `## Word version:` marker lines
    pub strip_version_markers: bool,

    /// Strip `---` / `===` separator rules
    pub strip_separators: bool,

    /// Capture the first `# ...` title line and re-prepend it after cleanup
    pub preserve_title: bool,

    /// Drop the back half of the document when it restates the front half
    pub collapse_duplicates: bool,
}

impl CleanOptions {
    /// The full pipeline: every stage enabled.
    pub fn full() -> Self {
        Self {
            strip_version_markers: true,
            strip_separators: true,
            preserve_title: true,
            collapse_duplicates: true,
        }
    }

    /// Structural cleanup only, without the duplicate collapse.
    pub fn structural_only() -> Self {
        Self {
            collapse_duplicates: false,
            ..Self::full()
        }
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self::full()
    }
}

/// Cleanup pipeline over raw generated text.
///
/// Total over any input string: malformed markdown, missing titles, and
/// short documents all degrade to "return the text structurally cleaned but
/// unmodified otherwise". Holds only compiled regexes, so one pipeline can
/// be shared freely across threads.
pub struct CleanPipeline {
    options: CleanOptions,
    leading_marker: Regex,
    embedded_marker: Regex,
    separator_rule: Regex,
    title_line: Regex,
    title_removal: Regex,
    excess_newlines: Regex,
    detector: DuplicateDetector,
}

impl CleanPipeline {
    /// Create a new pipeline with the given options.
    pub fn new(options: CleanOptions) -> Self {
        let marker = r"#{1,2}\s*(?:OneNote|Word)[- ]?version\s*:?\s*";
        Self {
            options,
            leading_marker: Regex::new(&format!(r"(?i)\A\s*{marker}\n+")).unwrap(),
            embedded_marker: Regex::new(&format!(r"(?i)\n+\s*{marker}\n+")).unwrap(),
            separator_rule: Regex::new(r"\n\s*[-=]{3,}\s*\n").unwrap(),
            title_line: Regex::new(r"(?m)^#\s+.+$").unwrap(),
            title_removal: Regex::new(r"(?m)^#\s+.+\n+").unwrap(),
            excess_newlines: Regex::new(r"\n{3,}").unwrap(),
            detector: DuplicateDetector::new(),
        }
    }

    /// Run the pipeline over raw text and return the cleaned markdown.
    pub fn process(&self, raw: &str) -> String {
        let mut text = raw.to_string();

        if self.options.strip_version_markers {
            text = replace_until_stable(&self.leading_marker, text, "");
            text = replace_until_stable(&self.embedded_marker, text, "\n\n");
        }

        if self.options.strip_separators {
            text = replace_until_stable(&self.separator_rule, text, "\n\n");
        }

        // The title is excluded from duplicate detection and re-prepended
        // verbatim at reassembly.
        let title = if self.options.preserve_title {
            self.title_line.find(&text).map(|m| m.as_str().to_string())
        } else {
            None
        };
        let body = if title.is_some() {
            self.title_removal.replace(&text, "").into_owned()
        } else {
            text
        };

        let mut paragraphs: Vec<&str> = body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if self.options.collapse_duplicates {
            paragraphs = self.detector.collapse(paragraphs);
        }

        let mut result = String::new();
        if let Some(title) = &title {
            result.push_str(title);
            result.push_str("\n\n");
        }
        result.push_str(&paragraphs.join("\n\n"));

        let result = self.excess_newlines.replace_all(&result, "\n\n");
        result.trim().to_string()
    }
}

impl Default for CleanPipeline {
    fn default() -> Self {
        Self::new(CleanOptions::default())
    }
}

/// Re-apply a replacement until the text stops changing.
///
/// Adjacent matches share boundary newlines, so a single `replace_all` pass
/// can leave stacked markers or separators behind; one `process` call must
/// leave none (cleaning is idempotent).
fn replace_until_stable(pattern: &Regex, mut text: String, replacement: &str) -> String {
    while pattern.is_match(&text) {
        text = pattern.replace_all(&text, replacement).into_owned();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(raw: &str) -> String {
        CleanPipeline::default().process(raw)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\n  "), "");
    }

    #[test]
    fn test_leading_version_marker_stripped() {
        let cleaned = clean("## OneNote version:\n# Title\n\nBody text.");
        assert_eq!(cleaned, "# Title\n\nBody text.");
    }

    #[test]
    fn test_embedded_version_marker_collapses_to_one_blank_line() {
        let cleaned = clean("First part.\n\n# Word-Version\n\nSecond part.");
        assert_eq!(cleaned, "First part.\n\nSecond part.");
    }

    #[test]
    fn test_marker_match_is_case_insensitive() {
        let cleaned = clean("Alpha.\n\n## ONENOTE VERSION\nBeta.");
        assert_eq!(cleaned, "Alpha.\n\nBeta.");
    }

    #[test]
    fn test_stacked_markers_all_removed() {
        let cleaned = clean("## OneNote version:\n## Word version:\nBody.");
        assert_eq!(cleaned, "Body.");
    }

    #[test]
    fn test_separator_rules_stripped() {
        let cleaned = clean("Above.\n\n-----\n\nBelow.");
        assert_eq!(cleaned, "Above.\n\nBelow.");
    }

    #[test]
    fn test_consecutive_separators_stripped() {
        let cleaned = clean("Above.\n---\n===\nBelow.");
        assert_eq!(cleaned, "Above.\n\nBelow.");
    }

    #[test]
    fn test_short_dash_run_is_not_a_separator() {
        let cleaned = clean("Above.\n--\nBelow.");
        assert!(cleaned.contains("--"));
    }

    #[test]
    fn test_title_preserved_at_front() {
        let cleaned = clean("Intro paragraph.\n\n# The Title\n\nMore text.");
        assert!(cleaned.starts_with("# The Title"));
        assert!(cleaned.contains("Intro paragraph."));
    }

    #[test]
    fn test_excess_blank_lines_collapsed() {
        let cleaned = clean("One.\n\n\n\nTwo.");
        assert_eq!(cleaned, "One.\n\nTwo.");
    }

    #[test]
    fn test_structural_only_keeps_duplicates() {
        let paragraph = "Same words in every paragraph unit here.";
        let raw = vec![paragraph; 6].join("\n\n");

        let full = CleanPipeline::new(CleanOptions::full()).process(&raw);
        let structural = CleanPipeline::new(CleanOptions::structural_only()).process(&raw);

        assert_eq!(full.matches(paragraph).count(), 3);
        assert_eq!(structural.matches(paragraph).count(), 6);
    }

    #[test]
    fn test_options_can_keep_markers() {
        let options = CleanOptions {
            strip_version_markers: false,
            ..CleanOptions::default()
        };
        let cleaned = CleanPipeline::new(options).process("## Word version:\nBody.");
        assert!(cleaned.contains("Word version"));
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let raw = "## OneNote version:\n# Title\n\nAlpha.\n\n---\n\nBeta.\n\n## Word version:\n\nAlpha.\n\nBeta.";
        let once = clean(raw);
        assert_eq!(clean(&once), once);
    }
}
