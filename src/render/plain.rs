//! Loose plain-text rendering of cleaned markdown.
//!
//! Some consumers want the cleaned content with the structure knocked out:
//! no heading markers, no emphasis, tables flattened to word-separated
//! lines. This is an independent pass over the cleaned markdown text, not
//! a rendering of the structural document model.

use regex::Regex;

/// Strips markdown structure from cleaned text.
pub struct PlainRenderer {
    heading_marks: Regex,
    bold_spans: Regex,
    italic_spans: Regex,
    excess_newlines: Regex,
}

impl PlainRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self {
            heading_marks: Regex::new(r"^#{1,6}\s+").unwrap(),
            bold_spans: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            italic_spans: Regex::new(r"\*(.+?)\*").unwrap(),
            excess_newlines: Regex::new(r"\n{3,}").unwrap(),
        }
    }

    /// Render markdown text as loose plain text.
    pub fn render(&self, text: &str) -> String {
        let mut lines = Vec::new();
        for line in text.lines() {
            if is_structural_line(line) {
                continue;
            }

            let line = self.heading_marks.replace(line, "");
            let line = self.bold_spans.replace_all(&line, "$1");
            let line = self.italic_spans.replace_all(&line, "$1");

            if line.contains('|') {
                lines.push(flatten_table_row(&line));
            } else {
                lines.push(line.trim_end().to_string());
            }
        }

        let joined = lines.join("\n");
        let collapsed = self.excess_newlines.replace_all(&joined, "\n\n");
        collapsed.trim().to_string()
    }
}

impl Default for PlainRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render markdown text as loose plain text.
pub fn to_plain(text: &str) -> String {
    PlainRenderer::new().render(text)
}

/// Separator rules and table separator rows carry no content.
fn is_structural_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| matches!(c, '-' | '=' | '|' | ':') || c.is_whitespace())
}

/// Flatten a table row into its cells, separated by double spaces.
fn flatten_table_row(line: &str) -> String {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_markers_removed() {
        assert_eq!(to_plain("## Summary"), "Summary");
        assert_eq!(to_plain("# Report"), "Report");
    }

    #[test]
    fn test_emphasis_removed() {
        assert_eq!(to_plain("This is **bold** and *italic* text."), "This is bold and italic text.");
    }

    #[test]
    fn test_table_flattened() {
        let plain = to_plain("| Risk | Owner |\n|---|---|\n| Delay | Kim |");
        assert_eq!(plain, "Risk  Owner\nDelay  Kim");
    }

    #[test]
    fn test_separator_rules_dropped() {
        let plain = to_plain("Above.\n-----\nBelow.");
        assert_eq!(plain, "Above.\nBelow.");
    }

    #[test]
    fn test_blank_lines_preserved_between_paragraphs() {
        let plain = to_plain("One.\n\nTwo.");
        assert_eq!(plain, "One.\n\nTwo.");
    }
}
