//! Line-oriented markdown-to-document conversion.
//!
//! The converter walks the input as an indexed sequence of physical lines
//! with an explicit cursor, because the table branch must look ahead and
//! consume several lines for a single block. Classification is
//! first-match-wins; anything unrecognized falls back to a plain
//! paragraph, so conversion is total over any input.

mod table;

use regex::Regex;

use crate::model::{Block, Document};

/// Converts markdown text into a [`Document`].
///
/// Supports the subset of markdown the upstream generator emits: heading
/// levels 1-3, bulleted and numbered lists, pipe tables, and plain
/// paragraphs. Holds only a compiled regex; safe to share across threads.
pub struct MarkdownConverter {
    ordered_item: Regex,
}

impl MarkdownConverter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self {
            ordered_item: Regex::new(r"^\d+\. ").unwrap(),
        }
    }

    /// Convert markdown text into a document.
    pub fn convert(&self, markdown: &str) -> Document {
        let lines: Vec<&str> = markdown.lines().collect();
        let mut document = Document::new();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i].trim();

            if line.is_empty() {
                i += 1;
                continue;
            }

            if let Some(text) = line.strip_prefix("# ") {
                document.push(Block::heading(1, text.trim()));
            } else if let Some(text) = line.strip_prefix("## ") {
                document.push(Block::heading(2, text.trim()));
            } else if let Some(text) = line.strip_prefix("### ") {
                document.push(Block::heading(3, text.trim()));
            } else if let Some(text) = strip_bullet(line) {
                document.push(Block::list_item(false, text.trim()));
            } else if self.ordered_item.is_match(line) {
                let text = self.ordered_item.replace(line, "");
                document.push(Block::list_item(true, text.trim()));
            } else if line.contains('|')
                && lines.get(i + 1).is_some_and(|next| next.contains('|'))
            {
                let (parsed, consumed) = table::parse_block(&lines[i..]);
                if let Some(parsed) = parsed {
                    log::debug!(
                        "parsed table: {} rows x {} columns",
                        parsed.row_count(),
                        parsed.column_count()
                    );
                    document.push(Block::Table(parsed));
                    document.push(Block::Spacer);
                }
                i += consumed;
                continue;
            } else {
                document.push(Block::paragraph(line));
            }

            i += 1;
        }

        document
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip a bullet marker (`* `, `• `, or `- `), if present.
fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix("* ")
        .or_else(|| line.strip_prefix("• "))
        .or_else(|| line.strip_prefix("- "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(markdown: &str) -> Document {
        MarkdownConverter::new().convert(markdown)
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        assert!(convert("").is_empty());
        assert!(convert("\n\n   \n").is_empty());
    }

    #[test]
    fn test_heading_levels() {
        let doc = convert("# One\n## Two\n### Three");
        assert_eq!(
            doc.blocks,
            vec![
                Block::heading(1, "One"),
                Block::heading(2, "Two"),
                Block::heading(3, "Three"),
            ]
        );
    }

    #[test]
    fn test_deeper_heading_falls_back_to_paragraph() {
        let doc = convert("#### Four");
        assert_eq!(doc.blocks, vec![Block::paragraph("#### Four")]);
    }

    #[test]
    fn test_bullet_markers() {
        let doc = convert("* star\n• glyph\n- dash");
        assert_eq!(
            doc.blocks,
            vec![
                Block::list_item(false, "star"),
                Block::list_item(false, "glyph"),
                Block::list_item(false, "dash"),
            ]
        );
    }

    #[test]
    fn test_numbered_items() {
        let doc = convert("1. first\n12. twelfth");
        assert_eq!(
            doc.blocks,
            vec![
                Block::list_item(true, "first"),
                Block::list_item(true, "twelfth"),
            ]
        );
    }

    #[test]
    fn test_malformed_numbered_item_falls_back_to_paragraph() {
        // Missing the space after the period: not a numbered item.
        let doc = convert("1.first");
        assert_eq!(doc.blocks, vec![Block::paragraph("1.first")]);
    }

    #[test]
    fn test_lone_pipe_line_is_a_paragraph() {
        // Table mode needs a pipe on the next line too.
        let doc = convert("a | b\nno pipes here");
        assert_eq!(
            doc.blocks,
            vec![Block::paragraph("a | b"), Block::paragraph("no pipes here")]
        );
    }

    #[test]
    fn test_table_followed_by_spacer() {
        let doc = convert("| A | B |\n| 1 | 2 |");
        assert_eq!(doc.block_count(), 2);
        assert!(doc.blocks[0].is_table());
        assert_eq!(doc.blocks[1], Block::Spacer);
    }

    #[test]
    fn test_cursor_resumes_after_table() {
        let doc = convert("| A | B |\n| 1 | 2 |\nAfter the table.");
        assert_eq!(doc.blocks.last(), Some(&Block::paragraph("After the table.")));
        assert_eq!(doc.table_count(), 1);
    }

    #[test]
    fn test_indented_lines_are_trimmed_before_classification() {
        let doc = convert("   ## Indented\n   - item");
        assert_eq!(
            doc.blocks,
            vec![Block::heading(2, "Indented"), Block::list_item(false, "item")]
        );
    }
}
