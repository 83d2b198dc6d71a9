//! # markdoc
//!
//! Convert AI-generated markdown into a structured document model.
//!
//! Generative models answering document-drafting prompts emit markdown-ish
//! text, sometimes twice over (two stylistic variants of the same answer).
//! This library cleans that text — version-marker lines, separator rules,
//! and a duplicated back half are removed — and converts it into an ordered
//! sequence of typed blocks (headings, paragraphs, list items, tables) that
//! a rich-document renderer can consume.
//!
//! ## Quick Start
//!
//! ```
//! use markdoc::{clean, convert};
//!
//! let cleaned = clean("## Word version:\n# Report\n\nBody text.");
//! let document = convert(&cleaned);
//!
//! assert_eq!(document.title(), Some("Report"));
//! assert_eq!(document.block_count(), 2);
//! ```
//!
//! ## Features
//!
//! - **Duplicate collapse**: drops a back half that lexically restates the
//!   front half of the document
//! - **Structure preservation**: headings (levels 1-3), bullet and numbered
//!   lists, pipe tables with header/body rows
//! - **Styling lookup**: static font/size/color attributes per block kind
//!   for downstream renderers
//! - **Total conversion**: any input string produces a document; malformed
//!   lines fall back to plain paragraphs
//!
//! Both transforms are pure and synchronous: no I/O, no shared state, and
//! every call works on fresh buffers, so concurrent use needs no
//! coordination.

pub mod clean;
pub mod convert;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use clean::{CleanOptions, CleanPipeline, DuplicateDetector};
pub use convert::MarkdownConverter;
pub use error::{Error, Result};
pub use model::{Block, Document, StyleKey, Table, TableRow, TextStyle};
pub use render::{to_json, to_plain, JsonFormat, PlainRenderer};

/// Clean raw generated text with the default pipeline.
///
/// Strips version-marker lines and separator rules, collapses a duplicated
/// back half, and preserves the `# ...` title at the front. Idempotent on
/// already-clean input.
///
/// # Example
///
/// ```
/// let cleaned = markdoc::clean("Intro.\n\n---\n\nDetails.");
/// assert_eq!(cleaned, "Intro.\n\nDetails.");
/// ```
pub fn clean(raw: &str) -> String {
    CleanPipeline::default().process(raw)
}

/// Convert markdown text into a [`Document`].
///
/// # Example
///
/// ```
/// use markdoc::Block;
///
/// let document = markdoc::convert("### Risks\n- schedule slip");
/// assert_eq!(document.blocks[0], Block::heading(3, "Risks"));
/// ```
pub fn convert(markdown: &str) -> Document {
    MarkdownConverter::new().convert(markdown)
}

/// Clean raw generated text, then convert it into a [`Document`].
pub fn clean_and_convert(raw: &str) -> Document {
    convert(&clean(raw))
}

/// Builder for cleaning and converting generated text.
///
/// # Example
///
/// ```
/// use markdoc::{JsonFormat, Markdoc};
///
/// let result = Markdoc::new()
///     .without_dedup()
///     .process("# Title\n\n- item one");
///
/// assert_eq!(result.document().list_item_count(), 1);
/// let json = result.to_json(JsonFormat::Compact)?;
/// assert!(json.contains("\"list_item\""));
/// # Ok::<(), markdoc::Error>(())
/// ```
pub struct Markdoc {
    clean_options: CleanOptions,
    run_clean: bool,
}

impl Markdoc {
    /// Create a new builder with the full cleanup pipeline enabled.
    pub fn new() -> Self {
        Self {
            clean_options: CleanOptions::default(),
            run_clean: true,
        }
    }

    /// Replace the cleanup options wholesale.
    pub fn with_clean_options(mut self, options: CleanOptions) -> Self {
        self.clean_options = options;
        self
    }

    /// Disable the duplicate-collapse stage.
    pub fn without_dedup(mut self) -> Self {
        self.clean_options.collapse_duplicates = false;
        self
    }

    /// Keep OneNote/Word version marker lines.
    pub fn keep_version_markers(mut self) -> Self {
        self.clean_options.strip_version_markers = false;
        self
    }

    /// Keep `---` / `===` separator rules.
    pub fn keep_separators(mut self) -> Self {
        self.clean_options.strip_separators = false;
        self
    }

    /// Skip cleaning entirely and convert the input as-is.
    pub fn raw(mut self) -> Self {
        self.run_clean = false;
        self
    }

    /// Clean (unless disabled) and convert the given text.
    pub fn process(&self, text: &str) -> MarkdocResult {
        let cleaned = if self.run_clean {
            CleanPipeline::new(self.clean_options.clone()).process(text)
        } else {
            text.to_string()
        };
        let document = MarkdownConverter::new().convert(&cleaned);
        MarkdocResult { cleaned, document }
    }
}

impl Default for Markdoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing generated text.
pub struct MarkdocResult {
    cleaned: String,
    document: Document,
}

impl MarkdocResult {
    /// Get the cleaned markdown text.
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// Get the converted document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume the result, returning the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Render the loose plain-text view of the cleaned markdown.
    pub fn plain_text(&self) -> String {
        render::to_plain(&self.cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_and_convert_composes() {
        let doc = clean_and_convert("## OneNote version:\n# Report\n\nText.");
        assert_eq!(doc.title(), Some("Report"));
        assert_eq!(doc.paragraph_count(), 1);
    }

    #[test]
    fn test_builder_raw_skips_cleaning() {
        let result = Markdoc::new().raw().process("---\nText.");
        assert_eq!(result.cleaned(), "---\nText.");
        // The separator line survives as a paragraph.
        assert_eq!(result.document().paragraph_count(), 2);
    }

    #[test]
    fn test_builder_keep_version_markers() {
        let result = Markdoc::new()
            .keep_version_markers()
            .process("## Word version:\nText.");
        assert!(result.cleaned().contains("Word version"));
    }

    #[test]
    fn test_result_plain_text() {
        let result = Markdoc::new().process("# Title\n\n**Bold** text.");
        assert_eq!(result.plain_text(), "Title\n\nBold text.");
    }
}
