//! Block-level types.

use serde::{Deserialize, Serialize};

use super::{StyleKey, Table};

/// A single block of document content.
///
/// Blocks are emitted in document order by the converter. `Spacer` is the
/// blank paragraph placed after every table so the following block is
/// visually separated from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading with level 1-3.
    Heading {
        /// Heading level (1-3)
        level: u8,
        /// Heading text
        text: String,
    },

    /// A plain paragraph of text.
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// A bulleted or numbered list item.
    ListItem {
        /// Whether the item came from a numbered list
        ordered: bool,
        /// Item text, marker stripped
        text: String,
    },

    /// A table with one header row and zero or more body rows.
    Table(Table),

    /// A blank spacing paragraph emitted after a table.
    Spacer,
}

impl Block {
    /// Create a heading block. The level is clamped to 1-3.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level: level.clamp(1, 3),
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// Create a list item block.
    pub fn list_item(ordered: bool, text: impl Into<String>) -> Self {
        Self::ListItem {
            ordered,
            text: text.into(),
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading { .. })
    }

    /// Check if this block is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }

    /// The styling key a renderer should use for this block.
    ///
    /// Tables return `None`: their rows are styled individually via
    /// [`StyleKey::table_row`]. Spacers carry no text to style.
    pub fn style_key(&self) -> Option<StyleKey> {
        match self {
            Self::Heading { level, .. } => Some(StyleKey::heading(*level)),
            Self::Paragraph { .. } | Self::ListItem { .. } => Some(StyleKey::Body),
            Self::Table(_) | Self::Spacer => None,
        }
    }

    /// Get the plain text content of this block.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Heading { text, .. }
            | Self::Paragraph { text }
            | Self::ListItem { text, .. } => text.clone(),
            Self::Table(table) => table.plain_text(),
            Self::Spacer => String::new(),
        }
    }
}
