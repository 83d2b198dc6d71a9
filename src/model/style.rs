//! Static styling attributes for rendered blocks.
//!
//! These constants are presentation configuration for the downstream
//! rich-document renderer; they carry no structural meaning. Keeping them
//! in one lookup table keeps the converter free of font literals.

use serde::Serialize;

/// Font attributes for one class of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font family name
    pub font_name: &'static str,

    /// Font size in points
    pub font_size: f32,

    /// Text color as a hex string, or `None` for the default color
    pub color: Option<&'static str>,

    /// Bold weight
    pub bold: bool,
}

/// Key into the styling table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// Level-1 heading
    Heading1,
    /// Level-2 heading
    Heading2,
    /// Level-3 heading
    Heading3,
    /// Plain paragraphs and list items
    Body,
    /// Table header cells
    TableHeader,
    /// Table body cells
    TableBody,
}

const HEADING_1: TextStyle = TextStyle {
    font_name: "Segoe UI Semibold",
    font_size: 16.0,
    color: Some("#1A4D80"),
    bold: true,
};

const HEADING_2: TextStyle = TextStyle {
    font_name: "Segoe UI Semibold",
    font_size: 14.0,
    color: Some("#416D94"),
    bold: true,
};

const HEADING_3: TextStyle = TextStyle {
    font_name: "Segoe UI Semibold",
    font_size: 12.0,
    color: Some("#444444"),
    bold: true,
};

const BODY: TextStyle = TextStyle {
    font_name: "Segoe UI",
    font_size: 11.0,
    color: None,
    bold: false,
};

const TABLE_HEADER: TextStyle = TextStyle {
    font_name: "Segoe UI",
    font_size: 10.0,
    color: None,
    bold: true,
};

const TABLE_BODY: TextStyle = TextStyle {
    font_name: "Segoe UI",
    font_size: 10.0,
    color: None,
    bold: false,
};

impl StyleKey {
    /// Key for a heading of the given level (clamped to 1-3).
    pub fn heading(level: u8) -> Self {
        match level.clamp(1, 3) {
            1 => Self::Heading1,
            2 => Self::Heading2,
            _ => Self::Heading3,
        }
    }

    /// Key for a table row.
    pub fn table_row(is_header: bool) -> Self {
        if is_header {
            Self::TableHeader
        } else {
            Self::TableBody
        }
    }
}

impl TextStyle {
    /// Look up the style for a key.
    pub fn for_key(key: StyleKey) -> &'static TextStyle {
        match key {
            StyleKey::Heading1 => &HEADING_1,
            StyleKey::Heading2 => &HEADING_2,
            StyleKey::Heading3 => &HEADING_3,
            StyleKey::Body => &BODY,
            StyleKey::TableHeader => &TABLE_HEADER,
            StyleKey::TableBody => &TABLE_BODY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_styles_descend_in_size() {
        let h1 = TextStyle::for_key(StyleKey::Heading1);
        let h2 = TextStyle::for_key(StyleKey::Heading2);
        let h3 = TextStyle::for_key(StyleKey::Heading3);

        assert!(h1.font_size > h2.font_size);
        assert!(h2.font_size > h3.font_size);
        assert!(h1.bold && h2.bold && h3.bold);
        assert_eq!(h1.color, Some("#1A4D80"));
    }

    #[test]
    fn test_heading_key_clamped() {
        assert_eq!(StyleKey::heading(1), StyleKey::Heading1);
        assert_eq!(StyleKey::heading(3), StyleKey::Heading3);
        assert_eq!(StyleKey::heading(9), StyleKey::Heading3);
    }

    #[test]
    fn test_table_rows_share_size_but_not_weight() {
        let header = TextStyle::for_key(StyleKey::table_row(true));
        let body = TextStyle::for_key(StyleKey::table_row(false));

        assert_eq!(header.font_size, body.font_size);
        assert!(header.bold);
        assert!(!body.bold);
    }
}
