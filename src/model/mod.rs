//! Document model types for structured markdown content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! markdown conversion and rich-document rendering. The model is
//! format-agnostic: a downstream renderer decides how each block is laid
//! out, using the [`TextStyle`] lookup table for font attributes.

mod block;
mod document;
mod style;
mod table;

pub use block::Block;
pub use document::Document;
pub use style::{StyleKey, TextStyle};
pub use table::{Table, TableRow};
