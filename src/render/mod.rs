//! Rendering module for handing converted content to hosts.

mod json;
mod plain;

pub use json::{to_json, JsonFormat};
pub use plain::{to_plain, PlainRenderer};
