//! Error types for the markdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for markdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around the core text transforms.
///
/// The transforms themselves (`clean`, `convert`) are total over any input
/// string and never fail; errors only arise at the serialization and I/O
/// boundaries.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Document serialization to JSON failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
