//! Scanner Errors
//!
//! Classifying a cursor never fails; these errors come from loading
//! configuration and from hosts that address lines which do not exist.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced around the scanner (configuration, document access).
#[derive(Debug, Error)]
pub enum ScanError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON for [`crate::config::ScannerConfig`].
    #[error("invalid scanner config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A line number past the end of the document.
    #[error("line {line} is out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
}

pub type Result<T> = std::result::Result<T, ScanError>;
