//! Error types for the exporter.
//!
//! Only load-time failures are fatal: a missing input file or malformed XML
//! aborts the run before any output is written. Field-level absence and
//! malformed HTML inside a record are never errors; those degrade to empty
//! defaults or best-effort text further down the pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the exporter library.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Input path does not resolve to a readable file.
    #[error("Input file not found: {}", path.display())]
    NotFound {
        /// The path that failed to resolve.
        path: PathBuf,
    },

    /// Input document is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error (reading the source or writing an output document).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for exporter operations.
pub type Result<T> = std::result::Result<T, ExportError>;
