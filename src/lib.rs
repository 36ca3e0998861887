//! wxr2md - Convert WordPress export (WXR) files to Markdown documents.
//!
//! This crate reads a WordPress content-export document (an RSS/XML dump of
//! blog posts) and writes one Markdown document per post, each with a
//! structured metadata header followed by a plain-text rendering of the post
//! body.
//!
//! # Example
//!
//! ```
//! use wxr2md::sanitize::sanitize_filename;
//! use wxr2md::markdown::html_to_markdown;
//!
//! assert_eq!(sanitize_filename("Hello: World"), "Hello__World");
//! assert_eq!(html_to_markdown("<ul><li>A</li><li>B</li></ul>"), "- A\n- B");
//! ```
//!
//! # Architecture
//!
//! The exporter is organized into several modules:
//!
//! - [`config`]: Configuration constants
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Tree loading, namespace-tolerant field resolution
//! - [`record`]: The canonical per-post record type
//! - [`extract`]: Record extraction from item nodes
//! - [`markdown`]: HTML-to-Markdown body conversion
//! - [`sanitize`]: Filename sanitization
//! - [`writer`]: Document rendering and the output sink
//! - [`exporter`]: Main export service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod exporter;
pub mod extract;
pub mod markdown;
pub mod record;
pub mod sanitize;
pub mod writer;
pub mod xml;

// Re-export main entry points
pub use exporter::{export_file, export_records, ExportSummary};

// Re-export commonly used items
pub use error::{ExportError, Result};
pub use markdown::html_to_markdown;
pub use record::Record;
pub use sanitize::sanitize_filename;
pub use writer::{DirectorySink, DocumentSink};
