//! Document serialization and the output sink.
//!
//! The filesystem side effects live behind the [`DocumentSink`] trait so the
//! extraction and conversion logic is testable without touching a real
//! filesystem. [`DirectorySink`] is the production sink: it creates its
//! directory once, idempotently, and writes each document atomically.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::EMPTY_BODY_PLACEHOLDER;
use crate::error::Result;
use crate::record::Record;
use crate::sanitize::sanitize_filename;

/// A destination for rendered documents.
pub trait DocumentSink {
    /// Persist a document under the given name, returning its path.
    fn write_document(&mut self, name: &str, content: &str) -> Result<PathBuf>;
}

/// Sink writing documents into a single output directory.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create the sink, creating the output directory if needed.
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }
}

impl DocumentSink for DirectorySink {
    /// Write via temp file, sync, then rename, so a crash mid-write never
    /// leaves a truncated document behind.
    fn write_document(&mut self, name: &str, content: &str) -> Result<PathBuf> {
        let output_file = self.dir.join(name);
        let temp_file = self.dir.join(format!(".{name}.tmp"));

        {
            let mut file = File::create(&temp_file)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        // On Windows, rename fails if the destination already exists
        #[cfg(target_os = "windows")]
        if output_file.exists() {
            fs::remove_file(&output_file)?;
        }

        fs::rename(&temp_file, &output_file)?;

        Ok(output_file)
    }
}

/// Format a metadata value for the header.
///
/// Empty values serialize as `""`; values containing a colon, quote, or
/// newline are wrapped in quotes with embedded quotes escaped.
fn format_value(value: &str) -> String {
    if value.is_empty() {
        return "\"\"".to_string();
    }
    if value.contains(':') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// Render a record as a full document: `---`-delimited metadata header,
/// blank line, then the converted body (or a placeholder when empty).
#[must_use]
pub fn render_document(record: &Record) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("---".to_string());
    for (key, value) in record.header_fields() {
        lines.push(format!("{key}: {}", format_value(value)));
    }
    for (key, value) in &record.other_metadata {
        lines.push(format!("{key}: {}", format_value(value)));
    }
    lines.push("---".to_string());
    lines.push(String::new());

    if record.content.is_empty() {
        lines.push(EMPTY_BODY_PLACEHOLDER.to_string());
    } else {
        lines.push(record.content.clone());
    }

    lines.join("\n")
}

/// Output filename for a record: the sanitized title, or a zero-padded
/// numeric fallback when the record has no title.
#[must_use]
pub fn document_name(record: &Record, index: usize) -> String {
    if record.title.is_empty() {
        format!("article_{index:03}.md")
    } else {
        format!("{}.md", sanitize_filename(&record.title))
    }
}

/// Serialize a record and write it through the sink.
pub fn write_record(
    record: &Record,
    index: usize,
    sink: &mut dyn DocumentSink,
) -> Result<PathBuf> {
    sink.write_document(&document_name(record, index), &render_document(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_record() -> Record {
        let mut record = Record::new();
        record.title = "Hello: World".to_string();
        record.post_id = "1".to_string();
        record.content = "# Title\n\nBody text".to_string();
        record
    }

    #[test]
    fn test_format_value_empty() {
        assert_eq!(format_value(""), "\"\"");
    }

    #[test]
    fn test_format_value_plain() {
        assert_eq!(format_value("publish"), "publish");
    }

    #[test]
    fn test_format_value_quoted() {
        assert_eq!(format_value("Hello: World"), "\"Hello: World\"");
        assert_eq!(format_value("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(format_value("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_render_document_header_shape() {
        let document = render_document(&sample_record());

        assert!(document.starts_with("---\n"));
        assert!(document.contains("title: \"Hello: World\""));
        assert!(document.contains("post_id: 1"));
        // Absent fields are serialized with stable empty markers
        assert!(document.contains("creator: \"\""));
        assert!(document.contains("is_sticky: \"\""));
        // Header closes, then a blank line, then the body
        assert!(document.contains("---\n\n# Title\n\nBody text"));
    }

    #[test]
    fn test_render_document_empty_body_placeholder() {
        let mut record = sample_record();
        record.content = String::new();
        let document = render_document(&record);
        assert!(document.ends_with("---\n\n(No content)"));
    }

    #[test]
    fn test_render_document_extension_metadata_after_canonical() {
        let mut record = sample_record();
        record.set_extra("attachment_url", "https://example.com/a.png".to_string());
        let document = render_document(&record);

        let is_sticky_pos = document.find("is_sticky:").unwrap();
        let extra_pos = document.find("attachment_url:").unwrap();
        assert!(extra_pos > is_sticky_pos);
    }

    #[test]
    fn test_document_name_from_title() {
        assert_eq!(document_name(&sample_record(), 0), "Hello__World.md");
    }

    #[test]
    fn test_document_name_fallback_when_untitled() {
        let record = Record::new();
        assert_eq!(document_name(&record, 2), "article_002.md");
        assert_eq!(document_name(&record, 41), "article_041.md");
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path()).unwrap();

        let path = sink.write_document("doc.md", "content").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
        // No temp file left behind
        assert!(!dir.path().join(".doc.md.tmp").exists());
    }

    #[test]
    fn test_directory_sink_creates_nested_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut sink = DirectorySink::new(&nested).unwrap();
        let path = sink.write_document("doc.md", "x").unwrap();
        assert!(path.starts_with(&nested));
    }

    #[test]
    fn test_directory_sink_overwrites_on_name_collision() {
        let dir = tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path()).unwrap();

        sink.write_document("doc.md", "first").unwrap();
        let path = sink.write_document("doc.md", "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_write_record_round_trip() {
        let dir = tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path()).unwrap();

        let path = write_record(&sample_record(), 0, &mut sink).unwrap();
        assert!(path.ends_with("Hello__World.md"));

        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("title: \"Hello: World\""));
        assert!(written.contains("# Title\n\nBody text"));
    }
}
