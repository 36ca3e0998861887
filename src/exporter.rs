//! Main exporter service that ties all components together.

use std::path::{Path, PathBuf};

use roxmltree::Document;

use crate::error::Result;
use crate::extract::extract_record;
use crate::markdown::html_to_markdown;
use crate::writer::{write_record, DirectorySink, DocumentSink};
use crate::xml::{distinct_tag_names, get_tag_name, read_source};

/// Outcome of an export run.
#[derive(Debug, Default)]
pub struct ExportSummary {
    /// Paths of the documents written, in record order.
    pub written: Vec<PathBuf>,

    /// Number of record nodes found in the document.
    pub record_count: usize,

    /// All distinct tag names present in the document. Populated only when
    /// zero records were found, so the caller can correct the record-tag
    /// argument.
    pub document_tags: Vec<String>,
}

/// Convert an export file into one Markdown document per record.
///
/// # Arguments
/// * `xml_path` - Path to the export XML file
/// * `output_dir` - Directory for the converted documents (created if absent)
/// * `record_tag` - Tag name identifying record (post) elements
///
/// # Errors
/// Fatal failures only: unreadable input, malformed XML, or a write failure.
/// Missing fields and malformed HTML inside records are absorbed with safe
/// defaults.
pub fn export_file(xml_path: &Path, output_dir: &Path, record_tag: &str) -> Result<ExportSummary> {
    let xml = read_source(xml_path)?;
    let doc = Document::parse(&xml)?;
    let mut sink = DirectorySink::new(output_dir)?;
    export_records(&doc, record_tag, &mut sink)
}

/// Export every record node in a parsed document through the given sink.
///
/// Records are processed strictly sequentially; each record is extracted,
/// its body converted in place, and the result written before the next
/// record is touched. A write failure aborts the remaining batch.
pub fn export_records(
    doc: &Document<'_>,
    record_tag: &str,
    sink: &mut dyn DocumentSink,
) -> Result<ExportSummary> {
    let records: Vec<_> = doc
        .descendants()
        .filter(|n| n.is_element() && get_tag_name(*n) == record_tag)
        .collect();

    if records.is_empty() {
        let tags = distinct_tag_names(doc);
        tracing::warn!(
            record_tag,
            tag_count = tags.len(),
            "no record nodes found in document"
        );
        return Ok(ExportSummary {
            written: Vec::new(),
            record_count: 0,
            document_tags: tags,
        });
    }

    tracing::debug!(record_tag, count = records.len(), "found record nodes");

    let mut written = Vec::with_capacity(records.len());
    for (index, node) in records.iter().enumerate() {
        let mut record = extract_record(*node);
        record.content = html_to_markdown(&record.content);

        let path = write_record(&record, index, sink)?;
        tracing::debug!(index, path = %path.display(), title = %record.title, "wrote document");
        written.push(path);
    }

    Ok(ExportSummary {
        record_count: written.len(),
        written,
        document_tags: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// In-memory sink for exercising the pipeline without a filesystem.
    #[derive(Default)]
    struct MemorySink {
        documents: BTreeMap<String, String>,
    }

    impl DocumentSink for MemorySink {
        fn write_document(&mut self, name: &str, content: &str) -> Result<PathBuf> {
            self.documents.insert(name.to_string(), content.to_string());
            Ok(PathBuf::from(name))
        }
    }

    const EXPORT: &str = r#"<rss
        xmlns:dc="http://purl.org/dc/elements/1.1/"
        xmlns:content="http://purl.org/rss/1.0/modules/content/"
        xmlns:wp="http://wordpress.org/export/1.2">
      <channel>
        <title>Example Blog</title>
        <item>
          <title>Hello: World</title>
          <link>https://example.com/hello</link>
          <dc:creator>alice</dc:creator>
          <content:encoded><![CDATA[<h1>Title</h1><p>Body text</p>]]></content:encoded>
          <wp:post_id>1</wp:post_id>
        </item>
        <item>
          <wp:post_id>2</wp:post_id>
        </item>
        <item>
          <wp:post_id>3</wp:post_id>
        </item>
      </channel>
    </rss>"#;

    #[test]
    fn test_export_records_end_to_end() {
        let doc = Document::parse(EXPORT).unwrap();
        let mut sink = MemorySink::default();

        let summary = export_records(&doc, "item", &mut sink).unwrap();
        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.written.len(), 3);
        assert!(summary.document_tags.is_empty());

        let first = &sink.documents["Hello__World.md"];
        assert!(first.contains("title: \"Hello: World\""));
        assert!(first.contains("creator: alice"));
        assert!(first.contains("# Title\n\nBody text"));
    }

    #[test]
    fn test_untitled_records_use_index_fallback() {
        let doc = Document::parse(EXPORT).unwrap();
        let mut sink = MemorySink::default();

        export_records(&doc, "item", &mut sink).unwrap();
        // Items without a title fall back to their 0-based index
        assert!(sink.documents.contains_key("article_001.md"));
        assert!(sink.documents.contains_key("article_002.md"));
    }

    #[test]
    fn test_empty_body_gets_placeholder() {
        let doc = Document::parse(EXPORT).unwrap();
        let mut sink = MemorySink::default();

        export_records(&doc, "item", &mut sink).unwrap();
        assert!(sink.documents["article_001.md"].contains("(No content)"));
    }

    #[test]
    fn test_zero_records_enumerates_tags() {
        let doc = Document::parse(EXPORT).unwrap();
        let mut sink = MemorySink::default();

        let summary = export_records(&doc, "missing", &mut sink).unwrap();
        assert_eq!(summary.record_count, 0);
        assert!(summary.written.is_empty());
        assert!(sink.documents.is_empty());

        // Sorted, distinct bare tag names from the whole document
        assert!(summary.document_tags.contains(&"channel".to_string()));
        assert!(summary.document_tags.contains(&"item".to_string()));
        assert!(summary.document_tags.contains(&"post_id".to_string()));
        let mut sorted = summary.document_tags.clone();
        sorted.sort();
        assert_eq!(summary.document_tags, sorted);
    }

    #[test]
    fn test_export_file_missing_input_is_fatal() {
        let err = export_file(
            Path::new("does/not/exist.xml"),
            Path::new("unused"),
            "item",
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::ExportError::NotFound { .. }));
    }
}
