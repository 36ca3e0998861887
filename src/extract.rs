//! Record extraction from export item nodes.
//!
//! An item node mixes three vocabularies: base RSS elements (title, link,
//! guid), fixed-namespace elements (Dublin Core creator, content-module
//! encoded body), and extension-namespace elements carrying WordPress
//! metadata. Extraction merges all three into a [`Record`], never failing on
//! missing fields.

use roxmltree::Node;

use crate::config::{CONTENT_NAMESPACE, DC_NAMESPACE, EXTENSION_NAMESPACE_MARKER};
use crate::record::Record;
use crate::xml::{element_children, find_namespaced, get_tag_name, get_text, resolve_field};

/// Whether a namespace URI belongs to the extension (WordPress) vocabulary.
///
/// Matches any wordpress.org namespace version, plus the degenerate case of
/// an explicitly empty namespace URI seen in some hand-edited exports.
fn is_extension_namespace(namespace: Option<&str>) -> bool {
    matches!(namespace, Some(uri) if uri.contains(EXTENSION_NAMESPACE_MARKER) || uri.is_empty())
}

/// Extract a canonical [`Record`] from a record (item) node.
///
/// Base fields are resolved tolerantly through the field resolver; creator
/// and content come from their fixed namespaces; every immediate extension
/// child is then merged by bare name, overwriting canonical fields on
/// collision and collecting everything else into `other_metadata`.
pub fn extract_record(node: Node<'_, '_>) -> Record {
    let mut record = Record::new();

    record.title = resolve_field(node, &["title"]);
    record.link = resolve_field(node, &["link"]);
    record.guid = resolve_field(node, &["guid"]);

    if let Some(creator) = find_namespaced(node, DC_NAMESPACE, "creator") {
        record.creator = get_text(creator);
    }

    if let Some(encoded) = find_namespaced(node, CONTENT_NAMESPACE, "encoded") {
        record.content = get_text(encoded);
    }

    // Extension metadata merges last so it wins over base-format duplicates.
    for child in element_children(node) {
        if !is_extension_namespace(child.tag_name().namespace()) {
            continue;
        }
        let bare = get_tag_name(child);
        record.assign(bare, get_text(child));
    }

    record
}
