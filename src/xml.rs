//! XML loading and navigation utilities.
//!
//! Export formats vary in whether elements carry a namespace prefix, so all
//! tag matching in this module works on the bare (namespace-stripped) name.
//! The field resolver tries an ordered list of lookup strategies so the rest
//! of the pipeline never has to care which variant a given export uses.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::error::{ExportError, Result};

/// Read the source document into a string.
///
/// The returned string owns the XML for the lifetime of the run; parse it
/// with [`roxmltree::Document::parse`].
///
/// # Errors
/// * [`ExportError::NotFound`] when the path does not resolve to a readable file
/// * [`ExportError::Io`] for any other read failure
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExportError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ExportError::Io(e)
        }
    })
}

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wxr2md::xml::get_tag_name;
///
/// let xml = r#"<root xmlns:wp="http://wordpress.org/export/1.2"><wp:post_id>1</wp:post_id></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let post_id = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(post_id), "post_id");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the text content of a node, trimmed. Empty string when absent.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Get all element children of a node.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// A single lookup strategy: find a descendant matching a tag-name variant.
type Lookup = for<'a, 'input> fn(Node<'a, 'input>, &str) -> Option<Node<'a, 'input>>;

/// Exact match: a descendant with the bare name and no namespace.
fn find_exact<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| {
        n.is_element() && n.tag_name().name() == name && n.tag_name().namespace().is_none()
    })
}

/// Namespace-wildcard match: a descendant with the bare name under any namespace.
fn find_any_namespace<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Lookup strategies in priority order: exact unnamespaced first, then any
/// namespace prefix.
const LOOKUP_STRATEGIES: [Lookup; 2] = [find_exact, find_any_namespace];

/// Find the first descendant matching any of the given tag-name variants.
///
/// Variants are tried in order; for each variant the lookup strategies run in
/// priority order. Returns `None` when nothing matches.
pub fn find_by_variants<'a, 'input>(
    node: Node<'a, 'input>,
    variants: &[&str],
) -> Option<Node<'a, 'input>> {
    for variant in variants {
        for lookup in LOOKUP_STRATEGIES {
            if let Some(found) = lookup(node, variant) {
                return Some(found);
            }
        }
    }
    None
}

/// Resolve the text of the first descendant matching any tag-name variant.
///
/// Returns the empty string when no variant matches; callers treat empty
/// string and "field absent" as the same signal.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use wxr2md::xml::resolve_field;
///
/// let xml = r#"<item><title>Hello</title></item>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(resolve_field(doc.root_element(), &["title"]), "Hello");
/// assert_eq!(resolve_field(doc.root_element(), &["missing"]), "");
/// ```
pub fn resolve_field(node: Node<'_, '_>, variants: &[&str]) -> String {
    find_by_variants(node, variants)
        .map(get_text)
        .unwrap_or_default()
}

/// Find the first descendant with the given name in a specific namespace.
pub fn find_namespaced<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: &str,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| {
        n.is_element()
            && n.tag_name().name() == name
            && n.tag_name().namespace() == Some(namespace)
    })
}

/// Enumerate all distinct bare tag names in the document, sorted.
///
/// Used for the zero-record diagnostic so the caller can see what the
/// document actually contains and correct the record-tag argument.
pub fn distinct_tag_names(doc: &Document<'_>) -> Vec<String> {
    let mut tags: Vec<String> = doc
        .descendants()
        .filter(|n| n.is_element())
        .map(|n| get_tag_name(n).to_string())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}
