//! Configuration constants for the exporter.

/// Default output directory for converted documents.
pub const DEFAULT_OUTPUT_DIR: &str = "assets";

/// Default tag name identifying record (post) elements in the export.
pub const DEFAULT_RECORD_TAG: &str = "item";

/// Maximum length of a sanitized filename stem, in characters.
pub const MAX_FILENAME_CHARS: usize = 100;

/// Dublin Core namespace, used by WordPress exports for the post author.
pub const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

/// RSS content-module namespace, used for the encoded post body.
pub const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

/// Substring identifying the WordPress extension namespace.
///
/// Export files vary in the exact namespace version
/// (`http://wordpress.org/export/1.1/`, `.../1.2/`, ...), so classification
/// matches on the host rather than a full URI.
pub const EXTENSION_NAMESPACE_MARKER: &str = "wordpress.org";

/// Placeholder written in place of an empty post body.
pub const EMPTY_BODY_PLACEHOLDER: &str = "(No content)";
