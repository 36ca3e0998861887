//! The canonical record type: one extracted post.
//!
//! Every canonical field is always present (default empty string) even when
//! absent from the source, so the written metadata header has a stable shape
//! across all output documents. Anything outside the canonical set collects
//! into `other_metadata`, preserving insertion order.

/// One extracted post, bundling metadata and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Post title (may be empty).
    pub title: String,

    /// Permalink to the post.
    pub link: String,

    /// Short description / excerpt.
    pub description: String,

    /// Post body. Raw HTML as extracted; converted to plain Markdown text in
    /// place before writing.
    pub content: String,

    /// RSS publication date, kept as an opaque string.
    pub pub_date: String,

    /// Numeric post identifier from the extension namespace.
    pub post_id: String,

    /// Globally unique identifier (may be empty).
    pub guid: String,

    /// Post author (Dublin Core creator).
    pub creator: String,

    /// Local post date, opaque string.
    pub post_date: String,

    /// GMT post date, opaque string.
    pub post_date_gmt: String,

    /// Local modification date, opaque string.
    pub post_modified: String,

    /// GMT modification date, opaque string.
    pub post_modified_gmt: String,

    /// Whether comments are open/closed.
    pub comment_status: String,

    /// Whether pings are open/closed.
    pub ping_status: String,

    /// URL slug of the post.
    pub post_name: String,

    /// Workflow status (publish, draft, ...).
    pub status: String,

    /// Parent post id for hierarchical types.
    pub post_parent: String,

    /// Menu ordering index.
    pub menu_order: String,

    /// Post type (post, page, attachment, ...).
    pub post_type: String,

    /// Password protecting the post, if any.
    pub post_password: String,

    /// Sticky flag.
    pub is_sticky: String,

    /// Extension-namespace fields outside the canonical set, in insertion
    /// order. Duplicate keys are last-write-wins.
    pub other_metadata: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record with all canonical fields defaulted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value by bare field name.
    ///
    /// Names matching a canonical field overwrite that field; anything else
    /// goes into [`Record::other_metadata`].
    pub fn assign(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "link" => self.link = value,
            "description" => self.description = value,
            "content" => self.content = value,
            "pubDate" => self.pub_date = value,
            "post_id" => self.post_id = value,
            "guid" => self.guid = value,
            "creator" => self.creator = value,
            "post_date" => self.post_date = value,
            "post_date_gmt" => self.post_date_gmt = value,
            "post_modified" => self.post_modified = value,
            "post_modified_gmt" => self.post_modified_gmt = value,
            "comment_status" => self.comment_status = value,
            "ping_status" => self.ping_status = value,
            "post_name" => self.post_name = value,
            "status" => self.status = value,
            "post_parent" => self.post_parent = value,
            "menu_order" => self.menu_order = value,
            "post_type" => self.post_type = value,
            "post_password" => self.post_password = value,
            "is_sticky" => self.is_sticky = value,
            _ => self.set_extra(name, value),
        }
    }

    /// Set an extension-metadata entry, last-write-wins on duplicate keys.
    pub fn set_extra(&mut self, name: &str, value: String) {
        if let Some(entry) = self.other_metadata.iter_mut().find(|(k, _)| k == name) {
            entry.1 = value;
        } else {
            self.other_metadata.push((name.to_string(), value));
        }
    }

    /// Canonical header fields in their fixed serialization order.
    ///
    /// The body (`content`) is not part of the header; extension metadata
    /// follows these in insertion order.
    #[must_use]
    pub fn header_fields(&self) -> [(&'static str, &str); 20] {
        [
            ("title", &self.title),
            ("post_id", &self.post_id),
            ("link", &self.link),
            ("guid", &self.guid),
            ("description", &self.description),
            ("creator", &self.creator),
            ("pubDate", &self.pub_date),
            ("post_date", &self.post_date),
            ("post_date_gmt", &self.post_date_gmt),
            ("post_modified", &self.post_modified),
            ("post_modified_gmt", &self.post_modified_gmt),
            ("comment_status", &self.comment_status),
            ("ping_status", &self.ping_status),
            ("post_name", &self.post_name),
            ("status", &self.status),
            ("post_parent", &self.post_parent),
            ("menu_order", &self.menu_order),
            ("post_type", &self.post_type),
            ("post_password", &self.post_password),
            ("is_sticky", &self.is_sticky),
        ]
    }
}
