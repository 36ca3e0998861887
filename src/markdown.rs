//! HTML-to-Markdown conversion for post bodies.
//!
//! The body of an exported post is an embedded HTML fragment. Conversion is
//! best-effort: the fragment is parsed with a tolerant HTML5 parser (so
//! malformed markup degrades to plain text rather than failing), rendered
//! bottom-up with per-element rules, then post-processed to collapse excess
//! blank lines and trailing whitespace.

use std::sync::LazyLock;

use regex::Regex;
use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::{Html, Node};

/// Runs of three or more newlines (blank-only lines included) collapse to a
/// single blank line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("valid regex"));

/// Trailing spaces and tabs at the end of any line.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid regex"));

/// Convert an HTML fragment to plain Markdown text.
///
/// Never fails: unparseable input is recovered by the HTML5 parser and
/// unrecognized elements fall through as their plain text content.
///
/// # Examples
/// ```
/// use wxr2md::markdown::html_to_markdown;
///
/// let md = html_to_markdown("<h1>Title</h1><p>Body text</p>");
/// assert_eq!(md, "# Title\n\nBody text");
/// ```
#[must_use]
pub fn html_to_markdown(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html);
    let rendered: String = fragment
        .root_element()
        .children()
        .map(render_node)
        .collect();

    tidy(&rendered)
}

/// Render a single DOM node to text.
fn render_node(node: NodeRef<'_, Node>) -> String {
    match node.value() {
        Node::Text(text) => text.text.to_string(),
        Node::Element(element) => render_element(node, &element),
        _ => String::new(),
    }
}

/// Render all children of a node, concatenated in document order.
fn render_children(node: NodeRef<'_, Node>) -> String {
    node.children().map(render_node).collect()
}

/// Per-element rendering rules.
fn render_element(node: NodeRef<'_, Node>, element: &Element) -> String {
    match element.name() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = heading_level(element.name());
            format!("{} {}\n\n", "#".repeat(level), plain_text(node).trim())
        }
        "p" => render_paragraph(node),
        "a" => {
            let href = element.attr("href").unwrap_or_default();
            let text = plain_text(node);
            let text = text.trim();
            let label = if text.is_empty() { href } else { text };
            format!("[{label}]({href})")
        }
        // Alt text is intentionally not preserved for standalone images.
        "img" => format!("![]({})", element.attr("src").unwrap_or_default()),
        "figure" => render_figure(node),
        // Captions are folded into their enclosing figure; a stray
        // figcaption emits nothing.
        "figcaption" => String::new(),
        "ul" => render_list(node, false),
        "ol" => render_list(node, true),
        "br" => "\n".to_string(),
        _ => render_children(node),
    }
}

/// Render a paragraph: inline children resolved first, joined with single
/// spaces, with explicit line breaks kept as bare newlines.
fn render_paragraph(node: NodeRef<'_, Node>) -> String {
    let mut line = String::new();
    for child in node.children() {
        let rendered = render_node(child);
        let trimmed = rendered.trim();
        if trimmed.is_empty() {
            // A <br> renders as a lone newline; keep it without padding.
            if rendered.contains('\n') {
                while line.ends_with(' ') {
                    line.pop();
                }
                line.push('\n');
            }
            continue;
        }
        if !line.is_empty() && !line.ends_with('\n') {
            line.push(' ');
        }
        line.push_str(trimmed);
    }
    format!("{line}\n\n")
}

/// Heading depth from the tag name ("h3" -> 3).
fn heading_level(name: &str) -> usize {
    name.strip_prefix('h')
        .and_then(|digit| digit.parse().ok())
        .unwrap_or(1)
}

/// Render a figure as an image with its caption text.
fn render_figure(node: NodeRef<'_, Node>) -> String {
    let src = node.descendants().find_map(|n| match n.value() {
        Node::Element(el) if el.name() == "img" => {
            Some(el.attr("src").unwrap_or_default().to_string())
        }
        _ => None,
    });

    // A figure without an image is not special; fall through to its content.
    let Some(src) = src else {
        return render_children(node);
    };

    let caption = node
        .descendants()
        .find(|n| matches!(n.value(), Node::Element(el) if el.name() == "figcaption"))
        .map(|n| plain_text(n).trim().to_string())
        .unwrap_or_default();

    format!("![{caption}]({src})\n\n")
}

/// Render the direct list items of a ul/ol element, one per line.
fn render_list(node: NodeRef<'_, Node>, ordered: bool) -> String {
    let items: Vec<String> = node
        .children()
        .filter(|child| matches!(child.value(), Node::Element(el) if el.name() == "li"))
        .map(|li| plain_text(li).trim().to_string())
        .collect();

    if items.is_empty() {
        return String::new();
    }

    let lines: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, text)| {
            if ordered {
                format!("{}. {text}", i + 1)
            } else {
                format!("- {text}")
            }
        })
        .collect();

    format!("{}\n\n", lines.join("\n"))
}

/// Collect all descendant text of a node, unformatted.
fn plain_text(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        if let Node::Text(text) = descendant.value() {
            out.push_str(&text.text);
        }
    }
    out
}

/// Post-process converted text: collapse blank-line runs, strip trailing
/// per-line whitespace, trim the whole result.
fn tidy(text: &str) -> String {
    let collapsed = EXCESS_BLANK_LINES.replace_all(text, "\n\n");
    let stripped = TRAILING_WHITESPACE.replace_all(&collapsed, "");
    stripped.trim().to_string()
}
