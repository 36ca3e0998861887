//! Filename sanitization for output documents.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::MAX_FILENAME_CHARS;

/// Characters that are invalid in filenames on common filesystems.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INVALID_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid regex"));

/// Runs of whitespace, collapsed to a single underscore.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Turn a candidate name (typically a post title) into a safe, bounded
/// filename stem.
///
/// Steps, in order: best-effort percent-decoding (failure keeps the original
/// string), NFKC normalization, replacement of filesystem-invalid characters
/// with `_`, collapse of whitespace runs to `_`, truncation to
/// [`MAX_FILENAME_CHARS`] characters. Pure; never fails.
///
/// # Examples
/// ```
/// use wxr2md::sanitize::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Hello: World"), "Hello__World");
/// ```
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let decoded = urlencoding::decode(name)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| name.to_string());

    let normalized: String = decoded.nfkc().collect();

    let replaced = INVALID_FILENAME_CHARS.replace_all(&normalized, "_");
    let collapsed = WHITESPACE_RUN.replace_all(&replaced, "_");

    collapsed.chars().take(MAX_FILENAME_CHARS).collect()
}
