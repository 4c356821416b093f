//! Whitespace compaction for HTML-ish text
//!
//! This is not an HTML parser. Protected elements are found with a regex, so
//! malformed or nested markup can leak normalization into (or out of) those
//! elements. It works for the markup templates actually produce.

use super::protect::RegionProtector;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex is valid"));

/// `/* block */` comments, or `// line` comments preceded by whitespace
static JS_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:/\*[\s\S]*?\*/)|(?:\s+//.*$)").expect("JS_COMMENT regex is valid")
});

/// Replace every run of whitespace with a single space
///
/// No trimming and no region protection; see [`remove_whitespace`] for the
/// HTML-aware variant.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s, " ").into_owned()
}

/// Collapse whitespace in `html` outside `<script>`, `<textarea>`, `<code>`
/// and `<pre>` elements, and trim the result
///
/// The text of protected elements comes back byte for byte.
///
/// # Examples
/// ```
/// # use vital_tools::html::remove_whitespace;
/// assert_eq!(
///     remove_whitespace("  a   <pre>  x\n  y </pre>  b "),
///     "a <pre>  x\n  y </pre> b"
/// );
/// ```
pub fn remove_whitespace(html: &str) -> String {
    let mut protector = RegionProtector::new();
    let working = protector.protect(html);
    let compacted = collapse_whitespace(&working);
    let restored = protector.restore(compacted.trim());

    tracing::debug!(
        regions = protector.len(),
        before = html.len(),
        after = restored.len(),
        "Removed whitespace"
    );
    restored
}

/// Strip JavaScript comments from `source`
///
/// Block comments go wherever they are. Line comments only go when
/// whitespace precedes the `//`, which keeps `https://` in string literals;
/// that whitespace is removed along with the comment.
pub fn strip_js_comments(source: &str) -> String {
    JS_COMMENT.replace_all(source, "").into_owned()
}
