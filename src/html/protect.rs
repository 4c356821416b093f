//! Protected region handling for whitespace compaction
//!
//! Swaps the bodies of `<script>`, `<textarea>`, `<code>` and `<pre>` elements
//! for opaque placeholders so that whole-document rewrites cannot touch them,
//! then puts the original text back afterwards.

use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// Matches a protected element, opening tag through the closing tag of the
/// same name. One arm per element; non-greedy, so the first closing tag wins.
static PROTECTED_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?si)<script(?:\s[^>]*)?>.*?</\s*script\s*>",
        r"|<textarea(?:\s[^>]*)?>.*?</\s*textarea\s*>",
        r"|<code(?:\s[^>]*)?>.*?</\s*code\s*>",
        r"|<pre(?:\s[^>]*)?>.*?</\s*pre\s*>",
    ))
    .expect("PROTECTED_REGION regex is valid")
});

/// Placeholder storage for protected regions
pub struct RegionProtector {
    /// Placeholder to original text, in capture order
    regions: Vec<(String, String)>,
}

impl RegionProtector {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Replace every protected region in `html` with a unique placeholder
    ///
    /// Placeholders look like `{5f0c...}`: braces around a random v4 UUID in
    /// simple form. They contain no whitespace, so whitespace rewrites leave
    /// them intact.
    ///
    /// Returns: `html` with protected regions swapped out
    pub fn protect(&mut self, html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut last = 0;

        for found in PROTECTED_REGION.find_iter(html) {
            let placeholder = format!("{{{}}}", Uuid::new_v4().simple());
            out.push_str(&html[last..found.start()]);
            out.push_str(&placeholder);
            self.regions.push((placeholder, found.as_str().to_string()));
            last = found.end();
        }
        out.push_str(&html[last..]);

        tracing::trace!("Protected {} region(s)", self.regions.len());
        out
    }

    /// Put the original text back in place of each placeholder
    pub fn restore(&self, html: &str) -> String {
        let mut restored = html.to_string();
        for (placeholder, original) in &self.regions {
            if !restored.contains(placeholder.as_str()) {
                tracing::warn!("Placeholder {} missing at restore time", placeholder);
                continue;
            }
            restored = restored.replace(placeholder.as_str(), original);
        }
        restored
    }

    /// Number of regions currently held
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionProtector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_hides_region() {
        let html = "<p>a</p><pre>  x  </pre>";

        let mut protector = RegionProtector::new();
        let protected = protector.protect(html);

        assert_eq!(protector.len(), 1);
        assert!(protected.starts_with("<p>a</p>{"));
        assert!(protected.ends_with('}'));
        assert!(!protected.contains("<pre>"));
    }

    #[test]
    fn test_restore_round_trip() {
        let html = "<code> a </code> and <script>var  x = 1;</script>";

        let mut protector = RegionProtector::new();
        let protected = protector.protect(html);
        assert_eq!(protector.len(), 2);

        assert_eq!(protector.restore(&protected), html);
    }

    #[test]
    fn test_placeholders_are_unique() {
        let html = "<pre>same</pre><pre>same</pre>";

        let mut protector = RegionProtector::new();
        let protected = protector.protect(html);

        assert_eq!(protector.len(), 2);
        assert_ne!(protector.regions[0].0, protector.regions[1].0);
        assert_eq!(protector.restore(&protected), html);
    }

    #[test]
    fn test_closing_tag_must_match_name() {
        let html = "<pre> a </code> b </pre>";

        let mut protector = RegionProtector::new();
        let protected = protector.protect(html);

        assert_eq!(protector.len(), 1);
        assert!(!protected.contains("</code>"));
    }

    #[test]
    fn test_attributes_and_case() {
        let html = r#"<PRE class="shell">  ls  -la </PRE>"#;

        let mut protector = RegionProtector::new();
        protector.protect(html);

        assert_eq!(protector.len(), 1);
    }

    #[test]
    fn test_unclosed_region_is_left_alone() {
        let html = "<pre>  never closed";

        let mut protector = RegionProtector::new();
        let protected = protector.protect(html);

        assert!(protector.is_empty());
        assert_eq!(protected, html);
    }

    #[test]
    fn test_large_document_keeps_region() {
        let html = "word ".repeat(200_000) + "<pre>  keep\n  me </pre>";

        let mut protector = RegionProtector::new();
        let protected = protector.protect(&html);

        assert_eq!(protector.len(), 1);
        assert!(!protected.contains("<pre>"));
        assert_eq!(protector.restore(&protected), html);
    }

    #[test]
    fn test_missing_placeholder_is_skipped() {
        let mut protector = RegionProtector::new();
        protector.protect("<pre>x</pre>");

        assert_eq!(protector.restore("gone"), "gone");
    }
}
