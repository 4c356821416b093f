//! Hashtag and mention linkification
//!
//! Each distinct token is rewritten with a whole-text substring replace, not
//! by offset. A token that is a prefix of a longer one (`#rust` vs
//! `#rustlang`) therefore also rewrites the start of the longer one, and a
//! token that appears inside markup already present in the text gets linked
//! there too. Callers relying on exact offsets should not use these helpers.

use crate::patterns::{HashtagRule, LexicalRule, MentionRule};
use crate::seq::unique;

/// Build the link target for `name` under `uri`
///
/// Leading and trailing slashes on `uri` are dropped, a single leading slash
/// is added, the name is percent-encoded, and the whole path is lowercased.
/// An empty `uri` links to the root.
fn tag_uri(uri: &str, name: &str) -> String {
    let prefix = uri.trim_start_matches('/').trim_end_matches('/');
    let encoded = urlencoding::encode(name);
    let path = if prefix.is_empty() {
        format!("/{encoded}")
    } else {
        format!("/{prefix}/{encoded}")
    };
    path.to_lowercase()
}

/// Turn every token recognized by `rule` into an `<a>` element
///
/// The anchor text keeps the token's original case; the href is lowercased.
pub fn tag_links<R: LexicalRule + ?Sized>(rule: &R, uri: &str, text: &str) -> String {
    let names = unique(rule.find_all(text).into_iter().map(|found| found.name));

    let mut linked = text.to_string();
    for name in &names {
        let token = format!("{}{}", rule.sigil(), name);
        let link = format!(r#"<a href="{}">{}</a>"#, tag_uri(uri, name), token);
        linked = linked.replace(&token, &link);
    }

    tracing::trace!(sigil = %rule.sigil(), tags = names.len(), "Linked tags");
    linked
}

/// Turn `#hashtag` tokens into links under `uri`
///
/// # Examples
/// ```
/// # use vital_tools::html::hashtag_links;
/// assert_eq!(
///     hashtag_links("/tags", "hi #Foo"),
///     r#"hi <a href="/tags/foo">#Foo</a>"#
/// );
/// ```
pub fn hashtag_links(uri: &str, text: &str) -> String {
    tag_links(&HashtagRule, uri, text)
}

/// Turn `@mention` tokens into links under `uri`
pub fn mentions_links(uri: &str, text: &str) -> String {
    tag_links(&MentionRule, uri, text)
}
