use vital_tools::patterns::{LexicalRule, TagMatch};
use vital_tools::{hashtag_links, mentions_links, tag_links};

#[test]
fn test_hashtag_links_repeated_tag() {
    assert_eq!(
        hashtag_links("/tags", "hi #Foo bar #Foo"),
        r#"hi <a href="/tags/foo">#Foo</a> bar <a href="/tags/foo">#Foo</a>"#
    );
}

#[test]
fn test_hashtag_links_empty_prefix_links_to_root() {
    assert_eq!(
        hashtag_links("", "#Rust"),
        r#"<a href="/rust">#Rust</a>"#
    );
}

#[test]
fn test_hashtag_links_several_tags() {
    let linked = hashtag_links("tags/", "#one, #Two and #three.");
    assert_eq!(
        linked,
        r#"<a href="/tags/one">#one</a>, <a href="/tags/two">#Two</a> and <a href="/tags/three">#three</a>."#
    );
}

#[test]
fn test_hashtag_links_unicode_tag() {
    assert_eq!(
        hashtag_links("/t", "#Über"),
        r#"<a href="/t/%c3%9cber">#Über</a>"#
    );
}

#[test]
fn test_mentions_links() {
    assert_eq!(
        mentions_links("/u", "@Alice and @bob_2"),
        r#"<a href="/u/alice">@Alice</a> and <a href="/u/bob_2">@bob_2</a>"#
    );
}

#[test]
fn test_mentions_ignore_emails() {
    let text = "write to team@example.com";
    assert_eq!(mentions_links("/u", text), text);
}

/// `$TICKER` style tokens
struct CashtagRule;

impl LexicalRule for CashtagRule {
    fn sigil(&self) -> char {
        '$'
    }

    fn find_all(&self, text: &str) -> Vec<TagMatch> {
        text.split_whitespace()
            .filter_map(|word| word.strip_prefix('$'))
            .filter(|name| !name.is_empty() && name.chars().all(|c| c.is_ascii_uppercase()))
            .map(|name| TagMatch {
                name: name.to_string(),
                trailing: String::new(),
            })
            .collect()
    }
}

#[test]
fn test_custom_rule() {
    assert_eq!(
        tag_links(&CashtagRule, "/quote", "buy $ACME now"),
        r#"buy <a href="/quote/acme">$ACME</a> now"#
    );
}
