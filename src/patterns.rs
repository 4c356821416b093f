//! Lexical rules for hashtag and mention tokens
//!
//! A rule recognizes sigil-prefixed tokens (`#rust`, `@ferris`) in free text.
//! The linkifiers in [`crate::html::tags`] only depend on the [`LexicalRule`]
//! trait, so callers with their own token grammar can plug it in.

use regex::Regex;
use std::sync::LazyLock;

/// `#tag` at start of text or after whitespace; the tag needs one non-digit
static HASHTAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)#(\w*[^\W\d]\w*)([^\w\s]*)").expect("HASHTAG regex is valid")
});

/// `@name` at start of text or after whitespace, so e-mail addresses never match
static MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)@(\w+)([^\w\s]*)").expect("MENTION regex is valid")
});

/// A token found by a lexical rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Token name without its sigil
    pub name: String,
    /// Punctuation immediately following the token (`"!"` in `#rust!`)
    ///
    /// Informational only: [`crate::html::tag_links`] links the bare token
    /// and leaves this text where it is. Custom rules may return it empty.
    pub trailing: String,
}

/// Pattern-matching interface for sigil-prefixed tokens
pub trait LexicalRule {
    /// Character that introduces a token
    fn sigil(&self) -> char;

    /// All tokens in `text`, in document order, duplicates included
    fn find_all(&self, text: &str) -> Vec<TagMatch>;
}

fn collect_matches(re: &Regex, text: &str) -> Vec<TagMatch> {
    re.captures_iter(text)
        .map(|caps| TagMatch {
            name: caps[1].to_string(),
            trailing: caps[2].to_string(),
        })
        .collect()
}

/// `#hashtag` tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct HashtagRule;

impl LexicalRule for HashtagRule {
    fn sigil(&self) -> char {
        '#'
    }

    fn find_all(&self, text: &str) -> Vec<TagMatch> {
        collect_matches(&HASHTAG, text)
    }
}

/// `@mention` tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct MentionRule;

impl LexicalRule for MentionRule {
    fn sigil(&self) -> char {
        '@'
    }

    fn find_all(&self, text: &str) -> Vec<TagMatch> {
        collect_matches(&MENTION, text)
    }
}
