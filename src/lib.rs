pub mod error;
pub mod html;
pub mod patterns;
pub mod seq;

pub use error::{Result, ToolsError};
pub use html::{
    Extension, MarkdownOptions, SafeHtml, collapse_whitespace, hashtag_links, mentions_links,
    remove_whitespace, render_markdown, strip_js_comments, tag_links,
};
pub use patterns::{HashtagRule, LexicalRule, MentionRule, TagMatch};
pub use seq::{
    Nested, RandomSource, flatten, grouped, pairwise, random_sample_with,
    random_sample_without_replacement, remove_empty, unique,
};
