//! Regex-based HTML text helpers
//!
//! None of these parse HTML. They rewrite text with patterns and work for the
//! markup templates produce, not for arbitrary documents.

pub mod linkify;
pub mod markdown;
pub mod protect;
pub mod tags;
pub mod whitespace;

pub use linkify::linkify;
pub use markdown::{Extension, MarkdownOptions, SafeHtml, render_markdown};
pub use protect::RegionProtector;
pub use tags::{hashtag_links, mentions_links, tag_links};
pub use whitespace::{collapse_whitespace, remove_whitespace, strip_js_comments};
