//! Autolinking of bare URLs and e-mail addresses in rendered HTML
//!
//! Streams the markup through `lol_html` and only rewrites text nodes. Text
//! inside `<pre>`, an existing `<a>`, or a raw-text element is copied through
//! unchanged. Detected text is entity-decoded first and everything written
//! back is escaped again, so a link can never carry markup of its own.

use crate::error::{Result, ToolsError};
use lol_html::html_content::{ContentType, EndTag};
use lol_html::{HandlerResult, HtmlRewriter, Settings, doc_text, element};
use regex::Regex;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::LazyLock;

/// `rel` value put on every generated link
pub const LINK_REL: &str = "nofollow";

/// Elements whose text is never linked
const SKIPPED_ELEMENTS: &[&str] = &["pre", "a", "script", "style", "textarea"];

/// URLs stop at whitespace, angle brackets, quotes and backticks
static LINK_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)(?P<url>\b(?:https?://|www\.)[^\s<>"'`]+)|(?P<email>[\w.+-]+@[\w-]+(?:\.[\w-]+)*\.[a-z]{2,})"#,
    )
    .expect("LINK_CANDIDATE regex is valid")
});

/// Characters that end a sentence rather than a URL
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')'];

/// Wrap bare URLs (and e-mail addresses when `parse_email` is set) found in
/// the text of `html` in `<a>` elements
///
/// # Errors
///
/// Returns [`ToolsError::Rewrite`] when the HTML rewriter fails.
pub fn linkify(html: &str, parse_email: bool) -> Result<String> {
    let skip_depth = Rc::new(Cell::new(0usize));
    let pending = Rc::new(RefCell::new(String::new()));
    let mut output = Vec::with_capacity(html.len());

    let mut element_handlers = Vec::with_capacity(SKIPPED_ELEMENTS.len());
    for name in SKIPPED_ELEMENTS {
        let depth = Rc::clone(&skip_depth);
        element_handlers.push(element!(*name, move |el| {
            if let Some(handlers) = el.end_tag_handlers() {
                depth.set(depth.get() + 1);
                let depth = Rc::clone(&depth);
                let handler: lol_html::EndTagHandler<'static> =
                    Box::new(move |_end: &mut EndTag<'_>| -> HandlerResult {
                        depth.set(depth.get().saturating_sub(1));
                        Ok(())
                    });
                handlers.push(handler);
            }
            Ok(())
        }));
    }

    let text_depth = Rc::clone(&skip_depth);
    let mut rewriter = HtmlRewriter::new(
        Settings {
            element_content_handlers: element_handlers,
            document_content_handlers: vec![doc_text!(move |chunk| {
                // A text node may arrive in several chunks; link it whole
                pending.borrow_mut().push_str(chunk.as_str());
                if !chunk.last_in_text_node() {
                    chunk.remove();
                    return Ok(());
                }
                let text = std::mem::take(&mut *pending.borrow_mut());
                if text_depth.get() == 0 {
                    chunk.replace(&link_text(&text, parse_email), ContentType::Html);
                } else {
                    chunk.replace(&text, ContentType::Html);
                }
                Ok(())
            })],
            ..Settings::default()
        },
        |c: &[u8]| output.extend_from_slice(c),
    );

    rewriter
        .write(html.as_bytes())
        .map_err(|e| ToolsError::Rewrite(e.to_string()))?;
    rewriter
        .end()
        .map_err(|e| ToolsError::Rewrite(e.to_string()))?;

    String::from_utf8(output).map_err(|e| ToolsError::Rewrite(e.to_string()))
}

/// Link candidates inside a single raw text node, returning escaped HTML
fn link_text(raw: &str, parse_email: bool) -> String {
    let text = html_escape::decode_html_entities(raw);
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;

    for caps in LINK_CANDIDATE.captures_iter(&text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let link = if let Some(url) = caps.name("url") {
            url_link(url.as_str())
        } else if parse_email {
            let email = whole.as_str();
            Some(format!(
                r#"<a href="mailto:{}" rel="{LINK_REL}">{}</a>"#,
                html_escape::encode_double_quoted_attribute(email),
                html_escape::encode_text(email)
            ))
        } else {
            None
        };

        if let Some(link) = link {
            out.push_str(&html_escape::encode_text(&text[last..whole.start()]));
            out.push_str(&link);
            last = whole.end();
        }
    }
    out.push_str(&html_escape::encode_text(&text[last..]));
    out
}

fn url_link(url: &str) -> Option<String> {
    let end = url.trim_end_matches(TRAILING_PUNCTUATION).len();
    let (target, tail) = url.split_at(end);
    if target.is_empty() {
        return None;
    }
    let href = if target.to_ascii_lowercase().starts_with("www.") {
        format!("http://{target}")
    } else {
        target.to_string()
    };
    Some(format!(
        r#"<a href="{}" rel="{LINK_REL}">{}</a>{}"#,
        html_escape::encode_double_quoted_attribute(&href),
        html_escape::encode_text(target),
        html_escape::encode_text(tail)
    ))
}
