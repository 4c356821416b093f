//! Markdown rendering for templates
//!
//! Markdown goes through `pulldown-cmark`, the HTML through `ammonia`, and
//! finally bare URLs and e-mail addresses outside `<pre>` blocks are turned
//! into links. The result is wrapped in [`SafeHtml`] so templating layers
//! know not to escape it again.

use super::linkify::{LINK_REL, linkify};
use crate::error::{Result, ToolsError};
use pulldown_cmark::{Options, Parser, html};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Markdown extensions understood by the rendering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extension {
    Tables,
    Footnotes,
    Strikethrough,
    Tasklists,
    SmartPunctuation,
    HeadingAttributes,
}

impl Extension {
    fn parser_flag(self) -> Options {
        match self {
            Extension::Tables => Options::ENABLE_TABLES,
            Extension::Footnotes => Options::ENABLE_FOOTNOTES,
            Extension::Strikethrough => Options::ENABLE_STRIKETHROUGH,
            Extension::Tasklists => Options::ENABLE_TASKLISTS,
            Extension::SmartPunctuation => Options::ENABLE_SMART_PUNCTUATION,
            Extension::HeadingAttributes => Options::ENABLE_HEADING_ATTRIBUTES,
        }
    }
}

impl FromStr for Extension {
    type Err = ToolsError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "tables" => Ok(Extension::Tables),
            "footnotes" => Ok(Extension::Footnotes),
            "strikethrough" => Ok(Extension::Strikethrough),
            "tasklists" => Ok(Extension::Tasklists),
            "smart_punctuation" => Ok(Extension::SmartPunctuation),
            "heading_attributes" => Ok(Extension::HeadingAttributes),
            _ => Err(ToolsError::UnknownExtension(name.to_string())),
        }
    }
}

/// Options for [`render_markdown`]
///
/// Extensions are kept as names so configuration files can list them
/// verbatim; they are resolved (and rejected) at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownOptions {
    /// Extension names, e.g. `"tables"` or `"footnotes"`
    pub extensions: Vec<String>,
    /// Turn bare URLs into links
    pub linkify: bool,
    /// Also turn bare e-mail addresses into `mailto:` links
    pub parse_email: bool,
    /// Run the rendered HTML through the sanitizer
    pub sanitize: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            linkify: true,
            parse_email: true,
            sanitize: true,
        }
    }
}

impl MarkdownOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_extension(mut self, name: impl Into<String>) -> Self {
        self.extensions.push(name.into());
        self
    }

    #[must_use]
    pub fn with_extensions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn linkify(mut self, enabled: bool) -> Self {
        self.linkify = enabled;
        self
    }

    #[must_use]
    pub fn parse_email(mut self, enabled: bool) -> Self {
        self.parse_email = enabled;
        self
    }

    #[must_use]
    pub fn sanitize(mut self, enabled: bool) -> Self {
        self.sanitize = enabled;
        self
    }

    /// Resolve extension names into parser flags
    ///
    /// # Errors
    ///
    /// Returns [`ToolsError::UnknownExtension`] for the first name the engine
    /// does not know.
    pub fn parser_options(&self) -> Result<Options> {
        let mut flags = Options::empty();
        for name in &self.extensions {
            flags |= name.parse::<Extension>()?.parser_flag();
        }
        Ok(flags)
    }
}

/// HTML that is safe to embed without escaping
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}

/// Render `source` as Markdown and return sanitized, autolinked HTML
///
/// # Errors
///
/// Returns [`ToolsError::UnknownExtension`] when `options` names an extension
/// the engine does not provide, and [`ToolsError::Rewrite`] when autolinking
/// fails.
pub fn render_markdown(source: &str, options: &MarkdownOptions) -> Result<SafeHtml> {
    let parser = Parser::new_ext(source, options.parser_options()?);

    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut rendered, parser);

    if options.sanitize {
        // Same rel policy as the links the autolinker adds
        let mut sanitizer = ammonia::Builder::default();
        sanitizer.link_rel(Some(LINK_REL));
        rendered = sanitizer.clean(&rendered).to_string();
    }
    if options.linkify {
        rendered = linkify(&rendered, options.parse_email)?;
    }

    tracing::debug!(
        source_bytes = source.len(),
        html_bytes = rendered.len(),
        "Rendered markdown"
    );
    Ok(SafeHtml(rendered))
}
