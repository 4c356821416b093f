//! Error types for the helper functions
//!
//! Almost every helper in this crate is total over its input domain. The
//! exceptions are group sizes below one, Markdown extension names the
//! rendering engine does not know, and failures of the HTML rewriter.

use thiserror::Error;

/// Result type alias for fallible helpers
pub type Result<T> = std::result::Result<T, ToolsError>;

/// Error types for the helper functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolsError {
    /// `grouped` was asked for groups smaller than one element
    #[error("Invalid group size {0}: groups must hold at least one element")]
    InvalidGroupSize(usize),

    /// Markdown options named an extension the engine does not provide
    #[error("Unknown markdown extension '{0}'")]
    UnknownExtension(String),

    /// The HTML rewriter rejected or failed on rendered markup
    #[error("HTML rewrite error: {0}")]
    Rewrite(String),
}

impl ToolsError {
    /// Check if the error was caused by a bad argument from the caller
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ToolsError::InvalidGroupSize(_))
    }

    /// Check if the error came from markdown rendering configuration
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, ToolsError::UnknownExtension(_))
    }
}
