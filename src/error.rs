//! Error types for marker parsing

use thiserror::Error;

/// Reasons a marker or a configuration could not be parsed
///
/// Offsets are byte offsets into the text handed to the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing to parse
    #[error("Empty input")]
    Empty,

    /// A specific punctuation character was required
    #[error("Expected '{expected}' at offset {offset}")]
    Expected { expected: char, offset: usize },

    /// Domain token does not start with `www.` or has no further label
    #[error("Invalid domain at offset {offset}")]
    InvalidDomain { offset: usize },

    /// Link target has no `scheme://` prefix
    #[error("Invalid URL scheme at offset {offset}")]
    InvalidScheme { offset: usize },

    /// The single whitespace separator before the number is missing
    #[error("Expected whitespace at offset {offset}")]
    MissingWhitespace { offset: usize },

    /// No digits where the number should be
    #[error("Missing number at offset {offset}")]
    MissingNumber { offset: usize },

    /// The digit run does not fit in a `u64`
    #[error("Number out of range: {digits}")]
    NumberOverflow { digits: String },

    /// Linked form whose display text and URL host differ
    #[error("Link text {display} does not match link target {target}")]
    DomainMismatch { display: String, target: String },

    /// Text follows a complete marker
    #[error("Unexpected trailing input at offset {offset}")]
    TrailingInput { offset: usize },

    /// Extraction options could not be loaded
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for marker parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
