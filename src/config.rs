//! Extraction options

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Ceilings applied while extracting markers
///
/// The default places no limit on the input, which suits trusted internal
/// text. Use [`ExtractOptions::untrusted`] for user-supplied remarks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Only the first this many bytes of the input are scanned
    pub max_input_bytes: Option<usize>,

    /// At most this many references are returned
    pub max_refs: Option<usize>,
}

impl ExtractOptions {
    pub const UNTRUSTED_MAX_INPUT_BYTES: usize = 1 << 20;
    pub const UNTRUSTED_MAX_REFS: usize = 10_000;

    /// Limits for text of unknown provenance
    #[must_use]
    pub const fn untrusted() -> Self {
        Self {
            max_input_bytes: Some(Self::UNTRUSTED_MAX_INPUT_BYTES),
            max_refs: Some(Self::UNTRUSTED_MAX_REFS),
        }
    }

    #[must_use]
    pub const fn with_max_input_bytes(mut self, max: usize) -> Self {
        self.max_input_bytes = Some(max);
        self
    }

    #[must_use]
    pub const fn with_max_refs(mut self, max: usize) -> Self {
        self.max_refs = Some(max);
        self
    }

    /// Load options from a JSON object such as `{"max_refs": 100}`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ParseError::InvalidConfig(e.to_string()))
    }

    /// The part of `text` that should be scanned
    pub(crate) fn clamp_input<'a>(&self, text: &'a str) -> &'a str {
        match self.max_input_bytes {
            Some(max) if text.len() > max => {
                let end = snap_to_char_boundary(text, max);
                warn!(
                    "Input of {} bytes exceeds limit of {max}, scanning first {end} bytes",
                    text.len()
                );
                &text[..end]
            }
            _ => text,
        }
    }
}

/// Snap a byte index to the nearest valid UTF-8 char boundary (backwards)
const fn snap_to_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    let mut i = idx;
    while !s.is_char_boundary(i) && i > 0 {
        i -= 1;
    }
    i
}
