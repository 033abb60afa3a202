//! Marker extraction from remark text

use crate::config::ExtractOptions;
use crate::error::ParseError;
use crate::scanner::scan_marker;
use crate::types::MailRef;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace, warn};

// Every marker starts with one of these two prefixes
static CANDIDATE_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"\[\[?www\.").unwrap());

/// Iterator over markers in a text together with their byte offsets
///
/// Created by [`mail_ref_indices`]. Matches are non-overlapping and in order
/// of appearance.
#[derive(Debug, Clone)]
pub struct MailRefIndices<'a> {
    text: &'a str,
    pos: usize,
}

impl Iterator for MailRefIndices<'_> {
    type Item = (usize, MailRef);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(candidate) = CANDIDATE_REGEX.find_at(self.text, self.pos) {
            let start = candidate.start();
            match scan_marker(self.text, start) {
                Ok(scanned) => {
                    self.pos = scanned.end;
                    return Some((start, scanned.into_mail_ref(self.text, start)));
                }
                Err(e) => {
                    trace!("Rejected marker candidate at {start}: {e}");
                    // Candidates start with an ASCII bracket
                    self.pos = start + 1;
                }
            }
        }

        self.pos = self.text.len();
        None
    }
}

/// Iterate over the markers in `text` and their byte offsets
#[must_use]
pub fn mail_ref_indices(text: &str) -> MailRefIndices<'_> {
    MailRefIndices { text, pos: 0 }
}

/// Extract all markers from optional remark text
///
/// Absent, empty and whitespace-only text yield no references. Malformed
/// markers are skipped rather than reported, see [`diagnose_mail_refs`].
#[must_use]
pub fn extract_mail_refs(text: Option<&str>) -> Vec<MailRef> {
    extract_mail_refs_with(text, &ExtractOptions::default())
}

/// Extract markers subject to the ceilings in `options`
#[must_use]
pub fn extract_mail_refs_with(text: Option<&str>, options: &ExtractOptions) -> Vec<MailRef> {
    let Some(text) = text else {
        return Vec::new();
    };
    if text.trim().is_empty() {
        return Vec::new();
    }

    let scanned = options.clamp_input(text);
    let mut iter = mail_ref_indices(scanned).map(|(_, mail_ref)| mail_ref);

    let refs: Vec<MailRef> = match options.max_refs {
        Some(max) => {
            let refs: Vec<MailRef> = iter.by_ref().take(max).collect();
            if refs.len() == max && iter.next().is_some() {
                warn!("Reference limit of {max} reached, ignoring remaining markers");
            }
            refs
        }
        None => iter.collect(),
    };

    debug!(
        "Extracted {} mail references from {} bytes",
        refs.len(),
        scanned.len()
    );

    refs
}

/// A marker candidate that failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Byte offset of the candidate's opening bracket
    pub offset: usize,

    /// First grammar violation, with offsets relative to the whole text
    pub error: ParseError,
}

/// Report every `[www.` or `[[www.` candidate that is not a valid marker
///
/// Candidates consumed by a recognized marker are not examined. The inner
/// bracket of a rejected linked candidate is not reported again.
#[must_use]
pub fn diagnose_mail_refs(text: &str) -> Vec<Rejection> {
    let mut rejections: Vec<Rejection> = Vec::new();
    let mut pos = 0;

    while let Some(candidate) = CANDIDATE_REGEX.find_at(text, pos) {
        let start = candidate.start();
        match scan_marker(text, start) {
            Ok(scanned) => pos = scanned.end,
            Err(error) => {
                let nested = rejections.last().is_some_and(|r| r.offset + 1 == start);
                if !nested {
                    rejections.push(Rejection {
                        offset: start,
                        error,
                    });
                }
                pos = start + 1;
            }
        }
    }

    debug!("Found {} rejected marker candidates", rejections.len());
    rejections
}

/// A piece of remark text, either untouched or a recognized marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment<'a> {
    Text(&'a str),
    Ref(MailRef),
}

/// Split `text` into alternating plain text and marker segments
///
/// Concatenating the text slices and marker `raw`s reproduces the input.
/// Empty text segments are omitted.
#[must_use]
pub fn mail_ref_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for (start, mail_ref) in mail_ref_indices(text) {
        if start > last {
            segments.push(Segment::Text(&text[last..start]));
        }
        last = start + mail_ref.raw.len();
        segments.push(Segment::Ref(mail_ref));
    }

    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }

    segments
}

/// Rewrite every marker in `text` with the output of `replace`
#[must_use]
pub fn replace_mail_refs<F>(text: &str, mut replace: F) -> String
where
    F: FnMut(&MailRef) -> String,
{
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for (start, mail_ref) in mail_ref_indices(text) {
        result.push_str(&text[last..start]);
        result.push_str(&replace(&mail_ref));
        last = start + mail_ref.raw.len();
    }

    result.push_str(&text[last..]);
    result
}
