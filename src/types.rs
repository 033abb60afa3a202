//! Core types for extracted mail references

use crate::error::{ParseError, Result};
use crate::scanner;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static DOMAIN_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^www(?:\.[A-Za-z0-9-]+)+$").unwrap());

/// Hostname carried by a marker, always of the form `www.<label>[.<label>...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Domain(String);

impl Domain {
    /// Validate and wrap a domain string
    pub fn parse(s: &str) -> Result<Self> {
        if DOMAIN_REGEX.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ParseError::InvalidDomain { offset: 0 })
        }
    }

    /// Wrap a token the scanner has already matched against the domain grammar
    pub(crate) fn from_scanned(s: &str) -> Self {
        debug_assert!(DOMAIN_REGEX.is_match(s), "scanner produced invalid domain {s}");
        Self(s.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Labels after the leading `www`
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').skip(1)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Domain {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Domain {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Domain> for String {
    fn from(domain: Domain) -> Self {
        domain.0
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Surface syntax a marker was written in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MarkerForm {
    /// `[www.example.com 42]`
    Plain,
    /// `[[www.example.com](https://www.example.com) 42]`
    Linked,
}

/// A reference marker found in remark text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MailRef {
    /// Domain named by the marker
    pub domain: Domain,

    /// Number following the domain
    pub prefix_no: u64,

    /// Exact marker text as it appeared in the input
    pub raw: String,

    /// Which of the two marker syntaxes matched
    pub form: MarkerForm,
}

impl MailRef {
    /// Build a reference from its parts, rendering the canonical marker text
    #[must_use]
    pub fn new(domain: Domain, prefix_no: u64, form: MarkerForm) -> Self {
        let raw = match form {
            MarkerForm::Plain => format!("[{domain} {prefix_no}]"),
            MarkerForm::Linked => format!("[[{domain}](https://{domain}) {prefix_no}]"),
        };

        Self {
            domain,
            prefix_no,
            raw,
            form,
        }
    }

    /// Link target for the referenced domain
    #[must_use]
    pub fn url(&self) -> String {
        format!("https://{}", self.domain)
    }

    /// Same reference rendered in another marker form
    #[must_use]
    pub fn with_form(&self, form: MarkerForm) -> Self {
        Self::new(self.domain.clone(), self.prefix_no, form)
    }

    /// Byte length of the marker in its source text
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether the marker text is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl fmt::Display for MailRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for MailRef {
    type Err = ParseError;

    /// Parse a string consisting of exactly one marker
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let scanned = scanner::scan_marker(s, 0)?;
        if scanned.end != s.len() {
            return Err(ParseError::TrailingInput {
                offset: scanned.end,
            });
        }

        Ok(scanned.into_mail_ref(s, 0))
    }
}
