//! Hand-written grammar for the two marker forms
//!
//! ```text
//! marker  = "[" ( domain / linked ) ws digits "]"
//! linked  = "[" domain "](" scheme "://" domain ")"
//! domain  = "www" 1*( "." 1*( ALPHA / DIGIT / "-" ) )
//! ```
//!
//! Both domains of the linked form must be identical.

use crate::error::{ParseError, Result};
use crate::types::{Domain, MailRef, MarkerForm};

const DOMAIN_PREFIX: &str = "www.";

/// A marker recognized by [`scan_marker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scanned<'a> {
    pub domain: &'a str,
    pub prefix_no: u64,
    pub form: MarkerForm,
    /// Byte offset just past the closing bracket
    pub end: usize,
}

impl Scanned<'_> {
    pub(crate) fn into_mail_ref(self, text: &str, start: usize) -> MailRef {
        MailRef {
            domain: Domain::from_scanned(self.domain),
            prefix_no: self.prefix_no,
            raw: text[start..self.end].to_string(),
            form: self.form,
        }
    }
}

/// Recognize exactly one marker beginning at byte offset `start`
///
/// `start` must lie on a char boundary.
pub(crate) fn scan_marker(text: &str, start: usize) -> Result<Scanned<'_>> {
    let mut cursor = Cursor::new(text, start);
    cursor.expect('[')?;

    let (domain, form) = if cursor.eat('[') {
        let display = cursor.domain()?;
        cursor.expect(']')?;
        cursor.expect('(')?;
        cursor.scheme()?;
        let target = cursor.domain()?;
        cursor.expect(')')?;

        if display != target {
            return Err(ParseError::DomainMismatch {
                display: display.to_string(),
                target: target.to_string(),
            });
        }
        (display, MarkerForm::Linked)
    } else {
        (cursor.domain()?, MarkerForm::Plain)
    };

    cursor.whitespace()?;
    let prefix_no = cursor.number()?;
    cursor.expect(']')?;

    Ok(Scanned {
        domain,
        prefix_no,
        form,
        end: cursor.pos,
    })
}

const fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

const fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(ParseError::Expected {
                expected,
                offset: self.pos,
            })
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let rest = self.rest();
        self.pos += rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        &self.text[start..self.pos]
    }

    fn domain(&mut self) -> Result<&'a str> {
        let start = self.pos;
        if !self.rest().starts_with(DOMAIN_PREFIX) {
            return Err(ParseError::InvalidDomain { offset: start });
        }
        self.pos += DOMAIN_PREFIX.len();

        if self.take_while(is_label_char).is_empty() {
            return Err(ParseError::InvalidDomain { offset: start });
        }

        // Only step over a dot when a label follows it
        loop {
            let mut ahead = self.rest().chars();
            if ahead.next() == Some('.') && ahead.next().is_some_and(is_label_char) {
                self.pos += 1;
                self.take_while(is_label_char);
            } else {
                break;
            }
        }

        Ok(&self.text[start..self.pos])
    }

    fn scheme(&mut self) -> Result<()> {
        let start = self.pos;
        if !self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Err(ParseError::InvalidScheme { offset: start });
        }
        self.take_while(is_scheme_char);

        if self.rest().starts_with("://") {
            self.pos += 3;
            Ok(())
        } else {
            Err(ParseError::InvalidScheme { offset: start })
        }
    }

    fn whitespace(&mut self) -> Result<()> {
        match self.peek() {
            Some(c) if c.is_whitespace() => {
                self.pos += c.len_utf8();
                Ok(())
            }
            _ => Err(ParseError::MissingWhitespace { offset: self.pos }),
        }
    }

    fn number(&mut self) -> Result<u64> {
        let offset = self.pos;
        let digits = self.take_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            return Err(ParseError::MissingNumber { offset });
        }

        digits.parse().map_err(|_| ParseError::NumberOverflow {
            digits: digits.to_string(),
        })
    }
}
