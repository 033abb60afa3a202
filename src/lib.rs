// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Mail Reference Extractor
//!
//! Finds bracketed domain/number reference markers in free-form remark text.
//!
//! Two marker forms are recognized:
//!
//! - Plain: `[www.example.com 42]`
//! - Linked: `[[www.example.com](https://www.example.com) 42]`, where the
//!   link text and the link target must name the same domain
//!
//! Extraction never fails. Text that only looks like a marker is left out of
//! the result; [`diagnose_mail_refs`] explains why.
//!
//! # Example
//!
//! ```rust
//! use mailref_extract::{MarkerForm, extract_mail_refs};
//!
//! let refs = extract_mail_refs(Some("See [www.example.com 42] for details"));
//!
//! assert_eq!(refs.len(), 1);
//! assert_eq!(refs[0].domain.as_str(), "www.example.com");
//! assert_eq!(refs[0].prefix_no, 42);
//! assert_eq!(refs[0].raw, "[www.example.com 42]");
//! assert_eq!(refs[0].form, MarkerForm::Plain);
//!
//! assert!(extract_mail_refs(None).is_empty());
//! ```

mod config;
mod error;
mod extract;
mod scanner;
mod types;

pub use config::ExtractOptions;
pub use error::{ParseError, Result};
pub use extract::*;
pub use types::*;
