//! RFC 3986 URL parser and validator.
//!
//! This crate decomposes a URL string into its canonical components (scheme,
//! userinfo, host, port, path, query parameters, fragment), validating each
//! against the RFC 3986 grammar. It validates structure only: percent-encoded
//! octets are never decoded, case is never normalized, and relative
//! references are not resolved.
//!
//! # Quick Start
//!
//! ```rust
//! let url = web_url::parse("https://localhost:8000/search?q=text#hello").unwrap();
//!
//! assert_eq!(url.scheme(), Some("https"));
//! assert_eq!(url.hostname(), Some("localhost"));
//! assert_eq!(url.port(), 8000);
//! assert_eq!(url.path(), "/search");
//! assert_eq!(url.query_parameter("q"), Some("text"));
//! assert_eq!(url.fragment(), Some("hello"));
//! ```
//!
//! Well-known schemes fill in their default port when the URL gives none:
//!
//! ```rust
//! let url = web_url::parse("https://example.org").unwrap();
//! assert_eq!(url.port(), 443);
//!
//! let url = web_url::parse("ftp://foo.example.com/rfc/").unwrap();
//! assert_eq!(url.port(), 21);
//! ```
//!
//! # Errors
//!
//! Parsing is fail-fast: the first component to violate its grammar aborts
//! the parse with a [`ParseError`] naming the offending substring.
//!
//! ```rust
//! use web_url::ParseErrorKind;
//!
//! let err = web_url::parse("http://exa mple.com").unwrap_err();
//! assert!(matches!(err.kind, ParseErrorKind::InvalidHost { .. }));
//! assert_eq!(err.offending(), Some("exa mple.com"));
//! ```
//!
//! The one deliberate exception is individual query-parameter tokens: a
//! token that fails the parameter grammar is dropped from the mapping
//! without failing the parse.
//!
//! ```rust
//! let url = web_url::parse("http://example.com/?a=1&%zz").unwrap();
//! assert_eq!(url.query_parameter("a"), Some("1"));
//! assert_eq!(url.query_parameters().unwrap().len(), 1);
//! ```
//!
//! # Concurrency
//!
//! Parsing is synchronous and shares only the once-built, read-only grammar
//! matchers; any number of [`parse`] calls may run concurrently without
//! locking. Matching is linear in the input length.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod grammar;
mod parser;
pub mod prelude;
mod query;
mod url;

pub use error::{ParseError, ParseErrorKind};
pub use parser::parse;
pub use url::{QueryParameters, Url};
