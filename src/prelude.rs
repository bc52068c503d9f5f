//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use web_url::prelude::*;
//!
//! let url = parse("https://example.org/").unwrap();
//! assert_eq!(url.hostname(), Some("example.org"));
//! ```

pub use crate::{ParseError, ParseErrorKind, QueryParameters, Url, parse};
