//! Error types for URL parsing.

use std::fmt;

/// Errors that can occur when parsing a URL.
///
/// Carries the full input alongside the specific violation so callers can
/// report both the URL that failed and the component that failed inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the offending component substring, where one exists.
    ///
    /// `MalformedFormat` has no single offending component (the whole input
    /// failed the top-level split) and returns `None`.
    #[must_use]
    pub fn offending(&self) -> Option<&str> {
        match &self.kind {
            ParseErrorKind::MalformedFormat => None,
            ParseErrorKind::InvalidScheme { scheme } => Some(scheme),
            ParseErrorKind::InvalidAuthority { authority } => Some(authority),
            ParseErrorKind::InvalidUserinfo { userinfo } => Some(userinfo),
            ParseErrorKind::InvalidHost { host } => Some(host),
            ParseErrorKind::InvalidPort { port } => Some(port),
            ParseErrorKind::InvalidPath { path } => Some(path),
            ParseErrorKind::InvalidQuery { query } => Some(query),
            ParseErrorKind::InvalidFragment { fragment } => Some(fragment),
        }
    }
}

/// Specific parsing error types.
///
/// Every kind is fail-fast: the first violation aborts the whole parse.
/// Malformed individual query-parameter tokens are the one exception; they
/// are dropped inside the query decomposer and never surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The top-level five-group split failed to consume the whole input
    MalformedFormat,
    /// Scheme present but fails the scheme grammar
    InvalidScheme {
        /// The invalid scheme
        scheme: String,
    },
    /// Authority fails the userinfo@host:port split
    InvalidAuthority {
        /// The invalid authority
        authority: String,
    },
    /// Userinfo present but fails the username\[:password\] grammar
    InvalidUserinfo {
        /// The invalid userinfo
        userinfo: String,
    },
    /// Host fails the reg-name/IPv4/IPv6 grammar
    InvalidHost {
        /// The invalid host
        host: String,
    },
    /// Port substring present but not 1-5 digits in range
    InvalidPort {
        /// The invalid port
        port: String,
    },
    /// Path fails the authority-dependent path grammar
    InvalidPath {
        /// The invalid path
        path: String,
    },
    /// Query fails the general query grammar
    InvalidQuery {
        /// The invalid query
        query: String,
    },
    /// Fragment fails the fragment grammar
    InvalidFragment {
        /// The invalid fragment
        fragment: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URL '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::MalformedFormat => write!(f, "bad URL format"),
            ParseErrorKind::InvalidScheme { scheme } => {
                write!(f, "invalid scheme '{scheme}'")
            }
            ParseErrorKind::InvalidAuthority { authority } => {
                write!(f, "bad authority format '{authority}'")
            }
            ParseErrorKind::InvalidUserinfo { userinfo } => {
                write!(f, "invalid userinfo '{userinfo}'")
            }
            ParseErrorKind::InvalidHost { host } => write!(f, "invalid host '{host}'"),
            ParseErrorKind::InvalidPort { port } => write!(f, "invalid port '{port}'"),
            ParseErrorKind::InvalidPath { path } => write!(f, "invalid path '{path}'"),
            ParseErrorKind::InvalidQuery { query } => {
                write!(f, "invalid query string '{query}'")
            }
            ParseErrorKind::InvalidFragment { fragment } => {
                write!(f, "invalid fragment '{fragment}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}
