//! Parsed URL container type.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser;

/// Query parameter mapping: name to optional value.
///
/// A name that appeared without an `=` maps to `None`; a name followed by
/// `=` maps to `Some`, even when the value is empty. Insertion order is not
/// significant and a repeated name keeps only its last value.
pub type QueryParameters = BTreeMap<String, Option<String>>;

/// A parsed and validated URL, decomposed per RFC 3986.
///
/// Built exactly once by [`parse`](crate::parse) on success; the type has no
/// mutation API. Component substrings are stored raw: percent-encoded octets
/// are not decoded and case is not normalized.
///
/// # Examples
///
/// ```
/// use web_url::Url;
///
/// let url = web_url::parse("https://localhost:8000/search?q=text#hello").unwrap();
/// assert_eq!(url.scheme(), Some("https"));
/// assert_eq!(url.hostname(), Some("localhost"));
/// assert_eq!(url.port(), 8000);
/// assert_eq!(url.path(), "/search");
/// assert_eq!(url.query_parameter("q"), Some("text"));
/// assert_eq!(url.fragment(), Some("hello"));
///
/// // Default ports are filled in from the scheme
/// let url: Url = "http://www.w3.org/Addressing/".parse().unwrap();
/// assert_eq!(url.port(), 80);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Url {
    scheme: Option<String>,
    username: Option<String>,
    password: Option<String>,
    hostname: Option<String>,
    port: u16,
    path: String,
    query_parameters: Option<QueryParameters>,
    fragment: Option<String>,
}

impl Url {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        scheme: Option<String>,
        username: Option<String>,
        password: Option<String>,
        hostname: Option<String>,
        port: u16,
        path: String,
        query_parameters: Option<QueryParameters>,
        fragment: Option<String>,
    ) -> Self {
        Self {
            scheme,
            username,
            password,
            hostname,
            port,
            path,
            query_parameters,
            fragment,
        }
    }

    /// Returns the scheme (protocol), if present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the username, if the authority carried userinfo.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the password, if the userinfo carried one after a `:`.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the host, if an authority was present.
    ///
    /// May be the empty string for an empty authority (`file:///x`). A
    /// bracketed IPv6 literal is returned with its brackets intact.
    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// Returns the port.
    ///
    /// `0` when no authority was present or the scheme has no default; the
    /// scheme default (ftp=21, http/ws=80, https/wss=443) when the authority
    /// gave no explicit port; the explicit port otherwise.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the path, possibly empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameter mapping.
    ///
    /// `None` when the URL had no query component, or when the query was
    /// empty after trimming.
    #[must_use]
    pub const fn query_parameters(&self) -> Option<&QueryParameters> {
        self.query_parameters.as_ref()
    }

    /// Returns the value of a single query parameter.
    ///
    /// Returns `None` when the parameter is absent or was given without a
    /// value; use [`query_parameters`](Self::query_parameters) to tell the
    /// two apart.
    #[must_use]
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.query_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .and_then(|value| value.as_deref())
    }

    /// Returns the fragment, raw and not decomposed further.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parser::parse(s)
    }
}
