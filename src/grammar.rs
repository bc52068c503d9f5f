//! RFC 3986 grammar definitions and compiled component matchers.
//!
//! # Grammar Reference
//!
//! The character classes and productions follow RFC 3986 appendix A:
//!
//! ```abnf
//! unreserved  = ALPHA / DIGIT / "-" / "." / "_" / "~"
//! sub-delims  = "!" / "$" / "&" / "'" / "(" / ")"
//!             / "*" / "+" / "," / ";" / "="
//! pct-encoded = "%" HEXDIG HEXDIG
//! pchar       = unreserved / pct-encoded / sub-delims / ":" / "@"
//! ```
//!
//! The productions are kept as composable pattern fragments and assembled
//! into one compiled matcher per URL component, rather than one monolithic
//! pattern. Each matcher stays anchored to its own substring, which keeps
//! error reporting localized to the component that failed.
//!
//! The matcher set is built once behind a one-time-initialization guard and
//! never mutated, so any number of parses may run concurrently against it.
//! The `regex` engine guarantees linear-time matching, which matters for the
//! heavily alternated IPv6 and query productions.

use once_cell::sync::Lazy;
use regex::Regex;

/// `HEXDIG`, both cases.
const HEX_DIG: &str = "[0-9A-Fa-f]";

/// `unreserved`: letters, digits, `-`, `.`, `_`, `~`.
const UNRESERVED: &str = "[A-Za-z0-9._~-]";

/// `sub-delims`.
const SUB_DELIMS: &str = "[!$&'()*+,;=]";

/// `sub-delims` minus `=`, for contexts where `=` is a reserved separator
/// (bare query-parameter names).
const SUB_DELIMS_NO_EQ: &str = "[!$&'()*+,;]";

/// `dec-octet`: one octet of a dotted-quad IPv4 literal, 0-255 with no
/// leading zeros beyond a bare `0`.
const DEC_OCTET: &str = "(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])";

static MATCHERS: Lazy<Matchers> = Lazy::new(Matchers::new);

/// Returns the process-wide compiled matcher set.
pub(crate) fn matchers() -> &'static Matchers {
    &MATCHERS
}

/// Compiled patterns for every URL component, each anchored to consume its
/// whole substring.
///
/// Stateless after construction; the orchestrator and the query decomposer
/// share one instance for the life of the process.
pub(crate) struct Matchers {
    /// Lenient five-group split: scheme, authority, path, query, fragment.
    /// Strict grammar is enforced per component afterwards.
    pub(crate) splitter: Regex,
    pub(crate) scheme: Regex,
    /// `username[:password]` with both sides captured.
    pub(crate) userinfo: Regex,
    /// reg-name, IPv4 literal, or bracketed IPv6 literal.
    pub(crate) host: Regex,
    pub(crate) port: Regex,
    /// `path-abempty`: zero or more `/`-prefixed `pchar*` segments.
    pub(crate) path_with_authority: Regex,
    /// Empty, rootless `pchar+` first segment, or a single leading-slash form.
    pub(crate) path_without_authority: Regex,
    /// Whole-query grammar; tolerates bare `%` so malformed tokens reach
    /// the decomposer.
    pub(crate) query: Regex,
    /// One `name[=value]` query token with both sides captured; strict
    /// percent-encoding.
    pub(crate) query_param: Regex,
    /// Strict `(pchar / "/" / "?")*`; fragments have no decomposer, so no
    /// token ever needs the bare-`%` tolerance.
    pub(crate) fragment: Regex,
}

impl Matchers {
    fn new() -> Self {
        let pct_encoded = format!("%{HEX_DIG}{HEX_DIG}");
        let pchar = format!("(?:{UNRESERVED}|{pct_encoded}|{SUB_DELIMS}|:|@)");
        let pchar_no_eq = format!("(?:{UNRESERVED}|{pct_encoded}|{SUB_DELIMS_NO_EQ}|:|@)");

        let username = format!("(?:{UNRESERVED}|{pct_encoded}|{SUB_DELIMS})*");
        let password = format!("(?:{UNRESERVED}|{pct_encoded}|{SUB_DELIMS}|:)*");
        let reg_name = format!("(?:{UNRESERVED}|{pct_encoded}|{SUB_DELIMS})*");

        let ipv4 = format!("(?:{DEC_OCTET}(?:\\.{DEC_OCTET}){{3}})");
        let h16 = format!("{HEX_DIG}{{1,4}}");
        let ls32 = format!("(?:{h16}:{h16}|{ipv4})");
        let h16_colon = format!("(?:{h16}:)");
        // The full nine-alternative IPv6address production, covering every
        // valid "::" compression form.
        let ipv6 = format!(
            "(?:{h16_colon}{{6}}{ls32}\
             |::{h16_colon}{{5}}{ls32}\
             |(?:{h16})?::{h16_colon}{{4}}{ls32}\
             |(?:{h16_colon}{{0,1}}{h16})?::{h16_colon}{{3}}{ls32}\
             |(?:{h16_colon}{{0,2}}{h16})?::{h16_colon}{{2}}{ls32}\
             |(?:{h16_colon}{{0,3}}{h16})?::{h16_colon}{ls32}\
             |(?:{h16_colon}{{0,4}}{h16})?::{ls32}\
             |(?:{h16_colon}{{0,5}}{h16})?::{h16}\
             |(?:{h16_colon}{{0,6}}{h16})?::)"
        );

        // Strict query alphabet, used per parameter token and for the
        // fragment. The whole-query variant additionally tolerates a bare
        // '%': a token with a malformed percent escape must reach the
        // decomposer so it can be dropped there instead of failing the
        // entire parse.
        let query = format!("(?:{pchar}|/|\\?)*");
        let query_component = format!("(?:{pchar}|/|\\?|%)*");
        let param_name = format!("(?:{pchar_no_eq}|/|\\?)*");

        let path_abempty = format!("(?:/{pchar}*)*");
        let path_rootless = format!("(?:{pchar}+(?:/{pchar}*)*)");
        let path_no_authority = format!("(?:/{path_rootless}?|{path_rootless})?");

        Self {
            splitter: compile(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$"),
            scheme: compile("^[A-Za-z][A-Za-z0-9+.-]*$"),
            userinfo: compile(&format!("^({username})(?::({password}))?$")),
            host: compile(&format!("^(?:{reg_name}|{ipv4}|\\[{ipv6}\\])$")),
            port: compile("^[0-9]{1,5}$"),
            path_with_authority: compile(&format!("^{path_abempty}$")),
            path_without_authority: compile(&format!("^{path_no_authority}$")),
            query: compile(&format!("^{query_component}$")),
            query_param: compile(&format!("^({param_name})(?:=({query}))?$")),
            fragment: compile(&format!("^{query}$")),
        }
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("grammar pattern must compile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_matches_valid_schemes() {
        for scheme in ["http", "scheme-test", "scheme+test", "scheme.test", "ScHeMe-TeSt", "x11"] {
            assert!(matchers().scheme.is_match(scheme), "should match: {scheme}");
        }
    }

    #[test]
    fn scheme_rejects_invalid_schemes() {
        for scheme in ["scheme_test", "scheme%test", "1http", "+http", ""] {
            assert!(!matchers().scheme.is_match(scheme), "should reject: {scheme}");
        }
    }

    #[test]
    fn host_matches_valid_reg_names() {
        for host in [
            "www.normal.com",
            "www.!$&'()*+,;=-~.com",
            "www.spaced%20url.com",
            "www.%41.com",
            "localhost",
            "",
        ] {
            assert!(matchers().host.is_match(host), "should match: {host}");
        }
    }

    #[test]
    fn host_matches_ip_literals() {
        for host in [
            "192.168.1.1",
            "0.0.0.0",
            "255.255.255.255",
            "[::]",
            "[::1]",
            "[2001:db8::8:800:200c:417a]",
            "[fe80::a:b:c:d]",
            "[2001:db8:0:0:0:0:2:1]",
            "[::ffff:192.168.1.1]",
            "[1:2:3:4:5:6:7:8]",
        ] {
            assert!(matchers().host.is_match(host), "should match: {host}");
        }
    }

    #[test]
    fn host_rejects_invalid_hosts() {
        for host in ["exa mple.com", "host/name", "[::1", "[1:2:3:4:5:6:7:8:9]", "[:::1]", "[g::1]"] {
            assert!(!matchers().host.is_match(host), "should reject: {host}");
        }
    }

    #[test]
    fn port_matches_one_to_five_digits() {
        for port in ["80", "65535", "22", "0", "99999"] {
            assert!(matchers().port.is_match(port), "should match: {port}");
        }
    }

    #[test]
    fn port_rejects_non_digits_and_overlong() {
        for port in ["", "123456", "8a", "-1"] {
            assert!(!matchers().port.is_match(port), "should reject: {port}");
        }
    }

    #[test]
    fn path_with_authority_matches_slash_prefixed_forms() {
        for path in ["/pub/ietf/uri/", "/pub/ietf/uri", "//pub/ietf/uri/", "//pub/ietf/uri", "/pub/ietf/uri//", ""] {
            assert!(matchers().path_with_authority.is_match(path), "should match: {path}");
        }
    }

    #[test]
    fn path_with_authority_rejects_rootless_forms() {
        for path in ["pub/ietf/uri/", "pub"] {
            assert!(!matchers().path_with_authority.is_match(path), "should reject: {path}");
        }
    }

    #[test]
    fn path_without_authority_matches_rootless_and_rooted_forms() {
        for path in ["/pub/ietf/uri/", "/pub/ietf/uri//", "/pub/ietf/uri", "pub/ietf/uri//", "pub/ietf/uri", "pub", ""] {
            assert!(matchers().path_without_authority.is_match(path), "should match: {path}");
        }
    }

    #[test]
    fn path_without_authority_rejects_double_slash_starts() {
        for path in ["//pub/ietf/uri/", "///"] {
            assert!(!matchers().path_without_authority.is_match(path), "should reject: {path}");
        }
    }

    #[test]
    fn query_matches_valid_query_strings() {
        for query in [
            "validQueryString",
            "yet%20another%20valid%20query%20string",
            "query=true&params=true",
            "",
            "!$&'()*+,;=",
            "a/b?c",
        ] {
            assert!(matchers().query.is_match(query), "should match: {query}");
        }
    }

    #[test]
    fn query_rejects_unencoded_specials() {
        for query in ["with space", "bad#frag", "pipe|char"] {
            assert!(!matchers().query.is_match(query), "should reject: {query}");
        }
    }

    #[test]
    fn query_tolerates_bare_percent() {
        assert!(matchers().query.is_match("a=1&%zz"));
    }

    #[test]
    fn fragment_matches_valid_fragments() {
        for fragment in ["main", "summary", "", "?random-stuff", "article%20conclusion", "!$&'()*+,;="] {
            assert!(matchers().fragment.is_match(fragment), "should match: {fragment}");
        }
    }

    #[test]
    fn fragment_rejects_bad_percent_encoding() {
        for fragment in ["%zz", "fr ag", "x%4"] {
            assert!(!matchers().fragment.is_match(fragment), "should reject: {fragment}");
        }
    }

    #[test]
    fn query_param_captures_name_and_value() {
        let caps = matchers().query_param.captures("q=text").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("q"));
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("text"));
    }

    #[test]
    fn query_param_value_is_absent_without_equals() {
        let caps = matchers().query_param.captures("flag").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("flag"));
        assert!(caps.get(2).is_none());
    }

    #[test]
    fn query_param_value_may_contain_equals() {
        let caps = matchers().query_param.captures("a=b=c").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("a"));
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("b=c"));
    }

    #[test]
    fn query_param_rejects_bad_percent_encoding() {
        assert!(matchers().query_param.captures("%zz").is_none());
    }

    #[test]
    fn splitter_separates_five_groups() {
        let caps = matchers()
            .splitter
            .captures("https://localhost:8000/search?q=text#hello")
            .unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("https"));
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("localhost:8000"));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("/search"));
        assert_eq!(caps.get(4).map(|m| m.as_str()), Some("q=text"));
        assert_eq!(caps.get(5).map(|m| m.as_str()), Some("hello"));
    }

    #[test]
    fn splitter_handles_absent_groups() {
        let caps = matchers().splitter.captures("urn:isbn:9780307476463").unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("urn"));
        assert!(caps.get(2).is_none());
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("isbn:9780307476463"));
        assert!(caps.get(4).is_none());
        assert!(caps.get(5).is_none());
    }

    #[test]
    fn splitter_keeps_empty_authority() {
        let caps = matchers().splitter.captures("file:///C:/demo").unwrap();
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some(""));
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("/C:/demo"));
    }
}
