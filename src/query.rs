//! Query string decomposition.

use crate::grammar::matchers;
use crate::url::QueryParameters;

/// Splits a validated, trimmed query string into its parameter mapping.
///
/// Each `&`-separated token is matched independently against the parameter
/// grammar: a name drawn from the `pchar`-minus-`=` set (plus `/` and `?`),
/// optionally followed by `=` and a value in the general query grammar.
///
/// Unlike every other validation in the parser, this one is lenient per
/// token: a token that fails the grammar is silently dropped rather than
/// aborting the parse. A repeated name overwrites the previous value, so the
/// last occurrence wins.
///
/// Trailing `&`s produce no entry, but an interior or leading empty token is
/// a legal bare name under the grammar (the name production admits the empty
/// string) and maps `""` to `None`.
pub(crate) fn decompose(query: &str) -> QueryParameters {
    let mut params = QueryParameters::new();

    let mut tokens: Vec<&str> = query.split('&').collect();
    while tokens.last() == Some(&"") {
        tokens.pop();
    }

    for token in tokens {
        let Some(caps) = matchers().query_param.captures(token) else {
            continue;
        };

        let name = caps.get(1).map_or("", |m| m.as_str()).to_string();
        let value = caps.get(2).map(|m| m.as_str().to_string());
        params.insert(name, value);
    }

    params
}
