//! Connection string grammar.
//!
//! ```text
//! scheme://[username[:password]@]host1[:port1][,host2[:port2],...][/endpoint][?options]
//! ```
//!
//! Matching only splits the input into raw, still percent-encoded segments.
//! Decoding and the address/option sub-parsers run afterwards.

use regex_lite::Regex;
use std::sync::LazyLock;

static CONNECTION_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "^",
        // scheme
        "([^:]+)://",
        // username and password
        "(?:([^:@,/?=&]+)(?::([^:@,/?=&]*))?@)?",
        // host address(es)
        "([^@/?=&]+)",
        // endpoint
        "(?:/([^:@,/?=&]*))?",
        // options; a raw `,` is accepted here, the formatter always escapes it
        r"(?:\?([^:@/?]*))?",
        "$",
    ))
    .expect("valid connection string grammar")
});

/// Raw segments of a connection string, borrowed from the input.
///
/// Groups that did not take part in the match are `None`. A group that
/// matched an empty string is `Some("")`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawConnectionString<'a> {
    /// Scheme, never empty.
    pub scheme: &'a str,
    /// Encoded username.
    pub username: Option<&'a str>,
    /// Encoded password.
    pub password: Option<&'a str>,
    /// Comma-separated host list.
    pub address: &'a str,
    /// Encoded endpoint.
    pub endpoint: Option<&'a str>,
    /// `&`-separated options.
    pub options: Option<&'a str>,
}

/// Split `input` into its grammar segments.
///
/// The whole string must match; `None` otherwise. Callers strip surrounding
/// whitespace first.
pub fn split(input: &str) -> Option<RawConnectionString<'_>> {
    let caps = CONNECTION_STRING.captures(input)?;
    let group = |i| caps.get(i).map(|m| m.as_str());

    Some(RawConnectionString {
        scheme: group(1)?,
        username: group(2),
        password: group(3),
        address: group(4)?,
        endpoint: group(5),
        options: group(6),
    })
}
