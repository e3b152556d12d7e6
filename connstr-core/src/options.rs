//! Option list sub-parser.

use indexmap::IndexMap;

use crate::encoding;
use crate::error::ConnStrResult;

/// Parse an `&`-separated `key=value` list.
///
/// Each token is split at its first `=`; tokens without one are dropped. Keys
/// and values are percent-decoded independently. A repeated key keeps its
/// first position and takes the last value.
///
/// ```rust
/// use connstr_core::parse_options;
///
/// let options = parse_options("a=1&b&c=3").unwrap();
/// assert_eq!(options.get("a").map(String::as_str), Some("1"));
/// assert_eq!(options.get("b"), None);
/// assert_eq!(options.get("c").map(String::as_str), Some("3"));
/// ```
pub fn parse_options(options: &str) -> ConnStrResult<IndexMap<String, String>> {
    let mut result = IndexMap::new();

    for (key, value) in options.split('&').filter_map(|pair| pair.split_once('=')) {
        let key = encoding::decode("option key", key)?;
        let value = encoding::decode("option value", value)?;
        result.insert(key, value);
    }

    Ok(result)
}

/// Format options as an `&`-separated `key=value` list, in map order.
pub(crate) fn format_options(options: &IndexMap<String, String>) -> String {
    options
        .iter()
        .map(|(key, value)| format!("{}={}", encoding::encode(key), encoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
