//! Host list sub-parser.

use crate::descriptor::HostEntry;
use crate::encoding;
use crate::error::{ConnStrError, ConnStrResult};

/// Parse a comma-separated host list into host entries, in input order.
///
/// Each token is `host` or `host:port`, split at the first `:`. The host is
/// percent-decoded and the port must be a base-10 `u16`.
///
/// Empty tokens and empty hosts are rejected, as are non-numeric, empty and
/// out-of-range ports.
///
/// ```rust
/// use connstr_core::{HostEntry, parse_addresses};
///
/// let hosts = parse_addresses("a:1,b:2,c").unwrap();
/// assert_eq!(hosts, vec![
///     HostEntry::with_port("a", 1),
///     HostEntry::with_port("b", 2),
///     HostEntry::new("c"),
/// ]);
/// ```
pub fn parse_addresses(address: &str) -> ConnStrResult<Vec<HostEntry>> {
    address.split(',').map(parse_host).collect()
}

fn parse_host(token: &str) -> ConnStrResult<HostEntry> {
    let (host, port) = match token.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (token, None),
    };

    if host.is_empty() {
        return Err(ConnStrError::malformed_address(token, "empty host"));
    }

    let host = encoding::decode("host", host)?;
    let port = port
        .map(|port| {
            port.parse::<u16>().map_err(|_| {
                ConnStrError::malformed_address(token, format!("invalid port number `{port}`"))
            })
        })
        .transpose()?;

    Ok(HostEntry { host, port })
}

/// Format host entries as a comma-separated host list.
pub(crate) fn format_addresses(hosts: &[HostEntry]) -> ConnStrResult<String> {
    if hosts.is_empty() {
        return Err(ConnStrError::malformed_address("", "host list is empty"));
    }

    let mut out = String::new();
    for (i, entry) in hosts.iter().enumerate() {
        if entry.host.is_empty() {
            return Err(ConnStrError::malformed_address(entry.to_string(), "empty host"));
        }
        if i > 0 {
            out.push(',');
        }
        out.push_str(&encoding::encode(&entry.host));
        if let Some(port) = entry.port {
            out.push(':');
            out.push_str(&port.to_string());
        }
    }
    Ok(out)
}
