//! Structured connection string descriptor.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConnStrError;
use crate::parser::ConnectionStringParser;

/// A single host with an optional explicit port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct HostEntry {
    /// Host name or address.
    pub host: String,
    /// Port, only when one was given explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl HostEntry {
    /// Create a host entry without a port.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
        }
    }

    /// Create a host entry with an explicit port.
    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port: Some(port),
        }
    }
}

impl std::fmt::Display for HostEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => write!(f, "{}", self.host),
        }
    }
}

/// The structured form of a connection string.
///
/// ```text
/// scheme://[username[:password]@]host1[:port1][,host2[:port2],...][/endpoint][?options]
/// ```
///
/// Optional fields are `None` unless they were supplied. A password of
/// `Some("")` is distinct from no password. An empty options map formats the
/// same as `None`.
///
/// # Examples
///
/// ```rust
/// use connstr_core::{ConnectionDescriptor, HostEntry};
///
/// let descriptor = ConnectionDescriptor::new("mongodb")
///     .with_username("admin")
///     .with_host_port("db1.example.com", 27017)
///     .with_host("db2.example.com")
///     .with_endpoint("app")
///     .with_option("replicaSet", "rs0");
///
/// assert_eq!(descriptor.primary_host(), Some(&HostEntry::with_port("db1.example.com", 27017)));
/// assert_eq!(descriptor.option("replicaSet"), Some("rs0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionDescriptor {
    /// Scheme before `://`.
    pub scheme: String,
    /// Username, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password, if any. Only emitted alongside a username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Hosts in order; the first is the primary by convention.
    pub hosts: Vec<HostEntry>,
    /// Path-like segment after the host list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Key/value options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<IndexMap<String, String>>,
}

impl ConnectionDescriptor {
    /// Create a descriptor with only a scheme.
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            ..Default::default()
        }
    }

    /// Set the username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Append a host without a port.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.hosts.push(HostEntry::new(host));
        self
    }

    /// Append a host with an explicit port.
    pub fn with_host_port(mut self, host: impl Into<String>, port: u16) -> Self {
        self.hosts.push(HostEntry::with_port(host, port));
        self
    }

    /// Set the endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Add an option. A later value for the same key replaces the earlier one.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// The first host, if any.
    pub fn primary_host(&self) -> Option<&HostEntry> {
        self.hosts.first()
    }

    /// Get an option value.
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options
            .as_ref()
            .and_then(|options| options.get(key))
            .map(|s| s.as_str())
    }

    /// Whether there is at least one option to emit.
    pub fn has_options(&self) -> bool {
        self.options.as_ref().is_some_and(|options| !options.is_empty())
    }
}

/// Parses with no fixed scheme; any scheme is accepted.
impl FromStr for ConnectionDescriptor {
    type Err = ConnStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConnectionStringParser::unrestricted().parse(s)
    }
}
