//! # connstr-core
//!
//! Formatting and parsing of multi-host connection strings:
//!
//! ```text
//! scheme://[username[:password]@]host1[:port1][,host2[:port2],...][/endpoint][?key1=val1[&key2=val2...]]
//! ```
//!
//! A [`ConnectionStringParser`] converts a [`ConnectionDescriptor`] to this
//! form and back. Every field is percent-encoded on output, so values may hold
//! any of the delimiters `: @ , / ? = &`, and parsing the output of
//! [`ConnectionStringParser::format`] yields the original descriptor.
//!
//! ## Fixed scheme
//!
//! A parser is configured with a scheme (`db` by default). Unless built with
//! [`ConnectionStringParser::unrestricted`], descriptors and URIs carrying a
//! different scheme are rejected in both directions.
//!
//! ```rust
//! use connstr_core::{ConnStrError, ConnectionDescriptor, ConnectionStringParser};
//!
//! let parser = ConnectionStringParser::with_scheme("foo").unwrap();
//!
//! let descriptor = ConnectionDescriptor::new("bar").with_host("h");
//! assert!(matches!(parser.format(Some(&descriptor)), Err(ConnStrError::SchemeMismatch { .. })));
//! assert!(matches!(parser.parse("bar://h"), Err(ConnStrError::SchemeMismatch { .. })));
//! ```
//!
//! ## Multiple hosts
//!
//! ```rust
//! use connstr_core::{ConnectionStringParser, HostEntry};
//!
//! let descriptor = ConnectionStringParser::new().parse("db://a:1,b:2,c").unwrap();
//! assert_eq!(descriptor.hosts, vec![
//!     HostEntry::with_port("a", 1),
//!     HostEntry::with_port("b", 2),
//!     HostEntry::new("c"),
//! ]);
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod address;
pub mod config;
pub mod descriptor;
pub mod encoding;
pub mod env;
pub mod error;
pub mod grammar;
pub mod logging;
pub mod options;
pub mod parser;

pub use address::parse_addresses;
pub use config::{DEFAULT_SCHEME, ParserConfig};
pub use descriptor::{ConnectionDescriptor, HostEntry};
pub use env::{EnvSource, MapEnvSource, StdEnvSource};
pub use error::{ConnStrError, ConnStrResult};
pub use options::parse_options;
pub use parser::ConnectionStringParser;
