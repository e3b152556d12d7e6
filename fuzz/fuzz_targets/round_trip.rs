//! Structured fuzz target for format-then-parse.
//!
//! Builds descriptors from arbitrary field values, including every grammar
//! delimiter, and checks that parsing the formatted string restores them.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_round_trip
//! ```

#![no_main]

use arbitrary::Arbitrary;
use connstr_core::{ConnectionDescriptor, ConnectionStringParser, HostEntry};
use indexmap::IndexMap;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzDescriptor {
    username: Option<String>,
    password: Option<String>,
    hosts: Vec<(String, Option<u16>)>,
    endpoint: Option<String>,
    options: Vec<(String, String)>,
}

impl FuzzDescriptor {
    fn into_descriptor(self) -> Option<ConnectionDescriptor> {
        let hosts: Vec<_> = self
            .hosts
            .into_iter()
            .filter(|(host, _)| !host.is_empty())
            .map(|(host, port)| HostEntry { host, port })
            .collect();
        if hosts.is_empty() {
            return None;
        }

        let username = self.username.filter(|u| !u.is_empty());
        let password = username.as_ref().and(self.password);
        let options: IndexMap<String, String> = self.options.into_iter().collect();

        Some(ConnectionDescriptor {
            scheme: "db".to_string(),
            username,
            password,
            hosts,
            endpoint: self.endpoint.filter(|e| !e.is_empty()),
            options: if options.is_empty() { None } else { Some(options) },
        })
    }
}

fuzz_target!(|input: FuzzDescriptor| {
    let Some(descriptor) = input.into_descriptor() else {
        return;
    };

    let parser = ConnectionStringParser::new();
    let uri = parser.format(Some(&descriptor)).expect("valid descriptor formats");
    assert_eq!(parser.parse(&uri).expect("formatted uri parses"), descriptor);
});
