//! Fuzz target for the connection string parser.
//!
//! Feeds arbitrary strings to the parser; it must return errors, never panic.
//! Whatever parses must format back to a string that parses to the same
//! descriptor, up to an empty options map formatting as no options.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_parse
//! ```

#![no_main]

use connstr_core::ConnectionStringParser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let parser = ConnectionStringParser::unrestricted();
        if let Ok(mut descriptor) = parser.parse(input) {
            if !descriptor.has_options() {
                descriptor.options = None;
            }
            let uri = parser
                .format(Some(&descriptor))
                .expect("parsed descriptor formats");
            assert_eq!(parser.parse(&uri).expect("formatted uri parses"), descriptor);
        }
    }
});
