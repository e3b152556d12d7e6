//! Fuzz target for the configuration loader.
//!
//! Feeds arbitrary TOML to `ParserConfig::from_toml_str_with`; it must
//! return errors, never panic, and any accepted configuration must build a
//! parser.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use connstr_core::{ConnectionStringParser, MapEnvSource, ParserConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let source = MapEnvSource::new().set("SCHEME", "db");
        if let Ok(config) = ParserConfig::from_toml_str_with(input, &source) {
            let parser = ConnectionStringParser::from_config(config).expect("validated config");
            let _ = parser.format(None);
        }
    }
});
