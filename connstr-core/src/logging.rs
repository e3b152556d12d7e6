//! Logging setup.
//!
//! The library emits `tracing` events (`debug` on parse, `trace` on format)
//! and never logs raw connection strings, which may carry passwords. With the
//! `tracing-subscriber` feature, [`init`] installs a subscriber driven by:
//!
//! - `CONNSTR_DEBUG=true|1|yes` - enable debug logging
//! - `CONNSTR_LOG_LEVEL=trace|debug|info|warn|error` - set a level
//! - `CONNSTR_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! ```rust,no_run
//! use connstr_core::logging;
//!
//! logging::init();
//! ```

use std::sync::Once;

use crate::env::{EnvSource, StdEnvSource};

/// Enables debug logging.
pub const DEBUG_ENV: &str = "CONNSTR_DEBUG";

/// Overrides the log level.
pub const LOG_LEVEL_ENV: &str = "CONNSTR_LOG_LEVEL";

/// Selects the output format.
pub const LOG_FORMAT_ENV: &str = "CONNSTR_LOG_FORMAT";

static INIT: Once = Once::new();

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Multi-line human readable output.
    Pretty,
    /// Single-line human readable output.
    Compact,
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Whether anything asked for logging at all.
    pub enabled: bool,
    /// Level directive.
    pub level: &'static str,
    /// Output format.
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(&StdEnvSource)
    }

    /// Resolve settings from a custom environment source.
    ///
    /// The level defaults to `debug` when debug logging is on and `warn`
    /// otherwise.
    pub fn from_source(source: &impl EnvSource) -> Self {
        let debug = source
            .get(DEBUG_ENV)
            .is_some_and(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"));
        let fallback = if debug { "debug" } else { "warn" };

        let requested = source.get(LOG_LEVEL_ENV);
        let level = match requested.as_deref().map(str::to_lowercase).as_deref() {
            Some("trace") => "trace",
            Some("debug") => "debug",
            Some("info") => "info",
            Some("warn") => "warn",
            Some("error") => "error",
            _ => fallback,
        };

        let format = match source.get(LOG_FORMAT_ENV).map(|f| f.to_lowercase()).as_deref() {
            Some("pretty") => LogFormat::Pretty,
            Some("compact") => LogFormat::Compact,
            _ => LogFormat::Json,
        };

        Self {
            enabled: debug || requested.is_some(),
            level,
            format,
        }
    }
}

/// Install the global subscriber once. Later calls are no-ops, as is every
/// call when neither `CONNSTR_DEBUG` nor `CONNSTR_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        let settings = LogSettings::from_env();
        if !settings.enabled {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!(
                "connstr={},connstr_core={}",
                settings.level, settings.level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match settings.format {
                LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
                LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
                LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level = settings.level, format = ?settings.format, "connstr logging initialized");
            }
        }
    });
}
