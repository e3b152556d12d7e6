//! Parser configuration.
//!
//! A [`ParserConfig`] holds the fixed scheme shared by formatting and
//! parsing. It can be built in code, read from the environment, or loaded
//! from a TOML file:
//!
//! ```toml
//! [connection]
//! scheme = "mongodb"
//! strict_scheme = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::env::{EnvSource, StdEnvSource, expand_vars};
use crate::error::{ConnStrError, ConnStrResult};

/// Scheme used when none is configured.
pub const DEFAULT_SCHEME: &str = "db";

/// Environment variable holding the scheme.
pub const SCHEME_ENV: &str = "CONNSTR_SCHEME";

/// Environment variable toggling scheme enforcement.
pub const STRICT_SCHEME_ENV: &str = "CONNSTR_STRICT_SCHEME";

/// Configuration shared by the formatter and the parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Fixed scheme. Also used for the default output and for descriptors
    /// with an empty scheme.
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Reject descriptors and URIs whose scheme differs from `scheme`.
    #[serde(default = "default_true")]
    pub strict_scheme: bool,
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            strict_scheme: true,
        }
    }
}

/// Why `scheme` cannot appear before `://`, if it cannot.
pub(crate) fn scheme_problem(scheme: &str) -> Option<&'static str> {
    if scheme.is_empty() {
        Some("must not be empty")
    } else if scheme.contains(':') || scheme.chars().any(char::is_whitespace) {
        Some("must not contain ':' or whitespace")
    } else {
        None
    }
}

/// Top-level layout of a configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    connection: ParserConfig,
}

impl ParserConfig {
    /// Configuration enforcing the given scheme.
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            strict_scheme: true,
        }
    }

    /// Configuration accepting any scheme.
    pub fn unrestricted() -> Self {
        Self {
            strict_scheme: false,
            ..Self::default()
        }
    }

    /// Check that the scheme can appear before `://`.
    pub fn validate(&self) -> ConnStrResult<()> {
        match scheme_problem(&self.scheme) {
            Some(problem) => Err(ConnStrError::Config(format!(
                "scheme `{}` {problem}",
                self.scheme
            ))),
            None => Ok(()),
        }
    }

    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> ConnStrResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConnStrError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string, expanding `${VAR}` references
    /// from the process environment.
    pub fn from_toml_str(content: &str) -> ConnStrResult<Self> {
        Self::from_toml_str_with(content, &StdEnvSource)
    }

    /// Parse configuration from a TOML string with a custom environment.
    pub fn from_toml_str_with(content: &str, source: &impl EnvSource) -> ConnStrResult<Self> {
        let expanded = expand_vars(content, source)?;
        let file: ConfigFile =
            toml::from_str(&expanded).map_err(|e| ConnStrError::Toml { source: e })?;

        file.connection.validate()?;
        Ok(file.connection)
    }

    /// Read `CONNSTR_SCHEME` and `CONNSTR_STRICT_SCHEME` from the process
    /// environment.
    pub fn from_env() -> ConnStrResult<Self> {
        Self::from_env_source(&StdEnvSource)
    }

    /// Read the configuration from a custom environment source.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env_source(source: &impl EnvSource) -> ConnStrResult<Self> {
        let mut config = Self::default();

        if let Some(scheme) = source.get(SCHEME_ENV) {
            config.scheme = scheme;
        }
        if let Some(strict) = source.get(STRICT_SCHEME_ENV) {
            config.strict_scheme = match strict.to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                other => {
                    return Err(ConnStrError::Config(format!(
                        "{STRICT_SCHEME_ENV} must be a boolean, got `{other}`"
                    )));
                }
            };
        }

        config.validate()?;
        Ok(config)
    }
}
