//! Error types for connection string formatting and parsing.

// These warnings are false positives - the fields are used by derive macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Placeholder shown instead of secret values in errors.
pub const REDACTED: &str = "***";

/// Result type for connection string operations.
pub type ConnStrResult<T> = Result<T, ConnStrError>;

/// Errors that can occur while formatting or parsing a connection string.
#[derive(Error, Debug, Diagnostic)]
pub enum ConnStrError {
    /// The input contains no `://` delimiter.
    #[error("no scheme found in URI {uri}")]
    #[diagnostic(
        code(connstr::missing_scheme),
        help("connection strings start with `scheme://`")
    )]
    MissingScheme {
        /// The rejected input.
        uri: String,
    },

    /// The scheme does not match the fixed scheme of the parser.
    #[error("scheme mismatch: expected `{expected}://`, found `{found}`")]
    #[diagnostic(code(connstr::scheme_mismatch))]
    SchemeMismatch {
        /// Scheme the parser is fixed to.
        expected: String,
        /// Scheme that was supplied.
        found: String,
    },

    /// A scheme that cannot appear before `://`.
    #[error("invalid scheme `{scheme}`: {message}")]
    #[diagnostic(code(connstr::invalid_scheme))]
    InvalidScheme {
        /// The offending scheme.
        scheme: String,
        /// Why it was rejected.
        message: String,
    },

    /// A host/port token could not be decomposed.
    #[error("malformed address `{token}`: {message}")]
    #[diagnostic(code(connstr::malformed_address))]
    MalformedAddress {
        /// The host/port token.
        token: String,
        /// What is wrong with it.
        message: String,
    },

    /// The input does not match the connection string grammar.
    #[error("invalid connection string: {message}")]
    #[diagnostic(
        code(connstr::parse_error),
        help("expected scheme://[username[:password]@]host1[:port1][,host2[:port2],...][/endpoint][?options]")
    )]
    Parse {
        /// Description of the failure.
        message: String,
    },

    /// A field holds a bad percent escape or does not decode to UTF-8.
    #[error("invalid percent-encoding in {field}: `{value}`")]
    #[diagnostic(code(connstr::invalid_encoding))]
    InvalidEncoding {
        /// Name of the field.
        field: String,
        /// Raw field value, redacted for passwords.
        value: String,
    },

    /// Environment variable not found.
    #[error("environment variable not found: {0}")]
    #[diagnostic(code(connstr::env_not_found))]
    EnvNotFound(String),

    /// Invalid parser configuration.
    #[error("configuration error: {0}")]
    #[diagnostic(code(connstr::config))]
    Config(String),

    /// Error reading a configuration file.
    #[error("failed to read file: {path}")]
    #[diagnostic(code(connstr::io_error))]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("TOML parsing error")]
    #[diagnostic(code(connstr::toml_error))]
    Toml {
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

impl ConnStrError {
    /// Create a malformed address error.
    pub fn malformed_address(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedAddress {
            token: token.into(),
            message: message.into(),
        }
    }

    /// Create a scheme mismatch error.
    pub fn scheme_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::SchemeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create an invalid encoding error. Password values are replaced with
    /// [`REDACTED`].
    pub fn invalid_encoding(field: impl Into<String>, value: impl Into<String>) -> Self {
        let field = field.into();
        let value = if field == "password" {
            REDACTED.to_string()
        } else {
            value.into()
        };
        Self::InvalidEncoding { field, value }
    }

    /// Create an invalid scheme error.
    pub fn invalid_scheme(scheme: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidScheme {
            scheme: scheme.into(),
            message: message.into(),
        }
    }

    /// Check whether this error was raised by the fixed-scheme constraint.
    pub fn is_scheme_mismatch(&self) -> bool {
        matches!(self, Self::SchemeMismatch { .. })
    }
}
