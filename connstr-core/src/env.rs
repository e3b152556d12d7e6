//! Environment variable lookup and `${VAR}` expansion.

use regex_lite::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{ConnStrError, ConnStrResult};

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;

    /// Check if a variable exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create an empty map-based environment source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").expect("valid variable pattern")
});

/// Expand `${VAR}` and `${VAR:-default}` references.
///
/// An unset or empty variable falls back to its default; with no default it
/// is an [`ConnStrError::EnvNotFound`] error.
pub fn expand_vars(content: &str, source: &impl EnvSource) -> ConnStrResult<String> {
    let mut result = String::with_capacity(content.len());
    let mut last = 0;

    for cap in VAR_PATTERN.captures_iter(content) {
        let whole = cap.get(0).expect("group 0 always participates");
        let name = &cap[1];

        let value = match (source.get(name), cap.get(2)) {
            (Some(value), _) if !value.is_empty() => value,
            (_, Some(default)) => default.as_str().to_string(),
            (Some(value), None) => value,
            (None, None) => return Err(ConnStrError::EnvNotFound(name.to_string())),
        };

        result.push_str(&content[last..whole.start()]);
        result.push_str(&value);
        last = whole.end();
    }

    result.push_str(&content[last..]);
    Ok(result)
}
