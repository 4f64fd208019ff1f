//! Configuration structures.
//!
//! Configuration is loaded from a JSON file; every section falls back to its
//! defaults when omitted.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::{Error, Result};
use crate::validation::{AccountPolicy, UrlPolicy};

/// Global configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scheme allow-set and required path for URL validation.
    #[serde(default)]
    pub url: UrlPolicy,

    /// Username/password rules.
    #[serde(default)]
    pub account: AccountPolicy,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Parse a configuration from a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::from_json_str(&raw)
    }

    fn check(&self) -> Result<()> {
        if self.url.allowed_schemes.is_empty() {
            return Err(Error::config("url.allowed_schemes cannot be empty"));
        }
        if self.account.username_min_len == 0 {
            return Err(Error::config("account.username_min_len must be positive"));
        }
        if self.account.username_min_len > self.account.username_max_len {
            return Err(Error::config(
                "account.username_min_len exceeds account.username_max_len",
            ));
        }
        if self.account.password_min_len > self.account.password_max_len {
            return Err(Error::config(
                "account.password_min_len exceeds account.password_max_len",
            ));
        }
        if let Some(c) = self
            .account
            .password_symbols
            .chars()
            .find(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            return Err(Error::config(format!(
                "account.password_symbols must only list punctuation, got {c:?}"
            )));
        }
        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
