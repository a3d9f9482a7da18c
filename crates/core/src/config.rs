// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration
//!
//! Loaded from TOML; every key is optional:
//!
//! ```toml
//! fetch_timeout = "10s"
//! max_url_depth = 1
//! model_prefix = "PA:"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings shared by every parser/validator an engine builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Upper bound for a single `MODEL_FROM_URL` fetch
    #[serde(with = "humantime_serde")]
    pub fetch_timeout: Duration,
    /// Number of `MODEL_FROM_URL` indirections allowed in one chain
    pub max_url_depth: usize,
    /// Prefix stripped from model strings before dispatch
    pub model_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            max_url_depth: 1,
            model_prefix: "PA:".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_max_url_depth(mut self, depth: usize) -> Self {
        self.max_url_depth = depth;
        self
    }

    pub fn with_model_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.model_prefix = prefix.into();
        self
    }

    /// Replace values `check` would reject with their defaults.
    ///
    /// Builders accept a config without going through `load`, so the
    /// engine clamps it instead of failing.
    pub(crate) fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.max_url_depth == 0 {
            tracing::warn!(default = defaults.max_url_depth, "max_url_depth of 0 replaced");
            self.max_url_depth = defaults.max_url_depth;
        }
        if self.fetch_timeout.is_zero() {
            tracing::warn!(default = ?defaults.fetch_timeout, "zero fetch_timeout replaced");
            self.fetch_timeout = defaults.fetch_timeout;
        }
        self
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.max_url_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_url_depth must be at least 1".to_string(),
            ));
        }
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "fetch_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
