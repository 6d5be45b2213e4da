// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler configuration and the minimum-interval policy.
//!
//! Loaded from a `[scheduler]` TOML section:
//!
//! ```toml
//! [scheduler]
//! scheduled_tasks_min_interval = 3600
//! force_scheduled_tasks = false
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors from configuration loading and lookup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing setting: {0}")]
    Missing(&'static str),
}

/// Minimum-interval lookup. Pure read, no side effects; a missing value
/// is fatal misconfiguration and propagates rather than silently
/// disabling the mechanism.
pub trait IntervalPolicy: Send + Sync {
    /// Minimum seconds between triggered runs. Zero or negative disables.
    fn minimum_interval_secs(&self) -> Result<i64, ConfigError>;
}

/// Scheduler settings from the `[scheduler]` config section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchedulingConfig {
    /// Minimum seconds between triggered runs. Required; zero or negative
    /// means the operator disabled request-triggered scheduling.
    pub scheduled_tasks_min_interval: Option<i64>,
    /// Debug escape hatch: claim on every eligible request regardless of
    /// the interval window.
    #[serde(default)]
    pub force_scheduled_tasks: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    scheduler: SchedulingConfig,
}

impl SchedulingConfig {
    /// Config with a set interval and the force flag off.
    pub fn with_interval(secs: i64) -> Self {
        Self {
            scheduled_tasks_min_interval: Some(secs),
            force_scheduled_tasks: false,
        }
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.scheduler)
    }
}

impl IntervalPolicy for SchedulingConfig {
    fn minimum_interval_secs(&self) -> Result<i64, ConfigError> {
        self.scheduled_tasks_min_interval
            .ok_or(ConfigError::Missing("scheduler.scheduled_tasks_min_interval"))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
