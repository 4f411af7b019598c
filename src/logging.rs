// ABOUTME: Logging configuration and structured logging setup for the planner
// ABOUTME: Builds a tracing-subscriber registry with env filtering and json, full, or compact output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Structured logging configuration
//!
//! Log lines go to stderr so that plan output on stdout stays machine-readable.
//! `RUST_LOG` wins over the configured level when it is set.

use std::env;
use std::fmt as std_fmt;
use std::io;

use anyhow::Result;
use serde_json::json;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default service name used in structured log fields
pub const DEFAULT_SERVICE_NAME: &str = "fitplan";

/// How log lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Timestamp, level, target and fields
    #[default]
    Full,
    /// Abbreviated single-line output without targets
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value (`pretty` is accepted for `full`)
    #[must_use]
    pub fn from_env_value(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Full,
        }
    }
}

impl std_fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Full => "full",
            Self::Compact => "compact",
        })
    }
}

/// Subscriber settings for the planner binary
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Fallback level when `RUST_LOG` is unset
    pub level: LevelFilter,
    /// Line format
    pub format: LogFormat,
    /// Attach file and line to each event
    pub include_location: bool,
    /// `service.name` field on the startup event
    pub service_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            format: LogFormat::default(),
            include_location: false,
            service_name: DEFAULT_SERVICE_NAME.to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `LOG_LEVEL`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION` and `SERVICE_NAME`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("LOG_LEVEL")
                .ok()
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |raw| LogFormat::from_env_value(&raw)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
        }
    }

    /// Raise the level to `debug` when `verbose` is set
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.level = LevelFilter::DEBUG;
        }
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level.into())
            .from_env_lossy()
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_file(self.include_location)
            .with_line_number(self.include_location);

        match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init()?,
            LogFormat::Full => registry.with(layer).try_init()?,
            LogFormat::Compact => registry.with(layer.compact().with_target(false)).try_init()?,
        }

        let planner_env = json!({
            "config_path": env::var("FITPLAN_CONFIG_PATH").ok(),
            "catalog_path": env::var("FITPLAN_CATALOG_PATH").ok(),
        });
        info!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            format = %self.format,
            "Logging initialized, planner sources: {planner_env}"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_env_value("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_env_value("pretty"), LogFormat::Full);
    }

    #[test]
    fn test_verbose_raises_level() {
        let config = LoggingConfig::default().verbose(true);
        assert_eq!(config.level, LevelFilter::DEBUG);
        assert_eq!(LoggingConfig::default().verbose(false).level, LevelFilter::WARN);
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
    }
}
