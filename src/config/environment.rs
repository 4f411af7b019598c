// ABOUTME: Planner configuration loading from optional JSON/YAML files and environment variables
// ABOUTME: Layers built-in defaults, a config file, and scalar env overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

use std::env;
use std::fs;
use std::path::Path;

use chrono::Weekday;
use tracing::{debug, info};

use super::error::ConfigError;
use super::tables::{FallbackPolicy, PlannerConfig, PlanningStrategy};

/// Environment variable naming an optional planner config file
pub const CONFIG_PATH_ENV: &str = "FITPLAN_CONFIG_PATH";
/// Toggle for the no-consecutive-HIIT allocator rule
pub const NO_CONSECUTIVE_HIIT_ENV: &str = "FITPLAN_NO_CONSECUTIVE_HIIT";
/// Toggle for the rest-after-HIIT allocator rule
pub const REST_AFTER_HIIT_ENV: &str = "FITPLAN_REST_AFTER_HIIT";
/// Empty-day fallback policy override
pub const FALLBACK_POLICY_ENV: &str = "FITPLAN_FALLBACK_POLICY";
/// Empty-day fallback sample size override
pub const FALLBACK_SAMPLE_SIZE_ENV: &str = "FITPLAN_FALLBACK_SAMPLE_SIZE";
/// Calendar layout strategy override
pub const STRATEGY_ENV: &str = "FITPLAN_STRATEGY";
/// First plan day override
pub const WEEK_START_ENV: &str = "FITPLAN_WEEK_START";

impl PlannerConfig {
    /// Load configuration: defaults, then `FITPLAN_CONFIG_PATH`, then env overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, an
    /// override has an unparseable value, or the result fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                info!("Loading planner configuration from {path}");
                Self::read_file(Path::new(path.trim()))?
            }
            _ => {
                debug!("No {CONFIG_PATH_ENV} set, using built-in planner tables");
                Self::default()
            }
        };

        config.apply_environment_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file (YAML for `.yaml`/`.yml`, JSON otherwise)
    ///
    /// Sections absent from the file keep their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            path: "<inline json>".into(),
            message: e.to_string(),
        })?;
        config.normalize_medical_rules()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: "<inline yaml>".into(),
            message: e.to_string(),
        })?;
        config.normalize_medical_rules()?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let parsed = if is_yaml {
            serde_yaml::from_str::<Self>(&contents).map_err(|e| e.to_string())
        } else {
            serde_json::from_str::<Self>(&contents).map_err(|e| e.to_string())
        };
        let mut config: Self = parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        config.normalize_medical_rules()?;
        Ok(config)
    }

    /// Apply scalar `FITPLAN_*` environment overrides in place
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvVar` when a variable is set to a value that
    /// cannot be parsed; unset variables leave the current value untouched
    pub fn apply_environment_overrides(&mut self) -> Result<(), ConfigError> {
        parse_env_bool(
            NO_CONSECUTIVE_HIIT_ENV,
            &mut self.constraints.no_consecutive_hiit_days,
        )?;
        parse_env_bool(REST_AFTER_HIIT_ENV, &mut self.constraints.rest_after_hiit)?;
        parse_env_with(FALLBACK_POLICY_ENV, &mut self.fallback.policy, |raw| {
            raw.parse::<FallbackPolicy>().ok()
        })?;
        parse_env_with(FALLBACK_SAMPLE_SIZE_ENV, &mut self.fallback.sample_size, |raw| {
            raw.trim().parse::<usize>().ok()
        })?;
        parse_env_with(STRATEGY_ENV, &mut self.strategy, |raw| {
            raw.parse::<PlanningStrategy>().ok()
        })?;
        parse_env_with(WEEK_START_ENV, &mut self.week_start, |raw| {
            raw.trim().parse::<Weekday>().ok()
        })?;
        Ok(())
    }
}

/// Parse a boolean env value (`1/true/yes/on` or `0/false/no/off`)
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_env_bool(name: &'static str, target: &mut bool) -> Result<(), ConfigError> {
    parse_env_with(name, target, parse_bool)
}

/// Update `target` from env var `name` when set; reject unparseable values
fn parse_env_with<T>(
    name: &'static str,
    target: &mut T,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<(), ConfigError> {
    let Ok(value) = env::var(name) else {
        return Ok(());
    };
    match parse(&value) {
        Some(parsed) => {
            debug!("Applied planner override {name}={value}");
            *target = parsed;
            Ok(())
        }
        None => Err(ConfigError::EnvVar { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        for raw in ["1", "true", "YES", " on "] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["0", "false", "No", "off"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            PlannerConfig::from_json_str(r#"{"strategy":"allocated","week_start":"Wed"}"#).unwrap();
        assert_eq!(config.strategy, PlanningStrategy::Allocated);
        assert_eq!(config.week_start, Weekday::Wed);
        assert_eq!(config.day_limits, PlannerConfig::default().day_limits);
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = PlannerConfig::from_yaml_str("day_limits: [oops").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
