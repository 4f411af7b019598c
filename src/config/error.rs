// ABOUTME: Configuration error types for planner table loading and validation
// ABOUTME: Defines error variants for unreadable files, parse failures, missing entries, and bad values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Configuration error types for planner table loading and validation.

use std::io;
use std::path::PathBuf;

use fitplan_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid JSON/YAML for the expected schema
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A table entry the engine relies on is missing
    #[error("Missing required entry: {0}")]
    MissingField(String),

    /// A table entry is present but unusable
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Environment override could not be parsed
    #[error("Environment variable {name} has invalid value '{value}'")]
    EnvVar {
        /// Variable name
        name: &'static str,
        /// Raw value
        value: String,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::MissingField(_) => ErrorCode::ConfigMissing,
            ConfigError::InvalidValue(_) | ConfigError::EnvVar { .. } => ErrorCode::ConfigInvalid,
            ConfigError::Io { .. } | ConfigError::Parse { .. } => ErrorCode::ConfigError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
