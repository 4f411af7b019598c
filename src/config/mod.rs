// ABOUTME: Configuration module for the planner lookup tables and their loading
// ABOUTME: Exposes PlannerConfig, its table types, environment overrides, and ConfigError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors
//! Configuration module for the fitplan scheduling engine
//!
//! - **Tables**: capacity tiers, experience modifiers, medical rules, templates
//! - **Environment**: file loading (`FITPLAN_CONFIG_PATH`) and `FITPLAN_*` overrides
//! - **Error**: `ConfigError` and its mapping onto `AppError`
//!
//! A [`PlannerConfig`] is constructed once at startup and passed by reference
//! to every engine component.

/// Environment variable and file loading
pub mod environment;
/// Configuration error types
pub mod error;
/// Lookup tables and defaults
pub mod tables;

pub use error::ConfigError;
pub use tables::{
    AllocationConstraints, DayLimits, ExperienceModifier, FallbackConfig, FallbackPolicy,
    MedicalRule, PlannerConfig, PlanningStrategy, ScoreBands, ScoringConfig, TemplateTable,
    TierCapacity, TierThresholds, HIIT_RESTRICTION,
};
