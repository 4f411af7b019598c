// ABOUTME: Main library entry point for the fitplan weekly workout scheduling engine
// ABOUTME: Exposes configuration tables, the exercise catalog, the planning engine, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

#![deny(unsafe_code)]

//! # fitplan
//!
//! A rule-based engine that turns a user's physical profile, goal, experience
//! level, medical conditions, injuries and available days into a day-by-day
//! exercise plan that respects safety and intensity constraints.
//!
//! ## Architecture
//!
//! - **Config**: lookup tables loaded once at startup and passed by reference
//! - **Catalog**: the versioned, read-only exercise dataset
//! - **Intelligence**: capacity profiler, template selector, exercise pool
//!   builder, day allocator and the scheduler that wires them together
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan::catalog::ExerciseCatalog;
//! use fitplan::config::PlannerConfig;
//! use fitplan::intelligence::WorkoutScheduler;
//! use fitplan::models::{ExperienceLevel, Goal, UserProfile};
//!
//! fn main() -> fitplan::errors::AppResult<()> {
//!     let config = PlannerConfig::load()?;
//!     let catalog = ExerciseCatalog::load()?;
//!     let profile = UserProfile::new(25, 175.0, 70.0, ExperienceLevel::Beginner, Goal::MuscleGain, 6);
//!
//!     let schedule = WorkoutScheduler::new(&config, &catalog).schedule_seeded(&profile, 42)?;
//!     println!("{} workout days", schedule.workout_days());
//!     Ok(())
//! }
//! ```

/// Exercise catalog
pub mod catalog;
/// Planner configuration tables and loading
pub mod config;
/// Scheduling engine components
pub mod intelligence;
/// Logging configuration
pub mod logging;

pub use fitplan_core::{constants, errors, models};
