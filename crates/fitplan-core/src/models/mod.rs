// ABOUTME: Domain models shared by the fitplan scheduling engine and its callers
// ABOUTME: Re-exports profile, exercise, capacity, and schedule types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Core data models
//!
//! Profiles flow into the engine, schedules flow out. Everything here is plain
//! data with serde support so the presentation and persistence layers can
//! exchange it verbatim.

/// Capacity tiers, intensity caps and the capacity assessment
pub mod capacity;
/// Exercise catalog entry types
pub mod exercise;
/// User profile, goal and experience level
pub mod profile;
/// Day types, day plans, warnings and the weekly schedule
pub mod schedule;

pub use capacity::{BmiCategory, CapacityAssessment, CapacityTier, IntensityLevel, SessionDuration};
pub use exercise::{Exercise, ExerciseCategory, JointStress, RepTarget, Subgroup, Volume};
pub use profile::{normalize_tag, normalized_tags, ExperienceLevel, Goal, UserProfile};
pub use schedule::{
    DayPlan, DayType, RestInterval, ScheduleWarning, VolumeGuideline, WeeklySchedule,
};
