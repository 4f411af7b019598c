// ABOUTME: Shared test utilities and fixtures for planner integration tests
// ABOUTME: Provides quiet logging setup, canonical profiles, and schedule assertions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::panic
)]
//! Shared test utilities for `fitplan`

use std::env;
use std::sync::Once;

use fitplan::models::{DayType, ExperienceLevel, Goal, UserProfile, WeeklySchedule};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 25 years old, 175 cm, 70 kg (BMI 22.86), no conditions or injuries
pub fn healthy_profile(experience: ExperienceLevel, goal: Goal, available_days: u8) -> UserProfile {
    UserProfile::new(25, 175.0, 70.0, experience, goal, available_days)
}

/// Every `(goal, experience)` pair
pub fn all_pairs() -> Vec<(Goal, ExperienceLevel)> {
    Goal::ALL
        .into_iter()
        .flat_map(|goal| ExperienceLevel::ALL.into_iter().map(move |level| (goal, level)))
        .collect()
}

/// Assert the structural invariants every schedule must satisfy
pub fn assert_schedule_invariants(schedule: &WeeklySchedule, available_days: u8) {
    assert_eq!(schedule.days.len(), usize::from(available_days));
    for plan in &schedule.days {
        if plan.day_type == DayType::Rest {
            assert!(plan.exercises.is_empty(), "rest day {} has exercises", plan.day);
        }
    }
    if !schedule.assessment.hiit_allowed {
        assert!(
            schedule.days.iter().all(|plan| plan.day_type != DayType::Hiit),
            "HIIT day in a plan without HIIT clearance"
        );
    }
}
