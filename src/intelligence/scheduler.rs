// ABOUTME: Weekly workout scheduler wiring profiler, template selector, allocator, and pool builder
// ABOUTME: Single entry point turning a user profile into a WeeklySchedule with soft warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Workout Scheduler
//!
//! `profile -> CapacityAssessment -> day-type sequence -> calendar -> exercises`.
//!
//! Hard failures (invalid profile, missing tables) abort the call. Soft
//! conditions (safety fallback, allocation conflicts) are attached to the
//! returned [`WeeklySchedule`] as warnings so the caller always gets a plan.

use std::iter;

use chrono::Weekday;
use fitplan_core::errors::AppResult;
use fitplan_core::models::{DayPlan, DayType, ScheduleWarning, UserProfile, WeeklySchedule};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use super::allocator::DayAllocator;
use super::capacity::CapacityProfiler;
use super::pool::{ExercisePoolBuilder, PoolOutcome};
use super::template::TemplateSelector;
use crate::catalog::ExerciseCatalog;
use crate::config::{PlannerConfig, PlanningStrategy};

/// Consecutive day labels starting at `start`
#[must_use]
pub fn plan_days(start: Weekday, count: usize) -> Vec<Weekday> {
    iter::successors(Some(start), |day| Some(day.succ()))
        .take(count)
        .collect()
}

/// Count day types, keeping the order in which each first appears
#[must_use]
pub fn count_day_types(day_types: &[DayType]) -> Vec<(DayType, usize)> {
    let mut counts: Vec<(DayType, usize)> = Vec::new();
    for &day_type in day_types {
        match counts.iter_mut().find(|(seen, _)| *seen == day_type) {
            Some((_, count)) => *count += 1,
            None => counts.push((day_type, 1)),
        }
    }
    counts
}

/// Builds weekly schedules from profiles
#[derive(Debug, Clone, Copy)]
pub struct WorkoutScheduler<'a> {
    config: &'a PlannerConfig,
    catalog: &'a ExerciseCatalog,
}

impl<'a> WorkoutScheduler<'a> {
    /// Create a scheduler over validated tables and a catalog
    #[must_use]
    pub const fn new(config: &'a PlannerConfig, catalog: &'a ExerciseCatalog) -> Self {
        Self { config, catalog }
    }

    /// Build a schedule with a fixed seed; identical inputs give identical plans
    ///
    /// # Errors
    ///
    /// See [`Self::schedule`]
    pub fn schedule_seeded(&self, profile: &UserProfile, seed: u64) -> AppResult<WeeklySchedule> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.schedule(profile, &mut rng)
    }

    /// Build a schedule drawing randomness from `rng`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_PROFILE`/`VALUE_OUT_OF_RANGE` for a profile that fails
    /// validation and `CONFIG_MISSING` when a table entry the profile needs is
    /// absent
    pub fn schedule<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        rng: &mut R,
    ) -> AppResult<WeeklySchedule> {
        let assessment = CapacityProfiler::new(self.config).assess(profile)?;
        let template = TemplateSelector::new(self.config).select_template(
            profile.goal,
            profile.experience,
            profile.available_days,
            assessment.hiit_allowed,
        )?;
        let guidelines = *self.config.volume_guideline(profile.experience)?;

        let labels = plan_days(self.config.week_start, template.len());
        let mut warnings = Vec::new();
        let calendar: Vec<(Weekday, DayType)> = match self.config.strategy {
            PlanningStrategy::Template => labels.into_iter().zip(template).collect(),
            PlanningStrategy::Allocated => {
                let allocation = DayAllocator::new(self.config.constraints)
                    .allocate(&count_day_types(&template), &labels);
                warnings.extend(allocation.conflicts);
                allocation.days
            }
        };

        let builder = ExercisePoolBuilder::new(self.config, self.catalog);
        let mut days = Vec::with_capacity(calendar.len());
        for (day, day_type) in calendar {
            if !day_type.is_workout() {
                days.push(DayPlan::rest(day));
                continue;
            }

            let selection = builder.build_day(
                day_type,
                profile.experience,
                &profile.medical_conditions,
                &profile.injuries,
                rng,
            );
            match selection.outcome {
                PoolOutcome::Safe => {}
                PoolOutcome::Resampled(exercise_count) => {
                    warnings.push(ScheduleWarning::EmptyPoolFallback {
                        day,
                        day_type,
                        exercise_count,
                    });
                }
                PoolOutcome::LeftEmpty => {
                    warnings.push(ScheduleWarning::EmptySafeDay { day, day_type });
                }
            }
            days.push(DayPlan {
                day,
                day_type,
                exercises: selection.exercises,
            });
        }

        let schedule = WeeklySchedule {
            goal: profile.goal,
            experience: profile.experience,
            assessment,
            guidelines,
            days,
            warnings,
        };

        if schedule.has_warnings() {
            warn!(
                "Schedule built with {} warning(s) for {}/{}",
                schedule.warnings.len(),
                schedule.goal,
                schedule.experience
            );
        }
        info!(
            goal = %schedule.goal,
            experience = %schedule.experience,
            tier = %schedule.assessment.capacity_tier,
            workout_days = schedule.workout_days(),
            rest_days = schedule.rest_days(),
            "Weekly schedule built"
        );
        Ok(schedule)
    }
}
