// ABOUTME: Exercise pool builder and safety filter for a single plan day
// ABOUTME: Balances strength days across subgroups, samples other days, and applies the empty-day fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Exercise Pool Builder
//!
//! Selection happens first and the safety filter second: a day is sampled
//! from the level-appropriate pool and only then are contraindicated entries
//! dropped. When that leaves nothing, the configured [`FallbackPolicy`]
//! decides what the day gets. All randomness comes from the caller's `Rng`.

use std::collections::BTreeSet;

use fitplan_core::models::{
    normalized_tags, DayType, Exercise, ExerciseCategory, ExperienceLevel, Subgroup,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::catalog::ExerciseCatalog;
use crate::config::{FallbackPolicy, PlannerConfig};

/// How a day's exercise list was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOutcome {
    /// Every exercise passed the safety filter
    Safe,
    /// The filter emptied the day; this many items came from the unfiltered pool
    Resampled(usize),
    /// The filter emptied the day and it was left without exercises
    LeftEmpty,
}

/// Exercises chosen for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySelection {
    /// Chosen exercises, in prescription order
    pub exercises: Vec<Exercise>,
    /// How they were chosen
    pub outcome: PoolOutcome,
}

impl DaySelection {
    const fn empty() -> Self {
        Self {
            exercises: Vec::new(),
            outcome: PoolOutcome::Safe,
        }
    }
}

/// Builds the exercise list of a day from the catalog
#[derive(Debug, Clone, Copy)]
pub struct ExercisePoolBuilder<'a> {
    config: &'a PlannerConfig,
    catalog: &'a ExerciseCatalog,
}

impl<'a> ExercisePoolBuilder<'a> {
    /// Create a builder over the given tables and catalog
    #[must_use]
    pub const fn new(config: &'a PlannerConfig, catalog: &'a ExerciseCatalog) -> Self {
        Self { config, catalog }
    }

    /// Candidate pool for a day type before any safety filtering
    ///
    /// Strength draws on the user's level plus beginner entries. Other day
    /// types use the exact level and fall back to beginner entries when that
    /// pool is empty.
    #[must_use]
    pub fn candidate_pool(
        &self,
        day_type: DayType,
        experience: ExperienceLevel,
    ) -> Vec<&'a Exercise> {
        let Some(category) = ExerciseCategory::for_day_type(day_type) else {
            return Vec::new();
        };

        if category == ExerciseCategory::Strength {
            return self
                .catalog
                .by_category(category)
                .filter(|exercise| {
                    exercise.level == experience || exercise.level == ExperienceLevel::Beginner
                })
                .collect();
        }

        let exact: Vec<&Exercise> = self.catalog.at_level(category, experience).collect();
        if exact.is_empty() && experience != ExperienceLevel::Beginner {
            debug!("No {category} entries at {experience}, falling back to beginner");
            return self
                .catalog
                .at_level(category, ExperienceLevel::Beginner)
                .collect();
        }
        exact
    }

    /// Select, filter and (if needed) backfill the exercises of one day
    ///
    /// `conditions` and `injuries` are matched against each entry's
    /// `avoid_if` tags after normalization; the `none` sentinel is ignored.
    pub fn build_day<R: Rng + ?Sized>(
        &self,
        day_type: DayType,
        experience: ExperienceLevel,
        conditions: &BTreeSet<String>,
        injuries: &BTreeSet<String>,
        rng: &mut R,
    ) -> DaySelection {
        let limit = self.config.day_limits.for_day_type(day_type);
        if limit == 0 {
            return DaySelection::empty();
        }

        let pool = self.candidate_pool(day_type, experience);
        if pool.is_empty() {
            warn!("No {day_type} exercises available for {experience}");
            return DaySelection::empty();
        }

        let selected = if day_type == DayType::Strength {
            Self::balanced_strength(&pool, limit, rng)
        } else {
            pool.choose_multiple(rng, limit).copied().collect()
        };

        let tags = normalized_tags(conditions.iter().chain(injuries));
        let safe: Vec<Exercise> = selected
            .into_iter()
            .filter(|exercise| !exercise.is_contraindicated(&tags))
            .cloned()
            .collect();

        if !safe.is_empty() {
            return DaySelection {
                exercises: safe,
                outcome: PoolOutcome::Safe,
            };
        }

        match self.config.fallback.policy {
            FallbackPolicy::ResampleUnfiltered => {
                let exercises: Vec<Exercise> = pool
                    .choose_multiple(rng, self.config.fallback.sample_size)
                    .map(|exercise| (*exercise).clone())
                    .collect();
                warn!(
                    "Safety filter emptied a {day_type} day; re-sampled {} unfiltered exercises",
                    exercises.len()
                );
                DaySelection {
                    outcome: PoolOutcome::Resampled(exercises.len()),
                    exercises,
                }
            }
            FallbackPolicy::LeaveEmpty => {
                warn!("Safety filter emptied a {day_type} day; leaving it without exercises");
                DaySelection {
                    exercises: Vec::new(),
                    outcome: PoolOutcome::LeftEmpty,
                }
            }
        }
    }

    /// One pick per strength subgroup, then random fill from the leftovers
    fn balanced_strength<R: Rng + ?Sized>(
        pool: &[&'a Exercise],
        limit: usize,
        rng: &mut R,
    ) -> Vec<&'a Exercise> {
        let mut picked: Vec<&Exercise> = Vec::with_capacity(limit);
        for subgroup in Subgroup::STRENGTH_BALANCE {
            if picked.len() == limit {
                break;
            }
            let candidates: Vec<&Exercise> = pool
                .iter()
                .copied()
                .filter(|exercise| exercise.subgroup == Some(subgroup))
                .collect();
            if let Some(&choice) = candidates.choose(rng) {
                picked.push(choice);
            }
        }

        let leftovers: Vec<&Exercise> = pool
            .iter()
            .copied()
            .filter(|exercise| !picked.iter().any(|chosen| chosen.name == exercise.name))
            .collect();
        let remaining = limit - picked.len();
        picked.extend(leftovers.choose_multiple(rng, remaining).copied());
        picked
    }
}
