// ABOUTME: Integration tests for the exercise pool builder and safety filter
// ABOUTME: Covers subgroup balance, level pools, contraindication filtering, and empty-day fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::{BTreeSet, HashSet};

use common::init_test_logging;
use fitplan::catalog::ExerciseCatalog;
use fitplan::config::{FallbackPolicy, PlannerConfig};
use fitplan::intelligence::{ExercisePoolBuilder, PoolOutcome};
use fitplan::models::{DayType, ExperienceLevel, Subgroup};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|tag| (*tag).to_owned()).collect()
}

#[test]
fn test_strength_day_covers_every_subgroup_first() {
    init_test_logging();
    let config = PlannerConfig::default();
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let selection = builder.build_day(
            DayType::Strength,
            ExperienceLevel::Beginner,
            &BTreeSet::new(),
            &BTreeSet::new(),
            &mut rng,
        );

        assert_eq!(selection.outcome, PoolOutcome::Safe);
        assert_eq!(selection.exercises.len(), config.day_limits.strength);
        for (exercise, subgroup) in selection.exercises.iter().zip(Subgroup::STRENGTH_BALANCE) {
            assert_eq!(exercise.subgroup, Some(subgroup), "seed {seed}");
        }
        let names: HashSet<&str> = selection.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names.len(), selection.exercises.len(), "duplicate pick, seed {seed}");
        assert!(selection
            .exercises
            .iter()
            .all(|exercise| exercise.level == ExperienceLevel::Beginner));
    }
}

#[test]
fn test_strength_pool_includes_beginner_entries_for_experienced_users() {
    init_test_logging();
    let config = PlannerConfig::default();
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    let pool = builder.candidate_pool(DayType::Strength, ExperienceLevel::Intermediate);
    assert!(pool.iter().any(|e| e.level == ExperienceLevel::Beginner));
    assert!(pool.iter().any(|e| e.level == ExperienceLevel::Intermediate));
    assert!(pool.iter().all(|e| e.level != ExperienceLevel::Advanced));
}

#[test]
fn test_cardio_uses_exact_level() {
    init_test_logging();
    let config = PlannerConfig::default();
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let selection = builder.build_day(
        DayType::Cardio,
        ExperienceLevel::Intermediate,
        &BTreeSet::new(),
        &BTreeSet::new(),
        &mut rng,
    );
    assert_eq!(selection.exercises.len(), config.day_limits.cardio);
    assert!(selection
        .exercises
        .iter()
        .all(|e| e.subgroup == Some(Subgroup::Moderate)));
}

#[test]
fn test_mobility_falls_back_to_beginner_pool() {
    init_test_logging();
    let config = PlannerConfig::default();
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let selection = builder.build_day(
        DayType::Mobility,
        ExperienceLevel::Advanced,
        &BTreeSet::new(),
        &BTreeSet::new(),
        &mut rng,
    );
    assert_eq!(selection.exercises.len(), config.day_limits.mobility);
    assert!(selection
        .exercises
        .iter()
        .all(|e| e.level == ExperienceLevel::Beginner));
}

#[test]
fn test_rest_day_is_empty() {
    init_test_logging();
    let config = PlannerConfig::default();
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let selection = builder.build_day(
        DayType::Rest,
        ExperienceLevel::Advanced,
        &BTreeSet::new(),
        &BTreeSet::new(),
        &mut rng,
    );
    assert!(selection.exercises.is_empty());
    assert_eq!(selection.outcome, PoolOutcome::Safe);
}

#[test]
fn test_injuries_remove_contraindicated_exercises() {
    init_test_logging();
    let config = PlannerConfig::default();
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);
    let injuries = tags(&["Shoulder", "knee"]);

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let selection = builder.build_day(
            DayType::Strength,
            ExperienceLevel::Intermediate,
            &BTreeSet::new(),
            &injuries,
            &mut rng,
        );
        assert_eq!(selection.outcome, PoolOutcome::Safe);
        assert!(!selection.exercises.is_empty());
        for exercise in &selection.exercises {
            assert!(!exercise.avoid_if.contains("shoulder"), "{}", exercise.name);
            assert!(!exercise.avoid_if.contains("knee"), "{}", exercise.name);
        }
    }
}

#[test]
fn test_emptied_hiit_day_resamples_unfiltered() {
    init_test_logging();
    let config = PlannerConfig::default();
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    // Both intermediate HIIT entries avoid cardiac
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let selection = builder.build_day(
        DayType::Hiit,
        ExperienceLevel::Intermediate,
        &tags(&["cardiac"]),
        &BTreeSet::new(),
        &mut rng,
    );

    assert_eq!(selection.outcome, PoolOutcome::Resampled(2));
    assert_eq!(selection.exercises.len(), 2);
    assert!(selection.exercises.len() <= config.fallback.sample_size);
}

#[test]
fn test_fallback_sample_size_is_respected() {
    init_test_logging();
    let mut config = PlannerConfig::default();
    config.fallback.sample_size = 1;
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let selection = builder.build_day(
        DayType::Hiit,
        ExperienceLevel::Intermediate,
        &tags(&["cardiac"]),
        &BTreeSet::new(),
        &mut rng,
    );
    assert_eq!(selection.outcome, PoolOutcome::Resampled(1));
    assert_eq!(selection.exercises.len(), 1);
}

#[test]
fn test_leave_empty_policy() {
    init_test_logging();
    let mut config = PlannerConfig::default();
    config.fallback.policy = FallbackPolicy::LeaveEmpty;
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let selection = builder.build_day(
        DayType::Hiit,
        ExperienceLevel::Intermediate,
        &tags(&["cardiac"]),
        &BTreeSet::new(),
        &mut rng,
    );
    assert_eq!(selection.outcome, PoolOutcome::LeftEmpty);
    assert!(selection.exercises.is_empty());
}

#[test]
fn test_day_limit_caps_strength_balance() {
    init_test_logging();
    let mut config = PlannerConfig::default();
    config.day_limits.strength = 2;
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let selection = builder.build_day(
        DayType::Strength,
        ExperienceLevel::Beginner,
        &BTreeSet::new(),
        &BTreeSet::new(),
        &mut rng,
    );
    let subgroups: Vec<_> = selection.exercises.iter().map(|e| e.subgroup).collect();
    assert_eq!(
        subgroups,
        vec![Some(Subgroup::LowerBody), Some(Subgroup::UpperPush)]
    );
}

#[test]
fn test_same_seed_same_selection() {
    init_test_logging();
    let config = PlannerConfig::default();
    let catalog = ExerciseCatalog::builtin();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    let pick = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        builder.build_day(
            DayType::Strength,
            ExperienceLevel::Advanced,
            &BTreeSet::new(),
            &BTreeSet::new(),
            &mut rng,
        )
    };
    assert_eq!(pick(99), pick(99));
}

#[test]
fn test_external_catalog_tags_match_regardless_of_case() {
    init_test_logging();
    let config = PlannerConfig::default();
    let catalog = ExerciseCatalog::from_json(
        r#"{
            "version": "mixed-case",
            "exercises": [
                {
                    "name": "Box Jumps",
                    "category": "cardio",
                    "level": "beginner",
                    "avoid_if": [" Knee "],
                    "volume": {"kind": "unspecified"}
                }
            ]
        }"#,
    )
    .unwrap();
    let builder = ExercisePoolBuilder::new(&config, &catalog);

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let selection = builder.build_day(
        DayType::Cardio,
        ExperienceLevel::Beginner,
        &BTreeSet::new(),
        &tags(&["knee"]),
        &mut rng,
    );
    assert_eq!(selection.outcome, PoolOutcome::Resampled(1));
    assert_eq!(selection.exercises[0].name, "Box Jumps");
}
