// ABOUTME: Integration tests for the exercise catalog
// ABOUTME: Covers the built-in dataset, external JSON catalogs, validation, and lookup queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::fs;

use common::init_test_logging;
use fitplan::catalog::{ExerciseCatalog, CATALOG_PATH_ENV};
use fitplan::errors::ErrorCode;
use fitplan::models::{ExerciseCategory, ExperienceLevel, JointStress, Subgroup, Volume};
use serial_test::serial;
use tempfile::TempDir;

const SMALL_CATALOG: &str = r#"{
    "version": "test-1",
    "exercises": [
        {
            "name": "Wall Sit",
            "category": "strength",
            "subgroup": "lower_body",
            "level": "beginner",
            "joint_stress": "medium",
            "avoid_if": ["knee"],
            "volume": {"kind": "sets_reps", "sets": 3, "reps": {"unit": "hold_seconds", "min": 20, "max": 40}}
        },
        {
            "name": "Tai Chi",
            "category": "mobility",
            "level": "beginner",
            "volume": {"kind": "unspecified"}
        }
    ]
}"#;

#[test]
fn test_builtin_dataset_shape() {
    init_test_logging();
    let catalog = ExerciseCatalog::builtin();

    assert!(!catalog.is_empty());
    assert_eq!(catalog.len(), catalog.exercises().len());
    for category in [
        ExerciseCategory::Strength,
        ExerciseCategory::Cardio,
        ExerciseCategory::Mobility,
        ExerciseCategory::Hiit,
    ] {
        assert!(catalog.by_category(category).next().is_some(), "{category}");
    }
    assert!(catalog
        .by_category(ExerciseCategory::Mobility)
        .all(|exercise| exercise.level == ExperienceLevel::Beginner));
    assert_eq!(
        catalog
            .at_level(ExerciseCategory::Hiit, ExperienceLevel::Beginner)
            .count(),
        0
    );
}

#[test]
fn test_find_is_case_insensitive() {
    init_test_logging();
    let catalog = ExerciseCatalog::builtin();

    let plank = catalog.find("  PLANK ").unwrap();
    assert_eq!(plank.name, "Plank");
    assert_eq!(plank.subgroup, Some(Subgroup::Core));
    assert!(catalog.find("Underwater Basket Weaving").is_none());
}

#[test]
fn test_from_json_accepts_optional_fields() {
    init_test_logging();
    let catalog = ExerciseCatalog::from_json(SMALL_CATALOG).unwrap();

    assert_eq!(catalog.version(), "test-1");
    assert_eq!(catalog.len(), 2);
    let tai_chi = catalog.find("tai chi").unwrap();
    assert_eq!(tai_chi.subgroup, None);
    assert_eq!(tai_chi.joint_stress, JointStress::Low);
    assert!(tai_chi.avoid_if.is_empty());
    assert_eq!(tai_chi.volume, Volume::Unspecified);
    assert_eq!(catalog.by_subgroup(Subgroup::LowerBody).count(), 1);
}

#[test]
fn test_avoid_tags_are_normalized_on_load() {
    init_test_logging();
    let json = SMALL_CATALOG.replace(r#"["knee"]"#, r#"["Knee ", "NONE", "Joint_Issues"]"#);
    let catalog = ExerciseCatalog::from_json(&json).unwrap();

    let wall_sit = catalog.find("wall sit").unwrap();
    let expected: Vec<&str> = vec!["joint_issues", "knee"];
    assert_eq!(
        wall_sit.avoid_if.iter().map(String::as_str).collect::<Vec<_>>(),
        expected
    );

    let rebuilt = ExerciseCatalog::new("copy", vec![wall_sit.clone()]).unwrap();
    assert_eq!(rebuilt.exercises()[0].avoid_if, wall_sit.avoid_if);
}

#[test]
fn test_malformed_json_is_serialization_error() {
    init_test_logging();
    let err = ExerciseCatalog::from_json("{\"version\": 1").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_duplicate_names_are_rejected() {
    init_test_logging();
    let plank = ExerciseCatalog::builtin().find("plank").cloned().unwrap();
    let err = ExerciseCatalog::new("dupes", vec![plank.clone(), plank]).unwrap_err();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("Plank"), "{}", err.message);
}

#[test]
fn test_blank_name_is_rejected() {
    init_test_logging();
    let mut plank = ExerciseCatalog::builtin().find("plank").cloned().unwrap();
    plank.name = "   ".to_owned();

    let err = ExerciseCatalog::new("blank", vec![plank]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_load_reads_catalog_path_env() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, SMALL_CATALOG).unwrap();

    env::set_var(CATALOG_PATH_ENV, &path);
    let loaded = ExerciseCatalog::load();
    env::remove_var(CATALOG_PATH_ENV);

    assert_eq!(loaded.unwrap().version(), "test-1");
}

#[test]
#[serial]
fn test_load_without_env_is_builtin() {
    init_test_logging();
    env::remove_var(CATALOG_PATH_ENV);

    let catalog = ExerciseCatalog::load().unwrap();
    assert_eq!(catalog, ExerciseCatalog::builtin());
}

#[test]
#[serial]
fn test_unreadable_catalog_path_is_config_error() {
    init_test_logging();
    let dir = TempDir::new().unwrap();

    env::set_var(CATALOG_PATH_ENV, dir.path().join("missing.json"));
    let err = ExerciseCatalog::load().unwrap_err();
    env::remove_var(CATALOG_PATH_ENV);

    assert_eq!(err.code, ErrorCode::ConfigError);
}
