// ABOUTME: Built-in exercise dataset shipped with the planner
// ABOUTME: Strength, cardio, mobility, and HIIT entries with levels, joint stress, and avoid tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

use fitplan_core::models::{
    Exercise, ExerciseCategory, ExperienceLevel, JointStress, RepTarget, Subgroup, Volume,
};

use ExperienceLevel::{Advanced, Beginner, Intermediate};
use JointStress::{Low, Medium};

/// Version of the built-in dataset
pub const BUILTIN_VERSION: &str = "2025.1";

fn entry(
    name: &str,
    category: ExerciseCategory,
    subgroup: Option<Subgroup>,
    level: ExperienceLevel,
    joint_stress: JointStress,
    avoid_if: &[&str],
    volume: Volume,
) -> Exercise {
    Exercise {
        name: name.to_owned(),
        category,
        subgroup,
        level,
        joint_stress,
        avoid_if: avoid_if.iter().map(|tag| (*tag).to_owned()).collect(),
        volume,
    }
}

fn lift(
    name: &str,
    subgroup: Subgroup,
    level: ExperienceLevel,
    stress: JointStress,
    avoid_if: &[&str],
    (sets, min, max): (u8, u16, u16),
) -> Exercise {
    let volume = Volume::SetsReps {
        sets,
        reps: RepTarget::Reps { min, max },
    };
    entry(
        name,
        ExerciseCategory::Strength,
        Some(subgroup),
        level,
        stress,
        avoid_if,
        volume,
    )
}

const fn timed(min_minutes: u16, max_minutes: u16) -> Volume {
    Volume::Timed {
        min_minutes,
        max_minutes,
    }
}

fn strength() -> Vec<Exercise> {
    use Subgroup::{Core, LowerBody, UpperPull, UpperPush};

    vec![
        lift("Bodyweight Squat", LowerBody, Beginner, Medium, &["joint_issues"], (3, 12, 15)),
        lift("Goblet Squat", LowerBody, Intermediate, Medium, &["joint_issues"], (4, 8, 12)),
        lift("Leg Press", LowerBody, Beginner, Medium, &["joint_issues"], (3, 10, 12)),
        lift("Glute Bridge", LowerBody, Beginner, Low, &[], (3, 12, 15)),
        lift("Hip Thrust", LowerBody, Intermediate, Medium, &[], (4, 8, 12)),
        lift("Romanian Deadlift", LowerBody, Intermediate, Medium, &["back"], (4, 6, 10)),
        lift("Step-ups", LowerBody, Beginner, Medium, &["knee"], (3, 10, 12)),
        lift("Split Squat", LowerBody, Intermediate, Medium, &["knee"], (3, 8, 10)),
        lift("Push-ups", UpperPush, Beginner, Low, &["shoulder"], (3, 8, 12)),
        lift("Incline Push-ups", UpperPush, Beginner, Low, &["shoulder"], (3, 10, 15)),
        lift("Bench Press", UpperPush, Intermediate, Medium, &["shoulder"], (4, 6, 10)),
        lift("Dumbbell Bench Press", UpperPush, Intermediate, Medium, &["shoulder"], (4, 8, 12)),
        lift("Dumbbell Shoulder Press", UpperPush, Intermediate, Medium, &["shoulder"], (3, 8, 12)),
        lift("Machine Chest Press", UpperPush, Beginner, Low, &["shoulder"], (3, 10, 12)),
        lift("Lat Pulldown", UpperPull, Beginner, Low, &[], (3, 10, 12)),
        lift("Seated Cable Row", UpperPull, Beginner, Low, &[], (3, 10, 12)),
        lift("Dumbbell Row", UpperPull, Intermediate, Medium, &["back"], (4, 8, 12)),
        lift("Assisted Pull-ups", UpperPull, Intermediate, Medium, &["shoulder"], (3, 6, 10)),
        lift("Face Pulls", UpperPull, Beginner, Low, &[], (3, 12, 15)),
        entry(
            "Plank",
            ExerciseCategory::Strength,
            Some(Core),
            Beginner,
            Low,
            &[],
            Volume::SetsReps {
                sets: 3,
                reps: RepTarget::HoldSeconds { min: 30, max: 45 },
            },
        ),
        lift("Dead Bug", Core, Beginner, Low, &[], (3, 10, 12)),
        lift("Bird Dog", Core, Beginner, Low, &[], (3, 10, 12)),
        lift("Hanging Knee Raises", Core, Intermediate, Medium, &["back"], (3, 8, 12)),
        lift("Cable Crunch", Core, Intermediate, Low, &[], (3, 12, 15)),
    ]
}

fn cardio() -> Vec<Exercise> {
    use Subgroup::{HighImpact, LowImpact, Moderate};

    let row = |name, subgroup, level, stress, avoid_if: &[&str], (min, max)| {
        entry(
            name,
            ExerciseCategory::Cardio,
            Some(subgroup),
            level,
            stress,
            avoid_if,
            timed(min, max),
        )
    };

    vec![
        row("Brisk Walking", LowImpact, Beginner, Low, &[], (20, 40)),
        row("Cycling", LowImpact, Beginner, Low, &[], (30, 45)),
        row("Stationary Bike", LowImpact, Beginner, Low, &[], (30, 45)),
        row("Elliptical", LowImpact, Beginner, Low, &[], (20, 30)),
        row("Swimming", LowImpact, Beginner, Low, &[], (20, 30)),
        row("Jogging", Moderate, Intermediate, Medium, &["joint_issues"], (20, 30)),
        row("Rowing Machine", Moderate, Intermediate, Medium, &["back"], (15, 25)),
        row("Stair Climber", Moderate, Intermediate, Medium, &["knee"], (15, 20)),
        row("Running", HighImpact, Advanced, JointStress::High, &["joint_issues"], (20, 30)),
        row("Jump Rope", HighImpact, Advanced, JointStress::High, &["joint_issues"], (10, 15)),
        row("Sprint Intervals", HighImpact, Advanced, JointStress::High, &["cardiac"], (10, 15)),
    ]
}

fn mobility() -> Vec<Exercise> {
    [
        ("Dynamic Stretching", (10, 15)),
        ("Hip Mobility Flow", (10, 15)),
        ("Shoulder Mobility Flow", (10, 15)),
        ("Hamstring Stretch", (5, 10)),
        ("Yoga Flow", (20, 30)),
        ("Foam Rolling", (10, 15)),
    ]
    .into_iter()
    .map(|(name, (min, max))| {
        entry(
            name,
            ExerciseCategory::Mobility,
            None,
            Beginner,
            Low,
            &[],
            timed(min, max),
        )
    })
    .collect()
}

fn hiit() -> Vec<Exercise> {
    let row = |name, level, stress, avoid_if: &[&str], (min, max)| {
        entry(
            name,
            ExerciseCategory::Hiit,
            None,
            level,
            stress,
            avoid_if,
            timed(min, max),
        )
    };

    vec![
        row("Bike Intervals", Intermediate, Low, &["cardiac", "hypertension"], (15, 20)),
        row("Bodyweight Circuit", Intermediate, Medium, &["joint_issues", "cardiac"], (15, 20)),
        row("Kettlebell Swings", Advanced, Medium, &["back"], (10, 15)),
        row("Battle Ropes", Advanced, Medium, &["shoulder"], (10, 15)),
    ]
}

/// Every built-in entry, grouped by category
pub(super) fn builtin_exercises() -> Vec<Exercise> {
    let mut exercises = strength();
    exercises.extend(cardio());
    exercises.extend(mobility());
    exercises.extend(hiit());
    exercises
}
