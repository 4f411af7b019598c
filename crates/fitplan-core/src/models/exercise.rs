// ABOUTME: Exercise catalog entry model with category, subgroup, level, and contraindication tags
// ABOUTME: Volume is a tagged variant (sets and reps, timed, or unspecified) so callers pattern-match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::profile::ExperienceLevel;
use super::schedule::DayType;

/// Training modality of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Resistance work
    Strength,
    /// Steady-state aerobic work
    Cardio,
    /// Stretching, flows, soft tissue work
    Mobility,
    /// High-intensity intervals
    Hiit,
}

impl ExerciseCategory {
    /// Canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Mobility => "mobility",
            Self::Hiit => "hiit",
        }
    }

    /// Catalog category that feeds a day type (`None` for rest)
    #[must_use]
    pub const fn for_day_type(day_type: DayType) -> Option<Self> {
        match day_type {
            DayType::Strength => Some(Self::Strength),
            DayType::Cardio => Some(Self::Cardio),
            DayType::Mobility => Some(Self::Mobility),
            DayType::Hiit => Some(Self::Hiit),
            DayType::Rest => None,
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Muscle subgroup (strength) or impact band (cardio)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subgroup {
    /// Squats, hinges, lunges
    LowerBody,
    /// Presses
    UpperPush,
    /// Rows and pulls
    UpperPull,
    /// Trunk stability
    Core,
    /// Joint-friendly cardio
    LowImpact,
    /// Medium-impact cardio
    Moderate,
    /// Running and jumping cardio
    HighImpact,
}

impl Subgroup {
    /// Strength subgroups in the order a balanced day fills them
    pub const STRENGTH_BALANCE: [Self; 4] =
        [Self::LowerBody, Self::UpperPush, Self::UpperPull, Self::Core];

    /// Category this subgroup belongs to
    #[must_use]
    pub const fn category(&self) -> ExerciseCategory {
        match self {
            Self::LowerBody | Self::UpperPush | Self::UpperPull | Self::Core => {
                ExerciseCategory::Strength
            }
            Self::LowImpact | Self::Moderate | Self::HighImpact => ExerciseCategory::Cardio,
        }
    }

    /// Canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LowerBody => "lower_body",
            Self::UpperPush => "upper_push",
            Self::UpperPull => "upper_pull",
            Self::Core => "core",
            Self::LowImpact => "low_impact",
            Self::Moderate => "moderate",
            Self::HighImpact => "high_impact",
        }
    }
}

impl fmt::Display for Subgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load an exercise puts on the joints
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum JointStress {
    /// Minimal joint loading
    #[default]
    Low,
    /// Moderate joint loading
    Medium,
    /// Heavy or impact loading
    High,
}

/// Repetition prescription of a strength exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum RepTarget {
    /// Repetitions per set
    Reps {
        /// Lower bound
        min: u16,
        /// Upper bound
        max: u16,
    },
    /// Isometric hold per set, in seconds
    HoldSeconds {
        /// Lower bound
        min: u16,
        /// Upper bound
        max: u16,
    },
}

impl fmt::Display for RepTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reps { min, max } => write!(f, "{min}-{max}"),
            Self::HoldSeconds { min, max } => write!(f, "{min}-{max} sec"),
        }
    }
}

/// How much of an exercise to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Volume {
    /// Sets of repetitions (strength work)
    SetsReps {
        /// Number of working sets
        sets: u8,
        /// Target per set
        reps: RepTarget,
    },
    /// Continuous activity for a duration range
    Timed {
        /// Shortest session in minutes
        min_minutes: u16,
        /// Longest session in minutes
        max_minutes: u16,
    },
    /// Named activity with no prescribed volume
    Unspecified,
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetsReps { sets, reps } => write!(f, "{sets} x {reps}"),
            Self::Timed {
                min_minutes,
                max_minutes,
            } => write!(f, "{min_minutes}-{max_minutes} min"),
            Self::Unspecified => f.write_str("as tolerated"),
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Display name, unique within a catalog
    pub name: String,
    /// Training modality
    pub category: ExerciseCategory,
    /// Muscle subgroup or impact band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<Subgroup>,
    /// Experience required
    pub level: ExperienceLevel,
    /// Joint loading
    #[serde(default)]
    pub joint_stress: JointStress,
    /// Condition and injury tags that rule this exercise out
    #[serde(default)]
    pub avoid_if: BTreeSet<String>,
    /// Prescribed volume
    pub volume: Volume,
}

impl Exercise {
    /// Whether any of `tags` appears in this exercise's `avoid_if` set
    #[must_use]
    pub fn is_contraindicated(&self, tags: &BTreeSet<String>) -> bool {
        !self.avoid_if.is_disjoint(tags)
    }
}
