// ABOUTME: Weekly schedule models produced by the scheduling engine
// ABOUTME: Day types, per-day plans, volume guidelines, and soft scheduling warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::capacity::CapacityAssessment;
use super::exercise::{Exercise, RepTarget};
use super::profile::{ExperienceLevel, Goal};
use crate::errors::AppError;

/// Category assigned to a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Resistance training
    Strength,
    /// Aerobic conditioning
    Cardio,
    /// Flexibility and recovery work
    Mobility,
    /// High-intensity intervals
    #[serde(alias = "HIIT")]
    Hiit,
    /// No prescribed training
    Rest,
}

impl DayType {
    /// Canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Mobility => "mobility",
            Self::Hiit => "hiit",
            Self::Rest => "rest",
        }
    }

    /// Placement priority used by the day allocator (lower places first)
    #[must_use]
    pub const fn allocation_priority(&self) -> u8 {
        match self {
            Self::Strength => 0,
            Self::Cardio => 1,
            Self::Mobility => 2,
            Self::Hiit => 3,
            Self::Rest => 4,
        }
    }

    /// Whether adjacency rules apply to this day type
    #[must_use]
    pub const fn is_high_intensity(&self) -> bool {
        matches!(self, Self::Hiit)
    }

    /// Whether this day carries training
    #[must_use]
    pub const fn is_workout(&self) -> bool {
        !matches!(self, Self::Rest)
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "cardio" => Ok(Self::Cardio),
            "mobility" => Ok(Self::Mobility),
            "hiit" => Ok(Self::Hiit),
            "rest" => Ok(Self::Rest),
            other => Err(AppError::invalid_format(format!("unknown day type '{other}'"))),
        }
    }
}

/// Inclusive rest interval between sets, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestInterval {
    /// Shortest rest
    pub min_seconds: u16,
    /// Longest rest
    pub max_seconds: u16,
}

/// Default set/rep/rest scheme for an experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeGuideline {
    /// Working sets per exercise
    pub sets: u8,
    /// Target per set
    pub reps: RepTarget,
    /// Rest between sets
    pub rest: RestInterval,
}

/// One calendar day of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Calendar label
    pub day: Weekday,
    /// Category of the day
    pub day_type: DayType,
    /// Chosen exercises, in prescription order
    pub exercises: Vec<Exercise>,
}

impl DayPlan {
    /// A rest day
    #[must_use]
    pub const fn rest(day: Weekday) -> Self {
        Self {
            day,
            day_type: DayType::Rest,
            exercises: Vec::new(),
        }
    }
}

/// Non-fatal condition recorded while building a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleWarning {
    /// The safety filter emptied a day and exercises were re-sampled from the
    /// unfiltered pool, so some may be contraindicated
    EmptyPoolFallback {
        /// Affected day
        day: Weekday,
        /// Affected day type
        day_type: DayType,
        /// Exercises placed by the fallback
        exercise_count: usize,
    },
    /// The safety filter emptied a day and it was left without exercises
    EmptySafeDay {
        /// Affected day
        day: Weekday,
        /// Affected day type
        day_type: DayType,
    },
    /// The allocator could not honour adjacency rules for a workout
    AllocationConflict {
        /// Workout that was placed in violation (or dropped)
        day_type: DayType,
        /// Where it landed; `None` when every day was already taken
        placed_on: Option<Weekday>,
    },
}

impl ScheduleWarning {
    /// Day the warning refers to, if any
    #[must_use]
    pub const fn day(&self) -> Option<Weekday> {
        match self {
            Self::EmptyPoolFallback { day, .. } | Self::EmptySafeDay { day, .. } => Some(*day),
            Self::AllocationConflict { placed_on, .. } => *placed_on,
        }
    }
}

/// The engine's output: one day plan per requested day plus metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// Goal the plan was built for
    pub goal: Goal,
    /// Experience level the plan was built for
    pub experience: ExperienceLevel,
    /// Capacity assessment that shaped the plan
    pub assessment: CapacityAssessment,
    /// Default set/rep/rest scheme for strength work
    pub guidelines: VolumeGuideline,
    /// Day plans in calendar order
    pub days: Vec<DayPlan>,
    /// Soft conditions raised while building the plan
    #[serde(default)]
    pub warnings: Vec<ScheduleWarning>,
}

impl WeeklySchedule {
    /// Number of days carrying training
    #[must_use]
    pub fn workout_days(&self) -> usize {
        self.days
            .iter()
            .filter(|day| day.day_type.is_workout())
            .count()
    }

    /// Number of rest days
    #[must_use]
    pub fn rest_days(&self) -> usize {
        self.days.len() - self.workout_days()
    }

    /// Whether any soft condition was recorded
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// How many days of each type the plan contains
    #[must_use]
    pub fn day_type_counts(&self) -> BTreeMap<DayType, usize> {
        let mut counts = BTreeMap::new();
        for day in &self.days {
            *counts.entry(day.day_type).or_insert(0) += 1;
        }
        counts
    }

    /// Plan for a given calendar day
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == weekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_parsing_accepts_upper_case_hiit() {
        assert_eq!("HIIT".parse::<DayType>().unwrap(), DayType::Hiit);
        let parsed: DayType = serde_json::from_str("\"HIIT\"").unwrap();
        assert_eq!(parsed, DayType::Hiit);
        assert!("yoga".parse::<DayType>().is_err());
    }

    #[test]
    fn test_allocation_priority_order() {
        let mut types = vec![DayType::Hiit, DayType::Mobility, DayType::Strength, DayType::Cardio];
        types.sort_by_key(DayType::allocation_priority);
        assert_eq!(
            types,
            vec![DayType::Strength, DayType::Cardio, DayType::Mobility, DayType::Hiit]
        );
    }

    #[test]
    fn test_warning_serialization_is_tagged() {
        let warning = ScheduleWarning::AllocationConflict {
            day_type: DayType::Hiit,
            placed_on: Some(Weekday::Fri),
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "allocation_conflict");
        assert_eq!(json["day_type"], "hiit");
        assert_eq!(warning.day(), Some(Weekday::Fri));
    }
}
