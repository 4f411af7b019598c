// ABOUTME: User profile model consumed read-only by the scheduling engine
// ABOUTME: Experience level and goal enums, health tag normalization, and profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::profile_bounds::{
    MAX_AGE, MAX_AVAILABLE_DAYS, MIN_AGE, MIN_AVAILABLE_DAYS, NO_TAG_SENTINEL,
};
use crate::errors::{AppError, AppResult};

/// Training experience of the user
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Years of consistent training
    Advanced,
}

impl ExperienceLevel {
    /// Every level, least to most experienced
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_format(format!(
                "unknown experience level '{other}'"
            ))),
        }
    }
}

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Hypertrophy focus
    MuscleGain,
    /// Body composition focus
    FatLoss,
    /// Balanced conditioning
    GeneralFitness,
    /// Aerobic capacity focus
    Endurance,
    /// Range of motion focus
    MobilityFlexibility,
}

impl Goal {
    /// Every supported goal
    pub const ALL: [Self; 5] = [
        Self::MuscleGain,
        Self::FatLoss,
        Self::GeneralFitness,
        Self::Endurance,
        Self::MobilityFlexibility,
    ];

    /// Canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MuscleGain => "muscle_gain",
            Self::FatLoss => "fat_loss",
            Self::GeneralFitness => "general_fitness",
            Self::Endurance => "endurance",
            Self::MobilityFlexibility => "mobility_flexibility",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_format(format!("unknown goal '{normalized}'")))
    }
}

/// Normalize a free-form condition or injury tag (`" Knee "` -> `"knee"`)
#[must_use]
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Normalize a tag collection, dropping blanks and the `none` sentinel
pub fn normalized_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| normalize_tag(tag.as_ref()))
        .filter(|tag| !tag.is_empty() && tag != NO_TAG_SENTINEL)
        .collect()
}

/// Physical profile and preferences of the user requesting a plan
///
/// Built by the form layer and handed to the engine, which never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Height in centimetres
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Training experience
    pub experience: ExperienceLevel,
    /// Primary goal
    pub goal: Goal,
    /// Medical condition tags (e.g. `cardiac`, `hypertension`)
    #[serde(default)]
    pub medical_conditions: BTreeSet<String>,
    /// Injury tags (e.g. `knee`, `shoulder`)
    #[serde(default)]
    pub injuries: BTreeSet<String>,
    /// Number of days the plan must cover
    pub available_days: u8,
}

impl UserProfile {
    /// Create a profile without conditions or injuries
    #[must_use]
    pub fn new(
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        experience: ExperienceLevel,
        goal: Goal,
        available_days: u8,
    ) -> Self {
        Self {
            age,
            height_cm,
            weight_kg,
            experience,
            goal,
            medical_conditions: BTreeSet::new(),
            injuries: BTreeSet::new(),
            available_days,
        }
    }

    /// Replace the medical condition tags
    #[must_use]
    pub fn with_medical_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.medical_conditions = conditions
            .into_iter()
            .map(|tag| normalize_tag(tag.as_ref()))
            .collect();
        self
    }

    /// Replace the injury tags
    #[must_use]
    pub fn with_injuries<I, S>(mut self, injuries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.injuries = injuries
            .into_iter()
            .map(|tag| normalize_tag(tag.as_ref()))
            .collect();
        self
    }

    /// Medical conditions, normalized, without the `none` sentinel
    #[must_use]
    pub fn condition_tags(&self) -> BTreeSet<String> {
        normalized_tags(&self.medical_conditions)
    }

    /// Conditions and injuries combined, normalized, without the `none` sentinel
    #[must_use]
    pub fn health_tags(&self) -> BTreeSet<String> {
        normalized_tags(self.medical_conditions.iter().chain(&self.injuries))
    }

    /// Check numeric fields against their documented ranges
    ///
    /// # Errors
    ///
    /// Returns an `INVALID_PROFILE` error for non-positive or non-finite height
    /// and weight, and `VALUE_OUT_OF_RANGE` for age or available days outside
    /// their bounds. Values are never clamped.
    pub fn validate(&self) -> AppResult<()> {
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_profile(format!(
                "height_cm must be a positive number, got {}",
                self.height_cm
            )));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_profile(format!(
                "weight_kg must be a positive number, got {}",
                self.weight_kg
            )));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::value_out_of_range(
                "age",
                self.age,
                &format!("{MIN_AGE}..={MAX_AGE}"),
            ));
        }
        if !(MIN_AVAILABLE_DAYS..=MAX_AVAILABLE_DAYS).contains(&self.available_days) {
            return Err(AppError::value_out_of_range(
                "available_days",
                self.available_days,
                &format!("{MIN_AVAILABLE_DAYS}..={MAX_AVAILABLE_DAYS}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn sample() -> UserProfile {
        UserProfile::new(
            30,
            175.0,
            72.0,
            ExperienceLevel::Intermediate,
            Goal::GeneralFitness,
            5,
        )
    }

    #[test]
    fn test_goal_round_trip_through_str() {
        for goal in Goal::ALL {
            assert_eq!(goal.as_str().parse::<Goal>().unwrap(), goal);
        }
        assert!("yoga".parse::<Goal>().is_err());
        assert_eq!(
            " Advanced ".parse::<ExperienceLevel>().unwrap(),
            ExperienceLevel::Advanced
        );
    }

    #[test]
    fn test_health_tags_drop_sentinel_and_normalize() {
        let profile = sample()
            .with_medical_conditions(["Cardiac", "none"])
            .with_injuries([" knee ", ""]);
        let tags = profile.health_tags();
        assert_eq!(
            tags.into_iter().collect::<Vec<_>>(),
            vec!["cardiac".to_owned(), "knee".to_owned()]
        );
        assert_eq!(profile.condition_tags().len(), 1);
    }

    #[test]
    fn test_normalized_tags_accepts_borrowed_and_owned() {
        let borrowed = normalized_tags([" Back", "NONE", "  "]);
        let owned = normalized_tags(vec!["back".to_owned(), "Back ".to_owned()]);
        assert_eq!(borrowed, owned);
        assert_eq!(borrowed.len(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        assert!(sample().validate().is_ok());

        let mut profile = sample();
        profile.height_cm = 0.0;
        assert_eq!(profile.validate().unwrap_err().code, ErrorCode::InvalidProfile);

        let mut profile = sample();
        profile.weight_kg = -3.0;
        assert_eq!(profile.validate().unwrap_err().code, ErrorCode::InvalidProfile);

        let mut profile = sample();
        profile.weight_kg = f64::NAN;
        assert_eq!(profile.validate().unwrap_err().code, ErrorCode::InvalidProfile);

        let mut profile = sample();
        profile.available_days = 8;
        assert_eq!(profile.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);

        let mut profile = sample();
        profile.age = 4;
        assert_eq!(profile.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
    }
}
