// ABOUTME: Capacity assessment model derived from a user profile
// ABOUTME: Capacity tiers, ordinal intensity caps, BMI classification, and session quotas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::bmi::{HEALTHY_BELOW, OVERWEIGHT_BELOW, UNDERWEIGHT_BELOW};

/// Coarse bucket for how much training load a user can absorb
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityTier {
    /// Conservative load
    Low,
    /// Moderate load
    Medium,
    /// Full load
    High,
}

impl CapacityTier {
    /// Every tier, lowest first
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for CapacityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal ceiling on how strenuous prescribed work may be
///
/// Ordering is `Low < Medium < High`, so the most restrictive of two caps is
/// simply `a.min(b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Easy effort only
    Low,
    /// Up to moderate effort
    Medium,
    /// Unrestricted
    High,
}

impl IntensityLevel {
    /// Canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for IntensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WHO-style BMI band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 to below 25
    Healthy,
    /// 25 to below 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < HEALTHY_BELOW {
            Self::Healthy
        } else if bmi < OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

/// Inclusive session length range in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDuration {
    /// Shortest session
    pub min_minutes: u16,
    /// Longest session
    pub max_minutes: u16,
}

/// Result of profiling a user; computed once per scheduling request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityAssessment {
    /// Body mass index, rounded to two decimals
    pub bmi: f64,
    /// BMI band
    pub bmi_category: BmiCategory,
    /// Sum of the age, BMI and experience scores
    pub capacity_score: u8,
    /// Load bucket
    pub capacity_tier: CapacityTier,
    /// Effective intensity ceiling after experience and medical overrides
    pub intensity_cap: IntensityLevel,
    /// Whether HIIT days may appear in the plan
    pub hiit_allowed: bool,
    /// Upper bound on training sessions per week
    pub max_workouts_per_week: u8,
    /// Rest days the tier asks for
    pub mandatory_rest_days: u8,
    /// Recommended session length
    pub session_duration: SessionDuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_min_is_most_restrictive() {
        assert_eq!(
            IntensityLevel::High.min(IntensityLevel::Medium),
            IntensityLevel::Medium
        );
        assert_eq!(
            IntensityLevel::Low.min(IntensityLevel::High),
            IntensityLevel::Low
        );
    }

    #[test]
    fn test_bmi_bands() {
        assert_eq!(BmiCategory::from_bmi(17.9), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Healthy);
        assert_eq!(BmiCategory::from_bmi(27.4), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }
}
