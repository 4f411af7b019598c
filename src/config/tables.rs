// ABOUTME: Planner lookup tables: capacity tiers, experience modifiers, medical rules, templates
// ABOUTME: Built-in defaults, typed lookups that fail with configuration errors, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Planner Configuration Tables
//!
//! Every rule the scheduling engine applies lives in [`PlannerConfig`]. The
//! object is built once at process start, validated, and then passed by
//! reference to the profiler, template selector, pool builder and allocator.
//! Nothing in the engine mutates it.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::mem;
use std::str::FromStr;

use chrono::Weekday;
use fitplan_core::constants::{day_limits, fallback, templates::CANONICAL_LENGTH};
use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{
    normalize_tag, CapacityTier, DayType, ExperienceLevel, Goal, IntensityLevel, RepTarget,
    RestInterval, SessionDuration, VolumeGuideline,
};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Restriction tag that disables HIIT when present on a medical rule
pub const HIIT_RESTRICTION: &str = "hiit";

/// Score bands for one profiling axis
///
/// A value below `top_below` scores 3, below `mid_below` scores 2, anything
/// else scores 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBands {
    /// Upper bound (exclusive) of the best band
    pub top_below: f64,
    /// Upper bound (exclusive) of the middle band
    pub mid_below: f64,
}

impl ScoreBands {
    /// Score a value on the 1-3 scale
    #[must_use]
    pub fn score(&self, value: f64) -> u8 {
        if value < self.top_below {
            3
        } else if value < self.mid_below {
            2
        } else {
            1
        }
    }
}

/// Total-score cut-offs for capacity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Totals at or below this are `low`
    pub low_max: u8,
    /// Totals at or below this (and above `low_max`) are `medium`
    pub medium_max: u8,
}

impl TierThresholds {
    /// Map a summed score to a tier
    #[must_use]
    pub const fn tier_for(&self, total: u8) -> CapacityTier {
        if total <= self.low_max {
            CapacityTier::Low
        } else if total <= self.medium_max {
            CapacityTier::Medium
        } else {
            CapacityTier::High
        }
    }
}

/// Profiling score configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Age bands in years (younger scores higher)
    pub age_bands: ScoreBands,
    /// BMI bands in kg/m^2 (lower scores higher)
    pub bmi_bands: ScoreBands,
    /// Experience scores
    pub experience_scores: BTreeMap<ExperienceLevel, u8>,
    /// Tier cut-offs
    pub tier_thresholds: TierThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            age_bands: ScoreBands {
                top_below: 30.0,
                mid_below: 45.0,
            },
            bmi_bands: ScoreBands {
                top_below: 25.0,
                mid_below: 30.0,
            },
            experience_scores: BTreeMap::from([
                (ExperienceLevel::Beginner, 1),
                (ExperienceLevel::Intermediate, 2),
                (ExperienceLevel::Advanced, 3),
            ]),
            tier_thresholds: TierThresholds {
                low_max: 4,
                medium_max: 6,
            },
        }
    }
}

/// Base capacity record of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCapacity {
    /// Upper bound on sessions per week
    pub max_workouts_per_week: u8,
    /// Rest days the tier asks for
    pub mandatory_rest_days: u8,
    /// Recommended session length
    pub session_duration: SessionDuration,
    /// Whether HIIT is allowed before overrides
    pub hiit_allowed: bool,
    /// Intensity ceiling before overrides
    pub intensity_cap: IntensityLevel,
}

/// Adjustment applied for an experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceModifier {
    /// Ceiling for this level (merged with the tier cap by ordinal minimum)
    pub intensity_cap: IntensityLevel,
    /// Force HIIT off regardless of tier
    pub remove_hiit: bool,
}

/// Override applied when a user reports a medical condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MedicalRule {
    /// Ceiling imposed by the condition, if any
    #[serde(default)]
    pub intensity_cap: Option<IntensityLevel>,
    /// Restricted training modalities (`hiit`, `high_impact`, ...)
    #[serde(default)]
    pub restrictions: BTreeSet<String>,
}

impl MedicalRule {
    /// Whether this condition rules out HIIT
    #[must_use]
    pub fn restricts_hiit(&self) -> bool {
        self.restrictions.contains(HIIT_RESTRICTION)
    }
}

/// Exercise count per day type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLimits {
    /// Strength day limit
    pub strength: usize,
    /// Cardio day limit
    pub cardio: usize,
    /// Mobility day limit
    pub mobility: usize,
    /// HIIT day limit
    pub hiit: usize,
}

impl Default for DayLimits {
    fn default() -> Self {
        Self {
            strength: day_limits::STRENGTH,
            cardio: day_limits::CARDIO,
            mobility: day_limits::MOBILITY,
            hiit: day_limits::HIIT,
        }
    }
}

impl DayLimits {
    /// Limit for a day type (rest days hold nothing)
    #[must_use]
    pub const fn for_day_type(&self, day_type: DayType) -> usize {
        match day_type {
            DayType::Strength => self.strength,
            DayType::Cardio => self.cardio,
            DayType::Mobility => self.mobility,
            DayType::Hiit => self.hiit,
            DayType::Rest => 0,
        }
    }
}

/// Adjacency rules enforced by the day allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationConstraints {
    /// Two HIIT days may not sit next to each other
    pub no_consecutive_hiit_days: bool,
    /// The day after a HIIT day must be rest
    pub rest_after_hiit: bool,
}

impl Default for AllocationConstraints {
    fn default() -> Self {
        Self {
            no_consecutive_hiit_days: true,
            rest_after_hiit: true,
        }
    }
}

/// What to do when the safety filter removes every exercise of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Re-sample from the unfiltered pool and flag the day
    #[default]
    ResampleUnfiltered,
    /// Keep the day type but prescribe nothing, and flag the day
    LeaveEmpty,
}

impl FallbackPolicy {
    /// Canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ResampleUnfiltered => "resample_unfiltered",
            Self::LeaveEmpty => "leave_empty",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resample_unfiltered" | "resample" => Ok(Self::ResampleUnfiltered),
            "leave_empty" | "empty" => Ok(Self::LeaveEmpty),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown fallback policy '{other}'"
            ))),
        }
    }
}

/// Empty-day fallback settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Policy to apply
    pub policy: FallbackPolicy,
    /// Items re-sampled under `resample_unfiltered`
    pub sample_size: usize,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            policy: FallbackPolicy::default(),
            sample_size: fallback::RESAMPLE_SIZE,
        }
    }
}

/// How the day-type sequence is laid onto calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanningStrategy {
    /// Zip the template straight onto the calendar
    #[default]
    Template,
    /// Count the template's day types and place them with the day allocator
    Allocated,
}

impl PlanningStrategy {
    /// Canonical string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Template => "template",
            Self::Allocated => "allocated",
        }
    }
}

impl fmt::Display for PlanningStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanningStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "template" => Ok(Self::Template),
            "allocated" => Ok(Self::Allocated),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown planning strategy '{other}'"
            ))),
        }
    }
}

/// Canonical day-type sequences keyed by goal then experience
pub type TemplateTable = BTreeMap<Goal, BTreeMap<ExperienceLevel, Vec<DayType>>>;

/// All lookup tables used by the scheduling engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Profiling scores and tier cut-offs
    pub scoring: ScoringConfig,
    /// Base capacity per tier
    pub capacity_tiers: BTreeMap<CapacityTier, TierCapacity>,
    /// Adjustments per experience level
    pub experience_modifiers: BTreeMap<ExperienceLevel, ExperienceModifier>,
    /// Overrides per medical condition tag
    pub medical_rules: BTreeMap<String, MedicalRule>,
    /// Canonical weekly templates
    pub templates: TemplateTable,
    /// Day type replacing `hiit` for users without HIIT clearance, per goal
    pub hiit_substitutes: BTreeMap<Goal, DayType>,
    /// Exercises per day type
    pub day_limits: DayLimits,
    /// Allocator adjacency rules
    pub constraints: AllocationConstraints,
    /// Empty-day fallback
    pub fallback: FallbackConfig,
    /// Calendar layout strategy
    pub strategy: PlanningStrategy,
    /// Set/rep/rest scheme per experience level
    pub volume_guidelines: BTreeMap<ExperienceLevel, VolumeGuideline>,
    /// Label of the first plan day
    pub week_start: Weekday,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            capacity_tiers: default_capacity_tiers(),
            experience_modifiers: default_experience_modifiers(),
            medical_rules: default_medical_rules(),
            templates: default_templates(),
            hiit_substitutes: Goal::ALL
                .into_iter()
                .map(|goal| (goal, DayType::Cardio))
                .collect(),
            day_limits: DayLimits::default(),
            constraints: AllocationConstraints::default(),
            fallback: FallbackConfig::default(),
            strategy: PlanningStrategy::default(),
            volume_guidelines: default_volume_guidelines(),
            week_start: Weekday::Mon,
        }
    }
}

fn default_capacity_tiers() -> BTreeMap<CapacityTier, TierCapacity> {
    BTreeMap::from([
        (
            CapacityTier::Low,
            TierCapacity {
                max_workouts_per_week: 3,
                mandatory_rest_days: 3,
                session_duration: SessionDuration {
                    min_minutes: 20,
                    max_minutes: 30,
                },
                hiit_allowed: false,
                intensity_cap: IntensityLevel::Medium,
            },
        ),
        (
            CapacityTier::Medium,
            TierCapacity {
                max_workouts_per_week: 4,
                mandatory_rest_days: 2,
                session_duration: SessionDuration {
                    min_minutes: 30,
                    max_minutes: 45,
                },
                hiit_allowed: true,
                intensity_cap: IntensityLevel::High,
            },
        ),
        (
            CapacityTier::High,
            TierCapacity {
                max_workouts_per_week: 6,
                mandatory_rest_days: 1,
                session_duration: SessionDuration {
                    min_minutes: 45,
                    max_minutes: 60,
                },
                hiit_allowed: true,
                intensity_cap: IntensityLevel::High,
            },
        ),
    ])
}

fn default_experience_modifiers() -> BTreeMap<ExperienceLevel, ExperienceModifier> {
    BTreeMap::from([
        (
            ExperienceLevel::Beginner,
            ExperienceModifier {
                intensity_cap: IntensityLevel::Medium,
                remove_hiit: true,
            },
        ),
        (
            ExperienceLevel::Intermediate,
            ExperienceModifier {
                intensity_cap: IntensityLevel::High,
                remove_hiit: false,
            },
        ),
        (
            ExperienceLevel::Advanced,
            ExperienceModifier {
                intensity_cap: IntensityLevel::High,
                remove_hiit: false,
            },
        ),
    ])
}

fn medical_rule(cap: Option<IntensityLevel>, restrictions: &[&str]) -> MedicalRule {
    MedicalRule {
        intensity_cap: cap,
        restrictions: restrictions.iter().map(|tag| (*tag).to_owned()).collect(),
    }
}

fn default_medical_rules() -> BTreeMap<String, MedicalRule> {
    BTreeMap::from([
        (
            "cardiac".to_owned(),
            medical_rule(
                Some(IntensityLevel::Low),
                &[HIIT_RESTRICTION, "heavy_lifting", "high_impact"],
            ),
        ),
        (
            "hypertension".to_owned(),
            medical_rule(
                Some(IntensityLevel::Medium),
                &[HIIT_RESTRICTION, "heavy_lifting"],
            ),
        ),
        (
            "asthma".to_owned(),
            medical_rule(Some(IntensityLevel::Medium), &[HIIT_RESTRICTION]),
        ),
        (
            "joint_issues".to_owned(),
            medical_rule(Some(IntensityLevel::Medium), &["high_impact"]),
        ),
        ("diabetes".to_owned(), medical_rule(None, &[])),
    ])
}

fn default_templates() -> TemplateTable {
    use DayType::{Cardio as C, Hiit as H, Mobility as M, Rest as R, Strength as S};
    use ExperienceLevel::{Advanced, Beginner, Intermediate};

    // Six canonical slots; every template closes the week with a rest day.
    let rows: [(Goal, [[DayType; 6]; 3]); 5] = [
        (
            Goal::MuscleGain,
            [
                [S, R, S, C, R, S],
                [S, C, S, M, S, R],
                [S, S, C, S, M, S],
            ],
        ),
        (
            Goal::FatLoss,
            [
                [S, R, C, M, R, C],
                [S, C, H, M, S, C],
                [S, H, C, S, H, M],
            ],
        ),
        (
            Goal::GeneralFitness,
            [
                [S, C, M, R, S, C],
                [S, C, S, M, C, R],
                [S, H, S, C, M, S],
            ],
        ),
        (
            Goal::Endurance,
            [
                [C, R, C, M, R, C],
                [C, S, C, M, C, R],
                [C, H, S, C, M, H],
            ],
        ),
        (
            Goal::MobilityFlexibility,
            [
                [M, R, M, S, R, M],
                [M, S, M, C, S, M],
                [M, S, M, S, C, M],
            ],
        ),
    ];

    rows.into_iter()
        .map(|(goal, [beginner, intermediate, advanced])| {
            let close = |slots: [DayType; 6]| {
                let mut week = slots.to_vec();
                week.push(R);
                week
            };
            (
                goal,
                BTreeMap::from([
                    (Beginner, close(beginner)),
                    (Intermediate, close(intermediate)),
                    (Advanced, close(advanced)),
                ]),
            )
        })
        .collect()
}

fn default_volume_guidelines() -> BTreeMap<ExperienceLevel, VolumeGuideline> {
    let guideline = |sets, (min, max), (rest_min, rest_max)| VolumeGuideline {
        sets,
        reps: RepTarget::Reps { min, max },
        rest: RestInterval {
            min_seconds: rest_min,
            max_seconds: rest_max,
        },
    };
    BTreeMap::from([
        (ExperienceLevel::Beginner, guideline(3, (12, 15), (60, 90))),
        (ExperienceLevel::Intermediate, guideline(4, (8, 12), (90, 120))),
        (ExperienceLevel::Advanced, guideline(5, (6, 10), (90, 120))),
    ])
}

impl PlannerConfig {
    /// Base capacity for a tier
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if the tier has no record
    pub fn tier_capacity(&self, tier: CapacityTier) -> AppResult<&TierCapacity> {
        self.capacity_tiers
            .get(&tier)
            .ok_or_else(|| AppError::config_missing("capacity_tiers", tier))
    }

    /// Experience modifier for a level
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if the level has no modifier
    pub fn experience_modifier(&self, level: ExperienceLevel) -> AppResult<&ExperienceModifier> {
        self.experience_modifiers
            .get(&level)
            .ok_or_else(|| AppError::config_missing("experience_modifiers", level))
    }

    /// Experience score used by the profiler
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if the level has no score
    pub fn experience_score(&self, level: ExperienceLevel) -> AppResult<u8> {
        self.scoring
            .experience_scores
            .get(&level)
            .copied()
            .ok_or_else(|| AppError::config_missing("scoring.experience_scores", level))
    }

    /// Medical rule for a normalized condition tag; unknown tags have none
    #[must_use]
    pub fn medical_rule(&self, tag: &str) -> Option<&MedicalRule> {
        self.medical_rules.get(tag)
    }

    /// Canonical template for a goal and experience level
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if the pair has no template
    pub fn template(&self, goal: Goal, experience: ExperienceLevel) -> AppResult<&[DayType]> {
        self.templates
            .get(&goal)
            .and_then(|by_level| by_level.get(&experience))
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::config_missing("templates", format!("{goal}/{experience}")))
    }

    /// Day type that replaces `hiit` for a goal (cardio unless configured)
    #[must_use]
    pub fn hiit_substitute(&self, goal: Goal) -> DayType {
        self.hiit_substitutes
            .get(&goal)
            .copied()
            .unwrap_or(DayType::Cardio)
    }

    /// Set/rep/rest scheme for an experience level
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if the level has no guideline
    pub fn volume_guideline(&self, experience: ExperienceLevel) -> AppResult<&VolumeGuideline> {
        self.volume_guidelines
            .get(&experience)
            .ok_or_else(|| AppError::config_missing("volume_guidelines", experience))
    }

    /// Rewrite medical rule keys and restrictions into normalized tag form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank key or for two keys
    /// that normalize to the same tag
    pub fn normalize_medical_rules(&mut self) -> Result<(), ConfigError> {
        let mut normalized = BTreeMap::new();
        for (tag, mut rule) in mem::take(&mut self.medical_rules) {
            let key = normalize_tag(&tag);
            if key.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "medical_rules keys cannot be blank".to_owned(),
                ));
            }
            rule.restrictions = rule
                .restrictions
                .iter()
                .map(|restriction| normalize_tag(restriction))
                .collect();
            if normalized.insert(key.clone(), rule).is_some() {
                return Err(ConfigError::InvalidValue(format!(
                    "medical_rules.{tag} duplicates the '{key}' rule"
                )));
            }
        }
        self.medical_rules = normalized;
        Ok(())
    }

    /// Validate that the tables cover every key the engine will look up
    ///
    /// # Errors
    ///
    /// Returns an error describing the first missing or invalid entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_scoring()?;

        for tier in CapacityTier::ALL {
            let capacity = self
                .capacity_tiers
                .get(&tier)
                .ok_or_else(|| ConfigError::MissingField(format!("capacity_tiers.{tier}")))?;
            if capacity.session_duration.min_minutes > capacity.session_duration.max_minutes {
                return Err(ConfigError::InvalidValue(format!(
                    "capacity_tiers.{tier}.session_duration min exceeds max"
                )));
            }
        }

        for level in ExperienceLevel::ALL {
            if !self.experience_modifiers.contains_key(&level) {
                return Err(ConfigError::MissingField(format!(
                    "experience_modifiers.{level}"
                )));
            }
            if !self.volume_guidelines.contains_key(&level) {
                return Err(ConfigError::MissingField(format!("volume_guidelines.{level}")));
            }
        }

        for goal in Goal::ALL {
            for level in ExperienceLevel::ALL {
                let template = self
                    .templates
                    .get(&goal)
                    .and_then(|by_level| by_level.get(&level))
                    .ok_or_else(|| ConfigError::MissingField(format!("templates.{goal}.{level}")))?;
                if template.is_empty() || template.len() > CANONICAL_LENGTH {
                    return Err(ConfigError::InvalidValue(format!(
                        "templates.{goal}.{level} must hold 1 to {CANONICAL_LENGTH} day types, found {}",
                        template.len()
                    )));
                }
            }
            if self.hiit_substitute(goal) == DayType::Hiit {
                return Err(ConfigError::InvalidValue(format!(
                    "hiit_substitutes.{goal} cannot be hiit"
                )));
            }
        }

        let limits = self.day_limits;
        if [limits.strength, limits.cardio, limits.mobility, limits.hiit].contains(&0) {
            return Err(ConfigError::InvalidValue(
                "day_limits must all be greater than zero".to_owned(),
            ));
        }
        if !(1..=fallback::RESAMPLE_SIZE).contains(&self.fallback.sample_size) {
            return Err(ConfigError::InvalidValue(format!(
                "fallback.sample_size must be between 1 and {}, found {}",
                fallback::RESAMPLE_SIZE,
                self.fallback.sample_size
            )));
        }
        if let Some(tag) = self
            .medical_rules
            .keys()
            .find(|tag| normalize_tag(tag) != **tag)
        {
            return Err(ConfigError::InvalidValue(format!(
                "medical_rules.{tag} must be a lowercase, trimmed tag"
            )));
        }
        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        for (axis, bands) in [("age_bands", scoring.age_bands), ("bmi_bands", scoring.bmi_bands)] {
            if !(bands.top_below.is_finite() && bands.mid_below.is_finite())
                || bands.top_below > bands.mid_below
            {
                return Err(ConfigError::InvalidValue(format!(
                    "scoring.{axis}: top_below must be finite and <= mid_below"
                )));
            }
        }
        if scoring.tier_thresholds.low_max > scoring.tier_thresholds.medium_max {
            return Err(ConfigError::InvalidValue(
                "scoring.tier_thresholds: low_max must be <= medium_max".to_owned(),
            ));
        }
        for level in ExperienceLevel::ALL {
            if !scoring.experience_scores.contains_key(&level) {
                return Err(ConfigError::MissingField(format!(
                    "scoring.experience_scores.{level}"
                )));
            }
        }
        Ok(())
    }
}
