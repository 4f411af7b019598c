// ABOUTME: Capacity profiler turning a user profile into a capacity assessment
// ABOUTME: Scores age, BMI, and experience, then applies experience and medical overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Capacity Profiler
//!
//! Age, BMI and experience are each scored 1-3 and summed; the total picks a
//! capacity tier whose base record supplies the weekly quotas. Experience and
//! medical overrides may then only lower the intensity cap (ordinal minimum)
//! and may only switch HIIT off, so the order in which conditions are applied
//! never changes the outcome.

use fitplan_core::errors::AppResult;
use fitplan_core::models::{BmiCategory, CapacityAssessment, UserProfile};
use tracing::debug;

use crate::config::PlannerConfig;

/// Derives a [`CapacityAssessment`] from a profile; pure, no I/O
#[derive(Debug, Clone, Copy)]
pub struct CapacityProfiler<'a> {
    config: &'a PlannerConfig,
}

/// Body mass index in kg/m^2 rounded to two decimals
#[must_use]
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    (weight_kg / (height_m * height_m) * 100.0).round() / 100.0
}

impl<'a> CapacityProfiler<'a> {
    /// Create a profiler over the given tables
    #[must_use]
    pub const fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Assess a profile
    ///
    /// # Errors
    ///
    /// Returns `INVALID_PROFILE`/`VALUE_OUT_OF_RANGE` when the profile fails
    /// validation, and `CONFIG_MISSING` when a tier, modifier or experience
    /// score the profile needs is absent from the tables
    pub fn assess(&self, profile: &UserProfile) -> AppResult<CapacityAssessment> {
        profile.validate()?;

        let scoring = &self.config.scoring;
        let bmi = body_mass_index(profile.height_cm, profile.weight_kg);
        let age_score = scoring.age_bands.score(f64::from(profile.age));
        let bmi_score = scoring.bmi_bands.score(bmi);
        let experience_score = self.config.experience_score(profile.experience)?;
        let capacity_score = age_score + bmi_score + experience_score;
        let capacity_tier = scoring.tier_thresholds.tier_for(capacity_score);

        let base = self.config.tier_capacity(capacity_tier)?;
        let modifier = self.config.experience_modifier(profile.experience)?;

        let mut intensity_cap = base.intensity_cap.min(modifier.intensity_cap);
        let mut hiit_allowed = base.hiit_allowed && !modifier.remove_hiit;

        for tag in profile.condition_tags() {
            let Some(rule) = self.config.medical_rule(&tag) else {
                debug!("No medical rule for condition '{tag}', ignoring");
                continue;
            };
            if let Some(cap) = rule.intensity_cap {
                intensity_cap = intensity_cap.min(cap);
            }
            if rule.restricts_hiit() {
                hiit_allowed = false;
            }
        }

        debug!(
            age_score,
            bmi_score,
            experience_score,
            tier = %capacity_tier,
            cap = %intensity_cap,
            hiit_allowed,
            "Capacity assessed"
        );

        Ok(CapacityAssessment {
            bmi,
            bmi_category: BmiCategory::from_bmi(bmi),
            capacity_score,
            capacity_tier,
            intensity_cap,
            hiit_allowed,
            max_workouts_per_week: base.max_workouts_per_week,
            mandatory_rest_days: base.mandatory_rest_days,
            session_duration: base.session_duration,
        })
    }
}
