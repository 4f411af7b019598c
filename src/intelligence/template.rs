// ABOUTME: Weekly template selector mapping goal and experience to an ordered day-type sequence
// ABOUTME: Truncates to the available days and substitutes HIIT for users without HIIT clearance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

use fitplan_core::errors::AppResult;
use fitplan_core::models::{DayType, ExperienceLevel, Goal};
use tracing::debug;

use crate::config::PlannerConfig;

/// Picks and adapts the canonical weekly template
#[derive(Debug, Clone, Copy)]
pub struct TemplateSelector<'a> {
    config: &'a PlannerConfig,
}

impl<'a> TemplateSelector<'a> {
    /// Create a selector over the given tables
    #[must_use]
    pub const fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Ordered day types for one plan, exactly `available_days` long
    ///
    /// The first `available_days` slots of the canonical template are kept.
    /// A configured template shorter than the request is padded with rest
    /// days. When `hiit_allowed` is false every `hiit` slot becomes the goal's
    /// substitute day type.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when no template exists for the pair
    pub fn select_template(
        &self,
        goal: Goal,
        experience: ExperienceLevel,
        available_days: u8,
        hiit_allowed: bool,
    ) -> AppResult<Vec<DayType>> {
        let canonical = self.config.template(goal, experience)?;
        let wanted = usize::from(available_days);

        let mut days: Vec<DayType> = canonical.iter().copied().take(wanted).collect();
        if days.len() < wanted {
            debug!(
                "Template {goal}/{experience} has {} slots, padding to {wanted} with rest",
                days.len()
            );
            days.resize(wanted, DayType::Rest);
        }

        if !hiit_allowed {
            let substitute = self.config.hiit_substitute(goal);
            for day in days.iter_mut().filter(|day| **day == DayType::Hiit) {
                *day = substitute;
            }
        }

        Ok(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_from_the_front() {
        let config = PlannerConfig::default();
        let selector = TemplateSelector::new(&config);
        let days = selector
            .select_template(Goal::MuscleGain, ExperienceLevel::Beginner, 3, true)
            .unwrap();
        assert_eq!(days, vec![DayType::Strength, DayType::Rest, DayType::Strength]);
    }

    #[test]
    fn test_hiit_substituted_when_not_allowed() {
        let config = PlannerConfig::default();
        let selector = TemplateSelector::new(&config);
        let days = selector
            .select_template(Goal::FatLoss, ExperienceLevel::Advanced, 6, false)
            .unwrap();
        assert!(!days.contains(&DayType::Hiit));
        assert_eq!(days[1], DayType::Cardio);
        assert_eq!(days[4], DayType::Cardio);
    }
}
