// ABOUTME: Day allocator placing counted workout types onto calendar days
// ABOUTME: Enforces HIIT adjacency rules and records conflicts when it has to break them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Day Allocator
//!
//! Work items are placed in priority order (strength, cardio, mobility,
//! hiit) by scanning forward from a rotating cursor for a free day whose
//! calendar neighbours do not break the HIIT rules. Neighbours are the
//! previous and next day in the plan; the last day does not wrap to the
//! first. An item that fits nowhere is placed on the first free day anyway
//! and reported as a conflict.

use std::iter;

use chrono::Weekday;
use fitplan_core::models::{DayType, ScheduleWarning};
use tracing::{debug, warn};

use crate::config::AllocationConstraints;

/// Result of one allocation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Every input day with its assigned type (`rest` when nothing landed)
    pub days: Vec<(Weekday, DayType)>,
    /// Placements that broke a rule, or items with no free day left
    pub conflicts: Vec<ScheduleWarning>,
    /// HIIT items placed
    pub hiit_count: usize,
}

impl Allocation {
    /// Day types in calendar order
    #[must_use]
    pub fn day_types(&self) -> Vec<DayType> {
        self.days.iter().map(|(_, day_type)| *day_type).collect()
    }
}

/// Places workout types onto days under adjacency constraints
#[derive(Debug, Clone, Copy, Default)]
pub struct DayAllocator {
    constraints: AllocationConstraints,
}

impl DayAllocator {
    /// Create an allocator enforcing `constraints`
    #[must_use]
    pub const fn new(constraints: AllocationConstraints) -> Self {
        Self { constraints }
    }

    /// Allocate `type_counts` across `days`
    ///
    /// Counts for `rest` are ignored; unfilled days default to rest. Ties in
    /// priority keep their input order.
    #[must_use]
    pub fn allocate(&self, type_counts: &[(DayType, usize)], days: &[Weekday]) -> Allocation {
        let mut work: Vec<DayType> = type_counts
            .iter()
            .filter(|(day_type, _)| day_type.is_workout())
            .flat_map(|&(day_type, count)| iter::repeat(day_type).take(count))
            .collect();
        work.sort_by_key(DayType::allocation_priority);

        let mut assigned: Vec<Option<DayType>> = vec![None; days.len()];
        let mut conflicts = Vec::new();
        let mut cursor = 0;
        let mut hiit_count = 0;

        for item in work {
            let slot = (0..days.len())
                .map(|offset| (cursor + offset) % days.len())
                .find(|&index| assigned[index].is_none() && !self.violates(&assigned, index, item));

            let index = if let Some(index) = slot {
                index
            } else if let Some(index) = assigned.iter().position(Option::is_none) {
                warn!(
                    "No day satisfies the HIIT rules for {item}; placing it on {}",
                    days[index]
                );
                conflicts.push(ScheduleWarning::AllocationConflict {
                    day_type: item,
                    placed_on: Some(days[index]),
                });
                index
            } else {
                warn!("No free day left for {item}; dropping it");
                conflicts.push(ScheduleWarning::AllocationConflict {
                    day_type: item,
                    placed_on: None,
                });
                continue;
            };

            assigned[index] = Some(item);
            cursor = (index + 1) % days.len();
            if item.is_high_intensity() {
                hiit_count += 1;
            }
            debug!("Allocated {item} to {}", days[index]);
        }

        Allocation {
            days: days
                .iter()
                .zip(assigned)
                .map(|(&day, day_type)| (day, day_type.unwrap_or(DayType::Rest)))
                .collect(),
            conflicts,
            hiit_count,
        }
    }

    /// Whether placing `item` at `index` breaks an enabled rule
    fn violates(&self, assigned: &[Option<DayType>], index: usize, item: DayType) -> bool {
        let is_hiit = |day: Option<&Option<DayType>>| {
            matches!(day, Some(Some(day_type)) if day_type.is_high_intensity())
        };
        let previous = index.checked_sub(1).and_then(|prev| assigned.get(prev));
        let next = assigned.get(index + 1);

        if self.constraints.no_consecutive_hiit_days
            && item.is_high_intensity()
            && (is_hiit(previous) || is_hiit(next))
        {
            return true;
        }

        if self.constraints.rest_after_hiit {
            if is_hiit(previous) {
                return true;
            }
            if item.is_high_intensity() && matches!(next, Some(Some(_))) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK: [Weekday; 6] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    #[test]
    fn test_hiit_days_are_separated() {
        let allocation = DayAllocator::default().allocate(
            &[(DayType::Strength, 3), (DayType::Hiit, 2), (DayType::Rest, 1)],
            &WEEK,
        );
        assert_eq!(
            allocation.day_types(),
            vec![
                DayType::Strength,
                DayType::Strength,
                DayType::Strength,
                DayType::Hiit,
                DayType::Rest,
                DayType::Hiit,
            ]
        );
        assert!(allocation.conflicts.is_empty());
        assert_eq!(allocation.hiit_count, 2);
    }

    #[test]
    fn test_overflow_is_reported_without_placement() {
        let allocation =
            DayAllocator::default().allocate(&[(DayType::Cardio, 3)], &WEEK[..2]);
        assert_eq!(allocation.days.len(), 2);
        assert_eq!(
            allocation.conflicts,
            vec![ScheduleWarning::AllocationConflict {
                day_type: DayType::Cardio,
                placed_on: None,
            }]
        );
    }
}
