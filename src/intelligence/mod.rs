// ABOUTME: Scheduling engine components: profiler, template selector, pool builder, allocator
// ABOUTME: Re-exports the WorkoutScheduler entry point and its building blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! # Intelligence Module
//!
//! Rule-based weekly workout planning. Components are listed leaf-first; each
//! borrows the [`PlannerConfig`](crate::config::PlannerConfig) it was built
//! with and holds no other state, so one configuration can serve any number
//! of requests.

/// Day allocator with HIIT adjacency rules
pub mod allocator;
/// Capacity profiler
pub mod capacity;
/// Exercise pool builder and safety filter
pub mod pool;
/// End-to-end scheduler
pub mod scheduler;
/// Weekly template selector
pub mod template;

pub use allocator::{Allocation, DayAllocator};
pub use capacity::{body_mass_index, CapacityProfiler};
pub use pool::{DaySelection, ExercisePoolBuilder, PoolOutcome};
pub use scheduler::{count_day_types, plan_days, WorkoutScheduler};
pub use template::TemplateSelector;
