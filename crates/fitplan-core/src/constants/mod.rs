// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Profile bounds, per-day exercise limits, and scheduling limits for the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Accepted ranges for user profile fields
pub mod profile_bounds {
    /// Youngest supported age (years)
    pub const MIN_AGE: u32 = 10;
    /// Oldest supported age (years)
    pub const MAX_AGE: u32 = 100;
    /// Fewest training days a plan can cover
    pub const MIN_AVAILABLE_DAYS: u8 = 1;
    /// Most training days a plan can cover
    pub const MAX_AVAILABLE_DAYS: u8 = 7;
    /// Sentinel tag the form layer sends when nothing applies
    pub const NO_TAG_SENTINEL: &str = "none";
}

/// Default number of exercises per day type
pub mod day_limits {
    /// Strength day limit
    pub const STRENGTH: usize = 5;
    /// Cardio day limit
    pub const CARDIO: usize = 2;
    /// Mobility day limit
    pub const MOBILITY: usize = 4;
    /// HIIT day limit
    pub const HIIT: usize = 2;
}

/// Safety fallback defaults
pub mod fallback {
    /// Items re-sampled from the unfiltered pool when the safety filter empties a day
    pub const RESAMPLE_SIZE: usize = 3;
}

/// Template sizing
pub mod templates {
    /// Length of every canonical template (six canonical slots plus a closing rest day)
    pub const CANONICAL_LENGTH: usize = 7;
}

/// BMI classification cut-offs (kg/m^2)
pub mod bmi {
    /// Below this the user is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this (and not underweight) the user is in the healthy range
    pub const HEALTHY_BELOW: f64 = 25.0;
    /// Below this (and not healthy) the user is overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
}
