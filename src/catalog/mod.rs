// ABOUTME: Versioned, read-only exercise catalog with category, subgroup, and level queries
// ABOUTME: Ships a built-in dataset and validates externally supplied JSON catalogs on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitplan contributors

//! Exercise catalog
//!
//! The catalog is immutable once constructed. The scheduler borrows it for the
//! lifetime of a request and only ever reads from it.

mod data;

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

use fitplan_core::errors::{AppError, AppResult};
use fitplan_core::models::{
    normalized_tags, Exercise, ExerciseCategory, ExperienceLevel, Subgroup,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use data::BUILTIN_VERSION;

/// Environment variable naming an external catalog file
pub const CATALOG_PATH_ENV: &str = "FITPLAN_CATALOG_PATH";

/// The exercise reference dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    version: String,
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    /// The dataset compiled into the crate
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_VERSION.to_owned(),
            exercises: data::builtin_exercises(),
        }
    }

    /// Build a catalog from entries, validating them
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a name is empty or duplicated, or a
    /// subgroup does not belong to its entry's category
    pub fn new(version: impl Into<String>, exercises: Vec<Exercise>) -> AppResult<Self> {
        let catalog = Self {
            version: version.into(),
            exercises,
        }
        .with_normalized_tags();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog document: `{"version": "...", "exercises": [...]}`
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` for malformed JSON and `CONFIG_INVALID`
    /// when the entries fail validation
    pub fn from_json(json: &str) -> AppResult<Self> {
        let parsed = serde_json::from_str::<Self>(json)?.with_normalized_tags();
        parsed.validate()?;
        Ok(parsed)
    }

    /// Read a catalog document from disk
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` if the file cannot be read, otherwise as
    /// [`Self::from_json`]
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("failed to read catalog {}", path.display())).with_source(e)
        })?;
        Self::from_json(&contents)
    }

    /// The catalog named by `FITPLAN_CATALOG_PATH`, or the built-in dataset
    ///
    /// # Errors
    ///
    /// Returns an error if the named file cannot be loaded
    pub fn load() -> AppResult<Self> {
        match env::var(CATALOG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                let catalog = Self::from_path(path.trim())?;
                info!(
                    "Loaded exercise catalog {} ({} entries) from {}",
                    catalog.version,
                    catalog.len(),
                    path.trim()
                );
                Ok(catalog)
            }
            _ => {
                debug!("Using built-in exercise catalog {BUILTIN_VERSION}");
                Ok(Self::builtin())
            }
        }
    }

    /// `avoid_if` tags compare against normalized user tags
    fn with_normalized_tags(mut self) -> Self {
        for exercise in &mut self.exercises {
            exercise.avoid_if = normalized_tags(&exercise.avoid_if);
        }
        self
    }

    fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(self.exercises.len());
        for exercise in &self.exercises {
            if exercise.name.trim().is_empty() {
                return Err(AppError::config_invalid("catalog entry with an empty name"));
            }
            if !seen.insert(exercise.name.as_str()) {
                return Err(AppError::config_invalid(format!(
                    "duplicate catalog entry '{}'",
                    exercise.name
                )));
            }
            if let Some(subgroup) = exercise.subgroup {
                if subgroup.category() != exercise.category {
                    return Err(AppError::config_invalid(format!(
                        "'{}' is {} but has {} subgroup {subgroup}",
                        exercise.name,
                        exercise.category,
                        subgroup.category()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Dataset version
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Every entry in catalog order
    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Entries of a category
    pub fn by_category(&self, category: ExerciseCategory) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |exercise| exercise.category == category)
    }

    /// Entries of a subgroup
    pub fn by_subgroup(&self, subgroup: Subgroup) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |exercise| exercise.subgroup == Some(subgroup))
    }

    /// Entries of a category at exactly `level`
    pub fn at_level(
        &self,
        category: ExerciseCategory,
        level: ExperienceLevel,
    ) -> impl Iterator<Item = &Exercise> {
        self.by_category(category)
            .filter(move |exercise| exercise.level == level)
    }

    /// Look an entry up by name (case-insensitive)
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Exercise> {
        let name = name.trim();
        self.exercises
            .iter()
            .find(|exercise| exercise.name.eq_ignore_ascii_case(name))
    }
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ExerciseCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.version(), BUILTIN_VERSION);
    }

    #[test]
    fn test_builtin_covers_every_strength_subgroup_for_beginners() {
        let catalog = ExerciseCatalog::builtin();
        for subgroup in Subgroup::STRENGTH_BALANCE {
            assert!(
                catalog
                    .by_subgroup(subgroup)
                    .any(|exercise| exercise.level == ExperienceLevel::Beginner),
                "{subgroup}"
            );
        }
    }

    #[test]
    fn test_mismatched_subgroup_is_rejected() {
        let mut squat = ExerciseCatalog::builtin()
            .find("bodyweight squat")
            .cloned()
            .unwrap();
        squat.subgroup = Some(Subgroup::LowImpact);
        let err = ExerciseCatalog::new("test", vec![squat]).unwrap_err();
        assert!(err.code.is_configuration_error());
    }
}
