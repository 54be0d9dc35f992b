// ABOUTME: Model invariant errors raised when persistence rows are converted to typed models
// ABOUTME: Covers recipe line components, alternate unit defaults, and slot scheduling ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;
use uuid::Uuid;

/// Violations of data model invariants
///
/// The engine assumes well-formed models. These errors are raised when rows
/// coming from persistence are converted or validated, before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A recipe line references both an ingredient and a sub-recipe
    #[error("Recipe line {line_id} references both an ingredient and a sub-recipe")]
    AmbiguousComponent {
        /// Offending recipe line
        line_id: Uuid,
    },

    /// A recipe line references neither an ingredient nor a sub-recipe
    #[error("Recipe line {line_id} references neither an ingredient nor a sub-recipe")]
    MissingComponent {
        /// Offending recipe line
        line_id: Uuid,
    },

    /// A recipe line has no gram amount and none could be derived
    #[error("Recipe line {line_id} has no gram amount")]
    MissingAmount {
        /// Offending recipe line
        line_id: Uuid,
    },

    /// More than one alternate unit is flagged as the default
    #[error("Ingredient '{ingredient}' has {count} default units (at most one allowed)")]
    MultipleDefaultUnits {
        /// Ingredient name
        ingredient: String,
        /// Number of units flagged as default
        count: usize,
    },

    /// A meal plan slot is scheduled outside Monday..Sunday
    #[error("Slot day {day} is outside 0..=6 in meal plan '{plan}'")]
    DayOutOfRange {
        /// Meal plan name
        plan: String,
        /// The invalid day index
        day: u8,
    },

    /// A meal plan slot consumes a non-positive number of portions
    #[error("Slot portions must be positive in meal plan '{plan}' (got {portions})")]
    NonPositivePortions {
        /// Meal plan name
        plan: String,
        /// The invalid portion count
        portions: f64,
    },
}
