// ABOUTME: Base food item model with per-100g macros, density, and alternate units
// ABOUTME: Defines Ingredient, IngredientUnit, and the IngredientSource provenance tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::Macros;
use crate::constants::nutrition::REFERENCE_GRAMS;
use crate::errors::ModelError;

/// Where an ingredient's nutrition data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientSource {
    /// Typed in by the user
    #[default]
    Manual,
    /// USDA `FoodData` Central lookup
    Usda,
    /// Read from a product nutrition label
    Label,
    /// Imported from another application or file
    Imported,
}

/// Named alternate unit for an ingredient ("tbsp", "clove", "scoop")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUnit {
    /// Unit name as shown to the user
    pub name: String,
    /// Fixed gram equivalent of one unit
    pub grams_per_unit: f64,
    /// Whether this is the ingredient's preferred display unit
    #[serde(default)]
    pub is_default: bool,
}

impl IngredientUnit {
    /// Create a non-default unit
    #[must_use]
    pub fn new(name: impl Into<String>, grams_per_unit: f64) -> Self {
        Self {
            name: name.into(),
            grams_per_unit,
            is_default: false,
        }
    }

    /// Mark this unit as the default
    #[must_use]
    pub const fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// A base food item
///
/// Macros are stored per 100 g of raw weight. Editing an ingredient changes
/// every recipe, plan and shopping list that references it, since nothing
/// downstream caches computed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique ingredient identifier
    pub id: Uuid,
    /// Owner user ID
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Display name
    pub name: String,
    /// Macros per 100 g raw
    pub per_100g: Macros,
    /// Density in grams per millilitre, for volume measures
    #[serde(default)]
    pub density_g_per_ml: Option<f64>,
    /// Provenance of the nutrition data
    #[serde(default)]
    pub source: IngredientSource,
    /// Alternate units
    #[serde(default)]
    pub units: Vec<IngredientUnit>,
}

impl Ingredient {
    /// Create an ingredient with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>, per_100g: Macros) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: None,
            name: name.into(),
            per_100g,
            density_g_per_ml: None,
            source: IngredientSource::Manual,
            units: Vec::new(),
        }
    }

    /// Set the id (used when rebuilding from persistence)
    #[must_use]
    pub const fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Set the owner
    #[must_use]
    pub const fn with_owner(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set density
    #[must_use]
    pub const fn with_density(mut self, grams_per_ml: f64) -> Self {
        self.density_g_per_ml = Some(grams_per_ml);
        self
    }

    /// Set provenance
    #[must_use]
    pub const fn with_source(mut self, source: IngredientSource) -> Self {
        self.source = source;
        self
    }

    /// Add an alternate unit
    #[must_use]
    pub fn with_unit(mut self, unit: IngredientUnit) -> Self {
        self.units.push(unit);
        self
    }

    /// Find an alternate unit by name (case-insensitive)
    #[must_use]
    pub fn unit(&self, name: &str) -> Option<&IngredientUnit> {
        self.units
            .iter()
            .find(|unit| unit.name.eq_ignore_ascii_case(name.trim()))
    }

    /// The unit flagged as default, if any
    #[must_use]
    pub fn default_unit(&self) -> Option<&IngredientUnit> {
        self.units.iter().find(|unit| unit.is_default)
    }

    /// Macros contributed by `grams` of this ingredient
    #[must_use]
    pub fn macros_for(&self, grams: f64) -> Macros {
        self.per_100g.scaled(grams / REFERENCE_GRAMS)
    }

    /// Check the alternate unit invariant (at most one default)
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MultipleDefaultUnits` if more than one unit is flagged default
    pub fn validate(&self) -> Result<(), ModelError> {
        let count = self.units.iter().filter(|unit| unit.is_default).count();
        if count > 1 {
            return Err(ModelError::MultipleDefaultUnits {
                ingredient: self.name.clone(),
                count,
            });
        }
        Ok(())
    }
}
