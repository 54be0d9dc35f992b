// ABOUTME: JSON snapshot files holding ingredients, recipes, and meal plans
// ABOUTME: Validates persistence rows into typed models and builds the in-memory Catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Snapshot Files
//!
//! A snapshot is the whole object graph a user owns, exported as one JSON
//! document. Recipe lines are stored the way the database stores them, with
//! two nullable references:
//!
//! ```json
//! { "ingredient_id": "…", "subrecipe_id": null, "amount_grams": 150.0 }
//! ```
//!
//! Loading converts every row into a typed line and validates ingredients and
//! meal plans, so the engine only ever sees well-formed models.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use larder_core::errors::{AppError, AppResult, ErrorCode};
use larder_core::models::{
    Ingredient, MealPlan, Recipe, RecipeComponent, RecipeIngredient, RecipeIngredientRow,
    RecipeKind,
};
use larder_engine::{convert_to_grams, Catalog, RecipeSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Recipe as stored, with lines in row form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Owner user ID
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Recipe name
    pub name: String,
    /// Composed or premade
    #[serde(default)]
    pub kind: RecipeKind,
    /// Lines with nullable ingredient and sub-recipe references
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientRow>,
    /// Grams after cooking
    #[serde(default)]
    pub cooked_weight_g: Option<f64>,
    /// Grams per serving
    #[serde(default)]
    pub portion_size_g: Option<f64>,
    /// Free-text instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn line_to_row(line: &RecipeIngredient) -> RecipeIngredientRow {
    let (ingredient_id, subrecipe_id) = match line.component {
        RecipeComponent::Ingredient { ingredient_id } => (Some(ingredient_id), None),
        RecipeComponent::SubRecipe { recipe_id } => (None, Some(recipe_id)),
    };
    RecipeIngredientRow {
        id: line.id,
        ingredient_id,
        subrecipe_id,
        amount_grams: Some(line.amount_grams),
        display_amount: line.display_amount,
        display_unit: line.display_unit.clone(),
        position: line.position,
    }
}

impl RecipeRecord {
    /// Fill in `amount_grams` for ingredient rows that only carry a display
    /// amount and unit
    fn convert_display_amounts(&mut self, catalog: &Catalog) -> AppResult<()> {
        let recipe_id = self.id;
        for row in &mut self.ingredients {
            if row.amount_grams.is_some() {
                continue;
            }
            let (Some(ingredient_id), Some(amount), Some(unit)) =
                (row.ingredient_id, row.display_amount, row.display_unit.as_deref())
            else {
                continue;
            };
            let Some(ingredient) = catalog.ingredient(&ingredient_id) else {
                continue;
            };

            let grams = convert_to_grams(ingredient, amount, unit).map_err(|e| {
                AppError::invalid_input(format!("Recipe line {}: {e}", row.id))
                    .with_source(e)
                    .with_resource_id(recipe_id.to_string())
            })?;
            debug!(
                line_id = %row.id,
                amount,
                unit,
                grams,
                "Derived line grams from display amount"
            );
            row.amount_grams = Some(grams);
        }
        Ok(())
    }
}

impl From<&Recipe> for RecipeRecord {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            user_id: recipe.user_id,
            name: recipe.name.clone(),
            kind: recipe.kind,
            ingredients: recipe.ingredients.iter().map(line_to_row).collect(),
            cooked_weight_g: recipe.cooked_weight_g,
            portion_size_g: recipe.portion_size_g,
            instructions: recipe.instructions.clone(),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

impl TryFrom<RecipeRecord> for Recipe {
    type Error = AppError;

    fn try_from(record: RecipeRecord) -> Result<Self, Self::Error> {
        let recipe_id = record.id;
        let ingredients = record
            .ingredients
            .into_iter()
            .map(RecipeIngredient::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::from(e).with_resource_id(recipe_id.to_string()))?;

        Ok(Self {
            id: record.id,
            user_id: record.user_id,
            name: record.name,
            kind: record.kind,
            ingredients,
            cooked_weight_g: record.cooked_weight_g,
            portion_size_g: record.portion_size_g,
            instructions: record.instructions,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// Everything one user owns, as exported to a JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Base ingredients
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Recipes with lines in row form
    #[serde(default)]
    pub recipes: Vec<RecipeRecord>,
    /// Meal plans
    #[serde(default)]
    pub meal_plans: Vec<MealPlan>,
}

impl Snapshot {
    /// Empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add a recipe, converting its lines to row form
    #[must_use]
    pub fn with_recipe(mut self, recipe: &Recipe) -> Self {
        self.recipes.push(RecipeRecord::from(recipe));
        self
    }

    /// Add a meal plan
    #[must_use]
    pub fn with_meal_plan(mut self, plan: MealPlan) -> Self {
        self.meal_plans.push(plan);
        self
    }

    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` if the text is not a valid snapshot
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::new(ErrorCode::InvalidFormat, format!("Invalid snapshot: {e}")).with_source(e)
        })
    }

    /// Read and parse a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` if the file cannot be read and
    /// `ErrorCode::InvalidFormat` if it does not parse
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let json = fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_resource_id(shown.clone()))?;
        let snapshot = match Self::from_json(&json) {
            Ok(snapshot) => snapshot,
            Err(e) => return Err(e.with_resource_id(shown)),
        };

        info!(
            path = %shown,
            ingredients = snapshot.ingredients.len(),
            recipes = snapshot.recipes.len(),
            meal_plans = snapshot.meal_plans.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails
    pub fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
        debug!(path = %path.display(), "Snapshot written");
        Ok(())
    }

    /// Validate every entity and build the lookup catalog
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` for a recipe line referencing both or
    /// neither of an ingredient and a sub-recipe, a line whose grams are
    /// missing and cannot be derived from its display amount, an ingredient
    /// with several default units, or a meal plan slot outside the week
    pub fn into_catalog(self) -> AppResult<Catalog> {
        let mut catalog = Catalog::new();

        for ingredient in self.ingredients {
            ingredient
                .validate()
                .map_err(|e| AppError::from(e).with_resource_id(ingredient.id.to_string()))?;
            catalog.insert_ingredient(ingredient);
        }

        for mut record in self.recipes {
            record.convert_display_amounts(&catalog)?;
            catalog.insert_recipe(Recipe::try_from(record)?);
        }

        for plan in self.meal_plans {
            plan.validate()
                .map_err(|e| AppError::from(e).with_resource_id(plan.id.to_string()))?;
            catalog.insert_meal_plan(plan);
        }

        Ok(catalog)
    }
}
