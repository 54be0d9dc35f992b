// ABOUTME: Recipe composition models with typed ingredient and sub-recipe lines
// ABOUTME: Defines Recipe, RecipeKind, RecipeIngredient, and the persistence row conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::Macros;
use crate::errors::ModelError;

/// What a recipe line points at
///
/// A line is either a base ingredient measured in raw grams, or another
/// recipe used as a component and measured in grams of its cooked product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecipeComponent {
    /// A base ingredient
    Ingredient {
        /// Referenced ingredient
        ingredient_id: Uuid,
    },
    /// A nested recipe
    SubRecipe {
        /// Referenced recipe
        recipe_id: Uuid,
    },
}

/// One line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Line identifier
    pub id: Uuid,
    /// Ingredient or sub-recipe reference
    pub component: RecipeComponent,
    /// Raw grams for an ingredient, cooked-product grams for a sub-recipe
    pub amount_grams: f64,
    /// Amount as entered by the user (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_amount: Option<f64>,
    /// Unit as entered by the user (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_unit: Option<String>,
    /// Ordering index within the recipe
    #[serde(default)]
    pub position: u32,
}

impl RecipeIngredient {
    /// A line consuming `grams` of a base ingredient
    #[must_use]
    pub fn ingredient(ingredient_id: Uuid, grams: f64) -> Self {
        Self::with_component(RecipeComponent::Ingredient { ingredient_id }, grams)
    }

    /// A line consuming `grams` of a sub-recipe's cooked product
    #[must_use]
    pub fn sub_recipe(recipe_id: Uuid, grams: f64) -> Self {
        Self::with_component(RecipeComponent::SubRecipe { recipe_id }, grams)
    }

    fn with_component(component: RecipeComponent, amount_grams: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            component,
            amount_grams,
            display_amount: None,
            display_unit: None,
            position: 0,
        }
    }

    /// Record the amount and unit the user entered
    #[must_use]
    pub fn with_display(mut self, amount: f64, unit: impl Into<String>) -> Self {
        self.display_amount = Some(amount);
        self.display_unit = Some(unit.into());
        self
    }

    /// Set the ordering index
    #[must_use]
    pub const fn at_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }
}

/// Recipe line as stored by the persistence layer, with nullable references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientRow {
    /// Line identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Referenced ingredient, if this line is a base ingredient
    #[serde(default)]
    pub ingredient_id: Option<Uuid>,
    /// Referenced recipe, if this line is a sub-recipe
    #[serde(default)]
    pub subrecipe_id: Option<Uuid>,
    /// Grams consumed; may be absent when a display amount and unit are given
    #[serde(default)]
    pub amount_grams: Option<f64>,
    /// Amount as entered by the user
    #[serde(default)]
    pub display_amount: Option<f64>,
    /// Unit as entered by the user
    #[serde(default)]
    pub display_unit: Option<String>,
    /// Ordering index
    #[serde(default)]
    pub position: u32,
}

impl TryFrom<RecipeIngredientRow> for RecipeIngredient {
    type Error = ModelError;

    fn try_from(row: RecipeIngredientRow) -> Result<Self, Self::Error> {
        let component = match (row.ingredient_id, row.subrecipe_id) {
            (Some(ingredient_id), None) => RecipeComponent::Ingredient { ingredient_id },
            (None, Some(recipe_id)) => RecipeComponent::SubRecipe { recipe_id },
            (Some(_), Some(_)) => return Err(ModelError::AmbiguousComponent { line_id: row.id }),
            (None, None) => return Err(ModelError::MissingComponent { line_id: row.id }),
        };
        let amount_grams = row
            .amount_grams
            .ok_or(ModelError::MissingAmount { line_id: row.id })?;

        Ok(Self {
            id: row.id,
            component,
            amount_grams,
            display_amount: row.display_amount,
            display_unit: row.display_unit,
            position: row.position,
        })
    }
}

/// Whether a recipe is aggregated from its lines or carries macros itself
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecipeKind {
    /// Macros come from the ingredient lines
    #[default]
    Composed,
    /// A standalone product with label macros per 100 g
    Premade {
        /// Macros per 100 g of product
        per_100g: Macros,
    },
}

/// A named composition of ingredient and sub-recipe lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
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
    /// Ingredient lines in display order
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Grams after cooking; `None` means the raw ingredient weight
    #[serde(default)]
    pub cooked_weight_g: Option<f64>,
    /// Grams per serving; `None` means the whole dish is one portion
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

impl Recipe {
    /// Create an empty composed recipe
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: None,
            name: name.into(),
            kind: RecipeKind::Composed,
            ingredients: Vec::new(),
            cooked_weight_g: None,
            portion_size_g: None,
            instructions: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a premade product with label macros per 100 g
    #[must_use]
    pub fn premade(name: impl Into<String>, per_100g: Macros) -> Self {
        Self {
            kind: RecipeKind::Premade { per_100g },
            ..Self::new(name)
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

    /// Append a line, assigning the next position
    #[must_use]
    pub fn with_line(mut self, line: RecipeIngredient) -> Self {
        let position = u32::try_from(self.ingredients.len()).unwrap_or(u32::MAX);
        self.ingredients.push(line.at_position(position));
        self
    }

    /// Set the cooked weight
    #[must_use]
    pub const fn with_cooked_weight(mut self, grams: f64) -> Self {
        self.cooked_weight_g = Some(grams);
        self
    }

    /// Set the portion size
    #[must_use]
    pub const fn with_portion_size(mut self, grams: f64) -> Self {
        self.portion_size_g = Some(grams);
        self
    }

    /// Set instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Whether this is a premade product
    #[must_use]
    pub const fn is_premade(&self) -> bool {
        matches!(self.kind, RecipeKind::Premade { .. })
    }

    /// Sum of the gram amounts written on every line, sub-recipe lines included
    #[must_use]
    pub fn line_weight_grams(&self) -> f64 {
        self.ingredients.iter().map(|line| line.amount_grams).sum()
    }

    /// Lines ordered by position (stable for equal positions)
    #[must_use]
    pub fn ordered_lines(&self) -> Vec<&RecipeIngredient> {
        let mut lines: Vec<&RecipeIngredient> = self.ingredients.iter().collect();
        lines.sort_by_key(|line| line.position);
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(ingredient_id: Option<Uuid>, subrecipe_id: Option<Uuid>) -> RecipeIngredientRow {
        RecipeIngredientRow {
            id: Uuid::new_v4(),
            ingredient_id,
            subrecipe_id,
            amount_grams: Some(50.0),
            display_amount: None,
            display_unit: None,
            position: 0,
        }
    }

    #[test]
    fn test_row_with_ingredient_converts() {
        let id = Uuid::new_v4();
        let line = RecipeIngredient::try_from(row(Some(id), None)).unwrap();
        assert_eq!(
            line.component,
            RecipeComponent::Ingredient { ingredient_id: id }
        );
    }

    #[test]
    fn test_row_with_subrecipe_converts() {
        let id = Uuid::new_v4();
        let line = RecipeIngredient::try_from(row(None, Some(id))).unwrap();
        assert_eq!(line.component, RecipeComponent::SubRecipe { recipe_id: id });
    }

    #[test]
    fn test_row_without_grams_rejected() {
        let mut bad = row(Some(Uuid::new_v4()), None);
        bad.amount_grams = None;
        let line_id = bad.id;
        assert_eq!(
            RecipeIngredient::try_from(bad),
            Err(ModelError::MissingAmount { line_id })
        );
    }

    #[test]
    fn test_row_with_both_references_rejected() {
        let bad = row(Some(Uuid::new_v4()), Some(Uuid::new_v4()));
        let line_id = bad.id;
        assert_eq!(
            RecipeIngredient::try_from(bad),
            Err(ModelError::AmbiguousComponent { line_id })
        );
    }

    #[test]
    fn test_row_with_no_reference_rejected() {
        let bad = row(None, None);
        let line_id = bad.id;
        assert_eq!(
            RecipeIngredient::try_from(bad),
            Err(ModelError::MissingComponent { line_id })
        );
    }

    #[test]
    fn test_with_line_assigns_positions() {
        let recipe = Recipe::new("Toast")
            .with_line(RecipeIngredient::ingredient(Uuid::new_v4(), 60.0))
            .with_line(RecipeIngredient::ingredient(Uuid::new_v4(), 10.0));

        let positions: Vec<u32> = recipe.ordered_lines().iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![0, 1]);
        assert!((recipe.line_weight_grams() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_component_serialization_is_tagged() {
        let line = RecipeIngredient::sub_recipe(Uuid::nil(), 120.0);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["component"]["kind"], "sub_recipe");
    }
}
