// ABOUTME: Grocery list aggregation from meal plan inventory entries
// ABOUTME: Sizes batches per recipe, flattens to base ingredients, and merges by ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Grocery Aggregator
//!
//! Each inventory entry asks for a number of portions of a recipe. The
//! recipe's yield says how many portions one batch makes, so
//!
//! ```text
//! batches = total_portions / (cooked_weight / portion_size)
//! ```
//!
//! Every flattened line is scaled by `batches`, then all contributions of the
//! same base ingredient are merged into one shopping item. Each item keeps a
//! per-recipe breakdown so the UI can show where the grams come from.

use std::borrow::Cow;
use std::collections::HashMap;

use larder_core::models::{InventoryEntry, MealPlan, Recipe, RecipeKind};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::macros::{recipe_totals, recipe_totals_for, recipe_yield, RecipeYield};
use crate::resolver::{product_ingredient, IngredientResolver, ResolvedIngredient};
use crate::source::RecipeSource;

/// Grams of one item attributed to one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrocerySource {
    /// Contributing recipe
    pub recipe_id: Uuid,
    /// Recipe name for display
    pub recipe_name: String,
    /// Grams contributed by this recipe
    pub grams: f64,
}

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Base ingredient (or premade product) identifier
    pub ingredient_id: Uuid,
    /// Ingredient name for display
    pub ingredient_name: String,
    /// Grams to buy
    pub total_grams: f64,
    /// Per-recipe breakdown, sorted by recipe name
    pub sources: Vec<GrocerySource>,
}

impl GroceryItem {
    fn sort_key(&self) -> (String, &str, Uuid) {
        (
            self.ingredient_name.to_lowercase(),
            self.ingredient_name.as_str(),
            self.ingredient_id,
        )
    }
}

/// Batches of a recipe with `yields` needed to cover the entry's portions
///
/// Returns `None` when the recipe yields no usable portions.
#[must_use]
pub fn batches_for(yields: &RecipeYield, entry: &InventoryEntry) -> Option<f64> {
    if yields.portion_size_g == 0.0 || yields.portions_per_batch == 0.0 {
        return None;
    }
    Some(entry.total_portions / yields.portions_per_batch)
}

#[derive(Debug)]
struct ItemAccumulator {
    name: String,
    total_grams: f64,
    sources: HashMap<Uuid, GrocerySource>,
}

impl ItemAccumulator {
    fn add(&mut self, recipe: &Recipe, grams: f64) {
        self.total_grams += grams;
        self.sources
            .entry(recipe.id)
            .or_insert_with(|| GrocerySource {
                recipe_id: recipe.id,
                recipe_name: recipe.name.clone(),
                grams: 0.0,
            })
            .grams += grams;
    }

    fn into_item(self, ingredient_id: Uuid) -> GroceryItem {
        let mut sources: Vec<GrocerySource> = self.sources.into_values().collect();
        sources.sort_by(|a, b| {
            a.recipe_name
                .to_lowercase()
                .cmp(&b.recipe_name.to_lowercase())
                .then_with(|| a.recipe_id.cmp(&b.recipe_id))
        });
        GroceryItem {
            ingredient_id,
            ingredient_name: self.name,
            total_grams: self.total_grams,
            sources,
        }
    }
}

/// Aggregate the shopping list for a meal plan
///
/// Entries whose recipe is missing or yields no portions are skipped.
/// The result is sorted by ingredient name, case-insensitively.
#[must_use]
pub fn build_grocery_list<S: RecipeSource + ?Sized>(
    plan: &MealPlan,
    resolver: &IngredientResolver<'_, S>,
) -> Vec<GroceryItem> {
    let mut items: HashMap<Uuid, ItemAccumulator> = HashMap::new();

    for entry in &plan.inventory {
        let Some(recipe) = resolver.source().recipe(&entry.recipe_id) else {
            debug!(
                plan = %plan.name,
                recipe_id = %entry.recipe_id,
                "Skipping inventory entry with unresolved recipe"
            );
            continue;
        };
        let (totals, contributions): (_, Vec<ResolvedIngredient<'_>>) = match recipe.kind {
            RecipeKind::Premade { per_100g } => {
                let totals = recipe_totals_for(recipe, resolver);
                let product = ResolvedIngredient {
                    ingredient: Cow::Owned(product_ingredient(recipe, per_100g)),
                    grams: totals.weight_g,
                };
                (totals, vec![product])
            }
            RecipeKind::Composed => {
                let flat = resolver.flatten_recipe(recipe);
                (recipe_totals(&flat), flat)
            }
        };
        let yields = recipe_yield(recipe, &totals);
        let Some(batches) = batches_for(&yields, entry) else {
            debug!(
                plan = %plan.name,
                recipe = %recipe.name,
                "Skipping inventory entry whose recipe yields no portions"
            );
            continue;
        };

        for contribution in contributions {
            let contribution = contribution.scaled(batches);
            items
                .entry(contribution.ingredient.id)
                .or_insert_with(|| ItemAccumulator {
                    name: contribution.ingredient.name.clone(),
                    total_grams: 0.0,
                    sources: HashMap::new(),
                })
                .add(recipe, contribution.grams);
        }
    }

    let mut list: Vec<GroceryItem> = items
        .into_iter()
        .map(|(id, acc)| acc.into_item(id))
        .collect();
    list.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    list
}
