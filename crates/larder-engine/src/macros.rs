// ABOUTME: Recipe totals, yield derivation, and per-portion macro calculation
// ABOUTME: Converts flattened ingredient amounts into recipe and portion nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Macros
//!
//! Three yield concepts meet here, each with its own fallback:
//!
//! - **raw weight**: the grams written on the recipe lines
//! - **cooked weight**: grams after cooking, falling back to the raw weight
//! - **portion size**: grams per serving, falling back to the whole dish
//!
//! A stored cooked weight or portion size of zero is treated as unset.
//!
//! ```text
//! per_portion = totals × (portion_size / cooked_weight)
//! ```

use larder_core::constants::nutrition::{PREMADE_REFERENCE_GRAMS, REFERENCE_GRAMS};
use larder_core::models::{Macros, Recipe, RecipeKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::resolver::{IngredientResolver, ResolvedIngredient};
use crate::source::RecipeSource;

/// Summed macros and raw weight of a flat ingredient list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecipeTotals {
    /// Summed macros
    #[serde(flatten)]
    pub macros: Macros,
    /// Summed raw grams
    pub weight_g: f64,
}

impl RecipeTotals {
    /// All-zero totals
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            macros: Macros::zero(),
            weight_g: 0.0,
        }
    }
}

/// Sum macros and weight over resolved ingredient amounts
///
/// Each macro is `Σ grams / 100 × per_100g`. An empty list yields zero totals.
#[must_use]
pub fn recipe_totals(items: &[ResolvedIngredient<'_>]) -> RecipeTotals {
    items
        .iter()
        .fold(RecipeTotals::zero(), |acc, item| RecipeTotals {
            macros: acc.macros + item.macros(),
            weight_g: acc.weight_g + item.grams,
        })
}

/// Cooked weight if set and positive, otherwise the raw weight
#[must_use]
pub fn effective_cooked_weight(raw_weight: f64, cooked_weight: Option<f64>) -> f64 {
    cooked_weight.filter(|grams| *grams > 0.0).unwrap_or(raw_weight)
}

/// Portion size if set and positive, otherwise the whole cooked dish
#[must_use]
pub fn effective_portion_size(cooked_weight: f64, portion_size: Option<f64>) -> f64 {
    portion_size
        .filter(|grams| *grams > 0.0)
        .unwrap_or(cooked_weight)
}

/// Macros of exactly one portion; zero when the cooked weight is zero
#[must_use]
pub fn portion_macros(totals: &RecipeTotals, cooked_weight: f64, portion_size: f64) -> Macros {
    if cooked_weight == 0.0 {
        return Macros::zero();
    }
    totals.macros.scaled(portion_size / cooked_weight)
}

/// Net weight of a premade product: cooked weight, else portion size, else 100 g
#[must_use]
pub fn premade_weight_grams(recipe: &Recipe) -> f64 {
    recipe
        .cooked_weight_g
        .filter(|grams| *grams > 0.0)
        .or_else(|| recipe.portion_size_g.filter(|grams| *grams > 0.0))
        .unwrap_or(PREMADE_REFERENCE_GRAMS)
}

/// Derived yield of one batch of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeYield {
    /// Resolved raw grams (net weight for premade products)
    pub raw_weight_g: f64,
    /// Effective cooked weight
    pub cooked_weight_g: f64,
    /// Effective portion size
    pub portion_size_g: f64,
    /// Portions one batch produces; zero when the portion size is zero
    pub portions_per_batch: f64,
}

/// Resolve a recipe's yield fields to concrete values
///
/// The raw weight is the weight of `totals`, so lines that no longer resolve
/// count toward neither the macros nor the yield.
#[must_use]
pub fn recipe_yield(recipe: &Recipe, totals: &RecipeTotals) -> RecipeYield {
    let raw_weight_g = totals.weight_g;
    let cooked_weight_g = effective_cooked_weight(raw_weight_g, recipe.cooked_weight_g);
    let portion_size_g = effective_portion_size(cooked_weight_g, recipe.portion_size_g);
    let portions_per_batch = if portion_size_g == 0.0 {
        0.0
    } else {
        cooked_weight_g / portion_size_g
    };

    RecipeYield {
        raw_weight_g,
        cooked_weight_g,
        portion_size_g,
        portions_per_batch,
    }
}

/// Totals for one batch of a recipe
///
/// Composed recipes are flattened through the resolver. Premade products use
/// their label macros scaled to their net weight.
#[must_use]
pub fn recipe_totals_for<S: RecipeSource + ?Sized>(
    recipe: &Recipe,
    resolver: &IngredientResolver<'_, S>,
) -> RecipeTotals {
    match recipe.kind {
        RecipeKind::Premade { per_100g } => {
            let weight_g = premade_weight_grams(recipe);
            RecipeTotals {
                macros: per_100g.scaled(weight_g / REFERENCE_GRAMS),
                weight_g,
            }
        }
        RecipeKind::Composed => recipe_totals(&resolver.flatten_recipe(recipe)),
    }
}

/// Nutrition summary of a recipe for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutrition {
    /// Recipe identifier
    pub recipe_id: Uuid,
    /// Recipe name
    pub recipe_name: String,
    /// Totals for one batch
    pub totals: RecipeTotals,
    /// Derived yield
    #[serde(rename = "yield")]
    pub recipe_yield: RecipeYield,
    /// Macros of one portion
    pub per_portion: Macros,
}

/// Compute totals, yield, and portion macros for a recipe
#[must_use]
pub fn analyze_recipe<S: RecipeSource + ?Sized>(
    recipe: &Recipe,
    resolver: &IngredientResolver<'_, S>,
) -> RecipeNutrition {
    let totals = recipe_totals_for(recipe, resolver);
    let recipe_yield = recipe_yield(recipe, &totals);
    let per_portion = portion_macros(
        &totals,
        recipe_yield.cooked_weight_g,
        recipe_yield.portion_size_g,
    );

    RecipeNutrition {
        recipe_id: recipe.id,
        recipe_name: recipe.name.clone(),
        totals,
        recipe_yield,
        per_portion,
    }
}

/// Analyze many recipes in parallel; results keep the input order
#[must_use]
pub fn analyze_recipes<S: RecipeSource + Sync + ?Sized>(
    recipes: &[&Recipe],
    resolver: &IngredientResolver<'_, S>,
) -> Vec<RecipeNutrition> {
    recipes
        .par_iter()
        .map(|recipe| analyze_recipe(recipe, resolver))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Catalog;

    #[test]
    fn test_zero_yield_fields_fall_back() {
        assert!((effective_cooked_weight(350.0, Some(0.0)) - 350.0).abs() < 1e-9);
        assert!((effective_cooked_weight(350.0, None) - 350.0).abs() < 1e-9);
        assert!((effective_cooked_weight(350.0, Some(300.0)) - 300.0).abs() < 1e-9);
        assert!((effective_portion_size(300.0, Some(0.0)) - 300.0).abs() < 1e-9);
        assert!((effective_portion_size(300.0, Some(150.0)) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_portion_macros_guard_zero_cooked_weight() {
        let totals = RecipeTotals {
            macros: Macros::new(10.0, 10.0, 10.0, 170.0),
            weight_g: 0.0,
        };
        assert_eq!(portion_macros(&totals, 0.0, 0.0), Macros::zero());
    }

    #[test]
    fn test_premade_weight_fallbacks() {
        let bar = Recipe::premade("Protein bar", Macros::new(33.0, 40.0, 15.0, 420.0));
        assert!((premade_weight_grams(&bar) - PREMADE_REFERENCE_GRAMS).abs() < 1e-9);

        let bar = bar.with_portion_size(60.0);
        assert!((premade_weight_grams(&bar) - 60.0).abs() < 1e-9);

        let bar = bar.with_cooked_weight(240.0);
        assert!((premade_weight_grams(&bar) - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_yield_of_empty_recipe_has_no_portions() {
        let yields = recipe_yield(&Recipe::new("Empty"), &RecipeTotals::zero());
        assert!(yields.cooked_weight_g.abs() < f64::EPSILON);
        assert!(yields.portions_per_batch.abs() < f64::EPSILON);
    }

    #[test]
    fn test_premade_yield_uses_net_weight() {
        let bar = Recipe::premade("Protein bar", Macros::new(33.0, 40.0, 15.0, 420.0))
            .with_cooked_weight(240.0)
            .with_portion_size(60.0);
        let catalog = Catalog::new();
        let totals = recipe_totals_for(&bar, &IngredientResolver::new(&catalog));

        let yields = recipe_yield(&bar, &totals);

        assert!((yields.raw_weight_g - 240.0).abs() < 1e-9);
        assert!((yields.portions_per_batch - 4.0).abs() < 1e-9);
    }
}
