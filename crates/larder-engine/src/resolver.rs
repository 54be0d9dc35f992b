// ABOUTME: Recipe line resolver flattening ingredient and sub-recipe lines to base ingredient grams
// ABOUTME: Scales sub-recipe contributions by the consumed share of their cooked yield
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Resolver
//!
//! Turns one recipe line into concrete `(ingredient, grams)` pairs.
//!
//! A sub-recipe line is measured in grams of the sub-recipe's *cooked*
//! product, because that is what a cook spoons out of the finished dish.
//! The resolver converts that back to raw-ingredient proportions:
//!
//! ```text
//! effective_weight = sub.cooked_weight ?? Σ sub.lines.amount_grams
//! fraction         = line.amount_grams / effective_weight
//! contribution     = each sub line × fraction
//! ```
//!
//! Expansion depth is bounded. At the default depth of one, lines of a
//! sub-recipe that are themselves sub-recipes are dropped. Deeper settings
//! expand depth-first, and a recipe already on the current path is skipped
//! so cyclic references terminate.

use std::borrow::Cow;

use larder_core::models::{Ingredient, Macros, Recipe, RecipeComponent, RecipeIngredient, RecipeKind};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{EngineConfig, DEFAULT_MAX_SUBRECIPE_DEPTH};
use crate::source::RecipeSource;

/// A base ingredient and the grams of it a line consumes
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIngredient<'a> {
    /// The base ingredient (owned only for premade products standing in as ingredients)
    pub ingredient: Cow<'a, Ingredient>,
    /// Raw grams consumed
    pub grams: f64,
}

impl<'a> ResolvedIngredient<'a> {
    /// Pair a borrowed ingredient with an amount
    #[must_use]
    pub const fn borrowed(ingredient: &'a Ingredient, grams: f64) -> Self {
        Self {
            ingredient: Cow::Borrowed(ingredient),
            grams,
        }
    }

    /// Same ingredient, amount multiplied by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            ingredient: self.ingredient,
            grams: self.grams * factor,
        }
    }

    /// Macros contributed by this amount
    #[must_use]
    pub fn macros(&self) -> Macros {
        self.ingredient.macros_for(self.grams)
    }
}

/// A premade product presented as a base ingredient
///
/// The synthetic ingredient shares the recipe's id and name so that grocery
/// lists key and label it like any other item.
#[must_use]
pub fn product_ingredient(recipe: &Recipe, per_100g: Macros) -> Ingredient {
    let mut ingredient = Ingredient::new(recipe.name.clone(), per_100g).with_id(recipe.id);
    ingredient.user_id = recipe.user_id;
    ingredient
}

/// Flattens recipe lines against a `RecipeSource`
#[derive(Debug)]
pub struct IngredientResolver<'a, S: RecipeSource + ?Sized> {
    source: &'a S,
    max_depth: usize,
}

impl<S: RecipeSource + ?Sized> Clone for IngredientResolver<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: RecipeSource + ?Sized> Copy for IngredientResolver<'_, S> {}

impl<'a, S: RecipeSource + ?Sized> IngredientResolver<'a, S> {
    /// Resolver with the default depth of one sub-recipe level
    #[must_use]
    pub const fn new(source: &'a S) -> Self {
        Self {
            source,
            max_depth: DEFAULT_MAX_SUBRECIPE_DEPTH,
        }
    }

    /// Resolver using the configured depth
    #[must_use]
    pub const fn from_config(source: &'a S, config: &EngineConfig) -> Self {
        Self {
            source,
            max_depth: config.resolver.max_subrecipe_depth,
        }
    }

    /// Override the number of sub-recipe levels expanded (0 disables expansion)
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The underlying source
    #[must_use]
    pub const fn source(&self) -> &'a S {
        self.source
    }

    /// Configured expansion depth
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Flatten a single line
    ///
    /// Never fails: unresolved references contribute nothing.
    #[must_use]
    pub fn resolve_line(&self, line: &RecipeIngredient) -> Vec<ResolvedIngredient<'a>> {
        let mut resolved = Vec::new();
        let mut path = Vec::new();
        self.resolve_into(line, 1.0, self.max_depth, &mut path, &mut resolved);
        resolved
    }

    /// Flatten every line of `recipe`, guarding against the recipe referencing itself
    #[must_use]
    pub fn flatten_recipe(&self, recipe: &Recipe) -> Vec<ResolvedIngredient<'a>> {
        let mut resolved = Vec::new();
        let mut path = vec![recipe.id];
        for line in &recipe.ingredients {
            self.resolve_into(line, 1.0, self.max_depth, &mut path, &mut resolved);
        }
        resolved
    }

    fn resolve_into(
        &self,
        line: &RecipeIngredient,
        factor: f64,
        depth_remaining: usize,
        path: &mut Vec<Uuid>,
        resolved: &mut Vec<ResolvedIngredient<'a>>,
    ) {
        let source: &'a S = self.source;

        match line.component {
            RecipeComponent::Ingredient { ingredient_id } => {
                if let Some(ingredient) = source.ingredient(&ingredient_id) {
                    resolved.push(ResolvedIngredient::borrowed(
                        ingredient,
                        line.amount_grams * factor,
                    ));
                } else {
                    debug!(
                        line_id = %line.id,
                        %ingredient_id,
                        "Skipping recipe line with unresolved ingredient"
                    );
                }
            }
            RecipeComponent::SubRecipe { recipe_id } => {
                if depth_remaining == 0 {
                    debug!(
                        line_id = %line.id,
                        %recipe_id,
                        "Skipping sub-recipe line beyond resolution depth"
                    );
                    return;
                }
                let Some(sub_recipe) = source.recipe(&recipe_id) else {
                    debug!(
                        line_id = %line.id,
                        %recipe_id,
                        "Skipping recipe line with unresolved sub-recipe"
                    );
                    return;
                };
                if path.contains(&recipe_id) {
                    warn!(
                        %recipe_id,
                        recipe = %sub_recipe.name,
                        "Cyclic sub-recipe reference, contribution skipped"
                    );
                    return;
                }

                if let RecipeKind::Premade { per_100g } = sub_recipe.kind {
                    resolved.push(ResolvedIngredient {
                        ingredient: Cow::Owned(product_ingredient(sub_recipe, per_100g)),
                        grams: line.amount_grams * factor,
                    });
                    return;
                }

                let raw_total = sub_recipe.line_weight_grams();
                let effective_weight = sub_recipe.cooked_weight_g.unwrap_or(raw_total);
                if effective_weight == 0.0 {
                    return;
                }
                let fraction = line.amount_grams / effective_weight;

                path.push(recipe_id);
                for sub_line in &sub_recipe.ingredients {
                    self.resolve_into(
                        sub_line,
                        factor * fraction,
                        depth_remaining - 1,
                        path,
                        resolved,
                    );
                }
                path.pop();
            }
        }
    }
}
