// ABOUTME: Read-only lookup trait over the ingredient and recipe graph
// ABOUTME: Provides the in-memory Catalog implementation used by snapshots and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use larder_core::models::{Ingredient, MealPlan, Recipe};
use uuid::Uuid;

/// Lookup of ingredients and recipes by id
///
/// This is the engine's only view of persistence. A `None` answer means the
/// referenced entity was deleted after being referenced; the engine treats
/// that as a broken reference and skips the contribution.
pub trait RecipeSource {
    /// Find an ingredient by id
    fn ingredient(&self, id: &Uuid) -> Option<&Ingredient>;

    /// Find a recipe by id
    fn recipe(&self, id: &Uuid) -> Option<&Recipe>;
}

/// In-memory snapshot of ingredients, recipes, and meal plans
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: HashMap<Uuid, Ingredient>,
    recipes: HashMap<Uuid, Recipe>,
    meal_plans: Vec<MealPlan>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an ingredient
    pub fn insert_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.id, ingredient);
    }

    /// Insert or replace a recipe
    pub fn insert_recipe(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.id, recipe);
    }

    /// Add a meal plan
    pub fn insert_meal_plan(&mut self, plan: MealPlan) {
        self.meal_plans.push(plan);
    }

    /// Builder form of `insert_ingredient`
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.insert_ingredient(ingredient);
        self
    }

    /// Builder form of `insert_recipe`
    #[must_use]
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.insert_recipe(recipe);
        self
    }

    /// Builder form of `insert_meal_plan`
    #[must_use]
    pub fn with_meal_plan(mut self, plan: MealPlan) -> Self {
        self.insert_meal_plan(plan);
        self
    }

    /// Remove an ingredient, leaving any references to it dangling
    pub fn remove_ingredient(&mut self, id: &Uuid) -> Option<Ingredient> {
        self.ingredients.remove(id)
    }

    /// Remove a recipe, leaving any references to it dangling
    pub fn remove_recipe(&mut self, id: &Uuid) -> Option<Recipe> {
        self.recipes.remove(id)
    }

    /// All recipes, sorted by name for stable output
    #[must_use]
    pub fn recipes(&self) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.values().collect();
        recipes.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        recipes
    }

    /// Meal plans in insertion order
    #[must_use]
    pub fn meal_plans(&self) -> &[MealPlan] {
        &self.meal_plans
    }

    /// Find a recipe by name (case-insensitive)
    #[must_use]
    pub fn recipe_by_name(&self, name: &str) -> Option<&Recipe> {
        self.recipes
            .values()
            .find(|recipe| recipe.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Find a meal plan by name (case-insensitive)
    #[must_use]
    pub fn meal_plan_by_name(&self, name: &str) -> Option<&MealPlan> {
        self.meal_plans
            .iter()
            .find(|plan| plan.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl RecipeSource for Catalog {
    fn ingredient(&self, id: &Uuid) -> Option<&Ingredient> {
        self.ingredients.get(id)
    }

    fn recipe(&self, id: &Uuid) -> Option<&Recipe> {
        self.recipes.get(id)
    }
}
