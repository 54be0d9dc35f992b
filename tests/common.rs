// ABOUTME: Shared test fixtures and setup functions for larder integration tests
// ABOUTME: Provides sample ingredients, recipes, meal plans, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared fixtures for `larder` integration tests

use std::env;
use std::sync::Once;

use larder::models::{
    Ingredient, IngredientUnit, InventoryEntry, Macros, MealPlan, Recipe, RecipeIngredient, Slot,
};
use larder::snapshot::Snapshot;
use larder::Catalog;

static INIT_LOGGER: Once = Once::new();

/// Comparison tolerance for computed macros and grams
pub const EPSILON: f64 = 1e-6;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Assert two floats are equal within `EPSILON`
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}

// ============================================================================
// INGREDIENTS
// ============================================================================

pub fn chicken_breast() -> Ingredient {
    Ingredient::new("Chicken breast", Macros::new(31.0, 0.0, 3.6, 165.0))
}

pub fn rice() -> Ingredient {
    Ingredient::new("Rice", Macros::new(2.7, 28.0, 0.3, 130.0).with_fiber(0.4))
}

pub fn garlic() -> Ingredient {
    Ingredient::new("Garlic", Macros::new(6.4, 33.0, 0.5, 149.0).with_fiber(2.1))
        .with_unit(IngredientUnit::new("clove", 3.0).as_default())
}

pub fn olive_oil() -> Ingredient {
    Ingredient::new("Olive oil", Macros::new(0.0, 0.0, 100.0, 884.0)).with_density(0.92)
}

pub fn tomato() -> Ingredient {
    Ingredient::new("Tomato", Macros::new(0.9, 3.9, 0.2, 18.0).with_fiber(1.2))
}

// ============================================================================
// RECIPES
// ============================================================================

/// 150 g chicken + 200 g rice, cooked to 300 g, 150 g portions
pub fn chicken_bowl(chicken: &Ingredient, rice: &Ingredient) -> Recipe {
    Recipe::new("Chicken Bowl")
        .with_line(RecipeIngredient::ingredient(chicken.id, 150.0))
        .with_line(RecipeIngredient::ingredient(rice.id, 200.0))
        .with_cooked_weight(300.0)
        .with_portion_size(150.0)
}

/// Tomato sauce with garlic and oil, reduced to 250 g
pub fn tomato_sauce(tomato: &Ingredient, garlic: &Ingredient, oil: &Ingredient) -> Recipe {
    Recipe::new("Tomato sauce")
        .with_line(RecipeIngredient::ingredient(tomato.id, 400.0))
        .with_line(RecipeIngredient::ingredient(garlic.id, 12.0))
        .with_line(RecipeIngredient::ingredient(oil.id, 20.0))
        .with_cooked_weight(250.0)
}

/// Everything needed for a small week of cooking
pub struct Kitchen {
    pub chicken: Ingredient,
    pub rice: Ingredient,
    pub garlic: Ingredient,
    pub oil: Ingredient,
    pub tomato: Ingredient,
    pub bowl: Recipe,
    pub sauce: Recipe,
    pub garlic_chicken: Recipe,
    pub plan: MealPlan,
}

impl Kitchen {
    pub fn new() -> Self {
        let chicken = chicken_breast();
        let rice = rice();
        let garlic = garlic();
        let oil = olive_oil();
        let tomato = tomato();

        let bowl = chicken_bowl(&chicken, &rice);
        let sauce = tomato_sauce(&tomato, &garlic, &oil);
        let garlic_chicken = Recipe::new("Garlic chicken")
            .with_line(RecipeIngredient::ingredient(chicken.id, 375.0))
            .with_line(RecipeIngredient::ingredient(garlic.id, 9.0))
            .with_line(RecipeIngredient::sub_recipe(sauce.id, 125.0))
            .with_portion_size(200.0);

        let plan = MealPlan::new("Week 12")
            .with_entry(
                InventoryEntry::new(bowl.id, 4.0)
                    .with_slot(Slot::new(0, 1))
                    .with_slot(Slot::new(0, 0).with_portions(2.0))
                    .with_slot(Slot::new(3, 0)),
            )
            .with_entry(InventoryEntry::new(garlic_chicken.id, 3.0).with_slot(Slot::new(3, 1)));

        Self {
            chicken,
            rice,
            garlic,
            oil,
            tomato,
            bowl,
            sauce,
            garlic_chicken,
            plan,
        }
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new()
            .with_ingredient(self.chicken.clone())
            .with_ingredient(self.rice.clone())
            .with_ingredient(self.garlic.clone())
            .with_ingredient(self.oil.clone())
            .with_ingredient(self.tomato.clone())
            .with_recipe(self.bowl.clone())
            .with_recipe(self.sauce.clone())
            .with_recipe(self.garlic_chicken.clone())
            .with_meal_plan(self.plan.clone())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .with_ingredient(self.chicken.clone())
            .with_ingredient(self.rice.clone())
            .with_ingredient(self.garlic.clone())
            .with_ingredient(self.oil.clone())
            .with_ingredient(self.tomato.clone())
            .with_recipe(&self.bowl)
            .with_recipe(&self.sauce)
            .with_recipe(&self.garlic_chicken)
            .with_meal_plan(self.plan.clone())
    }
}

impl Default for Kitchen {
    fn default() -> Self {
        Self::new()
    }
}
