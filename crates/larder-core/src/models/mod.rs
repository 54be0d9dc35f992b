// ABOUTME: Core data models for the recipe planning engine
// ABOUTME: Re-exports ingredient, recipe, meal plan, and macro value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data handed over by the persistence layer. None of these types store
//! computed aggregates: nutrition totals and shopping lists are recomputed
//! from the current ingredient and recipe state on every call.

/// Base food items and their alternate measurement units
pub mod ingredient;
/// Macro nutrient value type shared by ingredients and computed results
pub mod macros;
/// Weekly meal plans with inventory and scheduled slots
pub mod meal_plan;
/// Recipes and their ingredient lines
pub mod recipe;

pub use ingredient::{Ingredient, IngredientSource, IngredientUnit};
pub use macros::Macros;
pub use meal_plan::{InventoryEntry, MealPlan, Slot};
pub use recipe::{Recipe, RecipeComponent, RecipeIngredient, RecipeIngredientRow, RecipeKind};
