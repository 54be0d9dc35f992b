// ABOUTME: Recipe macro aggregation and grocery planning engine
// ABOUTME: Resolves recipe graphs into nutrition totals, weekly rollups, and shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder Engine
//!
//! Pure, synchronous computation over a read-only snapshot of ingredients,
//! recipes and meal plans. Nothing here performs I/O or keeps state between
//! calls: every result is recomputed from the inputs, so edits to a base
//! ingredient are reflected everywhere on the next call.
//!
//! ## Pipeline
//!
//! ```text
//! RecipeSource -> resolver -> macros (totals, yield, portion) -> schedule
//!                                                             -> grocery
//! ```
//!
//! Degenerate inputs (empty recipes, zero weights, empty weeks) produce zero
//! results, and references that no longer resolve are skipped rather than
//! reported, so callers always receive a usable, possibly partial, aggregate.

/// Engine configuration (resolver depth, export formatting)
pub mod config;
/// Unit conversion from display measures to grams
pub mod conversion;
/// Grocery list aggregation across a meal plan
pub mod grocery;
/// Recipe totals, yield derivation, and per-portion macros
pub mod macros;
/// Recipe line flattening through sub-recipes
pub mod resolver;
/// Slot, day, and weekly nutrition rollups
pub mod schedule;
/// Read-only access to the ingredient and recipe graph
pub mod source;

pub use config::{ConfigError, EngineConfig};
pub use conversion::{convert_to_grams, ConversionError, MeasureUnit};
pub use grocery::{batches_for, build_grocery_list, GroceryItem, GrocerySource};
pub use macros::{
    analyze_recipe, analyze_recipes, effective_cooked_weight, effective_portion_size,
    portion_macros, premade_weight_grams, recipe_totals, recipe_totals_for, recipe_yield,
    RecipeNutrition, RecipeTotals, RecipeYield,
};
pub use resolver::{product_ingredient, IngredientResolver, ResolvedIngredient};
pub use schedule::{
    day_totals, schedule_week, slot_macros, weekly_average, DaySchedule, SlotLine, WeekSchedule,
    WeeklyAverage,
};
pub use source::{Catalog, RecipeSource};
