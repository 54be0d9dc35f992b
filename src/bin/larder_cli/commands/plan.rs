// ABOUTME: Plan and groceries commands exporting a meal plan from a snapshot
// ABOUTME: Looks the plan up by name and renders its schedule and shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use larder::export::{format_output, GroceryList, OutputFormat, PlanExport};
use larder::{AppError, AppResult, Catalog, IngredientResolver};
use larder_core::models::MealPlan;
use larder_engine::config::EngineConfig;
use tracing::info;

fn find_plan<'a>(catalog: &'a Catalog, name: &str) -> AppResult<&'a MealPlan> {
    catalog
        .meal_plan_by_name(name)
        .ok_or_else(|| AppError::not_found(format!("Meal plan '{name}'")))
}

/// Print the full plan export
pub fn export(
    catalog: &Catalog,
    resolver: &IngredientResolver<'_, Catalog>,
    name: &str,
    format: OutputFormat,
    config: &EngineConfig,
) -> Result<()> {
    let plan = find_plan(catalog, name)?;
    info!(plan = %plan.name, entries = plan.inventory.len(), "Exporting meal plan");

    let export = PlanExport::build(plan, resolver);
    println!("{}", format_output(&export, format, &config.export)?.data);
    Ok(())
}

/// Print the shopping list only
pub fn groceries(
    catalog: &Catalog,
    resolver: &IngredientResolver<'_, Catalog>,
    name: &str,
    format: OutputFormat,
    config: &EngineConfig,
) -> Result<()> {
    let plan = find_plan(catalog, name)?;
    info!(plan = %plan.name, "Building grocery list");

    let list = GroceryList::build(plan, resolver);
    println!("{}", format_output(&list, format, &config.export)?.data);
    Ok(())
}
