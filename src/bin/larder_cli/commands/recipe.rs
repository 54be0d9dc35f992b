// ABOUTME: Recipe command printing per-portion nutrition for one or all recipes
// ABOUTME: Analyzes every recipe in parallel when no name is given
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use larder::export::{format_output, OutputFormat, RecipeReport};
use larder::{AppError, Catalog, IngredientResolver};
use larder_core::models::Recipe;
use larder_engine::config::EngineConfig;
use tracing::info;

/// Print the nutrition table
pub fn show(
    catalog: &Catalog,
    resolver: &IngredientResolver<'_, Catalog>,
    name: Option<&str>,
    format: OutputFormat,
    config: &EngineConfig,
) -> Result<()> {
    let recipes: Vec<&Recipe> = match name {
        Some(name) => {
            let recipe = catalog
                .recipe_by_name(name)
                .ok_or_else(|| AppError::not_found(format!("Recipe '{name}'")))?;
            vec![recipe]
        }
        None => catalog.recipes(),
    };

    info!(count = recipes.len(), "Analyzing recipes");
    let report = RecipeReport::build(&recipes, resolver);
    println!("{}", format_output(&report, format, &config.export)?.data);
    Ok(())
}
