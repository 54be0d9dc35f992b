// ABOUTME: Output format abstraction for rendering plans, grocery lists, and recipe reports
// ABOUTME: Supports Markdown (default, human readable) and pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Export Layer
//!
//! Thin templating over the engine's aggregates. Every exportable value is
//! `Serialize` for JSON and implements [`MarkdownExport`] for text.
//!
//! ```rust,no_run
//! use larder::export::{format_output, OutputFormat, PlanExport};
//! use larder::snapshot::Snapshot;
//! use larder_engine::{config::EngineConfig, IngredientResolver};
//!
//! # fn main() -> anyhow::Result<()> {
//! let catalog = Snapshot::load("snapshot.json")?.into_catalog()?;
//! let config = EngineConfig::global();
//! let resolver = IngredientResolver::from_config(&catalog, config);
//! if let Some(plan) = catalog.meal_plan_by_name("Week 12") {
//!     let export = PlanExport::build(plan, &resolver);
//!     println!("{}", format_output(&export, OutputFormat::Markdown, &config.export)?.data);
//! }
//! # Ok(())
//! # }
//! ```

/// Markdown rendering
pub mod markdown;

use std::fmt;
use std::str::FromStr;

use larder_core::models::{MealPlan, Recipe};
use larder_engine::config::ExportConfig;
use larder_engine::{
    analyze_recipes, build_grocery_list, schedule_week, GroceryItem, IngredientResolver,
    RecipeNutrition, RecipeSource, WeekSchedule,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use markdown::{format_grams, format_macros, MarkdownExport};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown text (default)
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown",
            Self::Json => "application/json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" | "text" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}' (expected markdown or json)"
            )),
        }
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered document
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

/// Render `data` in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T: Serialize + MarkdownExport>(
    data: &T,
    format: OutputFormat,
    config: &ExportConfig,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Markdown => data.to_markdown(config),
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Shopping list for a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    /// Plan name
    pub plan_name: String,
    /// Items sorted by name
    pub items: Vec<GroceryItem>,
}

impl GroceryList {
    /// Aggregate the shopping list of `plan`
    #[must_use]
    pub fn build<S: RecipeSource + ?Sized>(
        plan: &MealPlan,
        resolver: &IngredientResolver<'_, S>,
    ) -> Self {
        Self {
            plan_name: plan.name.clone(),
            items: build_grocery_list(plan, resolver),
        }
    }
}

/// Full export of a meal plan: weekly schedule plus shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanExport {
    /// Slot, day and weekly rollups
    pub schedule: WeekSchedule,
    /// Aggregated shopping list
    pub groceries: Vec<GroceryItem>,
}

impl PlanExport {
    /// Compute the schedule and shopping list of `plan`
    #[must_use]
    pub fn build<S: RecipeSource + ?Sized>(
        plan: &MealPlan,
        resolver: &IngredientResolver<'_, S>,
    ) -> Self {
        Self {
            schedule: schedule_week(plan, resolver),
            groceries: build_grocery_list(plan, resolver),
        }
    }
}

/// Nutrition table for a set of recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeReport {
    /// One row per recipe, in input order
    pub recipes: Vec<RecipeNutrition>,
}

impl RecipeReport {
    /// Analyze `recipes` in parallel
    #[must_use]
    pub fn build<S: RecipeSource + Sync + ?Sized>(
        recipes: &[&Recipe],
        resolver: &IngredientResolver<'_, S>,
    ) -> Self {
        Self {
            recipes: analyze_recipes(recipes, resolver),
        }
    }
}
