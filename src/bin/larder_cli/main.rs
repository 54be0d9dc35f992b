// ABOUTME: Larder CLI - nutrition tables, weekly plan exports, and grocery lists from snapshot files
// ABOUTME: Parses arguments, sets up logging and engine configuration, and dispatches subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Per-portion nutrition for every recipe in the snapshot
//! larder recipe snapshot.json
//!
//! # One recipe only
//! larder recipe snapshot.json --name "Chicken Bowl"
//!
//! # Weekly schedule and shopping list for a plan
//! larder plan snapshot.json --name "Week 12"
//!
//! # Shopping list only, as JSON, expanding two sub-recipe levels
//! larder groceries snapshot.json --name "Week 12" --format json --depth 2
//! ```

mod commands;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use larder::export::OutputFormat;
use larder::logging::LoggingConfig;
use larder::snapshot::Snapshot;
use larder::{AppError, ErrorCode, IngredientResolver};
use larder_engine::config::{EngineConfig, MAX_SUBRECIPE_DEPTH_LIMIT};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "larder",
    version,
    about = "Recipe macro aggregation and grocery planning",
    long_about = "Computes per-portion nutrition, weekly meal plan rollups, and aggregated grocery lists from a JSON snapshot of ingredients, recipes, and meal plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Sub-recipe levels to expand (overrides LARDER_MAX_SUBRECIPE_DEPTH)
    #[arg(long, global = true)]
    depth: Option<usize>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Per-portion nutrition table
    Recipe {
        /// Snapshot file
        snapshot: PathBuf,

        /// Recipe name (all recipes if omitted)
        #[arg(long)]
        name: Option<String>,

        /// Output format (markdown or json)
        #[arg(long, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },

    /// Weekly schedule and grocery list for a meal plan
    Plan {
        /// Snapshot file
        snapshot: PathBuf,

        /// Meal plan name
        #[arg(long)]
        name: String,

        /// Output format (markdown or json)
        #[arg(long, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },

    /// Grocery list for a meal plan
    Groceries {
        /// Snapshot file
        snapshot: PathBuf,

        /// Meal plan name
        #[arg(long)]
        name: String,

        /// Output format (markdown or json)
        #[arg(long, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },
}

impl Command {
    fn snapshot(&self) -> &Path {
        match self {
            Self::Recipe { snapshot, .. }
            | Self::Plan { snapshot, .. }
            | Self::Groceries { snapshot, .. } => snapshot,
        }
    }
}

fn engine_config(depth: Option<usize>) -> Result<EngineConfig> {
    let mut config =
        EngineConfig::load().map_err(|e| AppError::config(e.to_string()).with_source(e))?;
    if let Some(depth) = depth {
        if depth > MAX_SUBRECIPE_DEPTH_LIMIT {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("--depth must be at most {MAX_SUBRECIPE_DEPTH_LIMIT} (got {depth})"),
            )
            .into());
        }
        config.resolver.max_subrecipe_depth = depth;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let config = engine_config(cli.depth)?;
    info!(
        max_subrecipe_depth = config.resolver.max_subrecipe_depth,
        "Larder CLI"
    );

    let catalog = Snapshot::load(cli.command.snapshot())?.into_catalog()?;
    let resolver = IngredientResolver::from_config(&catalog, &config);

    match &cli.command {
        Command::Recipe { name, format, .. } => {
            commands::recipe::show(&catalog, &resolver, name.as_deref(), *format, &config)?;
        }
        Command::Plan { name, format, .. } => {
            commands::plan::export(&catalog, &resolver, name, *format, &config)?;
        }
        Command::Groceries { name, format, .. } => {
            commands::plan::groceries(&catalog, &resolver, name, *format, &config)?;
        }
    }

    Ok(())
}
