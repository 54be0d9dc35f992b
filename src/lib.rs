// ABOUTME: Main library entry point for the Larder nutrition planning tool
// ABOUTME: Snapshot loading, export rendering, and logging setup around the engine crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder
//!
//! Recipe macro aggregation and grocery planning. The computation lives in
//! `larder-engine`; this crate wraps it with the pieces a front end needs:
//!
//! - **snapshot**: JSON files holding a user's ingredients, recipes and meal plans
//! - **export**: Markdown and JSON rendering of schedules, shopping lists and recipe tables
//! - **logging**: `tracing` subscriber setup driven by environment variables
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use larder::export::{format_output, GroceryList, OutputFormat};
//! use larder::snapshot::Snapshot;
//! use larder_engine::{config::EngineConfig, IngredientResolver};
//!
//! # fn main() -> anyhow::Result<()> {
//! let catalog = Snapshot::load("snapshot.json")?.into_catalog()?;
//! let config = EngineConfig::load()?;
//! let resolver = IngredientResolver::from_config(&catalog, &config);
//!
//! for plan in catalog.meal_plans() {
//!     let list = GroceryList::build(plan, &resolver);
//!     println!("{}", format_output(&list, OutputFormat::Json, &config.export)?.data);
//! }
//! # Ok(())
//! # }
//! ```

/// Markdown and JSON export of engine aggregates
pub mod export;

/// Logging configuration and subscriber initialization
pub mod logging;

/// JSON snapshot loading and validation
pub mod snapshot;

pub use larder_core::errors::{AppError, AppResult, ErrorCode};
pub use larder_core::models;
pub use larder_engine::{Catalog, IngredientResolver, RecipeSource};
