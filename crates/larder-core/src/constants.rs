// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit equivalences, nutrition reference amounts, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Fixed gram and millilitre equivalences for standard measurement units
pub mod units {
    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
    /// Grams per ounce
    pub const GRAMS_PER_OZ: f64 = 28.35;
    /// Grams per pound
    pub const GRAMS_PER_LB: f64 = 453.6;
    /// Millilitres per US cup
    pub const ML_PER_CUP: f64 = 240.0;
    /// Millilitres per tablespoon
    pub const ML_PER_TBSP: f64 = 15.0;
    /// Millilitres per teaspoon
    pub const ML_PER_TSP: f64 = 5.0;
}

/// Nutrition reference amounts
pub mod nutrition {
    /// Macros on ingredients are expressed per this many grams
    pub const REFERENCE_GRAMS: f64 = 100.0;
    /// Weight assumed for a premade product that declares neither a net weight nor a portion size
    pub const PREMADE_REFERENCE_GRAMS: f64 = 100.0;
    /// Days in a meal plan week
    pub const DAYS_PER_WEEK: usize = 7;
}

/// Environment variable names read by configuration loaders
pub mod env_config {
    /// Maximum sub-recipe nesting depth the resolver expands
    pub const MAX_SUBRECIPE_DEPTH: &str = "LARDER_MAX_SUBRECIPE_DEPTH";
    /// Gram amount at and above which exports switch to kilograms
    pub const KG_THRESHOLD_GRAMS: &str = "LARDER_KG_THRESHOLD_GRAMS";
    /// Number of decimals printed for macro values in exports
    pub const EXPORT_DECIMALS: &str = "LARDER_EXPORT_DECIMALS";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the command-line service
    pub const LARDER_CLI: &str = "larder";
}
