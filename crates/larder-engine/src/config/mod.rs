// ABOUTME: Engine configuration for sub-recipe resolution depth and export formatting
// ABOUTME: Loads defaults, applies environment overrides, validates, and exposes a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export LARDER_MAX_SUBRECIPE_DEPTH=3
//!    export LARDER_KG_THRESHOLD_GRAMS=1000
//!    export LARDER_EXPORT_DECIMALS=1
//!    ```
//!
//! 2. Default values (if env vars not set)

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use larder_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

/// Sub-recipe levels expanded by default (the sub-recipe's own ingredient lines only)
pub const DEFAULT_MAX_SUBRECIPE_DEPTH: usize = 1;

/// Upper bound on configurable sub-recipe depth
pub const MAX_SUBRECIPE_DEPTH_LIMIT: usize = 16;

/// Upper bound on decimals printed in exports
pub const MAX_EXPORT_DECIMALS: usize = 4;

/// Sub-recipe resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Sub-recipe levels expanded below a recipe (0 disables expansion)
    pub max_subrecipe_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_subrecipe_depth: DEFAULT_MAX_SUBRECIPE_DEPTH,
        }
    }
}

/// Text export formatting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Grocery amounts at or above this many grams are printed in kilograms
    pub kilogram_threshold_grams: f64,
    /// Decimals printed for macro values
    pub decimals: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            kilogram_threshold_grams: 1000.0,
            decimals: 1,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Resolver settings
    pub resolver: ResolverConfig,
    /// Export settings
    pub export: ExportConfig,
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when a value is outside its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.max_subrecipe_depth > MAX_SUBRECIPE_DEPTH_LIMIT {
            return Err(ConfigError::InvalidRange(
                "max_subrecipe_depth must be <= 16",
            ));
        }
        if !self.export.kilogram_threshold_grams.is_finite()
            || self.export.kilogram_threshold_grams <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "kilogram_threshold_grams must be a positive number",
            ));
        }
        if self.export.decimals > MAX_EXPORT_DECIMALS {
            return Err(ConfigError::InvalidRange("export decimals must be <= 4"));
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(depth) = env_override(env_config::MAX_SUBRECIPE_DEPTH)? {
            self.resolver.max_subrecipe_depth = depth;
        }
        if let Some(threshold) = env_override(env_config::KG_THRESHOLD_GRAMS)? {
            self.export.kilogram_threshold_grams = threshold;
        }
        if let Some(decimals) = env_override(env_config::EXPORT_DECIMALS)? {
            self.export.decimals = decimals;
        }
        Ok(self)
    }
}

fn env_override<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {val}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
