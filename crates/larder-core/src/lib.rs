// ABOUTME: Core types and constants for the Larder recipe planning engine
// ABOUTME: Foundation crate with the data model, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Larder Core
//!
//! Foundation crate providing the shared data model for the Larder nutrition
//! planning engine. Everything here is plain data: ingredients, recipes and
//! meal plans as the persistence layer hands them over, plus the error types
//! used at the edges of the system.
//!
//! ## Modules
//!
//! - **models**: Ingredients, recipes, recipe lines and meal plans
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `ModelError`
//! - **constants**: Unit equivalences and environment variable names

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Ingredient, Recipe, `MealPlan`)
pub mod models;
