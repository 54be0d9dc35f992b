// ABOUTME: Command implementations for the larder CLI
// ABOUTME: Recipe nutrition reports and meal plan exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod plan;
pub mod recipe;
