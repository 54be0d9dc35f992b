// ABOUTME: Weekly meal plan models with pooled recipe inventory and day slots
// ABOUTME: Defines MealPlan, InventoryEntry, Slot, and their scheduling validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

const fn default_portions() -> f64 {
    1.0
}

/// A scheduled instance of eating an inventory recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Day of the week, 0 = Monday .. 6 = Sunday
    pub day_of_week: u8,
    /// Position of the slot within the day (breakfast, lunch, ...)
    #[serde(default)]
    pub slot_index: u32,
    /// Portions eaten in this slot, fractional allowed
    #[serde(default = "default_portions")]
    pub portions: f64,
}

impl Slot {
    /// One portion on `day_of_week` at `slot_index`
    #[must_use]
    pub const fn new(day_of_week: u8, slot_index: u32) -> Self {
        Self {
            day_of_week,
            slot_index,
            portions: 1.0,
        }
    }

    /// Set the number of portions
    #[must_use]
    pub const fn with_portions(mut self, portions: f64) -> Self {
        self.portions = portions;
        self
    }

    /// The weekday this slot falls on, if the index is in range
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::try_from(self.day_of_week).ok()
    }
}

/// A recipe pooled into the week with a portion target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Entry identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Referenced recipe
    pub recipe_id: Uuid,
    /// Portions to cook for the week
    pub total_portions: f64,
    /// Where the portions are eaten
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl InventoryEntry {
    /// Create an entry with no slots
    #[must_use]
    pub fn new(recipe_id: Uuid, total_portions: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            recipe_id,
            total_portions,
            slots: Vec::new(),
        }
    }

    /// Schedule a slot
    #[must_use]
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Portions currently assigned to slots
    #[must_use]
    pub fn scheduled_portions(&self) -> f64 {
        self.slots.iter().map(|slot| slot.portions).sum()
    }
}

/// A named weekly plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Plan identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Owner user ID
    #[serde(default)]
    pub user_id: Option<Uuid>,
    /// Plan name
    pub name: String,
    /// Recipes pooled for the week
    #[serde(default)]
    pub inventory: Vec<InventoryEntry>,
}

impl MealPlan {
    /// Create an empty plan
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: None,
            name: name.into(),
            inventory: Vec::new(),
        }
    }

    /// Add an inventory entry
    #[must_use]
    pub fn with_entry(mut self, entry: InventoryEntry) -> Self {
        self.inventory.push(entry);
        self
    }

    /// Check slot days and portion counts
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DayOutOfRange` for a day outside 0..=6 and
    /// `ModelError::NonPositivePortions` for a slot with zero or negative portions
    pub fn validate(&self) -> Result<(), ModelError> {
        for slot in self.inventory.iter().flat_map(|entry| &entry.slots) {
            if slot.weekday().is_none() {
                return Err(ModelError::DayOutOfRange {
                    plan: self.name.clone(),
                    day: slot.day_of_week,
                });
            }
            if slot.portions <= 0.0 {
                return Err(ModelError::NonPositivePortions {
                    plan: self.name.clone(),
                    portions: slot.portions,
                });
            }
        }
        Ok(())
    }
}
