// ABOUTME: Meal plan schedule aggregation into slot, day, and weekly macro rollups
// ABOUTME: Averages the week over days that actually have food scheduled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use larder_core::constants::nutrition::DAYS_PER_WEEK;
use larder_core::models::{Macros, MealPlan};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::macros::{portion_macros, recipe_totals_for, recipe_yield};
use crate::resolver::IngredientResolver;
use crate::source::RecipeSource;

/// Macros of one scheduled slot
#[must_use]
pub fn slot_macros(portion: &Macros, slot_portions: f64) -> Macros {
    portion.scaled(slot_portions)
}

/// Element-wise sum of slot macros; zero for an empty day
#[must_use]
pub fn day_totals(slots: &[Macros]) -> Macros {
    slots.iter().sum()
}

/// Weekly average over filled days
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyAverage {
    /// Average macros per filled day
    pub macros: Macros,
    /// Days with nonzero energy
    pub filled_days: usize,
}

/// Average day totals over days with nonzero kcal
///
/// Empty days are excluded from the denominator, so a plan covering two days
/// reports the average of those two days rather than a seventh of the week.
#[must_use]
pub fn weekly_average(days: &[Macros]) -> WeeklyAverage {
    let filled: Vec<&Macros> = days.iter().filter(|day| day.kcal != 0.0).collect();
    if filled.is_empty() {
        return WeeklyAverage::default();
    }

    let sum: Macros = filled.iter().copied().sum();
    let count = filled.len() as f64;

    WeeklyAverage {
        macros: sum.divided_by(count),
        filled_days: filled.len(),
    }
}

/// One recipe scheduled into a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotLine {
    /// Scheduled recipe
    pub recipe_id: Uuid,
    /// Recipe name for display
    pub recipe_name: String,
    /// Position within the day
    pub slot_index: u32,
    /// Portions eaten in this slot
    pub portions: f64,
    /// Macros of this slot
    pub macros: Macros,
}

/// All slots of one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Day of week, 0 = Monday
    pub day_of_week: u8,
    /// Slots in plan order: inventory entry order, then slot order within an entry
    pub slots: Vec<SlotLine>,
    /// Sum of the day's slots
    pub totals: Macros,
}

impl DaySchedule {
    fn empty(day_of_week: u8) -> Self {
        Self {
            day_of_week,
            slots: Vec::new(),
            totals: Macros::zero(),
        }
    }

    /// Whether any food is scheduled on this day
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.totals.kcal != 0.0
    }
}

/// Seven-day rollup of a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// Plan identifier
    pub plan_id: Uuid,
    /// Plan name
    pub plan_name: String,
    /// Monday through Sunday
    pub days: Vec<DaySchedule>,
    /// Average over filled days
    pub weekly_average: WeeklyAverage,
}

/// Build the weekly schedule of a meal plan
///
/// Slots keep the order the plan lists them in. Inventory entries whose
/// recipe no longer exists are skipped, as are slots with a day outside 0..=6.
#[must_use]
pub fn schedule_week<S: RecipeSource + ?Sized>(
    plan: &MealPlan,
    resolver: &IngredientResolver<'_, S>,
) -> WeekSchedule {
    let mut days: Vec<DaySchedule> = (0..DAYS_PER_WEEK)
        .filter_map(|day| u8::try_from(day).ok())
        .map(DaySchedule::empty)
        .collect();

    for entry in &plan.inventory {
        let Some(recipe) = resolver.source().recipe(&entry.recipe_id) else {
            debug!(
                plan = %plan.name,
                recipe_id = %entry.recipe_id,
                "Skipping inventory entry with unresolved recipe"
            );
            continue;
        };

        let totals = recipe_totals_for(recipe, resolver);
        let yields = recipe_yield(recipe, &totals);
        let portion = portion_macros(&totals, yields.cooked_weight_g, yields.portion_size_g);

        for slot in &entry.slots {
            let Some(day) = days.get_mut(usize::from(slot.day_of_week)) else {
                debug!(
                    plan = %plan.name,
                    day = slot.day_of_week,
                    "Skipping slot outside the week"
                );
                continue;
            };
            day.slots.push(SlotLine {
                recipe_id: recipe.id,
                recipe_name: recipe.name.clone(),
                slot_index: slot.slot_index,
                portions: slot.portions,
                macros: slot_macros(&portion, slot.portions),
            });
        }
    }

    for day in &mut days {
        let slot_values: Vec<Macros> = day.slots.iter().map(|slot| slot.macros).collect();
        day.totals = day_totals(&slot_values);
    }

    let totals: Vec<Macros> = days.iter().map(|day| day.totals).collect();

    WeekSchedule {
        plan_id: plan.id,
        plan_name: plan.name.clone(),
        weekly_average: weekly_average(&totals),
        days,
    }
}
