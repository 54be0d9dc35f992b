// ABOUTME: Markdown rendering of weekly schedules, grocery lists, and recipe nutrition tables
// ABOUTME: Formats macros with configurable decimals and collapses large gram amounts to kilograms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write;

use chrono::Weekday;
use larder_core::constants::units::GRAMS_PER_KG;
use larder_core::models::Macros;
use larder_engine::config::ExportConfig;
use larder_engine::{DaySchedule, GroceryItem, WeekSchedule};

use super::{GroceryList, PlanExport, RecipeReport};

/// Values that render to a Markdown document
pub trait MarkdownExport {
    /// Render as Markdown
    fn to_markdown(&self, config: &ExportConfig) -> String;
}

/// Format a gram amount, switching to kilograms at the threshold
///
/// The comparison uses whole grams so no amount ever renders as "1000 g".
#[must_use]
pub fn format_grams(grams: f64, kilogram_threshold: f64) -> String {
    if grams.round() >= kilogram_threshold {
        format!("{:.1} kg", grams / GRAMS_PER_KG)
    } else {
        format!("{grams:.0} g")
    }
}

/// One-line macro summary
#[must_use]
pub fn format_macros(macros: &Macros, decimals: usize) -> String {
    format!(
        "{kcal:.d$} kcal, P {protein:.d$} g, C {carbs:.d$} g, F {fat:.d$} g, fiber {fiber:.d$} g",
        kcal = macros.kcal,
        protein = macros.protein_g,
        carbs = macros.carbs_g,
        fat = macros.fat_g,
        fiber = macros.fiber_g,
        d = decimals,
    )
}

fn weekday_name(day_of_week: u8) -> &'static str {
    match Weekday::try_from(day_of_week) {
        Ok(Weekday::Mon) => "Monday",
        Ok(Weekday::Tue) => "Tuesday",
        Ok(Weekday::Wed) => "Wednesday",
        Ok(Weekday::Thu) => "Thursday",
        Ok(Weekday::Fri) => "Friday",
        Ok(Weekday::Sat) => "Saturday",
        Ok(Weekday::Sun) => "Sunday",
        Err(_) => "Unknown day",
    }
}

fn write_day(out: &mut String, day: &DaySchedule, decimals: usize) {
    let _ = writeln!(out, "### {}\n", weekday_name(day.day_of_week));
    if day.slots.is_empty() {
        out.push_str("_Nothing scheduled_\n\n");
        return;
    }
    for slot in &day.slots {
        let _ = writeln!(
            out,
            "- Slot {} · {} × {}: {}",
            slot.slot_index,
            slot.recipe_name,
            slot.portions,
            format_macros(&slot.macros, decimals)
        );
    }
    let _ = writeln!(
        out,
        "- **Total**: {}\n",
        format_macros(&day.totals, decimals)
    );
}

fn write_schedule(out: &mut String, schedule: &WeekSchedule, decimals: usize) {
    let average = &schedule.weekly_average;
    let _ = writeln!(
        out,
        "## Weekly average ({} of 7 days filled)\n",
        average.filled_days
    );
    let _ = writeln!(out, "{}\n", format_macros(&average.macros, decimals));

    out.push_str("## Days\n\n");
    for day in &schedule.days {
        write_day(out, day, decimals);
    }
}

fn write_groceries(out: &mut String, items: &[GroceryItem], kilogram_threshold: f64) {
    out.push_str("## Grocery list\n\n");
    if items.is_empty() {
        out.push_str("_Nothing to buy_\n");
        return;
    }
    for item in items {
        let _ = writeln!(
            out,
            "- {} — {}",
            item.ingredient_name,
            format_grams(item.total_grams, kilogram_threshold)
        );
    }
}

impl MarkdownExport for PlanExport {
    fn to_markdown(&self, config: &ExportConfig) -> String {
        let mut out = format!("# {}\n\n", self.schedule.plan_name);
        write_schedule(&mut out, &self.schedule, config.decimals);
        write_groceries(&mut out, &self.groceries, config.kilogram_threshold_grams);
        out
    }
}

impl MarkdownExport for GroceryList {
    fn to_markdown(&self, config: &ExportConfig) -> String {
        let mut out = format!("# {}\n\n", self.plan_name);
        write_groceries(&mut out, &self.items, config.kilogram_threshold_grams);
        out
    }
}

impl MarkdownExport for RecipeReport {
    fn to_markdown(&self, config: &ExportConfig) -> String {
        let d = config.decimals;
        let mut out = String::from("# Recipes\n\n");
        if self.recipes.is_empty() {
            out.push_str("_No recipes_\n");
            return out;
        }

        out.push_str(
            "| Recipe | Portion | Portions | kcal | Protein (g) | Carbs (g) | Fat (g) | Fiber (g) |\n",
        );
        out.push_str("|---|---:|---:|---:|---:|---:|---:|---:|\n");
        for row in &self.recipes {
            let portion = &row.per_portion;
            let _ = writeln!(
                out,
                "| {} | {} | {:.1} | {:.d$} | {:.d$} | {:.d$} | {:.d$} | {:.d$} |",
                row.recipe_name,
                format_grams(row.recipe_yield.portion_size_g, config.kilogram_threshold_grams),
                row.recipe_yield.portions_per_batch,
                portion.kcal,
                portion.protein_g,
                portion.carbs_g,
                portion.fat_g,
                portion.fiber_g,
            );
        }
        out
    }
}
