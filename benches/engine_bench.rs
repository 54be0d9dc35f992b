// ABOUTME: Criterion benchmarks for recipe analysis and grocery aggregation
// ABOUTME: Measures flattening, parallel recipe analysis, and weekly plan rollups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the larder engine.
//!
//! Builds a synthetic pantry of base ingredients, sauces used as sub-recipes,
//! and dishes that combine both, then times the engine entry points over it.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use larder::models::{
    Ingredient, InventoryEntry, Macros, MealPlan, Recipe, RecipeIngredient, Slot,
};
use larder::{Catalog, IngredientResolver};
use larder_engine::{analyze_recipes, build_grocery_list, schedule_week};

const INGREDIENT_COUNT: usize = 200;
const SAUCE_COUNT: usize = 20;

/// Catalog with `dish_count` dishes and a plan scheduling each of them
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_pantry(dish_count: usize) -> (Catalog, MealPlan) {
    let ingredients: Vec<Ingredient> = (0..INGREDIENT_COUNT)
        .map(|index| {
            let base = (index % 17) as f64;
            Ingredient::new(
                format!("Ingredient {index}"),
                Macros::new(base, 10.0 + base, base / 2.0, 50.0 + base * 10.0),
            )
        })
        .collect();

    let sauces: Vec<Recipe> = (0..SAUCE_COUNT)
        .map(|index| {
            (0..5)
                .fold(Recipe::new(format!("Sauce {index}")), |recipe, line| {
                    let ingredient = &ingredients[(index * 7 + line * 13) % INGREDIENT_COUNT];
                    recipe.with_line(RecipeIngredient::ingredient(
                        ingredient.id,
                        20.0 + (line * 15) as f64,
                    ))
                })
                .with_cooked_weight(180.0)
        })
        .collect();

    let dishes: Vec<Recipe> = (0..dish_count)
        .map(|index| {
            let sauce = &sauces[index % SAUCE_COUNT];
            (0..8)
                .fold(Recipe::new(format!("Dish {index}")), |recipe, line| {
                    let ingredient = &ingredients[(index * 11 + line * 29) % INGREDIENT_COUNT];
                    recipe.with_line(RecipeIngredient::ingredient(
                        ingredient.id,
                        50.0 + ((index + line) % 10) as f64 * 25.0,
                    ))
                })
                .with_line(RecipeIngredient::sub_recipe(sauce.id, 90.0))
                .with_portion_size(250.0)
        })
        .collect();

    let plan = dishes
        .iter()
        .enumerate()
        .fold(MealPlan::new("Benchmark week"), |plan, (index, dish)| {
            let day = (index % 7) as u8;
            let slot_index = (index / 7) as u32;
            plan.with_entry(
                InventoryEntry::new(dish.id, 4.0)
                    .with_slot(Slot::new(day, slot_index))
                    .with_slot(Slot::new((day + 3) % 7, slot_index).with_portions(1.5)),
            )
        });

    let catalog = ingredients
        .into_iter()
        .fold(Catalog::new(), Catalog::with_ingredient);
    let catalog = sauces
        .into_iter()
        .chain(dishes)
        .fold(catalog, Catalog::with_recipe);

    (catalog, plan)
}

fn bench_grocery_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("grocery_list");

    for dish_count in [10_usize, 100, 500] {
        let (catalog, plan) = generate_pantry(dish_count);
        let resolver = IngredientResolver::new(&catalog);

        group.throughput(Throughput::Elements(dish_count as u64));
        group.bench_with_input(
            BenchmarkId::new("build_grocery_list", dish_count),
            &plan,
            |b, plan| b.iter(|| build_grocery_list(black_box(plan), &resolver)),
        );
    }

    group.finish();
}

fn bench_schedule_week(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");

    for dish_count in [10_usize, 100] {
        let (catalog, plan) = generate_pantry(dish_count);
        let resolver = IngredientResolver::new(&catalog);

        group.bench_with_input(
            BenchmarkId::new("schedule_week", dish_count),
            &plan,
            |b, plan| b.iter(|| schedule_week(black_box(plan), &resolver)),
        );
    }

    group.finish();
}

fn bench_analyze_recipes(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_analysis");

    for dish_count in [100_usize, 1000] {
        let (catalog, _) = generate_pantry(dish_count);
        let resolver = IngredientResolver::new(&catalog);
        let recipes = catalog.recipes();

        group.throughput(Throughput::Elements(recipes.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("analyze_recipes", dish_count),
            &recipes,
            |b, recipes| b.iter(|| analyze_recipes(black_box(recipes), &resolver)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_grocery_list,
    bench_schedule_week,
    bench_analyze_recipes
);
criterion_main!(benches);
