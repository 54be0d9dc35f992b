// ABOUTME: Integration tests for sub-recipe flattening, depth limits, and cycle handling
// ABOUTME: Verifies proportional scaling against cooked yield at several nesting levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use larder_core::models::{Ingredient, Macros, Recipe, RecipeIngredient};
use larder_engine::{recipe_totals, Catalog, IngredientResolver, ResolvedIngredient};
use uuid::Uuid;

const EPSILON: f64 = 1e-9;

fn grams_of(resolved: &[ResolvedIngredient<'_>], id: Uuid) -> f64 {
    resolved
        .iter()
        .filter(|item| item.ingredient.id == id)
        .map(|item| item.grams)
        .sum()
}

fn ingredient(name: &str) -> Ingredient {
    Ingredient::new(name, Macros::new(1.0, 1.0, 1.0, 17.0))
}

// ============================================================================
// PROPORTIONAL SCALING
// ============================================================================

#[test]
fn test_subrecipe_scaled_by_cooked_weight() {
    let tomato = ingredient("Tomato");
    let oil = ingredient("Olive oil");
    let pasta = ingredient("Pasta");
    let sauce = Recipe::new("Tomato sauce")
        .with_line(RecipeIngredient::ingredient(tomato.id, 200.0))
        .with_line(RecipeIngredient::ingredient(oil.id, 20.0))
        .with_cooked_weight(110.0);
    let dish = Recipe::new("Pasta al pomodoro")
        .with_line(RecipeIngredient::ingredient(pasta.id, 100.0))
        .with_line(RecipeIngredient::sub_recipe(sauce.id, 55.0));
    let catalog = Catalog::new()
        .with_ingredient(tomato.clone())
        .with_ingredient(oil.clone())
        .with_ingredient(pasta.clone())
        .with_recipe(sauce);
    let resolver = IngredientResolver::new(&catalog);

    let resolved = resolver.flatten_recipe(&dish);

    assert_eq!(resolved.len(), 3);
    assert!((grams_of(&resolved, pasta.id) - 100.0).abs() < EPSILON);
    assert!((grams_of(&resolved, tomato.id) - 100.0).abs() < EPSILON);
    assert!((grams_of(&resolved, oil.id) - 10.0).abs() < EPSILON);
}

#[test]
fn test_subrecipe_without_cooked_weight_uses_raw_total() {
    let rice = ingredient("Rice");
    let water = ingredient("Water");
    let pilaf = Recipe::new("Pilaf")
        .with_line(RecipeIngredient::ingredient(rice.id, 100.0))
        .with_line(RecipeIngredient::ingredient(water.id, 150.0));
    let catalog = Catalog::new()
        .with_ingredient(rice.clone())
        .with_ingredient(water)
        .with_recipe(pilaf.clone());
    let resolver = IngredientResolver::new(&catalog);

    let resolved = resolver.resolve_line(&RecipeIngredient::sub_recipe(pilaf.id, 125.0));

    assert!((grams_of(&resolved, rice.id) - 50.0).abs() < EPSILON);
    assert!((recipe_totals(&resolved).weight_g - 125.0).abs() < EPSILON);
}

#[test]
fn test_deleted_ingredient_inside_subrecipe_is_filtered() {
    let kept = ingredient("Lentils");
    let deleted = ingredient("Cumin");
    let dal = Recipe::new("Dal")
        .with_line(RecipeIngredient::ingredient(kept.id, 90.0))
        .with_line(RecipeIngredient::ingredient(deleted.id, 10.0));
    let catalog = Catalog::new()
        .with_ingredient(kept.clone())
        .with_recipe(dal.clone());
    let resolver = IngredientResolver::new(&catalog);

    let resolved = resolver.resolve_line(&RecipeIngredient::sub_recipe(dal.id, 50.0));

    assert_eq!(resolved.len(), 1);
    assert!((grams_of(&resolved, kept.id) - 45.0).abs() < EPSILON);
}

#[test]
fn test_missing_subrecipe_contributes_nothing() {
    let catalog = Catalog::new();
    let resolver = IngredientResolver::new(&catalog);

    assert!(resolver
        .resolve_line(&RecipeIngredient::sub_recipe(Uuid::new_v4(), 80.0))
        .is_empty());
}

// ============================================================================
// NESTING DEPTH
// ============================================================================

struct Pizza {
    catalog: Catalog,
    pizza: Recipe,
    flour: Uuid,
    water: Uuid,
    oil: Uuid,
    cheese: Uuid,
}

fn pizza_fixture() -> Pizza {
    let flour = ingredient("Flour");
    let water = ingredient("Water");
    let oil = ingredient("Olive oil");
    let cheese = ingredient("Mozzarella");
    let base = Recipe::new("Pre-ferment")
        .with_line(RecipeIngredient::ingredient(flour.id, 100.0))
        .with_line(RecipeIngredient::ingredient(water.id, 60.0));
    let dough = Recipe::new("Pizza dough")
        .with_line(RecipeIngredient::sub_recipe(base.id, 80.0))
        .with_line(RecipeIngredient::ingredient(oil.id, 10.0));
    let pizza = Recipe::new("Pizza")
        .with_line(RecipeIngredient::sub_recipe(dough.id, 45.0))
        .with_line(RecipeIngredient::ingredient(cheese.id, 50.0));

    Pizza {
        flour: flour.id,
        water: water.id,
        oil: oil.id,
        cheese: cheese.id,
        catalog: Catalog::new()
            .with_ingredient(flour)
            .with_ingredient(water)
            .with_ingredient(oil)
            .with_ingredient(cheese)
            .with_recipe(base)
            .with_recipe(dough)
            .with_recipe(pizza.clone()),
        pizza,
    }
}

#[test]
fn test_default_depth_drops_nested_subrecipe_lines() {
    let fixture = pizza_fixture();
    let resolver = IngredientResolver::new(&fixture.catalog);

    let resolved = resolver.flatten_recipe(&fixture.pizza);

    assert_eq!(resolved.len(), 2);
    assert!((grams_of(&resolved, fixture.oil) - 5.0).abs() < EPSILON);
    assert!((grams_of(&resolved, fixture.cheese) - 50.0).abs() < EPSILON);
    assert!(grams_of(&resolved, fixture.flour).abs() < EPSILON);
}

#[test]
fn test_deeper_resolution_expands_nested_subrecipes() {
    let fixture = pizza_fixture();
    let resolver = IngredientResolver::new(&fixture.catalog).with_max_depth(2);

    let resolved = resolver.flatten_recipe(&fixture.pizza);

    assert_eq!(resolved.len(), 4);
    assert!((grams_of(&resolved, fixture.flour) - 25.0).abs() < EPSILON);
    assert!((grams_of(&resolved, fixture.water) - 15.0).abs() < EPSILON);
    assert!((grams_of(&resolved, fixture.oil) - 5.0).abs() < EPSILON);
    assert!((grams_of(&resolved, fixture.cheese) - 50.0).abs() < EPSILON);
}

#[test]
fn test_mutual_recursion_terminates() {
    let x = ingredient("X");
    let y = ingredient("Y");
    let a_id = Uuid::new_v4();
    let b = Recipe::new("B")
        .with_line(RecipeIngredient::ingredient(y.id, 100.0))
        .with_line(RecipeIngredient::sub_recipe(a_id, 10.0));
    let a = Recipe::new("A")
        .with_id(a_id)
        .with_line(RecipeIngredient::ingredient(x.id, 100.0))
        .with_line(RecipeIngredient::sub_recipe(b.id, 55.0));
    let catalog = Catalog::new()
        .with_ingredient(x.clone())
        .with_ingredient(y.clone())
        .with_recipe(a.clone())
        .with_recipe(b);
    let resolver = IngredientResolver::new(&catalog).with_max_depth(8);

    let resolved = resolver.flatten_recipe(&a);

    assert_eq!(resolved.len(), 2);
    assert!((grams_of(&resolved, x.id) - 100.0).abs() < EPSILON);
    assert!((grams_of(&resolved, y.id) - 50.0).abs() < EPSILON);
}

// ============================================================================
// PREMADE PRODUCTS
// ============================================================================

#[test]
fn test_premade_subrecipe_resolves_to_product() {
    let granola = Recipe::premade("Granola", Macros::new(10.0, 60.0, 20.0, 460.0))
        .with_cooked_weight(500.0);
    let catalog = Catalog::new().with_recipe(granola.clone());
    let resolver = IngredientResolver::new(&catalog);

    let resolved = resolver.resolve_line(&RecipeIngredient::sub_recipe(granola.id, 40.0));

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].ingredient.id, granola.id);
    assert_eq!(resolved[0].ingredient.name, "Granola");
    assert!((resolved[0].grams - 40.0).abs() < EPSILON);
    assert!((resolved[0].macros().kcal - 184.0).abs() < EPSILON);
}
