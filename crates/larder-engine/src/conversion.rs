// ABOUTME: Unit conversion from display amounts to grams for recipe lines
// ABOUTME: Uses ingredient-specific named units first, then a fixed weight and volume table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use larder_core::constants::units::{
    GRAMS_PER_KG, GRAMS_PER_LB, GRAMS_PER_OZ, ML_PER_CUP, ML_PER_TBSP, ML_PER_TSP,
};
use larder_core::models::Ingredient;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Volume unit used on an ingredient without a density
    #[error("Density not found for ingredient: {0}")]
    DensityNotFound(String),
    /// Negative or non-finite amount
    #[error("Invalid amount {0} (must be a non-negative number)")]
    InvalidAmount(f64),
    /// Unit is neither a standard unit nor one defined on the ingredient
    #[error("Unit '{unit}' is not known for ingredient {ingredient}")]
    UnknownUnit {
        /// Unit as written
        unit: String,
        /// Ingredient name
        ingredient: String,
    },
}

/// Standard measurement units with fixed equivalences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureUnit {
    /// Grams
    Grams,
    /// Kilograms
    Kilograms,
    /// Ounces
    Ounces,
    /// Pounds
    Pounds,
    /// Millilitres
    Milliliters,
    /// US cups
    Cups,
    /// Tablespoons
    Tablespoons,
    /// Teaspoons
    Teaspoons,
}

impl MeasureUnit {
    /// Short label used in exports
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Ounces => "oz",
            Self::Pounds => "lb",
            Self::Milliliters => "ml",
            Self::Cups => "cup",
            Self::Tablespoons => "tbsp",
            Self::Teaspoons => "tsp",
        }
    }

    /// Whether converting this unit to grams needs a density
    #[must_use]
    pub const fn is_volume(self) -> bool {
        matches!(
            self,
            Self::Milliliters | Self::Cups | Self::Tablespoons | Self::Teaspoons
        )
    }

    /// Grams per unit for weights, millilitres per unit for volumes
    const fn base_factor(self) -> f64 {
        match self {
            Self::Grams | Self::Milliliters => 1.0,
            Self::Kilograms => GRAMS_PER_KG,
            Self::Ounces => GRAMS_PER_OZ,
            Self::Pounds => GRAMS_PER_LB,
            Self::Cups => ML_PER_CUP,
            Self::Tablespoons => ML_PER_TBSP,
            Self::Teaspoons => ML_PER_TSP,
        }
    }
}

impl Display for MeasureUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for MeasureUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" | "gr" => Ok(Self::Grams),
            "kg" | "kilogram" | "kilograms" | "kilo" | "kilos" => Ok(Self::Kilograms),
            "oz" | "ounce" | "ounces" => Ok(Self::Ounces),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pounds),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(Self::Milliliters)
            }
            "cup" | "cups" => Ok(Self::Cups),
            "tbsp" | "tablespoon" | "tablespoons" | "tbs" => Ok(Self::Tablespoons),
            "tsp" | "teaspoon" | "teaspoons" => Ok(Self::Teaspoons),
            _ => Err(()),
        }
    }
}

/// Convert an amount of `ingredient` in `unit` to grams
///
/// Units defined on the ingredient (e.g. "clove", "slice") win over the
/// standard table, so a user can override what "cup" means for one item.
///
/// # Errors
///
/// Returns `ConversionError::InvalidAmount` if the amount is negative or not finite.
/// Returns `ConversionError::DensityNotFound` for a volume unit on an ingredient without density.
/// Returns `ConversionError::UnknownUnit` if the unit is not recognised.
pub fn convert_to_grams(
    ingredient: &Ingredient,
    amount: f64,
    unit: &str,
) -> Result<f64, ConversionError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ConversionError::InvalidAmount(amount));
    }

    if let Some(named) = ingredient.unit(unit) {
        return Ok(amount * named.grams_per_unit);
    }

    let standard: MeasureUnit = unit.parse().map_err(|()| ConversionError::UnknownUnit {
        unit: unit.to_owned(),
        ingredient: ingredient.name.clone(),
    })?;

    if standard.is_volume() {
        let density = ingredient
            .density_g_per_ml
            .ok_or_else(|| ConversionError::DensityNotFound(ingredient.name.clone()))?;
        return Ok(amount * standard.base_factor() * density);
    }

    Ok(amount * standard.base_factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::models::{IngredientUnit, Macros};

    fn olive_oil() -> Ingredient {
        Ingredient::new("Olive oil", Macros::new(0.0, 0.0, 100.0, 884.0)).with_density(0.92)
    }

    #[test]
    fn test_weight_units_need_no_density() {
        let oil = olive_oil();
        assert!((convert_to_grams(&oil, 2.0, "kg").unwrap() - 2000.0).abs() < 1e-9);
        assert!((convert_to_grams(&oil, 1.0, "lb").unwrap() - 453.6).abs() < 1e-9);
    }

    #[test]
    fn test_volume_uses_density() {
        let grams = convert_to_grams(&olive_oil(), 1.0, "tbsp").unwrap();
        assert!((grams - 13.8).abs() < 1e-9);
    }

    #[test]
    fn test_volume_without_density_fails() {
        let rice = Ingredient::new("Rice", Macros::zero());
        assert_eq!(
            convert_to_grams(&rice, 1.0, "cup"),
            Err(ConversionError::DensityNotFound("Rice".to_owned()))
        );
    }

    #[test]
    fn test_named_unit_wins() {
        let garlic = Ingredient::new("Garlic", Macros::zero())
            .with_unit(IngredientUnit::new("clove", 3.0).as_default());
        assert!((convert_to_grams(&garlic, 4.0, "Clove").unwrap() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(matches!(
            convert_to_grams(&olive_oil(), -1.0, "g"),
            Err(ConversionError::InvalidAmount(_))
        ));
    }
}
