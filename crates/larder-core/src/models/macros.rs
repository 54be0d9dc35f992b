// ABOUTME: Macro nutrient value type with scaling and element-wise arithmetic
// ABOUTME: Used for per-100g ingredient data, portion macros, and day/week rollups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// The five tracked macro values
///
/// Depending on context this is "per 100 g of raw ingredient", "per portion",
/// or an absolute total for a slot, day or week.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Energy in kilocalories
    pub kcal: f64,
    /// Fiber in grams
    #[serde(default)]
    pub fiber_g: f64,
}

impl Macros {
    /// All-zero macros
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            kcal: 0.0,
            fiber_g: 0.0,
        }
    }

    /// Create macros from the four headline values, fiber zero
    #[must_use]
    pub const fn new(protein_g: f64, carbs_g: f64, fat_g: f64, kcal: f64) -> Self {
        Self {
            protein_g,
            carbs_g,
            fat_g,
            kcal,
            fiber_g: 0.0,
        }
    }

    /// Set fiber
    #[must_use]
    pub const fn with_fiber(mut self, fiber_g: f64) -> Self {
        self.fiber_g = fiber_g;
        self
    }

    /// Multiply every field by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
            kcal: self.kcal * factor,
            fiber_g: self.fiber_g * factor,
        }
    }

    /// Divide every field by `divisor`, returning zero when the divisor is zero
    #[must_use]
    pub fn divided_by(&self, divisor: f64) -> Self {
        if divisor == 0.0 {
            return Self::zero();
        }
        self.scaled(1.0 / divisor)
    }

    /// Whether every field is within `epsilon` of `other`
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.protein_g - other.protein_g).abs() <= epsilon
            && (self.carbs_g - other.carbs_g).abs() <= epsilon
            && (self.fat_g - other.fat_g).abs() <= epsilon
            && (self.kcal - other.kcal).abs() <= epsilon
            && (self.fiber_g - other.fiber_g).abs() <= epsilon
    }
}

impl Add for Macros {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
            kcal: self.kcal + other.kcal,
            fiber_g: self.fiber_g + other.fiber_g,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<f64> for Macros {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.scaled(factor)
    }
}

impl Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Self> for Macros {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Macros = Vec::<Macros>::new().into_iter().sum();
        assert_eq!(total, Macros::zero());
    }

    #[test]
    fn test_divided_by_zero_is_zero() {
        let m = Macros::new(10.0, 20.0, 5.0, 165.0).with_fiber(3.0);
        assert_eq!(m.divided_by(0.0), Macros::zero());
        assert!(m.divided_by(2.0).approx_eq(&m.scaled(0.5), 1e-12));
    }
}
