// ABOUTME: Nutrition aggregation over ingredient estimates and display rounding
// ABOUTME: Scales per-100 densities by quantity, sums them, and rounds at output boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use mealscan_core::constants::nutrition::DENSITY_BASIS;
use mealscan_core::models::{IngredientEstimate, NutritionValues};

/// Sum of every ingredient's density scaled by `amount / 100`
///
/// No rounding happens here; callers round once at the output boundary.
#[must_use]
pub fn aggregate(ingredients: &[IngredientEstimate]) -> NutritionValues {
    ingredients
        .iter()
        .fold(NutritionValues::ZERO, |total, ingredient| {
            total
                + ingredient
                    .nutrition_per_100
                    .scale(ingredient.amount / DENSITY_BASIS)
        })
}

/// Sum of ingredient amounts, regardless of unit
#[must_use]
pub fn total_amount(ingredients: &[IngredientEstimate]) -> f64 {
    ingredients.iter().map(|ingredient| ingredient.amount).sum()
}

/// Round for display: calories to whole kcal, macros to 0.1 g
///
/// Halves round away from zero. Negative or non-finite results become 0.
#[must_use]
pub fn round(nutrition: &NutritionValues) -> NutritionValues {
    NutritionValues {
        calories: non_negative(nutrition.calories.round()),
        protein: non_negative(round_tenth(nutrition.protein)),
        fat: non_negative(round_tenth(nutrition.fat)),
        carbs: non_negative(round_tenth(nutrition.carbs)),
    }
}

fn round_tenth(value: f64) -> f64 {
    // Snap binary noise off the scaled value so decimal halves like 10.05 round up
    let scaled = (value * 10.0 * 1e6).round() / 1e6;
    scaled.round() / 10.0
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealscan_core::models::MeasureUnit;

    fn ingredient(amount: f64, density: NutritionValues) -> IngredientEstimate {
        IngredientEstimate {
            name: "test".to_owned(),
            amount,
            unit: MeasureUnit::Grams,
            nutrition_per_100: density,
        }
    }

    #[test]
    fn test_single_ingredient_scaling() {
        let total = aggregate(&[ingredient(200.0, NutritionValues::new(50.0, 2.0, 1.0, 8.0))]);
        assert!((total.calories - 100.0).abs() < 1e-9);
        assert!((total.protein - 4.0).abs() < 1e-9);
        assert!((total.fat - 2.0).abs() < 1e-9);
        assert!((total.carbs - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregation_is_linear_in_amounts() {
        let rice = NutritionValues::new(130.0, 2.7, 0.3, 28.0);
        let egg = NutritionValues::new(155.0, 13.0, 11.0, 1.1);
        let base = aggregate(&[ingredient(210.0, rice), ingredient(55.0, egg)]);

        for k in [0.5, 2.0, 3.7] {
            let scaled = aggregate(&[ingredient(210.0 * k, rice), ingredient(55.0 * k, egg)]);
            assert!((scaled.calories - base.calories * k).abs() < 1e-9);
            assert!((scaled.protein - base.protein * k).abs() < 1e-9);
            assert!((scaled.fat - base.fat * k).abs() < 1e-9);
            assert!((scaled.carbs - base.carbs * k).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_list_is_zero() {
        assert_eq!(aggregate(&[]), NutritionValues::ZERO);
        assert!(total_amount(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let rounded = round(&NutritionValues::new(100.5, 10.06, 0.04, 0.25));
        assert!((rounded.calories - 101.0).abs() < f64::EPSILON);
        assert!((rounded.protein - 10.1).abs() < 1e-9);
        assert!(rounded.fat.abs() < f64::EPSILON);
        assert!((rounded.carbs - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_round_decimal_halves_of_macros() {
        let rounded = round(&NutritionValues::new(100.5, 10.05, 0.0, 0.0));
        assert!((rounded.calories - 101.0).abs() < f64::EPSILON);
        assert!((rounded.protein - 10.1).abs() < 1e-9);
        assert!(rounded.fat.abs() < f64::EPSILON);
        assert!(rounded.carbs.abs() < f64::EPSILON);

        let rounded = round(&NutritionValues::new(0.0, 0.15, 2.45, 10.049));
        assert!((rounded.protein - 0.2).abs() < 1e-9);
        assert!((rounded.fat - 2.5).abs() < 1e-9);
        assert!((rounded.carbs - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_clamps_invalid_values() {
        let rounded = round(&NutritionValues::new(-3.0, f64::NAN, f64::INFINITY, -0.01));
        assert_eq!(rounded, NutritionValues::ZERO);
    }
}
