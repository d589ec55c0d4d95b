// ABOUTME: Reconciliation engine correcting vision-model nutrition estimates against catalogs
// ABOUTME: Exact dish override, per-ingredient correction, and fuzzy divergence rescue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Reconciliation Engine
//!
//! Turns an uncertain, per-ingredient nutrition estimate from a vision model
//! into a stable result by reconciling it with curated reference data.
//!
//! # Algorithm
//!
//! 1. **Exact dish match** on the food name: every ingredient takes the dish
//!    density and nothing else runs. Totals still come from aggregating the
//!    ingredient list so the reported breakdown keeps its proportions.
//! 2. **Per-ingredient correction**: each ingredient name goes through the
//!    catalog lookup pipeline; a hit replaces the model density, a miss keeps it.
//! 3. **Fuzzy dish reconciliation**: if the food name fuzzily matches a dish,
//!    the corrected aggregate is compared with the dish total scaled to the
//!    reported weight. Above the divergence threshold every ingredient gets the
//!    same density derived from the dish total; otherwise the model breakdown
//!    stands.
//!
//! The engine never fails. Missing catalog entries degrade to trusting the
//! model estimate.

use crate::aggregation::{aggregate, round, total_amount};
use crate::catalog::{find_exact_dish, find_fuzzy, find_match, ReferenceCatalog};
use crate::config::ReconciliationConfig;
use mealscan_core::constants::nutrition::DENSITY_BASIS;
use mealscan_core::models::{
    CatalogEntry, CorrectedFoodEstimate, FoodEstimate, IngredientEstimate, NutritionValues,
};
use serde::Serialize;
use tracing::debug;

/// Which reconciliation path produced the result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum ReconciliationOutcome {
    /// Food name matched a dish exactly; dish density applied to every ingredient
    ExactDish {
        /// Matched dish name
        dish: String,
    },
    /// Fuzzy dish match diverged beyond the threshold; dish density applied uniformly
    FuzzyRescued {
        /// Matched dish name
        dish: String,
        /// Relative calorie divergence between model and dish totals
        divergence: f64,
    },
    /// Fuzzy dish match within tolerance, or not comparable; model breakdown kept
    FuzzyTrusted {
        /// Matched dish name
        dish: String,
        /// Relative calorie divergence, when the dish total allows computing it
        divergence: Option<f64>,
    },
    /// No dish matched the food name
    ModelOnly,
}

/// Corrected estimate plus the path taken to produce it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationReport {
    /// Corrected estimate
    pub estimate: CorrectedFoodEstimate,
    /// Reconciliation path
    pub outcome: ReconciliationOutcome,
    /// Ingredients whose density came from a catalog lookup
    pub corrected_ingredients: usize,
}

/// Stateless engine over an injected read-only catalog
#[derive(Debug, Clone, Copy)]
pub struct ReconciliationEngine<'a> {
    catalog: &'a ReferenceCatalog,
    config: &'a ReconciliationConfig,
}

impl<'a> ReconciliationEngine<'a> {
    /// Create an engine over `catalog`
    #[must_use]
    pub const fn new(catalog: &'a ReferenceCatalog, config: &'a ReconciliationConfig) -> Self {
        Self { catalog, config }
    }

    /// Correct an estimate, discarding the path taken
    #[must_use]
    pub fn correct(&self, estimate: &FoodEstimate) -> CorrectedFoodEstimate {
        self.reconcile(estimate).estimate
    }

    /// Correct an estimate and report which path produced the result
    #[must_use]
    pub fn reconcile(&self, estimate: &FoodEstimate) -> ReconciliationReport {
        if let Some((dish, density)) = find_exact_dish(&estimate.food_name, self.catalog.dishes())
            .and_then(|dish| dish.density().map(|density| (dish, density)))
        {
            debug!(
                food_name = %estimate.food_name,
                dish = %dish.name,
                "Exact dish match, applying catalog density to all ingredients"
            );
            let ingredients = with_uniform_density(&estimate.ingredients, density);
            return finish(
                estimate,
                ingredients,
                ReconciliationOutcome::ExactDish {
                    dish: dish.name.clone(),
                },
                0,
            );
        }

        let (ingredients, corrected) = self.correct_ingredients(&estimate.ingredients);

        let Some(dish) = find_fuzzy(
            &estimate.food_name,
            self.catalog.dishes(),
            self.config.fuzzy_threshold,
        ) else {
            debug!(
                food_name = %estimate.food_name,
                corrected_ingredients = corrected,
                "No dish match, keeping model estimate"
            );
            return finish(
                estimate,
                ingredients,
                ReconciliationOutcome::ModelOnly,
                corrected,
            );
        };

        let total_weight = total_amount(&ingredients);
        let model_total = aggregate(&ingredients);
        let Some(dish_total) = dish_total_for_weight(dish, total_weight) else {
            debug!(
                food_name = %estimate.food_name,
                dish = %dish.name,
                "Fuzzy dish match not comparable, keeping model estimate"
            );
            return finish(
                estimate,
                ingredients,
                ReconciliationOutcome::FuzzyTrusted {
                    dish: dish.name.clone(),
                    divergence: None,
                },
                corrected,
            );
        };

        let divergence = (model_total.calories - dish_total.calories).abs() / dish_total.calories;
        if divergence > self.config.divergence_threshold {
            debug!(
                food_name = %estimate.food_name,
                dish = %dish.name,
                divergence,
                "Model total diverges from fuzzy dish match, rescaling to catalog total"
            );
            let density = dish_total.scale(DENSITY_BASIS / total_weight);
            let rescued = with_uniform_density(&ingredients, density);
            return finish(
                estimate,
                rescued,
                ReconciliationOutcome::FuzzyRescued {
                    dish: dish.name.clone(),
                    divergence,
                },
                corrected,
            );
        }

        debug!(
            food_name = %estimate.food_name,
            dish = %dish.name,
            divergence,
            "Model total within tolerance of fuzzy dish match"
        );
        finish(
            estimate,
            ingredients,
            ReconciliationOutcome::FuzzyTrusted {
                dish: dish.name.clone(),
                divergence: Some(divergence),
            },
            corrected,
        )
    }

    /// Replace each ingredient density with its catalog density when the name matches
    fn correct_ingredients(
        &self,
        ingredients: &[IngredientEstimate],
    ) -> (Vec<IngredientEstimate>, usize) {
        let mut corrected = 0;
        let result = ingredients
            .iter()
            .map(|ingredient| {
                let catalog_density = find_match(
                    &ingredient.name,
                    self.catalog,
                    self.config.fuzzy_threshold,
                )
                .and_then(|hit| hit.entry.density());

                catalog_density.map_or_else(
                    || ingredient.clone(),
                    |density| {
                        corrected += 1;
                        ingredient.with_density(density)
                    },
                )
            })
            .collect();
        (result, corrected)
    }
}

/// Correct an estimate against `catalog` (convenience wrapper)
#[must_use]
pub fn correct_estimate(
    estimate: &FoodEstimate,
    catalog: &ReferenceCatalog,
    config: &ReconciliationConfig,
) -> CorrectedFoodEstimate {
    ReconciliationEngine::new(catalog, config).correct(estimate)
}

/// Dish total scaled to `total_weight`, or `None` when no ratio can be formed
fn dish_total_for_weight(dish: &CatalogEntry, total_weight: f64) -> Option<NutritionValues> {
    if total_weight <= 0.0 || dish.reference_amount <= 0.0 {
        return None;
    }
    let scaled = dish.nutrition.scale(total_weight / dish.reference_amount);
    (scaled.calories > 0.0 && scaled.calories.is_finite()).then_some(scaled)
}

fn with_uniform_density(
    ingredients: &[IngredientEstimate],
    density: NutritionValues,
) -> Vec<IngredientEstimate> {
    ingredients
        .iter()
        .map(|ingredient| ingredient.with_density(density))
        .collect()
}

fn finish(
    estimate: &FoodEstimate,
    ingredients: Vec<IngredientEstimate>,
    outcome: ReconciliationOutcome,
    corrected_ingredients: usize,
) -> ReconciliationReport {
    let total_nutrition = round(&aggregate(&ingredients));
    ReconciliationReport {
        estimate: CorrectedFoodEstimate {
            food_name: estimate.food_name.clone(),
            ingredients,
            total_nutrition,
        },
        outcome,
        corrected_ingredients,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic, clippy::unwrap_used)]

    use super::*;
    use mealscan_core::models::MeasureUnit;

    fn ingredient(name: &str, amount: f64, density: NutritionValues) -> IngredientEstimate {
        IngredientEstimate {
            name: name.to_owned(),
            amount,
            unit: MeasureUnit::Grams,
            nutrition_per_100: density,
        }
    }

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::new(
            vec![
                CatalogEntry::new("김치찌개", 500.0, NutritionValues::new(600.0, 30.0, 35.0, 40.0)),
                CatalogEntry::new(
                    "김치볶음밥",
                    400.0,
                    NutritionValues::new(640.0, 16.0, 20.0, 96.0),
                ),
            ],
            vec![CatalogEntry::new(
                "두부",
                100.0,
                NutritionValues::new(76.0, 8.0, 4.8, 1.9),
            )],
        )
    }

    #[test]
    fn test_exact_dish_override() {
        let catalog = catalog();
        let config = ReconciliationConfig::default();
        let estimate = FoodEstimate {
            food_name: "김치찌개".to_owned(),
            ingredients: vec![ingredient("stew", 250.0, NutritionValues::new(40.0, 1.0, 1.0, 1.0))],
        };

        let report = ReconciliationEngine::new(&catalog, &config).reconcile(&estimate);

        let density = report.estimate.ingredients[0].nutrition_per_100;
        assert!((density.calories - 120.0).abs() < 1e-9);
        assert!((report.estimate.total_nutrition.calories - 300.0).abs() < f64::EPSILON);
        assert_eq!(
            report.outcome,
            ReconciliationOutcome::ExactDish {
                dish: "김치찌개".to_owned()
            }
        );
    }

    #[test]
    fn test_ingredient_correction_without_dish() {
        let catalog = catalog();
        let config = ReconciliationConfig::default();
        let estimate = FoodEstimate {
            food_name: "mapo tofu".to_owned(),
            ingredients: vec![
                ingredient("두부", 150.0, NutritionValues::new(50.0, 5.0, 3.0, 2.0)),
                ingredient("sauce", 50.0, NutritionValues::new(100.0, 1.0, 8.0, 6.0)),
            ],
        };

        let report = ReconciliationEngine::new(&catalog, &config).reconcile(&estimate);

        assert_eq!(report.outcome, ReconciliationOutcome::ModelOnly);
        assert_eq!(report.corrected_ingredients, 1);
        assert!((report.estimate.ingredients[0].nutrition_per_100.calories - 76.0).abs() < 1e-9);
        assert!((report.estimate.ingredients[1].nutrition_per_100.calories - 100.0).abs() < 1e-9);
        // 150 * 0.76 + 50 * 1.0
        assert!((report.estimate.total_nutrition.calories - 164.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_divergence_rescue_applies_uniform_density() {
        let catalog = catalog();
        let config = ReconciliationConfig::default();
        let estimate = FoodEstimate {
            food_name: "참치김치볶음밥".to_owned(),
            ingredients: vec![
                ingredient("rice", 250.0, NutritionValues::new(60.0, 1.0, 0.5, 12.0)),
                ingredient("tuna", 50.0, NutritionValues::new(50.0, 10.0, 1.0, 0.0)),
            ],
        };

        let report = ReconciliationEngine::new(&catalog, &config).reconcile(&estimate);

        match &report.outcome {
            ReconciliationOutcome::FuzzyRescued { dish, divergence } => {
                assert_eq!(dish, "김치볶음밥");
                // model 175 kcal vs catalog 480 kcal
                assert!((divergence - 305.0 / 480.0).abs() < 1e-9);
            }
            other => panic!("expected rescue, got {other:?}"),
        }
        for ingredient in &report.estimate.ingredients {
            assert!((ingredient.nutrition_per_100.calories - 160.0).abs() < 1e-9);
            assert!((ingredient.nutrition_per_100.carbs - 24.0).abs() < 1e-9);
        }
        let total = report.estimate.total_nutrition;
        assert!((total.calories - 480.0).abs() < f64::EPSILON);
        assert!((total.protein - 12.0).abs() < 1e-9);
        assert!((total.fat - 15.0).abs() < 1e-9);
        assert!((total.carbs - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_divergence_trusts_model() {
        let catalog = catalog();
        let config = ReconciliationConfig::default();
        let estimate = FoodEstimate {
            food_name: "참치김치볶음밥".to_owned(),
            ingredients: vec![
                ingredient("rice", 250.0, NutritionValues::new(130.0, 2.7, 0.3, 28.0)),
                ingredient("tuna", 50.0, NutritionValues::new(100.0, 20.0, 2.0, 0.0)),
            ],
        };

        let report = ReconciliationEngine::new(&catalog, &config).reconcile(&estimate);

        match report.outcome {
            ReconciliationOutcome::FuzzyTrusted {
                divergence: Some(divergence),
                ..
            } => assert!(divergence <= 0.3),
            other => panic!("expected trusted, got {other:?}"),
        }
        assert!((report.estimate.total_nutrition.calories - 375.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_catalog_passes_model_through() {
        let catalog = ReferenceCatalog::empty();
        let config = ReconciliationConfig::default();
        let estimate = FoodEstimate {
            food_name: "김치찌개".to_owned(),
            ingredients: vec![ingredient("두부", 100.0, NutritionValues::new(50.0, 5.0, 3.0, 2.0))],
        };

        let corrected = correct_estimate(&estimate, &catalog, &config);

        assert_eq!(corrected.ingredients, estimate.ingredients);
        assert!((corrected.total_nutrition.calories - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_weight_fuzzy_match_is_trusted() {
        let catalog = catalog();
        let config = ReconciliationConfig::default();
        let estimate = FoodEstimate {
            food_name: "김치찌게".to_owned(),
            ingredients: vec![],
        };

        let report = ReconciliationEngine::new(&catalog, &config).reconcile(&estimate);

        assert_eq!(
            report.outcome,
            ReconciliationOutcome::FuzzyTrusted {
                dish: "김치찌개".to_owned(),
                divergence: None
            }
        );
        assert_eq!(report.estimate.total_nutrition, NutritionValues::ZERO);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let catalog = catalog();
        let config = ReconciliationConfig::default();
        let estimate = FoodEstimate {
            food_name: "김치찌개".to_owned(),
            ingredients: vec![ingredient("x", 100.0, NutritionValues::new(1.0, 1.0, 1.0, 1.0))],
        };
        let before = estimate.clone();

        let _ = correct_estimate(&estimate, &catalog, &config);

        assert_eq!(estimate, before);
    }

    #[test]
    fn test_outcome_serializes_with_path_tag() {
        let json = serde_json::to_value(ReconciliationOutcome::ModelOnly).unwrap();
        assert_eq!(json, serde_json::json!({ "path": "model_only" }));
    }
}
