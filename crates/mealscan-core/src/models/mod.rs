// ABOUTME: Core data models for meal analysis and food logging
// ABOUTME: Re-exports nutrition, catalog, and food log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

/// Reference catalog entries
pub mod catalog;
/// Food log entries and daily goals
pub mod food_log;
/// Nutrition values and food estimates
pub mod nutrition;

pub use catalog::{CatalogEntry, CatalogKind};
pub use food_log::{DailyGoals, FoodLogEntry, MealType};
pub use nutrition::{
    CorrectedFoodEstimate, FoodEstimate, HealthScore, IngredientEstimate, MeasureUnit,
    NutritionValues,
};
