// ABOUTME: Food log models for tracking analyzed meals against daily goals
// ABOUTME: FoodLogEntry, MealType, and DailyGoals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use super::nutrition::{HealthScore, NutritionValues};
use crate::constants::defaults;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// One logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
    /// Unique identifier for this entry
    pub id: Uuid,
    /// When the meal was eaten
    pub logged_at: DateTime<Utc>,
    /// Meal slot
    pub meal_type: MealType,
    /// Dish name
    pub food_name: String,
    /// Rounded total nutrition of the meal
    pub nutrition: NutritionValues,
    /// Health score shown next to the entry
    pub health_score: HealthScore,
}

impl FoodLogEntry {
    /// Calendar day (UTC) this entry counts toward
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.logged_at.date_naive()
    }
}

/// Daily calorie and macro targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    /// Energy target (kcal)
    pub calories: f64,
    /// Protein target (g)
    pub protein: f64,
    /// Fat target (g)
    pub fat: f64,
    /// Carbohydrate target (g)
    pub carbs: f64,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            calories: defaults::DAILY_CALORIES,
            protein: defaults::DAILY_PROTEIN_G,
            fat: defaults::DAILY_FAT_G,
            carbs: defaults::DAILY_CARBS_G,
        }
    }
}

impl DailyGoals {
    /// Goals as a `NutritionValues` for field-wise arithmetic
    #[must_use]
    pub const fn as_values(&self) -> NutritionValues {
        NutritionValues::new(self.calories, self.protein, self.fat, self.carbs)
    }
}
