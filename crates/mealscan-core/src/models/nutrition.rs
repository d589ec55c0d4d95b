// ABOUTME: Nutrition value and food estimate models for meal analysis
// ABOUTME: NutritionValues, MeasureUnit, IngredientEstimate, FoodEstimate, and HealthScore definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use crate::constants::nutrition::DENSITY_BASIS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Energy and macronutrient amounts
///
/// Calories are kcal, the macros are grams. Depending on context the values
/// are either a total (for some quantity of food) or a density per 100 g/ml.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionValues {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
}

impl NutritionValues {
    /// All-zero values
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein: 0.0,
        fat: 0.0,
        carbs: 0.0,
    };

    /// Create nutrition values
    #[must_use]
    pub const fn new(calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            calories,
            protein,
            fat,
            carbs,
        }
    }

    /// Multiply every field by `factor`
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
        }
    }

    /// Convert a total measured at `reference_amount` units into a per-100 density
    ///
    /// Returns `None` when `reference_amount` is not a positive finite number.
    #[must_use]
    pub fn density_from_total(&self, reference_amount: f64) -> Option<Self> {
        if reference_amount.is_finite() && reference_amount > 0.0 {
            Some(self.scale(DENSITY_BASIS / reference_amount))
        } else {
            None
        }
    }

    /// Whether every field is finite and non-negative
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.fat, self.carbs]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl Add for NutritionValues {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl AddAssign for NutritionValues {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Unit an ingredient quantity is measured in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MeasureUnit {
    /// Grams
    #[serde(rename = "g")]
    Grams,
    /// Milliliters
    #[serde(rename = "ml")]
    Milliliters,
}

impl MeasureUnit {
    /// Parse a unit label, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Some(Self::Grams),
            "ml" | "milliliter" | "milliliters" => Some(Self::Milliliters),
            _ => None,
        }
    }

    /// Short label used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Milliliters => "ml",
        }
    }
}

impl fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ingredient as claimed by the vision model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientEstimate {
    /// Free-text ingredient name
    pub name: String,
    /// Quantity present (> 0)
    pub amount: f64,
    /// Unit of `amount`
    pub unit: MeasureUnit,
    /// Nutrition density per 100 units of `unit`
    #[serde(rename = "nutritionPer100g", alias = "nutritionPer100")]
    pub nutrition_per_100: NutritionValues,
}

impl IngredientEstimate {
    /// Copy of this ingredient carrying a different density
    #[must_use]
    pub fn with_density(&self, nutrition_per_100: NutritionValues) -> Self {
        Self {
            nutrition_per_100,
            ..self.clone()
        }
    }
}

/// Uncertain estimate produced once per analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEstimate {
    /// Dish name reported by the model
    pub food_name: String,
    /// Ingredient breakdown
    pub ingredients: Vec<IngredientEstimate>,
}

/// Reconciled estimate with rounded totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectedFoodEstimate {
    /// Dish name, unchanged from the input
    pub food_name: String,
    /// Ingredients with corrected densities
    pub ingredients: Vec<IngredientEstimate>,
    /// Rounded total nutrition
    pub total_nutrition: NutritionValues,
}

impl From<CorrectedFoodEstimate> for FoodEstimate {
    fn from(corrected: CorrectedFoodEstimate) -> Self {
        Self {
            food_name: corrected.food_name,
            ingredients: corrected.ingredients,
        }
    }
}

/// Display-only desirability rating in `[1, 10]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HealthScore(u8);

impl HealthScore {
    /// Lowest possible score
    pub const MIN: u8 = 1;
    /// Highest possible score
    pub const MAX: u8 = 10;

    /// Clamp a raw additive score into range
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        Self(raw.clamp(i32::from(Self::MIN), i32::from(Self::MAX)) as u8)
    }

    /// Score value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HealthScore {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!(
                "health score must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            ))
        }
    }
}

impl From<HealthScore> for u8 {
    fn from(score: HealthScore) -> Self {
        score.0
    }
}

impl fmt::Display for HealthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
