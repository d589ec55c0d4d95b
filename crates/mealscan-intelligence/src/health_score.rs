// ABOUTME: Heuristic 1-10 health score from a food name and its nutrition totals
// ABOUTME: Calorie band, macro energy ratios, and keyword groups added to a base score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Health Score Heuristic
//!
//! Display-only rating. The score starts at the configured base, collects
//! additive adjustments and is clamped to `[1, 10]` once at the end, so
//! intermediate sums may leave the range.

use crate::config::HealthScoreConfig;
use crate::keywords::{beverage_tier, is_diet_labeled, BeverageTier, FOOD_GROUPS};
use mealscan_core::constants::nutrition::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use mealscan_core::models::{HealthScore, NutritionValues};
use serde::Serialize;
use tracing::trace;

/// Per-component contributions to a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreBreakdown {
    /// Starting score
    pub base: i32,
    /// Calorie band adjustment
    pub calorie_band: i32,
    /// Sum of protein, carb and fat ratio adjustments
    pub macro_ratios: i32,
    /// Sum of food group and beverage keyword adjustments
    pub keywords: i32,
    /// Final clamped score
    pub score: HealthScore,
}

impl HealthScoreBreakdown {
    /// Unclamped sum of every component
    #[must_use]
    pub const fn raw(&self) -> i32 {
        self.base + self.calorie_band + self.macro_ratios + self.keywords
    }
}

/// Score a food by name and finalized nutrition totals
#[must_use]
pub fn score(food_name: &str, nutrition: &NutritionValues, config: &HealthScoreConfig) -> HealthScore {
    breakdown(food_name, nutrition, config).score
}

/// Score a food and report each adjustment
#[must_use]
pub fn breakdown(
    food_name: &str,
    nutrition: &NutritionValues,
    config: &HealthScoreConfig,
) -> HealthScoreBreakdown {
    let name = food_name.to_lowercase();
    let calorie_band = calorie_band_adjustment(nutrition.calories);
    let macro_ratios = macro_ratio_adjustment(nutrition);
    let keywords = keyword_adjustment(&name, nutrition.calories, config);
    let raw = config.base_score + calorie_band + macro_ratios + keywords;

    trace!(
        food_name,
        calorie_band,
        macro_ratios,
        keywords,
        raw,
        "Computed health score"
    );

    HealthScoreBreakdown {
        base: config.base_score,
        calorie_band,
        macro_ratios,
        keywords,
        score: HealthScore::from_raw(raw),
    }
}

fn calorie_band_adjustment(calories: f64) -> i32 {
    if calories < 300.0 {
        2
    } else if calories < 500.0 {
        1
    } else if calories > 1200.0 {
        -2
    } else if calories >= 800.0 {
        -1
    } else {
        0
    }
}

/// Adjustments from each macro's share of total energy
///
/// Skipped entirely when there are no calories to divide by.
fn macro_ratio_adjustment(nutrition: &NutritionValues) -> i32 {
    if nutrition.calories <= 0.0 || !nutrition.calories.is_finite() {
        return 0;
    }

    let protein_ratio = nutrition.protein * KCAL_PER_G_PROTEIN / nutrition.calories;
    let carb_ratio = nutrition.carbs * KCAL_PER_G_CARBS / nutrition.calories;
    let fat_ratio = nutrition.fat * KCAL_PER_G_FAT / nutrition.calories;

    let protein = if protein_ratio > 0.25 {
        2
    } else if protein_ratio > 0.15 {
        1
    } else {
        0
    };

    let carbs = if (0.45..=0.65).contains(&carb_ratio) {
        1
    } else if carb_ratio > 0.75 {
        -1
    } else {
        0
    };

    let fat = if fat_ratio < 0.35 {
        1
    } else if fat_ratio > 0.5 {
        -1
    } else {
        0
    };

    protein + carbs + fat
}

fn keyword_adjustment(name: &str, calories: f64, config: &HealthScoreConfig) -> i32 {
    let groups: i32 = FOOD_GROUPS
        .iter()
        .filter(|group| group.matches(name))
        .map(|group| group.delta)
        .sum();

    groups + beverage_tier(name).map_or(0, |tier| beverage_delta(tier, name, calories, config))
}

fn beverage_delta(tier: BeverageTier, name: &str, calories: f64, config: &HealthScoreConfig) -> i32 {
    if tier == BeverageTier::VeryBad && config.distinguish_diet_beverages && is_diet_labeled(name) {
        let low_calorie_bonus = i32::from(calories <= config.diet_low_calorie_max);
        return -2 + low_calorie_bonus;
    }
    tier.delta()
}
