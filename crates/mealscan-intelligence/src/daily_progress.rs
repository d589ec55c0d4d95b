// ABOUTME: Daily nutrition progress computed from logged meals and daily goals
// ABOUTME: Consumed totals, remaining budget, percent of goal, and per-meal breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use crate::aggregation::round;
use chrono::NaiveDate;
use mealscan_core::models::{DailyGoals, FoodLogEntry, MealType, NutritionValues};
use serde::Serialize;
use std::collections::BTreeMap;

/// One day of logged meals measured against the daily goals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// Calendar day summarized
    pub date: NaiveDate,
    /// Goals the day was measured against
    pub goals: DailyGoals,
    /// Rounded sum of every entry
    pub consumed: NutritionValues,
    /// Goal minus consumed, never negative
    pub remaining: NutritionValues,
    /// Consumed as a percentage of goal, 0 where the goal is 0
    pub percent_of_goal: NutritionValues,
    /// Number of entries
    pub entry_count: usize,
    /// Mean health score to one decimal, absent for an empty day
    pub average_health_score: Option<f64>,
    /// Calories per meal slot
    pub calories_by_meal: BTreeMap<MealType, f64>,
}

/// Summarize the entries logged on `date`
///
/// Entries whose timestamp falls on another day are ignored.
#[must_use]
pub fn summarize_day(date: NaiveDate, entries: &[FoodLogEntry], goals: &DailyGoals) -> DailySummary {
    let day: Vec<&FoodLogEntry> = entries.iter().filter(|entry| entry.date() == date).collect();

    let consumed_raw = day
        .iter()
        .fold(NutritionValues::ZERO, |total, entry| total + entry.nutrition);
    let consumed = round(&consumed_raw);
    let goal_values = goals.as_values();

    let remaining = round(&NutritionValues {
        calories: goal_values.calories - consumed.calories,
        protein: goal_values.protein - consumed.protein,
        fat: goal_values.fat - consumed.fat,
        carbs: goal_values.carbs - consumed.carbs,
    });

    let percent_of_goal = NutritionValues {
        calories: percent(consumed.calories, goal_values.calories),
        protein: percent(consumed.protein, goal_values.protein),
        fat: percent(consumed.fat, goal_values.fat),
        carbs: percent(consumed.carbs, goal_values.carbs),
    };

    let average_health_score = (!day.is_empty()).then(|| {
        let sum: f64 = day
            .iter()
            .map(|entry| f64::from(entry.health_score.value()))
            .sum();
        (sum / day.len() as f64 * 10.0).round() / 10.0
    });

    let mut calories_by_meal = BTreeMap::new();
    for entry in &day {
        *calories_by_meal.entry(entry.meal_type).or_insert(0.0) += entry.nutrition.calories;
    }
    for calories in calories_by_meal.values_mut() {
        *calories = f64::round(*calories);
    }

    DailySummary {
        date,
        goals: *goals,
        consumed,
        remaining,
        percent_of_goal,
        entry_count: day.len(),
        average_health_score,
        calories_by_meal,
    }
}

/// Percentage to one decimal; 0 for a non-positive goal
fn percent(consumed: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (consumed / goal * 1000.0).round() / 10.0
}
