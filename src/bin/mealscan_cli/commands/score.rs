// ABOUTME: Score command for mealscan-cli
// ABOUTME: Prints the display health score, optionally with each adjustment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use mealscan::errors::{AppError, AppResult};
use mealscan::models::NutritionValues;
use mealscan::services::FoodAnalysisService;
use mealscan_intelligence::health_score;

/// Score `name` with totals `[calories, protein, fat, carbs]`
pub fn score(
    service: &FoodAnalysisService,
    name: &str,
    values: [f64; 4],
    show_breakdown: bool,
) -> AppResult<()> {
    let [calories, protein, fat, carbs] = values;
    let nutrition = NutritionValues::new(calories, protein, fat, carbs);
    if !nutrition.is_valid() {
        return Err(AppError::out_of_range(
            "nutrition values must be finite and non-negative",
        ));
    }

    if show_breakdown {
        let report =
            health_score::breakdown(name, &nutrition, &service.config().health_score);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", service.score(name, &nutrition));
    }

    Ok(())
}
