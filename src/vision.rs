// ABOUTME: Parsing and validation of vision-model meal analysis responses
// ABOUTME: Strips markdown fences, handles non-food replies, and validates every ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Vision-model response parsing
//!
//! The model is asked for a JSON object shaped like:
//!
//! ```json
//! {
//!   "isFood": true,
//!   "foodName": "김치찌개",
//!   "description": "...",
//!   "ingredients": [
//!     { "name": "김치", "amount": 120, "unit": "g",
//!       "nutritionPer100g": { "calories": 18, "protein": 1.6, "fat": 0.4, "carbs": 3 } }
//!   ]
//! }
//! ```
//!
//! Models often wrap the object in a markdown code fence or add a sentence
//! around it, so parsing looks for the outermost braces first.

use crate::errors::{AppError, AppResult};
use mealscan_core::models::{FoodEstimate, IngredientEstimate, MeasureUnit, NutritionValues};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of parsing a vision-model reply
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VisionOutcome {
    /// The photo does not show food
    NotFood {
        /// What the model saw instead, when it said
        description: Option<String>,
    },
    /// A validated estimate ready for reconciliation
    Food(FoodEstimate),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVisionResponse {
    #[serde(default = "default_is_food")]
    is_food: bool,
    #[serde(default)]
    food_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    ingredients: Vec<RawIngredient>,
}

const fn default_is_food() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIngredient {
    name: String,
    amount: f64,
    unit: String,
    #[serde(alias = "nutritionPer100")]
    nutrition_per_100g: NutritionValues,
}

/// Parse a raw vision-model reply into a validated outcome
///
/// # Errors
///
/// Returns `INVALID_FORMAT` for unparsable JSON, `MISSING_REQUIRED_FIELD`
/// when a food reply has no name, and `INVALID_INPUT` or `VALUE_OUT_OF_RANGE`
/// for an invalid ingredient
pub fn parse_vision_response(raw: &str) -> AppResult<VisionOutcome> {
    let json = extract_json_object(raw);
    let response: RawVisionResponse = serde_json::from_str(json)?;

    if !response.is_food {
        debug!("Vision model reported a non-food image");
        return Ok(VisionOutcome::NotFood {
            description: response.description,
        });
    }

    let food_name = response
        .food_name
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::missing_field("foodName"))?;

    let ingredients = response
        .ingredients
        .into_iter()
        .enumerate()
        .map(|(index, ingredient)| validate_ingredient(index, ingredient))
        .collect::<AppResult<Vec<_>>>()?;

    debug!(
        food_name = %food_name,
        ingredients = ingredients.len(),
        "Parsed vision model estimate"
    );

    Ok(VisionOutcome::Food(FoodEstimate {
        food_name,
        ingredients,
    }))
}

fn validate_ingredient(index: usize, raw: RawIngredient) -> AppResult<IngredientEstimate> {
    let name = raw.name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input(format!(
            "ingredient {index} has an empty name"
        )));
    }

    if !raw.amount.is_finite() || raw.amount <= 0.0 {
        return Err(AppError::out_of_range(format!(
            "ingredient '{name}' amount must be positive, got {}",
            raw.amount
        )));
    }

    let unit = MeasureUnit::parse(&raw.unit).ok_or_else(|| {
        AppError::invalid_input(format!(
            "ingredient '{name}' has unsupported unit '{}'",
            raw.unit
        ))
    })?;

    if !raw.nutrition_per_100g.is_valid() {
        return Err(AppError::out_of_range(format!(
            "ingredient '{name}' nutrition values must be non-negative numbers"
        )));
    }

    Ok(IngredientEstimate {
        name: name.to_owned(),
        amount: raw.amount,
        unit,
        nutrition_per_100: raw.nutrition_per_100g,
    })
}

/// Slice between the first `{` and the last `}`, or the trimmed input
fn extract_json_object(raw: &str) -> &str {
    let trimmed = raw.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_fence() {
        let raw = "```json\n{\"isFood\": false}\n```";
        assert_eq!(extract_json_object(raw), "{\"isFood\": false}");
    }

    #[test]
    fn test_extract_without_braces_passes_through() {
        assert_eq!(extract_json_object("  not json  "), "not json");
    }
}
