// ABOUTME: Integration tests for vision-model reply parsing
// ABOUTME: Validates fenced replies, non-food replies, and ingredient validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealscan::errors::ErrorCode;
use mealscan::models::MeasureUnit;
use mealscan::vision::{parse_vision_response, VisionOutcome};

const KIMCHI_STEW_REPLY: &str = r#"Here is the analysis:
```json
{
  "isFood": true,
  "foodName": " 김치찌개 ",
  "description": "Kimchi stew with tofu",
  "ingredients": [
    { "name": "김치", "amount": 150, "unit": "g",
      "nutritionPer100g": { "calories": 18, "protein": 1.6, "fat": 0.4, "carbs": 3 } },
    { "name": "육수", "amount": 200, "unit": "ML",
      "nutritionPer100g": { "calories": 5, "protein": 0.5, "fat": 0.1, "carbs": 0.2 } }
  ]
}
```"#;

fn reply_with_ingredient(ingredient: &str) -> String {
    format!(r#"{{"isFood": true, "foodName": "비빔밥", "ingredients": [{ingredient}]}}"#)
}

#[test]
fn test_parses_fenced_food_reply() {
    let outcome = parse_vision_response(KIMCHI_STEW_REPLY).unwrap();

    let VisionOutcome::Food(estimate) = outcome else {
        panic!("expected a food estimate");
    };
    assert_eq!(estimate.food_name, "김치찌개");
    assert_eq!(estimate.ingredients.len(), 2);
    assert_eq!(estimate.ingredients[0].unit, MeasureUnit::Grams);
    assert_eq!(estimate.ingredients[1].unit, MeasureUnit::Milliliters);
    assert!((estimate.ingredients[0].nutrition_per_100.protein - 1.6).abs() < f64::EPSILON);
}

#[test]
fn test_non_food_reply() {
    let outcome =
        parse_vision_response(r#"{"isFood": false, "description": "A cat on a sofa"}"#).unwrap();

    assert_eq!(
        outcome,
        VisionOutcome::NotFood {
            description: Some("A cat on a sofa".to_owned())
        }
    );
}

#[test]
fn test_legacy_density_field_name_accepted() {
    let raw = reply_with_ingredient(
        r#"{"name": "쌀밥", "amount": 210, "unit": "g", "nutritionPer100": {"calories": 130, "protein": 2.7, "fat": 0.3, "carbs": 28}}"#,
    );

    let VisionOutcome::Food(estimate) = parse_vision_response(&raw).unwrap() else {
        panic!("expected a food estimate");
    };
    assert!((estimate.ingredients[0].nutrition_per_100.calories - 130.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_food_name_rejected() {
    let err = parse_vision_response(r#"{"isFood": true, "foodName": "  ", "ingredients": []}"#)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_invalid_json_rejected() {
    let err = parse_vision_response("I could not analyze this image.").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_ingredient_validation() {
    let cases = [
        (
            r#"{"name": "", "amount": 10, "unit": "g", "nutritionPer100g": {"calories": 1, "protein": 0, "fat": 0, "carbs": 0}}"#,
            ErrorCode::InvalidInput,
        ),
        (
            r#"{"name": "쌀밥", "amount": 0, "unit": "g", "nutritionPer100g": {"calories": 1, "protein": 0, "fat": 0, "carbs": 0}}"#,
            ErrorCode::ValueOutOfRange,
        ),
        (
            r#"{"name": "쌀밥", "amount": 100, "unit": "cup", "nutritionPer100g": {"calories": 1, "protein": 0, "fat": 0, "carbs": 0}}"#,
            ErrorCode::InvalidInput,
        ),
        (
            r#"{"name": "쌀밥", "amount": 100, "unit": "g", "nutritionPer100g": {"calories": -5, "protein": 0, "fat": 0, "carbs": 0}}"#,
            ErrorCode::ValueOutOfRange,
        ),
    ];

    for (ingredient, expected) in cases {
        let err = parse_vision_response(&reply_with_ingredient(ingredient)).unwrap_err();
        assert_eq!(err.code, expected, "ingredient {ingredient}");
    }
}
