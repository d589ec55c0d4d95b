// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, fixture catalogs, and server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `mealscan`
//!
//! Fixture catalogs mirror the built-in sample data for the entries the
//! tests rely on, so expectations stay stable if the sample grows.

use mealscan::{
    config::{IntelligenceConfig, ServerConfig},
    models::{CatalogEntry, FoodEstimate, IngredientEstimate, MeasureUnit, NutritionValues},
    resources::ServerResources,
    routes,
};
use mealscan_intelligence::ReferenceCatalog;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Dish catalog used across integration tests
pub fn fixture_dishes() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("김치찌개", 500.0, NutritionValues::new(600.0, 30.0, 35.0, 40.0)),
        CatalogEntry::new("된장찌개", 500.0, NutritionValues::new(400.0, 24.0, 18.0, 30.0)),
        CatalogEntry::new("김치볶음밥", 400.0, NutritionValues::new(640.0, 16.0, 20.0, 96.0)),
    ]
}

/// Ingredient catalog used across integration tests
pub fn fixture_ingredients() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("쌀밥", 100.0, NutritionValues::new(130.0, 2.7, 0.3, 28.0)),
        CatalogEntry::new("두부", 100.0, NutritionValues::new(76.0, 8.0, 4.8, 1.9)),
        CatalogEntry::new("김치", 100.0, NutritionValues::new(18.0, 1.6, 0.4, 3.0)),
        CatalogEntry::new("된장찌개", 100.0, NutritionValues::new(80.0, 4.8, 3.6, 6.0)),
    ]
}

/// Reference catalog with both fixture tables
pub fn fixture_catalog() -> ReferenceCatalog {
    ReferenceCatalog::new(fixture_dishes(), fixture_ingredients())
}

/// Ingredient in grams
pub fn grams(name: &str, amount: f64, density: NutritionValues) -> IngredientEstimate {
    IngredientEstimate {
        name: name.to_owned(),
        amount,
        unit: MeasureUnit::Grams,
        nutrition_per_100: density,
    }
}

/// Estimate from a name and ingredients
pub fn estimate(food_name: &str, ingredients: Vec<IngredientEstimate>) -> FoodEstimate {
    FoodEstimate {
        food_name: food_name.to_owned(),
        ingredients,
    }
}

/// Server resources over the fixture catalog with default configuration
pub fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        fixture_catalog(),
        IntelligenceConfig::default(),
    ))
}

/// Full application router over fresh test resources
pub fn create_test_app() -> (Arc<ServerResources>, axum::Router) {
    let resources = create_test_resources();
    let app = routes::app_router(&resources);
    (resources, app)
}

/// Assert two floats agree to within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
