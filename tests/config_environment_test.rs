// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, defaults, overrides, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealscan::config::{Environment, IntelligenceConfig, ServerConfig};
use mealscan::constants::{defaults, env_config};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const SERVER_VARS: [&str; 11] = [
    env_config::HTTP_HOST,
    env_config::HTTP_PORT,
    env_config::ENVIRONMENT,
    env_config::DISH_CATALOG_PATH,
    env_config::INGREDIENT_CATALOG_PATH,
    env_config::DAILY_CALORIE_GOAL,
    env_config::DAILY_PROTEIN_GOAL,
    env_config::DAILY_FAT_GOAL,
    env_config::DAILY_CARBS_GOAL,
    env_config::CORS_ALLOWED_ORIGINS,
    env_config::REQUEST_TIMEOUT_SECS,
];

fn clear_server_env() {
    for var in SERVER_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_server_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, defaults::HTTP_PORT);
    assert_eq!(config.environment, Environment::Development);
    assert!(config.catalogs.dishes.is_none());
    assert!((config.daily_goals.calories - defaults::DAILY_CALORIES).abs() < f64::EPSILON);
    assert_eq!(config.request_timeout_secs, defaults::REQUEST_TIMEOUT_SECS);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_server_env();
    env::set_var(env_config::HTTP_PORT, "9090");
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var(env_config::DISH_CATALOG_PATH, "/srv/catalog/dishes.json");
    env::set_var(env_config::DAILY_CALORIE_GOAL, "1800");
    env::set_var(env_config::CORS_ALLOWED_ORIGINS, "https://app.example.com");

    let config = ServerConfig::from_env().unwrap();
    clear_server_env();

    assert_eq!(config.http_port, 9090);
    assert!(config.environment.is_production());
    assert_eq!(
        config.catalogs.dishes,
        Some(PathBuf::from("/srv/catalog/dishes.json"))
    );
    assert!(config.catalogs.ingredients.is_none());
    assert!((config.daily_goals.calories - 1800.0).abs() < f64::EPSILON);
    assert_eq!(config.cors_allowed_origins, "https://app.example.com");
}

#[test]
#[serial]
fn test_unparsable_port_rejected() {
    clear_server_env();
    env::set_var(env_config::HTTP_PORT, "not-a-port");

    let result = ServerConfig::from_env();
    clear_server_env();

    assert!(result.is_err());
}

#[test]
fn test_negative_goal_fails_validation() {
    let mut config = ServerConfig::default();
    config.daily_goals.protein = -1.0;

    assert!(config.validate().is_err());
}

#[test]
fn test_zero_timeout_fails_validation() {
    let config = ServerConfig {
        request_timeout_secs: 0,
        ..ServerConfig::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn test_bind_address_and_summary() {
    let config = ServerConfig::default();

    assert_eq!(config.bind_address(), "127.0.0.1:8081");
    assert!(config.summary().contains("built-in sample"));
}

#[test]
#[serial]
fn test_intelligence_overrides_validated() {
    env::set_var("MEALSCAN_FUZZY_THRESHOLD", "1.5");

    let result = IntelligenceConfig::load();
    env::remove_var("MEALSCAN_FUZZY_THRESHOLD");

    assert!(result.is_err());
}
