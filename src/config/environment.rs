// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads bind address, catalog paths, and daily goals from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Environment-based configuration management for the Mealscan server

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use mealscan_core::models::DailyGoals;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Reference catalog file locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogPaths {
    /// Dish catalog JSON; the built-in sample is used when unset
    pub dishes: Option<PathBuf>,
    /// Ingredient catalog JSON; the built-in sample is used when unset
    pub ingredients: Option<PathBuf>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Catalog file locations
    pub catalogs: CatalogPaths,
    /// Daily goals used by the progress summary
    pub daily_goals: DailyGoals,
    /// Comma-separated allowed CORS origins, or `*`
    pub cors_allowed_origins: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HTTP_HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            catalogs: CatalogPaths::default(),
            daily_goals: DailyGoals::default(),
            cors_allowed_origins: "*".to_owned(),
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but unparsable, or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_config::HTTP_HOST, defaults::HTTP_HOST),
            http_port: env_var_or(env_config::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            catalogs: CatalogPaths {
                dishes: env::var(env_config::DISH_CATALOG_PATH).ok().map(PathBuf::from),
                ingredients: env::var(env_config::INGREDIENT_CATALOG_PATH)
                    .ok()
                    .map(PathBuf::from),
            },
            daily_goals: DailyGoals {
                calories: env_var_or(
                    env_config::DAILY_CALORIE_GOAL,
                    &defaults::DAILY_CALORIES.to_string(),
                )
                .parse()
                .context("Invalid DAILY_CALORIE_GOAL value")?,
                protein: env_var_or(
                    env_config::DAILY_PROTEIN_GOAL,
                    &defaults::DAILY_PROTEIN_G.to_string(),
                )
                .parse()
                .context("Invalid DAILY_PROTEIN_GOAL value")?,
                fat: env_var_or(env_config::DAILY_FAT_GOAL, &defaults::DAILY_FAT_G.to_string())
                    .parse()
                    .context("Invalid DAILY_FAT_GOAL value")?,
                carbs: env_var_or(
                    env_config::DAILY_CARBS_GOAL,
                    &defaults::DAILY_CARBS_G.to_string(),
                )
                .parse()
                .context("Invalid DAILY_CARBS_GOAL value")?,
            },
            cors_allowed_origins: env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*"),
            request_timeout_secs: env_var_or(
                env_config::REQUEST_TIMEOUT_SECS,
                &defaults::REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid REQUEST_TIMEOUT_SECS value")?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a goal is negative or not finite, or the timeout is zero
    pub fn validate(&self) -> Result<()> {
        let goals = [
            ("DAILY_CALORIE_GOAL", self.daily_goals.calories),
            ("DAILY_PROTEIN_GOAL", self.daily_goals.protein),
            ("DAILY_FAT_GOAL", self.daily_goals.fat),
            ("DAILY_CARBS_GOAL", self.daily_goals.carbs),
        ];
        for (name, value) in goals {
            if !value.is_finite() || value < 0.0 {
                return Err(anyhow::anyhow!("{name} must be a non-negative number"));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be positive"));
        }

        if self.environment.is_production() && self.cors_allowed_origins == "*" {
            warn!("CORS allows any origin in production");
        }

        Ok(())
    }

    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Mealscan Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Dish Catalog: {}\n\
             - Ingredient Catalog: {}\n\
             - Daily Goals: {} kcal, {} g protein, {} g fat, {} g carbs\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s",
            self.bind_address(),
            self.environment,
            describe_path(self.catalogs.dishes.as_ref()),
            describe_path(self.catalogs.ingredients.as_ref()),
            self.daily_goals.calories,
            self.daily_goals.protein,
            self.daily_goals.fat,
            self.daily_goals.carbs,
            self.cors_allowed_origins,
            self.request_timeout_secs,
        )
    }
}

fn describe_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(|| "built-in sample".to_owned(), |p| p.display().to_string())
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
