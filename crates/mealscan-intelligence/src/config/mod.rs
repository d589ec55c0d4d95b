// ABOUTME: Intelligence configuration for reconciliation thresholds and health scoring
// ABOUTME: Provides defaults, environment overrides, validation, and a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Intelligence Configuration Module
//!
//! Tunable parameters of the reconciliation engine and the health score
//! heuristic. Every engine function takes its configuration by reference;
//! the global instance exists for binaries that want environment-driven
//! settings without threading them through by hand.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Catalog matching and divergence thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationConfig {
    /// Minimum normalized similarity for a fuzzy name match
    pub fuzzy_threshold: f64,
    /// Relative calorie divergence above which catalog data overrides the model
    pub divergence_threshold: f64,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.7,
            divergence_threshold: 0.3,
        }
    }
}

/// Health score heuristic settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthScoreConfig {
    /// Starting score before adjustments
    pub base_score: i32,
    /// Score zero/diet sodas separately from regular sodas
    pub distinguish_diet_beverages: bool,
    /// Calorie ceiling for the low-calorie diet beverage bonus
    pub diet_low_calorie_max: f64,
}

impl Default for HealthScoreConfig {
    fn default() -> Self {
        Self {
            base_score: 5,
            distinguish_diet_beverages: true,
            diet_low_calorie_max: 5.0,
        }
    }
}

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Reconciliation engine thresholds
    pub reconciliation: ReconciliationConfig,
    /// Health score heuristic settings
    pub health_score: HealthScoreConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold or score is outside its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.reconciliation;
        if !(0.0..=1.0).contains(&thresholds.fuzzy_threshold) {
            return Err(ConfigError::InvalidRange(
                "fuzzy_threshold must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&thresholds.divergence_threshold) {
            return Err(ConfigError::InvalidRange(
                "divergence_threshold must be between 0 and 1",
            ));
        }
        if !(1..=10).contains(&self.health_score.base_score) {
            return Err(ConfigError::ValueOutOfRange(
                "base_score must be between 1 and 10",
            ));
        }
        if self.health_score.diet_low_calorie_max < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "diet_low_calorie_max must not be negative",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "MEALSCAN_FUZZY_THRESHOLD",
            &mut self.reconciliation.fuzzy_threshold,
        )?;
        Self::apply_env_var(
            "MEALSCAN_DIVERGENCE_THRESHOLD",
            &mut self.reconciliation.divergence_threshold,
        )?;
        Self::apply_env_var(
            "MEALSCAN_HEALTH_BASE_SCORE",
            &mut self.health_score.base_score,
        )?;
        Self::apply_env_var(
            "MEALSCAN_DISTINGUISH_DIET_BEVERAGES",
            &mut self.health_score.distinguish_diet_beverages,
        )?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "MEALSCAN_FUZZY_THRESHOLD",
            "MEALSCAN_DIVERGENCE_THRESHOLD",
            "MEALSCAN_HEALTH_BASE_SCORE",
            "MEALSCAN_DISTINGUISH_DIET_BEVERAGES",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_validate() {
        clear_env();
        let config = IntelligenceConfig::load().unwrap();
        assert!((config.reconciliation.fuzzy_threshold - 0.7).abs() < f64::EPSILON);
        assert!((config.reconciliation.divergence_threshold - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.health_score.base_score, 5);
        assert!(config.health_score.distinguish_diet_beverages);
    }

    #[test]
    #[serial]
    fn test_env_overrides_applied() {
        clear_env();
        env::set_var("MEALSCAN_FUZZY_THRESHOLD", "0.8");
        env::set_var("MEALSCAN_DISTINGUISH_DIET_BEVERAGES", "false");
        let config = IntelligenceConfig::load().unwrap();
        clear_env();

        assert!((config.reconciliation.fuzzy_threshold - 0.8).abs() < f64::EPSILON);
        assert!(!config.health_score.distinguish_diet_beverages);
    }

    #[test]
    #[serial]
    fn test_unparsable_override_rejected() {
        clear_env();
        env::set_var("MEALSCAN_DIVERGENCE_THRESHOLD", "thirty percent");
        let result = IntelligenceConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    #[serial]
    fn test_out_of_range_threshold_rejected() {
        clear_env();
        env::set_var("MEALSCAN_FUZZY_THRESHOLD", "1.5");
        let result = IntelligenceConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
    }
}
