// ABOUTME: Food analysis service chaining vision parsing, reconciliation, and health scoring
// ABOUTME: Holds the shared read-only catalog and engine configuration for request handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use crate::errors::AppResult;
use crate::vision::{parse_vision_response, VisionOutcome};
use mealscan_core::models::{CorrectedFoodEstimate, FoodEstimate, HealthScore, NutritionValues};
use mealscan_intelligence::health_score;
use mealscan_intelligence::{
    IntelligenceConfig, ReconciliationEngine, ReconciliationOutcome, ReferenceCatalog,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Reconciled estimate with its display score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    /// Corrected estimate
    pub estimate: CorrectedFoodEstimate,
    /// Display-only health score
    pub health_score: HealthScore,
    /// Reconciliation path taken
    pub outcome: ReconciliationOutcome,
    /// Ingredients whose density came from the catalog
    pub corrected_ingredients: usize,
}

/// Result of analyzing one vision-model reply
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// The image did not show food
    NotFood {
        /// Model description of the image, if any
        description: Option<String>,
    },
    /// Food was found and reconciled
    Analyzed(FoodAnalysis),
}

/// Stateless analysis pipeline over a shared catalog
#[derive(Debug, Clone)]
pub struct FoodAnalysisService {
    catalog: Arc<ReferenceCatalog>,
    config: Arc<IntelligenceConfig>,
}

impl FoodAnalysisService {
    /// Create a service over `catalog`
    #[must_use]
    pub const fn new(catalog: Arc<ReferenceCatalog>, config: Arc<IntelligenceConfig>) -> Self {
        Self { catalog, config }
    }

    /// Shared reference catalog
    #[must_use]
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Engine configuration
    #[must_use]
    pub fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Parse a raw vision-model reply, reconcile it, and score it
    ///
    /// # Errors
    ///
    /// Returns an error if the reply is malformed or fails validation
    pub fn analyze(&self, raw: &str) -> AppResult<AnalysisOutcome> {
        match parse_vision_response(raw)? {
            VisionOutcome::NotFood { description } => Ok(AnalysisOutcome::NotFood { description }),
            VisionOutcome::Food(estimate) => {
                Ok(AnalysisOutcome::Analyzed(self.analyze_estimate(&estimate)))
            }
        }
    }

    /// Reconcile and score an already validated estimate
    #[must_use]
    pub fn analyze_estimate(&self, estimate: &FoodEstimate) -> FoodAnalysis {
        let report =
            ReconciliationEngine::new(&self.catalog, &self.config.reconciliation).reconcile(estimate);
        let health_score = self.score(&report.estimate.food_name, &report.estimate.total_nutrition);

        info!(
            food_name = %report.estimate.food_name,
            calories = report.estimate.total_nutrition.calories,
            health_score = %health_score,
            corrected_ingredients = report.corrected_ingredients,
            "Food analysis complete"
        );

        FoodAnalysis {
            estimate: report.estimate,
            health_score,
            outcome: report.outcome,
            corrected_ingredients: report.corrected_ingredients,
        }
    }

    /// Score a food by name and totals
    #[must_use]
    pub fn score(&self, food_name: &str, nutrition: &NutritionValues) -> HealthScore {
        health_score::score(food_name, nutrition, &self.config.health_score)
    }
}
