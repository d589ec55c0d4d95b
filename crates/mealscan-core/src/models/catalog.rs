// ABOUTME: Reference catalog entry models for curated dish and ingredient nutrition
// ABOUTME: CatalogEntry and CatalogKind definitions shared by lookup and loading code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use super::nutrition::NutritionValues;
use serde::{Deserialize, Serialize};

/// Which reference table an entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// Completed dish with curated whole-meal nutrition
    Dish,
    /// Raw or simple ingredient
    Ingredient,
}

/// Curated reference nutrition for one dish or ingredient
///
/// `nutrition` is the total measured at `reference_amount` units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Canonical name
    pub name: String,
    /// Quantity the nutrition totals refer to (> 0)
    #[serde(alias = "unitWeight")]
    pub reference_amount: f64,
    /// Nutrition totals at `reference_amount`
    pub nutrition: NutritionValues,
}

impl CatalogEntry {
    /// Create a catalog entry
    #[must_use]
    pub fn new(name: impl Into<String>, reference_amount: f64, nutrition: NutritionValues) -> Self {
        Self {
            name: name.into(),
            reference_amount,
            nutrition,
        }
    }

    /// Nutrition per 100 units, or `None` when `reference_amount` is unusable
    #[must_use]
    pub fn density(&self) -> Option<NutritionValues> {
        self.nutrition.density_from_total(self.reference_amount)
    }
}
