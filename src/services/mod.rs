// ABOUTME: Service layer shared by HTTP routes and the CLI
// ABOUTME: Food analysis pipeline over the reference catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

/// Vision reply to scored, reconciled estimate
pub mod analysis;

pub use analysis::{AnalysisOutcome, FoodAnalysis, FoodAnalysisService};
