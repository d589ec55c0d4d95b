// ABOUTME: Nutrition reconciliation engine for the Mealscan platform
// ABOUTME: Catalog matching, aggregation, estimate correction, health scoring, and daily progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

#![deny(unsafe_code)]

//! # Mealscan Intelligence
//!
//! Pure, synchronous algorithms that turn a vision model's per-ingredient
//! guess into a stable nutrition result. Nothing here performs I/O or holds
//! mutable state; the reference catalog is read-only and shared freely
//! across threads.
//!
//! ## Modules
//!
//! - **similarity**: Levenshtein distance and normalized similarity
//! - **catalog**: Exact-then-fuzzy lookup over dish and ingredient tables
//! - **aggregation**: Density-times-amount sums and display rounding
//! - **reconciliation**: Estimate correction against the catalog
//! - **health_score**: 1-10 display heuristic
//! - **daily_progress**: Day totals against goals

/// Tunable thresholds and scoring settings
pub mod config;

/// Edit-distance similarity between names
pub mod similarity;

/// Reference catalog and lookup pipeline
pub mod catalog;

/// Nutrition sums and rounding
pub mod aggregation;

/// Reconciliation of model estimates with catalog data
pub mod reconciliation;

/// Keyword tables for the health score
pub mod keywords;

/// Health score heuristic
pub mod health_score;

/// Daily totals and goal progress
pub mod daily_progress;

pub use catalog::{find_match, CatalogMatch, MatchMethod, ReferenceCatalog};
pub use config::{HealthScoreConfig, IntelligenceConfig, ReconciliationConfig};
pub use daily_progress::{summarize_day, DailySummary};
pub use reconciliation::{
    correct_estimate, ReconciliationEngine, ReconciliationOutcome, ReconciliationReport,
};
