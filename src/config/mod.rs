// ABOUTME: Configuration management module for server settings
// ABOUTME: Re-exports environment configuration and the engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Configuration module for the Mealscan server
//!
//! - **Environment**: Server configuration from environment variables
//! - **Intelligence**: Reconciliation thresholds and health score settings,
//!   owned by the intelligence crate

/// Environment and server configuration
pub mod environment;

pub use environment::{CatalogPaths, Environment, ServerConfig};
pub use mealscan_intelligence::config::{
    ConfigError, HealthScoreConfig, IntelligenceConfig, ReconciliationConfig,
};
