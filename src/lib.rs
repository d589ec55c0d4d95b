// ABOUTME: Main library entry point for the Mealscan meal analysis service
// ABOUTME: Wires configuration, catalogs, vision parsing, food logging, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

#![deny(unsafe_code)]

//! # Mealscan
//!
//! HTTP service and CLI around the nutrition reconciliation engine in
//! `mealscan-intelligence`. A vision-language model looks at a meal photo and
//! guesses a per-ingredient breakdown; this crate parses that guess,
//! reconciles it against curated reference catalogs, scores it, and keeps a
//! simple in-memory food log with daily progress.
//!
//! ## Architecture
//!
//! - **config**: Environment-driven server configuration
//! - **logging**: `tracing-subscriber` setup (json, pretty, compact)
//! - **`catalog_loader`**: Reference catalog JSON loading and validation
//! - **vision**: Vision-model reply parsing
//! - **services**: Analysis pipeline shared by routes and the CLI
//! - **`food_log`**: Concurrent in-memory food log
//! - **routes**: Axum routers

/// Reference catalog loading from JSON
pub mod catalog_loader;

/// Server configuration
pub mod config;

/// Application constants
pub mod constants;

/// Unified error types
pub mod errors;

/// In-memory food log store
pub mod food_log;

/// Logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared request handler resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Service layer
pub mod services;

/// Vision-model reply parsing
pub mod vision;

pub use mealscan_core::models;
