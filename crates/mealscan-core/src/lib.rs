// ABOUTME: Core types and constants for the Mealscan nutrition platform
// ABOUTME: Foundation crate with error handling, the nutrition data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

#![deny(unsafe_code)]

//! # Mealscan Core
//!
//! Foundation crate providing shared types and constants for the Mealscan
//! meal analysis platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP error bodies
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Nutrition values, ingredient estimates, catalog entries, and food log entries

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (nutrition values, estimates, catalog entries, log entries)
pub mod models;
