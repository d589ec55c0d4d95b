// ABOUTME: HTTP middleware for the Mealscan server
// ABOUTME: CORS configuration shared by the application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

/// CORS layer configuration
pub mod cors;

pub use cors::setup_cors;
