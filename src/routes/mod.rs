// ABOUTME: Route module organization for Mealscan HTTP endpoints
// ABOUTME: Merges domain routers and applies tracing, CORS, timeout, and body-limit layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Route module for the Mealscan server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Food analysis and food log routes
pub mod food;
/// Health check and readiness routes
pub mod health;

pub use food::FoodRoutes;
pub use health::HealthRoutes;

use crate::constants::defaults;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Every route without middleware, for tests driving handlers directly
pub fn api_router(resources: &Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(resources)))
        .merge(FoodRoutes::routes(Arc::clone(resources)))
}

/// Full application router with middleware layers
pub fn app_router(resources: &Arc<ServerResources>) -> Router {
    let config = &resources.config;
    api_router(resources)
        .layer(RequestBodyLimitLayer::new(defaults::MAX_REQUEST_BODY_BYTES))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(setup_cors(config))
        .layer(TraceLayer::new_for_http())
}
