// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and catalog-aware readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Health check routes for service monitoring

use crate::resources::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
            .with_state(resources)
    }

    async fn health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Ready once a catalog is loaded; an empty catalog still serves but degrades
    async fn ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let catalog = resources.analysis.catalog();
        let status = if catalog.is_empty() {
            "degraded"
        } else {
            "ready"
        };
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": status,
                "catalog": {
                    "dishes": catalog.dishes().len(),
                    "ingredients": catalog.ingredients().len()
                },
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
    }
}
