// ABOUTME: Food analysis and food log route handlers
// ABOUTME: Analyze vision replies, score foods, log meals, and summarize daily progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Food routes
//!
//! Thin handlers over `FoodAnalysisService`, `FoodLogStore` and the daily
//! progress summary. All errors surface as `AppError` JSON bodies.

use crate::{errors::AppError, resources::ServerResources, services::AnalysisOutcome};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use mealscan_core::models::{FoodLogEntry, HealthScore, MealType, NutritionValues};
use mealscan_intelligence::{aggregation, summarize_day};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Request body for scoring a food
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreRequest {
    /// Dish name
    pub food_name: String,
    /// Finalized nutrition totals
    pub nutrition: NutritionValues,
}

/// Health score response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthScoreResponse {
    /// Score in `[1, 10]`
    pub score: HealthScore,
}

/// Request body for logging a meal
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodLogRequest {
    /// Meal slot (breakfast, lunch, dinner, snack); anything else is `other`
    #[serde(default)]
    pub meal_type: Option<String>,
    /// Dish name
    pub food_name: String,
    /// Total nutrition of the meal
    pub nutrition: NutritionValues,
    /// Precomputed score; computed from name and nutrition when absent
    #[serde(default)]
    pub health_score: Option<HealthScore>,
    /// When the meal was eaten; defaults to now
    #[serde(default)]
    pub logged_at: Option<DateTime<Utc>>,
}

/// Query parameters for the daily summary
#[derive(Debug, Deserialize)]
pub struct DailySummaryQuery {
    /// Day in `YYYY-MM-DD`; defaults to today (UTC)
    pub date: Option<String>,
}

/// Food routes handler
pub struct FoodRoutes;

impl FoodRoutes {
    /// Create all food routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/food/analyze", post(Self::analyze))
            .route("/api/food/health-score", post(Self::health_score))
            .route("/api/food/logs", post(Self::create_log))
            .route("/api/food/logs/daily", get(Self::daily_summary))
            .route("/api/food/logs/:entry_id", delete(Self::delete_log))
            .with_state(resources)
    }

    /// Reconcile a raw vision-model reply
    async fn analyze(
        State(resources): State<Arc<ServerResources>>,
        body: String,
    ) -> Result<Response, AppError> {
        match resources.analysis.analyze(&body)? {
            AnalysisOutcome::Analyzed(analysis) => Ok((StatusCode::OK, Json(analysis)).into_response()),
            AnalysisOutcome::NotFood { description } => Ok((
                StatusCode::OK,
                Json(serde_json::json!({
                    "isFood": false,
                    "description": description
                })),
            )
                .into_response()),
        }
    }

    /// Score a food by name and totals
    async fn health_score(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<HealthScoreRequest>,
    ) -> Result<Response, AppError> {
        if !request.nutrition.is_valid() {
            return Err(AppError::out_of_range(
                "nutrition values must be non-negative numbers",
            ));
        }

        let score = resources
            .analysis
            .score(&request.food_name, &request.nutrition);
        Ok((StatusCode::OK, Json(HealthScoreResponse { score })).into_response())
    }

    /// Log a meal
    async fn create_log(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateFoodLogRequest>,
    ) -> Result<Response, AppError> {
        let food_name = request.food_name.trim();
        if food_name.is_empty() {
            return Err(AppError::missing_field("foodName"));
        }
        if !request.nutrition.is_valid() {
            return Err(AppError::out_of_range(
                "nutrition values must be non-negative numbers",
            ));
        }

        let nutrition = aggregation::round(&request.nutrition);
        let health_score = request
            .health_score
            .unwrap_or_else(|| resources.analysis.score(food_name, &nutrition));

        let entry = FoodLogEntry {
            id: Uuid::new_v4(),
            logged_at: request.logged_at.unwrap_or_else(Utc::now),
            meal_type: request
                .meal_type
                .as_deref()
                .map_or(MealType::Other, MealType::from_str_lossy),
            food_name: food_name.to_owned(),
            nutrition,
            health_score,
        };

        info!(
            entry_id = %entry.id,
            food_name = %entry.food_name,
            meal_type = ?entry.meal_type,
            "Food logged"
        );
        resources.food_log.add(entry.clone());

        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    /// Progress against the daily goals
    async fn daily_summary(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<DailySummaryQuery>,
    ) -> Result<Response, AppError> {
        let date = match query.date.as_deref() {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                AppError::invalid_input(format!("date must be YYYY-MM-DD, got '{raw}'"))
                    .with_source(e)
            })?,
            None => Utc::now().date_naive(),
        };

        let entries = resources.food_log.entries_for(date);
        let summary = summarize_day(date, &entries, &resources.config.daily_goals);
        Ok((StatusCode::OK, Json(summary)).into_response())
    }

    /// Delete a logged meal
    async fn delete_log(
        State(resources): State<Arc<ServerResources>>,
        Path(entry_id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = Uuid::parse_str(&entry_id).map_err(|e| {
            AppError::invalid_input(format!("invalid entry id '{entry_id}'")).with_source(e)
        })?;

        resources
            .food_log
            .remove(id)
            .ok_or_else(|| AppError::not_found(format!("Food log entry {id}")))?;

        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
