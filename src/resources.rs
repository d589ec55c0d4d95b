// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Bundles configuration, the analysis service, and the food log store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use crate::config::ServerConfig;
use crate::food_log::FoodLogStore;
use crate::services::FoodAnalysisService;
use mealscan_intelligence::{IntelligenceConfig, ReferenceCatalog};
use std::sync::Arc;

/// Resources shared across requests
///
/// Everything here is either immutable or internally synchronized, so the
/// struct is wrapped in one `Arc` and cloned into handlers freely.
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Analysis pipeline over the reference catalog
    pub analysis: FoodAnalysisService,
    /// Logged meals
    pub food_log: FoodLogStore,
}

impl ServerResources {
    /// Create resources with an empty food log
    #[must_use]
    pub fn new(
        config: ServerConfig,
        catalog: ReferenceCatalog,
        intelligence: IntelligenceConfig,
    ) -> Self {
        Self {
            config: Arc::new(config),
            analysis: FoodAnalysisService::new(Arc::new(catalog), Arc::new(intelligence)),
            food_log: FoodLogStore::new(),
        }
    }
}
