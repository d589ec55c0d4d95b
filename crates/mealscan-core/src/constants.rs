// ABOUTME: Application-wide constants for service identity, env var names, and defaults
// ABOUTME: Keeps magic numbers for nutrition math and configuration in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

/// Service names used in structured logging
pub mod service_names {
    /// HTTP API server
    pub const MEALSCAN_SERVER: &str = "mealscan-server";
    /// Command-line tool
    pub const MEALSCAN_CLI: &str = "mealscan-cli";
}

/// Nutrition math constants
pub mod nutrition {
    /// Densities are expressed per this many grams or milliliters
    pub const DENSITY_BASIS: f64 = 100.0;
    /// Energy per gram of protein (kcal)
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Energy per gram of carbohydrate (kcal)
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Energy per gram of fat (kcal)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Environment variable names read by the server configuration
pub mod env_config {
    /// Bind host
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Path to the dish catalog JSON file
    pub const DISH_CATALOG_PATH: &str = "DISH_CATALOG_PATH";
    /// Path to the raw ingredient catalog JSON file
    pub const INGREDIENT_CATALOG_PATH: &str = "INGREDIENT_CATALOG_PATH";
    /// Daily calorie goal (kcal)
    pub const DAILY_CALORIE_GOAL: &str = "DAILY_CALORIE_GOAL";
    /// Daily protein goal (g)
    pub const DAILY_PROTEIN_GOAL: &str = "DAILY_PROTEIN_GOAL";
    /// Daily fat goal (g)
    pub const DAILY_FAT_GOAL: &str = "DAILY_FAT_GOAL";
    /// Daily carbohydrate goal (g)
    pub const DAILY_CARBS_GOAL: &str = "DAILY_CARBS_GOAL";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
}

/// Default values used when configuration is absent
pub mod defaults {
    /// Default bind host
    pub const HTTP_HOST: &str = "127.0.0.1";
    /// Default bind port
    pub const HTTP_PORT: u16 = 8081;
    /// Default daily calorie goal (kcal)
    pub const DAILY_CALORIES: f64 = 2000.0;
    /// Default daily protein goal (g)
    pub const DAILY_PROTEIN_G: f64 = 60.0;
    /// Default daily fat goal (g)
    pub const DAILY_FAT_G: f64 = 65.0;
    /// Default daily carbohydrate goal (g)
    pub const DAILY_CARBS_G: f64 = 300.0;
    /// Default request timeout (seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Maximum accepted request body (bytes)
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
}
