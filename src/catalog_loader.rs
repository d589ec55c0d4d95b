// ABOUTME: Loads dish and ingredient reference catalogs from JSON files or built-in samples
// ABOUTME: Validates entries and degrades to an empty table when a configured file is missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Reference catalog loading
//!
//! Catalog files are JSON arrays of
//! `{ "name", "unitWeight" | "referenceAmount", "nutrition": { calories, protein, fat, carbs } }`.
//! A configured path that does not exist yields an empty table and a warning,
//! so the engine falls back to trusting the vision model. Any other problem
//! (unreadable file, bad JSON, invalid entry) is an error.

use crate::config::CatalogPaths;
use crate::errors::{AppError, AppResult};
use mealscan_core::models::{CatalogEntry, CatalogKind};
use mealscan_intelligence::ReferenceCatalog;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

const BUILTIN_DISHES: &str = include_str!("../data/dish_catalog.json");
const BUILTIN_INGREDIENTS: &str = include_str!("../data/ingredient_catalog.json");

/// Parse and validate one catalog table from JSON text
///
/// # Errors
///
/// Returns `INVALID_FORMAT` if the JSON is malformed or an entry is invalid
pub fn parse_catalog(json: &str, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    for (index, entry) in entries.iter().enumerate() {
        validate_entry(entry).map_err(|reason| {
            AppError::invalid_format(format!("{kind:?} catalog entry {index} is invalid: {reason}"))
                .with_resource_id(entry.name.clone())
        })?;
    }
    Ok(entries)
}

fn validate_entry(entry: &CatalogEntry) -> Result<(), &'static str> {
    if entry.name.trim().is_empty() {
        return Err("name must not be empty");
    }
    if !entry.reference_amount.is_finite() || entry.reference_amount <= 0.0 {
        return Err("unitWeight must be a positive number");
    }
    if !entry.nutrition.is_valid() {
        return Err("nutrition values must be non-negative numbers");
    }
    Ok(())
}

/// Load one catalog table from a JSON file
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed
pub fn load_catalog_file(path: &Path, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                kind = ?kind,
                "Catalog file not found, continuing with an empty table"
            );
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(AppError::from(e).with_resource_id(path.display().to_string()));
        }
    };

    let entries = parse_catalog(&json, kind)?;
    info!(
        path = %path.display(),
        kind = ?kind,
        entries = entries.len(),
        "Loaded catalog file"
    );
    Ok(entries)
}

/// Built-in Korean sample catalog
///
/// # Errors
///
/// Returns an error only if the embedded data is malformed
pub fn builtin_catalog() -> AppResult<ReferenceCatalog> {
    Ok(ReferenceCatalog::new(
        parse_catalog(BUILTIN_DISHES, CatalogKind::Dish)?,
        parse_catalog(BUILTIN_INGREDIENTS, CatalogKind::Ingredient)?,
    ))
}

/// Load both tables, using the built-in sample for any path that is unset
///
/// # Errors
///
/// Returns an error if a configured file cannot be read or contains invalid data
pub fn load_catalog(paths: &CatalogPaths) -> AppResult<ReferenceCatalog> {
    let dishes = match &paths.dishes {
        Some(path) => load_catalog_file(path, CatalogKind::Dish)?,
        None => parse_catalog(BUILTIN_DISHES, CatalogKind::Dish)?,
    };
    let ingredients = match &paths.ingredients {
        Some(path) => load_catalog_file(path, CatalogKind::Ingredient)?,
        None => parse_catalog(BUILTIN_INGREDIENTS, CatalogKind::Ingredient)?,
    };

    info!(
        dishes = dishes.len(),
        ingredients = ingredients.len(),
        "Reference catalog ready"
    );
    Ok(ReferenceCatalog::new(dishes, ingredients))
}
