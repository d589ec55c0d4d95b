// ABOUTME: Reference catalog lookup for free-text dish and ingredient names
// ABOUTME: Prioritized exact-then-fuzzy matching across the dish and ingredient tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Reference Catalog Lookup
//!
//! Looks a name up against two read-only tables. The search is a fixed
//! pipeline of strategies, first hit wins:
//!
//! 1. exact match in the dish table
//! 2. exact match in the ingredient table
//! 3. fuzzy match in the dish table (first entry in table order)
//! 4. fuzzy match in the ingredient table (first entry in table order)
//!
//! Exact identity beats fuzzy identity, and dish entries beat ingredient
//! entries because they carry curated whole-meal nutrition.

use crate::similarity::is_similar;
use mealscan_core::models::{CatalogEntry, CatalogKind};
use serde::Serialize;

/// The two read-only reference tables
///
/// Loaded once at startup and shared across requests; nothing in the engine
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    dishes: Vec<CatalogEntry>,
    ingredients: Vec<CatalogEntry>,
}

impl ReferenceCatalog {
    /// Create a catalog from dish and ingredient tables
    #[must_use]
    pub fn new(dishes: Vec<CatalogEntry>, ingredients: Vec<CatalogEntry>) -> Self {
        Self {
            dishes,
            ingredients,
        }
    }

    /// Catalog with no entries; every lookup misses
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Completed-dish table in iteration order
    #[must_use]
    pub fn dishes(&self) -> &[CatalogEntry] {
        &self.dishes
    }

    /// Raw-ingredient table in iteration order
    #[must_use]
    pub fn ingredients(&self) -> &[CatalogEntry] {
        &self.ingredients
    }

    /// Total number of entries across both tables
    #[must_use]
    pub fn len(&self) -> usize {
        self.dishes.len() + self.ingredients.len()
    }

    /// Whether both tables are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty() && self.ingredients.is_empty()
    }
}

/// How a name matched a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    /// Ordinal string equality
    Exact,
    /// Similarity at or above the threshold
    Fuzzy,
}

/// A successful lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogMatch<'a> {
    /// Table the entry came from
    pub kind: CatalogKind,
    /// Whether the match was exact or fuzzy
    pub method: MatchMethod,
    /// The matched entry
    pub entry: &'a CatalogEntry,
}

/// One stage of the lookup pipeline
type LookupStrategy = for<'a> fn(&str, &'a ReferenceCatalog, f64) -> Option<CatalogMatch<'a>>;

const LOOKUP_PIPELINE: [LookupStrategy; 4] = [
    exact_dish_match,
    exact_ingredient_match,
    fuzzy_dish_match,
    fuzzy_ingredient_match,
];

/// First entry whose name equals `name` exactly
#[must_use]
pub fn find_exact<'a>(name: &str, entries: &'a [CatalogEntry]) -> Option<&'a CatalogEntry> {
    entries.iter().find(|entry| entry.name == name)
}

/// First dish entry whose name equals `name` exactly
#[must_use]
pub fn find_exact_dish<'a>(name: &str, dishes: &'a [CatalogEntry]) -> Option<&'a CatalogEntry> {
    find_exact(name, dishes)
}

/// First entry (in table order) similar to `name` at `threshold`
#[must_use]
pub fn find_fuzzy<'a>(
    name: &str,
    entries: &'a [CatalogEntry],
    threshold: f64,
) -> Option<&'a CatalogEntry> {
    entries
        .iter()
        .find(|entry| is_similar(name, &entry.name, threshold))
}

/// Run the full lookup pipeline for `name`
#[must_use]
pub fn find_match<'a>(
    name: &str,
    catalog: &'a ReferenceCatalog,
    threshold: f64,
) -> Option<CatalogMatch<'a>> {
    LOOKUP_PIPELINE
        .iter()
        .find_map(|strategy| strategy(name, catalog, threshold))
}

fn exact_dish_match<'a>(
    name: &str,
    catalog: &'a ReferenceCatalog,
    _threshold: f64,
) -> Option<CatalogMatch<'a>> {
    find_exact(name, catalog.dishes()).map(|entry| CatalogMatch {
        kind: CatalogKind::Dish,
        method: MatchMethod::Exact,
        entry,
    })
}

fn exact_ingredient_match<'a>(
    name: &str,
    catalog: &'a ReferenceCatalog,
    _threshold: f64,
) -> Option<CatalogMatch<'a>> {
    find_exact(name, catalog.ingredients()).map(|entry| CatalogMatch {
        kind: CatalogKind::Ingredient,
        method: MatchMethod::Exact,
        entry,
    })
}

fn fuzzy_dish_match<'a>(
    name: &str,
    catalog: &'a ReferenceCatalog,
    threshold: f64,
) -> Option<CatalogMatch<'a>> {
    find_fuzzy(name, catalog.dishes(), threshold).map(|entry| CatalogMatch {
        kind: CatalogKind::Dish,
        method: MatchMethod::Fuzzy,
        entry,
    })
}

fn fuzzy_ingredient_match<'a>(
    name: &str,
    catalog: &'a ReferenceCatalog,
    threshold: f64,
) -> Option<CatalogMatch<'a>> {
    find_fuzzy(name, catalog.ingredients(), threshold).map(|entry| CatalogMatch {
        kind: CatalogKind::Ingredient,
        method: MatchMethod::Fuzzy,
        entry,
    })
}
