// ABOUTME: Name matching commands for mealscan-cli
// ABOUTME: Shows edit-distance similarity and catalog lookup resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use mealscan::errors::AppResult;
use mealscan::services::FoodAnalysisService;
use mealscan_intelligence::{find_match, similarity as sim};
use serde_json::json;

/// Print distance, similarity and the match decision for two names
pub fn similarity(a: &str, b: &str, threshold: f64) {
    println!("Distance:   {}", sim::distance(a, b));
    println!("Similarity: {:.3}", sim::similarity(a, b));
    println!(
        "Match:      {} (threshold {threshold})",
        if sim::is_similar(a, b, threshold) { "yes" } else { "no" }
    );
}

/// Print the catalog entry `name` resolves to, if any
pub fn lookup(service: &FoodAnalysisService, name: &str) -> AppResult<()> {
    let threshold = service.config().reconciliation.fuzzy_threshold;
    match find_match(name, service.catalog(), threshold) {
        Some(found) => {
            let report = json!({
                "kind": found.kind,
                "method": found.method,
                "entry": found.entry,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        None => println!("No catalog entry matches '{name}'"),
    }
    Ok(())
}
