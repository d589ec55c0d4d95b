// ABOUTME: Analyze command for mealscan-cli
// ABOUTME: Reconciles a saved vision-model reply read from a file or stdin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use mealscan::errors::AppResult;
use mealscan::services::{AnalysisOutcome, FoodAnalysisService};
use serde_json::json;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reconcile the reply at `input` (`-` reads stdin) and print the result as JSON
pub fn analyze(service: &FoodAnalysisService, input: &Path) -> AppResult<()> {
    let raw = read_input(input)?;
    debug!(bytes = raw.len(), "Read vision reply");

    let rendered = match service.analyze(&raw)? {
        AnalysisOutcome::NotFood { description } => serde_json::to_string_pretty(&json!({
            "isFood": false,
            "description": description,
        }))?,
        AnalysisOutcome::Analyzed(analysis) => serde_json::to_string_pretty(&analysis)?,
    };

    println!("{rendered}");
    Ok(())
}

fn read_input(input: &Path) -> AppResult<String> {
    if input.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
