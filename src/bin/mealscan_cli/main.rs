// ABOUTME: Mealscan CLI - offline meal analysis, health scoring, and name matching
// ABOUTME: Runs the reconciliation engine against local catalogs without the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors
//!
//! Usage:
//! ```bash
//! # Reconcile a saved vision-model reply
//! mealscan-cli analyze --input reply.json
//!
//! # Score a food
//! mealscan-cli score --name "닭가슴살 샐러드" --calories 320 --protein 35 --fat 9 --carbs 18
//!
//! # Compare two names
//! mealscan-cli similarity 김치찌개 김치찌게
//!
//! # Show which catalog entry a name resolves to
//! mealscan-cli lookup 된장찌게 --dish-catalog ./dishes.json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use mealscan::{
    catalog_loader,
    config::{CatalogPaths, IntelligenceConfig},
    errors::AppResult,
    logging::LoggingConfig,
    services::FoodAnalysisService,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "mealscan-cli",
    about = "Mealscan nutrition reconciliation CLI",
    long_about = "Offline access to the Mealscan reconciliation engine, health score, and catalog matching."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Dish catalog JSON (defaults to the built-in sample)
    #[arg(long, global = true)]
    dish_catalog: Option<PathBuf>,

    /// Ingredient catalog JSON (defaults to the built-in sample)
    #[arg(long, global = true)]
    ingredient_catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Reconcile a vision-model reply and print the corrected estimate
    Analyze {
        /// Reply file, or `-` for stdin
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Compute the health score for a food
    Score {
        /// Food name
        #[arg(long)]
        name: String,

        /// Total calories (kcal)
        #[arg(long)]
        calories: f64,

        /// Total protein (g)
        #[arg(long, default_value = "0")]
        protein: f64,

        /// Total fat (g)
        #[arg(long, default_value = "0")]
        fat: f64,

        /// Total carbohydrates (g)
        #[arg(long, default_value = "0")]
        carbs: f64,

        /// Print every adjustment instead of just the score
        #[arg(long)]
        breakdown: bool,
    },

    /// Edit distance and similarity between two names
    Similarity {
        /// First name
        a: String,
        /// Second name
        b: String,
    },

    /// Resolve a name against the catalog lookup pipeline
    Lookup {
        /// Dish or ingredient name
        name: String,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = IntelligenceConfig::load()
        .map_err(|e| mealscan::errors::AppError::config(e.to_string()))?;

    let catalog = catalog_loader::load_catalog(&CatalogPaths {
        dishes: cli.dish_catalog,
        ingredients: cli.ingredient_catalog,
    })?;
    let service = FoodAnalysisService::new(Arc::new(catalog), Arc::new(config));

    match cli.command {
        Command::Analyze { input } => commands::analyze(&service, &input)?,
        Command::Score {
            name,
            calories,
            protein,
            fat,
            carbs,
            breakdown,
        } => commands::score(&service, &name, [calories, protein, fat, carbs], breakdown)?,
        Command::Similarity { a, b } => {
            commands::similarity(&a, &b, service.config().reconciliation.fuzzy_threshold);
        }
        Command::Lookup { name } => commands::lookup(&service, &name)?,
    }

    Ok(())
}
