// ABOUTME: HTTP server binary for meal analysis and food logging
// ABOUTME: Loads configuration and catalogs, then serves the axum router until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! # Mealscan API Server Binary
//!
//! Starts the HTTP API: logging, configuration, reference catalogs, then
//! `axum::serve` with graceful shutdown on Ctrl-C.

use anyhow::{Context, Result};
use clap::Parser;
use mealscan::{
    catalog_loader,
    config::{IntelligenceConfig, ServerConfig},
    logging,
    resources::ServerResources,
    routes,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mealscan-server")]
#[command(about = "Mealscan API - meal photo nutrition reconciliation and food logging")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override dish catalog path
    #[arg(long)]
    dish_catalog: Option<PathBuf>,

    /// Override ingredient catalog path
    #[arg(long)]
    ingredient_catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if args.dish_catalog.is_some() {
        config.catalogs.dishes = args.dish_catalog;
    }
    if args.ingredient_catalog.is_some() {
        config.catalogs.ingredients = args.ingredient_catalog;
    }
    config.validate()?;

    info!("Starting Mealscan API");
    info!("{}", config.summary());

    let catalog = catalog_loader::load_catalog(&config.catalogs)
        .context("Failed to load reference catalogs")?;
    let intelligence = IntelligenceConfig::global().clone();
    info!(
        fuzzy_threshold = intelligence.reconciliation.fuzzy_threshold,
        divergence_threshold = intelligence.reconciliation.divergence_threshold,
        "Reconciliation engine configured"
    );

    let bind_address = config.bind_address();
    let resources = Arc::new(ServerResources::new(config, catalog, intelligence));
    let app = routes::app_router(&resources);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!("Listening on http://{bind_address}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
