// ABOUTME: Re-exports command modules for mealscan-cli
// ABOUTME: Provides analysis, scoring, and catalog matching commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

mod analyze;
mod catalog;
mod score;

pub use analyze::analyze;
pub use catalog::{lookup, similarity};
pub use score::score;
