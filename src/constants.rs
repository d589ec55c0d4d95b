// ABOUTME: Re-export of application constants from mealscan-core
// ABOUTME: Service names, nutrition factors, environment variable names, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

pub use mealscan_core::constants::{defaults, env_config, nutrition, service_names};
