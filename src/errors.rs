// ABOUTME: Re-export of the unified error types from mealscan-core
// ABOUTME: Keeps crate::errors paths stable for route handlers and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! Unified error handling, defined in `mealscan-core`

pub use mealscan_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
