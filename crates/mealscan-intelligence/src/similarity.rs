// ABOUTME: Levenshtein-based string similarity for fuzzy food name matching
// ABOUTME: Edit distance, normalized similarity, and threshold checks over raw names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

//! String similarity used to decide whether a free-text food name refers to
//! a known catalog entry.
//!
//! Names are compared exactly as given: no case folding, no trimming.
//! Lengths are counted in Unicode scalar values, so a Hangul syllable is one
//! character just like a Latin letter.

/// Default similarity threshold for a fuzzy match
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Edit distance (unit-cost insert, delete, substitute)
#[must_use]
pub fn distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// `1 - distance / max(len)`, in `[0, 1]`
///
/// Two empty strings are identical and score 1.0.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance(a, b) as f64 / longest as f64
}

/// Whether `similarity(a, b) >= threshold`
#[must_use]
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    similarity(a, b) >= threshold
}
