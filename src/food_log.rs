// ABOUTME: In-memory concurrent food log keyed by calendar day
// ABOUTME: Adds, lists, and removes logged meals for the daily progress summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscan Contributors

use chrono::NaiveDate;
use dashmap::DashMap;
use mealscan_core::models::FoodLogEntry;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Concurrent food log store
///
/// Entries are bucketed by UTC day so a daily summary touches one shard.
/// A secondary id index makes deletes independent of the entry's day.
#[derive(Debug, Clone, Default)]
pub struct FoodLogStore {
    days: Arc<DashMap<NaiveDate, Vec<FoodLogEntry>>>,
    index: Arc<DashMap<Uuid, NaiveDate>>,
}

impl FoodLogStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry under the day it was logged
    ///
    /// The entry lands in its day bucket before its id is indexed, so any id
    /// `remove` can see always resolves to a stored entry.
    pub fn add(&self, entry: FoodLogEntry) {
        let date = entry.date();
        let id = entry.id;
        debug!(entry_id = %id, %date, "Adding food log entry");
        self.days.entry(date).or_default().push(entry);
        self.index.insert(id, date);
    }

    /// Entries logged on `date`, oldest first
    #[must_use]
    pub fn entries_for(&self, date: NaiveDate) -> Vec<FoodLogEntry> {
        let mut entries = self
            .days
            .get(&date)
            .map(|bucket| bucket.value().clone())
            .unwrap_or_default();
        entries.sort_by_key(|entry| entry.logged_at);
        entries
    }

    /// Remove an entry by id, returning it if it existed
    pub fn remove(&self, id: Uuid) -> Option<FoodLogEntry> {
        let (_, date) = self.index.remove(&id)?;
        let mut bucket = self.days.get_mut(&date)?;
        let position = bucket.iter().position(|entry| entry.id == id)?;
        let removed = bucket.remove(position);
        let now_empty = bucket.is_empty();
        drop(bucket);

        if now_empty {
            self.days.remove_if(&date, |_, entries| entries.is_empty());
        }
        debug!(entry_id = %id, %date, "Removed food log entry");
        Some(removed)
    }

    /// Total number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the store holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
