//! Progress log: daily weight and workout completion, ordered by date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub date: NaiveDate,
    /// Kilograms.
    pub weight: f64,
    #[serde(alias = "workoutCompleted")]
    pub completed: bool,
}

/// Entries sorted by date, at most one per day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressLog {
    entries: Vec<ProgressEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSummary {
    pub first_weight: f64,
    pub latest_weight: f64,
    pub change: f64,
    pub days_logged: usize,
    pub workouts_completed: usize,
}

impl ProgressLog {
    pub fn from_entries(mut entries: Vec<ProgressEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        // Keep the last entry written for a given day.
        let mut deduped: Vec<ProgressEntry> = Vec::with_capacity(entries.len());
        for e in entries {
            match deduped.last_mut() {
                Some(last) if last.date == e.date => *last = e,
                _ => deduped.push(e),
            }
        }
        Self { entries: deduped }
    }

    /// Insert or replace the entry for `entry.date`.
    pub fn upsert(&mut self, entry: ProgressEntry) {
        match self.entries.binary_search_by_key(&entry.date, |e| e.date) {
            Ok(i) => self.entries[i] = entry,
            Err(i) => self.entries.insert(i, entry),
        }
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> Option<ProgressSummary> {
        let first = self.entries.first()?;
        let latest = self.entries.last()?;
        Some(ProgressSummary {
            first_weight: first.weight,
            latest_weight: latest.weight,
            change: latest.weight - first.weight,
            days_logged: self.entries.len(),
            workouts_completed: self.entries.iter().filter(|e| e.completed).count(),
        })
    }
}
