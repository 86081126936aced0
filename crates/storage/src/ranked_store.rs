use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{Entry, score};

/// Process-wide leaderboard state.
///
/// Entries are kept in submission order and never reordered or removed;
/// ranking is applied to a copy at read time. Cloning the store shares the
/// same underlying sequence.
#[derive(Debug, Clone, Default)]
pub struct RankedStore {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl RankedStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A push either happened or it didn't, so a poisoned lock still guards a
    // consistent vector.
    fn entries(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `entry` unconditionally and returns the number of entries
    /// held right after the push.
    pub fn add(&self, entry: Entry) -> usize {
        let mut entries = self.entries();
        entries.push(entry);
        let total_entries = entries.len();
        tracing::debug!(total_entries, "Entry appended to store");
        total_entries
    }

    /// All entries in submission order.
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries().clone()
    }

    /// All entries ordered by score descending. Equal scores keep submission
    /// order.
    pub fn snapshot_sorted(&self) -> Vec<Entry> {
        let mut ranked = self.snapshot();
        ranked.sort_by(|a, b| score::descending(&a.score, &b.score));
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
