use crate::RankedStore;
use crate::dto::leaderboard::SubmitScoreRequest;
use crate::models::Entry;

pub struct LeaderboardRepository<'a> {
    store: &'a RankedStore,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(store: &'a RankedStore) -> Self {
        Self { store }
    }

    /// Records a submission and returns the stored entry along with the
    /// store size immediately after it was added.
    pub fn submit(&self, request: SubmitScoreRequest) -> (Entry, usize) {
        let entry = Entry::from(request);
        let total_entries = self.store.add(entry.clone());
        (entry, total_entries)
    }

    /// Current standings, highest score first.
    pub fn leaderboard(&self) -> Vec<Entry> {
        self.store.snapshot_sorted()
    }
}
