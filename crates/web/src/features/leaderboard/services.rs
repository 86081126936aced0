use storage::{
    RankedStore,
    dto::leaderboard::SubmitScoreRequest,
    models::Entry,
    repository::leaderboard::LeaderboardRepository,
};

/// Record a score submission, returning the entry and the store size after it
pub fn submit_score(store: &RankedStore, request: SubmitScoreRequest) -> (Entry, usize) {
    let repo = LeaderboardRepository::new(store);
    repo.submit(request)
}

/// Get all entries ranked by score
pub fn get_leaderboard(store: &RankedStore) -> Vec<Entry> {
    let repo = LeaderboardRepository::new(store);
    repo.leaderboard()
}
