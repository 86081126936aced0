use axum::{
    Router,
    routing::{get, post},
};
use storage::RankedStore;

use super::handlers::{get_leaderboard, submit_score};

pub fn routes() -> Router<RankedStore> {
    Router::new()
        .route("/submit", post(submit_score))
        .route("/leaderboard", get(get_leaderboard))
}
