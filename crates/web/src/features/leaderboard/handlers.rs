use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use storage::{
    RankedStore,
    dto::leaderboard::{SubmitScoreRequest, SubmitScoreResponse},
    models::Entry,
};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/submit",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score submitted", body = SubmitScoreResponse),
        (status = 400, description = "Body is not valid JSON"),
        (status = 415, description = "Missing `application/json` content type"),
        (status = 422, description = "Body is not a JSON object")
    ),
    tag = "leaderboard"
)]
pub async fn submit_score(
    State(store): State<RankedStore>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> WebResult<Response> {
    let Json(body) = payload?;

    let (entry, total_entries) = services::submit_score(&store, SubmitScoreRequest::from(body));
    tracing::info!(
        player = %entry.name,
        score = %entry.score,
        total_entries,
        "Score submitted"
    );

    Ok(Json(SubmitScoreResponse::submitted()).into_response())
}

#[utoipa::path(
    get,
    path = "/leaderboard",
    responses(
        (status = 200, description = "All entries, highest score first", body = Vec<Entry>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(store): State<RankedStore>) -> Json<Vec<Entry>> {
    let entries = services::get_leaderboard(&store);
    tracing::debug!(count = entries.len(), "Serving leaderboard");

    Json(entries)
}
