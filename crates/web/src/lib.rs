pub mod config;
pub mod error;
pub mod features;

use std::time::Duration;

use axum::Router;
use storage::RankedStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::WebError;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::leaderboard::handlers::submit_score,
        features::leaderboard::handlers::get_leaderboard,
    ),
    components(
        schemas(
            storage::models::Entry,
            storage::dto::leaderboard::SubmitScoreRequest,
            storage::dto::leaderboard::SubmitScoreResponse,
        )
    ),
    tags(
        (name = "leaderboard", description = "Score submission and standings"),
    )
)]
pub struct ApiDoc;

/// Build the axum Router with all routes and middleware.
/// Used by `main` and available for integration testing.
pub fn build_router(store: RankedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(features::leaderboard::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(store)
}

async fn not_found() -> WebError {
    WebError::NotFound
}
