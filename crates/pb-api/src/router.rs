use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use tower_governor::GovernorLayer;

use crate::{
    achievements, leaderboard, middleware::rate_limit, mocks, practice, state::ApiState, user,
};

pub fn router() -> Router<ApiState> {
    // Submission endpoints get a tighter limit than the read surfaces.
    let submissions = practice::routes()
        .merge(mocks::routes())
        .layer(GovernorLayer::new(rate_limit::submission_rate_limit()));

    Router::new()
        .route("/health", get(health))
        .merge(leaderboard::routes())
        .merge(achievements::routes())
        .merge(user::routes())
        .merge(submissions)
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
