use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use pb_core::level_for_xp;
use pb_db::repositories::{mock, user};

use crate::{achievements::evaluator, error::ApiError, state::ApiState};

/// Base XP for finishing a mock test; the score adds up to 50 more.
const MOCK_BASE_XP: i64 = 50;

/// Create the mock-test routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/mocks/{user_id}/complete", post(complete_mock))
}

#[derive(Debug, Deserialize, Validate)]
struct MockCompletion {
    #[validate(range(min = 0, max = 100, message = "accuracy must be between 0 and 100"))]
    accuracy: i32,
}

#[derive(Debug, Serialize)]
struct MockOutcome {
    session_id: Uuid,
    xp: i64,
    level: i32,
}

/// Record a completed mock session, grant XP, then re-evaluate achievements.
/// Completed sessions are immutable; repeat attempts insert new rows.
async fn complete_mock(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<MockCompletion>,
) -> Result<(StatusCode, Json<MockOutcome>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let mut tx = state.pool.begin().await?;

    let delta = MOCK_BASE_XP + i64::from(payload.accuracy) / 2;
    let xp = user::add_xp(&mut *tx, user_id, delta)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let level = level_for_xp(xp);
    user::set_level(&mut *tx, user_id, level).await?;

    let session = mock::insert_completed_session(&mut *tx, user_id, payload.accuracy).await?;

    tx.commit().await?;

    evaluator::evaluate(&state, user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MockOutcome {
            session_id: session.id,
            xp,
            level,
        }),
    ))
}
