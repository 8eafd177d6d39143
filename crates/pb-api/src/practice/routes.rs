use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pb_core::level_for_xp;
use pb_db::repositories::{progress, user};

use crate::{
    achievements::evaluator, error::ApiError, state::ApiState, validation::validate_subject,
};

/// XP granted for answering a question, right or wrong.
const ANSWER_XP: i64 = 10;
/// Extra XP for a correct answer.
const CORRECT_BONUS_XP: i64 = 5;

/// Create the practice routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/practice/{user_id}/answer", post(submit_answer))
}

#[derive(Debug, Deserialize)]
struct AnswerSubmission {
    subject: String,
    correct: bool,
}

#[derive(Debug, Serialize)]
struct AnswerOutcome {
    xp: i64,
    level: i32,
    subject_attempted: i64,
    subject_correct: i64,
}

/// Record one answered question: history row, subject counters, XP and level,
/// then re-evaluate achievements.
async fn submit_answer(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AnswerSubmission>,
) -> Result<(StatusCode, Json<AnswerOutcome>), ApiError> {
    validate_subject(&payload.subject)?;

    // Single transaction for atomicity
    let mut tx = state.pool.begin().await?;

    // XP update doubles as the existence check; a 404 here avoids hitting
    // the history table's foreign key.
    let delta = if payload.correct {
        ANSWER_XP + CORRECT_BONUS_XP
    } else {
        ANSWER_XP
    };
    let xp = user::add_xp(&mut *tx, user_id, delta)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let level = level_for_xp(xp);
    user::set_level(&mut *tx, user_id, level).await?;

    progress::insert_question_history(&mut *tx, user_id, &payload.subject, payload.correct)
        .await?;

    let summary = progress::bump_summary(&mut *tx, user_id, &payload.subject, payload.correct)
        .await?;

    tx.commit().await?;

    // Evaluate against committed state so the awards see this submission.
    evaluator::evaluate(&state, user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(AnswerOutcome {
            xp,
            level,
            subject_attempted: summary.total_attempted,
            subject_correct: summary.total_correct,
        }),
    ))
}
