use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use uuid::Uuid;

use pb_core::{ANONYMOUS_NAME, accuracy_percent};
use pb_db::repositories::{progress, user};

use crate::{error::ApiError, state::ApiState};

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/users/{user_id}/profile", get(get_profile))
}

#[derive(Debug, Serialize)]
struct UserProfile {
    id: Uuid,
    name: String,
    xp: i64,
    level: i32,
    premium: bool,
    /// Rounded percentage over all subjects.
    accuracy: i32,
    total_attempted: i64,
}

/// Public profile: identity plus aggregate progress.
async fn get_profile(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserProfile>, ApiError> {
    let record = user::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let summaries = progress::find_summaries_by_user(&state.pool, user_id).await?;
    let total_correct: i64 = summaries.iter().map(|s| s.total_correct).sum();
    let total_attempted: i64 = summaries.iter().map(|s| s.total_attempted).sum();

    Ok(Json(UserProfile {
        id: record.id,
        name: record
            .display_name
            .unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
        xp: record.xp,
        level: record.level,
        premium: record.premium,
        accuracy: accuracy_percent(total_correct, total_attempted),
        total_attempted,
    }))
}
