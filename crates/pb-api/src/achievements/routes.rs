use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use uuid::Uuid;

use pb_db::{models::EarnedAchievement, repositories::achievement};

use crate::{error::ApiError, state::ApiState};

/// Create the achievement routes
pub fn routes() -> Router<ApiState> {
    Router::new().route(
        "/users/{user_id}/achievements",
        get(get_user_achievements),
    )
}

/// List every badge a user holds, oldest award first.
async fn get_user_achievements(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<EarnedAchievement>>, ApiError> {
    let earned = achievement::find_earned_by_user(&state.pool, user_id).await?;
    Ok(Json(earned))
}
