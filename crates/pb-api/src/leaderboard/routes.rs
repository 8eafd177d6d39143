use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde_json::json;
use uuid::Uuid;

use pb_core::{LeaderboardEntry, StudentStanding, rank_entries, rank_of};
use pb_db::{models::StudentStandingRow, repositories::user};

use crate::{error::ApiError, state::ApiState};

/// Create the leaderboard routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/leaderboard", get(get_leaderboard))
        .route("/leaderboard/{user_id}/rank", get(get_user_rank))
}

fn into_standing(row: StudentStandingRow) -> StudentStanding {
    StudentStanding {
        id: row.id,
        display_name: row.display_name,
        xp: row.xp,
        level: row.level,
        total_correct: row.total_correct,
        total_attempted: row.total_attempted,
    }
}

/// Top of the board: students by XP descending, capped, with derived
/// accuracy and 1-based ranks.
async fn get_leaderboard(
    State(state): State<ApiState>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let standings = user::find_student_standings(&state.pool)
        .await?
        .into_iter()
        .map(into_standing)
        .collect();

    Ok(Json(rank_entries(standings)))
}

/// 1-based rank of a user within the full student population; 0 for anyone
/// outside it (admins, unknown ids).
///
/// This re-reads the population rather than reusing the board read, so the
/// two endpoints are only as consistent as two queries issued close
/// together.
async fn get_user_rank(
    State(state): State<ApiState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let standings = user::find_student_standings(&state.pool)
        .await?
        .into_iter()
        .map(into_standing)
        .collect();

    let rank = rank_of(standings, user_id);

    Ok(Json(json!({ "user_id": user_id, "rank": rank })))
}
