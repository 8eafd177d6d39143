//! Achievement evaluation: snapshot the user's progress, compute the badge
//! set, persist it with award-once semantics.
//!
//! Runs synchronously inside the triggering request after practice and mock
//! submissions. Re-running is always safe: the qualification set only grows
//! with progress, and each award is an insert-if-absent. A failure partway
//! through leaves a partially awarded state that the next run completes.

use pb_core::{ProgressSnapshot, SubjectTally, earned_badges};
use uuid::Uuid;

use pb_db::repositories::{achievement, mock, progress, user};

use crate::error::ApiError;
use crate::metrics;
use crate::state::ApiState;

/// Recompute and persist the badges `user_id` has earned.
///
/// Every rule is evaluated on every call; storage errors propagate without
/// retry. Holds no locks: concurrent calls for the same user are resolved by
/// the unique constraint on (user, achievement).
pub async fn evaluate(state: &ApiState, user_id: Uuid) -> Result<(), ApiError> {
    let snapshot = read_snapshot(state, user_id).await?;

    for badge in earned_badges(&snapshot) {
        let Some(achievement_id) = state.catalog.id_of(badge) else {
            // Not an error: a badge absent from the catalog is treated as
            // not yet configured.
            tracing::warn!("skipping award of unconfigured badge '{badge}'");
            continue;
        };

        let newly_awarded = achievement::award(&state.pool, user_id, achievement_id).await?;
        if newly_awarded {
            tracing::info!(user_id = %user_id, badge = %badge, "badge awarded");
            metrics::record_badge_awarded(badge.name());
        }
    }

    Ok(())
}

/// Read everything the qualification rules look at.
///
/// The reads are independent queries, not one transaction; evaluation is
/// best-effort over an approximate point in time, which is sound because
/// every counter involved is monotonic.
async fn read_snapshot(state: &ApiState, user_id: Uuid) -> Result<ProgressSnapshot, ApiError> {
    let questions_attempted = progress::count_question_history(&state.pool, user_id).await?;

    let subjects = progress::find_summaries_by_user(&state.pool, user_id)
        .await?
        .into_iter()
        .map(|s| SubjectTally {
            attempted: s.total_attempted,
            correct: s.total_correct,
        })
        .collect();

    let mock_accuracies = mock::find_completed_accuracies(&state.pool, user_id).await?;

    // A missing user row skips premium-only badges rather than failing.
    let premium = user::find_by_id(&state.pool, user_id)
        .await?
        .map(|u| u.premium);

    Ok(ProgressSnapshot {
        questions_attempted,
        subjects,
        mock_accuracies,
        premium,
    })
}
