use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::MockSession;

/// Record a completed mock attempt. Completed sessions are immutable, so this
/// is a plain insert.
pub async fn insert_completed_session<'e, E>(
    executor: E,
    user_id: Uuid,
    accuracy: i32,
) -> Result<MockSession, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO mock_sessions (user_id, completed, accuracy)
            VALUES ($1, TRUE, $2)
            RETURNING id, user_id, completed, accuracy, created_at
        "#,
    )
    .bind(user_id)
    .bind(accuracy)
    .fetch_one(executor)
    .await
}

/// Accuracy of every completed session for a user.
pub async fn find_completed_accuracies<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Vec<i32>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT accuracy
            FROM mock_sessions
            WHERE user_id = $1 AND completed = TRUE
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}
