use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::PerformanceSummary;

/// Total answered-question count for a user, across all subjects.
pub async fn count_question_history<'e, E>(executor: E, user_id: Uuid) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*)
            FROM question_history
            WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
}

/// Record one answered question.
pub async fn insert_question_history<'e, E>(
    executor: E,
    user_id: Uuid,
    subject: &str,
    correct: bool,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO question_history (user_id, subject, correct)
            VALUES ($1, $2, $3)
        "#,
    )
    .bind(user_id)
    .bind(subject)
    .bind(correct)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn find_summaries_by_user<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Vec<PerformanceSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, user_id, subject, total_attempted, total_correct, updated_at
            FROM performance_summaries
            WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Bump the (user, subject) counters by one attempt, creating the row on
/// first contact with the subject.
pub async fn bump_summary<'e, E>(
    executor: E,
    user_id: Uuid,
    subject: &str,
    correct: bool,
) -> Result<PerformanceSummary, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO performance_summaries (user_id, subject, total_attempted, total_correct)
            VALUES ($1, $2, 1, CASE WHEN $3 THEN 1 ELSE 0 END)
            ON CONFLICT (user_id, subject)
            DO UPDATE SET
                total_attempted = performance_summaries.total_attempted + 1,
                total_correct = performance_summaries.total_correct + CASE WHEN $3 THEN 1 ELSE 0 END,
                updated_at = NOW()
            RETURNING id, user_id, subject, total_attempted, total_correct, updated_at
        "#,
    )
    .bind(user_id)
    .bind(subject)
    .bind(correct)
    .fetch_one(executor)
    .await
}
