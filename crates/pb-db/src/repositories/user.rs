use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{StudentStandingRow, UserRecord};

pub async fn find_by_id<'e, E>(executor: E, user_id: Uuid) -> Result<Option<UserRecord>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, display_name, xp, level, premium, role, created_at, updated_at
            FROM users
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Add XP and return the new total, or `None` when the user does not exist.
pub async fn add_xp<'e, E>(executor: E, user_id: Uuid, delta: i64) -> Result<Option<i64>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            UPDATE users
            SET xp = xp + $2, updated_at = NOW()
            WHERE id = $1
            RETURNING xp
        "#,
    )
    .bind(user_id)
    .bind(delta)
    .fetch_optional(executor)
    .await
}

pub async fn set_level<'e, E>(executor: E, user_id: Uuid, level: i32) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE users
            SET level = $2, updated_at = NOW()
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .bind(level)
    .execute(executor)
    .await?;
    Ok(())
}

/// All STUDENT accounts with their performance sums, XP descending.
///
/// Tie order between equal-XP students is whatever the storage returns; the
/// ranking layer preserves it. Used both for the capped board and for full
/// rank lookups, so no LIMIT here.
pub async fn find_student_standings<'e, E>(
    executor: E,
) -> Result<Vec<StudentStandingRow>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT u.id,
                   u.display_name,
                   u.xp,
                   u.level,
                   COALESCE(SUM(ps.total_correct), 0)::BIGINT AS total_correct,
                   COALESCE(SUM(ps.total_attempted), 0)::BIGINT AS total_attempted
            FROM users u
            LEFT JOIN performance_summaries ps ON ps.user_id = u.id
            WHERE u.role = 'STUDENT'
            GROUP BY u.id
            ORDER BY u.xp DESC
        "#,
    )
    .fetch_all(executor)
    .await
}
