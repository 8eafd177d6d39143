use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::{Achievement, EarnedAchievement};

/// The full badge catalog. Read once at startup and held in memory.
pub async fn find_all<'e, E>(executor: E) -> Result<Vec<Achievement>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, description
            FROM achievements
            ORDER BY name
        "#,
    )
    .fetch_all(executor)
    .await
}

/// Insert-if-absent award keyed on (user, achievement).
///
/// The unique constraint plus conflict-ignore is the only concurrency
/// mechanism on the award path: concurrent evaluations for the same user
/// cannot create duplicate rows. Returns whether a row was actually inserted.
pub async fn award<'e, E>(
    executor: E,
    user_id: Uuid,
    achievement_id: Uuid,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO user_achievements (user_id, achievement_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, achievement_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(achievement_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Every badge a user holds, joined with the catalog for display.
pub async fn find_earned_by_user<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Vec<EarnedAchievement>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT a.name, a.description, ua.awarded_at
            FROM user_achievements ua
            JOIN achievements a ON a.id = ua.achievement_id
            WHERE ua.user_id = $1
            ORDER BY ua.awarded_at
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}
