use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role, mapped to the `user_role` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role")]
pub enum UserRole {
    #[sqlx(rename = "STUDENT")]
    #[serde(rename = "STUDENT")]
    Student,
    #[sqlx(rename = "ADMIN")]
    #[serde(rename = "ADMIN")]
    Admin,
}

/// User account with gamification counters.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    /// Unique user identifier
    pub id: Uuid,
    /// Public display name; absent until the user sets one
    pub display_name: Option<String>,
    /// Experience points, non-negative and monotonic outside admin resets
    pub xp: i64,
    /// Level derived from XP, stored for cheap display reads
    pub level: i32,
    /// Premium subscription flag
    pub premium: bool,
    /// STUDENT or ADMIN; only students appear on the leaderboard
    pub role: UserRole,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Cumulative per-(user, subject) counters.
/// Invariant enforced by the schema: `total_attempted >= total_correct`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PerformanceSummary {
    /// Unique identifier
    pub id: Uuid,
    /// User ID (indexed, unique with subject)
    pub user_id: Uuid,
    /// Subject name (max 100 chars)
    pub subject: String,
    /// Questions attempted in this subject
    pub total_attempted: i64,
    /// Questions answered correctly in this subject
    pub total_correct: i64,
    /// When this summary was last updated
    pub updated_at: DateTime<Utc>,
}

/// One completed (or abandoned) mock-test attempt. Immutable once completed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MockSession {
    /// Unique identifier
    pub id: Uuid,
    /// User ID (indexed)
    pub user_id: Uuid,
    /// Whether the attempt ran to completion
    pub completed: bool,
    /// Score as a percentage, 0-100
    pub accuracy: i32,
    /// When the session was recorded
    pub created_at: DateTime<Utc>,
}

/// Catalog row for an awardable badge. Static reference data, seeded by
/// migrations.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Achievement {
    pub id: Uuid,
    /// Unique badge name
    pub name: String,
    pub description: String,
}

/// A badge a user holds, joined with its catalog row for display.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EarnedAchievement {
    pub name: String,
    pub description: String,
    pub awarded_at: DateTime<Utc>,
}

/// One student with performance sums aggregated across subjects, as read by
/// the leaderboard queries.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StudentStandingRow {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub xp: i64,
    pub level: i32,
    pub total_correct: i64,
    pub total_attempted: i64,
}
