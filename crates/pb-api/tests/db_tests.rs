//! Integration tests against a live Postgres instance.
//!
//! These run only when `TEST_DATABASE_URL` is set and skip otherwise, so the
//! no-database suite stays green anywhere. The database is shared across
//! tests: assertions tolerate foreign rows and every test deletes the users
//! it creates (the schema cascades the rest).

use axum::http::StatusCode;
use sqlx::PgPool;
use uuid::Uuid;

use pb_api::{achievements::evaluator, state::ApiState};
use pb_db::repositories::achievement;

use crate::common::{TestClient, try_build_db_state};

async fn insert_user(pool: &PgPool, name: &str, xp: i64, premium: bool, role: &str) -> Uuid {
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO users (display_name, xp, premium, role)
            VALUES ($1, $2, $3, $4::user_role)
            RETURNING id
        "#,
    )
    .bind(name)
    .bind(xp)
    .bind(premium)
    .bind(role)
    .fetch_one(pool)
    .await
    .expect("failed to insert test user")
}

/// Seed `total` answered questions for one subject, the first `correct_count`
/// of them correct.
async fn seed_history(pool: &PgPool, user_id: Uuid, subject: &str, total: i32, correct_count: i32) {
    sqlx::query(
        // language=PostgreSQL
        r#"
            INSERT INTO question_history (user_id, subject, correct)
            SELECT $1, $2, gs <= $3
            FROM generate_series(1, $4) AS gs
        "#,
    )
    .bind(user_id)
    .bind(subject)
    .bind(correct_count)
    .bind(total)
    .execute(pool)
    .await
    .expect("failed to seed question history");
}

async fn delete_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("failed to delete test user");
}

/// Remove leftovers from earlier aborted runs matching a display-name prefix.
async fn delete_users_with_prefix(pool: &PgPool, prefix: &str) {
    sqlx::query("DELETE FROM users WHERE display_name LIKE $1 || '%'")
        .bind(prefix)
        .execute(pool)
        .await
        .expect("failed to clear stale test users");
}

async fn earned_names(pool: &PgPool, user_id: Uuid) -> Vec<String> {
    achievement::find_earned_by_user(pool, user_id)
        .await
        .expect("failed to read earned achievements")
        .into_iter()
        .map(|a| a.name)
        .collect()
}

fn test_client(state: &ApiState) -> TestClient {
    TestClient::new(pb_api::router::router().with_state(state.clone()))
}

#[tokio::test]
async fn double_evaluation_awards_each_badge_once() {
    let Some(state) = try_build_db_state().await else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return;
    };

    let user_id = insert_user(&state.pool, "idem-test-user", 0, false, "STUDENT").await;
    seed_history(&state.pool, user_id, "History", 50, 30).await;

    evaluator::evaluate(&state, user_id).await.expect("first evaluation");
    evaluator::evaluate(&state, user_id).await.expect("second evaluation");

    let mut names = earned_names(&state.pool, user_id).await;
    names.sort();
    assert_eq!(names, vec!["Apprentice", "Bronze Practitioner"]);

    // One row per badge even after re-evaluation.
    let row_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM user_achievements WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&state.pool)
            .await
            .expect("failed to count award rows");
    assert_eq!(row_count, 2);

    delete_user(&state.pool, user_id).await;
}

#[tokio::test]
async fn practice_submission_records_progress_and_awards() {
    let Some(state) = try_build_db_state().await else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return;
    };

    let user_id = insert_user(&state.pool, "practice-test-user", 0, false, "STUDENT").await;
    let client = test_client(&state);

    let response = client
        .post_json(
            &format!("/practice/{user_id}/answer"),
            r#"{"subject": "Polity", "correct": true}"#,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let body = response.json();
    assert_eq!(body["xp"], 15);
    assert_eq!(body["level"], 1);
    assert_eq!(body["subject_attempted"], 1);
    assert_eq!(body["subject_correct"], 1);

    // First answer crosses the first progression threshold.
    let names = earned_names(&state.pool, user_id).await;
    assert_eq!(names, vec!["Apprentice"]);

    delete_user(&state.pool, user_id).await;
}

#[tokio::test]
async fn perfect_mock_awards_finisher_and_centurion() {
    let Some(state) = try_build_db_state().await else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return;
    };

    let user_id = insert_user(&state.pool, "mock-test-user", 0, false, "STUDENT").await;
    let client = test_client(&state);

    let response = client
        .post_json(&format!("/mocks/{user_id}/complete"), r#"{"accuracy": 100}"#)
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let body = response.json();
    assert_eq!(body["xp"], 100);
    assert_eq!(body["level"], 2);

    let mut names = earned_names(&state.pool, user_id).await;
    names.sort();
    assert_eq!(names, vec!["Centurion", "Mock Finisher"]);

    // A second, imperfect mock adds XP but no new badges.
    let response = client
        .post_json(&format!("/mocks/{user_id}/complete"), r#"{"accuracy": 80}"#)
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(earned_names(&state.pool, user_id).await.len(), 2);

    delete_user(&state.pool, user_id).await;
}

#[tokio::test]
async fn leaderboard_ranks_students_and_excludes_admins() {
    let Some(state) = try_build_db_state().await else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return;
    };

    // XP values far above anything other tests create, so these five occupy
    // the top of the board regardless of concurrent rows.
    let prefix = "standings-test-";
    delete_users_with_prefix(&state.pool, prefix).await;

    let admin = insert_user(&state.pool, "standings-test-admin", 2_000_000, false, "ADMIN").await;
    let mut students = Vec::new();
    for (name, xp) in [
        ("standings-test-a", 1_000_500_i64),
        ("standings-test-b", 1_000_400),
        ("standings-test-c", 1_000_400),
        ("standings-test-d", 1_000_300),
        ("standings-test-e", 1_000_100),
    ] {
        students.push(insert_user(&state.pool, name, xp, false, "STUDENT").await);
    }

    let client = test_client(&state);

    let response = client.get("/leaderboard").await;
    assert_eq!(response.status, StatusCode::OK);
    let board = response.json();
    let entries = board.as_array().expect("leaderboard is an array");
    let top_names: Vec<&str> = entries[..5]
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        top_names,
        vec![
            "standings-test-a",
            "standings-test-b",
            "standings-test-c",
            "standings-test-d",
            "standings-test-e",
        ]
    );
    for (i, entry) in entries[..5].iter().enumerate() {
        assert_eq!(entry["rank"], i as i64 + 1);
    }

    // The fourth-ranked student ranks 4 against the full population.
    let response = client
        .get(&format!("/leaderboard/{}/rank", students[3]))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["rank"], 4);

    // Admins are outside the ranked population no matter their XP.
    let response = client.get(&format!("/leaderboard/{admin}/rank")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["rank"], 0);

    for id in students {
        delete_user(&state.pool, id).await;
    }
    delete_user(&state.pool, admin).await;
}
