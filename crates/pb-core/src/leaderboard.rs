//! Leaderboard ranking over the student population.

use serde::Serialize;
use uuid::Uuid;

use crate::stats::accuracy_percent;

/// How many entries the public leaderboard shows.
pub const LEADERBOARD_SIZE: usize = 20;

/// Display-name fallback for students who never set one.
pub const ANONYMOUS_NAME: &str = "Anonymous Aspirant";

/// One student as read from storage, with performance sums pre-aggregated.
#[derive(Debug, Clone)]
pub struct StudentStanding {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub xp: i64,
    pub level: i32,
    pub total_correct: i64,
    pub total_attempted: i64,
}

/// One row of the rendered leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: i32,
    pub user_id: Uuid,
    pub name: String,
    pub xp: i64,
    pub level: i32,
    /// Rounded percentage over all of the student's subjects.
    pub accuracy: i32,
}

/// Rank students by XP descending and render the top of the board.
///
/// The sort is stable, so ties keep the storage order they arrived in; no
/// explicit tie-break is defined.
pub fn rank_entries(mut standings: Vec<StudentStanding>) -> Vec<LeaderboardEntry> {
    standings.sort_by_key(|s| std::cmp::Reverse(s.xp));

    standings
        .into_iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(i, s)| LeaderboardEntry {
            rank: i as i32 + 1,
            user_id: s.id,
            name: s.display_name.unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
            xp: s.xp,
            level: s.level,
            accuracy: accuracy_percent(s.total_correct, s.total_attempted),
        })
        .collect()
}

/// 1-based rank of a user within the full student population, or 0 when the
/// user is not part of it (an admin account, or an unknown id).
pub fn rank_of(mut standings: Vec<StudentStanding>, user_id: Uuid) -> i32 {
    standings.sort_by_key(|s| std::cmp::Reverse(s.xp));

    standings
        .iter()
        .position(|s| s.id == user_id)
        .map_or(0, |i| i as i32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(xp: i64, correct: i64, attempted: i64) -> StudentStanding {
        StudentStanding {
            id: Uuid::new_v4(),
            display_name: Some(format!("student-{xp}")),
            xp,
            level: 1,
            total_correct: correct,
            total_attempted: attempted,
        }
    }

    #[test]
    fn ranks_follow_xp_descending() {
        let standings: Vec<_> = [500, 400, 400, 300, 100]
            .into_iter()
            .map(|xp| standing(xp, 0, 0))
            .collect();
        let fourth = standings[3].id;

        let entries = rank_entries(standings.clone());
        assert_eq!(
            entries.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert_eq!(
            entries.iter().map(|e| e.xp).collect::<Vec<_>>(),
            vec![500, 400, 400, 300, 100]
        );
        assert_eq!(rank_of(standings, fourth), 4);
    }

    #[test]
    fn ties_keep_storage_order() {
        let a = standing(400, 0, 0);
        let b = standing(400, 0, 0);
        let entries = rank_entries(vec![a.clone(), b.clone()]);
        assert_eq!(entries[0].user_id, a.id);
        assert_eq!(entries[1].user_id, b.id);
    }

    #[test]
    fn board_is_capped() {
        let standings: Vec<_> = (0..30).map(|i| standing(i, 0, 0)).collect();
        assert_eq!(rank_entries(standings).len(), LEADERBOARD_SIZE);
    }

    #[test]
    fn rank_beyond_the_board_is_still_found() {
        let standings: Vec<_> = (0..30).map(|i| standing(1000 - i, 0, 0)).collect();
        let last = standings[29].id;
        assert_eq!(rank_of(standings, last), 30);
    }

    #[test]
    fn unknown_user_ranks_zero() {
        let standings = vec![standing(500, 0, 0)];
        assert_eq!(rank_of(standings, Uuid::new_v4()), 0);
    }

    #[test]
    fn accuracy_and_name_fallback() {
        let mut s = standing(500, 45, 50);
        s.display_name = None;
        let entries = rank_entries(vec![s]);
        assert_eq!(entries[0].name, ANONYMOUS_NAME);
        assert_eq!(entries[0].accuracy, 90);

        let entries = rank_entries(vec![standing(100, 0, 0)]);
        assert_eq!(entries[0].accuracy, 0);
    }
}
