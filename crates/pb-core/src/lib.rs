//! Core progress and gamification logic for padhobadho.
//!
//! This crate is pure computation over snapshots read by the caller: badge
//! qualification, leaderboard ranking, and the accuracy/level arithmetic both
//! depend on. It performs no I/O, so every rule is unit-testable without a
//! database.

pub mod badge;
pub mod evaluator;
pub mod leaderboard;
pub mod stats;

pub use badge::Badge;
pub use evaluator::{ProgressSnapshot, SubjectTally, earned_badges};
pub use leaderboard::{
    ANONYMOUS_NAME, LEADERBOARD_SIZE, LeaderboardEntry, StudentStanding, rank_entries, rank_of,
};
pub use stats::{accuracy_percent, level_for_xp};
