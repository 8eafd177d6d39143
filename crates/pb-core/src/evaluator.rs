//! Badge qualification over a snapshot of a user's progress.
//!
//! The caller (the API layer) reads the snapshot from storage and persists the
//! returned set with an insert-if-absent write. Keeping the decision pure
//! makes the award path trivially idempotent: the same snapshot always yields
//! the same set, and re-awarding an already-held badge is a storage no-op.

use crate::badge::{Badge, PROGRESSION_TIERS};
use crate::stats::accuracy_percent;

/// Minimum attempts before a subject counts towards "Subject Master".
const SUBJECT_MASTER_MIN_ATTEMPTS: i64 = 10;
/// Accuracy floor for "Subject Master".
const SUBJECT_MASTER_MIN_ACCURACY: i32 = 95;
/// Minimum attempts before a subject counts towards "Accuracy Ace".
const ACCURACY_ACE_MIN_ATTEMPTS: i64 = 5;

/// Cumulative counters for one (user, subject) pair. The subject's identity
/// is irrelevant here: both subject badges are user-level, so the rules only
/// look at the counters.
#[derive(Debug, Clone, Copy)]
pub struct SubjectTally {
    pub attempted: i64,
    pub correct: i64,
}

impl SubjectTally {
    /// Rounded accuracy percentage for this subject.
    pub fn accuracy(&self) -> i32 {
        accuracy_percent(self.correct, self.attempted)
    }
}

/// Everything the qualification rules look at, read at one point in time.
#[derive(Debug, Clone, Default)]
pub struct ProgressSnapshot {
    /// Total answered-question count across all subjects.
    pub questions_attempted: i64,
    /// One tally per subject the user has touched.
    pub subjects: Vec<SubjectTally>,
    /// Accuracy (0-100) of each completed mock session.
    pub mock_accuracies: Vec<i32>,
    /// Premium flag; `None` when the user record was not found, which skips
    /// the premium-only badge instead of failing.
    pub premium: Option<bool>,
}

/// Compute the full set of badges this snapshot qualifies for.
///
/// Every rule is checked unconditionally; there is no early exit and no
/// mutual exclusivity between progression tiers, so a user past the top
/// threshold holds every lower tier as well. The result is a qualification
/// set, not a delta: callers persist it with award-once semantics.
pub fn earned_badges(snapshot: &ProgressSnapshot) -> Vec<Badge> {
    let mut earned = Vec::new();

    for (threshold, badge) in PROGRESSION_TIERS {
        if snapshot.questions_attempted >= threshold {
            earned.push(badge);
        }
    }

    // Subject badges are user-level: one qualifying subject is enough, and
    // additional qualifying subjects change nothing.
    if snapshot.subjects.iter().any(|s| {
        s.attempted >= SUBJECT_MASTER_MIN_ATTEMPTS && s.accuracy() >= SUBJECT_MASTER_MIN_ACCURACY
    }) {
        earned.push(Badge::SubjectMaster);
    }
    if snapshot
        .subjects
        .iter()
        .any(|s| s.attempted >= ACCURACY_ACE_MIN_ATTEMPTS && s.accuracy() == 100)
    {
        earned.push(Badge::AccuracyAce);
    }

    if !snapshot.mock_accuracies.is_empty() {
        earned.push(Badge::MockFinisher);
    }
    if snapshot.mock_accuracies.iter().any(|&a| a == 100) {
        earned.push(Badge::Centurion);
    }

    if snapshot.premium == Some(true) {
        earned.push(Badge::EliteElite);
    }

    earned
}
