//! Accuracy and level arithmetic shared by the evaluator and the leaderboard.

/// Accuracy as a whole percentage, rounded to the nearest integer.
///
/// Zero attempts resolves to 0 rather than an error; callers treat "no data"
/// and "all wrong" the same way on display surfaces.
pub fn accuracy_percent(correct: i64, attempted: i64) -> i32 {
    if attempted <= 0 {
        return 0;
    }
    ((correct as f64 / attempted as f64) * 100.0).round() as i32
}

/// Derived level for a given XP total: `floor(sqrt(xp / 100)) + 1`.
///
/// Monotonic in XP, level 1 at zero XP. Level boundaries land at
/// 100, 400, 900, 1600, ... XP.
pub fn level_for_xp(xp: i64) -> i32 {
    let base = (xp.max(0) / 100) as f64;
    base.sqrt().floor() as i32 + 1
}
