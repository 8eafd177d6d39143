//! The badge catalog as a closed set of tagged identifiers.
//!
//! Badges are stored in the database as catalog rows keyed by name; this enum
//! is the in-process identity for each of them, so qualification logic never
//! compares strings.

use serde::{Deserialize, Serialize};

/// Every badge the platform can award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    /// First question ever answered.
    Apprentice,
    /// 50 questions answered.
    BronzePractitioner,
    /// 250 questions answered.
    SilverScholar,
    /// 1000 questions answered.
    GoldenIntellectual,
    /// 2500 questions answered.
    DiamondRank,
    /// Any subject at >= 10 attempts with >= 95% accuracy.
    SubjectMaster,
    /// Any subject at >= 5 attempts with exactly 100% accuracy.
    AccuracyAce,
    /// At least one completed mock test.
    MockFinisher,
    /// A completed mock test scored exactly 100.
    Centurion,
    /// Premium subscriber.
    EliteElite,
}

/// Question-count thresholds for the progression tier badges, lowest first.
/// Tiers are cumulative: crossing a higher threshold keeps every lower badge.
pub const PROGRESSION_TIERS: [(i64, Badge); 5] = [
    (1, Badge::Apprentice),
    (50, Badge::BronzePractitioner),
    (250, Badge::SilverScholar),
    (1000, Badge::GoldenIntellectual),
    (2500, Badge::DiamondRank),
];

impl Badge {
    /// All badges, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Apprentice,
        Self::BronzePractitioner,
        Self::SilverScholar,
        Self::GoldenIntellectual,
        Self::DiamondRank,
        Self::SubjectMaster,
        Self::AccuracyAce,
        Self::MockFinisher,
        Self::Centurion,
        Self::EliteElite,
    ];

    /// The catalog name this badge is stored under.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Apprentice => "Apprentice",
            Self::BronzePractitioner => "Bronze Practitioner",
            Self::SilverScholar => "Silver Scholar",
            Self::GoldenIntellectual => "Golden Intellectual",
            Self::DiamondRank => "Diamond Rank",
            Self::SubjectMaster => "Subject Master",
            Self::AccuracyAce => "Accuracy Ace",
            Self::MockFinisher => "Mock Finisher",
            Self::Centurion => "Centurion",
            Self::EliteElite => "Elite Elite",
        }
    }

    /// Default catalog description, used when seeding the achievements table.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Apprentice => "Answer your first question",
            Self::BronzePractitioner => "Answer 50 questions",
            Self::SilverScholar => "Answer 250 questions",
            Self::GoldenIntellectual => "Answer 1000 questions",
            Self::DiamondRank => "Answer 2500 questions",
            Self::SubjectMaster => "Reach 95% accuracy in a subject (10+ attempts)",
            Self::AccuracyAce => "Hit 100% accuracy in a subject (5+ attempts)",
            Self::MockFinisher => "Complete your first mock test",
            Self::Centurion => "Score a perfect 100 in a mock test",
            Self::EliteElite => "Join the premium club",
        }
    }

    /// Resolve a catalog name back to its badge, if it is one of ours.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.name() == name)
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for badge in Badge::ALL {
            assert_eq!(Badge::from_name(badge.name()), Some(badge));
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(Badge::from_name("Platinum Legend"), None);
    }

    #[test]
    fn tiers_are_strictly_increasing() {
        for pair in PROGRESSION_TIERS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
