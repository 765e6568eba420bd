//! Aggregate results for a team.

use serde::{Deserialize, Serialize};

use super::MatchResult;

/// Summed results of one selected team over a set of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: String,

    /// Number of matches summed
    pub matches: u32,

    pub wins: u32,
    pub defeats: u32,
    pub draws: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goals_diff: i64,
}

impl TeamSummary {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Default::default()
        }
    }

    /// Add one classified match to the running totals.
    pub fn add(&mut self, result: &MatchResult) {
        self.matches += 1;
        self.wins += result.wins;
        self.defeats += result.defeats;
        self.draws += result.draws;
        self.goals_scored = self.goals_scored.saturating_add(result.goals_scored);
        self.goals_conceded = self.goals_conceded.saturating_add(result.goals_conceded);
        self.goals_diff += result.goals_diff;
    }

    pub fn goal_balance(&self) -> GoalBalance {
        GoalBalance::from_diff(self.goals_diff)
    }
}

/// Sign of a goal difference, as highlighted in the narrative.
///
/// A level difference is shown the same way as a negative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalBalance {
    Positive,
    Negative,
}

impl GoalBalance {
    pub fn from_diff(diff: i64) -> Self {
        if diff > 0 {
            GoalBalance::Positive
        } else {
            GoalBalance::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Match;
    use chrono::NaiveDate;

    #[test]
    fn test_goal_balance() {
        assert_eq!(GoalBalance::from_diff(4), GoalBalance::Positive);
        assert_eq!(GoalBalance::from_diff(0), GoalBalance::Negative);
        assert_eq!(GoalBalance::from_diff(-4), GoalBalance::Negative);
    }

    #[test]
    fn test_add_saturates_goal_totals() {
        let m = Match::new(
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            "A",
            "B",
            u32::MAX,
            1,
            "Friendly",
        );
        let r = MatchResult::classify(&m, "A");

        let mut s = TeamSummary::new("A");
        s.add(&r);
        s.add(&r);

        assert_eq!(s.goals_scored, u32::MAX);
        assert_eq!(s.goals_conceded, 2);
        assert_eq!(s.goals_diff, 2 * (i64::from(u32::MAX) - 1));
        assert_eq!(s.wins, 2);
    }

    #[test]
    fn test_new_summary_is_zero() {
        let s = TeamSummary::new("Wales");
        assert_eq!(s.team, "Wales");
        assert_eq!(s.matches, 0);
        assert_eq!(s.goals_diff, 0);
    }
}
