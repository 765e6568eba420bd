//! Match outcomes relative to a selected team.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Match;

/// Result of a match for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Defeat,
}

impl Outcome {
    /// All outcomes, in display order.
    pub const ALL: [Outcome; 3] = [Outcome::Win, Outcome::Draw, Outcome::Defeat];

    /// Classify a scoreline already oriented to one side.
    pub fn from_goals(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => Outcome::Win,
            Ordering::Less => Outcome::Defeat,
            Ordering::Equal => Outcome::Draw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Draw => "draw",
            Outcome::Defeat => "defeat",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// A match seen from the selected team's side.
///
/// The indicator columns are derived from `outcome`, so exactly one of
/// `wins`, `draws` and `defeats` is 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub tournament: String,
    pub selected_team: String,
    pub wins: u32,
    pub draws: u32,
    pub defeats: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goals_diff: i64,
    #[serde(rename = "result")]
    pub outcome: Outcome,
}

impl MatchResult {
    /// Classify `m` from the point of view of `team`.
    pub fn classify(m: &Match, team: &str) -> Self {
        let (goals_scored, goals_conceded) = m.goals_for(team);
        let outcome = Outcome::from_goals(goals_scored, goals_conceded);

        Self {
            date: m.date,
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            home_score: m.home_score,
            away_score: m.away_score,
            tournament: m.tournament.clone(),
            selected_team: team.to_string(),
            wins: u32::from(outcome == Outcome::Win),
            draws: u32::from(outcome == Outcome::Draw),
            defeats: u32::from(outcome == Outcome::Defeat),
            goals_scored,
            goals_conceded,
            goals_diff: i64::from(goals_scored) - i64::from(goals_conceded),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_goals() {
        assert_eq!(Outcome::from_goals(2, 1), Outcome::Win);
        assert_eq!(Outcome::from_goals(0, 3), Outcome::Defeat);
        assert_eq!(Outcome::from_goals(1, 1), Outcome::Draw);
        assert_eq!(Outcome::from_goals(0, 0), Outcome::Draw);
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(serde_json::to_string(&Outcome::Defeat).unwrap(), "\"defeat\"");
        assert_eq!(format!("{}", Outcome::Win), "win");
    }

    #[test]
    fn test_classify_home_win() {
        let m = Match::new(date("2022-01-01"), "TeamX", "TeamY", 2, 1, "Friendly");
        let r = MatchResult::classify(&m, "TeamX");

        assert_eq!(r.outcome, Outcome::Win);
        assert_eq!((r.wins, r.draws, r.defeats), (1, 0, 0));
        assert_eq!((r.goals_scored, r.goals_conceded, r.goals_diff), (2, 1, 1));
        assert_eq!(r.selected_team, "TeamX");
    }

    #[test]
    fn test_classify_away_win() {
        let m = Match::new(date("2022-01-05"), "TeamY", "TeamX", 0, 3, "Friendly");
        let r = MatchResult::classify(&m, "TeamX");

        assert_eq!(r.outcome, Outcome::Win);
        assert_eq!((r.goals_scored, r.goals_conceded, r.goals_diff), (3, 0, 3));
    }

    #[test]
    fn test_classify_defeat_and_draw() {
        let m = Match::new(date("2022-01-05"), "TeamY", "TeamX", 0, 3, "Friendly");
        let r = MatchResult::classify(&m, "TeamY");
        assert_eq!(r.outcome, Outcome::Defeat);
        assert_eq!((r.wins, r.draws, r.defeats), (0, 0, 1));
        assert_eq!(r.goals_diff, -3);

        let m = Match::new(date("2022-02-01"), "TeamY", "TeamX", 2, 2, "Friendly");
        let r = MatchResult::classify(&m, "TeamX");
        assert_eq!(r.outcome, Outcome::Draw);
        assert_eq!((r.wins, r.draws, r.defeats), (0, 1, 0));
        assert_eq!(r.goals_diff, 0);
    }

    #[test]
    fn test_result_serializes_label() {
        let m = Match::new(date("2022-01-01"), "TeamX", "TeamY", 2, 1, "Friendly");
        let json = serde_json::to_value(MatchResult::classify(&m, "TeamY")).unwrap();
        assert_eq!(json["result"], "defeat");
        assert_eq!(json["goals_diff"], -1);
    }
}
