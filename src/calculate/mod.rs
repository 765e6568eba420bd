//! Outcome aggregation.
//!
//! Classifies filtered matches from the selected team's side and sums them:
//! - Per-match outcome, goals scored/conceded and goal difference
//! - Per-team totals of wins, draws, defeats and goals
//! - Chart series: outcome distribution and goals scored over time

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Match, MatchResult, Outcome, TeamSummary};

/// Number of matches with a given outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    pub result: Outcome,
    pub count: u32,
}

/// Goals scored by the selected team in one match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalsPoint {
    pub date: NaiveDate,
    pub goals_scored: u32,
}

/// Classify every match from the point of view of `team`.
pub fn classify_matches(matches: &[Match], team: &str) -> Vec<MatchResult> {
    matches
        .iter()
        .map(|m| MatchResult::classify(m, team))
        .collect()
}

/// Sum classified results per selected team, ordered by team name.
pub fn summarize_by_team(results: &[MatchResult]) -> Vec<TeamSummary> {
    let mut by_team: BTreeMap<&str, TeamSummary> = BTreeMap::new();
    for r in results {
        by_team
            .entry(r.selected_team.as_str())
            .or_insert_with(|| TeamSummary::new(r.selected_team.clone()))
            .add(r);
    }
    by_team.into_values().collect()
}

/// Totals for one team, or `None` when it has no classified matches.
pub fn team_summary(results: &[MatchResult], team: &str) -> Option<TeamSummary> {
    summarize_by_team(results)
        .into_iter()
        .find(|s| s.team == team)
}

/// Count matches per outcome, in win/draw/defeat order.
///
/// Outcomes that never occur are left out.
pub fn outcome_distribution(results: &[MatchResult]) -> Vec<OutcomeCount> {
    Outcome::ALL
        .iter()
        .map(|&outcome| OutcomeCount {
            result: outcome,
            count: results.iter().filter(|r| r.outcome == outcome).count() as u32,
        })
        .filter(|c| c.count > 0)
        .collect()
}

/// Goals scored per match, oldest first.
pub fn goals_timeline(results: &[MatchResult]) -> Vec<GoalsPoint> {
    let mut points: Vec<GoalsPoint> = results
        .iter()
        .map(|r| GoalsPoint {
            date: r.date,
            goals_scored: r.goals_scored,
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn two_matches() -> Vec<Match> {
        vec![
            Match::new(date("2022-01-01"), "TeamX", "TeamY", 2, 1, "Friendly"),
            Match::new(date("2022-01-05"), "TeamY", "TeamX", 0, 3, "Friendly"),
        ]
    }

    #[test]
    fn test_scenario_team_x() {
        let results = classify_matches(&two_matches(), "TeamX");
        assert!(results.iter().all(|r| r.outcome == Outcome::Win));

        let summary = team_summary(&results, "TeamX").unwrap();
        assert_eq!(
            summary,
            TeamSummary {
                team: "TeamX".to_string(),
                matches: 2,
                wins: 2,
                defeats: 0,
                draws: 0,
                goals_scored: 5,
                goals_conceded: 1,
                goals_diff: 4,
            }
        );
    }

    #[test]
    fn test_scenario_team_y() {
        let results = classify_matches(&two_matches(), "TeamY");
        assert!(results.iter().all(|r| r.outcome == Outcome::Defeat));

        let summary = team_summary(&results, "TeamY").unwrap();
        assert_eq!(summary.defeats, 2);
        assert_eq!(summary.goals_scored, 1);
        assert_eq!(summary.goals_conceded, 5);
        assert_eq!(summary.goals_diff, -4);
    }

    #[test]
    fn test_empty_input_has_no_summary() {
        let results = classify_matches(&[], "TeamX");
        assert!(results.is_empty());
        assert!(summarize_by_team(&results).is_empty());
        assert_eq!(team_summary(&results, "TeamX"), None);
        assert!(outcome_distribution(&results).is_empty());
        assert!(goals_timeline(&results).is_empty());
    }

    #[test]
    fn test_indicators_are_exclusive_and_sum_to_rows() {
        let matches = vec![
            Match::new(date("2021-03-01"), "A", "B", 1, 1, "Friendly"),
            Match::new(date("2021-03-02"), "B", "A", 4, 2, "Friendly"),
            Match::new(date("2021-03-03"), "A", "C", 0, 0, "Cup"),
            Match::new(date("2021-03-04"), "C", "A", 1, 2, "Cup"),
        ];
        let results = classify_matches(&matches, "A");

        for r in &results {
            assert_eq!(r.wins + r.draws + r.defeats, 1);
            assert_eq!(
                r.goals_diff,
                i64::from(r.goals_scored) - i64::from(r.goals_conceded)
            );
            assert_eq!(r.outcome, Outcome::from_goals(r.goals_scored, r.goals_conceded));
        }

        let summary = team_summary(&results, "A").unwrap();
        assert_eq!(
            summary.wins + summary.draws + summary.defeats,
            results.len() as u32
        );
        assert_eq!((summary.wins, summary.draws, summary.defeats), (1, 2, 1));
    }

    #[test]
    fn test_summarize_groups_by_selected_team() {
        let mut results = classify_matches(&two_matches(), "TeamX");
        results.extend(classify_matches(&two_matches(), "TeamY"));

        let summaries = summarize_by_team(&results);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].team, "TeamX");
        assert_eq!(summaries[1].team, "TeamY");
        assert_eq!(summaries[0].goals_diff, -summaries[1].goals_diff);
    }

    #[test]
    fn test_outcome_distribution_order() {
        let matches = vec![
            Match::new(date("2021-03-01"), "A", "B", 0, 1, "Friendly"),
            Match::new(date("2021-03-02"), "A", "B", 3, 1, "Friendly"),
            Match::new(date("2021-03-03"), "B", "A", 2, 0, "Friendly"),
        ];
        let dist = outcome_distribution(&classify_matches(&matches, "A"));
        assert_eq!(
            dist,
            vec![
                OutcomeCount {
                    result: Outcome::Win,
                    count: 1
                },
                OutcomeCount {
                    result: Outcome::Defeat,
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_goals_timeline_sorted_ascending() {
        let matches = vec![
            Match::new(date("2022-06-10"), "A", "B", 3, 1, "Friendly"),
            Match::new(date("2022-01-10"), "B", "A", 0, 2, "Friendly"),
        ];
        let timeline = goals_timeline(&classify_matches(&matches, "A"));
        assert_eq!(timeline[0].date, date("2022-01-10"));
        assert_eq!(timeline[0].goals_scored, 2);
        assert_eq!(timeline[1].goals_scored, 3);
    }
}
