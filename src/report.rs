//! Dashboard view assembly.
//!
//! Turns a pipeline result into everything the presentation needs: the match
//! table, per-match outcomes, the team summary, chart series and the
//! narrative sentences.

use std::fmt::Write;

use serde::Serialize;

use crate::calculate::{
    classify_matches, goals_timeline, outcome_distribution, team_summary, GoalsPoint, OutcomeCount,
};
use crate::filter::FilterResult;
use crate::models::{
    AppliedSelection, GoalBalance, Match, MatchResult, SelectionBounds, TeamSummary,
};

/// One fully computed dashboard view.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub team: String,
    pub heading: String,

    /// Filtered matches, newest first
    pub matches: Vec<Match>,

    /// The same matches classified from the team's side
    pub results: Vec<MatchResult>,

    /// `None` when no match survived the filters
    pub summary: Option<TeamSummary>,

    pub goal_balance: Option<GoalBalance>,
    pub outcome_distribution: Vec<OutcomeCount>,
    pub goals_timeline: Vec<GoalsPoint>,
    pub narrative: Vec<String>,
    pub selection: AppliedSelection,
    pub bounds: SelectionBounds,
}

impl Dashboard {
    pub fn build(filtered: FilterResult) -> Self {
        let FilterResult {
            team,
            matches,
            bounds,
            applied,
        } = filtered;

        let results = classify_matches(&matches, &team);
        let summary = team_summary(&results, &team);

        Self {
            heading: format!("Latest {} results", team),
            goal_balance: summary.as_ref().map(TeamSummary::goal_balance),
            narrative: summary.as_ref().map(narrative).unwrap_or_default(),
            outcome_distribution: outcome_distribution(&results),
            goals_timeline: goals_timeline(&results),
            team,
            matches,
            results,
            summary,
            selection: applied,
            bounds,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Summary sentences for a team's recent results.
pub fn narrative(summary: &TeamSummary) -> Vec<String> {
    vec![
        format!(
            "{} has won {}, tied {} and lost {} of its last {} games",
            summary.team, summary.wins, summary.draws, summary.defeats, summary.matches
        ),
        format!(
            "{} has scored {} goals and conceded {} goals making up a difference of {} goals",
            summary.team, summary.goals_scored, summary.goals_conceded, summary.goals_diff
        ),
    ]
}

/// Plain-text rendering for terminal output.
pub fn render_text(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "### {}", dashboard.heading);
    let _ = writeln!(out);

    if dashboard.is_empty() {
        let _ = writeln!(out, "No matches for the current selection.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<10}  {:<24}  {:>5}  {:<24}  {:<7}  {}",
        "date", "home_team", "score", "away_team", "result", "tournament"
    );
    for r in &dashboard.results {
        let _ = writeln!(
            out,
            "{:<10}  {:<24}  {:>2}-{:<2}  {:<24}  {:<7}  {}",
            r.date, r.home_team, r.home_score, r.away_score, r.away_team, r.outcome, r.tournament
        );
    }

    let _ = writeln!(out);
    for sentence in &dashboard.narrative {
        let _ = writeln!(out, "* {}", sentence);
    }

    let _ = writeln!(out);
    for c in &dashboard.outcome_distribution {
        let _ = writeln!(out, "{:<7} {}", c.result, c.count);
    }
    out
}
