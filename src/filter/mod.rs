//! Match filter pipeline.
//!
//! Narrows the full dataset to the matches a dashboard view summarizes.
//! Stages run in a fixed order, each on the output of the previous one:
//!
//! 1. Eligibility: home or away team is on the roster
//! 2. Team: the selected team played
//! 3. Tournaments: optional, empty selection keeps everything
//! 4. Dates: inclusive range, newest first
//! 5. Limit: the `n` most recent matches
//!
//! The valid choices for stages 3-5 are derived from the stage before and
//! returned with the result as [`SelectionBounds`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::models::{AppliedSelection, Match, Roster, Selection, SelectionBounds};

/// Matches shown when the caller does not ask for a count.
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Errors for selections that cannot be applied.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

/// Output of a pipeline run.
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// The selected team every match involves
    pub team: String,

    /// Surviving matches, newest first
    pub matches: Vec<Match>,

    pub bounds: SelectionBounds,
    pub applied: AppliedSelection,
}

impl FilterResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// The configured pipeline: a roster and a default match count.
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    roster: Roster,
    default_limit: usize,
}

impl FilterPipeline {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            default_limit: DEFAULT_MATCH_LIMIT,
        }
    }

    /// Builder method to set the match count used when none is selected.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit.max(1);
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Apply `selection` to `dataset`.
    pub fn run(
        &self,
        dataset: &[Match],
        selection: &Selection,
    ) -> Result<FilterResult, FilterError> {
        let team = selection.team.trim();
        if !self.roster.contains(team) {
            return Err(FilterError::UnknownTeam(team.to_string()));
        }

        let eligible = eligible(dataset, &self.roster);
        debug!("Eligibility filter kept {} of {} matches", eligible.len(), dataset.len());

        let played = involving(eligible, team);
        debug!("{} played {} eligible matches", team, played.len());

        let tournaments = distinct_tournaments(&played);
        let in_competition = in_tournaments(played, &selection.tournaments);

        let (min_date, max_date) = match date_bounds(&in_competition) {
            Some((min, max)) => (Some(min), Some(max)),
            None => (None, None),
        };

        let (dated, start_date, end_date) = match (min_date, max_date) {
            (Some(min), Some(max)) => {
                let (start, end) =
                    clamp_date_range(selection.start_date, selection.end_date, (min, max))?;
                (within_dates(in_competition, start, end), Some(start), Some(end))
            }
            _ => (Vec::new(), None, None),
        };

        let max_matches = dated.len();
        let requested = selection.limit.unwrap_or(self.default_limit);
        let limit = clamp_limit(requested, max_matches);
        if limit != requested && max_matches > 0 {
            debug!("Clamped match count {} to {}", requested, limit);
        }

        let matches: Vec<Match> = dated.into_iter().take(limit).cloned().collect();
        debug!("Pipeline returned {} matches for {}", matches.len(), team);

        Ok(FilterResult {
            team: team.to_string(),
            bounds: SelectionBounds {
                tournaments,
                min_date,
                max_date,
                max_matches,
            },
            applied: AppliedSelection {
                team: team.to_string(),
                tournaments: selection.tournaments.clone(),
                start_date,
                end_date,
                matches: matches.len(),
            },
            matches,
        })
    }
}

/// Stage 1: matches with at least one side on the roster.
pub fn eligible<'a>(matches: &'a [Match], roster: &Roster) -> Vec<&'a Match> {
    matches
        .iter()
        .filter(|m| roster.contains(&m.home_team) || roster.contains(&m.away_team))
        .collect()
}

/// Stage 2: matches the team played in.
pub fn involving<'a>(matches: Vec<&'a Match>, team: &str) -> Vec<&'a Match> {
    matches.into_iter().filter(|m| m.involves(team)).collect()
}

/// Distinct tournament names, ascending.
pub fn distinct_tournaments(matches: &[&Match]) -> Vec<String> {
    matches
        .iter()
        .map(|m| m.tournament.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Stage 3: matches in any of `tournaments`; an empty list keeps all.
pub fn in_tournaments<'a>(matches: Vec<&'a Match>, tournaments: &[String]) -> Vec<&'a Match> {
    if tournaments.is_empty() {
        return matches;
    }
    matches
        .into_iter()
        .filter(|m| tournaments.iter().any(|t| *t == m.tournament))
        .collect()
}

/// Earliest and latest match dates.
pub fn date_bounds(matches: &[&Match]) -> Option<(NaiveDate, NaiveDate)> {
    let min = matches.iter().map(|m| m.date).min()?;
    let max = matches.iter().map(|m| m.date).max()?;
    Some((min, max))
}

/// Resolve a requested range against the data bounds.
///
/// Missing ends default to the bounds and both ends are clamped into them.
pub fn clamp_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    (min, max): (NaiveDate, NaiveDate),
) -> Result<(NaiveDate, NaiveDate), FilterError> {
    let start = start.unwrap_or(min).clamp(min, max);
    let end = end.unwrap_or(max).clamp(min, max);
    if start > end {
        return Err(FilterError::InvalidDateRange { start, end });
    }
    Ok((start, end))
}

/// Stage 4: matches dated within `[start, end]`, newest first.
///
/// Matches on the same date keep their dataset order.
pub fn within_dates<'a>(
    matches: Vec<&'a Match>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a Match> {
    let mut kept: Vec<&Match> = matches
        .into_iter()
        .filter(|m| m.date >= start && m.date <= end)
        .collect();
    kept.sort_by(|a, b| b.date.cmp(&a.date));
    kept
}

/// Stage 5 bound: clamp a requested count into `[1, available]`.
pub fn clamp_limit(requested: usize, available: usize) -> usize {
    if available == 0 {
        0
    } else {
        requested.clamp(1, available)
    }
}
