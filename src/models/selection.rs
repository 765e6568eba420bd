//! User filter selections and the ranges they are validated against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything a caller chooses for one dashboard view.
///
/// Unset dates default to the bounds of the data, an unset limit to the
/// configured default match count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub team: String,

    /// Tournaments to keep; empty keeps all
    #[serde(default)]
    pub tournaments: Vec<String>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Number of most recent matches to keep
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Selection {
    pub fn for_team(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Default::default()
        }
    }

    pub fn with_tournaments<I, S>(mut self, tournaments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tournaments = tournaments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Valid choices for the optional stages, each computed from the output of
/// the stage before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionBounds {
    /// Distinct tournaments the selected team played in, ascending
    pub tournaments: Vec<String>,

    /// Earliest match date after the tournament filter
    pub min_date: Option<NaiveDate>,

    /// Latest match date after the tournament filter
    pub max_date: Option<NaiveDate>,

    /// Matches left after the date filter; the upper bound for the limit
    pub max_matches: usize,
}

/// The selection actually applied after clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedSelection {
    pub team: String,
    pub tournaments: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub matches: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_builder() {
        let s = Selection::for_team("Brazil")
            .with_tournaments(["Copa América", "Friendly"])
            .with_start_date(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap())
            .with_limit(5);

        assert_eq!(s.team, "Brazil");
        assert_eq!(s.tournaments.len(), 2);
        assert!(s.start_date.is_some());
        assert!(s.end_date.is_none());
        assert_eq!(s.limit, Some(5));
    }

    #[test]
    fn test_selection_deserialize_defaults() {
        let s: Selection = serde_json::from_str(r#"{"team":"Ghana"}"#).unwrap();
        assert_eq!(s, Selection::for_team("Ghana"));
    }
}
