//! Match result model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One played international match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Date the match was played
    pub date: NaiveDate,

    /// Team listed first in the fixture
    pub home_team: String,

    /// Team listed second in the fixture
    pub away_team: String,

    pub home_score: u32,
    pub away_score: u32,

    /// Competition name (e.g., "FIFA World Cup qualification")
    pub tournament: String,

    /// Host country, when the source carries it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Match {
    pub fn new(
        date: NaiveDate,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_score: u32,
        away_score: u32,
        tournament: impl Into<String>,
    ) -> Self {
        Self {
            date,
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score,
            away_score,
            tournament: tournament.into(),
            country: None,
        }
    }

    /// Builder method to set the host country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Returns true if the team played in this match, home or away.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// Goals `(scored, conceded)` from the point of view of `team`.
    ///
    /// A team that is not the home side is treated as the away side.
    pub fn goals_for(&self, team: &str) -> (u32, u32) {
        if self.home_team == team {
            (self.home_score, self.away_score)
        } else {
            (self.away_score, self.home_score)
        }
    }
}
