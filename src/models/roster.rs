//! Eligible team roster.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The 32 teams of the 2022 FIFA World Cup in Qatar.
pub const WORLD_CUP_2022_TEAMS: [&str; 32] = [
    "Qatar",
    "Ecuador",
    "Senegal",
    "Netherlands",
    "England",
    "Iran",
    "United States",
    "Wales",
    "Argentina",
    "Saudi Arabia",
    "Mexico",
    "Poland",
    "France",
    "Australia",
    "Denmark",
    "Tunisia",
    "Spain",
    "Costa Rica",
    "Germany",
    "Japan",
    "Belgium",
    "Canada",
    "Morocco",
    "Croatia",
    "Brazil",
    "Serbia",
    "Switzerland",
    "Cameroon",
    "Portugal",
    "Ghana",
    "Uruguay",
    "South Korea",
];

/// Closed set of team names in scope for analysis.
///
/// Names are kept sorted so the roster can be rendered directly as a
/// selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    teams: BTreeSet<String>,
}

impl Roster {
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: teams
                .into_iter()
                .map(|t| Into::<String>::into(t).trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn world_cup_2022() -> Self {
        Self::new(WORLD_CUP_2022_TEAMS)
    }

    pub fn contains(&self, team: &str) -> bool {
        self.teams.contains(team)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Team names in ascending order.
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(String::as_str)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::world_cup_2022()
    }
}

impl From<Vec<String>> for Roster {
    fn from(teams: Vec<String>) -> Self {
        Self::new(teams)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.teams.into_iter().collect()
    }
}
