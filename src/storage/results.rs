//! CSV results reader.
//!
//! Expected header: `date,home_team,away_team,home_score,away_score,tournament`
//! plus any extra columns (`city`, `country`, `neutral`, ...). Only `country`
//! among the extras is kept.

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};
use crate::models::Match;

const REQUIRED_COLUMNS: [&str; 6] = [
    "date",
    "home_team",
    "away_team",
    "home_score",
    "away_score",
    "tournament",
];

#[derive(Debug, Deserialize)]
struct RawResult {
    date: String,
    home_team: String,
    away_team: String,
    home_score: Option<String>,
    away_score: Option<String>,
    tournament: String,
    #[serde(default)]
    country: Option<String>,
}

impl RawResult {
    /// Convert to a `Match`. `Ok(None)` means the match has no score at all
    /// and is dropped.
    fn into_match(self) -> Result<Option<Match>, String> {
        let home_score = parse_score(self.home_score.as_deref())?;
        let away_score = parse_score(self.away_score.as_deref())?;

        let (home_score, away_score) = match (home_score, away_score) {
            (None, None) => return Ok(None),
            (Some(h), Some(a)) => (h, a),
            _ => return Err("only one score present".to_string()),
        };

        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{}'", self.date))?;

        let mut m = Match::new(
            date,
            self.home_team,
            self.away_team,
            home_score,
            away_score,
            self.tournament,
        );
        if let Some(country) = self.country.filter(|c| !c.is_empty()) {
            m = m.with_country(country);
        }
        Ok(Some(m))
    }
}

fn parse_score(raw: Option<&str>) -> Result<Option<u32>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("na") || s.eq_ignore_ascii_case("nan") => Ok(None),
        Some(s) => s
            .parse::<u32>()
            .map(Some)
            .map_err(|_| format!("non-numeric score '{}'", s)),
    }
}

/// Reader for the results CSV file.
pub struct ResultsReader {
    path: PathBuf,
    skip_malformed_rows: bool,
}

impl ResultsReader {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            skip_malformed_rows: false,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            path: config.results_path.clone(),
            skip_malformed_rows: config.skip_malformed_rows,
        }
    }

    /// Read every scored match from the file.
    pub fn read_all(&self) -> Result<Vec<Match>, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::PathNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        let matches = read_matches(file, self.skip_malformed_rows)?;

        info!("Loaded {} matches from {:?}", matches.len(), self.path);
        Ok(matches)
    }
}

/// Parse matches from any CSV source.
///
/// Rows without any score are dropped. Any other unparseable row fails the
/// whole read, unless `skip_malformed_rows` is set.
pub fn read_matches<R: Read>(
    source: R,
    skip_malformed_rows: bool,
) -> Result<Vec<Match>, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(StorageError::MissingColumn(column));
        }
    }
    let byte_headers = reader.byte_headers()?.clone();

    let mut matches = Vec::new();
    let mut unscored = 0usize;
    let mut skipped = 0usize;
    let mut record = csv::ByteRecord::new();

    loop {
        let (line, parsed) = match reader.read_byte_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                let parsed = record
                    .deserialize::<RawResult>(Some(&byte_headers))
                    .map_err(|e| e.to_string())
                    .and_then(RawResult::into_match);
                (line, parsed)
            }
            Err(e) if is_row_error(&e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                (line, Err(e.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        match parsed {
            Ok(Some(m)) => matches.push(m),
            Ok(None) => unscored += 1,
            Err(reason) if skip_malformed_rows => {
                warn!("Skipping malformed row at line {}: {}", line, reason);
                skipped += 1;
            }
            Err(reason) => return Err(StorageError::MalformedRow { line, reason }),
        }
    }

    debug!(
        "Parsed {} matches ({} without score, {} malformed skipped)",
        matches.len(),
        unscored,
        skipped
    );
    Ok(matches)
}

/// Errors confined to a single record; the reader stays usable after them.
fn is_row_error(err: &csv::Error) -> bool {
    matches!(
        err.kind(),
        csv::ErrorKind::UnequalLengths { .. }
            | csv::ErrorKind::Utf8 { .. }
            | csv::ErrorKind::Deserialize { .. }
    )
}
