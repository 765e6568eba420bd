//! Match dataset storage.
//!
//! The dataset is a single static CSV file of international results,
//! read once at startup and kept in memory.

mod results;

pub use results::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

/// Where the dataset lives and how strictly it is read.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub results_path: PathBuf,

    /// Skip malformed rows with a warning instead of failing the load
    pub skip_malformed_rows: bool,
}

impl StorageConfig {
    pub fn new(results_path: PathBuf) -> Self {
        Self {
            results_path,
            skip_malformed_rows: false,
        }
    }

    pub fn with_skip_malformed_rows(mut self, skip: bool) -> Self {
        self.skip_malformed_rows = skip;
        self
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data/results.csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.results_path, PathBuf::from("./data/results.csv"));
        assert!(!config.skip_malformed_rows);
    }

    #[test]
    fn test_malformed_row_message() {
        let err = StorageError::MalformedRow {
            line: 7,
            reason: "invalid date 'yesterday'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed row at line 7: invalid date 'yesterday'"
        );
    }
}
