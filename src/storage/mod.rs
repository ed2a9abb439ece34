//! Filesystem storage for the result log.
//!
//! The log is a plain text file under the data directory, one
//! `outcome,opponent` record per line. It is the only durable state.

mod results;

pub use results::ResultLog;

use std::path::PathBuf;
use thiserror::Error;

/// Default file name of the result log.
pub const DEFAULT_RESULTS_FILE: &str = "street_fighter_results.csv";

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub results_file: String,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            results_file: DEFAULT_RESULTS_FILE.to_string(),
        }
    }

    pub fn with_results_file(mut self, results_file: impl Into<String>) -> Self {
        self.results_file = results_file.into();
        self
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join(&self.results_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
