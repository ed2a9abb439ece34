//! Line-oriented result log.
//!
//! Each line is `outcome,opponent`, with no header and no quoting.
//! A missing file reads as an empty log.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};
use crate::models::{MatchRecord, Outcome};

const DELIMITER: char = ',';

/// Append-only store of match records backed by a text file.
///
/// Assumes a single process owns the file; concurrent writers are not
/// coordinated.
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.results_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Append one record to the end of the log.
    ///
    /// The opponent is not checked against any roster, but it must be
    /// representable in the line format.
    pub fn append(&self, outcome: Outcome, opponent: &str) -> Result<(), StorageError> {
        validate_opponent(opponent)?;
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        writeln!(writer, "{}{}{}", outcome.as_str(), DELIMITER, opponent)?;
        writer.flush()?;

        debug!("Appended {} vs {} to {:?}", outcome, opponent, self.path);
        Ok(())
    }

    /// Append an already-built record.
    pub fn append_record(&self, record: &MatchRecord) -> Result<(), StorageError> {
        self.append(record.outcome, &record.opponent)
    }

    /// Read every record in append order.
    pub fn read_all(&self) -> Result<Vec<MatchRecord>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let bytes = bytes?;
            let Ok(line) = String::from_utf8(bytes) else {
                warn!(
                    "Skipping non-UTF-8 line {} in {:?}",
                    index + 1,
                    self.path
                );
                continue;
            };
            let line = line.strip_suffix('\r').unwrap_or(&line);

            if line.trim().is_empty() {
                continue;
            }

            match parse_line(line) {
                Some(record) => records.push(record),
                None => {
                    warn!(
                        "Skipping unreadable line {} in {:?}: {:?}",
                        index + 1,
                        self.path,
                        line
                    );
                }
            }
        }

        debug!("Read {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    /// Number of readable records.
    pub fn count(&self) -> Result<usize, StorageError> {
        Ok(self.read_all()?.len())
    }

    /// Truncate the log to zero length. The file is left in place.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.ensure_dir()?;
        File::create(&self.path)?;

        info!("Cleared result log {:?}", self.path);
        Ok(())
    }
}

fn validate_opponent(opponent: &str) -> Result<(), StorageError> {
    if opponent.is_empty() {
        return Err(StorageError::InvalidRecord(
            "opponent must not be empty".to_string(),
        ));
    }
    if opponent.contains(DELIMITER) || opponent.contains(['\n', '\r']) {
        return Err(StorageError::InvalidRecord(format!(
            "opponent {:?} contains a delimiter or line break",
            opponent
        )));
    }
    Ok(())
}

fn parse_line(line: &str) -> Option<MatchRecord> {
    let (outcome, rest) = line.split_once(DELIMITER)?;
    let outcome = Outcome::from_record(outcome)?;
    // Extra fields, if any, are ignored.
    let opponent = rest.split(DELIMITER).next().unwrap_or(rest);
    if opponent.is_empty() {
        return None;
    }
    Some(MatchRecord::new(outcome, opponent))
}
