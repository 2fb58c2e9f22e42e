//! Delimited-file loader for the observation table.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use sha2::{Digest, Sha256};

use crate::error::{ReportError, Result};

use super::Dataset;
use super::model::{ObsValue, Observation, TimePeriod};

/// Columns every input table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["country", "time_period", "sex", "obs_value"];

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    country: usize,
    time_period: usize,
    sex: usize,
    obs_value: usize,
}

impl ColumnMap {
    /// Locate required columns; matching ignores case and surrounding whitespace.
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .ok_or_else(|| ReportError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };

        Ok(Self {
            country: find("country")?,
            time_period: find("time_period")?,
            sex: find("sex")?,
            obs_value: find("obs_value")?,
        })
    }

    fn observation(&self, record: &StringRecord, row: usize) -> Observation {
        let field = |idx: usize| record.get(idx).unwrap_or_default();
        Observation {
            row,
            country: field(self.country).to_string(),
            time_period: TimePeriod::new(field(self.time_period)),
            sex: field(self.sex).to_string(),
            obs_value: ObsValue::parse(field(self.obs_value)),
        }
    }
}

/// Loads observation tables from delimited text files.
#[derive(Debug, Clone, Copy)]
pub struct DatasetLoader {
    delimiter: u8,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self { delimiter: b',' }
    }

    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read and parse the file at `path`.
    ///
    /// # Errors
    /// Returns `Load` if the file cannot be read, `MissingColumn` if the header
    /// lacks a required column and `Csv` for malformed records.
    pub fn load(&self, path: &Path) -> Result<Dataset> {
        let bytes = fs::read(path).map_err(|source| ReportError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&bytes, path)
    }

    /// Parse already-read bytes; `path` is used for diagnostics only.
    ///
    /// # Errors
    /// Same as [`DatasetLoader::load`], minus the read failure.
    pub fn parse(&self, bytes: &[u8], path: &Path) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();
        let columns = ColumnMap::from_headers(&headers, path)?;

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            rows.push(columns.observation(&record, idx + 1));
        }

        tracing::debug!(path = %path.display(), rows = rows.len(), "loaded observation table");

        Ok(Dataset {
            fingerprint: fingerprint(bytes),
            rows,
        })
    }
}

/// SHA-256 hex digest of the raw input bytes.
fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
