//! Loaded observation table.

mod loader;
mod model;

use indexmap::IndexSet;

pub use loader::{DatasetLoader, REQUIRED_COLUMNS};
pub use model::{FEMALE, MALE, ObsValue, Observation, RECOGNISED_SEXES, TimePeriod};

/// Immutable, in-memory observation table for one report run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    fingerprint: String,
    rows: Vec<Observation>,
}

impl Dataset {
    /// Build a dataset from rows already in memory.
    #[must_use]
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        Self {
            fingerprint: String::new(),
            rows,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// SHA-256 of the source bytes; empty for in-memory datasets.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct countries in order of first appearance.
    #[must_use]
    pub fn countries(&self) -> IndexSet<&str> {
        self.rows.iter().map(|r| r.country.as_str()).collect()
    }

    /// Earliest and latest period present, if any.
    #[must_use]
    pub fn period_range(&self) -> Option<(&TimePeriod, &TimePeriod)> {
        let min = self.rows.iter().map(|r| &r.time_period).min()?;
        let max = self.rows.iter().map(|r| &r.time_period).max()?;
        Some((min, max))
    }
}
