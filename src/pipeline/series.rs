//! Lazy (country, sex) partitioning into time-ordered series.

use indexmap::IndexSet;
use serde::Serialize;

use crate::dataset::{ObsValue, Observation, RECOGNISED_SEXES, TimePeriod};

/// One point of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub time_period: TimePeriod,
    pub obs_value: ObsValue,
}

/// All rows of one (country, sex) pair, ordered by period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub country: String,
    pub sex: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Legend label, e.g. `"Haiti (Female)"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.country, self.sex)
    }
}

/// Iterator over the series of a table.
///
/// Countries come in order of first appearance; within a country `Male`
/// precedes `Female`. Each series is materialised only when requested.
#[derive(Debug, Clone)]
pub struct SeriesIter<'a> {
    rows: &'a [Observation],
    countries: IndexSet<&'a str>,
    country_idx: usize,
    sex_idx: usize,
}

impl<'a> SeriesIter<'a> {
    fn new(rows: &'a [Observation]) -> Self {
        Self {
            rows,
            countries: rows.iter().map(|r| r.country.as_str()).collect(),
            country_idx: 0,
            sex_idx: 0,
        }
    }

    fn advance(&mut self) {
        self.sex_idx += 1;
        if self.sex_idx == RECOGNISED_SEXES.len() {
            self.sex_idx = 0;
            self.country_idx += 1;
        }
    }

    fn collect_pair(&self, country: &str, sex: &str) -> Option<Series> {
        let mut matching: Vec<&Observation> = self
            .rows
            .iter()
            .filter(|r| r.country == country && r.sex == sex)
            .collect();
        if matching.is_empty() {
            return None;
        }
        matching.sort_by(|a, b| a.time_period.cmp(&b.time_period));

        Some(Series {
            country: country.to_string(),
            sex: sex.to_string(),
            points: matching
                .into_iter()
                .map(|r| SeriesPoint {
                    time_period: r.time_period.clone(),
                    obs_value: r.obs_value.clone(),
                })
                .collect(),
        })
    }
}

impl Iterator for SeriesIter<'_> {
    type Item = Series;

    fn next(&mut self) -> Option<Series> {
        while let Some(&country) = self.countries.get_index(self.country_idx) {
            let sex = RECOGNISED_SEXES[self.sex_idx];
            self.advance();
            if let Some(series) = self.collect_pair(country, sex) {
                return Some(series);
            }
        }
        None
    }
}

/// Partition rows into per-(country, sex) series for the recognised sexes.
#[must_use]
pub fn partition_series(rows: &[Observation]) -> SeriesIter<'_> {
    SeriesIter::new(rows)
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;
