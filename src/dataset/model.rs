//! Observation table model: one row per (country, period, sex) measurement.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

/// Sex categories the series partitioner recognises.
pub const MALE: &str = "Male";
pub const FEMALE: &str = "Female";
pub const RECOGNISED_SEXES: [&str; 2] = [MALE, FEMALE];

/// Cell markers treated as a missing value rather than a type error.
const MISSING_MARKERS: &[&str] = &["", "na", "n/a", "nan", "null", ".."];

static LEADING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(?:\D|$)").expect("Invalid regex"));

/// Period label as it appears in the source table.
///
/// Labels order chronologically: integer labels by value, other labels by
/// their leading year (`"2019Q3"` sits between `"2019"` and `"2020"`).
/// Within one year the plain integer comes first, then the raw text decides.
/// Labels with neither an integer value nor a year sort last, lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TimePeriod(String);

impl TimePeriod {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label: String = label.into();
        Self(label.trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn integer(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    fn chronological_key(&self) -> Option<i64> {
        self.integer().or_else(|| self.year().map(i64::from))
    }

    /// Leading four-digit year (`"2019"`, `"2019-2020"`, `"2019Q3"` all give 2019).
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        LEADING_YEAR
            .captures(&self.0)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl Ord for TimePeriod {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.chronological_key(), other.chronological_key()) {
            (Some(a), Some(b)) => a
                .cmp(&b)
                .then_with(|| self.integer().is_none().cmp(&other.integer().is_none()))
                .then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for TimePeriod {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TimePeriod {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<i32> for TimePeriod {
    fn from(year: i32) -> Self {
        Self(year.to_string())
    }
}

/// Observed value cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ObsValue {
    Number(f64),
    /// Empty cell or an NA-style marker.
    Missing,
    /// Non-numeric text, kept verbatim until an aggregate rejects it.
    Invalid(String),
}

impl ObsValue {
    /// Classify a raw cell.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if MISSING_MARKERS
            .iter()
            .any(|marker| trimmed.eq_ignore_ascii_case(marker))
        {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Number(v),
            _ => Self::Invalid(trimmed.to_string()),
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Missing | Self::Invalid(_) => None,
        }
    }
}

impl fmt::Display for ObsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Missing => f.write_str("NA"),
            Self::Invalid(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for ObsValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(v) => serializer.serialize_f64(*v),
            Self::Missing => serializer.serialize_none(),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

/// One row of the source table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// 1-based data row in the source file (header excluded).
    #[serde(skip)]
    pub row: usize,
    pub country: String,
    pub time_period: TimePeriod,
    pub sex: String,
    pub obs_value: ObsValue,
}

impl Observation {
    #[must_use]
    pub fn new(
        country: impl Into<String>,
        time_period: impl Into<TimePeriod>,
        sex: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            row: 0,
            country: country.into(),
            time_period: time_period.into(),
            sex: sex.into(),
            obs_value: ObsValue::Number(value),
        }
    }

    #[must_use]
    pub const fn with_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: ObsValue) -> Self {
        self.obs_value = value;
        self
    }

    #[must_use]
    pub fn has_recognised_sex(&self) -> bool {
        RECOGNISED_SEXES.contains(&self.sex.as_str())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
