//! Exact-match country selection for focused trend comparison.

use indexmap::IndexSet;

use crate::dataset::Observation;

/// Countries compared in the trend view when none are configured.
pub const DEFAULT_FOCUS_COUNTRIES: [&str; 4] = ["Cameroon", "Ethiopia", "Haiti", "Nigeria"];

/// Selects rows whose country is one of a fixed set of names.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryFilter {
    countries: IndexSet<String>,
}

impl Default for CountryFilter {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_COUNTRIES)
    }
}

impl CountryFilter {
    #[must_use]
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }

    /// Configured names in configuration order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, country: &str) -> bool {
        self.countries.contains(country)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Matching rows in source order.
    #[must_use]
    pub fn apply(&self, rows: &[Observation]) -> Vec<Observation> {
        rows.iter()
            .filter(|r| self.contains(&r.country))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
