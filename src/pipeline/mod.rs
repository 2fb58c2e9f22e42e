//! Data-preparation pipeline: derives every chart view from one loaded table.
//!
//! Each derivation is a pure function of the immutable [`Dataset`]; the
//! results are bundled in [`DerivedViews`] for the formatters to consume.

mod aggregate;
mod filter;
mod geo;
mod latest;
mod regression;
mod series;

use std::fmt;

use serde::Serialize;

use crate::dataset::{Dataset, Observation};
use crate::error::Result;

pub use aggregate::{
    CountryMean, RankedMean, RankedObservation, country_means, top_means, top_observations,
};
pub use filter::{CountryFilter, DEFAULT_FOCUS_COUNTRIES};
pub use geo::{MapJoin, MapValue, join_map};
pub use latest::{LatestObservation, latest_per_country};
pub use regression::{Trendline, fit_ols, pooled_trend, trend_points};
pub use series::{Series, SeriesIter, SeriesPoint, partition_series};

pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_TOP_RAW_N: usize = 5;

/// Knobs for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Size of the ranking over country means.
    pub top_n: usize,
    /// Size of the ranking over raw observations.
    pub top_raw_n: usize,
    pub focus: CountryFilter,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            top_raw_n: DEFAULT_TOP_RAW_N,
            focus: CountryFilter::default(),
        }
    }
}

/// Non-fatal conditions surfaced alongside the derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportWarning {
    /// The focus selection matched no rows.
    EmptySelection { countries: Vec<String> },
    /// The focus selection had too few usable points for a trendline.
    NoTrendline { usable_points: usize },
    /// A country name has no map region.
    UnresolvedCountry { country: String },
    /// Countries where several rows shared the latest period; one was picked.
    AmbiguousLatest { countries: Vec<String> },
}

impl fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySelection { countries } => write!(
                f,
                "focus selection [{}] matched no rows",
                countries.join(", ")
            ),
            Self::NoTrendline { usable_points } => write!(
                f,
                "trendline needs two distinct years, found {usable_points} usable point(s)"
            ),
            Self::UnresolvedCountry { country } => {
                write!(f, "country '{country}' has no map region and is omitted")
            }
            Self::AmbiguousLatest { countries } => write!(
                f,
                "{} country(ies) have several rows at their latest period; the last row in source order is used",
                countries.len()
            ),
        }
    }
}

/// Dataset-level facts for the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub countries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_period: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fingerprint: String,
}

impl DatasetSummary {
    fn from_dataset(dataset: &Dataset) -> Self {
        let (first_period, last_period) = dataset.period_range().map_or((None, None), |(a, b)| {
            (Some(a.to_string()), Some(b.to_string()))
        });
        Self {
            rows: dataset.len(),
            countries: dataset.countries().len(),
            first_period,
            last_period,
            fingerprint: dataset.fingerprint().to_string(),
        }
    }
}

/// Everything the charts and narrative consume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedViews {
    pub summary: DatasetSummary,
    pub country_means: Vec<CountryMean>,
    pub top_means: Vec<RankedMean>,
    pub top_observations: Vec<RankedObservation>,
    pub latest: Vec<LatestObservation>,
    pub series: Vec<Series>,
    pub focus_countries: Vec<String>,
    pub focus_rows: Vec<Observation>,
    pub trendline: Option<Trendline>,
    pub map: MapJoin,
    pub warnings: Vec<ReportWarning>,
}

impl DerivedViews {
    /// Run every derivation over `dataset`.
    ///
    /// # Errors
    /// Returns `TypeKind` if an aggregate meets a non-numeric value; no
    /// partial views are produced.
    pub fn derive(dataset: &Dataset, options: &PipelineOptions) -> Result<Self> {
        let rows = dataset.rows();

        let means = country_means(rows)?;
        let top_means = top_means(&means, options.top_n);
        let top_observations = top_observations(rows, options.top_raw_n)?;
        let latest = latest_per_country(rows);
        let series: Vec<Series> = partition_series(rows).collect();
        let focus_rows = options.focus.apply(rows);
        let trendline = pooled_trend(&focus_rows);
        let map = join_map(&latest);

        let focus_countries: Vec<String> = options.focus.countries().map(String::from).collect();
        let warnings =
            Self::collect_warnings(&focus_countries, &focus_rows, trendline, &latest, &map);
        for warning in &warnings {
            tracing::debug!(%warning, "pipeline warning");
        }
        tracing::info!(
            rows = rows.len(),
            countries = means.len(),
            series = series.len(),
            focus_rows = focus_rows.len(),
            "derived report views"
        );

        Ok(Self {
            summary: DatasetSummary::from_dataset(dataset),
            country_means: means,
            top_means,
            top_observations,
            latest,
            series,
            focus_countries,
            focus_rows,
            trendline,
            map,
            warnings,
        })
    }

    fn collect_warnings(
        focus_countries: &[String],
        focus_rows: &[Observation],
        trendline: Option<Trendline>,
        latest: &[LatestObservation],
        map: &MapJoin,
    ) -> Vec<ReportWarning> {
        let mut warnings = Vec::new();
        if focus_rows.is_empty() {
            warnings.push(ReportWarning::EmptySelection {
                countries: focus_countries.to_vec(),
            });
        } else if trendline.is_none() {
            warnings.push(ReportWarning::NoTrendline {
                usable_points: trend_points(focus_rows).len(),
            });
        }
        let ambiguous: Vec<String> = latest
            .iter()
            .filter(|l| l.is_ambiguous())
            .map(|l| l.observation.country.clone())
            .collect();
        if !ambiguous.is_empty() {
            warnings.push(ReportWarning::AmbiguousLatest {
                countries: ambiguous,
            });
        }
        warnings.extend(
            map.unresolved
                .iter()
                .map(|country| ReportWarning::UnresolvedCountry {
                    country: country.clone(),
                }),
        );
        warnings
    }

    /// Serialize to pretty JSON; identical input gives identical bytes.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
