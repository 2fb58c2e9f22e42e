//! Per-country means and top-N rankings.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::{ObsValue, Observation};
use crate::error::{ReportError, Result};

/// Mean observed value for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryMean {
    pub country: String,
    pub mean_obs_value: f64,
    /// Number of numeric observations behind the mean.
    pub observations: usize,
}

/// A country mean with its 1-based display rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMean {
    pub rank: usize,
    pub country: String,
    pub mean_obs_value: f64,
}

/// A raw observation with its 1-based display rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedObservation {
    pub rank: usize,
    #[serde(flatten)]
    pub observation: Observation,
}

/// Numeric value of a row; `Missing` is `None`, `Invalid` is a `TypeKind` error.
fn numeric_value(obs: &Observation) -> Result<Option<f64>> {
    match &obs.obs_value {
        ObsValue::Number(v) => Ok(Some(*v)),
        ObsValue::Missing => Ok(None),
        ObsValue::Invalid(raw) => Err(ReportError::TypeKind {
            row: obs.row,
            column: "obs_value",
            value: raw.clone(),
        }),
    }
}

/// Group by country and average the numeric values.
///
/// Output is ordered by country name. Countries with no numeric value are omitted.
///
/// # Errors
/// Returns `TypeKind` on the first non-numeric `obs_value`.
pub fn country_means(rows: &[Observation]) -> Result<Vec<CountryMean>> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for obs in rows {
        if let Some(value) = numeric_value(obs)? {
            let entry = groups.entry(obs.country.as_str()).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let means = groups
        .into_iter()
        .map(|(country, (sum, count))| CountryMean {
            country: country.to_string(),
            mean_obs_value: sum / count as f64,
            observations: count,
        })
        .collect();
    Ok(means)
}

/// Highest `n` country means, descending; ties keep their input order.
#[must_use]
pub fn top_means(means: &[CountryMean], n: usize) -> Vec<RankedMean> {
    let mut ordered: Vec<&CountryMean> = means.iter().collect();
    ordered.sort_by(|a, b| b.mean_obs_value.total_cmp(&a.mean_obs_value));

    ordered
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(idx, mean)| RankedMean {
            rank: idx + 1,
            country: mean.country.clone(),
            mean_obs_value: mean.mean_obs_value,
        })
        .collect()
}

/// Highest `n` raw observations, descending; ties keep source order.
///
/// Works on individual rows, so a country can appear more than once.
/// Rows with a missing value are not ranked.
///
/// # Errors
/// Returns `TypeKind` on the first non-numeric `obs_value`.
pub fn top_observations(rows: &[Observation], n: usize) -> Result<Vec<RankedObservation>> {
    let mut valued = Vec::with_capacity(rows.len());
    for obs in rows {
        if let Some(value) = numeric_value(obs)? {
            valued.push((value, obs));
        }
    }
    valued.sort_by(|a, b| b.0.total_cmp(&a.0));

    Ok(valued
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(idx, (_, obs))| RankedObservation {
            rank: idx + 1,
            observation: obs.clone(),
        })
        .collect())
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
