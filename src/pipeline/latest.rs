//! Most recent observation per country.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::Observation;

/// The latest row for a country.
///
/// When several rows share the latest period (typically one per sex), the one
/// occurring last in source order wins and `ties` counts how many competed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestObservation {
    #[serde(flatten)]
    pub observation: Observation,
    pub ties: usize,
}

impl LatestObservation {
    #[must_use]
    pub const fn is_ambiguous(&self) -> bool {
        self.ties > 1
    }
}

/// Pick each country's row with the greatest `time_period`, ordered by country.
#[must_use]
pub fn latest_per_country(rows: &[Observation]) -> Vec<LatestObservation> {
    let mut ordered: Vec<&Observation> = rows.iter().collect();
    ordered.sort_by(|a, b| a.time_period.cmp(&b.time_period));

    let mut latest: BTreeMap<&str, (&Observation, usize)> = BTreeMap::new();
    for obs in ordered {
        latest
            .entry(obs.country.as_str())
            .and_modify(|(current, ties)| {
                if current.time_period == obs.time_period {
                    *ties += 1;
                } else {
                    *ties = 1;
                }
                *current = obs;
            })
            .or_insert((obs, 1));
    }

    latest
        .into_values()
        .map(|(obs, ties)| LatestObservation {
            observation: obs.clone(),
            ties,
        })
        .collect()
}

#[cfg(test)]
#[path = "latest_tests.rs"]
mod tests;
