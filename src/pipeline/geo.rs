//! Joins latest values to map regions through the gazetteer.

use serde::Serialize;

use crate::gazetteer;

use super::LatestObservation;

/// A latest value placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapValue {
    pub country: String,
    pub iso3: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub time_period: String,
    pub obs_value: f64,
}

/// Result of joining the latest values to the gazetteer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapJoin {
    pub values: Vec<MapValue>,
    /// Country names with no map region, in input order.
    pub unresolved: Vec<String>,
}

/// Resolve every latest value with a numeric observation to a map region.
///
/// Countries whose latest row is missing a value are skipped silently; the
/// map only encodes numbers.
#[must_use]
pub fn join_map(latest: &[LatestObservation]) -> MapJoin {
    let mut join = MapJoin::default();
    for entry in latest {
        let obs = &entry.observation;
        let Some(value) = obs.obs_value.as_f64() else {
            continue;
        };
        match gazetteer::resolve(&obs.country) {
            Some(region) => join.values.push(MapValue {
                country: obs.country.clone(),
                iso3: region.iso3,
                lat: region.lat,
                lon: region.lon,
                time_period: obs.time_period.to_string(),
                obs_value: value,
            }),
            None => join.unresolved.push(obs.country.clone()),
        }
    }
    join
}

#[cfg(test)]
#[path = "geo_tests.rs"]
mod tests;
