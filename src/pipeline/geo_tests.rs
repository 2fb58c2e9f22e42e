use super::*;
use crate::dataset::{ObsValue, Observation};
use crate::pipeline::latest_per_country;

#[test]
fn resolves_known_countries() {
    let rows = vec![
        Observation::new("Haiti", 2020, "Male", 4.0),
        Observation::new("Atlantis", 2020, "Male", 9.0),
        Observation::new("Côte d'Ivoire", 2019, "Female", 2.5),
    ];
    let join = join_map(&latest_per_country(&rows));

    let codes: Vec<&str> = join.values.iter().map(|v| v.iso3).collect();
    assert_eq!(codes, vec!["CIV", "HTI"]);
    assert_eq!(join.values[1].time_period, "2020");
    assert!((join.values[1].obs_value - 4.0).abs() < f64::EPSILON);
    assert_eq!(join.unresolved, vec!["Atlantis".to_string()]);
}

#[test]
fn missing_latest_values_are_not_mapped() {
    let rows =
        vec![Observation::new("Chad", 2020, "Male", 0.0).with_value(ObsValue::Missing)];
    let join = join_map(&latest_per_country(&rows));
    assert!(join.values.is_empty());
    assert!(join.unresolved.is_empty());
}

#[test]
fn empty_input_gives_empty_join() {
    assert_eq!(join_map(&[]), MapJoin::default());
}
