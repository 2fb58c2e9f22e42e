use super::*;
use crate::dataset::ObsValue;

#[test]
fn example_selects_latest_rows() {
    let rows = vec![
        Observation::new("A", 2019, "Male", 10.0),
        Observation::new("A", 2020, "Male", 20.0),
        Observation::new("B", 2020, "Female", 50.0),
    ];
    let latest = latest_per_country(&rows);

    let got: Vec<&Observation> = latest.iter().map(|l| &l.observation).collect();
    assert_eq!(got, vec![&rows[1], &rows[2]]);
    assert!(latest.iter().all(|l| !l.is_ambiguous()));
}

#[test]
fn source_order_does_not_matter() {
    let rows = vec![
        Observation::new("Haiti", 2021, "Male", 3.0),
        Observation::new("Haiti", 2015, "Male", 1.0),
        Observation::new("Haiti", 2018, "Male", 2.0),
    ];
    let latest = latest_per_country(&rows);
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].observation.time_period.as_str(), "2021");
}

#[test]
fn mixed_period_labels_pick_chronological_latest() {
    let rows = vec![
        Observation::new("A", "2019Q3", "Male", 1.0),
        Observation::new("A", "2020", "Male", 2.0),
        Observation::new("B", "2019-2020", "Female", 3.0),
        Observation::new("B", "2021", "Female", 4.0),
    ];
    let latest = latest_per_country(&rows);

    let periods: Vec<(&str, &str)> = latest
        .iter()
        .map(|l| {
            (
                l.observation.country.as_str(),
                l.observation.time_period.as_str(),
            )
        })
        .collect();
    assert_eq!(periods, vec![("A", "2020"), ("B", "2021")]);
}

#[test]
fn one_row_per_country_with_max_period() {
    let rows = vec![
        Observation::new("Kenya", 2010, "Male", 1.0),
        Observation::new("Chad", 2012, "Female", 2.0),
        Observation::new("Kenya", 2016, "Female", 3.0),
        Observation::new("Chad", 2011, "Male", 4.0),
        Observation::new("Kenya", 2013, "Male", 5.0),
    ];
    let latest = latest_per_country(&rows);

    assert_eq!(latest.len(), 2);
    for entry in &latest {
        let max = rows
            .iter()
            .filter(|r| r.country == entry.observation.country)
            .map(|r| &r.time_period)
            .max()
            .unwrap();
        assert_eq!(&entry.observation.time_period, max);
    }
    // Ordered by country
    assert_eq!(latest[0].observation.country, "Chad");
    assert_eq!(latest[1].observation.country, "Kenya");
}

#[test]
fn tie_at_latest_period_keeps_last_source_row() {
    let rows = vec![
        Observation::new("Nigeria", 2020, "Female", 7.0),
        Observation::new("Nigeria", 2019, "Male", 1.0),
        Observation::new("Nigeria", 2020, "Male", 9.0),
    ];
    let latest = latest_per_country(&rows);

    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].observation.sex, "Male");
    assert_eq!(latest[0].observation.obs_value, ObsValue::Number(9.0));
    assert_eq!(latest[0].ties, 2);
    assert!(latest[0].is_ambiguous());
}

#[test]
fn other_sex_values_pass_through() {
    let rows = vec![Observation::new("Chad", 2020, "Total", 4.0)];
    let latest = latest_per_country(&rows);
    assert_eq!(latest[0].observation.sex, "Total");
}

#[test]
fn empty_input() {
    assert!(latest_per_country(&[]).is_empty());
}

#[test]
fn serializes_flat_with_ties() {
    let rows = vec![Observation::new("A", 2020, "Male", 20.0)];
    let json = serde_json::to_string(&latest_per_country(&rows)).unwrap();
    assert_eq!(
        json,
        r#"[{"country":"A","time_period":"2020","sex":"Male","obs_value":20.0,"ties":1}]"#
    );
}
