use super::*;
use crate::dataset::Observation;

fn example_rows() -> Vec<Observation> {
    vec![
        Observation::new("A", 2019, "Male", 10.0).with_row(1),
        Observation::new("A", 2020, "Male", 20.0).with_row(2),
        Observation::new("B", 2020, "Female", 50.0).with_row(3),
    ]
}

mod country_means_tests {
    use super::*;

    #[test]
    fn averages_per_country() {
        let means = country_means(&example_rows()).unwrap();
        assert_eq!(means.len(), 2);
        assert_eq!(means[0].country, "A");
        assert!((means[0].mean_obs_value - 15.0).abs() < f64::EPSILON);
        assert_eq!(means[0].observations, 2);
        assert_eq!(means[1].country, "B");
        assert!((means[1].mean_obs_value - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_yields_empty_result() {
        assert!(country_means(&[]).unwrap().is_empty());
    }

    #[test]
    fn missing_values_are_dropped() {
        let rows = vec![
            Observation::new("A", 2019, "Male", 10.0),
            Observation::new("A", 2020, "Male", 0.0).with_value(ObsValue::Missing),
            Observation::new("C", 2020, "Male", 0.0).with_value(ObsValue::Missing),
        ];
        let means = country_means(&rows).unwrap();
        assert_eq!(means.len(), 1);
        assert!((means[0].mean_obs_value - 10.0).abs() < f64::EPSILON);
        assert_eq!(means[0].observations, 1);
    }

    #[test]
    fn non_numeric_value_is_type_error() {
        let rows = vec![
            Observation::new("A", 2019, "Male", 10.0).with_row(1),
            Observation::new("A", 2020, "Male", 0.0)
                .with_row(2)
                .with_value(ObsValue::Invalid("ten".to_string())),
        ];
        let err = country_means(&rows).unwrap_err();
        match err {
            ReportError::TypeKind { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "obs_value");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

mod top_means_tests {
    use super::*;

    #[test]
    fn example_ranking() {
        let means = country_means(&example_rows()).unwrap();
        let top = top_means(&means, 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[0].country, "B");
        assert!((top[0].mean_obs_value - 50.0).abs() < f64::EPSILON);
        assert_eq!(top[1].rank, 2);
        assert_eq!(top[1].country, "A");
    }

    #[test]
    fn truncates_to_n_sorted_descending_without_duplicates() {
        #[allow(clippy::cast_precision_loss)]
        let rows: Vec<Observation> = (0..15)
            .flat_map(|i| {
                let country = format!("C{i:02}");
                [
                    Observation::new(country.clone(), 2019, "Male", i as f64),
                    Observation::new(country, 2020, "Female", i as f64 + 1.0),
                ]
            })
            .collect();
        let means = country_means(&rows).unwrap();
        let top = top_means(&means, 10);

        assert_eq!(top.len(), 10);
        assert!(
            top.windows(2)
                .all(|w| w[0].mean_obs_value >= w[1].mean_obs_value)
        );
        let mut countries: Vec<&str> = top.iter().map(|t| t.country.as_str()).collect();
        countries.sort_unstable();
        countries.dedup();
        assert_eq!(countries.len(), 10);
        assert_eq!(top[0].country, "C14");
    }

    #[test]
    fn ties_keep_input_order() {
        let means = vec![
            CountryMean {
                country: "X".to_string(),
                mean_obs_value: 5.0,
                observations: 1,
            },
            CountryMean {
                country: "Y".to_string(),
                mean_obs_value: 5.0,
                observations: 1,
            },
        ];
        let top = top_means(&means, 10);
        assert_eq!(top[0].country, "X");
        assert_eq!(top[1].country, "Y");
    }
}

mod top_observations_tests {
    use super::*;

    #[test]
    fn ranks_raw_rows_not_means() {
        let rows = vec![
            Observation::new("A", 2018, "Male", 90.0),
            Observation::new("A", 2019, "Male", 1.0),
            Observation::new("A", 2020, "Male", 1.0),
            Observation::new("B", 2020, "Female", 50.0),
        ];
        let top = top_observations(&rows, 5).unwrap();
        // A's single spike outranks B even though B has the higher mean
        assert_eq!(top[0].observation.country, "A");
        assert!((top[0].observation.obs_value.as_f64().unwrap() - 90.0).abs() < f64::EPSILON);
        assert_eq!(top[1].observation.country, "B");
        assert_eq!(top.len(), 4);
    }

    #[test]
    fn allows_duplicate_countries_and_caps_at_n() {
        let rows: Vec<Observation> = (0..8)
            .map(|i| Observation::new("Kenya", 2010 + i, "Male", f64::from(i)))
            .collect();
        let top = top_observations(&rows, 5).unwrap();
        assert_eq!(top.len(), 5);
        assert!(top.iter().all(|t| t.observation.country == "Kenya"));
        let ranks: Vec<usize> = top.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
        assert_eq!(top[0].observation.time_period.as_str(), "2017");
    }

    #[test]
    fn missing_rows_are_not_ranked() {
        let rows = vec![
            Observation::new("A", 2019, "Male", 0.0).with_value(ObsValue::Missing),
            Observation::new("B", 2019, "Male", 3.0),
        ];
        let top = top_observations(&rows, 5).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].observation.country, "B");
    }

    #[test]
    fn invalid_value_fails() {
        let rows =
            vec![Observation::new("A", 2019, "Male", 0.0).with_value(ObsValue::Invalid("?".into()))];
        assert!(matches!(
            top_observations(&rows, 5),
            Err(ReportError::TypeKind { .. })
        ));
    }
}
