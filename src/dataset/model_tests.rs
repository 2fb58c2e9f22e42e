//! Tests for the observation model.

use super::*;

mod time_period_tests {
    use super::*;

    #[test]
    fn integer_labels_order_numerically() {
        let mut periods = vec![
            TimePeriod::new("2010"),
            TimePeriod::new("999"),
            TimePeriod::new("2009"),
        ];
        periods.sort();
        let labels: Vec<&str> = periods.iter().map(TimePeriod::as_str).collect();
        assert_eq!(labels, vec!["999", "2009", "2010"]);
    }

    #[test]
    fn mixed_labels_order_chronologically() {
        let mut periods = vec![
            TimePeriod::new("2021"),
            TimePeriod::new("2019Q3"),
            TimePeriod::new("2020"),
            TimePeriod::new("2019-2020"),
            TimePeriod::new("2019"),
            TimePeriod::new("2019Q1"),
        ];
        periods.sort();
        let labels: Vec<&str> = periods.iter().map(TimePeriod::as_str).collect();
        assert_eq!(
            labels,
            vec!["2019", "2019-2020", "2019Q1", "2019Q3", "2020", "2021"]
        );
    }

    #[test]
    fn labels_without_year_sort_last() {
        assert!(TimePeriod::new("2021") < TimePeriod::new("Q3"));
        assert!(TimePeriod::new("2019Q3") < TimePeriod::new("latest"));
        assert!(TimePeriod::new("Q1") < TimePeriod::new("Q2"));
    }

    #[test]
    fn label_is_trimmed() {
        assert_eq!(TimePeriod::new(" 2015 ").as_str(), "2015");
    }

    #[test]
    fn year_extracts_leading_four_digits() {
        assert_eq!(TimePeriod::new("2019").year(), Some(2019));
        assert_eq!(TimePeriod::new("2019-2020").year(), Some(2019));
        assert_eq!(TimePeriod::new("2019Q3").year(), Some(2019));
    }

    #[test]
    fn year_absent_for_non_year_labels() {
        assert_eq!(TimePeriod::new("Q3").year(), None);
        assert_eq!(TimePeriod::new("20190").year(), None);
        assert_eq!(TimePeriod::new("").year(), None);
    }
}

mod obs_value_tests {
    use super::*;

    #[test]
    fn parses_numbers() {
        assert_eq!(ObsValue::parse("12.5"), ObsValue::Number(12.5));
        assert_eq!(ObsValue::parse(" 3 "), ObsValue::Number(3.0));
        assert_eq!(ObsValue::parse("-0.25"), ObsValue::Number(-0.25));
    }

    #[test]
    fn missing_markers_are_case_insensitive() {
        for raw in ["", "  ", "NA", "n/a", "NaN", "null", ".."] {
            assert_eq!(ObsValue::parse(raw), ObsValue::Missing, "raw={raw:?}");
        }
    }

    #[test]
    fn text_is_invalid() {
        assert_eq!(
            ObsValue::parse("high"),
            ObsValue::Invalid("high".to_string())
        );
        assert_eq!(ObsValue::parse("inf"), ObsValue::Invalid("inf".to_string()));
    }

    #[test]
    fn serializes_missing_as_null() {
        let json = serde_json::to_string(&vec![
            ObsValue::Number(1.5),
            ObsValue::Missing,
            ObsValue::Invalid("x".to_string()),
        ])
        .unwrap();
        assert_eq!(json, r#"[1.5,null,"x"]"#);
    }
}

mod observation_tests {
    use super::*;

    #[test]
    fn recognised_sex_is_exact_match() {
        assert!(Observation::new("A", 2020, "Male", 1.0).has_recognised_sex());
        assert!(Observation::new("A", 2020, "Female", 1.0).has_recognised_sex());
        assert!(!Observation::new("A", 2020, "Total", 1.0).has_recognised_sex());
        assert!(!Observation::new("A", 2020, "male", 1.0).has_recognised_sex());
    }

    #[test]
    fn serialization_skips_row_number() {
        let obs = Observation::new("Haiti", 2018, "Female", 4.0).with_row(12);
        let json = serde_json::to_string(&obs).unwrap();
        assert_eq!(
            json,
            r#"{"country":"Haiti","time_period":"2018","sex":"Female","obs_value":4.0}"#
        );
    }
}
