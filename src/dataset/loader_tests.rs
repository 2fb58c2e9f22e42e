//! Tests for the delimited-file loader.

use std::path::Path;

use tempfile::TempDir;

use super::*;

const SAMPLE: &str = "\
country,time_period,sex,obs_value,unit
Cameroon,2019,Male,10.5,PCT
Cameroon,2020,Female,,PCT
Haiti,2020,Male,NA,PCT
";

fn parse(content: &str) -> Result<Dataset> {
    DatasetLoader::new().parse(content.as_bytes(), Path::new("sample.csv"))
}

#[test]
fn parses_rows_with_extra_columns() {
    let dataset = parse(SAMPLE).unwrap();
    assert_eq!(dataset.len(), 3);

    let first = &dataset.rows()[0];
    assert_eq!(first.row, 1);
    assert_eq!(first.country, "Cameroon");
    assert_eq!(first.time_period.as_str(), "2019");
    assert_eq!(first.sex, "Male");
    assert_eq!(first.obs_value, ObsValue::Number(10.5));
}

#[test]
fn empty_and_na_cells_are_missing() {
    let dataset = parse(SAMPLE).unwrap();
    assert_eq!(dataset.rows()[1].obs_value, ObsValue::Missing);
    assert_eq!(dataset.rows()[2].obs_value, ObsValue::Missing);
}

#[test]
fn non_numeric_values_load_as_invalid() {
    let dataset = parse("country,time_period,sex,obs_value\nKenya,2020,Male,high\n").unwrap();
    assert_eq!(
        dataset.rows()[0].obs_value,
        ObsValue::Invalid("high".to_string())
    );
}

#[test]
fn header_matching_ignores_case_and_order() {
    let content = "OBS_VALUE, SEX ,Country,TIME_PERIOD\n3.5,Female,Nigeria,2018\n";
    let dataset = parse(content).unwrap();
    let row = &dataset.rows()[0];
    assert_eq!(row.country, "Nigeria");
    assert_eq!(row.sex, "Female");
    assert_eq!(row.obs_value, ObsValue::Number(3.5));
}

#[test]
fn missing_column_is_reported() {
    let err = parse("country,time_period,obs_value\nA,2020,1\n").unwrap_err();
    match err {
        ReportError::MissingColumn { column, path } => {
            assert_eq!(column, "sex");
            assert_eq!(path, Path::new("sample.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ragged_record_is_a_csv_error() {
    let err = parse("country,time_period,sex,obs_value\nA,2020,Male\n").unwrap_err();
    assert!(matches!(err, ReportError::Csv(_)));
}

#[test]
fn header_only_file_yields_empty_dataset() {
    let dataset = parse("country,time_period,sex,obs_value\n").unwrap();
    assert!(dataset.is_empty());
    assert!(dataset.period_range().is_none());
}

#[test]
fn custom_delimiter() {
    let dataset = DatasetLoader::new()
        .with_delimiter(b';')
        .parse(
            b"country;time_period;sex;obs_value\nHaiti;2017;Male;2,5\n",
            Path::new("semi.csv"),
        )
        .unwrap();
    // Decimal commas are not numbers
    assert_eq!(
        dataset.rows()[0].obs_value,
        ObsValue::Invalid("2,5".to_string())
    );
}

#[test]
fn load_missing_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let err = DatasetLoader::new()
        .load(&dir.path().join("absent.csv"))
        .unwrap_err();
    assert!(matches!(err, ReportError::Load { .. }));
    assert_eq!(err.error_type(), "Load");
}

#[test]
fn load_records_fingerprint() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::write(&path, SAMPLE).unwrap();

    let dataset = DatasetLoader::new().load(&path).unwrap();
    assert_eq!(dataset.fingerprint().len(), 64);

    let again = DatasetLoader::new().load(&path).unwrap();
    assert_eq!(dataset.fingerprint(), again.fingerprint());
}

#[test]
fn countries_keep_first_appearance_order() {
    let dataset = parse(SAMPLE).unwrap();
    let countries: Vec<&str> = dataset.countries().into_iter().collect();
    assert_eq!(countries, vec!["Cameroon", "Haiti"]);
}
