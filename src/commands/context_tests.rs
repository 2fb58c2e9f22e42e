use std::path::PathBuf;

use super::*;
use crate::config::LOCAL_CONFIG_NAME;

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn verbosity_sets_log_level() {
    assert_eq!(log_level(0, false), "warn");
    assert_eq!(log_level(1, false), "info");
    assert_eq!(log_level(2, false), "debug");
    assert_eq!(log_level(5, false), "debug");
    assert_eq!(log_level(2, true), "error");
}

#[test]
fn no_config_returns_defaults() {
    let config = load_config(Some(Path::new("/does/not/exist.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn explicit_config_path_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(LOCAL_CONFIG_NAME);
    fs::write(&path, "[report]\ntitle = \"From file\"\n").unwrap();
    let config = load_config(Some(&path), false).unwrap();
    assert_eq!(config.report.title, "From file");
}

#[test]
fn missing_explicit_config_is_an_error() {
    let err = load_config(Some(Path::new("/does/not/exist.toml")), false).unwrap_err();
    assert_eq!(err.error_type(), "IO");
}

#[test]
fn cli_input_wins_over_config() {
    let mut config = Config::default();
    config.input.path = Some(PathBuf::from("from-config.csv"));
    let path = resolve_input(Some(Path::new("cli.csv")), &config).unwrap();
    assert_eq!(path, PathBuf::from("cli.csv"));
    let path = resolve_input(None, &config).unwrap();
    assert_eq!(path, PathBuf::from("from-config.csv"));
}

#[test]
fn missing_input_is_config_error() {
    let err = resolve_input(None, &Config::default()).unwrap_err();
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn focus_override_trims_and_drops_blanks() {
    let mut config = Config::default();
    let focus = vec![" Chad".to_string(), String::new(), "Mali ".to_string()];
    apply_focus(&mut config, Some(&focus));
    assert_eq!(config.report.focus_countries, vec!["Chad", "Mali"]);

    let before = config.report.focus_countries.clone();
    apply_focus(&mut config, None);
    assert_eq!(config.report.focus_countries, before);
}

#[test]
fn derive_views_uses_configured_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.tsv");
    fs::write(
        &path,
        "country\ttime_period\tsex\tobs_value\nHaiti\t2020\tMale\t4.5\n",
    )
    .unwrap();
    let mut config = Config::default();
    config.input.delimiter = "\t".to_string();

    let views = derive_views(&path, &config).unwrap();
    assert_eq!(views.summary.rows, 1);
    assert_eq!(views.top_means[0].country, "Haiti");
}

#[test]
fn chart_options_follow_report_config() {
    let mut config = Config::default();
    config.report.indicator = "rate".to_string();
    config.report.pie_frames = 6;
    let options = chart_options(&config);
    assert_eq!(options.indicator, "rate");
    assert_eq!(options.pie_frames, 6);
}

#[test]
fn write_output_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/deeper/report.html");
    write_output(Some(&path), "<html></html>", true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
}
