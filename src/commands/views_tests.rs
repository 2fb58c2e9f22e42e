use std::fs;

use clap::Parser;

use super::*;
use crate::cli::Commands;

const CSV: &str = "country,time_period,sex,obs_value\n\
Haiti,2019,Male,10\n\
Haiti,2020,Female,20\n\
Atlantis,2020,Male,50\n";

fn views_args(cli: &Cli) -> &ViewsArgs {
    match &cli.command {
        Commands::Views(args) => args,
        _ => panic!("Expected Views command"),
    }
}

fn run_with_format(format: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.csv");
    fs::write(&input, CSV).unwrap();
    let input = input.display().to_string();
    let output = dir.path().join("views.out");
    let output_str = output.display().to_string();

    let cli = Cli::parse_from([
        "indicator-report",
        "--no-config",
        "--quiet",
        "--color",
        "never",
        "views",
        input.as_str(),
        "-f",
        format,
        "-o",
        output_str.as_str(),
        "--focus",
        "Haiti",
    ]);
    run_views_impl(views_args(&cli), &cli).unwrap();
    fs::read_to_string(&output).unwrap()
}

#[test]
fn json_output_is_parseable() {
    let content = run_with_format("json");
    assert!(content.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["summary"]["rows"], 3);
    assert_eq!(value["focus_countries"][0], "Haiti");
}

#[test]
fn json_output_is_deterministic() {
    assert_eq!(run_with_format("json"), run_with_format("json"));
}

#[test]
fn text_output_lists_unmapped_country() {
    let content = run_with_format("text");
    assert!(content.contains("Observations: 3"));
    assert!(content.contains("Atlantis"));
    assert!(content.contains("⚠"));
}

#[test]
fn html_output_matches_report() {
    let content = run_with_format("html");
    assert!(content.starts_with("<!DOCTYPE html>"));
}
