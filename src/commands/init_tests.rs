use std::path::PathBuf;

use super::*;
use crate::config::Config;

#[test]
fn template_parses_to_defaults() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.report, Config::default().report);
    assert_eq!(config.input, Config::default().input);
    assert_eq!(config.version.as_deref(), Some("1"));
}

#[test]
fn writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.toml");
    run_init_impl(&InitArgs {
        output: output.clone(),
        force: false,
    })
    .unwrap();
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("# indicator-report configuration file"));
}

#[test]
fn refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.toml");
    fs::write(&output, "keep me").unwrap();

    let err = run_init_impl(&InitArgs {
        output: output.clone(),
        force: false,
    })
    .unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
}

#[test]
fn force_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.toml");
    fs::write(&output, "old").unwrap();
    run_init_impl(&InitArgs {
        output: output.clone(),
        force: true,
    })
    .unwrap();
    assert_ne!(fs::read_to_string(&output).unwrap(), "old");
}

#[test]
fn unwritable_target_is_an_error() {
    let args = InitArgs {
        output: PathBuf::from("/nonexistent-dir-for-init/x/report.toml"),
        force: false,
    };
    assert!(run_init_impl(&args).is_err());
}
