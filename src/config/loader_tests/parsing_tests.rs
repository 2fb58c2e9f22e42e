//! Explicit paths, parse failures and validation.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

#[test]
fn load_from_explicit_path() {
    let fs = MockFileSystem::new().with_file(
        "/etc/report.toml",
        "version = \"1\"\n[input]\ndelimiter = \";\"\n",
    );
    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/report.toml"))
        .unwrap();
    assert_eq!(config.input.delimiter, ";");
}

#[test]
fn unreadable_path_is_file_access_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader
        .load_from_path(Path::new("/nowhere/report.toml"))
        .unwrap_err();
    assert_eq!(err.error_type(), "IO");
    assert!(err.message().contains("/nowhere/report.toml"));
}

#[test]
fn invalid_toml_is_config_error() {
    let fs = MockFileSystem::new().with_file("/project/.indicator-report.toml", "[report\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn validation_runs_after_parse() {
    let fs = MockFileSystem::new().with_file(
        "/project/.indicator-report.toml",
        "[report]\npie_frames = 0\n",
    );
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(err.to_string().contains("pie_frames"));
}

#[test]
fn unknown_keys_are_ignored() {
    let fs = MockFileSystem::new().with_file(
        "/project/.indicator-report.toml",
        "[report]\nfuture_option = true\ntop_raw_n = 2\n",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.report.top_raw_n, 2);
}
