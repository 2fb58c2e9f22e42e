#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the indicator-report binary.
#[macro_export]
macro_rules! indicator_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("indicator-report"))
    };
}

pub const HEADER: &str = "country,time_period,sex,obs_value\n";

/// A small table touching every view: two focus countries, an unmapped
/// name and a missing value.
pub const SAMPLE_CSV: &str = "country,time_period,sex,obs_value\n\
Haiti,2015,Male,21.5\n\
Haiti,2018,Female,23.0\n\
Nigeria,2016,Male,36.8\n\
Nigeria,2019,Total,35.1\n\
Kenya,2017,Female,\n\
Kenya,2014,Male,26.0\n\
Atlantis,2020,Total,12.0\n";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes the sample table as `data.csv`.
    pub fn create_sample(&self) -> PathBuf {
        self.create_file("data.csv", SAMPLE_CSV)
    }

    /// Creates a local indicator-report config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".indicator-report.toml", content);
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
