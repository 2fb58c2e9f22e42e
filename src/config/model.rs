use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::pipeline::{
    CountryFilter, DEFAULT_FOCUS_COUNTRIES, DEFAULT_TOP_N, DEFAULT_TOP_RAW_N, PipelineOptions,
};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_TITLE: &str = "Indicator Report";
pub const DEFAULT_INDICATOR: &str = "obs_value";
pub const DEFAULT_PIE_FRAMES: usize = 12;
/// Upper bound on animation frames; one per degree.
pub const MAX_PIE_FRAMES: usize = 360;

/// Which ranking feeds the rotating donut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieSource {
    /// Top-N countries by mean value.
    #[default]
    Top10,
    /// Top raw observations.
    Top5,
}

impl PieSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top10 => "top10",
            Self::Top5 => "top5",
        }
    }
}

impl FromStr for PieSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top10" | "top-10" | "means" => Ok(Self::Top10),
            "top5" | "top-5" | "raw" => Ok(Self::Top5),
            _ => Err(format!("Unknown pie source: {s} (expected top10 or top5)")),
        }
    }
}

/// `[input]`: where and how to read the source table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    /// Default input file when none is given on the command line.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Field delimiter, a single ASCII character. `"\t"` selects tabs.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: default_delimiter(),
        }
    }
}

impl InputConfig {
    /// The delimiter as the byte the CSV reader expects.
    ///
    /// # Errors
    /// Returns a config error unless the delimiter is exactly one ASCII character.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() && *b != b'"' && *b != b'\n' => Ok(*b),
            _ => Err(ReportError::Config(format!(
                "input.delimiter must be a single ASCII character, got '{}'",
                self.delimiter.escape_default()
            ))),
        }
    }
}

/// `[report]`: what the document contains.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    /// Label for the observed value in axes and prose.
    #[serde(default = "default_indicator")]
    pub indicator: String,

    /// Size of the ranking over country means.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Size of the ranking over raw observations.
    #[serde(default = "default_top_raw_n")]
    pub top_raw_n: usize,

    /// Countries in the scatter/trend selection.
    #[serde(default = "default_focus_countries")]
    pub focus_countries: Vec<String>,

    #[serde(default)]
    pub pie_source: PieSource,

    /// Rotation frames for the donut animation.
    #[serde(default = "default_pie_frames")]
    pub pie_frames: usize,

    /// Default output path for the HTML document.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            indicator: default_indicator(),
            top_n: DEFAULT_TOP_N,
            top_raw_n: DEFAULT_TOP_RAW_N,
            focus_countries: default_focus_countries(),
            pie_source: PieSource::default(),
            pie_frames: DEFAULT_PIE_FRAMES,
            output: None,
        }
    }
}

impl ReportConfig {
    /// Pipeline knobs derived from this section.
    #[must_use]
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            top_n: self.top_n,
            top_raw_n: self.top_raw_n,
            focus: CountryFilter::new(&self.focus_countries),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Check semantic constraints serde cannot express.
    ///
    /// # Errors
    /// Returns a config error naming the first offending setting.
    pub fn validate(&self) -> Result<()> {
        if let Some(v) = &self.version
            && v != CONFIG_VERSION
        {
            return Err(ReportError::Config(format!(
                "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }
        self.input.delimiter_byte()?;
        if self.report.top_n == 0 {
            return Err(ReportError::Config("report.top_n must be at least 1".into()));
        }
        if self.report.top_raw_n == 0 {
            return Err(ReportError::Config(
                "report.top_raw_n must be at least 1".into(),
            ));
        }
        if !(1..=MAX_PIE_FRAMES).contains(&self.report.pie_frames) {
            return Err(ReportError::Config(format!(
                "report.pie_frames must be between 1 and {MAX_PIE_FRAMES}, got {}",
                self.report.pie_frames
            )));
        }
        Ok(())
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_indicator() -> String {
    DEFAULT_INDICATOR.to_string()
}

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

const fn default_top_raw_n() -> usize {
    DEFAULT_TOP_RAW_N
}

fn default_focus_countries() -> Vec<String> {
    DEFAULT_FOCUS_COUNTRIES.iter().map(ToString::to_string).collect()
}

const fn default_pie_frames() -> usize {
    DEFAULT_PIE_FRAMES
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
