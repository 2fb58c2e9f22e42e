use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load input file: {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("Non-numeric value '{value}' in column '{column}' at data row {row}")]
    TypeKind {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Malformed input record: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Short category name shown as the error heading.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::Load { .. } | Self::MissingColumn { .. } | Self::Csv(_) => "Load",
            Self::TypeKind { .. } => "TypeKind",
            Self::Io(_) | Self::FileAccess { .. } => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Primary one-line message, without the nested source.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::Load { path, .. } => format!("cannot read '{}'", path.display()),
            Self::MissingColumn { column, .. } => format!("missing required column '{column}'"),
            Self::TypeKind { column, value, .. } => {
                format!("non-numeric value '{value}' in column '{column}'")
            }
            Self::FileAccess { path, .. } => format!("cannot access '{}'", path.display()),
            Self::Csv(_) => "malformed input record".to_string(),
            Self::Io(_) => "I/O failure".to_string(),
            Self::TomlParse(_) => "invalid TOML".to_string(),
            Self::JsonSerialize(_) => "could not serialize derived views".to_string(),
        }
    }

    /// Underlying cause, when there is one worth printing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Config(_) => None,
            Self::Load { source, .. } | Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::MissingColumn { path, .. } => Some(format!("in {}", path.display())),
            Self::TypeKind { row, .. } => Some(format!("at data row {row}")),
            Self::Csv(e) => Some(e.to_string()),
            Self::Io(e) => Some(e.to_string()),
            Self::TomlParse(e) => Some(e.to_string()),
            Self::JsonSerialize(e) => Some(e.to_string()),
        }
    }

    /// Actionable hint for the user.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Load { .. } => Some("Check the input path, or set [input].path in the config"),
            Self::MissingColumn { .. } => {
                Some("The header must contain: country, time_period, sex, obs_value")
            }
            Self::TypeKind { .. } => {
                Some("Clean the obs_value column; empty cells and NA are treated as missing")
            }
            Self::Csv(_) => Some("Check the delimiter setting and quoting of the input file"),
            Self::TomlParse(_) | Self::Config(_) => {
                Some("Run 'indicator-report init --force' to regenerate a valid template")
            }
            Self::Io(_) | Self::FileAccess { .. } | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
