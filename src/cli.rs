use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::PieSource;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "indicator-report")]
#[command(
    author,
    version,
    about = "Turn a per-country indicator table into a charted HTML report"
)]
#[command(long_about = "Loads a delimited table of country, time_period, sex and obs_value \
    columns, derives rankings, latest values, series and a pooled trendline, and renders \
    them as a self-contained HTML report.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase diagnostic verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the HTML report
    Report(ReportArgs),

    /// Print the derived views as text or JSON
    Views(ViewsArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Input table (defaults to [input].path from the config)
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report title (overrides config)
    #[arg(long)]
    pub title: Option<String>,

    /// Focus countries for the trend view (comma-separated, exact names)
    #[arg(long, value_delimiter = ',')]
    pub focus: Option<Vec<String>>,

    /// Ranking shown in the donut: top10 or top5
    #[arg(long)]
    pub pie_source: Option<PieSource>,
}

#[derive(Parser, Debug)]
pub struct ViewsArgs {
    /// Input table (defaults to [input].path from the config)
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Focus countries for the trend view (comma-separated, exact names)
    #[arg(long, value_delimiter = ',')]
    pub focus: Option<Vec<String>>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".indicator-report.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
