//! Shared plumbing for the subcommands: config, input, logging, output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::dataset::DatasetLoader;
use crate::error::{ReportError, Result};
use crate::output::{ChartOptions, ColorMode, ErrorOutput};
use crate::pipeline::DerivedViews;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Default log directive for the verbosity flags; `RUST_LOG` takes precedence.
#[must_use]
pub(crate) const fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr diagnostic logger. Safe to call more than once.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load configuration per the global flags.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        tracing::debug!("configuration loading disabled");
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Input path from the command line, else `[input].path`.
///
/// # Errors
/// Returns a config error when neither is set.
pub(crate) fn resolve_input(cli_input: Option<&Path>, config: &Config) -> Result<PathBuf> {
    cli_input
        .map(Path::to_path_buf)
        .or_else(|| config.input.path.clone())
        .ok_or_else(|| {
            ReportError::Config(
                "No input file given. Pass INPUT or set [input].path in the config.".to_string(),
            )
        })
}

/// Override the configured focus countries when `--focus` was given.
pub(crate) fn apply_focus(config: &mut Config, focus: Option<&[String]>) {
    if let Some(countries) = focus {
        config.report.focus_countries = countries
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
    }
}

/// Load the table and run the pipeline.
///
/// # Errors
/// Propagates load and type errors; nothing is derived on failure.
pub(crate) fn derive_views(input: &Path, config: &Config) -> Result<DerivedViews> {
    let loader = DatasetLoader::new().with_delimiter(config.input.delimiter_byte()?);
    let dataset = loader.load(input)?;
    DerivedViews::derive(&dataset, &config.report.pipeline_options())
}

/// Chart settings from the `[report]` section.
#[must_use]
pub(crate) fn chart_options(config: &Config) -> ChartOptions {
    ChartOptions {
        indicator: config.report.indicator.clone(),
        pie_source: config.report.pie_source,
        pie_frames: config.report.pie_frames,
    }
}

/// Print pipeline warnings to stderr unless quiet.
pub(crate) fn report_warnings(views: &DerivedViews, cli: &Cli) {
    if cli.quiet {
        return;
    }
    let out = ErrorOutput::new(color_choice_to_mode(cli.color));
    for warning in &views.warnings {
        out.print_report_warning(warning);
    }
}

/// Write output to a file or stdout.
///
/// File writes happen regardless of `quiet`, which only silences stdout.
///
/// # Errors
/// Returns an error if the parent directory or the file cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), bytes = content.len(), "wrote output");
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
