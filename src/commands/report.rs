use crate::cli::{Cli, ReportArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::{ErrorOutput, HtmlFormatter, ReportFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{
    apply_focus, chart_options, color_choice_to_mode, derive_views, load_config, report_warnings,
    resolve_input, write_output,
};

#[must_use]
pub fn run_report(args: &ReportArgs, cli: &Cli) -> i32 {
    match run_report_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub(crate) fn apply_report_overrides(config: &mut Config, args: &ReportArgs) {
    if let Some(title) = &args.title {
        config.report.title.clone_from(title);
    }
    if let Some(source) = args.pie_source {
        config.report.pie_source = source;
    }
    apply_focus(config, args.focus.as_deref());
}

/// Load, derive and render the HTML report.
///
/// # Errors
/// Returns an error if configuration, loading, derivation or writing fails.
/// No document is written on failure.
pub fn run_report_impl(args: &ReportArgs, cli: &Cli) -> Result<()> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_report_overrides(&mut config, args);
    config.validate()?;

    let input = resolve_input(args.input.as_deref(), &config)?;
    let views = derive_views(&input, &config)?;
    report_warnings(&views, cli);

    let html = HtmlFormatter::new()
        .with_title(config.report.title.clone())
        .with_chart_options(chart_options(&config))
        .format(&views)?;

    let output = args.output.as_deref().or(config.report.output.as_deref());
    write_output(output, &html, cli.quiet)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
