use crate::cli::{Cli, ViewsArgs};
use crate::error::Result;
use crate::output::{
    ErrorOutput, HtmlFormatter, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter,
};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{
    apply_focus, chart_options, color_choice_to_mode, derive_views, load_config, report_warnings,
    resolve_input, write_output,
};

#[must_use]
pub fn run_views(args: &ViewsArgs, cli: &Cli) -> i32 {
    match run_views_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the derived views as text or JSON (or HTML, same as `report`).
///
/// # Errors
/// Returns an error if configuration, loading, derivation or writing fails.
pub fn run_views_impl(args: &ViewsArgs, cli: &Cli) -> Result<()> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_focus(&mut config, args.focus.as_deref());
    config.validate()?;

    let input = resolve_input(args.input.as_deref(), &config)?;
    let views = derive_views(&input, &config)?;
    report_warnings(&views, cli);

    let content = match args.format {
        OutputFormat::Json => {
            let mut json = JsonFormatter.format(&views)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color))
            .with_indicator(config.report.indicator.clone())
            .format(&views)?,
        OutputFormat::Html => HtmlFormatter::new()
            .with_title(config.report.title.clone())
            .with_chart_options(chart_options(&config))
            .format(&views)?,
    };
    write_output(args.output.as_deref(), &content, cli.quiet)
}

#[cfg(test)]
#[path = "views_tests.rs"]
mod tests;
