use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::error::{ReportError, Result};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print_report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Write the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ReportError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# indicator-report configuration file
version = "1"

[input]
# Default input table when none is given on the command line
# path = "data/indicator.csv"

# Field delimiter, a single character ("\t" for tab-separated files)
delimiter = ","

[report]
# Document title
title = "Indicator Report"

# Label for the observed value in chart titles and prose
indicator = "obs_value"

# Size of the ranking over country means (default: 10)
top_n = 10

# Size of the ranking over single observations (default: 5)
top_raw_n = 5

# Countries compared in the scatter/trend view (exact, case-sensitive names)
focus_countries = ["Cameroon", "Ethiopia", "Haiti", "Nigeria"]

# Ranking shown in the rotating donut: "top10" (means) or "top5" (observations)
pie_source = "top10"

# Rotation frames for the donut animation (1-360)
pie_frames = 12

# Default output file for `report`
# output = "report.html"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
