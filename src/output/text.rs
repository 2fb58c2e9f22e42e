use std::fmt::Write;
use std::io::IsTerminal;

use crate::config::DEFAULT_INDICATOR;
use crate::dataset::ObsValue;
use crate::error::Result;
use crate::pipeline::DerivedViews;

use super::charts::observation_label;
use super::svg::format_value;
use super::{ColorMode, ReportFormatter, ansi};

/// Terminal summary of the derived views.
pub struct TextFormatter {
    use_colors: bool,
    indicator: String,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled(std::io::stdout().is_terminal()),
            indicator: DEFAULT_INDICATOR.to_string(),
        }
    }

    #[must_use]
    pub fn with_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.indicator = indicator.into();
        self
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn heading(&self, output: &mut String, text: &str) {
        let _ = writeln!(output, "\n{}", self.paint(ansi::CYAN, text));
    }

    fn write_summary(&self, output: &mut String, views: &DerivedViews) {
        let s = &views.summary;
        let periods = match (&s.first_period, &s.last_period) {
            (Some(first), Some(last)) if first != last => format!("{first} to {last}"),
            (Some(first), _) => first.clone(),
            _ => "none".to_string(),
        };
        let _ = writeln!(
            output,
            "Observations: {}  Countries: {}  Periods: {periods}",
            self.paint(ansi::GREEN, &s.rows.to_string()),
            self.paint(ansi::GREEN, &s.countries.to_string()),
        );
    }

    fn write_rankings(&self, output: &mut String, views: &DerivedViews) {
        self.heading(
            output,
            &format!("Top {} countries by mean {}", views.top_means.len(), self.indicator),
        );
        if views.top_means.is_empty() {
            output.push_str("  (none)\n");
        }
        for r in &views.top_means {
            let _ = writeln!(
                output,
                "  {:>3}. {:<32} {:>10}",
                r.rank,
                r.country,
                format_value(r.mean_obs_value)
            );
        }

        self.heading(
            output,
            &format!("Top {} single observations", views.top_observations.len()),
        );
        if views.top_observations.is_empty() {
            output.push_str("  (none)\n");
        }
        for r in &views.top_observations {
            let _ = writeln!(
                output,
                "  {:>3}. {:<32} {:>10}",
                r.rank,
                observation_label(&r.observation),
                display_value(&r.observation.obs_value)
            );
        }
    }

    fn write_latest(&self, output: &mut String, views: &DerivedViews) {
        self.heading(output, "Latest value per country");
        if views.latest.is_empty() {
            output.push_str("  (none)\n");
        }
        for l in &views.latest {
            let obs = &l.observation;
            let value = display_value(&obs.obs_value);
            let marker = if l.is_ambiguous() { " *" } else { "" };
            let _ = writeln!(
                output,
                "  {:<32} {:<10} {:<8} {:>10}{marker}",
                obs.country, obs.time_period, obs.sex, value
            );
        }
    }

    fn write_trend(&self, output: &mut String, views: &DerivedViews) {
        self.heading(
            output,
            &format!("Focus countries: {}", views.focus_countries.join(", ")),
        );
        let _ = writeln!(output, "  Rows selected: {}", views.focus_rows.len());
        match views.trendline {
            Some(t) => {
                let _ = writeln!(
                    output,
                    "  Trendline: slope {} per year, intercept {}, R\u{b2} {} ({} points)",
                    format_value(t.slope),
                    format_value(t.intercept),
                    format_value(t.r_squared),
                    t.points
                );
            }
            None => output.push_str("  Trendline: not available\n"),
        }
    }

    fn write_coverage(output: &mut String, views: &DerivedViews) {
        let _ = writeln!(
            output,
            "\nSeries: {}  Mapped countries: {} of {}",
            views.series.len(),
            views.map.values.len(),
            views.latest.len()
        );
    }

    fn write_warnings(&self, output: &mut String, views: &DerivedViews) {
        if views.warnings.is_empty() {
            return;
        }
        self.heading(output, "Warnings");
        for warning in &views.warnings {
            let _ = writeln!(output, "  {} {warning}", self.paint(ansi::YELLOW, "⚠"));
        }
    }
}

fn display_value(value: &ObsValue) -> String {
    value.as_f64().map_or_else(|| value.to_string(), format_value)
}

impl ReportFormatter for TextFormatter {
    fn format(&self, views: &DerivedViews) -> Result<String> {
        let mut output = String::new();
        self.write_summary(&mut output, views);
        self.write_rankings(&mut output, views);
        self.write_latest(&mut output, views);
        self.write_trend(&mut output, views);
        Self::write_coverage(&mut output, views);
        self.write_warnings(&mut output, views);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
