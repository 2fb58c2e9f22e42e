//! Generated prose for each report section.
//!
//! Every sentence is a pure function of the derived views, so the same
//! input always reads the same way.

use serde::Serialize;

use crate::config::PieSource;
use crate::pipeline::DerivedViews;

use super::charts::ChartOptions;
use super::svg::format_value;

/// One paragraph per report section, plain text (callers escape for HTML).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub summary: String,
    pub top_means: String,
    pub top_observations: String,
    pub series: String,
    pub trend: String,
    pub map: String,
    pub pie: String,
}

impl Narrative {
    #[must_use]
    pub fn build(views: &DerivedViews, options: &ChartOptions) -> Self {
        let indicator = options.indicator.as_str();
        Self {
            summary: summary(views),
            top_means: top_means(views, indicator),
            top_observations: top_observations(views, indicator),
            series: series(views),
            trend: trend(views, indicator),
            map: map(views),
            pie: pie(views, options.pie_source),
        }
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn summary(views: &DerivedViews) -> String {
    let s = &views.summary;
    if s.rows == 0 {
        return "The dataset contains no observations.".to_string();
    }
    let head = format!(
        "The dataset holds {} for {}",
        plural(s.rows, "observation", "observations"),
        plural(s.countries, "country", "countries")
    );
    match (&s.first_period, &s.last_period) {
        (Some(first), Some(last)) if first != last => format!("{head}, covering {first} to {last}."),
        (Some(first), _) => format!("{head}, all in {first}."),
        _ => format!("{head}."),
    }
}

fn top_means(views: &DerivedViews, indicator: &str) -> String {
    let mut ranked = views.top_means.iter();
    let Some(leader) = ranked.next() else {
        return format!("No country has a numeric {indicator} value to rank.");
    };
    let lead = format!(
        "{} has the highest mean {indicator} ({})",
        leader.country,
        format_value(leader.mean_obs_value)
    );
    let text = match ranked.next() {
        Some(second) => format!(
            "{lead}, followed by {} ({}).",
            second.country,
            format_value(second.mean_obs_value)
        ),
        None => format!("{lead}."),
    };
    format!(
        "{text} The ranking covers {} of {} with data.",
        plural(views.top_means.len(), "country", "countries"),
        views.country_means.len()
    )
}

fn top_observations(views: &DerivedViews, indicator: &str) -> String {
    let Some(top) = views.top_observations.first() else {
        return format!("No numeric {indicator} observations are available.");
    };
    let obs = &top.observation;
    let value = obs
        .obs_value
        .as_f64()
        .map_or_else(|| obs.obs_value.to_string(), format_value);
    format!(
        "The highest single observation is {value} for {} ({}) in {}.",
        obs.country, obs.sex, obs.time_period
    )
}

fn series(views: &DerivedViews) -> String {
    if views.series.is_empty() {
        return "No Male or Female series are available to plot.".to_string();
    }
    format!(
        "{} drawn, one per country and sex; rows with other sex values are not plotted.",
        plural(views.series.len(), "series is", "series are")
    )
}

fn trend(views: &DerivedViews, indicator: &str) -> String {
    let countries = views.focus_countries.join(", ");
    match views.trendline {
        Some(t) => {
            let direction = if t.slope > 0.0 {
                "rises"
            } else if t.slope < 0.0 {
                "falls"
            } else {
                "stays flat"
            };
            format!(
                "Across {countries}, {indicator} {direction} by {} per year (R\u{b2} = {}, {}).",
                format_value(t.slope.abs()),
                format_value(t.r_squared),
                plural(t.points, "point", "points")
            )
        }
        None if views.focus_rows.is_empty() => {
            format!("None of {countries} appear in the dataset, so there is nothing to compare.")
        }
        None => format!(
            "The rows for {countries} do not span two distinct years, so no trendline is fitted."
        ),
    }
}

fn map(views: &DerivedViews) -> String {
    let mapped = views.map.values.len();
    let text = format!(
        "{} of {} placed on the map using their latest value.",
        mapped,
        plural(views.latest.len(), "country is", "countries are")
    );
    if views.map.unresolved.is_empty() {
        return text;
    }
    format!(
        "{text} Not matched to a map region: {}.",
        views.map.unresolved.join(", ")
    )
}

fn pie(views: &DerivedViews, source: PieSource) -> String {
    match source {
        PieSource::Top10 => format!(
            "The donut splits the top {} country means. It ranks averages, so it can differ from the chart of single highest observations.",
            views.top_means.len()
        ),
        PieSource::Top5 => format!(
            "The donut splits the top {} single observations.",
            views.top_observations.len()
        ),
    }
}

#[cfg(test)]
#[path = "narrative_tests.rs"]
mod tests;
