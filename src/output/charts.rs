//! Maps derived views onto the six report charts.

use crate::config::{DEFAULT_INDICATOR, DEFAULT_PIE_FRAMES, PieSource};
use crate::dataset::{Observation, TimePeriod};
use crate::pipeline::DerivedViews;

use super::svg::{
    BarChart, ChoroplethMap, DataPoint, DonutChart, HorizontalBarChart, LineSeries, MapPoint,
    MultiLineChart, ScatterChart, SvgElement, XyPoint,
};

/// Rendering knobs shared by the charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Label for the observed value.
    pub indicator: String,
    pub pie_source: PieSource,
    pub pie_frames: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            indicator: DEFAULT_INDICATOR.to_string(),
            pie_source: PieSource::default(),
            pie_frames: DEFAULT_PIE_FRAMES,
        }
    }
}

/// Rendered SVG for each chart section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCharts {
    pub top_means: String,
    pub top_observations: String,
    pub series: String,
    pub scatter: String,
    pub map: String,
    pub pie: String,
}

impl ReportCharts {
    #[must_use]
    pub fn render(views: &DerivedViews, options: &ChartOptions) -> Self {
        Self {
            top_means: top_means_chart(views, &options.indicator).render(),
            top_observations: top_observations_chart(views, &options.indicator).render(),
            series: series_chart(views, &options.indicator).render(),
            scatter: scatter_chart(views, &options.indicator).render(),
            map: map_chart(views, &options.indicator).render(),
            pie: pie_chart(views, options).render(),
        }
    }
}

/// Bar label for a single observation, e.g. `"Chad 2019 (Male)"`.
#[must_use]
pub fn observation_label(obs: &Observation) -> String {
    format!("{} {} ({})", obs.country, obs.time_period, obs.sex)
}

fn top_means_chart(views: &DerivedViews, indicator: &str) -> HorizontalBarChart {
    let data = views
        .top_means
        .iter()
        .map(|r| DataPoint::new(&r.country, r.mean_obs_value))
        .collect();
    let title = format!("Top {} countries by mean {indicator}", views.top_means.len());
    HorizontalBarChart::new(title, data)
}

fn top_observations_chart(views: &DerivedViews, indicator: &str) -> BarChart {
    let data = views
        .top_observations
        .iter()
        .filter_map(|r| {
            let value = r.observation.obs_value.as_f64()?;
            Some(DataPoint::new(observation_label(&r.observation), value))
        })
        .collect();
    BarChart::new(format!("Highest single {indicator} observations"), data)
}

fn series_chart(views: &DerivedViews, indicator: &str) -> MultiLineChart {
    let mut periods: Vec<&TimePeriod> = views
        .series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| &p.time_period))
        .collect();
    periods.sort();
    periods.dedup();
    let categories = periods.iter().map(ToString::to_string).collect();

    let series = views
        .series
        .iter()
        .map(|s| {
            let points = s
                .points
                .iter()
                .filter_map(|p| {
                    let value = p.obs_value.as_f64()?;
                    Some(DataPoint::new(p.time_period.to_string(), value))
                })
                .collect();
            LineSeries::new(s.label(), points)
        })
        .collect();
    let title = format!("{indicator} over time by country and sex");
    MultiLineChart::new(title, categories, series)
}

fn scatter_chart(views: &DerivedViews, indicator: &str) -> ScatterChart {
    let points = views
        .focus_rows
        .iter()
        .filter_map(|obs| {
            let year = obs.time_period.year()?;
            let value = obs.obs_value.as_f64()?;
            Some(XyPoint::new(f64::from(year), value, observation_label(obs)))
        })
        .collect();
    let chart = ScatterChart::new(
        format!("{indicator} by year for {}", views.focus_countries.join(", ")),
        points,
    );
    match views.trendline {
        Some(trend) => chart.with_trend(
            (trend.x_min, trend.predict(trend.x_min)),
            (trend.x_max, trend.predict(trend.x_max)),
        ),
        None => chart,
    }
}

fn map_chart(views: &DerivedViews, indicator: &str) -> ChoroplethMap {
    let points = views
        .map
        .values
        .iter()
        .map(|v| MapPoint {
            code: v.iso3.to_string(),
            name: v.country.clone(),
            lat: v.lat,
            lon: v.lon,
            value: v.obs_value,
            period: v.time_period.clone(),
        })
        .collect();
    ChoroplethMap::new(format!("Latest {indicator} by country"), points)
}

fn pie_chart(views: &DerivedViews, options: &ChartOptions) -> DonutChart {
    let (title, data) = match options.pie_source {
        PieSource::Top10 => (
            format!("Share of the top {} country means", views.top_means.len()),
            views
                .top_means
                .iter()
                .map(|r| DataPoint::new(&r.country, r.mean_obs_value))
                .collect(),
        ),
        PieSource::Top5 => (
            format!("Share of the top {} observations", views.top_observations.len()),
            views
                .top_observations
                .iter()
                .filter_map(|r| {
                    let value = r.observation.obs_value.as_f64()?;
                    Some(DataPoint::new(observation_label(&r.observation), value))
                })
                .collect(),
        ),
    };
    DonutChart::new(title, data).with_frames(options.pie_frames)
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod tests;
