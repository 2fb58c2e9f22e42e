//! Composite chart types: ranked bar charts and the multi-series line chart.

use std::fmt::Write;

use super::builder::SvgBuilder;
use super::data::{DataPoint, LineSeries};
use super::element::{Bar, Legend, Line, Marker, SvgElement};
use super::format::{format_value, html_escape, round2};
use super::style::{ChartColor, TextAnchor};

/// Largest positive value, floored so scaling never divides by zero.
fn positive_max<'a>(values: impl Iterator<Item = &'a DataPoint>) -> f64 {
    values.map(|d| d.value).fold(f64::MIN_POSITIVE, f64::max)
}

/// Vertical bar chart with automatic scaling.
#[derive(Debug)]
pub struct BarChart {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub bar_color: ChartColor,
    pub show_values: bool,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            data: Vec::new(),
            width: 480.0,
            height: 260.0,
            padding: 40.0,
            bar_color: ChartColor::css_var("primary"),
            show_values: true,
        }
    }
}

impl BarChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.bar_color = color;
        self
    }
}

impl SvgElement for BarChart {
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn render(&self) -> String {
        let builder = SvgBuilder::new(self.width, self.height).with_title(&self.title);
        if self.data.is_empty() {
            return builder.placeholder("No data available").build();
        }

        let chart_width = self.padding.mul_add(-2.0, self.width);
        let chart_height = self.padding.mul_add(-2.0, self.height);
        let max_value = positive_max(self.data.iter());

        let bar_count = self.data.len();
        let total_gap = chart_width * 0.2;
        let bar_width = (chart_width - total_gap) / bar_count as f64;
        let gap = total_gap / (bar_count + 1) as f64;
        let base_offset = self.padding + gap;

        let mut body = String::new();
        let value_color = ChartColor::css_var("text").to_css();
        let label_color = ChartColor::css_var("text-muted").to_css();
        for (i, point) in self.data.iter().enumerate() {
            let x = (bar_width + gap).mul_add(i as f64, base_offset);
            let bar_height = (point.value.max(0.0) / max_value) * chart_height;
            let y = self.padding + chart_height - bar_height;

            let bar = Bar {
                x,
                y,
                width: bar_width,
                height: bar_height,
                color: point.color.clone().unwrap_or_else(|| self.bar_color.clone()),
                label: point.label.clone(),
                value: point.value,
            };
            let _ = writeln!(body, "{}", bar.render());

            let center = round2(x + bar_width / 2.0);
            if self.show_values {
                let _ = writeln!(
                    body,
                    r#"<text x="{center}" y="{}" text-anchor="middle" fill="{value_color}" font-size="10">{}</text>"#,
                    round2(y - 4.0),
                    format_value(point.value)
                );
            }
            let _ = writeln!(
                body,
                r#"<text x="{center}" y="{}" text-anchor="middle" fill="{label_color}" font-size="10">{}</text>"#,
                self.height - 8.0,
                html_escape(&point.label)
            );
        }

        builder.push_raw(body).build()
    }
}

/// Horizontal bar chart for ranked lists; height grows with the row count.
#[derive(Debug)]
pub struct HorizontalBarChart {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub bar_height: f64,
    pub bar_gap: f64,
    pub bar_color: ChartColor,
    pub show_values: bool,
}

impl Default for HorizontalBarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            data: Vec::new(),
            width: 560.0,
            height: 62.0, // one bar: padding_top + bar_height + bar_gap + padding_bottom
            padding_left: 170.0,
            padding_right: 60.0,
            padding_top: 20.0,
            padding_bottom: 10.0,
            bar_height: 24.0,
            bar_gap: 8.0,
            bar_color: ChartColor::css_var("primary"),
            show_values: true,
        }
    }
}

impl HorizontalBarChart {
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart sizing
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        let defaults = Self::default();
        let data_len = data.len().max(1);
        let height = (defaults.bar_height + defaults.bar_gap).mul_add(
            data_len as f64,
            defaults.padding_top + defaults.padding_bottom,
        );

        Self {
            title: title.into(),
            data,
            height,
            ..defaults
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.bar_color = color;
        self
    }
}

impl SvgElement for HorizontalBarChart {
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn render(&self) -> String {
        let builder = SvgBuilder::new(self.width, self.height).with_title(&self.title);
        if self.data.is_empty() {
            return builder.placeholder("No data available").build();
        }

        let chart_width = self.width - self.padding_left - self.padding_right;
        let max_value = positive_max(self.data.iter());

        let mut body = String::new();
        let label_color = ChartColor::css_var("text").to_css();
        let value_color = ChartColor::css_var("text-muted").to_css();
        for (i, point) in self.data.iter().enumerate() {
            let y = (self.bar_height + self.bar_gap).mul_add(i as f64, self.padding_top);
            let bar_width = (point.value.max(0.0) / max_value) * chart_width;
            let middle = y + self.bar_height / 2.0;

            let bar = Bar {
                x: self.padding_left,
                y,
                width: bar_width,
                height: self.bar_height,
                color: point.color.clone().unwrap_or_else(|| self.bar_color.clone()),
                label: point.label.clone(),
                value: point.value,
            };
            let _ = writeln!(body, "{}", bar.render());

            let _ = writeln!(
                body,
                r#"<text x="{}" y="{middle}" text-anchor="end" fill="{label_color}" font-size="12" dominant-baseline="middle">{}</text>"#,
                self.padding_left - 8.0,
                html_escape(&point.label)
            );

            if self.show_values {
                let _ = writeln!(
                    body,
                    r#"<text x="{}" y="{middle}" text-anchor="start" fill="{value_color}" font-size="11" dominant-baseline="middle">{}</text>"#,
                    round2(self.padding_left + bar_width + 6.0),
                    format_value(point.value)
                );
            }
        }

        builder.push_raw(body).build()
    }
}

/// Multi-series line chart over a shared categorical x axis.
#[derive(Debug)]
pub struct MultiLineChart {
    pub title: String,
    /// Ordered x-axis labels.
    pub categories: Vec<String>,
    pub series: Vec<LineSeries>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Space reserved on the right for the legend.
    pub legend_width: f64,
}

impl MultiLineChart {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        categories: Vec<String>,
        series: Vec<LineSeries>,
    ) -> Self {
        Self {
            title: title.into(),
            categories,
            series,
            width: 720.0,
            height: 320.0,
            padding: 50.0,
            legend_width: 170.0,
        }
    }

    fn value_range(&self) -> (f64, f64) {
        let values = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.value));
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        // Pad the range by 10% and give flat data some height
        let span = (max - min).max(max.abs() * 0.1).max(1e-9);
        (span.mul_add(-0.1, min), span.mul_add(0.1, max))
    }

    fn grid(&self, chart_width: f64, chart_height: f64, (lo, hi): (f64, f64)) -> String {
        let mut output = String::new();
        let grid_color = ChartColor::css_var("border").to_css();
        let label_color = ChartColor::css_var("text-muted").to_css();
        for i in 0..=4 {
            let y = round2((chart_height / 4.0).mul_add(f64::from(i), self.padding));
            let value = (hi - lo).mul_add(-f64::from(i) / 4.0, hi);
            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{grid_color}" stroke-width="1" stroke-dasharray="4,4" opacity="0.5"/>"#,
                self.padding,
                round2(self.padding + chart_width)
            );
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{y}" text-anchor="end" fill="{label_color}" font-size="10" dominant-baseline="middle">{}</text>"#,
                self.padding - 8.0,
                format_value(value)
            );
        }
        output
    }
}

impl SvgElement for MultiLineChart {
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn render(&self) -> String {
        let builder = SvgBuilder::new(self.width, self.height).with_title(&self.title);
        if self.categories.is_empty() || self.series.iter().all(|s| s.points.is_empty()) {
            return builder.placeholder("No series data").build();
        }

        let chart_width = self.width - self.padding * 2.0 - self.legend_width;
        let chart_height = self.padding.mul_add(-2.0, self.height);
        let baseline_y = self.padding + chart_height;
        let (lo, hi) = self.value_range();

        let count = self.categories.len();
        let x_step = if count > 1 { chart_width / (count - 1) as f64 } else { 0.0 };
        let x_of = |i: usize| x_step.mul_add(i as f64, self.padding);
        let y_of = |v: f64| baseline_y - (v - lo) / (hi - lo) * chart_height;

        let mut builder = builder.push_raw(self.grid(chart_width, chart_height, (lo, hi)));

        let label_every = (count / 6).max(1);
        let muted = ChartColor::css_var("text-muted");
        for (i, category) in self.categories.iter().enumerate() {
            if i % label_every == 0 || i == count - 1 {
                builder = builder.push_text(
                    (x_of(i), baseline_y + 16.0),
                    TextAnchor::Middle,
                    9.0,
                    &muted,
                    category,
                );
            }
        }

        let mut legend = Vec::with_capacity(self.series.len());
        for (index, series) in self.series.iter().enumerate() {
            let color = ChartColor::series(index);
            let positions: Vec<(f64, f64, &DataPoint)> = series
                .points
                .iter()
                .filter_map(|p| {
                    let i = self.categories.iter().position(|c| *c == p.label)?;
                    Some((x_of(i), y_of(p.value), p))
                })
                .collect();

            let line = Line::new(positions.iter().map(|(x, y, _)| (*x, *y)).collect(), color.clone());
            builder = builder.push_element(&line);
            for (x, y, point) in &positions {
                builder = builder.push_element(&Marker {
                    cx: *x,
                    cy: *y,
                    radius: 3.0,
                    color: color.clone(),
                    title: format!("{} {}: {}", series.label, point.label, format_value(point.value)),
                });
            }
            legend.push((color, series.label.clone()));
        }

        let legend_x = self.width - self.legend_width + 10.0;
        builder
            .push_element(&Legend::new(legend_x, self.padding, legend))
            .build()
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
