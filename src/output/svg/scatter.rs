//! Scatter plot with an optional fitted trendline.

use super::builder::SvgBuilder;
use super::data::XyPoint;
use super::element::{Axis, Line, Marker, SvgElement};
use super::format::format_value;
use super::style::{ChartColor, TextAnchor};

/// Fitted line segment in data coordinates.
#[derive(Debug, Clone, Copy)]
pub struct TrendOverlay {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

#[derive(Debug)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<XyPoint>,
    pub trend: Option<TrendOverlay>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    fn of(points: &[XyPoint]) -> Self {
        let mut b = Self {
            x_min: f64::INFINITY,
            x_max: f64::NEG_INFINITY,
            y_min: f64::INFINITY,
            y_max: f64::NEG_INFINITY,
        };
        for p in points {
            b.x_min = b.x_min.min(p.x);
            b.x_max = b.x_max.max(p.x);
            b.y_min = b.y_min.min(p.y);
            b.y_max = b.y_max.max(p.y);
        }
        // Degenerate ranges get one unit either side
        if b.x_max - b.x_min < f64::EPSILON {
            b.x_min -= 1.0;
            b.x_max += 1.0;
        }
        let y_pad = ((b.y_max - b.y_min) * 0.1).max(1e-9);
        b.y_min -= y_pad;
        b.y_max += y_pad;
        b
    }
}

impl ScatterChart {
    #[must_use]
    pub fn new(title: impl Into<String>, points: Vec<XyPoint>) -> Self {
        Self {
            title: title.into(),
            points,
            trend: None,
            width: 560.0,
            height: 320.0,
            padding: 50.0,
        }
    }

    #[must_use]
    pub const fn with_trend(mut self, start: (f64, f64), end: (f64, f64)) -> Self {
        self.trend = Some(TrendOverlay { start, end });
        self
    }

    /// Five evenly spaced tick labels across `[lo, hi]`; whole numbers print
    /// without decimals so years read naturally.
    fn ticks(lo: f64, hi: f64) -> Vec<(f64, String)> {
        (0..=4)
            .map(|i| {
                let frac = f64::from(i) / 4.0;
                (frac, format_value((hi - lo).mul_add(frac, lo)))
            })
            .collect()
    }
}

impl SvgElement for ScatterChart {
    fn render(&self) -> String {
        let builder = SvgBuilder::new(self.width, self.height).with_title(&self.title);
        if self.points.is_empty() {
            return builder.placeholder("No data for the selected countries").build();
        }

        let b = Bounds::of(&self.points);
        let chart_width = self.padding.mul_add(-2.0, self.width);
        let chart_height = self.padding.mul_add(-2.0, self.height);
        let baseline_y = self.padding + chart_height;
        let x_of = |x: f64| (x - b.x_min) / (b.x_max - b.x_min) * chart_width + self.padding;
        let y_of = |y: f64| baseline_y - (y - b.y_min) / (b.y_max - b.y_min) * chart_height;

        let x_axis = Axis::horizontal(self.padding, baseline_y, chart_width)
            .with_labels(Self::ticks(b.x_min, b.x_max));
        let y_axis = Axis::vertical(self.padding, baseline_y, chart_height)
            .with_labels(Self::ticks(b.y_min, b.y_max));
        let mut builder = builder.push_element(&x_axis).push_element(&y_axis);

        let color = ChartColor::css_var("primary");
        for point in &self.points {
            builder = builder.push_element(&Marker {
                cx: x_of(point.x),
                cy: y_of(point.y),
                radius: 4.0,
                color: color.clone(),
                title: format!("{}: {}", point.label, format_value(point.y)),
            });
        }

        match self.trend {
            Some(trend) => {
                let line = Line::new(
                    vec![
                        (x_of(trend.start.0), y_of(trend.start.1)),
                        (x_of(trend.end.0), y_of(trend.end.1)),
                    ],
                    ChartColor::css_var("accent"),
                )
                .with_dash("6,4");
                builder = builder.push_element(&line);
            }
            None => {
                builder = builder.push_text(
                    (self.width - self.padding, self.padding - 10.0),
                    TextAnchor::End,
                    11.0,
                    &ChartColor::css_var("text-muted"),
                    "Not enough distinct years for a trendline",
                );
            }
        }

        builder.build()
    }
}

#[cfg(test)]
#[path = "scatter_tests.rs"]
mod tests;
