//! Chart data model.

use super::style::ChartColor;

/// A single labelled value for bar and pie charts.
#[derive(Debug, Clone)]
pub struct DataPoint {
    /// Label for this data point (shown on axis or tooltip)
    pub label: String,
    /// Numeric value
    pub value: f64,
    /// Optional color override
    pub color: Option<ChartColor>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// One named line in a multi-series chart.
///
/// Each point's label must match one of the chart's x categories; points
/// whose label is unknown are not drawn.
#[derive(Debug, Clone)]
pub struct LineSeries {
    pub label: String,
    pub points: Vec<DataPoint>,
}

impl LineSeries {
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// A point on a numeric x/y plane.
#[derive(Debug, Clone)]
pub struct XyPoint {
    pub x: f64,
    pub y: f64,
    /// Tooltip text.
    pub label: String,
}

impl XyPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
